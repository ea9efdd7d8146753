/// A device colour used for fills, strokes, and text.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Colour {
    /// DeviceRGB colour; r, g, b range from 0.0 to 1.0
    RGB { r: f32, g: f32, b: f32 },
    /// DeviceGray colour; g ranges from 0.0 to 1.0
    Grey { g: f32 },
}

impl Colour {
    /// Create a new colour in the RGB space. r, g, and b range from 0.0 to 1.0
    pub fn new_rgb(r: f32, g: f32, b: f32) -> Colour {
        Colour::RGB { r, g, b }
    }

    /// Create a new colour in the RGB space. r, g, and b range from 0 to 255
    pub fn new_rgb_bytes(r: u8, g: u8, b: u8) -> Colour {
        Colour::RGB {
            r: r as f32 / 255.0,
            g: g as f32 / 255.0,
            b: b as f32 / 255.0,
        }
    }

    /// Create a new colour from a packed `0xRRGGBB` value, the form brand
    /// palettes are usually specified in
    pub fn new_rgb_hex(rgb: u32) -> Colour {
        Colour::new_rgb_bytes(
            ((rgb >> 16) & 0xff) as u8,
            ((rgb >> 8) & 0xff) as u8,
            (rgb & 0xff) as u8,
        )
    }

    /// Create a new colour in the Gray space, g ranges from 0.0 to 1.0
    pub fn new_grey(g: f32) -> Colour {
        Colour::Grey { g }
    }
}

impl<T: Into<f32>> From<(T, T, T)> for Colour {
    fn from(c: (T, T, T)) -> Self {
        Colour::RGB {
            r: c.0.into(),
            g: c.1.into(),
            b: c.2.into(),
        }
    }
}

/// A list of pre-defined colour constants
pub mod colours {
    use super::*;

    pub const BLACK: Colour = Colour::Grey { g: 0.0 };
    pub const WHITE: Colour = Colour::Grey { g: 1.0 };
    pub const GREY: Colour = Colour::Grey { g: 0.5 };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_decodes_to_rgb_bytes() {
        let c = Colour::new_rgb_hex(0x00a1e0);
        match c {
            Colour::RGB { r, g, b } => {
                assert_eq!(r, 0.0);
                assert_eq!(g, 0xa1 as f32 / 255.0);
                assert_eq!(b, 0xe0 as f32 / 255.0);
            }
            _ => panic!("expected RGB"),
        }
    }
}
