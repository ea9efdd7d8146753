//! Test double for [Surface](crate::Surface): records draw commands instead
//! of producing PDF content, with synthetic font metrics so no font files
//! are needed.

use crate::colour::Colour;
use crate::font::Face;
use crate::image::Image;
use crate::rect::Rect;
use crate::surface::{Surface, TextStyle};
use crate::units::Pt;
use id_arena::Id;

#[derive(Clone, PartialEq, Debug)]
pub enum Command {
    FillRect {
        rect: Rect,
        colour: Colour,
    },
    StrokeRect {
        rect: Rect,
        colour: Colour,
        line_width: f32,
    },
    StrokeLine {
        from: (Pt, Pt),
        to: (Pt, Pt),
        colour: Colour,
        line_width: f32,
    },
    Text {
        x: Pt,
        y: Pt,
        style: TextStyle,
        text: String,
    },
    Image {
        position: Rect,
        image: Id<Image>,
    },
}

#[derive(Default)]
pub struct RecordingSurface {
    pub commands: Vec<Command>,
}

impl RecordingSurface {
    pub fn new() -> RecordingSurface {
        RecordingSurface::default()
    }
}

impl Surface for RecordingSurface {
    fn fill_rect(&mut self, rect: Rect, colour: Colour) {
        self.commands.push(Command::FillRect { rect, colour });
    }

    fn stroke_rect(&mut self, rect: Rect, colour: Colour, line_width: f32) {
        self.commands.push(Command::StrokeRect {
            rect,
            colour,
            line_width,
        });
    }

    fn stroke_line(&mut self, from: (Pt, Pt), to: (Pt, Pt), colour: Colour, line_width: f32) {
        self.commands.push(Command::StrokeLine {
            from,
            to,
            colour,
            line_width,
        });
    }

    fn draw_text(&mut self, x: Pt, y: Pt, style: &TextStyle, text: &str) {
        if text.is_empty() {
            return;
        }
        self.commands.push(Command::Text {
            x,
            y,
            style: *style,
            text: text.to_string(),
        });
    }

    fn draw_image(&mut self, position: Rect, image: Id<Image>) {
        self.commands.push(Command::Image { position, image });
    }

    // every character advances half the font size, in either face
    fn text_width(&self, text: &str, _face: Face, size: Pt) -> Pt {
        Pt(text.chars().count() as f32 * size.0 * 0.5)
    }
}
