use derive_more::{Add, AddAssign, Display, Div, From, Into, Mul, MulAssign, Sub, SubAssign};

/// A length in PDF points (1/72 of an inch). All page coordinates and box
/// extents in the crate are expressed in points.
#[derive(
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    PartialOrd,
    Add,
    AddAssign,
    Sub,
    SubAssign,
    Mul,
    MulAssign,
    Div,
    Display,
    From,
    Into,
)]
pub struct Pt(pub f32);

impl std::iter::Sum for Pt {
    fn sum<I: Iterator<Item = Pt>>(iter: I) -> Pt {
        iter.fold(Pt(0.0), |acc, v| acc + v)
    }
}

/// A length in inches, for specifying design constants in the units the
/// brand template was drawn in. Converts to [Pt] at 72 points per inch.
#[derive(Debug, Default, Copy, Clone, PartialEq, PartialOrd)]
pub struct In(pub f32);

impl From<In> for Pt {
    fn from(value: In) -> Pt {
        Pt(value.0 * 72.0)
    }
}

impl From<In> for f32 {
    fn from(value: In) -> f32 {
        value.0 * 72.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn inches_convert_to_points() {
        let pt: Pt = In(0.5).into();
        assert_eq!(pt, Pt(36.0));
    }

    #[test]
    fn point_arithmetic() {
        assert_eq!(Pt(10.0) + Pt(5.0), Pt(15.0));
        assert_eq!(Pt(10.0) - Pt(5.0), Pt(5.0));
        assert_eq!(Pt(10.0) * 2.0, Pt(20.0));
        assert_eq!(Pt(10.0) / 2.0, Pt(5.0));
        assert!(Pt(1.0) < Pt(2.0));
    }
}
