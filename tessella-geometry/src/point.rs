//! A 2D point.

use float_ord::FloatOrd;
use std::{
    fmt::Debug,
    ops::{Add, AddAssign, Div, Mul, Sub, SubAssign},
};

/// A point in 2D space.
#[derive(Copy, Clone, PartialOrd, Ord, PartialEq, Eq, Hash)]
pub struct Pt {
    /// The x-coordinate of the point.
    pub x: FloatOrd<f64>,
    /// The y-coordinate of the point.
    pub y: FloatOrd<f64>,
}

impl Debug for Pt {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Pt { x, y } = self;
        write!(f, "Pt({:.10},{:.10})", x.0, y.0)
    }
}

/// An alternate constructor for points.
#[allow(non_snake_case)]
pub fn Pt<T>(x: T, y: T) -> Pt
where
    f64: From<T>,
{
    Pt {
        x: FloatOrd(x.into()),
        y: FloatOrd(y.into()),
    }
}

impl From<(f64, f64)> for Pt {
    fn from((x, y): (f64, f64)) -> Pt {
        Pt(x, y)
    }
}

impl Add<Pt> for Pt {
    type Output = Self;
    fn add(self, rhs: Pt) -> Self::Output {
        Pt(self.x.0 + rhs.x.0, self.y.0 + rhs.y.0)
    }
}
impl AddAssign<Pt> for Pt {
    fn add_assign(&mut self, other: Self) {
        *self = *self + other;
    }
}
impl Sub<Pt> for Pt {
    type Output = Self;
    fn sub(self, rhs: Pt) -> Self::Output {
        Pt(self.x.0 - rhs.x.0, self.y.0 - rhs.y.0)
    }
}
impl SubAssign<Pt> for Pt {
    fn sub_assign(&mut self, other: Self) {
        *self = *self - other;
    }
}
impl Mul<f64> for Pt {
    type Output = Self;
    fn mul(self, rhs: f64) -> Self::Output {
        Pt(self.x.0 * rhs, self.y.0 * rhs)
    }
}
impl Div<f64> for Pt {
    type Output = Self;
    fn div(self, rhs: f64) -> Self::Output {
        Pt(self.x.0 / rhs, self.y.0 / rhs)
    }
}

impl Pt {
    /// Dot product of (origin, self) • (origin, other).
    pub fn dot(&self, other: &Pt) -> f64 {
        (self.x.0 * other.x.0) + (self.y.0 * other.y.0)
    }

    /// Cross product z-component of (origin, self) × (origin, other); twice
    /// the signed area of the triangle the two vectors span.
    pub fn cross(&self, other: &Pt) -> f64 {
        (self.x.0 * other.y.0) - (self.y.0 * other.x.0)
    }

    /// Distance between two points.
    pub fn dist(&self, other: &Pt) -> f64 {
        (self.x.0 - other.x.0).hypot(self.y.0 - other.y.0)
    }

    /// Average of two points.
    pub fn avg(&self, other: &Pt) -> Pt {
        Pt((self.x.0 + other.x.0) / 2.0, (self.y.0 + other.y.0) / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;
    use test_case::test_case;

    #[test]
    fn test_add() {
        assert_eq!(Pt(1, 2) + Pt(3, 4), Pt(4, 6));
    }

    #[test]
    fn test_sub() {
        assert_eq!(Pt(1, 2) - Pt(3, 4), Pt(-2, -2));
    }

    #[test]
    fn test_mul() {
        assert_eq!(Pt(1.0, 2.0) * 2.0, Pt(2.0, 4.0));
    }

    #[test]
    fn test_div() {
        assert_eq!(Pt(1.0, 2.0) / 2.0, Pt(0.5, 1.0));
    }

    #[test]
    fn test_dot() {
        assert_float_eq!(Pt(1.0, 1.0).dot(&Pt(1.0, 0.0)), 1.0, abs <= 0.000_1);
        assert_float_eq!(Pt(7.0, 2.0).dot(&Pt(3.0, 6.0)), 33.0, abs <= 0.000_1);
    }

    #[test_case(Pt(1.0, 0.0), Pt(0.0, 1.0), 1.0; "unit ccw")]
    #[test_case(Pt(0.0, 1.0), Pt(1.0, 0.0), -1.0; "unit cw")]
    #[test_case(Pt(2.0, 0.0), Pt(4.0, 0.0), 0.0; "parallel")]
    fn test_cross(a: Pt, b: Pt, want: f64) {
        assert_float_eq!(a.cross(&b), want, abs <= 0.000_1);
    }

    #[test]
    fn test_dist() {
        assert_float_eq!(Pt(0.0, 0.0).dist(&Pt(3.0, 4.0)), 5.0, abs <= 0.000_1);
    }

    #[test]
    fn test_avg() {
        assert_eq!(Pt(0.0, 0.0).avg(&Pt(1.0, 1.0)), Pt(0.5, 0.5));
    }
}
