//! A 2×3 affine transform.

use crate::point::Pt;
use std::{fmt::Debug, ops::Mul};

/// An affine map of the plane, stored row-major as `[a, b, c, d, e, f]`
/// representing `(x, y) ↦ (a·x + b·y + c, d·x + e·y + f)`.
#[derive(Copy, Clone, PartialEq)]
pub struct Xform(pub [f64; 6]);

impl Debug for Xform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [a, b, c, d, e, ff] = self.0;
        write!(f, "Xform[{} {} {} / {} {} {}]", a, b, c, d, e, ff)
    }
}

impl Xform {
    /// The identity transform.
    pub const IDENTITY: Xform = Xform([1.0, 0.0, 0.0, 0.0, 1.0, 0.0]);

    /// A pure translation.
    pub fn translate(dx: f64, dy: f64) -> Xform {
        Xform([1.0, 0.0, dx, 0.0, 1.0, dy])
    }

    /// Applies the transform to a point.
    pub fn apply(&self, p: Pt) -> Pt {
        let [a, b, c, d, e, f] = self.0;
        Pt(a * p.x.0 + b * p.y.0 + c, d * p.x.0 + e * p.y.0 + f)
    }

    /// Composes two transforms: the result applies `other` first, then
    /// `self`, treating the implicit third row as `[0, 0, 1]`.
    pub fn compose(&self, other: &Xform) -> Xform {
        let a = self.0;
        let b = other.0;
        Xform([
            a[0] * b[0] + a[1] * b[3],
            a[0] * b[1] + a[1] * b[4],
            a[0] * b[2] + a[1] * b[5] + a[2],
            a[3] * b[0] + a[4] * b[3],
            a[3] * b[1] + a[4] * b[4],
            a[3] * b[2] + a[4] * b[5] + a[5],
        ])
    }

    /// The same transform with `(dx, dy)` added to its translation column.
    pub fn translated(&self, dx: f64, dy: f64) -> Xform {
        let mut m = self.0;
        m[2] += dx;
        m[5] += dy;
        Xform(m)
    }
}

impl Mul<Pt> for Xform {
    type Output = Pt;
    fn mul(self, rhs: Pt) -> Pt {
        self.apply(rhs)
    }
}

impl Mul<Xform> for Xform {
    type Output = Xform;
    fn mul(self, rhs: Xform) -> Xform {
        self.compose(&rhs)
    }
}

/// Returns the transform carrying the canonical unit segment
/// `(0,0) → (1,0)` onto the segment `p → q`, without reflection.
pub fn match_segment(p: Pt, q: Pt) -> Xform {
    Xform([
        q.x.0 - p.x.0,
        p.y.0 - q.y.0,
        p.x.0,
        q.y.0 - p.y.0,
        q.x.0 - p.x.0,
        p.y.0,
    ])
}

/// The four intrinsic edge orientations, indexed by `2·flip + rotate`:
/// identity, half-turn about (0.5, 0), mirror across x = 0.5, and mirror
/// across y = 0.
pub(crate) const M_ORIENTS: [Xform; 4] = [
    Xform([1.0, 0.0, 0.0, 0.0, 1.0, 0.0]),
    Xform([-1.0, 0.0, 1.0, 0.0, -1.0, 0.0]),
    Xform([-1.0, 0.0, 1.0, 0.0, 1.0, 0.0]),
    Xform([1.0, 0.0, 0.0, 0.0, -1.0, 0.0]),
];

/// Half-edge placements for U edges: the first and second half of the
/// canonical edge, each mapped back onto a canonical unit edge.
pub(crate) const TSPI_U: [Xform; 2] = [
    Xform([0.5, 0.0, 0.0, 0.0, 0.5, 0.0]),
    Xform([-0.5, 0.0, 1.0, 0.0, 0.5, 0.0]),
];

/// Half-edge placements for S edges.
pub(crate) const TSPI_S: [Xform; 2] = [
    Xform([0.5, 0.0, 0.0, 0.0, 0.5, 0.0]),
    Xform([-0.5, 0.0, 1.0, 0.0, -0.5, 0.0]),
];

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;
    use test_case::test_case;

    fn assert_pt_eq(got: Pt, want: Pt) {
        assert_float_eq!(got.x.0, want.x.0, abs <= 1e-12);
        assert_float_eq!(got.y.0, want.y.0, abs <= 1e-12);
    }

    #[test]
    fn test_identity() {
        assert_pt_eq(Xform::IDENTITY * Pt(3.0, -2.0), Pt(3.0, -2.0));
    }

    #[test]
    fn test_apply_translation() {
        assert_pt_eq(Xform::translate(2.0, -1.0) * Pt(1.0, 1.0), Pt(3.0, 0.0));
    }

    #[test]
    fn test_compose_order() {
        // compose applies the right operand first
        let shift = Xform::translate(1.0, 0.0);
        let rot90 = Xform([0.0, -1.0, 0.0, 1.0, 0.0, 0.0]);
        assert_pt_eq(rot90.compose(&shift) * Pt(0.0, 0.0), Pt(0.0, 1.0));
        assert_pt_eq(shift.compose(&rot90) * Pt(0.0, 0.0), Pt(1.0, 0.0));
    }

    #[test]
    fn test_mul_operators_agree() {
        let a = Xform([0.0, -1.0, 0.5, 1.0, 0.0, -0.5]);
        let b = Xform::translate(-2.0, 3.0);
        let p = Pt(0.25, -4.0);
        assert_pt_eq((a * b) * p, a * (b * p));
    }

    #[test]
    fn test_translated() {
        let m = Xform([0.0, -1.0, 0.5, 1.0, 0.0, -0.5]).translated(1.0, 2.0);
        assert_float_eq!(m.0[2], 1.5, abs <= 1e-12);
        assert_float_eq!(m.0[5], 1.5, abs <= 1e-12);
    }

    #[test_case(Pt(0.0, 0.0), Pt(1.0, 0.0); "canonical")]
    #[test_case(Pt(2.0, 1.0), Pt(-1.0, 3.0); "skew")]
    #[test_case(Pt(-0.5, -0.5), Pt(-0.5, 4.0); "vertical")]
    fn test_match_segment_endpoints(p: Pt, q: Pt) {
        let m = match_segment(p, q);
        assert_pt_eq(m * Pt(0.0, 0.0), p);
        assert_pt_eq(m * Pt(1.0, 0.0), q);
        // no reflection: the unit normal keeps its side
        assert!(m.0[0] * m.0[4] - m.0[1] * m.0[3] >= 0.0);
    }

    #[test]
    fn test_orient_constants() {
        // ROT swaps the canonical endpoints, FLIP mirrors across x = 0.5,
        // ROFL mirrors across y = 0
        assert_pt_eq(M_ORIENTS[1] * Pt(0.0, 0.0), Pt(1.0, 0.0));
        assert_pt_eq(M_ORIENTS[1] * Pt(1.0, 0.0), Pt(0.0, 0.0));
        assert_pt_eq(M_ORIENTS[2] * Pt(0.0, 1.0), Pt(1.0, 1.0));
        assert_pt_eq(M_ORIENTS[3] * Pt(0.0, 1.0), Pt(0.0, -1.0));
    }

    #[test]
    fn test_half_edges_meet_at_midpoint() {
        for tspi in [&TSPI_U, &TSPI_S] {
            assert_pt_eq(tspi[0] * Pt(1.0, 0.0), Pt(0.5, 0.0));
            assert_pt_eq(tspi[1] * Pt(1.0, 0.0), Pt(0.5, 0.0));
            assert_pt_eq(tspi[1] * Pt(0.0, 0.0), Pt(1.0, 0.0));
        }
    }
}
