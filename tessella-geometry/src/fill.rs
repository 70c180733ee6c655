//! Raster enumeration of the tile placements covering a region of the plane.
//!
//! The query region is mapped through the inverse of the lattice basis, which
//! turns "which translates of which aspects touch the region" into scanning
//! integer cells of a quadrilateral. The quadrilateral is cut into at most
//! three horizontally-monotone trapezoids; each is walked row by row, sliding
//! a pair of x intercepts down its two sides.

use crate::{point::Pt, tiling::IsohedralTiling, xform::Xform};
use float_cmp::approx_eq;
use float_ord::FloatOrd;
use itertools::Itertools;
use std::collections::VecDeque;
use tracing::trace;

/// Comparisons on scan bounds tolerate this much slop, so placements whose
/// cell only grazes the query are still emitted.
const EPS: f64 = 1e-7;

/// One placed tile copy.
#[derive(Debug, Copy, Clone)]
pub struct Placement {
    /// World-space transform for this copy: the aspect transform with the
    /// lattice displacement added to its translation column.
    pub transform: Xform,
    /// Lattice index along `t1`.
    pub t1_idx: i64,
    /// Lattice index along `t2`.
    pub t2_idx: i64,
    /// Which aspect this copy is.
    pub aspect: usize,
}

/// A horizontal-edge trapezoid in lattice coordinates, bottom edge `a → b`,
/// top edge `d → c`, queued for scanning.
#[derive(Debug, Copy, Clone)]
struct Trapezoid {
    a: Pt,
    b: Pt,
    c: Pt,
    d: Pt,
    do_top: bool,
}

/// Scan state inside one trapezoid.
#[derive(Debug)]
struct Scan {
    x1: f64,
    dx1: f64,
    x2: f64,
    dx2: f64,
    ymax: f64,
    y: f64,
    x: f64,
    aspect: usize,
}

/// Lazy iterator of the [`Placement`]s covering a query region; returned by
/// [`IsohedralTiling::fill_region_bounds`] and
/// [`IsohedralTiling::fill_region_quad`].
///
/// Placements come out row by row in lattice order: `t2` index, then `t1`
/// index, then aspect, with exactly one placement per aspect per visited
/// cell. Enumeration may be abandoned at any point.
#[derive(Debug)]
pub struct FillRegion<'a> {
    tiling: &'a IsohedralTiling,
    pending: VecDeque<Trapezoid>,
    scan: Option<Scan>,
    // highest row already emitted, so trapezoids sharing a horizontal seam
    // do not repeat it
    last_y: Option<f64>,
}

impl<'a> FillRegion<'a> {
    pub(crate) fn new(tiling: &'a IsohedralTiling, corners: [Pt; 4]) -> FillRegion<'a> {
        let t1 = tiling.t1();
        let t2 = tiling.t2();
        let det = 1.0 / t1.cross(&t2);
        let bc = |p: Pt| {
            Pt(
                t2.y.0 * det * p.x.0 - t2.x.0 * det * p.y.0,
                -t1.y.0 * det * p.x.0 + t1.x.0 * det * p.y.0,
            )
        };

        let mut pts = corners.map(bc);
        if det < 0.0 {
            pts.swap(1, 3);
        }
        trace!(?pts, det, "fill region in lattice coordinates");

        let mut region = FillRegion {
            tiling,
            pending: VecDeque::new(),
            scan: None,
            last_y: None,
        };

        if approx_eq!(f64, pts[0].y.0, pts[1].y.0, epsilon = EPS) {
            region.push_fix_y(pts[0], pts[1], pts[2], pts[3], true);
        } else if approx_eq!(f64, pts[1].y.0, pts[2].y.0, epsilon = EPS) {
            region.push_fix_y(pts[1], pts[2], pts[3], pts[0], true);
        } else {
            // first of ties, so equal-height corners scan the same way every
            // time
            let lowest = pts.iter().position_min_by_key(|p| FloatOrd(p.y.0)).unwrap();
            let bottom = pts[lowest];
            let mut left = pts[(lowest + 1) % 4];
            let top = pts[(lowest + 2) % 4];
            let mut right = pts[(lowest + 3) % 4];
            if left.x.0 > right.x.0 {
                std::mem::swap(&mut left, &mut right);
            }

            if left.y.0 < right.y.0 {
                let r1 = sample_at_height(bottom, right, left.y.0);
                let l2 = sample_at_height(left, top, right.y.0);
                region.push_fix_x(bottom, bottom, r1, left, false);
                region.push_fix_x(left, r1, right, l2, false);
                region.push_fix_x(l2, right, top, top, true);
            } else {
                let l1 = sample_at_height(bottom, left, right.y.0);
                let r2 = sample_at_height(right, top, left.y.0);
                region.push_fix_x(bottom, bottom, right, l1, false);
                region.push_fix_x(l1, right, r2, left, false);
                region.push_fix_x(left, r2, top, top, true);
            }
        }
        region
    }

    /// Queues a trapezoid with its bottom edge running left to right.
    fn push_fix_x(&mut self, a: Pt, b: Pt, c: Pt, d: Pt, do_top: bool) {
        if a.x.0 > b.x.0 {
            self.push(b, a, d, c, do_top);
        } else {
            self.push(a, b, c, d, do_top);
        }
    }

    /// Queues a trapezoid with its rows running bottom to top.
    fn push_fix_y(&mut self, a: Pt, b: Pt, c: Pt, d: Pt, do_top: bool) {
        if a.y.0 > c.y.0 {
            self.push(c, d, a, b, do_top);
        } else {
            self.push(a, b, c, d, do_top);
        }
    }

    fn push(&mut self, a: Pt, b: Pt, c: Pt, d: Pt, do_top: bool) {
        self.pending.push_back(Trapezoid { a, b, c, d, do_top });
    }

    /// Begins scanning the next queued trapezoid.
    fn begin(&self, t: Trapezoid) -> Scan {
        let x1 = t.a.x.0;
        let mut y = t.a.y.0.floor();
        if let Some(last_y) = self.last_y {
            y = y.max(last_y);
        }
        Scan {
            x1,
            dx1: (t.d.x.0 - t.a.x.0) / (t.d.y.0 - t.a.y.0),
            x2: t.b.x.0,
            dx2: (t.c.x.0 - t.b.x.0) / (t.c.y.0 - t.b.y.0),
            ymax: t.c.y.0 + if t.do_top { 1.0 } else { 0.0 },
            y,
            x: x1.floor(),
            aspect: 0,
        }
    }
}

impl Iterator for FillRegion<'_> {
    type Item = Placement;

    fn next(&mut self) -> Option<Placement> {
        loop {
            if self.scan.is_none() {
                let trapezoid = self.pending.pop_front()?;
                self.scan = Some(self.begin(trapezoid));
            }
            let scan = self.scan.as_mut()?;

            if scan.y >= scan.ymax {
                // trapezoid exhausted; remember the seam row
                self.last_y = Some(scan.y);
                self.scan = None;
                continue;
            }
            if scan.x >= scan.x2 + EPS {
                // row exhausted; slide both intercepts one row up
                scan.x1 += scan.dx1;
                scan.x2 += scan.dx2;
                scan.y += 1.0;
                scan.x = scan.x1.floor();
                continue;
            }

            let t1_idx = scan.x.trunc() as i64;
            let t2_idx = scan.y.trunc() as i64;
            let aspect = scan.aspect;

            scan.aspect += 1;
            if scan.aspect == self.tiling.num_aspects() {
                scan.aspect = 0;
                scan.x += 1.0;
            }

            let t1 = self.tiling.t1();
            let t2 = self.tiling.t2();
            let transform = self.tiling.aspects()[aspect].translated(
                t1_idx as f64 * t1.x.0 + t2_idx as f64 * t2.x.0,
                t1_idx as f64 * t1.y.0 + t2_idx as f64 * t2.y.0,
            );
            return Some(Placement {
                transform,
                t1_idx,
                t2_idx,
                aspect,
            });
        }
    }
}

/// The point at height `y` on the segment `p → q`, by linear interpolation.
fn sample_at_height(p: Pt, q: Pt, y: f64) -> Pt {
    let t = (y - p.y.0) / (q.y.0 - p.y.0);
    Pt((1.0 - t) * p.x.0 + t * q.x.0, y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tessella_data::TILING_TYPES;
    use test_case::test_case;

    fn keys(region: FillRegion) -> Vec<(i64, i64, usize)> {
        region.map(|p| (p.t1_idx, p.t2_idx, p.aspect)).collect()
    }

    #[test]
    fn test_unit_query_on_the_translation_hexagon() {
        let t = IsohedralTiling::new(1).unwrap();
        assert_eq!(
            keys(t.fill_region_bounds(0.0, 0.0, 1.0, 1.0)),
            vec![(0, -1, 0), (0, 0, 0), (0, 1, 0)]
        );
    }

    #[test]
    fn test_aspects_emitted_in_order_per_cell() {
        let t = IsohedralTiling::new(4).unwrap();
        let got = keys(t.fill_region_bounds(0.0, 0.0, 1.0, 1.0));
        assert_eq!(
            got,
            vec![
                (0, 0, 0),
                (0, 0, 1),
                (0, 0, 2),
                (0, 0, 3),
                (0, 1, 0),
                (0, 1, 1),
                (0, 1, 2),
                (0, 1, 3),
            ]
        );
    }

    #[test_case(1, 3)]
    #[test_case(4, 8)]
    #[test_case(7, 6)]
    #[test_case(24, 8)]
    #[test_case(41, 4)]
    #[test_case(43, 6)]
    #[test_case(47, 6)]
    #[test_case(62, 8)]
    #[test_case(64, 8)]
    #[test_case(76, 4)]
    #[test_case(77, 36)]
    #[test_case(88, 18)]
    #[test_case(93, 3)]
    fn test_unit_query_counts(ih: usize, want: usize) {
        let t = IsohedralTiling::new(ih).unwrap();
        assert_eq!(t.fill_region_bounds(0.0, 0.0, 1.0, 1.0).count(), want);
    }

    #[test]
    fn test_no_placement_repeats() {
        for ih in TILING_TYPES {
            let t = IsohedralTiling::new(*ih).unwrap();
            let got = keys(t.fill_region_bounds(-2.0, -2.0, 2.0, 2.0));
            let unique: HashSet<_> = got.iter().copied().collect();
            assert_eq!(unique.len(), got.len(), "IH{:02}", ih);
        }
    }

    #[test]
    fn test_fill_is_deterministic() {
        for ih in TILING_TYPES {
            let t = IsohedralTiling::new(*ih).unwrap();
            let a = keys(t.fill_region_bounds(-1.0, -2.0, 3.0, 1.5));
            let b = keys(t.fill_region_bounds(-1.0, -2.0, 3.0, 1.5));
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_transform_matches_lattice_indices() {
        for ih in TILING_TYPES {
            let t = IsohedralTiling::new(*ih).unwrap();
            for p in t.fill_region_bounds(-1.0, -1.0, 1.0, 1.0) {
                let shift = t.t1() * p.t1_idx as f64 + t.t2() * p.t2_idx as f64;
                let want = t
                    .aspect_transform(p.aspect)
                    .translated(shift.x.0, shift.y.0);
                assert_eq!(p.transform, want);
            }
        }
    }

    #[test]
    fn test_unit_query_bounding_boxes_cover_it() {
        for ih in TILING_TYPES {
            let t = IsohedralTiling::new(*ih).unwrap();
            let boxes: Vec<_> = t
                .fill_region_bounds(0.0, 0.0, 1.0, 1.0)
                .map(|p| {
                    let vs: Vec<Pt> = t.vertices().iter().map(|v| p.transform * *v).collect();
                    (
                        vs.iter().map(|v| FloatOrd(v.x.0)).min().unwrap().0,
                        vs.iter().map(|v| FloatOrd(v.y.0)).min().unwrap().0,
                        vs.iter().map(|v| FloatOrd(v.x.0)).max().unwrap().0,
                        vs.iter().map(|v| FloatOrd(v.y.0)).max().unwrap().0,
                    )
                })
                .collect();
            for i in 0..=10 {
                for j in 0..=10 {
                    let (px, py) = (i as f64 / 10.0, j as f64 / 10.0);
                    assert!(
                        boxes
                            .iter()
                            .any(|(x0, y0, x1, y1)| *x0 <= px && px <= *x1 && *y0 <= py && py <= *y1),
                        "IH{:02} leaves ({}, {}) uncovered",
                        ih,
                        px,
                        py
                    );
                }
            }
        }
    }

    #[test]
    fn test_quad_form_matches_bounds_form() {
        let t = IsohedralTiling::new(7).unwrap();
        let via_quad = keys(t.fill_region_quad(
            Pt(-0.5, -0.5),
            Pt(2.0, -0.5),
            Pt(2.0, 1.0),
            Pt(-0.5, 1.0),
        ));
        let via_bounds = keys(t.fill_region_bounds(-0.5, -0.5, 2.0, 1.0));
        assert_eq!(via_quad, via_bounds);
    }

    #[test]
    fn test_skew_quad_query() {
        let t = IsohedralTiling::new(41).unwrap();
        let got = keys(t.fill_region_quad(
            Pt(0.0, 0.0),
            Pt(2.0, 0.5),
            Pt(2.5, 2.0),
            Pt(-0.5, 1.5),
        ));
        assert!(!got.is_empty());
        let unique: HashSet<_> = got.iter().copied().collect();
        assert_eq!(unique.len(), got.len());
    }

    #[test]
    fn test_enumeration_can_stop_early() {
        let t = IsohedralTiling::new(77).unwrap();
        let first: Vec<_> = t
            .fill_region_bounds(-4.0, -4.0, 4.0, 4.0)
            .take(5)
            .map(|p| p.aspect)
            .collect();
        assert_eq!(first, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_rows_are_emitted_upwards() {
        for ih in TILING_TYPES {
            let t = IsohedralTiling::new(*ih).unwrap();
            let rows: Vec<i64> = t
                .fill_region_bounds(-1.5, -1.5, 1.5, 1.5)
                .map(|p| p.t2_idx)
                .collect();
            assert!(rows.windows(2).all(|w| w[0] <= w[1]), "IH{:02}", ih);
        }
    }
}
