//! The mutable tiling state: one tiling type, its current shape parameters,
//! and everything derived from them.

use crate::{
    coeffs::{make_matrix, make_point},
    fill::FillRegion,
    point::Pt,
    xform::{match_segment, Xform, M_ORIENTS, TSPI_S, TSPI_U},
};
use tessella_data::{tiling_type_data, EdgeShape, TilingTypeData};
use thiserror::Error;
use tracing::trace;

/// A general error arising from driving an [`IsohedralTiling`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TilingError {
    /// The given number is not a canonical type number of the record table.
    #[error("{0} is not a tiling type in the record table.")]
    InvalidTypeId(usize),
    /// A parameter vector of the wrong length was supplied; the tiling is
    /// left unchanged.
    #[error("Expected {expected} shape parameters, got {got}.")]
    InvalidParameterLength {
        /// The type's parameter count.
        expected: usize,
        /// The length actually supplied.
        got: usize,
    },
}

/// One prototile edge as yielded by [`IsohedralTiling::shape`] and
/// [`IsohedralTiling::parts`].
#[derive(Debug, Copy, Clone)]
pub struct EdgeInstance {
    /// Carries the canonical unit edge `(0,0) → (1,0)` onto this edge.
    pub transform: Xform,
    /// The edge-shape slot this edge draws.
    pub id: usize,
    /// The constraint kind of that slot.
    pub shape: EdgeShape,
    /// Whether the canonical traversal runs backwards along this edge.
    pub reversed: bool,
    /// Whether this is the second half of a split S or U edge.
    pub second: bool,
}

/// An isohedral tiling of one of the classified types, with its prototile
/// deformed by the current shape parameters.
///
/// All derived state (vertices, edge transforms, aspects, lattice vectors)
/// is a pure function of the pair (type, parameters): it is recomputed in
/// full on every parameter change, and two instances constructed the same
/// way are identical.
#[derive(Debug)]
pub struct IsohedralTiling {
    ih: usize,
    data: &'static TilingTypeData,
    params: Vec<f64>,
    verts: Vec<Pt>,
    edges: Vec<Xform>,
    reversals: Vec<bool>,
    aspects: Vec<Xform>,
    t1: Pt,
    t2: Pt,
}

impl IsohedralTiling {
    /// Creates a tiling of the given canonical type number with the type's
    /// default parameters.
    pub fn new(ih: usize) -> Result<Self, TilingError> {
        let data = tiling_type_data(ih).ok_or(TilingError::InvalidTypeId(ih))?;
        let mut tiling = IsohedralTiling {
            ih,
            data,
            params: data.default_params.to_vec(),
            verts: vec![],
            edges: vec![],
            reversals: vec![],
            aspects: vec![],
            t1: Pt(0.0, 0.0),
            t2: Pt(0.0, 0.0),
        };
        tiling.recompute();
        Ok(tiling)
    }

    /// Re-initialises in place to the given type, defaults re-applied. On
    /// error the current state is untouched.
    pub fn reset(&mut self, ih: usize) -> Result<(), TilingError> {
        let data = tiling_type_data(ih).ok_or(TilingError::InvalidTypeId(ih))?;
        self.ih = ih;
        self.data = data;
        self.params = data.default_params.to_vec();
        self.recompute();
        Ok(())
    }

    /// The canonical type number this tiling describes.
    pub fn tiling_type(&self) -> usize {
        self.ih
    }

    /// The number of shape parameters of the current type.
    pub fn num_parameters(&self) -> usize {
        self.data.num_params
    }

    /// The current parameter vector.
    pub fn parameters(&self) -> &[f64] {
        &self.params
    }

    /// Replaces the parameter vector and recomputes all derived state.
    ///
    /// The vector must be exactly [`num_parameters`] long. Values are not
    /// range-checked; parameter choices that collapse the lattice are the
    /// caller's to avoid.
    ///
    /// [`num_parameters`]: IsohedralTiling::num_parameters
    pub fn set_parameters(&mut self, params: &[f64]) -> Result<(), TilingError> {
        if params.len() != self.data.num_params {
            return Err(TilingError::InvalidParameterLength {
                expected: self.data.num_params,
                got: params.len(),
            });
        }
        self.params.clear();
        self.params.extend_from_slice(params);
        self.recompute();
        Ok(())
    }

    /// The number of prototile vertices (and edges).
    pub fn num_vertices(&self) -> usize {
        self.data.num_vertices
    }

    /// The number of distinct edge-shape slots.
    pub fn num_edge_shapes(&self) -> usize {
        self.data.num_edge_shapes
    }

    /// The number of aspects.
    pub fn num_aspects(&self) -> usize {
        self.data.num_aspects
    }

    /// The constraint kind of edge-shape slot `idx`.
    pub fn edge_shape(&self, idx: usize) -> EdgeShape {
        self.data.edge_shapes[idx]
    }

    /// Prototile vertex `idx`.
    pub fn vertex(&self, idx: usize) -> Pt {
        self.verts[idx]
    }

    /// All prototile vertices, in order.
    pub fn vertices(&self) -> &[Pt] {
        &self.verts
    }

    /// The transform placing the prototile into aspect `idx`.
    pub fn aspect_transform(&self, idx: usize) -> Xform {
        self.aspects[idx]
    }

    /// The first lattice translation vector.
    pub fn t1(&self) -> Pt {
        self.t1
    }

    /// The second lattice translation vector.
    pub fn t2(&self) -> Pt {
        self.t2
    }

    /// Iterates over the prototile's edges in vertex order, one
    /// [`EdgeInstance`] per edge.
    pub fn shape(&self) -> ShapeIter<'_> {
        ShapeIter {
            tiling: self,
            idx: 0,
        }
    }

    /// Like [`shape`], but S and U edges are split into their two
    /// symmetric halves, each with its own transform.
    ///
    /// [`shape`]: IsohedralTiling::shape
    pub fn parts(&self) -> PartsIter<'_> {
        PartsIter {
            tiling: self,
            idx: 0,
            pending: None,
        }
    }

    /// The colour of the tile at lattice position `(a, b)` in aspect `asp`,
    /// in `0..num_colours` for the type's colour count.
    ///
    /// Colours are assigned consistently with the tiling's symmetry: a base
    /// colour per aspect, then one permutation step per unit of `a` and of
    /// `b`. Both lattice indices may be negative.
    pub fn colour(&self, a: i64, b: i64, asp: usize) -> usize {
        let clrg = self.data.colouring;
        let nc = i64::from(clrg[18]);
        let mt1 = a.rem_euclid(nc);
        let mt2 = b.rem_euclid(nc);
        let mut col = clrg[asp];
        for _ in 0..mt1 {
            col = clrg[12 + col as usize];
        }
        for _ in 0..mt2 {
            col = clrg[15 + col as usize];
        }
        col as usize
    }

    /// The number of colours the type's colouring uses (at most 3).
    pub fn colour_count(&self) -> usize {
        usize::from(self.data.colouring[18])
    }

    /// The lazy sequence of tile placements overlapping the axis-aligned
    /// rectangle `[xmin, xmax] × [ymin, ymax]`.
    pub fn fill_region_bounds(&self, xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> FillRegion<'_> {
        self.fill_region_quad(
            Pt(xmin, ymin),
            Pt(xmax, ymin),
            Pt(xmax, ymax),
            Pt(xmin, ymax),
        )
    }

    /// The lazy sequence of tile placements overlapping the quadrilateral
    /// `a b c d` (given in traversal order).
    pub fn fill_region_quad(&self, a: Pt, b: Pt, c: Pt, d: Pt) -> FillRegion<'_> {
        FillRegion::new(self, [a, b, c, d])
    }

    pub(crate) fn aspects(&self) -> &[Xform] {
        &self.aspects
    }

    fn recompute(&mut self) {
        let data = self.data;
        let ntv = data.num_vertices;
        let k = data.num_params + 1;

        self.verts.clear();
        for idx in 0..ntv {
            self.verts
                .push(make_point(data.vertex_coeffs, idx * 2 * k, &self.params));
        }

        self.reversals.clear();
        self.edges.clear();
        for idx in 0..ntv {
            let fl = data.edge_orientations[2 * idx];
            let ro = data.edge_orientations[2 * idx + 1];
            self.reversals.push(fl != ro);
            self.edges.push(
                match_segment(self.verts[idx], self.verts[(idx + 1) % ntv])
                    .compose(&M_ORIENTS[2 * usize::from(fl) + usize::from(ro)]),
            );
        }

        self.aspects.clear();
        for idx in 0..data.num_aspects {
            self.aspects
                .push(make_matrix(data.aspect_coeffs, 6 * k * idx, &self.params));
        }

        self.t1 = make_point(data.translation_coeffs, 0, &self.params);
        self.t2 = make_point(data.translation_coeffs, 2 * k, &self.params);
        trace!(ih = self.ih, "recomputed prototile");
    }

    fn edge_instance(&self, idx: usize) -> EdgeInstance {
        let id = self.data.edge_shape_ids[idx];
        EdgeInstance {
            transform: self.edges[idx],
            id,
            shape: self.data.edge_shapes[id],
            reversed: self.reversals[idx],
            second: false,
        }
    }
}

impl std::fmt::Display for IsohedralTiling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "IH{:02}", self.ih)
    }
}

/// Iterator over whole prototile edges; see [`IsohedralTiling::shape`].
#[derive(Debug)]
pub struct ShapeIter<'a> {
    tiling: &'a IsohedralTiling,
    idx: usize,
}

impl Iterator for ShapeIter<'_> {
    type Item = EdgeInstance;

    fn next(&mut self) -> Option<EdgeInstance> {
        if self.idx >= self.tiling.num_vertices() {
            return None;
        }
        let instance = self.tiling.edge_instance(self.idx);
        self.idx += 1;
        Some(instance)
    }
}

/// Iterator over prototile edge parts, S and U edges split in two; see
/// [`IsohedralTiling::parts`].
#[derive(Debug)]
pub struct PartsIter<'a> {
    tiling: &'a IsohedralTiling,
    idx: usize,
    pending: Option<EdgeInstance>,
}

impl Iterator for PartsIter<'_> {
    type Item = EdgeInstance;

    fn next(&mut self) -> Option<EdgeInstance> {
        if let Some(second) = self.pending.take() {
            return Some(second);
        }
        if self.idx >= self.tiling.num_vertices() {
            return None;
        }
        let whole = self.tiling.edge_instance(self.idx);
        self.idx += 1;
        match whole.shape {
            EdgeShape::J | EdgeShape::I => Some(whole),
            EdgeShape::U | EdgeShape::S => {
                let halves = match whole.shape {
                    EdgeShape::U => &TSPI_U,
                    _ => &TSPI_S,
                };
                let order: [usize; 2] = if whole.reversed { [1, 0] } else { [0, 1] };
                self.pending = Some(EdgeInstance {
                    transform: whole.transform.compose(&halves[order[1]]),
                    reversed: true,
                    second: true,
                    ..whole
                });
                Some(EdgeInstance {
                    transform: whole.transform.compose(&halves[order[0]]),
                    reversed: false,
                    second: false,
                    ..whole
                })
            }
        }
    }
}
