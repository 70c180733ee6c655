//! Static descriptions of isohedral tiling types: the per-type record schema
//! and the bundled table of records.
//!
//! Everything in a record is parameterised linearly in the type's shape
//! parameters: a coefficient row holds one coefficient per parameter plus a
//! trailing constant term, so a row for a type with `n` parameters is `n + 1`
//! long. Points consume two rows, affine matrices six.
#![deny(missing_docs)]

mod records;

pub use records::TILING_TYPES;

/// The symmetry constraint an edge curve of a prototile must satisfy.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum EdgeShape {
    /// Any curve; no constraint.
    J,
    /// Must look the same after reflecting across its perpendicular bisector
    /// (like the letter `U`).
    U,
    /// Must look the same after a 180° rotation about its midpoint (like the
    /// letter `S`).
    S,
    /// Must be a straight line.
    I,
}

impl std::fmt::Display for EdgeShape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let c = match self {
            EdgeShape::J => 'J',
            EdgeShape::U => 'U',
            EdgeShape::S => 'S',
            EdgeShape::I => 'I',
        };
        write!(f, "{}", c)
    }
}

/// One immutable tiling-type record.
///
/// The coefficient tables describe the prototile's vertices, the two lattice
/// translation vectors, and the aspect transforms as linear functions of the
/// shape parameters. `colouring` is 21 entries: per-aspect base colours
/// (padded to 12), the three-colour permutation applied per step along `t1`,
/// the one along `t2`, the colour count, and two entries of padding.
#[derive(Debug)]
pub struct TilingTypeData {
    /// Number of client-controllable shape parameters.
    pub num_params: usize,
    /// Number of distinct tile orientations needed to cover the tiling
    /// together with the translation lattice.
    pub num_aspects: usize,
    /// Number of prototile vertices (and edges).
    pub num_vertices: usize,
    /// Number of distinct edge-shape slots.
    pub num_edge_shapes: usize,
    /// The constraint kind of each edge-shape slot.
    pub edge_shapes: &'static [EdgeShape],
    /// For each prototile edge, the slot it draws.
    pub edge_shape_ids: &'static [usize],
    /// Per edge, a (flip, rotate) pair selecting the intrinsic orientation
    /// transform composed onto the edge placement.
    pub edge_orientations: &'static [bool],
    /// Initial parameter vector.
    pub default_params: &'static [f64],
    /// `num_vertices` points of coefficient rows.
    pub vertex_coeffs: &'static [f64],
    /// Two points of coefficient rows: the lattice vectors t1 and t2.
    pub translation_coeffs: &'static [f64],
    /// `num_aspects` affines of coefficient rows.
    pub aspect_coeffs: &'static [f64],
    /// The 21-entry colouring table.
    pub colouring: &'static [u8; 21],
}

/// Looks up the record for a canonical isohedral type number, e.g. `1` for
/// IH01. Returns `None` for numbers outside the bundled table; the valid
/// numbers are exactly the entries of [`TILING_TYPES`].
pub fn tiling_type_data(ih: usize) -> Option<&'static TilingTypeData> {
    records::RECORDS
        .iter()
        .find(|(n, _)| *n == ih)
        .map(|(_, rec)| *rec)
}
