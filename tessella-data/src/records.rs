//! The bundled tiling-type records.
//!
//! Coefficient tables follow the row convention documented on
//! [`TilingTypeData`]: one row per output scalar, `num_params` coefficients
//! then the constant term. Aspect 0 of every record is the identity, so the
//! prototile itself is the aspect-0 tile of the origin cell.

use crate::{EdgeShape, TilingTypeData};

/// Canonical isohedral type numbers of the bundled records, ascending.
pub static TILING_TYPES: &[usize] = &[1, 4, 7, 24, 41, 43, 47, 62, 64, 76, 77, 88, 93];

/// IH01: a four-parameter hexagon tiling by translation alone (group p1).
/// Opposite edges are translated copies; all three edge slots are free
/// curves.
const IH01: TilingTypeData = TilingTypeData {
    num_params: 4,
    num_aspects: 1,
    num_vertices: 6,
    num_edge_shapes: 3,
    edge_shapes: &[EdgeShape::J, EdgeShape::J, EdgeShape::J],
    edge_shape_ids: &[0, 1, 2, 0, 1, 2],
    edge_orientations: &[false, false, false, false, false, false, false, true, false, true, false, true],
    default_params: &[0.3, 0.6, -0.7, 0.5],
    vertex_coeffs: &[
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
        1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 1.0, 0.0,
        1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0,
    ],
    translation_coeffs: &[
        1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 1.0, 0.0, 1.0, 0.0,
    ],
    aspect_coeffs: &[
        0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0,
        0.0, 0.0,
    ],
    colouring: &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 2, 0, 1, 3, 0, 0],
};

/// IH04: a hexagon tiling built from two perpendicular glides (group pgg);
/// four aspects, two glide-paired free slots and two half-turn edges.
const IH04: TilingTypeData = TilingTypeData {
    num_params: 2,
    num_aspects: 4,
    num_vertices: 6,
    num_edge_shapes: 4,
    edge_shapes: &[EdgeShape::J, EdgeShape::J, EdgeShape::S, EdgeShape::S],
    edge_shape_ids: &[2, 0, 1, 3, 0, 1],
    edge_orientations: &[false, false, false, false, false, false, false, false, true, true, true, true],
    default_params: &[-0.2, 0.15],
    vertex_coeffs: &[
        0.0, 0.0, 0.0, 0.0, 0.0, -0.5, 0.0, 0.0, 1.0, 0.0, 0.0, -0.5, 1.0, 0.0,
        1.0, 0.0, -1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.5, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.5, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0,
    ],
    translation_coeffs: &[
        0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 2.0,
    ],
    aspect_coeffs: &[
        0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
        1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0,
        -1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0,
        0.0, 1.0,
    ],
    colouring: &[0, 1, 0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 2, 1, 0, 2, 2, 0, 0],
};

/// IH07: a hexagon with 120° rotation centres at alternating vertices
/// (group p3); three aspects, adjacent edges paired by the rotations.
const IH07: TilingTypeData = TilingTypeData {
    num_params: 2,
    num_aspects: 3,
    num_vertices: 6,
    num_edge_shapes: 3,
    edge_shapes: &[EdgeShape::J, EdgeShape::J, EdgeShape::J],
    edge_shape_ids: &[0, 1, 1, 2, 2, 0],
    edge_orientations: &[false, false, false, false, false, true, false, false, false, true, false, true],
    default_params: &[0.45, 0.25],
    vertex_coeffs: &[
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0,
        1.0, 0.0, 0.0, 0.0, -0.5, -0.8660254037844387, 1.5, 0.8660254037844387,
        -0.5, -0.8660254037844387, 0.0, 0.0, 0.5, 0.0, 0.0,
        -0.8660254037844386, -0.5, 0.8660254037844384, 0.0,
        -0.8660254037844384, -0.5, 0.0,
    ],
    translation_coeffs: &[
        0.0, 0.0, 1.5, 0.0, 0.0, -0.8660254037844387, 0.0, 0.0, 0.0, 0.0, 0.0,
        1.732050807568877,
    ],
    aspect_coeffs: &[
        0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
        1.0, 0.0, 0.0, 0.0, 0.0, 0.0, -0.5, 0.0, 0.0, -0.8660254037844387, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.8660254037844387, 0.0, 0.0, -0.5, 0.0, 0.0,
        -1.732050807568877, 0.0, 0.0, -0.5, 0.0, 0.0, 0.8660254037844384, 0.0,
        0.0, 1.5, 0.0, 0.0, -0.8660254037844384, 0.0, 0.0, -0.5, 0.0, 0.0,
        -0.8660254037844387,
    ],
    colouring: &[0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2, 3, 0, 0],
};

/// IH24: the "house" pentagon (group p2): rows of houses interlocking
/// with upside-down copies through half-turns at three edge midpoints.
const IH24: TilingTypeData = TilingTypeData {
    num_params: 3,
    num_aspects: 2,
    num_vertices: 5,
    num_edge_shapes: 4,
    edge_shapes: &[EdgeShape::J, EdgeShape::S, EdgeShape::S, EdgeShape::S],
    edge_shape_ids: &[1, 0, 2, 3, 0],
    edge_orientations: &[false, false, false, false, false, false, false, false, false, true],
    default_params: &[0.5, 1.5, 1.0],
    vertex_coeffs: &[
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0,
    ],
    translation_coeffs: &[
        0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
        1.0, 0.0,
    ],
    aspect_coeffs: &[
        0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0,
        0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, -1.0, 0.0, 1.0, 1.0, 0.0,
    ],
    colouring: &[0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 2, 1, 0, 2, 2, 0, 0],
};

/// IH41: the parallelogram tiling by translation alone (group p1).
const IH41: TilingTypeData = TilingTypeData {
    num_params: 2,
    num_aspects: 1,
    num_vertices: 4,
    num_edge_shapes: 2,
    edge_shapes: &[EdgeShape::J, EdgeShape::J],
    edge_shape_ids: &[0, 1, 0, 1],
    edge_orientations: &[false, false, false, false, false, true, false, true],
    default_params: &[0.2, 1.0],
    vertex_coeffs: &[
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0,
        1.0, 0.0, 1.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0,
    ],
    translation_coeffs: &[
        0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0,
    ],
    aspect_coeffs: &[
        0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
        1.0, 0.0, 0.0, 0.0,
    ],
    colouring: &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2, 1, 0, 0],
};

/// IH43: the glide-reflected brick (group pg): columns of bricks, every
/// other column flipped by the glide.
const IH43: TilingTypeData = TilingTypeData {
    num_params: 1,
    num_aspects: 2,
    num_vertices: 4,
    num_edge_shapes: 2,
    edge_shapes: &[EdgeShape::J, EdgeShape::J],
    edge_shape_ids: &[0, 1, 0, 1],
    edge_orientations: &[false, false, false, false, false, true, true, true],
    default_params: &[0.7],
    vertex_coeffs: &[
        0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0,
        1.0, 0.0,
    ],
    translation_coeffs: &[
        0.0, 2.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0,
    ],
    aspect_coeffs: &[
        0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0,
        0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, -1.0, 1.0, 0.0,
    ],
    colouring: &[0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 2, 0, 1, 2, 2, 0, 0],
};

/// IH47: an arbitrary quadrilateral tiling by half-turns about all four
/// edge midpoints (group p2).
const IH47: TilingTypeData = TilingTypeData {
    num_params: 4,
    num_aspects: 2,
    num_vertices: 4,
    num_edge_shapes: 4,
    edge_shapes: &[EdgeShape::S, EdgeShape::S, EdgeShape::S, EdgeShape::S],
    edge_shape_ids: &[0, 1, 2, 3],
    edge_orientations: &[false, false, false, false, false, false, false, false],
    default_params: &[1.3, 1.0, 0.2, 1.1],
    vertex_coeffs: &[
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
        1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0,
    ],
    translation_coeffs: &[
        1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0,
        -1.0, 0.0, 0.0, 0.0, 1.0, 0.0,
    ],
    aspect_coeffs: &[
        0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0,
        1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 0.0,
        1.0, 0.0, 1.0, 0.0,
    ],
    colouring: &[0, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 2, 1, 0, 2, 2, 0, 0],
};

/// IH62: the windmill square (group p4): quarter-turns about alternating
/// corners place four aspects per cell.
const IH62: TilingTypeData = TilingTypeData {
    num_params: 0,
    num_aspects: 4,
    num_vertices: 4,
    num_edge_shapes: 2,
    edge_shapes: &[EdgeShape::J, EdgeShape::J],
    edge_shape_ids: &[0, 1, 1, 0],
    edge_orientations: &[false, false, false, false, false, true, false, true],
    default_params: &[],
    vertex_coeffs: &[
        0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0,
    ],
    translation_coeffs: &[
        2.0, 0.0, 0.0, 2.0,
    ],
    aspect_coeffs: &[
        1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, -1.0, 2.0, 1.0, 0.0, 0.0, -1.0, 0.0,
        2.0, 0.0, -1.0, 2.0, 0.0, 1.0, 0.0, -1.0, 0.0, 2.0,
    ],
    colouring: &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2, 1, 0, 0],
};

/// IH64: a rectangle with mirrors along every edge line (group pmm); all
/// four edges are straight.
const IH64: TilingTypeData = TilingTypeData {
    num_params: 1,
    num_aspects: 4,
    num_vertices: 4,
    num_edge_shapes: 4,
    edge_shapes: &[EdgeShape::I, EdgeShape::I, EdgeShape::I, EdgeShape::I],
    edge_shape_ids: &[0, 1, 2, 3],
    edge_orientations: &[false, false, false, false, false, false, false, false],
    default_params: &[0.65],
    vertex_coeffs: &[
        0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0,
        1.0, 0.0,
    ],
    translation_coeffs: &[
        0.0, 2.0, 0.0, 0.0, 0.0, 0.0, 2.0, 0.0,
    ],
    aspect_coeffs: &[
        0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, -1.0,
        0.0, 0.0, 0.0, 2.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 0.0, 0.0, -1.0, 2.0, 0.0, 0.0, -1.0, 0.0, 0.0, 0.0, 2.0,
        0.0, 0.0, 0.0, -1.0, 2.0, 0.0,
    ],
    colouring: &[0, 1, 1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2, 2, 0, 0],
};

/// IH76: the unit square grid with a single mirror-symmetric edge class
/// shared by all four sides.
const IH76: TilingTypeData = TilingTypeData {
    num_params: 0,
    num_aspects: 1,
    num_vertices: 4,
    num_edge_shapes: 1,
    edge_shapes: &[EdgeShape::U],
    edge_shape_ids: &[0, 0, 0, 0],
    edge_orientations: &[false, false, false, false, false, true, false, true],
    default_params: &[],
    vertex_coeffs: &[
        0.0, 0.0, 1.0, 0.0, 1.0, 1.0, 0.0, 1.0,
    ],
    translation_coeffs: &[
        1.0, 0.0, 0.0, 1.0,
    ],
    aspect_coeffs: &[
        1.0, 0.0, 0.0, 0.0, 1.0, 0.0,
    ],
    colouring: &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 2, 1, 0, 2, 2, 0, 0],
};

/// IH77: the kisrhombille 30-60-90 triangle (group p6m); twelve aspects,
/// every edge on a mirror line.
const IH77: TilingTypeData = TilingTypeData {
    num_params: 0,
    num_aspects: 12,
    num_vertices: 3,
    num_edge_shapes: 3,
    edge_shapes: &[EdgeShape::I, EdgeShape::I, EdgeShape::I],
    edge_shape_ids: &[0, 1, 2],
    edge_orientations: &[false, false, false, false, false, false],
    default_params: &[],
    vertex_coeffs: &[
        0.0, 0.0, 1.0, 0.0, 0.75, 0.4330127018922193,
    ],
    translation_coeffs: &[
        1.5, 0.8660254037844386, 0.0, 1.7320508075688772,
    ],
    aspect_coeffs: &[
        1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.5, -0.8660254037844386, 0.0,
        0.8660254037844386, 0.5, 0.0, -0.5, -0.8660254037844387, 1.5,
        0.8660254037844387, -0.5, 0.8660254037844386, -1.0, 0.0, 1.5, 0.0,
        -1.0, 0.8660254037844386, -0.5, 0.8660254037844384, 1.5,
        -0.8660254037844384, -0.5, 2.598076211353316, 0.5, 0.8660254037844386,
        0.0, -0.8660254037844386, 0.5, 1.7320508075688772, 1.0, 0.0, 0.0, 0.0,
        -1.0, 1.7320508075688772, 0.5, 0.8660254037844386, 0.0,
        0.8660254037844386, -0.5, 0.0, -0.5, 0.8660254037844387, 1.5,
        0.8660254037844387, 0.5, 0.8660254037844386, -1.0, 0.0, 1.5, 0.0, 1.0,
        0.8660254037844386, -0.5, -0.8660254037844384, 1.5,
        -0.8660254037844384, 0.5, 2.598076211353316, 0.5, -0.8660254037844386,
        0.0, -0.8660254037844386, -0.5, 1.7320508075688772,
    ],
    colouring: &[0, 1, 0, 1, 0, 1, 1, 0, 1, 0, 1, 0, 0, 1, 2, 0, 1, 2, 2, 0, 0],
};

/// IH88: an equilateral triangle fanned about a six-fold centre (group
/// p6); the outer edge carries a half-turn.
const IH88: TilingTypeData = TilingTypeData {
    num_params: 0,
    num_aspects: 6,
    num_vertices: 3,
    num_edge_shapes: 2,
    edge_shapes: &[EdgeShape::J, EdgeShape::S],
    edge_shape_ids: &[0, 1, 0],
    edge_orientations: &[false, false, false, false, false, true],
    default_params: &[],
    vertex_coeffs: &[
        0.0, 0.0, 1.0, 0.0, 0.5, 0.8660254037844386,
    ],
    translation_coeffs: &[
        1.5, 0.8660254037844386, 0.0, 1.7320508075688772,
    ],
    aspect_coeffs: &[
        1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.5, -0.8660254037844386, 0.0,
        0.8660254037844386, 0.5, 0.0, -0.5, -0.8660254037844387, 1.5,
        0.8660254037844387, -0.5, 0.8660254037844386, -1.0, 0.0, 1.5, 0.0,
        -1.0, 0.8660254037844386, -0.5, 0.8660254037844384, 1.5,
        -0.8660254037844384, -0.5, 2.598076211353316, 0.5, 0.8660254037844386,
        0.0, -0.8660254037844386, 0.5, 1.7320508075688772,
    ],
    colouring: &[0, 1, 2, 0, 1, 2, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 1, 2, 3, 0, 0],
};

/// IH93: the regular hexagon of the honeycomb, placed by translation
/// alone; straight edges.
const IH93: TilingTypeData = TilingTypeData {
    num_params: 0,
    num_aspects: 1,
    num_vertices: 6,
    num_edge_shapes: 1,
    edge_shapes: &[EdgeShape::I],
    edge_shape_ids: &[0, 0, 0, 0, 0, 0],
    edge_orientations: &[false, false, false, false, false, false, false, false, false, false, false, false],
    default_params: &[],
    vertex_coeffs: &[
        0.0, 0.0, 1.0, 0.0, 1.5, 0.8660254037844386, 1.0, 1.7320508075688772,
        0.0, 1.7320508075688772, -0.5, 0.8660254037844386,
    ],
    translation_coeffs: &[
        1.5, 0.8660254037844386, 0.0, 1.7320508075688772,
    ],
    aspect_coeffs: &[
        1.0, 0.0, 0.0, 0.0, 1.0, 0.0,
    ],
    colouring: &[0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 2, 0, 2, 0, 1, 3, 0, 0],
};

pub(crate) static RECORDS: [(usize, &TilingTypeData); 13] = [
    (1, &IH01),
    (4, &IH04),
    (7, &IH07),
    (24, &IH24),
    (41, &IH41),
    (43, &IH43),
    (47, &IH47),
    (62, &IH62),
    (64, &IH64),
    (76, &IH76),
    (77, &IH77),
    (88, &IH88),
    (93, &IH93),
];
