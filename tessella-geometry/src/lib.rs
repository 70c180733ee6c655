#![deny(missing_docs)]

//! The isohedral tiling engine: prototile geometry, tile placement, and
//! colouring for the Grünbaum–Shephard tiling types.
//!
//! Construct an [`IsohedralTiling`] from one of the canonical type numbers in
//! [`TILING_TYPES`], optionally deform it through
//! [`IsohedralTiling::set_parameters`], then walk
//! [`IsohedralTiling::fill_region_bounds`] for the placements covering a
//! rectangle. Each [`Placement`] carries the world-space transform of one
//! tile copy; [`IsohedralTiling::shape`] and [`IsohedralTiling::parts`]
//! enumerate the prototile's edges for drawing through that transform.

pub mod fill;
pub mod point;
pub mod tiling;
pub mod xform;

mod coeffs;

pub use crate::{
    fill::{FillRegion, Placement},
    point::Pt,
    tiling::{EdgeInstance, IsohedralTiling, TilingError},
    xform::{match_segment, Xform},
};
pub use tessella_data::{EdgeShape, TilingTypeData, TILING_TYPES};
