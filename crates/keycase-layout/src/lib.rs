//! Key placement: matrix rows, thumb cluster, global rotation, split mirroring and final
//! anchoring, plus the plate dimensions derived from the placed keys.

mod builder;
mod plate;

pub use builder::{
    anchor_to, build_layout, matrix_keys, mirror_halves, rotate_all, thumb_anchor, thumb_keys,
    Halves, LayoutSpec,
};
pub use plate::{plate_dimensions, KeyLayout, PlateDimensions};

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("row layout is empty; at least one row is required")]
    EmptyRowLayout,

    #[error("key pitch must be positive (got {0})")]
    NonPositivePitch(f64),

    #[error("key footprint must be positive (got {0})")]
    NonPositiveFootprint(f64),

    #[error("no key placements to measure")]
    NoPlacements,
}
