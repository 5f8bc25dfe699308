//! Case outlines: the organic tracer that hugs the key footprints, and the rectangular
//! alternative built from plate dimensions.

mod case;
mod poles;
mod tracer;

pub use case::{case_outlines, CaseOutlines};
pub use poles::{Face, FaceCounts};
pub use tracer::{extreme_pole_counts, trace_outline, OutlineParams, POLE_MARKER_RADIUS};

use thiserror::Error;

#[derive(Debug, Error)]
pub enum OutlineError {
    #[error("key footprint must be positive (got {0})")]
    NonPositiveFootprint(f64),

    #[error("section size must be positive (got {0})")]
    NonPositiveSectionSize(f64),

    #[error("failed to create organic outline: no poles on any face")]
    NoPoles,

    #[error("outline vanished at expansion {expansion}")]
    EmptyOutline { expansion: f64 },

    #[error("outline self-intersects at expansion {expansion}")]
    SelfIntersecting { expansion: f64 },
}
