//! 2D region kernel used by the outline tracer: closed polylines with arc segments, pairwise
//! unions, round-joined offsets and Minkowski sums with disks.

pub mod offset;
pub mod primitives;
pub mod region;

pub use cavalier_contours::polyline::{PlineVertex, Polyline};
pub use region::Region;
