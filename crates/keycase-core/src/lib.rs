//! Value types shared by the layout builder, the outline tracer and the configuration layer.

pub mod bounds;
pub mod keys;
pub mod margin;
pub mod point;
pub mod rotation;

pub use bounds::Bounds;
pub use keys::{PerKeyThumb, RowLayoutItem, ThumbClusterSpec};
pub use margin::EdgeMargin;
pub use point::{KeyPlacement, Point2D};
