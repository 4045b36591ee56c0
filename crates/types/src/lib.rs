pub mod geometry;
pub mod ids;

pub use geometry::{ClipRect, LayoutBox};
pub use ids::NodeId;
