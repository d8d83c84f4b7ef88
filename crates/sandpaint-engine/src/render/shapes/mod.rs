//! Shape renderers.

pub(super) mod common;

pub mod point;
pub mod triangle;

pub use point::PointRenderer;
pub use triangle::TriangleRenderer;
