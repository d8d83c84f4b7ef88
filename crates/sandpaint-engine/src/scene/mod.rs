//! Scene (draw stream) types.
//!
//! - renderer-agnostic draw commands, painted in insertion order
//! - shape-specific payloads and push helpers live under `scene::shapes`

mod cmd;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::DrawList;
pub use shapes::point::PointCmd;
pub use shapes::triangle::TriangleCmd;
pub use shapes::Stroke;
