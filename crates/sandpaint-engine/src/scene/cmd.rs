use crate::scene::shapes::point::PointCmd;
use crate::scene::shapes::triangle::TriangleCmd;

/// Renderer-agnostic draw command.
///
/// Extending the scene:
/// - add a shape module under `scene::shapes::*` with its payload and push helper
/// - add a variant here
/// - add a matching renderer under `render::shapes::*`
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Point(PointCmd),
    Triangle(TriangleCmd),
}
