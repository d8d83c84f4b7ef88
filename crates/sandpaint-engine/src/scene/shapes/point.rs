use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

/// Round point payload.
///
/// Drawn as a filled disk whose diameter is the current stroke weight.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PointCmd {
    pub center: Vec2,
    pub diameter: f32,
    pub color: Color,
}

impl PointCmd {
    #[inline]
    pub fn new(center: Vec2, diameter: f32, color: Color) -> Self {
        Self { center, diameter, color }
    }
}

impl DrawList {
    /// Records a point.
    #[inline]
    pub fn push_point(&mut self, center: Vec2, diameter: f32, color: Color) {
        self.push(DrawCmd::Point(PointCmd::new(center, diameter, color)));
    }
}
