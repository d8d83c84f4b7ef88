use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

use super::Stroke;

/// Triangle payload: optional fill, optional closed outline.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleCmd {
    pub points: [Vec2; 3],
    pub fill: Option<Color>,
    pub stroke: Option<Stroke>,
}

impl TriangleCmd {
    #[inline]
    pub fn new(points: [Vec2; 3], fill: Option<Color>, stroke: Option<Stroke>) -> Self {
        Self { points, fill, stroke }
    }
}

impl DrawList {
    /// Records a triangle. Nothing is drawn if both `fill` and `stroke` are `None`.
    #[inline]
    pub fn push_triangle(&mut self, points: [Vec2; 3], fill: Option<Color>, stroke: Option<Stroke>) {
        self.push(DrawCmd::Triangle(TriangleCmd::new(points, fill, stroke)));
    }
}
