pub(crate) mod point;
pub(crate) mod triangle;

use crate::paint::Color;

/// Stroke drawn centered on a shape's edges.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Stroke {
    /// Line width in logical pixels.
    pub width: f32,
    pub color: Color,
}

impl Stroke {
    #[inline]
    pub fn new(width: f32, color: Color) -> Self {
        Self { width, color }
    }
}
