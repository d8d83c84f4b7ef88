//! Sketch frame → engine draw list.
//!
//! Sketch marks are in normalized canvas coordinates and HSBA colors; the
//! draw list wants logical pixels and linear premultiplied colors.

use sandpaint_engine::coords::Viewport;
use sandpaint_engine::paint::Color;
use sandpaint_engine::scene::{DrawList, Stroke};
use sandpaint_sketch::{Hsba, Point, SketchFrame};

/// Engine color for an HSBA value (saturation and brightness in percent).
pub fn to_color(c: Hsba) -> Color {
    Color::from_hsb(c.h, c.s / 100.0, c.b / 100.0, c.a)
}

/// Stroke weight in logical pixels; sketch weights are a fraction of width.
pub fn stroke_px(frame: &SketchFrame, viewport: Viewport) -> f32 {
    (frame.stroke_weight * f64::from(viewport.width)) as f32
}

/// Appends the marks of `frame` to `draw_list`.
///
/// Grains become points one stroke weight across; outlines become triangles
/// with the frame's fill and stroke.
pub fn paint_frame(frame: &SketchFrame, viewport: Viewport, draw_list: &mut DrawList) {
    let stroke = to_color(frame.stroke);
    let weight = stroke_px(frame, viewport);
    let to_px = |p: Point| viewport.denormalize(p.x, p.y);

    draw_list.reserve(frame.grains.len() + frame.outlines.len());

    for &grain in &frame.grains {
        draw_list.push_point(to_px(grain), weight, stroke);
    }

    let fill = frame.fill.map(to_color);
    for tri in &frame.outlines {
        draw_list.push_triangle(
            tri.vertices().map(to_px),
            fill,
            Some(Stroke::new(weight, stroke)),
        );
    }
}
