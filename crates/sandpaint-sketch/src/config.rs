use crate::color::{Hsba, PALETTE};
use crate::geometry::Triangle;
use crate::stipple::Stippler;

/// Which of the two sketches is running.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Variant {
    /// Stippled edges accumulating on a persistent canvas; full keyboard set.
    Sand,
    /// Plain triangle outlines redrawn on a fresh background every frame;
    /// subdivide only.
    Outline,
}

/// How a variant treats the canvas between frames.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum Background {
    /// Cleared once at startup (and on reset); marks accumulate.
    Persistent(Hsba),
    /// Cleared before every frame.
    EveryFrame(Hsba),
}

impl Background {
    #[inline]
    pub fn color(self) -> Hsba {
        match self {
            Background::Persistent(c) | Background::EveryFrame(c) => c,
        }
    }
}

/// Hardcoded parameters of one sketch variant.
#[derive(Debug, Clone, PartialEq)]
pub struct SketchConfig {
    pub variant: Variant,
    pub title: &'static str,
    /// Canvas size in logical pixels.
    pub canvas_size: (u32, u32),
    pub default_triangle: Triangle,
    pub background: Background,
    /// Stroke color before any key is pressed.
    pub initial_stroke: Hsba,
    /// Stroke color restored by reset.
    pub reset_stroke: Hsba,
    /// Interior fill for outlined triangles.
    pub fill: Option<Hsba>,
    pub palette: Vec<Hsba>,
    /// Stroke weight as a fraction of canvas width.
    pub stroke_weight: f64,
    /// Per-frame offset while an offset key is held.
    pub offset_step: f64,
    pub stippler: Stippler,
}

impl SketchConfig {
    /// 700×700 sand painting of the triangle `(0.1, 0.1) (0.1, 0.9) (0.9, 0.1)`.
    pub fn sand() -> Self {
        Self {
            variant: Variant::Sand,
            title: "sandpaint",
            canvas_size: (700, 700),
            default_triangle: Triangle::from([[0.1, 0.1], [0.1, 0.9], [0.9, 0.1]]),
            background: Background::Persistent(Hsba::WHITE),
            initial_stroke: Hsba::BLACK,
            reset_stroke: Hsba::BLACK.with_alpha(0.1),
            fill: None,
            palette: PALETTE.to_vec(),
            stroke_weight: 0.001,
            offset_step: 0.001,
            stippler: Stippler::default(),
        }
    }

    /// 400×400 outlines of the triangle `(0.1, 0.1) (0.9, 0.9) (0.9, 0.1)`
    /// on a light grey background.
    pub fn outline() -> Self {
        Self {
            variant: Variant::Outline,
            title: "sandpaint (outline)",
            canvas_size: (400, 400),
            default_triangle: Triangle::from([[0.1, 0.1], [0.9, 0.9], [0.9, 0.1]]),
            background: Background::EveryFrame(Hsba::opaque(0.0, 0.0, 90.0)),
            initial_stroke: Hsba::BLACK,
            reset_stroke: Hsba::BLACK,
            fill: Some(Hsba::WHITE),
            palette: Vec::new(),
            stroke_weight: 0.001,
            offset_step: 0.0,
            stippler: Stippler::default(),
        }
    }

    pub fn for_variant(variant: Variant) -> Self {
        match variant {
            Variant::Sand => Self::sand(),
            Variant::Outline => Self::outline(),
        }
    }
}
