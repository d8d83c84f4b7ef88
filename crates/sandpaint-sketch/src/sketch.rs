use rand::Rng;

use crate::color::{stroke_for_digit, Hsba};
use crate::config::{Background, SketchConfig, Variant};
use crate::field::NoiseField;
use crate::geometry::{Point, Triangle};
use crate::offset::offset_all;
use crate::subdivide::subdivide_all;

/// Discrete user command, applied between frames.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Command {
    /// Select the stroke for a digit key (`0` black, `1..=9` palette).
    SelectStroke(u8),
    /// Replace every triangle with its two longest-edge children.
    Subdivide,
    /// Pause or resume painting. The canvas keeps what was already drawn.
    ToggleDrawing,
    /// Back to the default triangle, a cleared canvas and the reset stroke.
    Reset,
}

/// Continuous inputs sampled once per frame.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Held {
    /// Shrink every triangle toward its centroid.
    pub inset: bool,
    /// Grow every triangle away from its centroid.
    pub outset: bool,
}

/// Output of one render step, in normalized canvas coordinates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SketchFrame {
    /// Background to clear to before drawing, if any.
    pub clear: Option<Hsba>,
    pub stroke: Hsba,
    /// Fraction of canvas width.
    pub stroke_weight: f64,
    pub fill: Option<Hsba>,
    /// Stipple grains, drawn as points.
    pub grains: Vec<Point>,
    /// Triangles drawn as plain outlines.
    pub outlines: Vec<Triangle>,
}

impl SketchFrame {
    pub fn is_empty(&self) -> bool {
        self.grains.is_empty() && self.outlines.is_empty()
    }
}

/// Complete sketch state.
///
/// Owned by the frame loop; commands and held inputs mutate it, `render`
/// reads it. Randomness and noise are passed in so every step is reproducible.
#[derive(Debug, Clone)]
pub struct Sketch {
    config: SketchConfig,
    triangles: Vec<Triangle>,
    stroke: Hsba,
    drawing: bool,
    pending_clear: Option<Hsba>,
}

impl Sketch {
    pub fn new(config: SketchConfig) -> Self {
        Self {
            triangles: vec![config.default_triangle],
            stroke: config.initial_stroke,
            drawing: true,
            pending_clear: Some(config.background.color()),
            config,
        }
    }

    #[inline]
    pub fn config(&self) -> &SketchConfig {
        &self.config
    }

    #[inline]
    pub fn variant(&self) -> Variant {
        self.config.variant
    }

    #[inline]
    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    #[inline]
    pub fn stroke(&self) -> Hsba {
        self.stroke
    }

    #[inline]
    pub fn is_drawing(&self) -> bool {
        self.drawing
    }

    /// Applies a discrete command.
    pub fn apply<R: Rng + ?Sized>(&mut self, cmd: Command, rng: &mut R) {
        match cmd {
            Command::SelectStroke(digit) => {
                if let Some(stroke) = stroke_for_digit(digit, &self.config.palette) {
                    log::info!("stroke {digit}: {stroke:?}");
                    self.stroke = stroke;
                }
            }
            Command::Subdivide => {
                self.triangles = subdivide_all(&self.triangles, rng);
                log::info!("subdivided: {} triangles", self.triangles.len());
            }
            Command::ToggleDrawing => {
                self.drawing = !self.drawing;
                log::info!("drawing {}", if self.drawing { "on" } else { "off" });
            }
            Command::Reset => {
                self.triangles = vec![self.config.default_triangle];
                self.drawing = true;
                self.stroke = self.config.reset_stroke;
                self.pending_clear = Some(self.config.background.color());
                log::info!("reset");
            }
        }
    }

    /// Applies the per-frame offset for held inputs. Inset runs before outset.
    pub fn tick(&mut self, held: Held) {
        let step = self.config.offset_step;
        if step == 0.0 {
            return;
        }
        if held.inset {
            self.triangles = offset_all(&self.triangles, step);
        }
        if held.outset {
            self.triangles = offset_all(&self.triangles, -step);
        }
    }

    /// Produces the marks for frame `frame_index`.
    ///
    /// Consumes any pending clear, so a reset clears the canvas exactly once.
    pub fn render<R, N>(&mut self, frame_index: u64, rng: &mut R, noise: &N) -> SketchFrame
    where
        R: Rng + ?Sized,
        N: NoiseField + ?Sized,
    {
        let clear = match self.config.background {
            Background::EveryFrame(c) => Some(c),
            Background::Persistent(_) => self.pending_clear.take(),
        };

        let mut frame = SketchFrame {
            clear,
            stroke: self.stroke,
            stroke_weight: self.config.stroke_weight,
            fill: self.config.fill,
            grains: Vec::new(),
            outlines: Vec::new(),
        };

        if !self.drawing {
            return frame;
        }

        match self.config.variant {
            Variant::Sand => {
                let stippler = &self.config.stippler;
                for tri in &self.triangles {
                    stippler.paint_triangle(tri, frame_index, rng, noise, &mut frame.grains);
                }
                log::trace!("frame {frame_index}: {} grains", frame.grains.len());
            }
            Variant::Outline => {
                frame.outlines.extend_from_slice(&self.triangles);
            }
        }

        frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    use crate::color::PALETTE;

    fn rng() -> Pcg64 {
        Pcg64::seed_from_u64(2023)
    }

    fn flat(_: f64, _: f64, _: f64) -> f64 {
        0.42
    }

    // ── startup ───────────────────────────────────────────────────────────

    #[test]
    fn starts_with_default_triangle_and_clear() {
        let mut s = Sketch::new(SketchConfig::sand());
        assert_eq!(s.triangles(), &[SketchConfig::sand().default_triangle]);
        assert!(s.is_drawing());
        assert_eq!(s.stroke(), Hsba::BLACK);

        let first = s.render(0, &mut rng(), &flat);
        assert_eq!(first.clear, Some(Hsba::WHITE));
        let second = s.render(1, &mut rng(), &flat);
        assert_eq!(second.clear, None);
    }

    // ── commands ──────────────────────────────────────────────────────────

    #[test]
    fn subdivide_doubles() {
        let mut s = Sketch::new(SketchConfig::sand());
        let mut rng = rng();
        for n in [2, 4, 8, 16] {
            s.apply(Command::Subdivide, &mut rng);
            assert_eq!(s.triangles().len(), n);
        }
    }

    #[test]
    fn first_subdivision_splits_default_along_bc() {
        let mut s = Sketch::new(SketchConfig::sand());
        s.apply(Command::Subdivide, &mut rng());

        let [a, b, c] = SketchConfig::sand().default_triangle.vertices();
        let [x, y] = [s.triangles()[0], s.triangles()[1]];
        assert_eq!((x.b(), x.c()), (b, a));
        assert_eq!((y.b(), y.c()), (c, a));
        assert_eq!(x.a(), y.a());
    }

    #[test]
    fn reset_restores_default_at_any_depth() {
        let mut s = Sketch::new(SketchConfig::sand());
        let mut rng = rng();
        for _ in 0..7 {
            s.apply(Command::Subdivide, &mut rng);
        }
        s.apply(Command::ToggleDrawing, &mut rng);
        s.apply(Command::SelectStroke(2), &mut rng);
        s.render(0, &mut rng, &flat);

        s.apply(Command::Reset, &mut rng);
        assert_eq!(s.triangles(), &[SketchConfig::sand().default_triangle]);
        assert!(s.is_drawing());
        assert_eq!(s.stroke(), Hsba::new(0.0, 0.0, 0.0, 0.1));
        assert_eq!(s.render(1, &mut rng, &flat).clear, Some(Hsba::WHITE));
    }

    #[test]
    fn select_stroke_uses_palette() {
        let mut s = Sketch::new(SketchConfig::sand());
        s.apply(Command::SelectStroke(3), &mut rng());
        assert_eq!(s.stroke(), PALETTE[2].with_alpha(0.1));
        s.apply(Command::SelectStroke(0), &mut rng());
        assert_eq!(s.stroke(), Hsba::BLACK.with_alpha(0.1));
    }

    #[test]
    fn toggle_drawing_suppresses_marks() {
        let mut s = Sketch::new(SketchConfig::sand());
        let mut rng = rng();
        assert!(!s.render(0, &mut rng, &flat).is_empty());

        s.apply(Command::ToggleDrawing, &mut rng);
        assert!(s.render(1, &mut rng, &flat).is_empty());

        s.apply(Command::ToggleDrawing, &mut rng);
        assert!(!s.render(2, &mut rng, &flat).is_empty());
    }

    // ── tick ──────────────────────────────────────────────────────────────

    #[test]
    fn held_inset_shrinks_each_frame() {
        let mut s = Sketch::new(SketchConfig::sand());
        let start = s.triangles()[0];
        let held = Held { inset: true, outset: false };
        s.tick(held);
        s.tick(held);
        assert!(s.triangles()[0].signed_area().abs() < start.signed_area().abs());
    }

    #[test]
    fn inset_and_outset_cancel() {
        let mut s = Sketch::new(SketchConfig::sand());
        let start = s.triangles()[0];
        s.tick(Held { inset: true, outset: true });
        assert!(s.triangles()[0].approx_eq(&start, 1e-12));
    }

    #[test]
    fn idle_tick_is_noop() {
        let mut s = Sketch::new(SketchConfig::sand());
        let start = s.triangles().to_vec();
        s.tick(Held::default());
        assert_eq!(s.triangles(), start.as_slice());
    }

    // ── render ────────────────────────────────────────────────────────────

    #[test]
    fn sand_renders_grains_in_current_stroke() {
        let mut s = Sketch::new(SketchConfig::sand());
        let mut rng = rng();
        s.apply(Command::SelectStroke(1), &mut rng);
        let frame = s.render(10, &mut rng, &flat);

        assert!(frame.outlines.is_empty());
        assert_eq!(frame.grains.len(), 400 + 566 + 400);
        assert_eq!(frame.stroke, PALETTE[0].with_alpha(0.1));
        assert_eq!(frame.stroke_weight, 0.001);
    }

    #[test]
    fn outline_renders_every_triangle_with_fresh_background() {
        let mut s = Sketch::new(SketchConfig::outline());
        let mut rng = rng();
        s.apply(Command::Subdivide, &mut rng);
        s.apply(Command::Subdivide, &mut rng);

        for i in 0..3 {
            let frame = s.render(i, &mut rng, &flat);
            assert!(frame.grains.is_empty());
            assert_eq!(frame.outlines, s.triangles());
            assert_eq!(frame.clear, Some(Hsba::opaque(0.0, 0.0, 90.0)));
            assert_eq!(frame.fill, Some(Hsba::WHITE));
        }
    }

    #[test]
    fn outline_ignores_offsets() {
        let mut s = Sketch::new(SketchConfig::outline());
        let start = s.triangles().to_vec();
        s.tick(Held { inset: true, outset: false });
        assert_eq!(s.triangles(), start.as_slice());
    }
}
