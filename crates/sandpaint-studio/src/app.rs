use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;

use sandpaint_engine::core::{App, AppControl, FrameCtx};
use sandpaint_engine::render::{CanvasLayer, RenderCtx, RenderTarget};
use sandpaint_engine::render::shapes::{PointRenderer, TriangleRenderer};
use sandpaint_engine::scene::DrawList;
use sandpaint_sketch::{Background, PerlinField, Sketch, SketchConfig};

use crate::controls;
use crate::painter;

/// The running sketch plus everything needed to draw it.
///
/// Events are applied at the start of each frame in the order their keys
/// went down; then held keys are sampled, the sketch renders, and its marks
/// are drawn either onto the persistent canvas or straight to the surface.
pub struct StudioApp {
    sketch: Sketch,
    rng: Pcg64,
    noise: PerlinField,

    draw_list: DrawList,
    point_renderer: PointRenderer,
    triangle_renderer: TriangleRenderer,
    canvas: CanvasLayer,
}

impl StudioApp {
    pub fn new(config: SketchConfig, seed: u64) -> Self {
        let mut rng = Pcg64::seed_from_u64(seed);
        let noise = PerlinField::new(rng.r#gen());
        let canvas = CanvasLayer::new(painter::to_color(config.background.color()));

        Self {
            sketch: Sketch::new(config),
            rng,
            noise,
            draw_list: DrawList::new(),
            point_renderer: PointRenderer::new(),
            triangle_renderer: TriangleRenderer::new(),
            canvas,
        }
    }
}

impl App for StudioApp {
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let variant = self.sketch.variant();

        // ── Commands ──────────────────────────────────────────────────────
        if ctx.input_frame.pressed(controls::QUIT) {
            log::info!("{} pressed; closing", controls::QUIT);
            return AppControl::Exit;
        }
        for &key in &ctx.input_frame.keys_pressed {
            if let Some(cmd) = controls::command_for(variant, key) {
                self.sketch.apply(cmd, &mut self.rng);
            }
        }
        self.sketch.tick(controls::held(variant, ctx.input));

        // ── Marks ─────────────────────────────────────────────────────────
        let frame = self
            .sketch
            .render(ctx.time.frame_index, &mut self.rng, &self.noise);

        self.draw_list.clear();
        painter::paint_frame(&frame, ctx.viewport(), &mut self.draw_list);

        // ── Render ────────────────────────────────────────────────────────
        let dl = &self.draw_list;
        let r_p = &mut self.point_renderer;
        let r_t = &mut self.triangle_renderer;
        let draw = |rctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>| {
            r_t.render(rctx, target, dl);
            r_p.render(rctx, target, dl);
        };

        match self.sketch.config().background {
            Background::Persistent(_) => {
                if let Some(clear) = frame.clear {
                    self.canvas.clear(painter::to_color(clear));
                }
                ctx.render_onto(&mut self.canvas, draw)
            }
            Background::EveryFrame(bg) => {
                let clear = frame.clear.map_or_else(|| painter::to_color(bg), painter::to_color);
                ctx.render(clear, draw)
            }
        }
    }
}
