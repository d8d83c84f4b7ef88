use bytemuck::{Pod, Zeroable};

use crate::coords::Vec2;
use crate::render::{RenderCtx, RenderTarget};
use crate::scene::{DrawCmd, DrawList, TriangleCmd};

use super::common::{
    ViewportUniform, grown_capacity, premul_alpha_blend, triangle_list_primitive,
    viewport_bind_group_layout,
};

/// Renderer for `DrawCmd::Triangle`.
///
/// Triangles are tessellated on the CPU into one colored mesh per frame: the
/// fill first, then one quad per edge for the stroke. Edge quads are extended
/// by half the stroke width at both ends so corners close.
///
/// Strokes thinner than one physical pixel are widened to a pixel and faded
/// by the same factor, which keeps hairlines from dropping out.
#[derive(Default)]
pub struct TriangleRenderer {
    pipeline_format: Option<wgpu::TextureFormat>,
    pipeline: Option<wgpu::RenderPipeline>,

    bind_group_layout: Option<wgpu::BindGroupLayout>,
    bind_group: Option<wgpu::BindGroup>,
    viewport_ubo: Option<wgpu::Buffer>,

    vbo: Option<wgpu::Buffer>,
    vbo_capacity: usize,

    vertices: Vec<MeshVertex>,
}

impl TriangleRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn render(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>, draw_list: &DrawList) {
        self.vertices.clear();
        for cmd in draw_list.iter() {
            if let DrawCmd::Triangle(tri) = cmd {
                tessellate(tri, ctx.scale_factor, &mut self.vertices);
            }
        }

        if self.vertices.is_empty() {
            return;
        }

        self.ensure_pipeline(ctx);
        self.ensure_bindings(ctx);
        self.write_viewport_uniform(ctx);
        self.ensure_vertex_capacity(ctx, self.vertices.len());

        let Some(vbo) = self.vbo.as_ref() else { return };
        ctx.queue.write_buffer(vbo, 0, bytemuck::cast_slice(&self.vertices));

        let Some(pipeline) = self.pipeline.as_ref() else { return };
        let Some(bind_group) = self.bind_group.as_ref() else { return };

        let mut rpass = target.load_pass("sandpaint triangle pass");
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.set_vertex_buffer(0, vbo.slice(..));
        rpass.draw(0..self.vertices.len() as u32, 0..1);
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.pipeline_format == Some(ctx.surface_format) && self.pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("sandpaint triangle shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/triangle.wgsl").into()),
        });

        let bind_group_layout = viewport_bind_group_layout(ctx.device, "sandpaint triangle bgl");

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("sandpaint triangle pipeline layout"),
            bind_group_layouts: &[&bind_group_layout],
            immediate_size: 0,
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("sandpaint triangle pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[MeshVertex::layout()],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: Some(premul_alpha_blend()),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: triangle_list_primitive(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        log::debug!("triangle pipeline built for {:?}", ctx.surface_format);

        self.pipeline_format = Some(ctx.surface_format);
        self.pipeline = Some(pipeline);
        self.bind_group_layout = Some(bind_group_layout);
        self.bind_group = None;
        self.viewport_ubo = None;
    }

    fn ensure_bindings(&mut self, ctx: &RenderCtx<'_>) {
        if self.bind_group.is_some() && self.viewport_ubo.is_some() {
            return;
        }
        let Some(bgl) = self.bind_group_layout.as_ref() else { return };

        let viewport_ubo = ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("sandpaint triangle viewport ubo"),
            size: std::mem::size_of::<ViewportUniform>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });

        let bind_group = ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("sandpaint triangle bind group"),
            layout: bgl,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: viewport_ubo.as_entire_binding(),
            }],
        });

        self.viewport_ubo = Some(viewport_ubo);
        self.bind_group = Some(bind_group);
    }

    fn write_viewport_uniform(&mut self, ctx: &RenderCtx<'_>) {
        let Some(ubo) = self.viewport_ubo.as_ref() else { return };
        let uniform = ViewportUniform::new(ctx.viewport, ctx.scale_factor);
        ctx.queue.write_buffer(ubo, 0, bytemuck::bytes_of(&uniform));
    }

    fn ensure_vertex_capacity(&mut self, ctx: &RenderCtx<'_>, required: usize) {
        if required <= self.vbo_capacity && self.vbo.is_some() {
            return;
        }
        let new_cap = grown_capacity(required, 256);
        self.vbo = Some(ctx.device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("sandpaint triangle vbo"),
            size: (new_cap * std::mem::size_of::<MeshVertex>()) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        }));
        self.vbo_capacity = new_cap;
    }
}

// ── tessellation ──────────────────────────────────────────────────────────

/// Appends the fill and stroke geometry of `cmd` to `out`.
///
/// Non-finite triangles produce nothing. Zero-length edges get no stroke quad.
fn tessellate(cmd: &TriangleCmd, scale_factor: f32, out: &mut Vec<MeshVertex>) {
    if !cmd.points.iter().all(|p| p.is_finite()) {
        return;
    }
    let [a, b, c] = cmd.points;

    if let Some(fill) = cmd.fill.filter(|f| f.a > 0.0) {
        let color = fill.to_array();
        out.extend([a, b, c].map(|p| MeshVertex::new(p, color)));
    }

    let Some(stroke) = cmd.stroke.filter(|s| s.width > 0.0 && s.color.a > 0.0) else {
        return;
    };

    let hairline = 1.0 / scale_factor.max(f32::EPSILON);
    let (width, fade) = if stroke.width < hairline {
        (hairline, stroke.width / hairline)
    } else {
        (stroke.width, 1.0)
    };
    let color = stroke.color.to_array().map(|v| v * fade);
    let half = width * 0.5;

    for (p, q) in [(a, b), (b, c), (c, a)] {
        let Some(dir) = (q - p).normalized() else { continue };
        let along = dir * half;
        let across = dir.perp() * half;

        let p0 = p - along + across;
        let p1 = p - along - across;
        let q0 = q + along + across;
        let q1 = q + along - across;

        out.extend([p0, p1, q0, q0, p1, q1].map(|v| MeshVertex::new(v, color)));
    }
}

// ── GPU types ─────────────────────────────────────────────────────────────

/// Vertex layout (24 bytes):
///
///  offset  0  pos    [f32; 2]  loc 0  (logical px)
///  offset  8  color  [f32; 4]  loc 1  (premultiplied)
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
struct MeshVertex {
    pos: [f32; 2],
    color: [f32; 4],
}

impl MeshVertex {
    const ATTRS: [wgpu::VertexAttribute; 2] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x4  // color
    ];

    #[inline]
    fn new(pos: Vec2, color: [f32; 4]) -> Self {
        Self {
            pos: pos.to_array(),
            color,
        }
    }

    fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<MeshVertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::Color;
    use crate::scene::Stroke;

    fn tri() -> [Vec2; 3] {
        [Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), Vec2::new(0.0, 10.0)]
    }

    fn mesh(cmd: &TriangleCmd, scale: f32) -> Vec<MeshVertex> {
        let mut out = Vec::new();
        tessellate(cmd, scale, &mut out);
        out
    }

    #[test]
    fn fill_only_is_one_triangle() {
        let cmd = TriangleCmd::new(tri(), Some(Color::white()), None);
        let out = mesh(&cmd, 1.0);
        assert_eq!(out.len(), 3);
        assert_eq!(out[1].pos, [10.0, 0.0]);
        assert_eq!(out[0].color, [1.0; 4]);
    }

    #[test]
    fn stroke_adds_a_quad_per_edge_after_fill() {
        let cmd = TriangleCmd::new(
            tri(),
            Some(Color::white()),
            Some(Stroke::new(2.0, Color::black())),
        );
        let out = mesh(&cmd, 1.0);
        assert_eq!(out.len(), 3 + 3 * 6);
        assert!(out[3..].iter().all(|v| v.color == [0.0, 0.0, 0.0, 1.0]));
    }

    #[test]
    fn stroke_quad_is_centered_and_capped() {
        let cmd = TriangleCmd::new(tri(), None, Some(Stroke::new(2.0, Color::black())));
        let out = mesh(&cmd, 1.0);
        // First edge runs (0,0) -> (10,0); extended by 1 at both ends, ±1 across.
        let xs: Vec<f32> = out[..6].iter().map(|v| v.pos[0]).collect();
        let ys: Vec<f32> = out[..6].iter().map(|v| v.pos[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::INFINITY, f32::min), -1.0);
        assert_eq!(xs.iter().cloned().fold(f32::NEG_INFINITY, f32::max), 11.0);
        assert_eq!(ys.iter().cloned().fold(f32::INFINITY, f32::min), -1.0);
        assert_eq!(ys.iter().cloned().fold(f32::NEG_INFINITY, f32::max), 1.0);
    }

    #[test]
    fn hairline_is_widened_and_faded() {
        let cmd = TriangleCmd::new(tri(), None, Some(Stroke::new(0.4, Color::black())));
        let out = mesh(&cmd, 1.0);
        assert!((out[0].color[3] - 0.4).abs() < 1e-6);
        let ys: Vec<f32> = out[..6].iter().map(|v| v.pos[1]).collect();
        assert_eq!(ys.iter().cloned().fold(f32::NEG_INFINITY, f32::max), 0.5);

        // At 2x the same width covers almost a physical pixel.
        let out = mesh(&cmd, 2.0);
        assert!((out[0].color[3] - 0.8).abs() < 1e-6);
    }

    #[test]
    fn transparent_or_missing_paint_emits_nothing() {
        let cmd = TriangleCmd::new(tri(), Some(Color::transparent()), None);
        assert!(mesh(&cmd, 1.0).is_empty());
        let cmd = TriangleCmd::new(tri(), None, Some(Stroke::new(0.0, Color::black())));
        assert!(mesh(&cmd, 1.0).is_empty());
        let cmd = TriangleCmd::new(tri(), None, None);
        assert!(mesh(&cmd, 1.0).is_empty());
    }

    #[test]
    fn degenerate_edges_are_skipped() {
        let p = Vec2::new(3.0, 3.0);
        let cmd = TriangleCmd::new([p, p, Vec2::new(5.0, 3.0)], None, Some(Stroke::new(1.0, Color::black())));
        // Only b->c and c->a have length.
        assert_eq!(mesh(&cmd, 1.0).len(), 12);
    }

    #[test]
    fn non_finite_triangle_is_dropped() {
        let mut pts = tri();
        pts[2] = Vec2::new(f32::NAN, 0.0);
        let cmd = TriangleCmd::new(pts, Some(Color::white()), Some(Stroke::new(1.0, Color::black())));
        assert!(mesh(&cmd, 1.0).is_empty());
    }
}
