use crate::paint::Color;

use super::shapes::common::triangle_list_primitive;
use super::{RenderCtx, RenderTarget};

/// Offscreen color target that keeps its contents across frames.
///
/// Drawing into the canvas accumulates; the canvas is only wiped by an explicit
/// [`CanvasLayer::clear`] or when its size changes (the contents cannot be
/// kept across a resize, so it is refilled with the last clear color).
/// Each frame the canvas is copied onto the surface with [`CanvasLayer::present`].
pub struct CanvasLayer {
    background: Color,
    pending_clear: Option<Color>,

    texture: Option<CanvasTexture>,

    blit_format: Option<wgpu::TextureFormat>,
    blit_pipeline: Option<wgpu::RenderPipeline>,
    blit_bgl: Option<wgpu::BindGroupLayout>,
    sampler: Option<wgpu::Sampler>,
}

struct CanvasTexture {
    view: wgpu::TextureView,
    bind_group: Option<wgpu::BindGroup>,
    size: (u32, u32),
    format: wgpu::TextureFormat,
}

impl CanvasLayer {
    /// Creates a canvas that starts filled with `background`.
    pub fn new(background: Color) -> Self {
        Self {
            background,
            pending_clear: Some(background),
            texture: None,
            blit_format: None,
            blit_pipeline: None,
            blit_bgl: None,
            sampler: None,
        }
    }

    /// Schedules a fill with `color` before anything else is drawn this frame.
    pub fn clear(&mut self, color: Color) {
        self.background = color;
        self.pending_clear = Some(color);
    }

    /// Physical size of the backing texture, if allocated.
    pub fn size(&self) -> Option<(u32, u32)> {
        self.texture.as_ref().map(|t| t.size)
    }

    /// (Re)allocates the backing texture for the current viewport and applies
    /// a pending clear. Call once per frame before drawing into the canvas.
    pub fn prepare(&mut self, ctx: &RenderCtx<'_>, encoder: &mut wgpu::CommandEncoder) {
        let size = ctx.viewport.physical_size(ctx.scale_factor);
        let stale = self
            .texture
            .as_ref()
            .is_none_or(|t| t.size != size || t.format != ctx.surface_format);

        if stale {
            if self.texture.is_some() {
                log::debug!("canvas resized to {}x{}; contents reset", size.0, size.1);
            }
            self.texture = Some(create_texture(ctx.device, size, ctx.surface_format));
            self.pending_clear = Some(self.background);
        }

        let (Some(color), Some(texture)) = (self.pending_clear.take(), self.texture.as_ref()) else {
            return;
        };
        let _pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("sandpaint canvas clear pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: &texture.view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(color.to_wgpu()),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });
    }

    /// Draw target over the canvas texture. `None` until [`prepare`](Self::prepare) ran.
    pub fn target<'a>(&'a self, encoder: &'a mut wgpu::CommandEncoder) -> Option<RenderTarget<'a>> {
        let texture = self.texture.as_ref()?;
        Some(RenderTarget::new(encoder, &texture.view))
    }

    /// Copies the canvas onto `surface_view`, replacing its contents.
    pub fn present(
        &mut self,
        ctx: &RenderCtx<'_>,
        encoder: &mut wgpu::CommandEncoder,
        surface_view: &wgpu::TextureView,
    ) {
        self.ensure_blit_pipeline(ctx);
        self.ensure_bind_group(ctx);

        let Some(pipeline) = self.blit_pipeline.as_ref() else { return };
        let Some(bind_group) = self.texture.as_ref().and_then(|t| t.bind_group.as_ref()) else {
            return;
        };

        let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("sandpaint canvas blit pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: surface_view,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(self.background.to_wgpu()),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            timestamp_writes: None,
            occlusion_query_set: None,
            multiview_mask: None,
        });
        rpass.set_pipeline(pipeline);
        rpass.set_bind_group(0, bind_group, &[]);
        rpass.draw(0..3, 0..1);
    }

    // ── private helpers ────────────────────────────────────────────────────

    fn ensure_blit_pipeline(&mut self, ctx: &RenderCtx<'_>) {
        if self.blit_format == Some(ctx.surface_format) && self.blit_pipeline.is_some() {
            return;
        }

        let shader = ctx.device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("sandpaint canvas blit shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("shaders/blit.wgsl").into()),
        });

        let bgl = ctx.device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("sandpaint canvas blit bgl"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        });

        let pipeline_layout = ctx.device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("sandpaint canvas blit pipeline layout"),
            bind_group_layouts: &[&bgl],
            immediate_size: 0,
        });

        let pipeline = ctx.device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("sandpaint canvas blit pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                compilation_options: Default::default(),
                buffers: &[],
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                compilation_options: Default::default(),
                targets: &[Some(wgpu::ColorTargetState {
                    format: ctx.surface_format,
                    blend: None,
                    write_mask: wgpu::ColorWrites::ALL,
                })],
            }),
            primitive: triangle_list_primitive(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview_mask: None,
            cache: None,
        });

        let sampler = ctx.device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("sandpaint canvas sampler"),
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        self.blit_format = Some(ctx.surface_format);
        self.blit_pipeline = Some(pipeline);
        self.blit_bgl = Some(bgl);
        self.sampler = Some(sampler);
        if let Some(texture) = self.texture.as_mut() {
            texture.bind_group = None;
        }
    }

    fn ensure_bind_group(&mut self, ctx: &RenderCtx<'_>) {
        let (Some(bgl), Some(sampler)) = (self.blit_bgl.as_ref(), self.sampler.as_ref()) else {
            return;
        };
        let Some(texture) = self.texture.as_mut() else { return };
        if texture.bind_group.is_some() {
            return;
        }

        texture.bind_group = Some(ctx.device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("sandpaint canvas blit bind group"),
            layout: bgl,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&texture.view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        }));
    }
}

fn create_texture(device: &wgpu::Device, size: (u32, u32), format: wgpu::TextureFormat) -> CanvasTexture {
    let texture = device.create_texture(&wgpu::TextureDescriptor {
        label: Some("sandpaint canvas texture"),
        size: wgpu::Extent3d {
            width: size.0,
            height: size.1,
            depth_or_array_layers: 1,
        },
        mip_level_count: 1,
        sample_count: 1,
        dimension: wgpu::TextureDimension::D2,
        format,
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT | wgpu::TextureUsages::TEXTURE_BINDING,
        view_formats: &[],
    });
    let view = texture.create_view(&wgpu::TextureViewDescriptor::default());
    CanvasTexture {
        view,
        bind_group: None,
        size,
        format,
    }
}
