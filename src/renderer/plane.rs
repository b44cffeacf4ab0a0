//! Textured plane renderer: the base card and the additive glitter overlay.
//!
//! Both planes share one shader and bind group layout; they differ only in
//! pipeline state. The base card alpha-blends and writes depth; the glitter
//! overlay blends additively with depth writes off so it can never occlude
//! the card underneath, and its coverage is masked by the base texture's
//! alpha channel.

use glam::Mat4;
use wgpu::util::DeviceExt;

use crate::gpu::pipeline_helpers::{
    create_wgsl_shader, filtering_sampler, texture_2d, uniform_buffer,
};
use crate::gpu::render_context::RenderContext;
use crate::gpu::texture::{ImageTexture, DEPTH_FORMAT};
use crate::scene::{PlaneKind, PlaneMesh};

/// Vertex format for the card quad.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct PlaneVertex {
    position: [f32; 3],
    normal: [f32; 3],
    uv: [f32; 2],
}

const VERTEX_ATTRIBUTES: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
    0 => Float32x3,
    1 => Float32x3,
    2 => Float32x2,
];

fn vertex_layout() -> wgpu::VertexBufferLayout<'static> {
    wgpu::VertexBufferLayout {
        array_stride: size_of::<PlaneVertex>() as u64,
        step_mode: wgpu::VertexStepMode::Vertex,
        attributes: &VERTEX_ATTRIBUTES,
    }
}

/// Per-plane uniform: model matrix plus material scalars.
/// NOTE: Must match the WGSL struct layout exactly (80 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct ModelUniform {
    model: [[f32; 4]; 4],
    opacity: f32,
    /// 1.0 when the mask texture's alpha gates coverage (glitter overlay).
    use_mask: f32,
    _pad: [f32; 2],
}

/// GPU-side state for one plane.
struct GpuPlane {
    kind: PlaneKind,
    vertex_buffer: wgpu::Buffer,
    index_buffer: wgpu::Buffer,
    model_buffer: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    opacity: f32,
    use_mask: f32,
}

/// Draws the card planes into the scene color target.
pub struct PlaneRenderer {
    base_pipeline: wgpu::RenderPipeline,
    glitter_pipeline: wgpu::RenderPipeline,
    mesh_layout: wgpu::BindGroupLayout,
    sampler: wgpu::Sampler,
    planes: Vec<GpuPlane>,
}

impl PlaneRenderer {
    /// Create both plane pipelines against the given camera and lighting
    /// bind group layouts.
    #[must_use]
    pub fn new(
        context: &RenderContext,
        camera_layout: &wgpu::BindGroupLayout,
        lighting_layout: &wgpu::BindGroupLayout,
    ) -> Self {
        let shader = create_wgsl_shader(
            &context.device,
            "Plane Shader",
            include_str!("../../assets/shaders/plane.wgsl"),
        );

        let mesh_layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Plane Mesh Bind Group Layout"),
                entries: &[
                    uniform_buffer(
                        0,
                        wgpu::ShaderStages::VERTEX
                            .union(wgpu::ShaderStages::FRAGMENT),
                    ),
                    texture_2d(1),
                    texture_2d(2),
                    filtering_sampler(3),
                ],
            },
        );

        let layouts = [camera_layout, lighting_layout, &mesh_layout];
        let base_pipeline = create_plane_pipeline(
            context,
            "Base Plane",
            &shader,
            &layouts,
            wgpu::BlendState::ALPHA_BLENDING,
            true,
        );
        // Additive blend, no depth write: glitter brightens but never
        // occludes the card.
        let glitter_pipeline = create_plane_pipeline(
            context,
            "Glitter Plane",
            &shader,
            &layouts,
            wgpu::BlendState {
                color: wgpu::BlendComponent {
                    src_factor: wgpu::BlendFactor::SrcAlpha,
                    dst_factor: wgpu::BlendFactor::One,
                    operation: wgpu::BlendOperation::Add,
                },
                alpha: wgpu::BlendComponent {
                    src_factor: wgpu::BlendFactor::One,
                    dst_factor: wgpu::BlendFactor::One,
                    operation: wgpu::BlendOperation::Add,
                },
            },
            false,
        );

        let sampler = crate::gpu::pipeline_helpers::linear_sampler(
            &context.device,
            "Plane Sampler",
        );

        Self {
            base_pipeline,
            glitter_pipeline,
            mesh_layout,
            sampler,
            planes: Vec::new(),
        }
    }

    /// Upload a plane's quad geometry and material bindings.
    ///
    /// `mask` provides the alpha channel that gates glitter coverage; the
    /// base card passes its own texture there (ignored via `use_mask = 0`).
    pub fn add_plane(
        &mut self,
        context: &RenderContext,
        mesh: &PlaneMesh,
        color: &ImageTexture,
        mask: &ImageTexture,
    ) {
        let hw = mesh.width * 0.5;
        let hh = mesh.height * 0.5;
        let vertices = [
            PlaneVertex {
                position: [-hw, -hh, 0.0],
                normal: [0.0, 0.0, 1.0],
                uv: [0.0, 1.0],
            },
            PlaneVertex {
                position: [hw, -hh, 0.0],
                normal: [0.0, 0.0, 1.0],
                uv: [1.0, 1.0],
            },
            PlaneVertex {
                position: [hw, hh, 0.0],
                normal: [0.0, 0.0, 1.0],
                uv: [1.0, 0.0],
            },
            PlaneVertex {
                position: [-hw, hh, 0.0],
                normal: [0.0, 0.0, 1.0],
                uv: [0.0, 0.0],
            },
        ];
        let indices: [u32; 6] = [0, 1, 2, 0, 2, 3];

        let vertex_buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Plane Vertex Buffer"),
                contents: bytemuck::cast_slice(&vertices),
                usage: wgpu::BufferUsages::VERTEX,
            },
        );
        let index_buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Plane Index Buffer"),
                contents: bytemuck::cast_slice(&indices),
                usage: wgpu::BufferUsages::INDEX,
            },
        );

        let use_mask = match mesh.kind {
            PlaneKind::Base => 0.0,
            PlaneKind::Glitter => 1.0,
        };
        let uniform = ModelUniform {
            model: Mat4::from_translation(mesh.position).to_cols_array_2d(),
            opacity: mesh.opacity,
            use_mask,
            _pad: [0.0; 2],
        };
        let model_buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Plane Model Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            },
        );

        let bind_group =
            context
                .device
                .create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("Plane Mesh Bind Group"),
                    layout: &self.mesh_layout,
                    entries: &[
                        wgpu::BindGroupEntry {
                            binding: 0,
                            resource: model_buffer.as_entire_binding(),
                        },
                        wgpu::BindGroupEntry {
                            binding: 1,
                            resource: wgpu::BindingResource::TextureView(
                                &color.view,
                            ),
                        },
                        wgpu::BindGroupEntry {
                            binding: 2,
                            resource: wgpu::BindingResource::TextureView(
                                &mask.view,
                            ),
                        },
                        wgpu::BindGroupEntry {
                            binding: 3,
                            resource: wgpu::BindingResource::Sampler(
                                &self.sampler,
                            ),
                        },
                    ],
                });

        self.planes.push(GpuPlane {
            kind: mesh.kind,
            vertex_buffer,
            index_buffer,
            model_buffer,
            bind_group,
            opacity: mesh.opacity,
            use_mask,
        });
    }

    /// Re-upload one plane's model matrix for the current sway rotation.
    pub fn update_model(
        &self,
        queue: &wgpu::Queue,
        index: usize,
        mesh: &PlaneMesh,
        rotation: Mat4,
    ) {
        let Some(plane) = self.planes.get(index) else {
            return;
        };
        let uniform = ModelUniform {
            model: (Mat4::from_translation(mesh.position) * rotation)
                .to_cols_array_2d(),
            opacity: plane.opacity,
            use_mask: plane.use_mask,
            _pad: [0.0; 2],
        };
        queue.write_buffer(
            &plane.model_buffer,
            0,
            bytemuck::cast_slice(&[uniform]),
        );
    }

    /// Draw all planes. Caller has begun the render pass; bind groups 0/1
    /// are camera and lighting.
    pub fn draw<'a>(
        &'a self,
        pass: &mut wgpu::RenderPass<'a>,
        camera_bind: &'a wgpu::BindGroup,
        lighting_bind: &'a wgpu::BindGroup,
    ) {
        pass.set_bind_group(0, camera_bind, &[]);
        pass.set_bind_group(1, lighting_bind, &[]);
        for plane in &self.planes {
            let pipeline = match plane.kind {
                PlaneKind::Base => &self.base_pipeline,
                PlaneKind::Glitter => &self.glitter_pipeline,
            };
            pass.set_pipeline(pipeline);
            pass.set_bind_group(2, &plane.bind_group, &[]);
            pass.set_vertex_buffer(0, plane.vertex_buffer.slice(..));
            pass.set_index_buffer(
                plane.index_buffer.slice(..),
                wgpu::IndexFormat::Uint32,
            );
            pass.draw_indexed(0..6, 0, 0..1);
        }
    }
}

fn create_plane_pipeline(
    context: &RenderContext,
    label: &str,
    shader: &wgpu::ShaderModule,
    bind_group_layouts: &[&wgpu::BindGroupLayout],
    blend: wgpu::BlendState,
    depth_write: bool,
) -> wgpu::RenderPipeline {
    let pipeline_layout = context.device.create_pipeline_layout(
        &wgpu::PipelineLayoutDescriptor {
            label: Some(&format!("{label} Pipeline Layout")),
            bind_group_layouts,
            push_constant_ranges: &[],
        },
    );
    context
        .device
        .create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some(&format!("{label} Pipeline")),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: shader,
                entry_point: Some("vs_main"),
                buffers: &[vertex_layout()],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: context.format(),
                    blend: Some(blend),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                // The card shows its back while swaying; never cull.
                cull_mode: None,
                ..Default::default()
            },
            depth_stencil: Some(wgpu::DepthStencilState {
                format: DEPTH_FORMAT,
                depth_write_enabled: depth_write,
                depth_compare: wgpu::CompareFunction::LessEqual,
                stencil: wgpu::StencilState::default(),
                bias: wgpu::DepthBiasState::default(),
            }),
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        })
}
