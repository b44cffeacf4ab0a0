//! Saturation post-process pass: grayscale/color mix over the rendered
//! scene.
//!
//! Computes luminance with the standard (0.299, 0.587, 0.114) weights and
//! linearly interpolates between the grayscale value and the original color
//! by a `saturation` uniform. At the default of 1.0 the pass is an identity
//! transform, kept in the chain for tunability.

use wgpu::util::DeviceExt;

use super::screen_pass::ScreenPass;
use crate::gpu::pipeline_helpers::{
    create_screen_space_pipeline, create_wgsl_shader, filtering_sampler,
    linear_sampler, texture_2d, uniform_buffer,
};
use crate::gpu::render_context::RenderContext;
use crate::gpu::texture::RenderTarget;

/// Saturation uniform block.
/// NOTE: Must match the WGSL struct layout exactly (16 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct SaturationParams {
    saturation: f32,
    _pad: [f32; 3],
}

/// The saturation pass. The scene renders into `input`; this pass samples
/// it and writes the adjusted color downstream.
pub struct SaturationPass {
    pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
    sampler: wgpu::Sampler,
    params_buffer: wgpu::Buffer,
    input: RenderTarget,
}

impl SaturationPass {
    /// Create the pass with its own input render target at the current
    /// surface size.
    #[must_use]
    pub fn new(context: &RenderContext, saturation: f32) -> Self {
        let input = RenderTarget::new(
            &context.device,
            "Saturation Input",
            context.width(),
            context.height(),
            context.format(),
        );
        let sampler = linear_sampler(&context.device, "Saturation Sampler");

        let params = SaturationParams {
            saturation,
            _pad: [0.0; 3],
        };
        let params_buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Saturation Params Buffer"),
                contents: bytemuck::cast_slice(&[params]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            },
        );

        let bind_group_layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Saturation Bind Group Layout"),
                entries: &[
                    texture_2d(0),
                    filtering_sampler(1),
                    uniform_buffer(2, wgpu::ShaderStages::FRAGMENT),
                ],
            },
        );
        let bind_group = create_bind_group(
            context,
            &bind_group_layout,
            &input.view,
            &sampler,
            &params_buffer,
        );

        let shader = create_wgsl_shader(
            &context.device,
            "Saturation Shader",
            include_str!("../../../assets/shaders/screen/saturation.wgsl"),
        );
        let pipeline = create_screen_space_pipeline(
            &context.device,
            "Saturation",
            &shader,
            context.format(),
            None,
            &[&bind_group_layout],
        );

        Self {
            pipeline,
            bind_group_layout,
            bind_group,
            sampler,
            params_buffer,
            input,
        }
    }

    /// The input view the scene pass renders into.
    #[must_use]
    pub fn input_view(&self) -> &wgpu::TextureView {
        &self.input.view
    }

    /// Update the saturation factor.
    pub fn set_saturation(&self, queue: &wgpu::Queue, saturation: f32) {
        let params = SaturationParams {
            saturation,
            _pad: [0.0; 3],
        };
        queue.write_buffer(
            &self.params_buffer,
            0,
            bytemuck::cast_slice(&[params]),
        );
    }
}

impl ScreenPass for SaturationPass {
    fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        output: &wgpu::TextureView,
    ) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Saturation Pass"),
            color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                view: output,
                resolve_target: None,
                ops: wgpu::Operations {
                    load: wgpu::LoadOp::Clear(wgpu::Color::TRANSPARENT),
                    store: wgpu::StoreOp::Store,
                },
                depth_slice: None,
            })],
            depth_stencil_attachment: None,
            ..Default::default()
        });
        pass.set_pipeline(&self.pipeline);
        pass.set_bind_group(0, &self.bind_group, &[]);
        pass.draw(0..3, 0..1);
    }

    fn resize(&mut self, context: &RenderContext) {
        self.input = RenderTarget::new(
            &context.device,
            "Saturation Input",
            context.width(),
            context.height(),
            context.format(),
        );
        self.bind_group = create_bind_group(
            context,
            &self.bind_group_layout,
            &self.input.view,
            &self.sampler,
            &self.params_buffer,
        );
    }
}

fn create_bind_group(
    context: &RenderContext,
    layout: &wgpu::BindGroupLayout,
    input_view: &wgpu::TextureView,
    sampler: &wgpu::Sampler,
    params_buffer: &wgpu::Buffer,
) -> wgpu::BindGroup {
    context
        .device
        .create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Saturation Bind Group"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(input_view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
                wgpu::BindGroupEntry {
                    binding: 2,
                    resource: params_buffer.as_entire_binding(),
                },
            ],
        })
}

#[cfg(test)]
mod tests {
    use super::SaturationParams;

    #[test]
    fn params_match_the_wgsl_uniform_size() {
        // saturation.wgsl pads with three scalar f32s for a 16-byte struct;
        // vector padding would align to 16 and inflate the shader side.
        assert_eq!(size_of::<SaturationParams>(), 16);
    }

    /// CPU mirror of the fragment math in `saturation.wgsl`.
    fn apply(color: [f32; 3], saturation: f32) -> [f32; 3] {
        let gray =
            0.299 * color[0] + 0.587 * color[1] + 0.114 * color[2];
        [
            gray + (color[0] - gray) * saturation,
            gray + (color[1] - gray) * saturation,
            gray + (color[2] - gray) * saturation,
        ]
    }

    #[test]
    fn saturation_one_is_identity() {
        for color in [
            [0.0, 0.0, 0.0],
            [1.0, 1.0, 1.0],
            [0.25, 0.5, 0.75],
            [0.9, 0.1, 0.3],
        ] {
            let out = apply(color, 1.0);
            for i in 0..3 {
                assert!((out[i] - color[i]).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn saturation_zero_is_weighted_grayscale() {
        let out = apply([0.25, 0.5, 0.75], 0.0);
        let gray = 0.299 * 0.25 + 0.587 * 0.5 + 0.114 * 0.75;
        for channel in out {
            assert!((channel - gray).abs() < 1e-6);
        }
    }
}
