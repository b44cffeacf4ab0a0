//! Sparkle post-process pass: time-varying glints over the rendered scene.
//!
//! Each pixel hashes its UV coordinates; hashes above a threshold become
//! sparkle candidates whose brightness flickers with `abs(sin(flicker·time +
//! hash(uv)·2π))`. The result is added straight onto the color, deliberately
//! unclamped so hot sparkles can blow out.

use wgpu::util::DeviceExt;

use super::screen_pass::ScreenPass;
use crate::gpu::pipeline_helpers::{
    create_screen_space_pipeline, create_wgsl_shader, filtering_sampler,
    linear_sampler, texture_2d, uniform_buffer,
};
use crate::gpu::render_context::RenderContext;
use crate::gpu::texture::RenderTarget;
use crate::options::EffectsOptions;

/// Sparkle uniform block.
/// NOTE: Must match the WGSL struct layout exactly (32 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct SparkleParams {
    time: f32,
    threshold: f32,
    density: f32,
    drift: f32,
    flicker: f32,
    boost: f32,
    _pad: [f32; 2],
}

impl SparkleParams {
    fn new(effects: &EffectsOptions, time: f32) -> Self {
        Self {
            time,
            threshold: effects.sparkle_threshold,
            density: effects.sparkle_density,
            drift: effects.sparkle_drift,
            flicker: effects.sparkle_flicker,
            boost: effects.sparkle_boost,
            _pad: [0.0; 2],
        }
    }
}

/// The sparkle pass. Only exists once the glitter texture has loaded.
pub struct SparklePass {
    pipeline: wgpu::RenderPipeline,
    bind_group_layout: wgpu::BindGroupLayout,
    bind_group: wgpu::BindGroup,
    sampler: wgpu::Sampler,
    params_buffer: wgpu::Buffer,
    effects: EffectsOptions,
    input: RenderTarget,
}

impl SparklePass {
    /// Create the pass with its own input render target at the current
    /// surface size.
    #[must_use]
    pub fn new(context: &RenderContext, effects: &EffectsOptions) -> Self {
        let input = RenderTarget::new(
            &context.device,
            "Sparkle Input",
            context.width(),
            context.height(),
            context.format(),
        );
        let sampler = linear_sampler(&context.device, "Sparkle Sampler");

        let params_buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Sparkle Params Buffer"),
                contents: bytemuck::cast_slice(&[SparkleParams::new(
                    effects, 0.0,
                )]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            },
        );

        let bind_group_layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Sparkle Bind Group Layout"),
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
            "Sparkle Shader",
            include_str!("../../../assets/shaders/screen/sparkle.wgsl"),
        );
        let pipeline = create_screen_space_pipeline(
            &context.device,
            "Sparkle",
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
            effects: *effects,
            input,
        }
    }

    /// The input view the previous pass renders into.
    #[must_use]
    pub fn input_view(&self) -> &wgpu::TextureView {
        &self.input.view
    }

    /// Advance the shader clock to the given elapsed time in seconds.
    pub fn set_time(&self, queue: &wgpu::Queue, time: f32) {
        let params = SparkleParams::new(&self.effects, time);
        queue.write_buffer(
            &self.params_buffer,
            0,
            bytemuck::cast_slice(&[params]),
        );
    }
}

impl ScreenPass for SparklePass {
    fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        output: &wgpu::TextureView,
    ) {
        let mut pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
            label: Some("Sparkle Pass"),
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
            "Sparkle Input",
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
            label: Some("Sparkle Bind Group"),
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
    use super::SparkleParams;

    #[test]
    fn params_match_the_wgsl_uniform_size() {
        assert_eq!(size_of::<SparkleParams>(), 32);
    }
}
