//! Ordered post-processing chain.
//!
//! Pass order is fixed: scene render → saturation → sparkle. The sparkle
//! pass is appended only once the glitter texture has loaded; until then the
//! saturation pass writes straight to the swapchain. Rendering always
//! re-applies every currently-appended pass in order.

use super::saturation::SaturationPass;
use super::screen_pass::ScreenPass;
use super::sparkle::SparklePass;
use crate::gpu::render_context::RenderContext;
use crate::gpu::texture::RenderTarget;
use crate::options::EffectsOptions;

/// The composer: owns the scene depth target and the shader passes, in
/// application order.
pub struct Composer {
    depth: RenderTarget,
    saturation: SaturationPass,
    sparkle: Option<SparklePass>,
    effects: EffectsOptions,
}

impl Composer {
    /// Create the chain with the scene render stage and the saturation pass.
    #[must_use]
    pub fn new(context: &RenderContext, effects: &EffectsOptions) -> Self {
        Self {
            depth: RenderTarget::depth(
                &context.device,
                context.width(),
                context.height(),
            ),
            saturation: SaturationPass::new(context, effects.saturation),
            sparkle: None,
            effects: *effects,
        }
    }

    /// Color view the scene pass renders into (the saturation input).
    #[must_use]
    pub fn scene_color_view(&self) -> &wgpu::TextureView {
        self.saturation.input_view()
    }

    /// Depth view for the scene pass.
    #[must_use]
    pub fn depth_view(&self) -> &wgpu::TextureView {
        &self.depth.view
    }

    /// Append the sparkle pass. Idempotent.
    pub fn enable_sparkle(&mut self, context: &RenderContext) {
        if self.sparkle.is_none() {
            self.sparkle = Some(SparklePass::new(context, &self.effects));
        }
    }

    /// Number of stages in the chain, counting the scene render stage.
    #[must_use]
    pub fn pass_count(&self) -> usize {
        2 + usize::from(self.sparkle.is_some())
    }

    /// Advance the sparkle shader clock, if the pass exists.
    pub fn set_time(&self, queue: &wgpu::Queue, time: f32) {
        if let Some(sparkle) = &self.sparkle {
            sparkle.set_time(queue, time);
        }
    }

    /// Update the saturation factor.
    pub fn set_saturation(&mut self, queue: &wgpu::Queue, saturation: f32) {
        self.effects.saturation = saturation;
        self.saturation.set_saturation(queue, saturation);
    }

    /// Encode all appended passes in order, ending on `output`.
    pub fn render(
        &self,
        encoder: &mut wgpu::CommandEncoder,
        output: &wgpu::TextureView,
    ) {
        if let Some(sparkle) = &self.sparkle {
            self.saturation.render(encoder, sparkle.input_view());
            sparkle.render(encoder, output);
        } else {
            self.saturation.render(encoder, output);
        }
    }

    /// Recreate every resolution-dependent target for the current surface
    /// size.
    pub fn resize(&mut self, context: &RenderContext) {
        self.depth = RenderTarget::depth(
            &context.device,
            context.width(),
            context.height(),
        );
        self.saturation.resize(context);
        if let Some(sparkle) = &mut self.sparkle {
            sparkle.resize(context);
        }
    }
}
