//! Uniform interface for fullscreen post-processing passes.

use crate::gpu::render_context::RenderContext;

/// A fullscreen shader pass: samples its own input texture and writes the
/// result to the given output view.
pub trait ScreenPass {
    /// Encode GPU commands for this pass, writing to `output`.
    fn render(&self, encoder: &mut wgpu::CommandEncoder, output: &wgpu::TextureView);
    /// Recreate resolution-dependent resources for the current surface size.
    fn resize(&mut self, context: &RenderContext);
}
