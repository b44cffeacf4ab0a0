//! GPU resource management utilities.
//!
//! Provides wgpu device/surface initialization, shared pipeline boilerplate
//! for screen-space passes, and texture helpers.

/// Shared wgpu boilerplate helpers for render pipelines.
pub mod pipeline_helpers;
/// wgpu device, surface, and queue initialization.
pub mod render_context;
/// Render-target and image texture abstractions.
pub mod texture;
