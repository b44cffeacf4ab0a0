//! Crate-level error types.

use std::fmt;

use crate::assets::AssetLoadError;
use crate::gpu::render_context::RenderContextError;

/// Errors produced by the shimmer crate.
#[derive(Debug)]
pub enum ShimmerError {
    /// GPU context initialization failure.
    Gpu(RenderContextError),
    /// Failed to load the base or glitter image.
    Asset(AssetLoadError),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Viewer event-loop failure.
    Viewer(String),
}

impl fmt::Display for ShimmerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::Asset(e) => write!(f, "asset error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
        }
    }
}

impl std::error::Error for ShimmerError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Gpu(e) => Some(e),
            Self::Asset(e) => Some(e),
            Self::Io(e) => Some(e),
            Self::OptionsParse(_) | Self::Viewer(_) => None,
        }
    }
}

impl From<RenderContextError> for ShimmerError {
    fn from(e: RenderContextError) -> Self {
        Self::Gpu(e)
    }
}

impl From<AssetLoadError> for ShimmerError {
    fn from(e: AssetLoadError) -> Self {
        Self::Asset(e)
    }
}

impl From<std::io::Error> for ShimmerError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
