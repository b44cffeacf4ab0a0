//! Rendering subsystems for the glitter card.
//!
//! Contains the textured plane renderer (base card + additive glitter
//! overlay) and the post-processing chain (saturation, sparkle).

pub mod plane;
pub mod postprocess;
