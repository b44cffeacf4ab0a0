//! Post-processing effect passes.
//!
//! Provides the saturation (grayscale/color mix) pass, the time-varying
//! sparkle pass, and the composer that chains them after the scene render.

pub mod composer;
pub mod saturation;
pub mod screen_pass;
pub mod sparkle;
