// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Animated glitter-card renderer built on wgpu.
//!
//! Shimmer displays a decorative card as two textured planes: the card
//! artwork itself and an additive glitter overlay masked by the artwork's
//! alpha channel. The card sways gently around one axis while a
//! post-processing chain applies saturation adjustment and a time-varying
//! sparkle twinkle.
//!
//! # Key entry points
//!
//! - [`ShimmerEngine`] - the rendering engine handle; create it, load the
//!   two card images, then call `update` + `render` once per frame
//! - [`Options`] - runtime configuration (camera, lighting, effects, motion)
//! - [`Viewer`] - a ready-made winit window around the engine (needs the
//!   `viewer` feature)
//!
//! # Architecture
//!
//! Each frame renders the scene into an offscreen color target, then runs
//! the post-processing passes in order: saturation, and (once the glitter
//! texture is loaded) sparkle. The last pass in the chain writes to the
//! swapchain. All GPU resources are owned by the engine and released when
//! it drops.

pub mod animation;
pub mod assets;
pub mod camera;
pub mod engine;
pub mod error;
pub mod gpu;
pub mod lighting;
pub mod options;
pub mod renderer;
pub mod scene;
#[cfg(feature = "viewer")]
pub mod viewer;

pub use engine::ShimmerEngine;
pub use error::ShimmerError;
pub use options::Options;
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
