//! Centralized rendering options with TOML preset support.
//!
//! All tweakable settings (camera projection, lighting intensities, effect
//! uniforms, sway motion) are consolidated here. Options serialize to/from
//! TOML so a preset file can override any subset of them.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::animation::SwayAxis;
use crate::error::ShimmerError;

/// Camera projection and placement parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraOptions {
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
    /// Camera distance from the card along +Z.
    pub distance: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            fovy: 40.0,
            znear: 0.1,
            zfar: 100.0,
            distance: 5.0,
        }
    }
}

/// Lighting parameters: flat ambient term plus one rectangular panel light.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LightingOptions {
    /// Ambient light intensity.
    pub ambient_intensity: f32,
    /// Panel light intensity.
    pub panel_intensity: f32,
    /// Panel width in world units.
    pub panel_width: f32,
    /// Panel height in world units.
    pub panel_height: f32,
    /// Specular highlight strength.
    pub specular_strength: f32,
    /// Specular shininess exponent.
    pub shininess: f32,
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            // Panel sits extremely close to the card, so intensities are
            // tuned against that placement.
            ambient_intensity: 3.0,
            panel_intensity: 4.0,
            panel_width: 1.0,
            panel_height: 5.0,
            specular_strength: 0.4,
            shininess: 32.0,
        }
    }
}

/// Post-processing effect parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EffectsOptions {
    /// Grayscale/color mix factor. 1.0 leaves colors untouched.
    pub saturation: f32,
    /// Hash value above which a pixel becomes a sparkle candidate.
    pub sparkle_threshold: f32,
    /// UV tiling factor for the sparkle hash grid.
    pub sparkle_density: f32,
    /// How fast the sparkle grid drifts over time.
    pub sparkle_drift: f32,
    /// Per-sparkle flicker frequency (radians per second).
    pub sparkle_flicker: f32,
    /// Additive brightness of a lit sparkle. Unclamped on purpose: sparkles
    /// may blow out past displayable range.
    pub sparkle_boost: f32,
}

impl Default for EffectsOptions {
    fn default() -> Self {
        Self {
            saturation: 1.0,
            sparkle_threshold: 0.98,
            sparkle_density: 50.0,
            sparkle_drift: 0.3,
            sparkle_flicker: 30.0,
            sparkle_boost: 1.5,
        }
    }
}

/// Sway motion parameters.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct MotionOptions {
    /// Peak sway rotation in degrees.
    pub sway_degrees: f32,
    /// Axis the planes sway around.
    pub axis: SwayAxis,
}

impl Default for MotionOptions {
    fn default() -> Self {
        Self {
            sway_degrees: 20.0,
            axis: SwayAxis::Y,
        }
    }
}

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[effects]`) work correctly.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Camera projection and placement.
    pub camera: CameraOptions,
    /// Lighting parameters.
    pub lighting: LightingOptions,
    /// Post-processing effect parameters.
    pub effects: EffectsOptions,
    /// Sway motion parameters.
    pub motion: MotionOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ShimmerError::Io`] if the file cannot be read and
    /// [`ShimmerError::OptionsParse`] if it is not valid options TOML.
    pub fn load(path: &Path) -> Result<Self, ShimmerError> {
        let content = std::fs::read_to_string(path).map_err(ShimmerError::Io)?;
        toml::from_str(&content)
            .map_err(|e| ShimmerError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`ShimmerError::OptionsParse`] if serialization fails and
    /// [`ShimmerError::Io`] if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), ShimmerError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| ShimmerError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ShimmerError::Io)?;
        }
        std::fs::write(path, content).map_err(ShimmerError::Io)
    }

    /// Peak sway rotation in radians.
    #[must_use]
    pub fn sway_radians(&self) -> f32 {
        self.motion.sway_degrees.to_radians()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_round_trips_through_toml() {
        let opts = Options::default();
        let toml_str = toml::to_string_pretty(&opts).unwrap();
        let parsed: Options = toml::from_str(&toml_str).unwrap();
        assert_eq!(opts, parsed);
    }

    #[test]
    fn partial_toml_uses_defaults_for_the_rest() {
        let parsed: Options =
            toml::from_str("[effects]\nsaturation = 0.25\n").unwrap();
        assert_eq!(parsed.effects.saturation, 0.25);
        assert_eq!(parsed.camera, CameraOptions::default());
        assert_eq!(parsed.motion.axis, SwayAxis::Y);
    }

    #[test]
    fn save_then_load_round_trips() {
        let path = std::env::temp_dir()
            .join("shimmer-options-test")
            .join("preset.toml");
        let mut opts = Options::default();
        opts.effects.saturation = 0.8;
        opts.motion.sway_degrees = 12.5;

        opts.save(&path).unwrap();
        let loaded = Options::load(&path).unwrap();
        assert_eq!(opts, loaded);

        let _ = std::fs::remove_file(&path);
    }

    #[test]
    fn default_sway_is_twenty_degrees() {
        let opts = Options::default();
        assert!(
            (opts.sway_radians() - std::f32::consts::PI / 9.0).abs() < 1e-6
        );
    }
}
