//! Sway animation math.
//!
//! Planes never hold still: they oscillate around one axis with a bounded
//! rotation of `amplitude * sin(t)`, driven by wall-clock time since engine
//! start. The default amplitude is 20 degrees, so the card rocks gently
//! between -20 and +20 degrees forever without settling.

use glam::Mat4;
use serde::{Deserialize, Serialize};

/// Default sway amplitude: 20 degrees in radians.
pub const MAX_SWAY: f32 = std::f32::consts::PI / 9.0;

/// Axis a plane sways around.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum SwayAxis {
    /// Rock forward/backward.
    X,
    /// Turn left/right (the card-flip look).
    #[default]
    Y,
    /// Tilt in the screen plane.
    Z,
}

impl SwayAxis {
    /// Rotation matrix for the given angle around this axis.
    #[must_use]
    pub fn rotation(self, angle: f32) -> Mat4 {
        match self {
            Self::X => Mat4::from_rotation_x(angle),
            Self::Y => Mat4::from_rotation_y(angle),
            Self::Z => Mat4::from_rotation_z(angle),
        }
    }
}

/// Bounded sinusoidal sway around one axis.
#[derive(Debug, Clone, Copy)]
pub struct Oscillator {
    /// Peak rotation in radians.
    pub amplitude: f32,
    /// Axis to rotate around.
    pub axis: SwayAxis,
}

impl Oscillator {
    /// Create an oscillator with the given peak rotation (radians).
    #[must_use]
    pub fn new(amplitude: f32, axis: SwayAxis) -> Self {
        Self { amplitude, axis }
    }

    /// Sway angle at elapsed time `t` seconds: `amplitude * sin(t)`.
    #[must_use]
    pub fn angle(&self, t: f32) -> f32 {
        self.amplitude * t.sin()
    }

    /// Rotation matrix at elapsed time `t` seconds.
    #[must_use]
    pub fn rotation(&self, t: f32) -> Mat4 {
        self.axis.rotation(self.angle(t))
    }
}

impl Default for Oscillator {
    fn default() -> Self {
        Self::new(MAX_SWAY, SwayAxis::Y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn angle_matches_sine_law() {
        let osc = Oscillator::default();
        for i in 0..1000 {
            let t = i as f32 * 0.037;
            let expected = MAX_SWAY * t.sin();
            assert!((osc.angle(t) - expected).abs() < 1e-6);
        }
    }

    #[test]
    fn angle_is_bounded_by_amplitude() {
        let osc = Oscillator::default();
        for i in 0..10_000 {
            let t = i as f32 * 0.123;
            assert!(osc.angle(t).abs() <= MAX_SWAY + 1e-6);
        }
    }

    #[test]
    fn angle_is_zero_at_start() {
        let osc = Oscillator::default();
        assert!(osc.angle(0.0).abs() < 1e-6);
    }

    #[test]
    fn rotation_y_leaves_y_axis_fixed() {
        let osc = Oscillator::new(MAX_SWAY, SwayAxis::Y);
        let m = osc.rotation(1.3);
        let y = m.transform_vector3(glam::Vec3::Y);
        assert!((y - glam::Vec3::Y).length() < 1e-6);
    }
}
