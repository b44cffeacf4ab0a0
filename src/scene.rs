//! Authoritative CPU-side scene: plane meshes and lights.
//!
//! The scene never holds more than two planes (the base card and the
//! glitter overlay) plus two lights. Renderers consume this model; it owns
//! no GPU state.

use glam::Vec3;

use crate::options::LightingOptions;

/// World-space height of the card plane. Width follows the texture aspect.
pub const PLANE_HEIGHT: f32 = 3.0;

/// Depth offset of the glitter plane in front of the base plane, just enough
/// to avoid coplanar z-fighting.
pub const GLITTER_Z_OFFSET: f32 = 0.01;

/// A light in the scene.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Light {
    /// Flat, direction-less illumination.
    Ambient {
        /// Light intensity.
        intensity: f32,
    },
    /// Rectangular panel light aimed at a target point.
    RectArea {
        /// Panel center in world space.
        position: Vec3,
        /// Point the panel is aimed at.
        target: Vec3,
        /// Panel width in world units.
        width: f32,
        /// Panel height in world units.
        height: f32,
        /// Light intensity.
        intensity: f32,
    },
}

/// Which of the two plane roles a mesh plays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaneKind {
    /// The lit, alpha-blended card plane.
    Base,
    /// The additive glitter overlay.
    Glitter,
}

/// A planar mesh: dimensions, placement, and material role.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneMesh {
    /// Material role (base card or glitter overlay).
    pub kind: PlaneKind,
    /// Plane width in world units.
    pub width: f32,
    /// Plane height in world units.
    pub height: f32,
    /// Plane center position.
    pub position: Vec3,
    /// Material opacity multiplier.
    pub opacity: f32,
}

/// Plane dimensions for a texture of the given pixel size: height is fixed
/// at [`PLANE_HEIGHT`], width follows the texture aspect ratio.
#[must_use]
pub fn plane_dimensions(tex_width: u32, tex_height: u32) -> (f32, f32) {
    let aspect = tex_width as f32 / tex_height as f32;
    (PLANE_HEIGHT * aspect, PLANE_HEIGHT)
}

/// The scene: plane meshes plus lights, in insertion order.
pub struct Scene {
    meshes: Vec<PlaneMesh>,
    lights: Vec<Light>,
}

impl Scene {
    /// Create a scene with the two stock lights (ambient + panel) and no
    /// meshes yet.
    #[must_use]
    pub fn new(lighting: &LightingOptions) -> Self {
        let lights = vec![
            Light::Ambient {
                intensity: lighting.ambient_intensity,
            },
            // Panel light hovers just above the card, aimed at the origin.
            Light::RectArea {
                position: Vec3::new(0.0, 2.0, 0.1),
                target: Vec3::ZERO,
                width: lighting.panel_width,
                height: lighting.panel_height,
                intensity: lighting.panel_intensity,
            },
        ];
        Self {
            meshes: Vec::new(),
            lights,
        }
    }

    /// Add the base card plane sized for a texture of the given pixel
    /// dimensions. Returns the mesh index.
    pub fn add_base_plane(
        &mut self,
        tex_width: u32,
        tex_height: u32,
    ) -> usize {
        let (width, height) = plane_dimensions(tex_width, tex_height);
        self.meshes.push(PlaneMesh {
            kind: PlaneKind::Base,
            width,
            height,
            position: Vec3::ZERO,
            opacity: 1.0,
        });
        self.meshes.len() - 1
    }

    /// Add the glitter overlay plane. It reuses the base plane's dimensions
    /// and sits [`GLITTER_Z_OFFSET`] in front of it, so it can only exist
    /// once a base plane does; returns `None` otherwise.
    pub fn add_glitter_plane(&mut self) -> Option<usize> {
        let base = self
            .meshes
            .iter()
            .find(|m| m.kind == PlaneKind::Base)
            .copied()?;
        self.meshes.push(PlaneMesh {
            kind: PlaneKind::Glitter,
            width: base.width,
            height: base.height,
            position: base.position + Vec3::new(0.0, 0.0, GLITTER_Z_OFFSET),
            opacity: 0.5,
        });
        Some(self.meshes.len() - 1)
    }

    /// All meshes in insertion order.
    #[must_use]
    pub fn meshes(&self) -> &[PlaneMesh] {
        &self.meshes
    }

    /// All lights.
    #[must_use]
    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Number of meshes.
    #[must_use]
    pub fn mesh_count(&self) -> usize {
        self.meshes.len()
    }

    /// Number of lights.
    #[must_use]
    pub fn light_count(&self) -> usize {
        self.lights.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plane_width_follows_texture_aspect() {
        let (w, h) = plane_dimensions(800, 600);
        assert_eq!(h, PLANE_HEIGHT);
        assert!((w / h - 800.0 / 600.0).abs() < 1e-6);
    }

    #[test]
    fn new_scene_has_two_lights_and_no_meshes() {
        let scene = Scene::new(&LightingOptions::default());
        assert_eq!(scene.light_count(), 2);
        assert_eq!(scene.mesh_count(), 0);
    }

    #[test]
    fn glitter_plane_requires_a_base_plane() {
        let mut scene = Scene::new(&LightingOptions::default());
        assert!(scene.add_glitter_plane().is_none());
        assert_eq!(scene.mesh_count(), 0);
    }

    #[test]
    fn glitter_plane_sits_exactly_in_front_of_the_base() {
        let mut scene = Scene::new(&LightingOptions::default());
        let base = scene.add_base_plane(400, 300);
        let glitter = scene.add_glitter_plane().unwrap();

        let meshes = scene.meshes();
        assert_eq!(scene.mesh_count(), 2);
        assert_eq!(meshes[base].kind, PlaneKind::Base);
        assert_eq!(meshes[glitter].kind, PlaneKind::Glitter);
        assert_eq!(
            meshes[glitter].position.z - meshes[base].position.z,
            GLITTER_Z_OFFSET
        );
        // Overlay reuses the base dimensions and renders at half opacity.
        assert_eq!(meshes[glitter].width, meshes[base].width);
        assert_eq!(meshes[glitter].height, meshes[base].height);
        assert_eq!(meshes[glitter].opacity, 0.5);
    }
}
