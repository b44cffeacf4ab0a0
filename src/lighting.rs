//! Scene lighting: ambient term plus one rectangular panel light.
//!
//! The panel light is an analytic approximation, not an LTC-based area
//! light: the shader finds the nearest point on the panel rectangle to the
//! shaded fragment and lights from there (Lambert diffuse + Blinn specular).
//! Close to the card, which is where the panel sits, this reads like a
//! soft panel reflection, which is all the sparkle card needs.

use glam::Vec3;
use wgpu::util::DeviceExt;

use crate::gpu::render_context::RenderContext;
use crate::options::LightingOptions;
use crate::scene::Light;

/// Lighting configuration shared by the plane shader.
/// NOTE: Must match the WGSL struct layout exactly (80 bytes).
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct LightingUniform {
    /// Panel center in world space.
    pub panel_pos: [f32; 3],
    /// Ambient light intensity.
    pub ambient: f32,
    /// Panel facing direction (normalized, towards the target).
    pub panel_dir: [f32; 3],
    /// Panel light intensity.
    pub panel_intensity: f32,
    /// Panel tangent along its width (normalized).
    pub panel_right: [f32; 3],
    /// Half of the panel width.
    pub half_width: f32,
    /// Panel tangent along its height (normalized).
    pub panel_up: [f32; 3],
    /// Half of the panel height.
    pub half_height: f32,
    /// Specular highlight strength.
    pub specular_strength: f32,
    /// Specular shininess exponent.
    pub shininess: f32,
    /// Padding for GPU alignment.
    pub _pad: [f32; 2],
}

impl LightingUniform {
    /// Build the uniform from the scene's light list and material response
    /// parameters. Later lights of the same kind override earlier ones.
    #[must_use]
    pub fn from_lights(lights: &[Light], options: &LightingOptions) -> Self {
        let mut ambient = 0.0;
        let mut panel_pos = Vec3::new(0.0, 2.0, 0.1);
        let mut panel_target = Vec3::ZERO;
        let mut panel_size = (1.0, 5.0);
        let mut panel_intensity = 0.0;

        for light in lights {
            match *light {
                Light::Ambient { intensity } => ambient = intensity,
                Light::RectArea {
                    position,
                    target,
                    width,
                    height,
                    intensity,
                } => {
                    panel_pos = position;
                    panel_target = target;
                    panel_size = (width, height);
                    panel_intensity = intensity;
                }
            }
        }

        let dir = (panel_target - panel_pos).normalize_or(-Vec3::Y);
        let mut right = dir.cross(Vec3::Y);
        if right.length_squared() < 1e-8 {
            // Panel aimed straight along Y; any horizontal tangent works.
            right = Vec3::X;
        } else {
            right = right.normalize();
        }
        let up = right.cross(dir).normalize();

        Self {
            panel_pos: panel_pos.to_array(),
            ambient,
            panel_dir: dir.to_array(),
            panel_intensity,
            panel_right: right.to_array(),
            half_width: panel_size.0 * 0.5,
            panel_up: up.to_array(),
            half_height: panel_size.1 * 0.5,
            specular_strength: options.specular_strength,
            shininess: options.shininess,
            _pad: [0.0; 2],
        }
    }
}

/// Lighting uniform buffer plus its bind group.
pub struct Lighting {
    /// CPU copy of the uniform.
    pub uniform: LightingUniform,
    /// The uniform buffer.
    pub buffer: wgpu::Buffer,
    /// Bind group layout (group 1 in the plane shader).
    pub layout: wgpu::BindGroupLayout,
    /// Bind group referencing the buffer.
    pub bind_group: wgpu::BindGroup,
}

impl Lighting {
    /// Create the lighting buffer and bind group from the scene's lights.
    #[must_use]
    pub fn new(
        context: &RenderContext,
        lights: &[Light],
        options: &LightingOptions,
    ) -> Self {
        let uniform = LightingUniform::from_lights(lights, options);

        let buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Lighting Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            },
        );

        let layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Lighting Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Buffer {
                        ty: wgpu::BufferBindingType::Uniform,
                        has_dynamic_offset: false,
                        min_binding_size: None,
                    },
                    count: None,
                }],
            },
        );

        let bind_group =
            context
                .device
                .create_bind_group(&wgpu::BindGroupDescriptor {
                    label: Some("Lighting Bind Group"),
                    layout: &layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: buffer.as_entire_binding(),
                    }],
                });

        Self {
            uniform,
            buffer,
            layout,
            bind_group,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uniform_picks_up_both_stock_lights() {
        let options = LightingOptions::default();
        let scene = crate::scene::Scene::new(&options);
        let uniform = LightingUniform::from_lights(scene.lights(), &options);

        assert_eq!(uniform.ambient, 3.0);
        assert_eq!(uniform.panel_intensity, 4.0);
        assert_eq!(uniform.half_width, 0.5);
        assert_eq!(uniform.half_height, 2.5);
        // Panel aims from (0, 2, 0.1) at the origin: mostly downward.
        assert!(uniform.panel_dir[1] < -0.9);
    }

    #[test]
    fn panel_basis_is_orthonormal() {
        let options = LightingOptions::default();
        let scene = crate::scene::Scene::new(&options);
        let uniform = LightingUniform::from_lights(scene.lights(), &options);

        let dir = Vec3::from_array(uniform.panel_dir);
        let right = Vec3::from_array(uniform.panel_right);
        let up = Vec3::from_array(uniform.panel_up);
        assert!((dir.length() - 1.0).abs() < 1e-5);
        assert!((right.length() - 1.0).abs() < 1e-5);
        assert!((up.length() - 1.0).abs() < 1e-5);
        assert!(dir.dot(right).abs() < 1e-5);
        assert!(dir.dot(up).abs() < 1e-5);
        assert!(right.dot(up).abs() < 1e-5);
    }
}
