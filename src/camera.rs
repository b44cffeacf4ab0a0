//! Perspective camera and its GPU uniform.

use glam::{Mat4, Vec3};
use wgpu::util::DeviceExt;

use crate::gpu::render_context::RenderContext;
use crate::options::CameraOptions;

/// Perspective camera defined by eye position, target, and projection
/// parameters.
pub struct Camera {
    /// Eye (camera) position in world space.
    pub eye: Vec3,
    /// Look-at target position.
    pub target: Vec3,
    /// Up direction vector.
    pub up: Vec3,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Vertical field of view in degrees.
    pub fovy: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Camera {
    /// Create a camera looking at the origin from `(0, 0, distance)`.
    ///
    /// The aspect ratio comes straight from the given surface size; there is
    /// no zero-size guard at construction time.
    #[must_use]
    pub fn new(width: u32, height: u32, options: &CameraOptions) -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, options.distance),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: width as f32 / height as f32,
            fovy: options.fovy,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Build the combined view-projection matrix.
    #[must_use]
    pub fn build_matrix(&self) -> Mat4 {
        let view = Mat4::look_at_rh(self.eye, self.target, self.up);
        // perspective_rh already uses [0,1] depth range (wgpu convention)
        let proj = Mat4::perspective_rh(
            self.fovy.to_radians(),
            self.aspect,
            self.znear,
            self.zfar,
        );
        proj * view
    }

    /// Update the aspect ratio for a new surface size. Zero-sized dimensions
    /// leave the aspect unchanged.
    pub fn set_aspect(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }
}

/// GPU uniform buffer holding the view-projection matrix and eye position.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    /// Combined view-projection matrix.
    pub view_proj: [[f32; 4]; 4],
    /// Camera world-space position (for specular highlights).
    pub position: [f32; 3],
    /// Padding for GPU alignment.
    pub _pad: f32,
}

impl CameraUniform {
    /// Capture the camera's current view-projection matrix and position.
    #[must_use]
    pub fn from_camera(camera: &Camera) -> Self {
        Self {
            view_proj: camera.build_matrix().to_cols_array_2d(),
            position: camera.eye.to_array(),
            _pad: 0.0,
        }
    }
}

/// Camera uniform buffer plus its bind group.
pub struct CameraBinding {
    /// The uniform buffer.
    pub buffer: wgpu::Buffer,
    /// Bind group layout (group 0 in the plane shader).
    pub layout: wgpu::BindGroupLayout,
    /// Bind group referencing the buffer.
    pub bind_group: wgpu::BindGroup,
}

impl CameraBinding {
    /// Create the buffer and bind group from the camera's current state.
    #[must_use]
    pub fn new(context: &RenderContext, camera: &Camera) -> Self {
        let uniform = CameraUniform::from_camera(camera);
        let buffer = context.device.create_buffer_init(
            &wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            },
        );

        let layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX
                        .union(wgpu::ShaderStages::FRAGMENT),
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
                    label: Some("Camera Bind Group"),
                    layout: &layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: buffer.as_entire_binding(),
                    }],
                });

        Self {
            buffer,
            layout,
            bind_group,
        }
    }

    /// Re-upload the view-projection matrix after a camera change.
    pub fn update_gpu(&self, queue: &wgpu::Queue, camera: &Camera) {
        let uniform = CameraUniform::from_camera(camera);
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[uniform]));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::CameraOptions;

    #[test]
    fn aspect_comes_from_surface_size() {
        let camera = Camera::new(400, 300, &CameraOptions::default());
        assert!((camera.aspect - 4.0 / 3.0).abs() < 1e-6);
        assert_eq!(camera.fovy, 40.0);
        assert_eq!(camera.znear, 0.1);
        assert_eq!(camera.zfar, 100.0);
    }

    #[test]
    fn zero_size_resize_keeps_aspect() {
        let mut camera = Camera::new(400, 300, &CameraOptions::default());
        let before = camera.aspect;
        camera.set_aspect(0, 300);
        camera.set_aspect(400, 0);
        camera.set_aspect(0, 0);
        assert_eq!(camera.aspect, before);
        camera.set_aspect(800, 400);
        assert!((camera.aspect - 2.0).abs() < 1e-6);
    }
}
