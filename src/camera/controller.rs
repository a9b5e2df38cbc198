use glam::Vec3;
use wgpu::util::DeviceExt;

use crate::camera::core::{Camera, CameraUniform};
use crate::gpu::render_context::RenderContext;
use crate::options::CameraOptions;

/// Owns a [`Camera`] together with its GPU uniform buffer and bind group,
/// and pushes the camera's per-frame state to the GPU.
pub struct CameraController {
    /// The free-fly camera being driven.
    pub camera: Camera,
    /// CPU-side staging copy of the uniform contents.
    pub uniform: CameraUniform,
    /// Uniform buffer backing the bind group.
    pub buffer: wgpu::Buffer,
    /// Bind group layout (group 0 in every pipeline).
    pub layout: wgpu::BindGroupLayout,
    /// Bind group wrapping [`Self::buffer`].
    pub bind_group: wgpu::BindGroup,

    aspect: f32,
    znear: f32,
    zfar: f32,
}

impl CameraController {
    /// Create a controller with a camera at `position`, Y-up, facing −Z,
    /// tuned from `options`.
    #[must_use]
    pub fn new(
        context: &RenderContext,
        position: Vec3,
        options: &CameraOptions,
    ) -> Self {
        let mut camera = Camera::new(
            position,
            Vec3::Y,
            crate::camera::core::DEFAULT_YAW,
            crate::camera::core::DEFAULT_PITCH,
        );
        camera.movement_speed = options.movement_speed;
        camera.mouse_sensitivity = options.mouse_sensitivity;

        let aspect =
            context.config.width as f32 / context.config.height as f32;

        let mut uniform = CameraUniform::new();
        uniform.update_view_proj(&camera, aspect, options.znear, options.zfar);

        let buffer = context
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Camera Buffer"),
                contents: bytemuck::cast_slice(&[uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });

        let layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Camera Bind Group Layout"),
                entries: &[wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::VERTEX
                        | wgpu::ShaderStages::FRAGMENT,
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
                    layout: &layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: buffer.as_entire_binding(),
                    }],
                    label: Some("Camera Bind Group"),
                });

        Self {
            camera,
            uniform,
            buffer,
            layout,
            bind_group,
            aspect,
            znear: options.znear,
            zfar: options.zfar,
        }
    }

    /// Refresh the uniform from camera state and write it to the GPU.
    pub fn update_gpu(&mut self, queue: &wgpu::Queue) {
        self.uniform.update_view_proj(
            &self.camera,
            self.aspect,
            self.znear,
            self.zfar,
        );
        queue.write_buffer(&self.buffer, 0, bytemuck::cast_slice(&[
            self.uniform,
        ]));
    }

    /// Track a viewport resize (aspect feeds the projection matrix).
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.aspect = width as f32 / height as f32;
        }
    }
}
