use glam::Mat4;
use wgpu::util::DeviceExt;

use crate::gpu::mesh_buffers::GpuMesh;
use crate::gpu::render_context::RenderContext;
use crate::mesh::Vertex;
use crate::renderer::pipeline_util;

/// Per-object uniform: model matrix plus base surface color.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct ModelUniform {
    model: [[f32; 4]; 4],
    color: [f32; 3],
    _pad: f32,
}

/// Draw pass for the loaded mesh: pipeline + model-transform uniform.
///
/// Bind groups: 0 = camera, 1 = lighting, 2 = model (owned here).
pub struct MeshPass {
    pipeline: wgpu::RenderPipeline,
    model_uniform: ModelUniform,
    model_buffer: wgpu::Buffer,
    model_bind_group: wgpu::BindGroup,
}

impl MeshPass {
    /// Create the pipeline and the model uniform resources.
    #[must_use]
    pub fn new(
        context: &RenderContext,
        camera_layout: &wgpu::BindGroupLayout,
        lighting_layout: &wgpu::BindGroupLayout,
    ) -> Self {
        let shader = context.device.create_shader_module(wgpu::include_wgsl!(
            "../../assets/shaders/mesh.wgsl"
        ));

        let model_uniform = ModelUniform {
            model: Mat4::IDENTITY.to_cols_array_2d(),
            color: [1.0; 3],
            _pad: 0.0,
        };

        let model_buffer = context
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Model Buffer"),
                contents: bytemuck::cast_slice(&[model_uniform]),
                usage: wgpu::BufferUsages::UNIFORM
                    | wgpu::BufferUsages::COPY_DST,
            });

        let model_layout = context.device.create_bind_group_layout(
            &wgpu::BindGroupLayoutDescriptor {
                label: Some("Model Bind Group Layout"),
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

        let model_bind_group =
            context
                .device
                .create_bind_group(&wgpu::BindGroupDescriptor {
                    layout: &model_layout,
                    entries: &[wgpu::BindGroupEntry {
                        binding: 0,
                        resource: model_buffer.as_entire_binding(),
                    }],
                    label: Some("Model Bind Group"),
                });

        let pipeline = pipeline_util::create_render_pipeline(
            context,
            "Mesh Pipeline",
            &shader,
            &[camera_layout, lighting_layout, &model_layout],
            &[Vertex::buffer_layout()],
            // Mesh files carry no winding guarantee; draw both sides.
            None,
        );

        Self {
            pipeline,
            model_uniform,
            model_buffer,
            model_bind_group,
        }
    }

    /// Upload this frame's model matrix and surface color.
    pub fn update_model(
        &mut self,
        queue: &wgpu::Queue,
        model: Mat4,
        color: [f32; 3],
    ) {
        self.model_uniform.model = model.to_cols_array_2d();
        self.model_uniform.color = color;
        queue.write_buffer(&self.model_buffer, 0, bytemuck::cast_slice(&[
            self.model_uniform,
        ]));
    }

    /// Record the indexed draw. Caller opened the render pass.
    pub fn draw<'a>(
        &'a self,
        render_pass: &mut wgpu::RenderPass<'a>,
        mesh: &'a GpuMesh,
        camera_bind_group: &'a wgpu::BindGroup,
        lighting_bind_group: &'a wgpu::BindGroup,
    ) {
        if mesh.index_count == 0 {
            return;
        }
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, camera_bind_group, &[]);
        render_pass.set_bind_group(1, lighting_bind_group, &[]);
        render_pass.set_bind_group(2, &self.model_bind_group, &[]);
        render_pass.set_vertex_buffer(0, mesh.vertex_buffer.slice(..));
        render_pass.set_index_buffer(
            mesh.index_buffer.slice(..),
            wgpu::IndexFormat::Uint32,
        );
        render_pass.draw_indexed(0..mesh.index_count, 0, 0..1);
    }
}
