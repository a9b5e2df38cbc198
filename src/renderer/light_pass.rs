use wgpu::util::DeviceExt;

use crate::gpu::render_context::RenderContext;
use crate::lighting::{
    LIGHT_CUBE_SCALE, NUM_POINT_LIGHTS, POINT_LIGHT_POSITIONS,
};
use crate::renderer::pipeline_util;

/// Unit cube (±0.5) as a non-indexed triangle list, one face at a time.
#[rustfmt::skip]
const CUBE_VERTICES: [[f32; 3]; 36] = [
    // -Z face
    [-0.5, -0.5, -0.5], [ 0.5, -0.5, -0.5], [ 0.5,  0.5, -0.5],
    [ 0.5,  0.5, -0.5], [-0.5,  0.5, -0.5], [-0.5, -0.5, -0.5],
    // +Z face
    [-0.5, -0.5,  0.5], [ 0.5, -0.5,  0.5], [ 0.5,  0.5,  0.5],
    [ 0.5,  0.5,  0.5], [-0.5,  0.5,  0.5], [-0.5, -0.5,  0.5],
    // -X face
    [-0.5,  0.5,  0.5], [-0.5,  0.5, -0.5], [-0.5, -0.5, -0.5],
    [-0.5, -0.5, -0.5], [-0.5, -0.5,  0.5], [-0.5,  0.5,  0.5],
    // +X face
    [ 0.5,  0.5,  0.5], [ 0.5,  0.5, -0.5], [ 0.5, -0.5, -0.5],
    [ 0.5, -0.5, -0.5], [ 0.5, -0.5,  0.5], [ 0.5,  0.5,  0.5],
    // -Y face
    [-0.5, -0.5, -0.5], [ 0.5, -0.5, -0.5], [ 0.5, -0.5,  0.5],
    [ 0.5, -0.5,  0.5], [-0.5, -0.5,  0.5], [-0.5, -0.5, -0.5],
    // +Y face
    [-0.5,  0.5, -0.5], [ 0.5,  0.5, -0.5], [ 0.5,  0.5,  0.5],
    [ 0.5,  0.5,  0.5], [-0.5,  0.5,  0.5], [-0.5,  0.5, -0.5],
];

/// Per-light instance data: where to draw a cube and what color it is.
#[repr(C)]
#[derive(Debug, Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct LightInstance {
    position: [f32; 3],
    scale: f32,
    color: [f32; 3],
    _pad: f32,
}

/// Instanced pass drawing a small emissive cube at each point light.
pub struct LightCubePass {
    pipeline: wgpu::RenderPipeline,
    vertex_buffer: wgpu::Buffer,
    instance_buffer: wgpu::Buffer,
    instance_count: u32,
}

impl LightCubePass {
    /// Create the pipeline, the shared cube vertex buffer, and one
    /// instance slot per point light.
    #[must_use]
    pub fn new(
        context: &RenderContext,
        camera_layout: &wgpu::BindGroupLayout,
    ) -> Self {
        let shader = context.device.create_shader_module(wgpu::include_wgsl!(
            "../../assets/shaders/light_cube.wgsl"
        ));

        let vertex_buffer = context
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Light Cube Vertex Buffer"),
                contents: bytemuck::cast_slice(&CUBE_VERTICES),
                usage: wgpu::BufferUsages::VERTEX,
            });

        let instances = Self::build_instances([1.0; 3]);
        let instance_buffer = context
            .device
            .create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Light Cube Instance Buffer"),
                contents: bytemuck::cast_slice(&instances),
                usage: wgpu::BufferUsages::VERTEX
                    | wgpu::BufferUsages::COPY_DST,
            });

        let vertex_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<[f32; 3]>()
                as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &[wgpu::VertexAttribute {
                format: wgpu::VertexFormat::Float32x3,
                offset: 0,
                shader_location: 0, // position
            }],
        };

        let instance_layout = wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<LightInstance>()
                as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Instance,
            attributes: &[
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 0,
                    shader_location: 1, // world position
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32,
                    offset: 12,
                    shader_location: 2, // scale
                },
                wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x3,
                    offset: 16,
                    shader_location: 3, // color
                },
            ],
        };

        let pipeline = pipeline_util::create_render_pipeline(
            context,
            "Light Cube Pipeline",
            &shader,
            &[camera_layout],
            &[vertex_layout, instance_layout],
            // Winding in the cube table is mixed; skip culling like the
            // mesh pass does.
            None,
        );

        Self {
            pipeline,
            vertex_buffer,
            instance_buffer,
            instance_count: NUM_POINT_LIGHTS as u32,
        }
    }

    fn build_instances(color: [f32; 3]) -> [LightInstance; NUM_POINT_LIGHTS] {
        let mut instances = [LightInstance {
            position: [0.0; 3],
            scale: LIGHT_CUBE_SCALE,
            color,
            _pad: 0.0,
        }; NUM_POINT_LIGHTS];
        for (instance, position) in
            instances.iter_mut().zip(POINT_LIGHT_POSITIONS)
        {
            instance.position = position;
        }
        instances
    }

    /// Upload this frame's cube color (positions and scale are fixed).
    pub fn update_instances(&self, queue: &wgpu::Queue, color: [f32; 3]) {
        let instances = Self::build_instances(color);
        queue.write_buffer(
            &self.instance_buffer,
            0,
            bytemuck::cast_slice(&instances),
        );
    }

    /// Record the instanced draw. Caller opened the render pass.
    pub fn draw<'a>(
        &'a self,
        render_pass: &mut wgpu::RenderPass<'a>,
        camera_bind_group: &'a wgpu::BindGroup,
    ) {
        render_pass.set_pipeline(&self.pipeline);
        render_pass.set_bind_group(0, camera_bind_group, &[]);
        render_pass.set_vertex_buffer(0, self.vertex_buffer.slice(..));
        render_pass.set_vertex_buffer(1, self.instance_buffer.slice(..));
        render_pass.draw(0..CUBE_VERTICES.len() as u32, 0..self.instance_count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cube_covers_six_faces_of_two_triangles() {
        assert_eq!(CUBE_VERTICES.len(), 36);
        for vertex in &CUBE_VERTICES {
            for component in vertex {
                assert!(component.abs() == 0.5);
            }
        }
    }

    #[test]
    fn one_instance_per_point_light() {
        let instances = LightCubePass::build_instances([0.3, 0.6, 0.9]);
        assert_eq!(instances.len(), NUM_POINT_LIGHTS);
        for (instance, position) in
            instances.iter().zip(POINT_LIGHT_POSITIONS)
        {
            assert_eq!(instance.position, position);
            assert_eq!(instance.scale, LIGHT_CUBE_SCALE);
            assert_eq!(instance.color, [0.3, 0.6, 0.9]);
        }
    }
}
