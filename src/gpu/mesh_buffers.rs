//! GPU upload boundary for parsed meshes.

use wgpu::util::DeviceExt;

use crate::mesh::MeshData;

/// A mesh resident on the GPU: one vertex buffer (full [`crate::mesh::Vertex`]
/// layout, 8 floats / 32 bytes per vertex) and one `u32` index buffer.
///
/// Uploaded once at startup and immutable afterwards; both buffers are
/// released when this struct is dropped.
pub struct GpuMesh {
    /// Vertex buffer, stride 32 bytes (position/normal/texcoord).
    pub vertex_buffer: wgpu::Buffer,
    /// Index buffer, `wgpu::IndexFormat::Uint32`.
    pub index_buffer: wgpu::Buffer,
    /// Number of indices to draw.
    pub index_count: u32,
}

impl GpuMesh {
    /// Upload parsed mesh data, consuming nothing — the caller may keep the
    /// CPU copy or drop it.
    #[must_use]
    pub fn upload(device: &wgpu::Device, mesh: &MeshData) -> Self {
        let vertex_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Mesh Vertex Buffer"),
                contents: bytemuck::cast_slice(&mesh.vertices),
                usage: wgpu::BufferUsages::VERTEX,
            });

        let index_buffer =
            device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                label: Some("Mesh Index Buffer"),
                contents: bytemuck::cast_slice(&mesh.indices),
                usage: wgpu::BufferUsages::INDEX,
            });

        Self {
            vertex_buffer,
            index_buffer,
            index_count: mesh.indices.len() as u32,
        }
    }
}
