//! CPU-side mesh representation and the mesh-file loader.
//!
//! [`loader`] parses a Wavefront-OBJ-style text file into a [`MeshData`]:
//! a deduplicated vertex buffer plus an index sequence, ready for indexed
//! GPU rendering via [`crate::gpu::mesh_buffers::GpuMesh`].

/// Mesh-file parsing and vertex deduplication.
pub mod loader;

/// A single deduplicated vertex: 8 floats, 32-byte stride.
///
/// Two corners are considered the same vertex when their position and
/// texture coordinate match; the normal is intentionally excluded from
/// that identity (corners sharing position+uv across faces collapse to
/// one vertex even if their source normals differ).
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, bytemuck::Pod, bytemuck::Zeroable)]
pub struct Vertex {
    /// Position in object space.
    pub position: [f32; 3],
    /// Normal vector. Zero when the source file omitted it for a corner.
    pub normal: [f32; 3],
    /// Texture coordinate, nominally in [0, 1]. Zero when omitted.
    pub tex_coord: [f32; 2],
}

impl Vertex {
    const ATTRIBUTES: [wgpu::VertexAttribute; 3] = [
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x3,
            offset: 0,
            shader_location: 0, // position
        },
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x3,
            offset: 12,
            shader_location: 1, // normal
        },
        wgpu::VertexAttribute {
            format: wgpu::VertexFormat::Float32x2,
            offset: 24,
            shader_location: 2, // tex_coord
        },
    ];

    /// Vertex buffer layout matching the mesh shader's locations 0/1/2.
    #[must_use]
    pub fn buffer_layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>()
                as wgpu::BufferAddress,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRIBUTES,
        }
    }
}

/// Indexed triangle mesh produced by the loader.
///
/// `vertices` holds unique vertices in first-seen order; `indices` holds
/// one entry per face corner of the source file, each a valid offset into
/// `vertices`. Immutable after load — ownership moves to the GPU upload.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeshData {
    /// Unique vertices, insertion order = first-seen order.
    pub vertices: Vec<Vertex>,
    /// Triangle corner indices into `vertices`, three per face.
    pub indices: Vec<u32>,
}

impl MeshData {
    /// Number of triangles described by the index buffer.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns `true` if both vertex and index buffers are non-empty.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        !self.vertices.is_empty() && !self.indices.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vertex_stride_is_eight_floats() {
        assert_eq!(std::mem::size_of::<Vertex>(), 32);
    }

    #[test]
    fn mesh_data_validity() {
        let data = MeshData {
            vertices: vec![Vertex {
                position: [0.0; 3],
                normal: [0.0, 0.0, 1.0],
                tex_coord: [0.0; 2],
            }],
            indices: vec![0, 0, 0],
        };
        assert!(data.is_valid());
        assert_eq!(data.triangle_count(), 1);
        assert!(!MeshData::default().is_valid());
    }
}
