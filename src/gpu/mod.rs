//! GPU resource plumbing: context, depth buffer, and mesh upload.
//!
//! Everything here wraps wgpu handles, which release their resources on
//! drop — acquisition is scoped to the owning struct's lifetime.

/// Depth-buffer texture/view pair.
pub mod depth;
/// Vertex/index buffer upload for parsed meshes.
pub mod mesh_buffers;
/// Core wgpu device/queue/surface owner.
pub mod render_context;
