//! Draw passes for the loaded mesh and the light-marker cubes.

/// Instanced emissive cubes at the point-light positions.
pub mod light_pass;
/// Lit indexed-mesh pass with a model-transform uniform.
pub mod mesh_pass;
/// Shared pipeline boilerplate.
pub mod pipeline_util;
