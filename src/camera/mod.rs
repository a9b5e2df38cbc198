//! Free-fly camera system.
//!
//! Split the way the GPU-facing and math-facing halves differ: [`core`]
//! holds the orientation state machine (pure math, no wgpu types), while
//! [`controller`] owns the uniform buffer and bind group derived from it.
//! [`input`] translates [`crate::input::InputEvent`]s into camera
//! operations.

/// Camera GPU resources and per-frame upload.
pub mod controller;
/// Camera orientation state and view-matrix math.
pub mod core;
/// Window-event-based camera input handling.
pub mod input;
