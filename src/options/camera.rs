use serde::{Deserialize, Serialize};

use crate::camera::core;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Camera movement and projection parameters.
pub struct CameraOptions {
    /// Movement speed in world units per second.
    pub movement_speed: f32,
    /// Mouse-look sensitivity (degrees per pixel of cursor travel).
    pub mouse_sensitivity: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for CameraOptions {
    fn default() -> Self {
        Self {
            movement_speed: core::DEFAULT_SPEED,
            mouse_sensitivity: core::DEFAULT_SENSITIVITY,
            znear: 0.1,
            zfar: 100.0,
        }
    }
}
