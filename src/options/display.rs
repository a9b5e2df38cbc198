use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Clear color and display toggles.
pub struct DisplayOptions {
    /// Background clear color (linear RGB).
    pub clear_color: [f32; 3],
    /// Whether to draw the emissive cubes marking point-light positions.
    pub show_light_cubes: bool,
    /// Base surface color of the loaded mesh (linear RGB).
    pub mesh_color: [f32; 3],
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            clear_color: [0.6, 0.7, 0.6],
            show_light_cubes: true,
            mesh_color: [0.8, 0.8, 0.85],
        }
    }
}
