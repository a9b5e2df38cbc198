use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Light rig strengths. Each intensity scales the base scene colors.
pub struct LightingOptions {
    /// Directional (sun) diffuse intensity multiplier.
    pub directional_intensity: f32,
    /// Point-light diffuse intensity multiplier.
    pub point_intensity: f32,
    /// Camera spot-light intensity multiplier.
    pub spot_intensity: f32,
    /// Ambient lighting coefficient.
    pub ambient: f32,
    /// Specular lighting coefficient.
    pub specular: f32,
    /// Material shininess exponent.
    pub shininess: f32,
    /// Whether the light-cube colors cycle over time.
    pub animate_colors: bool,
}

impl Default for LightingOptions {
    fn default() -> Self {
        Self {
            directional_intensity: 1.0,
            point_intensity: 1.0,
            spot_intensity: 1.0,
            ambient: 1.0,
            specular: 0.5,
            shininess: 64.0,
            animate_colors: true,
        }
    }
}
