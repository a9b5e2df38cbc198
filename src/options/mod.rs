//! Centralized runtime options with TOML preset support.
//!
//! All tweakable settings (camera feel, light strengths, display toggles)
//! are consolidated here. Options serialize to/from TOML so presets can be
//! kept next to the model files they suit.

mod camera;
mod display;
mod lighting;

use std::path::Path;

pub use camera::CameraOptions;
pub use display::DisplayOptions;
pub use lighting::LightingOptions;
use serde::{Deserialize, Serialize};

use crate::error::FacetError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[lighting]`) work correctly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct Options {
    /// Camera movement and projection parameters.
    pub camera: CameraOptions,
    /// Light rig strengths.
    pub lighting: LightingOptions,
    /// Clear color and display toggles.
    pub display: DisplayOptions,
}

impl Options {
    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// [`FacetError::Io`] when the file cannot be read,
    /// [`FacetError::OptionsParse`] when its contents are not valid TOML.
    pub fn load(path: &Path) -> Result<Self, FacetError> {
        let content = std::fs::read_to_string(path).map_err(FacetError::Io)?;
        toml::from_str(&content)
            .map_err(|e| FacetError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// [`FacetError::OptionsParse`] on serialization failure,
    /// [`FacetError::Io`] on write failure.
    pub fn save(&self, path: &Path) -> Result<(), FacetError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| FacetError::OptionsParse(e.to_string()))?;
        std::fs::write(path, content).map_err(FacetError::Io)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toml_round_trip_preserves_options() {
        let mut options = Options::default();
        options.camera.movement_speed = 7.5;
        options.lighting.shininess = 16.0;
        options.display.clear_color = [0.0, 0.0, 0.0];

        let text = toml::to_string_pretty(&options).unwrap();
        let parsed: Options = toml::from_str(&text).unwrap();
        assert_eq!(parsed, options);
    }

    #[test]
    fn partial_toml_keeps_defaults_for_absent_sections() {
        let parsed: Options = toml::from_str(
            "[camera]\nmouse_sensitivity = 0.25\n",
        )
        .unwrap();
        assert_eq!(parsed.camera.mouse_sensitivity, 0.25);
        assert_eq!(
            parsed.camera.movement_speed,
            CameraOptions::default().movement_speed
        );
        assert_eq!(parsed.lighting, LightingOptions::default());
        assert_eq!(parsed.display, DisplayOptions::default());
    }

    #[test]
    fn empty_toml_is_all_defaults() {
        let parsed: Options = toml::from_str("").unwrap();
        assert_eq!(parsed, Options::default());
    }
}
