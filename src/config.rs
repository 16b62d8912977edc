//! Editor configuration
//!
//! Uses RON (Rusty Object Notation) for a human-readable tunables file.
//! A missing file means compiled defaults; a malformed one is reported and
//! the defaults are used, since a bad tuning file should not brick the
//! editor. A degenerate projection basis is caught later, at projection
//! construction, and is fatal.

use std::fs;
use std::path::Path;
use serde::{Serialize, Deserialize};
use crate::iso::ProjectionBasis;

/// Error type for config loading
#[derive(Debug)]
pub enum ConfigError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for ConfigError {
    fn from(e: ron::error::SpannedError) -> Self {
        ConfigError::ParseError(e)
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(e) => write!(f, "IO error: {}", e),
            ConfigError::ParseError(e) => write!(f, "Parse error: {}", e),
        }
    }
}

/// Editor tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Tile footprint in pixels at zoom 1.0
    pub tile_width: f64,
    pub tile_height: f64,
    /// Screen-space basis vectors of the isometric projection
    pub basis: ProjectionBasis,
    /// Grid dimensions in cells
    pub map_width: i32,
    pub map_height: i32,
    /// Zoom clamp range
    pub zoom_min: f64,
    pub zoom_max: f64,
    /// Camera pan per arrow-key press, in pixels
    pub pan_step: f64,
    /// Clear color behind the map
    pub background: (u8, u8, u8),
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            tile_width: 32.0,
            tile_height: 32.0,
            basis: ProjectionBasis::default(),
            map_width: 15,
            map_height: 15,
            zoom_min: 0.5,
            zoom_max: 2.0,
            pan_step: 20.0,
            background: (240, 240, 240),
        }
    }
}

impl EditorConfig {
    /// Load a config from a RON file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Ok(ron::from_str(&contents)?)
    }

    /// Load, falling back to defaults when the file is missing or malformed
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref();
        if !path.exists() {
            return Self::default();
        }
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!(
                    "Failed to load {}: {}, using default config",
                    path.display(),
                    e
                );
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_fills_defaults() {
        let config: EditorConfig = ron::from_str("(tile_width: 64.0, map_width: 8)").unwrap();
        assert!((config.tile_width - 64.0).abs() < 1e-12);
        assert_eq!(config.map_width, 8);
        // Unspecified fields come from Default
        assert_eq!(config.map_height, 15);
        assert!((config.zoom_max - 2.0).abs() < 1e-12);
    }

    #[test]
    fn test_basis_parses_from_ron() {
        let config: EditorConfig =
            ron::from_str("(basis: (i_x: 1.0, i_y: 0.25, j_x: -1.0, j_y: 0.25))").unwrap();
        assert!((config.basis.i_y - 0.25).abs() < 1e-12);
    }
}
