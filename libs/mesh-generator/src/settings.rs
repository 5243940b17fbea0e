//! # Generator Settings
//!
//! Runtime configuration of a [`crate::MeshGenerator`].

use config::constants::DEFAULT_DIVISION_NUMBER;
use serde::{Deserialize, Serialize};

/// Generator configuration.
///
/// Missing fields take their defaults when deserialized.
///
/// # Example
///
/// ```rust
/// use mesh_generator::GeneratorConfig;
///
/// let config = GeneratorConfig {
///     division_number: 32,
///     ..GeneratorConfig::default()
/// };
/// assert!(config.normal_generation);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Samples per full turn of a curved surface
    pub division_number: u32,
    /// Generate crease-angle normals
    pub normal_generation: bool,
    /// Cache the bounding box on generated meshes
    pub bounding_box_update: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            division_number: DEFAULT_DIVISION_NUMBER,
            normal_generation: true,
            bounding_box_update: true,
        }
    }
}
