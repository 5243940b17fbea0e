//! # Texture Coordinates
//!
//! Builders that unwrap each primitive family into the unit square:
//! - **box**: fixed four-point atlas
//! - **sphere**, **cylinder**, **cone**: angular unwrapping with seam repair
//! - **extrusion**: chord-length parameterization plus planar caps
//! - **elevation grid**: planar XZ projection
//! - **indexed face set**: projection onto the two dominant bounding-box axes
//!
//! Builders that emit coordinates per triangle corner deduplicate them with
//! [`TexCoordTable`], so corners sharing a coordinate share an index.

mod angular;
mod planar;

#[cfg(test)]
mod tests;

pub use angular::{generate_for_cone, generate_for_cylinder, generate_for_sphere};
pub use planar::{
    generate_for_box, generate_for_elevation_grid, generate_for_extrusion,
    generate_for_indexed_face_set,
};

use config::constants::{SEAM_EPSILON, TEXCOORD_MERGE_EPSILON};
use glam::DVec2;

use crate::mesh::Mesh;

/// Texture coordinates under construction, with per-corner indices.
#[derive(Debug, Clone, Default)]
pub struct TexCoordTable {
    coords: Vec<DVec2>,
    indices: Vec<u32>,
}

impl TexCoordTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a table whose index 0 is `point`.
    pub fn with_first(point: DVec2) -> Self {
        Self {
            coords: vec![point],
            indices: Vec::new(),
        }
    }

    /// Appends a corner referencing an existing coordinate.
    pub fn push_index(&mut self, index: u32) {
        self.indices.push(index);
    }

    /// Appends a corner at `point`, reusing a coordinate within
    /// `TEXCOORD_MERGE_EPSILON` on both axes if one exists.
    ///
    /// The lookup is a linear scan, which stays cheap at primitive sizes.
    pub fn push(&mut self, point: DVec2) {
        let index = match self
            .coords
            .iter()
            .position(|c| c.abs_diff_eq(point, TEXCOORD_MERGE_EPSILON))
        {
            Some(found) => found as u32,
            None => {
                self.coords.push(point);
                (self.coords.len() - 1) as u32
            }
        };
        self.indices.push(index);
    }

    /// Returns the distinct coordinates.
    pub fn coords(&self) -> &[DVec2] {
        &self.coords
    }

    /// Returns the per-corner indices.
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Stores the table on the mesh.
    pub fn apply(self, mesh: &mut Mesh) {
        mesh.set_tex_coords(self.coords, self.indices);
    }
}

/// Horizontal unwrap coordinate of a direction around the Y axis, in `[0, 1]`.
///
/// Values within `SEAM_EPSILON` of zero snap to zero.
pub(crate) fn wrap_s(x: f64, z: f64) -> f64 {
    let s = (x.atan2(z) + std::f64::consts::PI) / std::f64::consts::TAU;
    if s < SEAM_EPSILON {
        0.0
    } else {
        s.min(1.0)
    }
}

/// Moves corners on the seam to `s = 1` when the triangle lies on the far
/// side of the unwrap.
pub(crate) fn repair_seam(s: [f64; 3]) -> [f64; 3] {
    if s.iter().any(|&v| v > 0.5) {
        s.map(|v| if v == 0.0 { 1.0 } else { v })
    } else {
        s
    }
}
