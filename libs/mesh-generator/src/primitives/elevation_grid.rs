//! # Elevation Grid
//!
//! Height field over a regular grid in the XZ plane.

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;
use log::debug;
use serde::{Deserialize, Serialize};

use super::check_non_negative;

/// Height-field description.
///
/// `height` is row-major: the sample at column `x` of row `z` is
/// `height[z * x_dimension + x]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ElevationGrid {
    /// Samples along X
    pub x_dimension: u32,
    /// Samples along Z
    pub z_dimension: u32,
    /// Distance between columns
    pub x_spacing: f64,
    /// Distance between rows
    pub z_spacing: f64,
    /// One height per sample
    pub height: Vec<f64>,
    /// Crease angle used for normal generation
    pub crease_angle: f64,
    /// Counter-clockwise winding when seen from +Y
    pub ccw: bool,
}

impl Default for ElevationGrid {
    fn default() -> Self {
        Self {
            x_dimension: 0,
            z_dimension: 0,
            x_spacing: 1.0,
            z_spacing: 1.0,
            height: Vec::new(),
            crease_angle: 0.0,
            ccw: true,
        }
    }
}

impl ElevationGrid {
    /// Creates a flat grid of the given size.
    pub fn flat(x_dimension: u32, z_dimension: u32, x_spacing: f64, z_spacing: f64) -> Self {
        Self {
            x_dimension,
            z_dimension,
            x_spacing,
            z_spacing,
            height: vec![0.0; (x_dimension * z_dimension) as usize],
            ..Self::default()
        }
    }

    /// Returns the height sample at column `x` of row `z`.
    #[inline]
    pub fn height_at(&self, x: u32, z: u32) -> f64 {
        self.height[(z * self.x_dimension + x) as usize]
    }
}

/// Creates the mesh of an elevation grid.
///
/// Vertices are emitted row by row; each cell is split into two triangles
/// sharing the diagonal from `(x, z)` to `(x + 1, z + 1)`.
///
/// # Errors
///
/// `InvalidParameter` when the height count does not match the dimensions,
/// a dimension is below 2 or a spacing is negative.
///
/// # Example
///
/// ```rust
/// use mesh_generator::primitives::{create_elevation_grid, ElevationGrid};
///
/// let grid = ElevationGrid::flat(3, 3, 1.0, 1.0);
/// let mesh = create_elevation_grid(&grid).unwrap();
/// assert_eq!(mesh.triangle_count(), 8);
/// ```
pub fn create_elevation_grid(grid: &ElevationGrid) -> Result<Mesh, MeshError> {
    let xd = grid.x_dimension;
    let zd = grid.z_dimension;

    if (xd as usize) * (zd as usize) != grid.height.len() {
        debug!(
            "elevation grid rejected: {} x {} samples but {} heights",
            xd,
            zd,
            grid.height.len()
        );
        return Err(MeshError::invalid_parameter(format!(
            "Elevation grid of {} x {} needs {} heights, got {}",
            xd,
            zd,
            xd as usize * zd as usize,
            grid.height.len()
        )));
    }
    if xd < 2 || zd < 2 {
        return Err(MeshError::invalid_parameter(format!(
            "Elevation grid needs at least 2 x 2 samples: {} x {}",
            xd, zd
        )));
    }
    if grid.height.len() > u32::MAX as usize {
        return Err(MeshError::invalid_parameter(format!(
            "Elevation grid of {} x {} exceeds u32 vertex indices",
            xd, zd
        )));
    }
    check_non_negative("Elevation grid", "x spacing", grid.x_spacing)?;
    check_non_negative("Elevation grid", "z spacing", grid.z_spacing)?;

    let mut mesh = Mesh::with_capacity(
        grid.height.len(),
        (xd as usize - 1) * (zd as usize - 1) * 2,
    );

    for z in 0..zd {
        for x in 0..xd {
            mesh.add_vertex(DVec3::new(
                x as f64 * grid.x_spacing,
                grid.height_at(x, z),
                z as f64 * grid.z_spacing,
            ));
        }
    }

    for z in 0..zd - 1 {
        let current = z * xd;
        let next = (z + 1) * xd;
        for x in 0..xd - 1 {
            if grid.ccw {
                mesh.add_triangle(x + current, x + next, x + 1 + next);
                mesh.add_triangle(x + current, x + 1 + next, x + 1 + current);
            } else {
                mesh.add_triangle(x + current, x + 1 + next, x + next);
                mesh.add_triangle(x + current, x + 1 + current, x + 1 + next);
            }
        }
    }

    Ok(mesh)
}
