//! # Primitives
//!
//! Surface samplers for the primitive solids. Each function takes its shape
//! parameters plus an explicit division number and returns vertices,
//! triangles and the analytic primitive tag; normals, texture coordinates and
//! bounds are left to the generator.

pub mod capsule;
pub mod cone;
pub mod cuboid;
pub mod cylinder;
pub mod disc;
pub mod elevation_grid;
pub mod sphere;
pub mod torus;

pub use capsule::create_capsule;
pub use cone::{create_cone, ConeFaces};
pub use cuboid::create_box;
pub use cylinder::{create_cylinder, CylinderFaces};
pub use disc::create_disc;
pub use elevation_grid::{create_elevation_grid, ElevationGrid};
pub use sphere::create_sphere;
pub use torus::create_torus;

use config::constants::{MAX_DIVISION_NUMBER, MIN_CURVED_DIVISION_NUMBER};
use log::debug;

use crate::error::MeshError;

/// Rejects negative (or NaN) dimensions.
pub(crate) fn check_non_negative(shape: &str, name: &str, value: f64) -> Result<(), MeshError> {
    if value >= 0.0 {
        Ok(())
    } else {
        debug!("{} rejected: {} = {}", shape, name, value);
        Err(MeshError::invalid_parameter(format!(
            "{} {} must be non-negative: {}",
            shape, name, value
        )))
    }
}

/// Rejects division numbers too coarse for a curved solid, or so fine that
/// its indices would not fit in `u32`.
pub(crate) fn check_divisions(shape: &'static str, divisions: u32) -> Result<(), MeshError> {
    if divisions < MIN_CURVED_DIVISION_NUMBER {
        debug!("{} rejected: division number {}", shape, divisions);
        return Err(MeshError::insufficient_resolution(
            shape,
            divisions,
            MIN_CURVED_DIVISION_NUMBER,
        ));
    }
    if divisions > MAX_DIVISION_NUMBER {
        debug!("{} rejected: division number {}", shape, divisions);
        return Err(MeshError::invalid_parameter(format!(
            "{} division number {} exceeds {}",
            shape, divisions, MAX_DIVISION_NUMBER
        )));
    }
    Ok(())
}
