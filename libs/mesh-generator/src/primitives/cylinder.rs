//! # Cylinder Primitive
//!
//! Generates mesh for Y-axis cylinders centred at the origin, with
//! independently selectable caps and side wall.

use crate::error::MeshError;
use crate::mesh::{Mesh, Primitive};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use super::{check_divisions, check_non_negative};

/// Face groups of a cylinder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CylinderFaces {
    /// Disc at y = -height/2
    pub bottom: bool,
    /// Disc at y = +height/2
    pub top: bool,
    /// Side wall
    pub side: bool,
}

impl CylinderFaces {
    /// All three face groups.
    pub const ALL: Self = Self {
        bottom: true,
        top: true,
        side: true,
    };

    fn is_empty(&self) -> bool {
        !(self.bottom || self.top || self.side)
    }
}

impl Default for CylinderFaces {
    fn default() -> Self {
        Self::ALL
    }
}

/// Creates a cylinder mesh.
///
/// # Arguments
///
/// * `radius` - Radius of both rings
/// * `height` - Extent along Y, centred at the origin
/// * `faces` - Which face groups to triangulate
/// * `divisions` - Samples per ring (at least 4)
///
/// # Returns
///
/// A mesh whose vertices are the top ring, the bottom ring, the top centre
/// and the bottom centre, in that order. Every vertex is emitted whatever the
/// face selection.
///
/// # Example
///
/// ```rust
/// use mesh_generator::primitives::{create_cylinder, CylinderFaces};
///
/// let mesh = create_cylinder(5.0, 10.0, CylinderFaces::ALL, 32).unwrap();
/// assert_eq!(mesh.vertex_count(), 66);
/// assert_eq!(mesh.triangle_count(), 128);
/// ```
pub fn create_cylinder(
    radius: f64,
    height: f64,
    faces: CylinderFaces,
    divisions: u32,
) -> Result<Mesh, MeshError> {
    check_non_negative("Cylinder", "radius", radius)?;
    check_non_negative("Cylinder", "height", height)?;
    check_divisions("cylinder", divisions)?;

    if faces.is_empty() {
        return Err(MeshError::invalid_parameter(
            "Cylinder needs at least one of bottom, top or side",
        ));
    }

    let d = divisions;
    let y = height / 2.0;
    let mut mesh = Mesh::with_capacity(d as usize * 2 + 2, d as usize * 4);

    let ring: Vec<(f64, f64)> = (0..d)
        .map(|i| {
            let angle = i as f64 * 2.0 * PI / d as f64;
            (radius * angle.cos(), radius * angle.sin())
        })
        .collect();

    for &(x, z) in &ring {
        mesh.add_vertex(DVec3::new(x, y, z));
    }
    for &(x, z) in &ring {
        mesh.add_vertex(DVec3::new(x, -y, z));
    }

    let top_center = mesh.add_vertex(DVec3::new(0.0, y, 0.0));
    let bottom_center = mesh.add_vertex(DVec3::new(0.0, -y, 0.0));

    for i in 0..d {
        let i_next = (i + 1) % d;
        if faces.top {
            mesh.add_triangle(top_center, i_next, i);
        }
        if faces.side {
            mesh.add_triangle(i, i_next + d, i + d);
            mesh.add_triangle(i, i_next, i_next + d);
        }
        if faces.bottom {
            mesh.add_triangle(bottom_center, i + d, i_next + d);
        }
    }

    mesh.set_primitive(Primitive::Cylinder { radius, height });

    Ok(mesh)
}
