//! # Sphere Primitive
//!
//! Generates mesh for sphere shapes using latitude/longitude tessellation.

use crate::error::MeshError;
use crate::mesh::{Mesh, Primitive};
use glam::DVec3;
use std::f64::consts::PI;

use super::{check_divisions, check_non_negative};

/// Creates a sphere mesh using latitude/longitude tessellation.
///
/// # Arguments
///
/// * `radius` - The radius of the sphere
/// * `divisions` - Number of longitude samples per ring (at least 4)
///
/// # Returns
///
/// A mesh representing the sphere, tagged `Primitive::Sphere`.
///
/// # Algorithm
///
/// - `divisions / 2` latitude steps between the poles, rings at
///   `tv = i * PI / (divisions / 2)` for `i = 1..divisions / 2` (poles excluded)
/// - `divisions` longitude samples per ring
/// - Explicit pole vertices appended after the rings, triangulated as fans
///
/// # Example
///
/// ```rust
/// use mesh_generator::primitives::create_sphere;
///
/// let mesh = create_sphere(5.0, 32).unwrap();
/// assert_eq!(mesh.vertex_count(), 15 * 32 + 2);
/// ```
pub fn create_sphere(radius: f64, divisions: u32) -> Result<Mesh, MeshError> {
    check_non_negative("Sphere", "radius", radius)?;
    check_divisions("sphere", divisions)?;

    let vdn = divisions / 2; // latitudinal division number
    let hdn = divisions; // longitudinal division number

    let mut mesh = Mesh::with_capacity(
        (vdn as usize - 1) * hdn as usize + 2,
        (vdn as usize - 1) * hdn as usize * 2,
    );

    for i in 1..vdn {
        let tv = i as f64 * PI / vdn as f64;
        for j in 0..hdn {
            let th = j as f64 * 2.0 * PI / hdn as f64;
            mesh.add_vertex(DVec3::new(
                radius * tv.sin() * th.cos(),
                radius * tv.cos(),
                radius * tv.sin() * th.sin(),
            ));
        }
    }

    let top = mesh.add_vertex(DVec3::new(0.0, radius, 0.0));
    let bottom = mesh.add_vertex(DVec3::new(0.0, -radius, 0.0));

    // Top cap
    for j in 0..hdn {
        mesh.add_triangle(top, (j + 1) % hdn, j);
    }

    // Bands between adjacent rings
    for i in 0..vdn - 2 {
        let upper = i * hdn;
        let lower = (i + 1) * hdn;
        for j in 0..hdn {
            let j_next = (j + 1) % hdn;
            mesh.add_triangle(j + upper, j_next + lower, j + lower);
            mesh.add_triangle(j + upper, j_next + upper, j_next + lower);
        }
    }

    // Bottom cap
    let offset = (vdn - 2) * hdn;
    for j in 0..hdn {
        mesh.add_triangle(bottom, j + offset, (j + 1) % hdn + offset);
    }

    mesh.set_primitive(Primitive::Sphere { radius });

    Ok(mesh)
}
