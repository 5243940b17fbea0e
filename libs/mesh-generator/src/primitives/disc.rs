//! # Disc Primitive
//!
//! Flat annulus in the y = 0 plane.

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;
use std::f64::consts::PI;

use super::check_divisions;

/// Creates an annulus mesh between `inner_radius` and `radius`.
///
/// Inner and outer ring points are interleaved (`2 * i` inner, `2 * i + 1`
/// outer). The mesh carries a single +Z normal referenced by every triangle
/// corner, so it needs no normal generation.
///
/// # Errors
///
/// `InvalidParameter` when `inner_radius <= 0` or `radius <= inner_radius`.
///
/// # Example
///
/// ```rust
/// use mesh_generator::primitives::create_disc;
///
/// let mesh = create_disc(2.0, 1.0, 16).unwrap();
/// assert_eq!(mesh.vertex_count(), 32);
/// assert!(create_disc(2.0, 0.0, 16).is_err());
/// ```
pub fn create_disc(radius: f64, inner_radius: f64, divisions: u32) -> Result<Mesh, MeshError> {
    if !(inner_radius > 0.0 && radius > inner_radius) {
        return Err(MeshError::invalid_parameter(format!(
            "Disc needs 0 < inner radius < radius: inner={}, radius={}",
            inner_radius, radius
        )));
    }
    check_divisions("disc", divisions)?;

    let d = divisions;
    let mut mesh = Mesh::with_capacity(d as usize * 2, d as usize * 2);

    for i in 0..d {
        let angle = i as f64 * 2.0 * PI / d as f64;
        let (z, x) = angle.sin_cos();
        mesh.add_vertex(DVec3::new(inner_radius * x, 0.0, inner_radius * z));
        mesh.add_vertex(DVec3::new(radius * x, 0.0, radius * z));
    }

    for i in 0..d {
        let current = i * 2;
        let next = ((i + 1) % d) * 2;
        mesh.add_triangle(current, current + 1, next + 1);
        mesh.add_triangle(current, next + 1, next);
    }

    let corners = mesh.triangle_count() * 3;
    mesh.set_normals(vec![DVec3::Z], vec![0; corners]);

    Ok(mesh)
}
