//! # Box Primitive
//!
//! Generates mesh for axis-aligned boxes centred at the origin.

use crate::error::MeshError;
use crate::mesh::{Mesh, Primitive};
use glam::DVec3;

use super::check_non_negative;

/// Triangles of the box, two per face, counter-clockwise seen from outside.
///
/// Face order is +Z, +Y, -X, -Y, +X, -Z; the box texture atlas relies on it.
pub(crate) const BOX_TRIANGLES: [[u32; 3]; 12] = [
    [0, 1, 2],
    [2, 3, 0],
    [0, 5, 1],
    [0, 4, 5],
    [1, 5, 6],
    [1, 6, 2],
    [2, 6, 7],
    [2, 7, 3],
    [3, 7, 4],
    [3, 4, 0],
    [4, 6, 5],
    [4, 7, 6],
];

/// Creates a box mesh centred at the origin.
///
/// # Arguments
///
/// * `size` - Full extents [x, y, z]; zero extents are allowed
///
/// # Returns
///
/// A mesh with 8 vertices and 12 triangles (2 per face), tagged
/// `Primitive::Box`.
///
/// # Example
///
/// ```rust
/// use mesh_generator::primitives::create_box;
/// use glam::DVec3;
///
/// let mesh = create_box(DVec3::splat(10.0)).unwrap();
/// assert_eq!(mesh.vertex_count(), 8);
/// assert_eq!(mesh.triangle_count(), 12);
/// ```
pub fn create_box(size: DVec3) -> Result<Mesh, MeshError> {
    check_non_negative("Box", "size.x", size.x)?;
    check_non_negative("Box", "size.y", size.y)?;
    check_non_negative("Box", "size.z", size.z)?;

    let h = size * 0.5;
    let mut mesh = Mesh::with_capacity(8, 12);

    // Upper ring (z = +h.z), then lower ring (z = -h.z)
    mesh.add_vertex(DVec3::new(h.x, h.y, h.z));
    mesh.add_vertex(DVec3::new(-h.x, h.y, h.z));
    mesh.add_vertex(DVec3::new(-h.x, -h.y, h.z));
    mesh.add_vertex(DVec3::new(h.x, -h.y, h.z));
    mesh.add_vertex(DVec3::new(h.x, h.y, -h.z));
    mesh.add_vertex(DVec3::new(-h.x, h.y, -h.z));
    mesh.add_vertex(DVec3::new(-h.x, -h.y, -h.z));
    mesh.add_vertex(DVec3::new(h.x, -h.y, -h.z));

    for [a, b, c] in BOX_TRIANGLES {
        mesh.add_triangle(a, b, c);
    }

    mesh.set_primitive(Primitive::Box { size });

    Ok(mesh)
}
