//! # Normal Generation
//!
//! Crease-angle normal generation. Every triangle corner receives the
//! average of the face normals around its vertex whose faces meet the corner's
//! own face at less than the crease angle. Corners of the same vertex that end
//! up with the same normal share one entry of the normal array; distinct
//! vertices never share entries.

use config::constants::NORMAL_PARALLEL_EPSILON;
use glam::DVec3;

use crate::mesh::Mesh;

/// Generates per-corner normals in place.
///
/// After the call `mesh.normals()` is populated and
/// `mesh.normal_indices().len() == mesh.triangle_count() * 3`.
///
/// # Arguments
///
/// * `mesh` - The mesh to annotate
/// * `crease_angle` - Dihedral angle (radians) below which faces are smoothed;
///   `0` keeps every edge hard except between coplanar faces, `PI` smooths all
///
/// # Example
///
/// ```rust
/// use mesh_generator::{normals::generate_normals, Mesh};
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::ZERO);
/// mesh.add_vertex(DVec3::X);
/// mesh.add_vertex(DVec3::Y);
/// mesh.add_triangle(0, 1, 2);
/// generate_normals(&mut mesh, 0.0);
///
/// let normals = mesh.normals().unwrap();
/// assert_eq!(mesh.normal_indices().len(), 3);
/// for &i in mesh.normal_indices() {
///     assert_eq!(normals[i as usize], DVec3::Z);
/// }
/// ```
pub fn generate_normals(mesh: &mut Mesh, crease_angle: f64) {
    let face_normals: Vec<DVec3> = (0..mesh.triangle_count())
        .map(|i| {
            let [a, b, c] = mesh.triangle_points(i);
            (b - a).cross(c - a).normalize_or_zero()
        })
        .collect();

    // Faces incident to each vertex
    let mut vertex_faces: Vec<Vec<usize>> = vec![Vec::new(); mesh.vertex_count()];
    for (face, tri) in mesh.triangles().iter().enumerate() {
        for &v in tri {
            let faces = &mut vertex_faces[v as usize];
            if faces.last() != Some(&face) {
                faces.push(face);
            }
        }
    }

    let cos_crease = crease_angle.cos();
    let mut normals: Vec<DVec3> = Vec::new();
    let mut normal_indices = Vec::with_capacity(mesh.triangle_count() * 3);
    // Normal indices already emitted for each vertex
    let mut vertex_normals: Vec<Vec<u32>> = vec![Vec::new(); mesh.vertex_count()];

    for (face, tri) in mesh.triangles().iter().enumerate() {
        let own = face_normals[face];
        for &v in tri {
            let mut sum = DVec3::ZERO;
            for &other in &vertex_faces[v as usize] {
                let candidate = face_normals[other];
                if other == face || is_smooth(own, candidate, cos_crease) {
                    sum += candidate;
                }
            }
            let normal = match sum.try_normalize() {
                Some(n) => n,
                None => own,
            };

            let existing = vertex_normals[v as usize]
                .iter()
                .copied()
                .find(|&index| normals[index as usize].abs_diff_eq(normal, NORMAL_PARALLEL_EPSILON));

            let index = match existing {
                Some(index) => index,
                None => {
                    let index = normals.len() as u32;
                    normals.push(normal);
                    vertex_normals[v as usize].push(index);
                    index
                }
            };
            normal_indices.push(index);
        }
    }

    mesh.set_normals(normals, normal_indices);
}

/// Returns true when two face normals should share a vertex normal.
///
/// Coplanar faces always merge; otherwise the angle between the normals
/// must be strictly below the crease angle.
fn is_smooth(a: DVec3, b: DVec3, cos_crease: f64) -> bool {
    if a == DVec3::ZERO || b == DVec3::ZERO {
        return false;
    }
    let dot = a.dot(b);
    dot >= 1.0 - NORMAL_PARALLEL_EPSILON || dot > cos_crease
}
