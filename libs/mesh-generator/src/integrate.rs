//! # Shape Integration
//!
//! Flattens a group of placed meshes into a single mesh, baking each
//! placement transform into positions and normals.

use glam::DMat4;

use crate::mesh::Mesh;

/// A mesh together with its placement in the group.
#[derive(Debug, Clone)]
pub struct PlacedMesh {
    /// Mesh in its local frame
    pub mesh: Mesh,
    /// Local-to-group transform
    pub transform: DMat4,
}

impl PlacedMesh {
    /// Places a mesh at the group origin.
    pub fn new(mesh: Mesh) -> Self {
        Self {
            mesh,
            transform: DMat4::IDENTITY,
        }
    }

    /// Places a mesh with an explicit transform.
    pub fn with_transform(mesh: Mesh, transform: DMat4) -> Self {
        Self { mesh, transform }
    }
}

/// Integrates a group of placed meshes into one mesh.
///
/// Vertex, normal and texture-coordinate indices of later members are
/// offset past the earlier ones. The result carries no primitive tag.
///
/// # Example
///
/// ```rust
/// use mesh_generator::integrate::{integrate, PlacedMesh};
/// use mesh_generator::primitives::create_box;
/// use glam::{DMat4, DVec3};
///
/// let a = create_box(DVec3::ONE).unwrap();
/// let b = create_box(DVec3::ONE).unwrap();
/// let merged = integrate(vec![
///     PlacedMesh::new(a),
///     PlacedMesh::with_transform(b, DMat4::from_translation(DVec3::X * 2.0)),
/// ]);
/// assert_eq!(merged.vertex_count(), 16);
/// assert!(merged.primitive().is_none());
/// ```
pub fn integrate(group: Vec<PlacedMesh>) -> Mesh {
    let mut result = Mesh::new();
    for PlacedMesh { mut mesh, transform } in group {
        if transform != DMat4::IDENTITY {
            mesh.transform(&transform);
        }
        result.merge(&mesh);
    }
    result
}
