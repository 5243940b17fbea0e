//! # Cone Primitive
//!
//! Generates mesh for Y-axis cones centred at the origin.

use crate::error::MeshError;
use crate::mesh::{Mesh, Primitive};
use glam::DVec3;
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use super::{check_divisions, check_non_negative};

/// Face groups of a cone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConeFaces {
    /// Base disc at y = -height/2
    pub bottom: bool,
    /// Slanted side
    pub side: bool,
}

impl ConeFaces {
    /// Base and side.
    pub const ALL: Self = Self {
        bottom: true,
        side: true,
    };
}

impl Default for ConeFaces {
    fn default() -> Self {
        Self::ALL
    }
}

/// Creates a cone mesh with its apex at y = +height/2.
///
/// Vertices are the base ring, the apex and the base centre, in that order.
///
/// # Example
///
/// ```rust
/// use mesh_generator::primitives::{create_cone, ConeFaces};
///
/// let mesh = create_cone(1.0, 2.0, ConeFaces::ALL, 16).unwrap();
/// assert_eq!(mesh.vertex_count(), 18);
/// assert_eq!(mesh.triangle_count(), 32);
/// ```
pub fn create_cone(
    radius: f64,
    height: f64,
    faces: ConeFaces,
    divisions: u32,
) -> Result<Mesh, MeshError> {
    check_non_negative("Cone", "radius", radius)?;
    check_non_negative("Cone", "height", height)?;
    check_divisions("cone", divisions)?;

    if !(faces.bottom || faces.side) {
        return Err(MeshError::invalid_parameter(
            "Cone needs at least one of bottom or side",
        ));
    }

    let d = divisions;
    let y = height / 2.0;
    let mut mesh = Mesh::with_capacity(d as usize + 2, d as usize * 2);

    for i in 0..d {
        let angle = i as f64 * 2.0 * PI / d as f64;
        mesh.add_vertex(DVec3::new(radius * angle.cos(), -y, radius * angle.sin()));
    }

    let apex = mesh.add_vertex(DVec3::new(0.0, y, 0.0));
    let bottom_center = mesh.add_vertex(DVec3::new(0.0, -y, 0.0));

    for i in 0..d {
        let i_next = (i + 1) % d;
        if faces.side {
            mesh.add_triangle(apex, i_next, i);
        }
        if faces.bottom {
            mesh.add_triangle(bottom_center, i, i_next);
        }
    }

    mesh.set_primitive(Primitive::Cone { radius, height });

    Ok(mesh)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cone_counts() {
        let mesh = create_cone(1.0, 1.0, ConeFaces::ALL, 8).unwrap();
        assert_eq!(mesh.vertex_count(), 10);
        assert_eq!(mesh.triangle_count(), 16);
        assert!(mesh.validate());
    }

    #[test]
    fn test_cone_apex_and_base() {
        let mesh = create_cone(2.0, 4.0, ConeFaces::ALL, 8).unwrap();
        assert_eq!(mesh.vertex(8), DVec3::new(0.0, 2.0, 0.0));
        assert_eq!(mesh.vertex(9), DVec3::new(0.0, -2.0, 0.0));
        assert!(mesh.vertices()[..8].iter().all(|v| v.y == -2.0));
    }

    #[test]
    fn test_cone_faces_point_outward() {
        let mesh = create_cone(1.0, 2.0, ConeFaces::ALL, 12).unwrap();
        // Centroid of the solid sits a quarter of the way up from the base
        let center = DVec3::new(0.0, -0.5, 0.0);
        for i in 0..mesh.triangle_count() {
            let [a, b, c] = mesh.triangle_points(i);
            let normal = (b - a).cross(c - a);
            let centroid = (a + b + c) / 3.0;
            assert!(normal.dot(centroid - center) > 0.0, "triangle {} faces inward", i);
        }
    }

    #[test]
    fn test_cone_side_only() {
        let faces = ConeFaces {
            bottom: false,
            side: true,
        };
        let mesh = create_cone(1.0, 1.0, faces, 8).unwrap();
        assert_eq!(mesh.triangle_count(), 8);
    }

    #[test]
    fn test_cone_no_faces() {
        let faces = ConeFaces {
            bottom: false,
            side: false,
        };
        assert!(create_cone(1.0, 1.0, faces, 8).is_err());
    }

    #[test]
    fn test_cone_invalid() {
        assert!(create_cone(-1.0, 1.0, ConeFaces::ALL, 8).is_err());
        assert!(create_cone(1.0, 1.0, ConeFaces::ALL, 2).is_err());
    }
}
