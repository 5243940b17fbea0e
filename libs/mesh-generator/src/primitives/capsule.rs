//! # Capsule Primitive
//!
//! A Y-axis cylinder of the given height closed by two hemispheres.

use crate::error::MeshError;
use crate::mesh::{Mesh, Primitive};
use glam::DVec3;
use std::f64::consts::PI;

use super::{check_divisions, check_non_negative};

/// Creates a capsule mesh.
///
/// The latitude count is `divisions / 2` rounded up to even, so the equator
/// is sampled twice: once for the upper hemisphere (shifted by +height/2) and
/// once for the lower one (shifted by -height/2). The band between those two
/// rings forms the straight side wall.
///
/// # Example
///
/// ```rust
/// use mesh_generator::primitives::create_capsule;
///
/// let mesh = create_capsule(1.0, 2.0, 8).unwrap();
/// assert_eq!(mesh.vertex_count(), 4 * 8 + 2);
/// ```
pub fn create_capsule(radius: f64, height: f64, divisions: u32) -> Result<Mesh, MeshError> {
    check_non_negative("Capsule", "radius", radius)?;
    check_non_negative("Capsule", "height", height)?;
    check_divisions("capsule", divisions)?;

    let mut vdn = divisions / 2;
    if vdn % 2 == 1 {
        vdn += 1;
    }
    let hdn = divisions;
    let half = height / 2.0;

    let mut mesh = Mesh::with_capacity(
        vdn as usize * hdn as usize + 2,
        vdn as usize * hdn as usize * 2,
    );

    for i in 1..=vdn {
        let (y, tv) = if i <= vdn / 2 {
            (half, i as f64 * PI / vdn as f64)
        } else {
            (-half, (i - 1) as f64 * PI / vdn as f64)
        };
        for j in 0..hdn {
            let th = j as f64 * 2.0 * PI / hdn as f64;
            mesh.add_vertex(DVec3::new(
                radius * tv.sin() * th.cos(),
                radius * tv.cos() + y,
                radius * tv.sin() * th.sin(),
            ));
        }
    }

    let top = mesh.add_vertex(DVec3::new(0.0, radius + half, 0.0));
    let bottom = mesh.add_vertex(DVec3::new(0.0, -radius - half, 0.0));

    for j in 0..hdn {
        mesh.add_triangle(top, (j + 1) % hdn, j);
    }

    for i in 0..vdn - 1 {
        let upper = i * hdn;
        let lower = (i + 1) * hdn;
        for j in 0..hdn {
            let j_next = (j + 1) % hdn;
            mesh.add_triangle(j + upper, j_next + lower, j + lower);
            mesh.add_triangle(j + upper, j_next + upper, j_next + lower);
        }
    }

    let offset = (vdn - 1) * hdn;
    for j in 0..hdn {
        mesh.add_triangle(bottom, j + offset, (j + 1) % hdn + offset);
    }

    mesh.set_primitive(Primitive::Capsule { radius, height });

    Ok(mesh)
}
