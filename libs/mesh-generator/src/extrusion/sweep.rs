//! # Extrusion Sweep
//!
//! Places one cross-section ring per spine point and stitches consecutive
//! rings with quads. Open spines may be capped at either end.

use glam::{DMat3, DVec2, DVec3};
use log::debug;

use super::{per_point, spine_frames, Extrusion};
use crate::error::MeshError;
use crate::mesh::Mesh;
use crate::triangulate::triangulate_polygon;

/// Result of sweeping an extrusion.
///
/// Cap triangles come after all side triangles: first the begin cap, then
/// the end cap.
#[derive(Debug, Clone)]
pub struct Sweep {
    /// Swept surface
    pub mesh: Mesh,
    /// Triangles in the begin cap
    pub begin_cap_triangles: usize,
    /// Triangles in the end cap
    pub end_cap_triangles: usize,
}

/// Sweeps the cross-section along the spine.
///
/// # Errors
///
/// `DegenerateGeometry` when the spine or the cross-section has fewer than
/// two points, counted before or after dropping a closing duplicate.
///
/// # Example
///
/// ```rust
/// use mesh_generator::extrusion::{create_extrusion, Extrusion};
/// use glam::DVec3;
///
/// let extrusion = Extrusion {
///     spine: vec![DVec3::ZERO, DVec3::Y, DVec3::Y * 2.0],
///     ..Extrusion::default()
/// };
/// let sweep = create_extrusion(&extrusion).unwrap();
/// assert_eq!(sweep.mesh.vertex_count(), 3 * 4);
/// ```
pub fn create_extrusion(extrusion: &Extrusion) -> Result<Sweep, MeshError> {
    if extrusion.spine.len() < 2 || extrusion.cross_section.len() < 2 {
        return Err(MeshError::degenerate(format!(
            "Extrusion needs at least 2 spine and 2 cross-section points: spine={}, cross section={}",
            extrusion.spine.len(),
            extrusion.cross_section.len()
        )));
    }

    let spine = extrusion.spine_points();
    let cross_section = extrusion.cross_section_points();
    if spine.len() < 2 || cross_section.len() < 2 {
        return Err(MeshError::degenerate(
            "Extrusion collapses to fewer than 2 distinct spine or cross-section points",
        ));
    }

    let spine_closed = extrusion.is_spine_closed();
    let ns = spine.len();
    let nc = cross_section.len();
    let frames = spine_frames(spine, spine_closed);

    let mut mesh = Mesh::with_capacity(ns * nc, ns * nc * 2 + 2 * nc);

    for (i, (&point, frame)) in spine.iter().zip(&frames).enumerate() {
        let scale = per_point(&extrusion.scale, i).unwrap_or(DVec2::ONE);
        let orientation = per_point(&extrusion.orientation, i)
            .map(|rotation| DMat3::from_quat(rotation.to_quat()))
            .unwrap_or(DMat3::IDENTITY);
        let basis = *frame * orientation;

        for c in cross_section {
            let local = DVec3::new(c.x * scale.x, 0.0, c.y * scale.y);
            mesh.add_vertex(basis * local + point);
        }
    }

    // Closed lists add the segment that wraps back to index 0
    let rings = if spine_closed { ns } else { ns - 1 };
    let segments = if extrusion.is_cross_section_closed() {
        nc
    } else {
        nc - 1
    };

    for i in 0..rings {
        let upper = (i * nc) as u32;
        let lower = (((i + 1) % ns) * nc) as u32;
        for j in 0..segments {
            let jj = ((j + 1) % nc) as u32;
            let j = j as u32;
            mesh.add_triangle(j + upper, j + lower, jj + lower);
            mesh.add_triangle(j + upper, jj + lower, jj + upper);
        }
    }

    let mut begin_cap_triangles = 0;
    let mut end_cap_triangles = 0;

    if !spine_closed {
        if extrusion.begin_cap {
            let triangles = cap_triangles(&mesh.vertices()[..nc]);
            begin_cap_triangles = triangles.len();
            for [a, b, c] in triangles {
                mesh.add_triangle(a, b, c);
            }
        }
        if extrusion.end_cap {
            let start = nc * (ns - 1);
            let offset = start as u32;
            let triangles = cap_triangles(&mesh.vertices()[start..start + nc]);
            end_cap_triangles = triangles.len();
            for [a, b, c] in triangles {
                mesh.add_triangle(a + offset, c + offset, b + offset);
            }
        }
    }

    debug!(
        "extrusion swept: {} rings of {} points, caps {}+{} triangles",
        ns, nc, begin_cap_triangles, end_cap_triangles
    );

    Ok(Sweep {
        mesh,
        begin_cap_triangles,
        end_cap_triangles,
    })
}

/// Triangulates a cap ring in its own winding.
///
/// A ring without area (fewer than 3 points, or scaled to a line or point)
/// gets no cap.
fn cap_triangles(ring: &[DVec3]) -> Vec<[u32; 3]> {
    if ring.len() < 3 {
        return Vec::new();
    }
    match triangulate_polygon(ring) {
        Ok(triangles) => triangles
            .into_iter()
            .map(|tri| tri.map(|i| i as u32))
            .collect(),
        Err(err) => {
            debug!("extrusion cap skipped: {}", err);
            Vec::new()
        }
    }
}
