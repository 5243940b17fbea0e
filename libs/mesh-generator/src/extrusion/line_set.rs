//! Wireframe companion of a swept extrusion.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use super::Extrusion;
use crate::error::MeshError;
use crate::mesh::Mesh;

/// Indexed line segments.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LineSet {
    /// Line end points
    pub vertices: Vec<DVec3>,
    /// Segments as vertex index pairs
    pub lines: Vec<[u32; 2]>,
}

impl LineSet {
    /// Returns the number of segments.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Adds a segment between two vertices.
    pub fn add_line(&mut self, a: u32, b: u32) {
        self.lines.push([a, b]);
    }
}

/// Builds the cross-section rings and spine rails of a swept extrusion.
///
/// `mesh` must be the sweep of `extrusion`; its vertices are copied into the
/// line set. Each ring is outlined (closing back to its first point only when
/// the cross-section is closed) and every ring point is joined to the same
/// point of the next ring, wrapping to the first ring when the spine is
/// closed.
///
/// # Errors
///
/// `InvalidParameter` when the cross-section has fewer than 4 points, the
/// spine fewer than 2, or the mesh vertex count does not match the sweep.
pub fn create_extrusion_line_set(extrusion: &Extrusion, mesh: &Mesh) -> Result<LineSet, MeshError> {
    if extrusion.cross_section.len() < 4 || extrusion.spine.len() < 2 {
        return Err(MeshError::invalid_parameter(format!(
            "Extrusion line set needs at least 4 cross-section and 2 spine points: cross section={}, spine={}",
            extrusion.cross_section.len(),
            extrusion.spine.len()
        )));
    }

    let m = extrusion.cross_section_points().len();
    let rings = extrusion.spine_points().len();
    if mesh.vertex_count() != m * rings {
        return Err(MeshError::invalid_parameter(format!(
            "Mesh has {} vertices, the extrusion sweeps {} x {}",
            mesh.vertex_count(),
            rings,
            m
        )));
    }

    let spine_closed = extrusion.is_spine_closed();
    let ring_segments = if extrusion.is_cross_section_closed() {
        m
    } else {
        m - 1
    };

    let mut line_set = LineSet {
        vertices: mesh.vertices().to_vec(),
        lines: Vec::with_capacity(rings * m * 2),
    };

    for i in 0..rings {
        let o = (i * m) as u32;
        let next = if i + 1 < rings {
            Some(o + m as u32)
        } else if spine_closed {
            Some(0)
        } else {
            None
        };
        for j in 0..m as u32 {
            if (j as usize) < ring_segments {
                line_set.add_line(o + j, o + (j + 1) % m as u32);
            }
            if let Some(next) = next {
                line_set.add_line(o + j, next + j);
            }
        }
    }

    Ok(line_set)
}
