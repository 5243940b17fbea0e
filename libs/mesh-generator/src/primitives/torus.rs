//! # Torus Primitive
//!
//! Full or partial torus around the Y axis.

use crate::error::MeshError;
use crate::mesh::Mesh;
use config::constants::{approx_equal, approx_zero, EPSILON};
use glam::DVec3;
use std::f64::consts::TAU;

use super::{check_divisions, check_non_negative};

/// Fewest cross-section samples that still enclose an area.
const MIN_THETA_DIVISIONS: u32 = 3;

/// Creates a torus swept from `begin_angle` to `end_angle` around the Y axis.
///
/// # Arguments
///
/// * `radius` - Distance from the Y axis to the tube centre
/// * `cross_section_radius` - Tube radius
/// * `begin_angle`, `end_angle` - Sweep range in radians within `[0, 2π]`
/// * `divisions` - Division number for a full turn
///
/// A full turn (`0..2π`) wraps its last ring onto the first; a partial sweep
/// gets one extra ring so the end angle is reached, and its ends stay open.
///
/// # Example
///
/// ```rust
/// use mesh_generator::primitives::create_torus;
/// use std::f64::consts::TAU;
///
/// let mesh = create_torus(2.0, 0.5, 0.0, TAU, 20).unwrap();
/// assert_eq!(mesh.vertex_count(), 20 * 5);
/// assert_eq!(mesh.triangle_count(), 20 * 5 * 2);
/// ```
pub fn create_torus(
    radius: f64,
    cross_section_radius: f64,
    begin_angle: f64,
    end_angle: f64,
    divisions: u32,
) -> Result<Mesh, MeshError> {
    check_non_negative("Torus", "radius", radius)?;
    check_non_negative("Torus", "cross section radius", cross_section_radius)?;
    check_divisions("torus", divisions)?;

    if !(begin_angle >= 0.0 && end_angle <= TAU + EPSILON && begin_angle < end_angle) {
        return Err(MeshError::invalid_parameter(format!(
            "Torus sweep must satisfy 0 <= begin < end <= 2π: begin={}, end={}",
            begin_angle, end_angle
        )));
    }

    let is_full = approx_zero(begin_angle) && approx_equal(end_angle, TAU);
    let phi_div = if is_full {
        divisions
    } else {
        (divisions as f64 * end_angle / TAU) as u32
    };
    if phi_div == 0 {
        return Err(MeshError::invalid_parameter(format!(
            "Torus sweep ending at {} is too short for division number {}",
            end_angle, divisions
        )));
    }

    let (begin_angle, end_angle) = if is_full { (0.0, TAU) } else { (begin_angle, end_angle) };
    let phi_step = (end_angle - begin_angle) / phi_div as f64;
    let rings = if is_full { phi_div } else { phi_div + 1 };
    let theta_div = (divisions / 4).max(MIN_THETA_DIVISIONS);

    let mut mesh = Mesh::with_capacity(
        rings as usize * theta_div as usize,
        phi_div as usize * theta_div as usize * 2,
    );

    for i in 0..rings {
        let phi = begin_angle + i as f64 * phi_step;
        let (sin_phi, cos_phi) = phi.sin_cos();
        for j in 0..theta_div {
            let theta = j as f64 * TAU / theta_div as f64;
            let r = cross_section_radius * theta.cos() + radius;
            mesh.add_vertex(DVec3::new(
                cos_phi * r,
                cross_section_radius * theta.sin(),
                sin_phi * r,
            ));
        }
    }

    // Open sweeps stop at the last ring, full turns wrap to ring 0
    for i in 0..phi_div {
        let current = i * theta_div;
        let next = ((i + 1) % rings) * theta_div;
        for j in 0..theta_div {
            let j_next = (j + 1) % theta_div;
            mesh.add_triangle(current + j, next + j_next, next + j);
            mesh.add_triangle(current + j, current + j_next, next + j_next);
        }
    }

    Ok(mesh)
}
