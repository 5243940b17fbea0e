//! Angular unwrapping for the solids of revolution.

use glam::{DVec2, DVec3};
use std::f64::consts::PI;

use super::{repair_seam, wrap_s, TexCoordTable};
use crate::mesh::Mesh;

/// Centre of a cap disc in texture space.
const CAP_CENTER: DVec2 = DVec2::new(0.5, 0.5);

/// Equirectangular unwrap of a sphere mesh.
///
/// `s` runs once around the Y axis, `t` from the south pole (0) to the
/// north pole (1).
pub fn generate_for_sphere(mesh: &mut Mesh, radius: f64) {
    let mut table = TexCoordTable::new();

    for i in 0..mesh.triangle_count() {
        let points = mesh.triangle_points(i);
        let s = repair_seam(points.map(|p| wrap_s(p.x, p.z)));
        for (p, s) in points.iter().zip(s) {
            let w = if radius > 0.0 {
                (p.y / radius).clamp(-1.0, 1.0)
            } else {
                0.0
            };
            table.push(DVec2::new(s, 1.0 - w.acos() / PI));
        }
    }

    table.apply(mesh);
}

/// Unwraps a cylinder mesh: the side wall onto the full square, each cap
/// onto a disc inscribed in it. Index 0 is the shared cap centre.
pub fn generate_for_cylinder(mesh: &mut Mesh) {
    let mut table = TexCoordTable::with_first(CAP_CENTER);

    for i in 0..mesh.triangle_count() {
        let points = mesh.triangle_points(i);
        let is_cap = points[1].y == points[0].y && points[2].y == points[0].y;

        if !is_cap {
            let s = repair_seam(points.map(|p| wrap_s(p.x, p.z)));
            for (p, s) in points.iter().zip(s) {
                let t = if p.y > 0.0 { 1.0 } else { 0.0 };
                table.push(DVec2::new(s, t));
            }
        } else {
            let top = points[0].y > 0.0;
            for p in &points {
                if is_axis_point(p) {
                    table.push_index(0);
                    continue;
                }
                let (sin, cos) = p.z.atan2(p.x).sin_cos();
                let t = if top { 0.5 - 0.5 * sin } else { 0.5 + 0.5 * sin };
                table.push(DVec2::new(0.5 + 0.5 * cos, t));
            }
        }
    }

    table.apply(mesh);
}

/// Unwraps a cone mesh: the side fans out from the apex row at `t = 1`, the
/// base maps onto a disc. Index 0 is the base centre.
pub fn generate_for_cone(mesh: &mut Mesh) {
    let mut table = TexCoordTable::with_first(CAP_CENTER);

    for i in 0..mesh.triangle_count() {
        let points = mesh.triangle_points(i);

        match points.iter().rposition(|p| p.y > 0.0) {
            Some(apex) => {
                let mut s = [0.0; 3];
                let mut previous: Option<usize> = None;
                for (j, p) in points.iter().enumerate() {
                    if j == apex {
                        continue;
                    }
                    s[j] = wrap_s(p.x, p.z);
                    // Second base corner sitting on the seam after one past it
                    if let Some(k) = previous {
                        if s[k] > 0.5 && s[j] == 0.0 {
                            s[j] = 1.0;
                        }
                    }
                    previous = Some(j);
                }
                for j in 0..3 {
                    if j == apex {
                        table.push(DVec2::new((s[0] + s[1] + s[2]) / 2.0, 1.0));
                    } else {
                        table.push(DVec2::new(s[j], 0.0));
                    }
                }
            }
            None => {
                for p in &points {
                    if is_axis_point(p) {
                        table.push_index(0);
                        continue;
                    }
                    let (sin, cos) = p.z.atan2(p.x).sin_cos();
                    table.push(DVec2::new(0.5 + 0.5 * cos, 0.5 + 0.5 * sin));
                }
            }
        }
    }

    table.apply(mesh);
}

fn is_axis_point(p: &DVec3) -> bool {
    p.x == 0.0 && p.z == 0.0
}
