//! Planar and parametric texture mappings.

use glam::{DVec2, DVec3};

use crate::extrusion::Extrusion;
use crate::mesh::Mesh;

/// Corners of the unit square shared by all box faces.
const BOX_ATLAS: [DVec2; 4] = [
    DVec2::new(0.0, 0.0),
    DVec2::new(1.0, 0.0),
    DVec2::new(0.0, 1.0),
    DVec2::new(1.0, 1.0),
];

/// Atlas corner per box triangle corner, in box triangle order.
const BOX_TEX_INDICES: [u32; 36] = [
    3, 2, 0, 0, 1, 3, //
    1, 2, 0, 1, 3, 2, //
    3, 2, 0, 3, 0, 1, //
    2, 0, 1, 2, 1, 3, //
    0, 1, 3, 0, 3, 2, //
    2, 1, 3, 2, 0, 1, //
];

/// Maps every face of a box mesh onto the full unit square.
///
/// The mesh must use the box triangle order.
pub fn generate_for_box(mesh: &mut Mesh) {
    mesh.set_tex_coords(BOX_ATLAS.to_vec(), BOX_TEX_INDICES.to_vec());
}

/// Chord-length parameterization of a swept extrusion.
///
/// The side wall gets `s` along the cross-section and `t` along the spine,
/// both normalized cumulative chord lengths over the point lists as given
/// (closing duplicates included). Each cap appends its own block of
/// cross-section points scaled into the unit square by the cross-section's
/// bounding box; the end cap is mirrored in `s` so both caps read the same
/// way from outside.
///
/// `begin_cap_triangles` and `end_cap_triangles` are the cap sizes reported
/// by the sweep.
pub fn generate_for_extrusion(
    mesh: &mut Mesh,
    extrusion: &Extrusion,
    begin_cap_triangles: usize,
    end_cap_triangles: usize,
) {
    let cross_section = &extrusion.cross_section;
    let spine = &extrusion.spine;
    let nc = cross_section.len();
    let ns = spine.len();

    let s = normalized_arc_lengths(cross_section.windows(2).map(|w| w[0].distance(w[1])));
    let t = normalized_arc_lengths(spine.windows(2).map(|w| w[0].distance(w[1])));

    let mut coords = Vec::with_capacity(nc * (ns + 2));
    for &t in &t {
        for &s in &s {
            coords.push(DVec2::new(s, t));
        }
    }

    let mut indices = Vec::with_capacity(mesh.triangle_count() * 3);
    for i in 0..ns.saturating_sub(1) {
        let upper = (i * nc) as u32;
        let lower = ((i + 1) * nc) as u32;
        for j in 0..nc.saturating_sub(1) as u32 {
            let jj = j + 1;
            indices.extend_from_slice(&[j + upper, j + lower, jj + lower]);
            indices.extend_from_slice(&[j + upper, jj + lower, jj + upper]);
        }
    }

    if begin_cap_triangles + end_cap_triangles > 0 {
        let corners = mesh.triangle_vertex_indices();
        let end_cap = corners.len() - end_cap_triangles * 3..corners.len();
        let begin_cap = end_cap.start - begin_cap_triangles * 3..end_cap.start;

        let (min, max) = cross_section
            .iter()
            .fold((DVec2::INFINITY, DVec2::NEG_INFINITY), |(min, max), p| {
                (min.min(*p), max.max(*p))
            });
        let size = max - min;
        let scale = DVec2::new(safe_recip(size.x), safe_recip(size.y));

        if begin_cap_triangles > 0 {
            let block = coords.len() as u32;
            coords.extend(cross_section.iter().map(|p| (*p - min) * scale));
            indices.extend(corners[begin_cap].iter().map(|&v| v + block));
        }

        if end_cap_triangles > 0 {
            let block = coords.len() as u32;
            let ring_start = extrusion.end_ring_start() as u32;
            coords.extend(
                cross_section
                    .iter()
                    .map(|p| DVec2::new(max.x - p.x, p.y - min.y) * scale),
            );
            indices.extend(corners[end_cap].iter().map(|&v| v - ring_start + block));
        }
    }

    mesh.set_tex_coords(coords, indices);
}

/// Projects an elevation grid onto its XZ footprint.
pub fn generate_for_elevation_grid(mesh: &mut Mesh, x_extent: f64, z_extent: f64) {
    let scale = DVec2::new(safe_recip(x_extent), safe_recip(z_extent));
    let coords = mesh
        .vertices()
        .iter()
        .map(|v| DVec2::new(v.x, v.z) * scale)
        .collect();
    let indices = mesh.triangle_vertex_indices();
    mesh.set_tex_coords(coords, indices);
}

/// Fallback mapping for arbitrary meshes.
///
/// Vertices are projected onto the two axes along which the bounding box is
/// largest. `s` spans the longest axis over `[0, 1]`; `t` uses the same scale,
/// so the mapping keeps the aspect ratio.
pub fn generate_for_indexed_face_set(mesh: &mut Mesh) {
    if mesh.is_empty() {
        return;
    }

    let (min, max) = mesh.compute_bounding_box();
    let size = max - min;
    let (s_axis, t_axis) = dominant_axes(size);
    let scale = safe_recip(size[s_axis]);

    let coords = mesh
        .vertices()
        .iter()
        .map(|v| {
            let offset = *v - min;
            DVec2::new(offset[s_axis] * scale, offset[t_axis] * scale)
        })
        .collect();
    let indices = mesh.triangle_vertex_indices();
    mesh.set_tex_coords(coords, indices);
}

/// Returns the longest and second-longest axes of `size`.
fn dominant_axes(size: DVec3) -> (usize, usize) {
    if size.x >= size.y {
        if size.x >= size.z {
            (0, if size.y >= size.z { 1 } else { 2 })
        } else {
            (2, 0)
        }
    } else if size.y >= size.z {
        (1, if size.x >= size.z { 0 } else { 2 })
    } else {
        (2, 1)
    }
}

/// Cumulative sums of `lengths`, starting at 0 and normalized to end at 1.
fn normalized_arc_lengths(lengths: impl Iterator<Item = f64>) -> Vec<f64> {
    let mut total = 0.0;
    let mut cumulative = vec![0.0];
    for length in lengths {
        total += length;
        cumulative.push(total);
    }
    let scale = safe_recip(total);
    cumulative.iter_mut().for_each(|v| *v *= scale);
    cumulative
}

/// `1 / value`, or 0 for an empty extent.
fn safe_recip(value: f64) -> f64 {
    if value > 0.0 {
        value.recip()
    } else {
        0.0
    }
}
