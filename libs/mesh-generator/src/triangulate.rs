//! # Polygon Triangulation
//!
//! Ear clipping for planar (or near-planar) 3D polygons, used to cap the open
//! ends of extrusions. The polygon is projected onto its best-fit plane
//! (Newell normal), so output triangles keep the winding of the input ring.

use config::constants::EPSILON;
use glam::{DVec2, DVec3};
use log::warn;

use crate::error::MeshError;

/// Triangulates a simple polygon by ear clipping.
///
/// # Arguments
///
/// * `polygon` - Ring of points in order; the closing edge is implicit
///
/// # Returns
///
/// Triangles as index triples into `polygon`, `polygon.len() - 2` of them for
/// a simple polygon. Triangles follow the ring's winding.
///
/// # Example
///
/// ```rust
/// use mesh_generator::triangulate::triangulate_polygon;
/// use glam::DVec3;
///
/// let square = [
///     DVec3::new(0.0, 0.0, 0.0),
///     DVec3::new(1.0, 0.0, 0.0),
///     DVec3::new(1.0, 1.0, 0.0),
///     DVec3::new(0.0, 1.0, 0.0),
/// ];
/// let triangles = triangulate_polygon(&square).unwrap();
/// assert_eq!(triangles.len(), 2);
/// ```
pub fn triangulate_polygon(polygon: &[DVec3]) -> Result<Vec<[usize; 3]>, MeshError> {
    let n = polygon.len();
    if n < 3 {
        return Err(MeshError::degenerate(format!(
            "Polygon must have at least 3 vertices: {}",
            n
        )));
    }
    if n == 3 {
        return Ok(vec![[0, 1, 2]]);
    }

    let normal = newell_normal(polygon);
    let Some(normal) = normal.try_normalize() else {
        return Err(MeshError::degenerate("Polygon has zero area"));
    };

    // In-plane basis with u x v == normal, so the ring is counter-clockwise in 2D
    let u = normal.any_orthonormal_vector();
    let v = normal.cross(u);
    let points: Vec<DVec2> = polygon
        .iter()
        .map(|p| DVec2::new(p.dot(u), p.dot(v)))
        .collect();

    let mut ring: Vec<usize> = (0..n).collect();
    let mut triangles = Vec::with_capacity(n - 2);
    let mut cursor = 0;
    let mut misses = 0;

    while ring.len() > 3 {
        let len = ring.len();
        let prev = ring[(cursor + len - 1) % len];
        let ear = ring[cursor % len];
        let next = ring[(cursor + 1) % len];

        if is_ear(prev, ear, next, &ring, &points) {
            triangles.push([prev, ear, next]);
            ring.remove(cursor % len);
            misses = 0;
            if cursor >= ring.len() {
                cursor = 0;
            }
            continue;
        }

        cursor = (cursor + 1) % len;
        misses += 1;
        if misses > len {
            // Self-intersecting or fully collinear remainder
            warn!(
                "ear clipping found no ear among {} remaining vertices, fanning the rest",
                len
            );
            for i in 1..len - 1 {
                triangles.push([ring[0], ring[i], ring[i + 1]]);
            }
            return Ok(triangles);
        }
    }

    triangles.push([ring[0], ring[1], ring[2]]);
    Ok(triangles)
}

/// Newell's method: robust normal of a possibly non-convex polygon.
fn newell_normal(polygon: &[DVec3]) -> DVec3 {
    let mut normal = DVec3::ZERO;
    for (i, a) in polygon.iter().enumerate() {
        let b = polygon[(i + 1) % polygon.len()];
        normal.x += (a.y - b.y) * (a.z + b.z);
        normal.y += (a.z - b.z) * (a.x + b.x);
        normal.z += (a.x - b.x) * (a.y + b.y);
    }
    normal
}

fn orient2d(a: DVec2, b: DVec2, c: DVec2) -> f64 {
    (b - a).perp_dot(c - a)
}

fn is_ear(prev: usize, ear: usize, next: usize, ring: &[usize], points: &[DVec2]) -> bool {
    let a = points[prev];
    let b = points[ear];
    let c = points[next];

    // Reflex or collinear corner
    if orient2d(a, b, c) <= EPSILON {
        return false;
    }

    ring.iter()
        .filter(|&&i| i != prev && i != ear && i != next)
        .all(|&i| !point_in_triangle(a, b, c, points[i]))
}

fn point_in_triangle(a: DVec2, b: DVec2, c: DVec2, p: DVec2) -> bool {
    orient2d(a, b, p) >= -EPSILON && orient2d(b, c, p) >= -EPSILON && orient2d(c, a, p) >= -EPSILON
}
