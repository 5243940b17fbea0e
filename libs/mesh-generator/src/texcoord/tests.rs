//! # Texture Coordinate Tests

use super::*;
use crate::extrusion::{create_extrusion, Extrusion};
use crate::primitives::{
    create_box, create_cone, create_cylinder, create_elevation_grid, create_sphere, ConeFaces,
    CylinderFaces, ElevationGrid,
};
use approx::assert_relative_eq;
use glam::DVec3;

fn assert_in_unit_square(mesh: &Mesh) {
    for c in mesh.tex_coords().unwrap() {
        assert!((0.0..=1.0).contains(&c.x), "s out of range: {}", c.x);
        assert!((0.0..=1.0).contains(&c.y), "t out of range: {}", c.y);
    }
}

fn corner_coords(mesh: &Mesh, triangle: usize) -> [DVec2; 3] {
    let coords = mesh.tex_coords().unwrap();
    let indices = mesh.tex_coord_indices();
    [0, 1, 2].map(|k| coords[indices[triangle * 3 + k] as usize])
}

#[test]
fn test_table_deduplicates() {
    let mut table = TexCoordTable::new();
    table.push(DVec2::new(0.25, 0.5));
    table.push(DVec2::new(0.75, 0.5));
    table.push(DVec2::new(0.25, 0.5 + 1e-8));
    assert_eq!(table.coords().len(), 2);
    assert_eq!(table.indices(), &[0, 1, 0]);
}

#[test]
fn test_table_with_first() {
    let mut table = TexCoordTable::with_first(DVec2::splat(0.5));
    table.push_index(0);
    table.push(DVec2::splat(0.5));
    table.push(DVec2::ZERO);
    assert_eq!(table.indices(), &[0, 0, 1]);
}

#[test]
fn test_wrap_s() {
    assert_relative_eq!(wrap_s(0.0, 1.0), 0.5);
    assert_relative_eq!(wrap_s(1.0, 0.0), 0.75);
    assert_relative_eq!(wrap_s(-1.0, 0.0), 0.25);
    // Just below the seam on the -Z side
    assert_eq!(wrap_s(-1e-12, -1.0), 0.0);
}

#[test]
fn test_repair_seam() {
    assert_eq!(repair_seam([0.0, 0.9, 0.95]), [1.0, 0.9, 0.95]);
    assert_eq!(repair_seam([0.0, 0.1, 0.05]), [0.0, 0.1, 0.05]);
}

#[test]
fn test_sphere_texcoords() {
    let mut mesh = create_sphere(2.0, 12).unwrap();
    generate_for_sphere(&mut mesh, 2.0);

    assert!(mesh.validate_indices());
    assert_eq!(mesh.tex_coord_indices().len(), mesh.triangle_count() * 3);
    assert_in_unit_square(&mesh);

    for i in 0..mesh.triangle_count() {
        let [a, b, c] = corner_coords(&mesh, i);
        let span = a.x.max(b.x).max(c.x) - a.x.min(b.x).min(c.x);
        assert!(span <= 0.5 + 1e-9, "triangle {} straddles the seam", i);
    }

    // The first triangle is in the north pole fan
    let [pole, _, _] = corner_coords(&mesh, 0);
    assert_relative_eq!(pole.y, 1.0);
}

#[test]
fn test_cylinder_texcoords() {
    let mut mesh = create_cylinder(1.0, 2.0, CylinderFaces::ALL, 8).unwrap();
    generate_for_cylinder(&mut mesh);

    assert!(mesh.validate_indices());
    assert_in_unit_square(&mesh);
    assert_eq!(mesh.tex_coords().unwrap()[0], DVec2::splat(0.5));

    // Top cap fan: centre first
    assert_eq!(mesh.tex_coord_indices()[0], 0);

    // Side triangle: two corners on the top row, one on the bottom
    let [a, b, c] = corner_coords(&mesh, 1);
    assert_eq!(a.y, 1.0);
    assert_eq!(b.y, 0.0);
    assert_eq!(c.y, 0.0);
}

#[test]
fn test_cone_texcoords() {
    let mut mesh = create_cone(1.0, 2.0, ConeFaces::ALL, 8).unwrap();
    generate_for_cone(&mut mesh);

    assert!(mesh.validate_indices());
    assert_in_unit_square(&mesh);

    // Side fan: apex on the top row
    let [apex, b, c] = corner_coords(&mesh, 0);
    assert_eq!(apex.y, 1.0);
    assert_eq!(b.y, 0.0);
    assert_eq!(c.y, 0.0);

    // Base fan: centre first
    assert_eq!(mesh.tex_coord_indices()[3], 0);
}

#[test]
fn test_box_texcoords() {
    let mut mesh = create_box(DVec3::ONE).unwrap();
    generate_for_box(&mut mesh);
    assert_eq!(mesh.tex_coords().unwrap().len(), 4);
    assert_eq!(mesh.tex_coord_indices().len(), 36);
    assert!(mesh.validate_indices());
}

#[test]
fn test_extrusion_texcoords() {
    let extrusion = Extrusion::default();
    let sweep = create_extrusion(&extrusion).unwrap();
    let mut mesh = sweep.mesh;
    generate_for_extrusion(
        &mut mesh,
        &extrusion,
        sweep.begin_cap_triangles,
        sweep.end_cap_triangles,
    );

    // Side grid over the 5 listed points of 2 rings, then one block per cap
    assert_eq!(mesh.tex_coords().unwrap().len(), 5 * 2 + 5 + 5);
    assert!(mesh.validate_indices());
    assert_in_unit_square(&mesh);

    let coords = mesh.tex_coords().unwrap();
    for (j, expected) in [0.0, 0.25, 0.5, 0.75, 1.0].into_iter().enumerate() {
        assert_relative_eq!(coords[j].x, expected);
        assert_relative_eq!(coords[j].y, 0.0);
        assert_relative_eq!(coords[5 + j].y, 1.0);
    }

    // Begin cap block follows the side grid, the end cap block is mirrored
    assert_eq!(coords[10], DVec2::new(1.0, 1.0));
    assert_eq!(coords[15], DVec2::new(0.0, 1.0));
}

#[test]
fn test_extrusion_cap_texcoords_offset_cross_section() {
    // x and z ranges differ and neither starts at zero
    let extrusion = Extrusion {
        cross_section: vec![
            DVec2::new(7.0, 3.0),
            DVec2::new(7.0, 2.0),
            DVec2::new(5.0, 2.0),
            DVec2::new(5.0, 3.0),
            DVec2::new(7.0, 3.0),
        ],
        ..Extrusion::default()
    };
    let sweep = create_extrusion(&extrusion).unwrap();
    let mut mesh = sweep.mesh;
    generate_for_extrusion(
        &mut mesh,
        &extrusion,
        sweep.begin_cap_triangles,
        sweep.end_cap_triangles,
    );
    assert!(mesh.validate_indices());
    assert_in_unit_square(&mesh);

    let coords = mesh.tex_coords().unwrap();
    assert_eq!(coords.len(), 20);
    assert_eq!(coords[10], DVec2::new(1.0, 1.0));
    assert_eq!(coords[12], DVec2::new(0.0, 0.0));
    assert_eq!(coords[15], DVec2::new(0.0, 1.0));
    assert_eq!(coords[17], DVec2::new(1.0, 0.0));

    // Corners of each cap cover the whole unit square
    let side_corners = 4 * 2 * 3;
    let begin_corners = sweep.begin_cap_triangles * 3;
    let caps = &mesh.tex_coord_indices()[side_corners..];
    for cap in [&caps[..begin_corners], &caps[begin_corners..]] {
        let (min, max) = cap.iter().map(|&i| coords[i as usize]).fold(
            (DVec2::INFINITY, DVec2::NEG_INFINITY),
            |(min, max), p| (min.min(p), max.max(p)),
        );
        assert_eq!(min, DVec2::ZERO);
        assert_eq!(max, DVec2::ONE);
    }
}

#[test]
fn test_extrusion_texcoords_end_cap_only() {
    let extrusion = Extrusion {
        begin_cap: false,
        ..Extrusion::default()
    };
    let sweep = create_extrusion(&extrusion).unwrap();
    let mut mesh = sweep.mesh;
    generate_for_extrusion(&mut mesh, &extrusion, 0, sweep.end_cap_triangles);

    assert_eq!(mesh.tex_coords().unwrap().len(), 5 * 2 + 5);
    assert!(mesh.validate_indices());
}

#[test]
fn test_elevation_grid_texcoords() {
    let grid = ElevationGrid::flat(3, 5, 1.0, 0.5);
    let mut mesh = create_elevation_grid(&grid).unwrap();
    generate_for_elevation_grid(&mut mesh, 2.0, 2.0);

    assert!(mesh.validate_indices());
    assert_eq!(mesh.tex_coord_indices(), mesh.triangle_vertex_indices().as_slice());
    let coords = mesh.tex_coords().unwrap();
    assert_eq!(coords[0], DVec2::ZERO);
    assert_eq!(coords[14], DVec2::ONE);
}

#[test]
fn test_indexed_face_set_texcoords() {
    let mut mesh = create_box(DVec3::new(4.0, 2.0, 1.0)).unwrap();
    generate_for_indexed_face_set(&mut mesh);

    assert!(mesh.validate_indices());
    let coords = mesh.tex_coords().unwrap();
    assert_eq!(coords.len(), mesh.vertex_count());
    // x spans s, y spans t at the same scale
    for (c, v) in coords.iter().zip(mesh.vertices()) {
        assert_relative_eq!(c.x, (v.x + 2.0) / 4.0);
        assert_relative_eq!(c.y, (v.y + 1.0) / 4.0);
    }
}

#[test]
fn test_indexed_face_set_empty_mesh() {
    let mut mesh = Mesh::new();
    generate_for_indexed_face_set(&mut mesh);
    assert!(mesh.tex_coords().is_none());
}
