//! # Mesh Generator
//!
//! Entry points that turn shape parameters into finished meshes: the surface
//! sampler runs first, then the cached bounding box, crease-angle normals and
//! texture coordinates are added as configured.

use config::constants::{
    BOX_CREASE_ANGLE, CAPSULE_CREASE_ANGLE, CONE_CREASE_ANGLE, CYLINDER_CREASE_ANGLE,
    DEFAULT_DIVISION_NUMBER, SPHERE_CREASE_ANGLE, TORUS_CREASE_ANGLE,
};
use glam::{DMat4, DVec3};
use log::debug;
use std::f64::consts::TAU;

use crate::error::MeshError;
use crate::extrusion::{self, Extrusion, LineSet, Sweep};
use crate::integrate::{integrate, PlacedMesh};
use crate::mesh::Mesh;
use crate::normals::generate_normals;
use crate::primitives::{self, ConeFaces, CylinderFaces, ElevationGrid};
use crate::settings::GeneratorConfig;
use crate::shape::Shape;
use crate::texcoord;

/// Procedural mesh generator.
///
/// Holds only its configuration; every call builds a fresh mesh, so a
/// generator can be shared between threads.
///
/// # Example
///
/// ```rust
/// use mesh_generator::MeshGenerator;
///
/// let mut generator = MeshGenerator::new();
/// generator.set_division_number(12);
///
/// let sphere = generator.generate_sphere(1.0, true).unwrap();
/// assert_eq!(sphere.triangle_count(), (12 / 2 - 1) * 12 * 2);
/// assert!(sphere.normals().is_some());
/// assert!(sphere.tex_coords().is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MeshGenerator {
    config: GeneratorConfig,
}

impl MeshGenerator {
    /// Creates a generator with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a generator with an explicit configuration.
    pub fn with_config(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Returns the current configuration.
    pub fn config(&self) -> GeneratorConfig {
        self.config
    }

    /// Sets the division number; negative values restore the default.
    pub fn set_division_number(&mut self, n: i32) {
        self.config.division_number = u32::try_from(n).unwrap_or(DEFAULT_DIVISION_NUMBER);
    }

    /// Returns the division number.
    pub fn division_number(&self) -> u32 {
        self.config.division_number
    }

    /// Returns the division number a new generator starts with.
    pub fn default_division_number() -> u32 {
        DEFAULT_DIVISION_NUMBER
    }

    /// Enables or disables normal generation.
    pub fn set_normal_generation_enabled(&mut self, on: bool) {
        self.config.normal_generation = on;
    }

    /// Returns true if normals are generated.
    pub fn is_normal_generation_enabled(&self) -> bool {
        self.config.normal_generation
    }

    /// Enables or disables bounding box caching.
    pub fn set_bounding_box_update_enabled(&mut self, on: bool) {
        self.config.bounding_box_update = on;
    }

    /// Returns true if generated meshes carry a cached bounding box.
    pub fn is_bounding_box_update_enabled(&self) -> bool {
        self.config.bounding_box_update
    }

    /// Builds any shape.
    ///
    /// # Errors
    ///
    /// `Unsupported` when `texture` is requested for a capsule, disc, torus
    /// or arrow; otherwise whatever the shape's own entry point returns.
    pub fn generate(&self, shape: &Shape, texture: bool) -> Result<Mesh, MeshError> {
        if texture && !shape.supports_texture_coordinates() {
            debug!("texture coordinates requested for {}", shape.kind());
            return Err(MeshError::unsupported(format!(
                "texture coordinates for {}",
                shape.kind()
            )));
        }

        match shape {
            Shape::Box { size } => self.generate_box(*size, texture),
            Shape::Sphere { radius } => self.generate_sphere(*radius, texture),
            Shape::Cylinder {
                radius,
                height,
                faces,
            } => self.generate_cylinder(*radius, *height, *faces, texture),
            Shape::Cone {
                radius,
                height,
                faces,
            } => self.generate_cone(*radius, *height, *faces, texture),
            Shape::Capsule { radius, height } => self.generate_capsule(*radius, *height),
            Shape::Disc {
                radius,
                inner_radius,
            } => self.generate_disc(*radius, *inner_radius),
            Shape::Torus {
                radius,
                cross_section_radius,
                begin_angle,
                end_angle,
            } => self.generate_partial_torus(
                *radius,
                *cross_section_radius,
                *begin_angle,
                *end_angle,
            ),
            Shape::Arrow {
                cylinder_radius,
                cylinder_height,
                cone_radius,
                cone_height,
            } => self.generate_arrow(*cylinder_radius, *cylinder_height, *cone_radius, *cone_height),
            Shape::Extrusion(extrusion) => self.generate_extrusion(extrusion, texture),
            Shape::ElevationGrid(grid) => self.generate_elevation_grid(grid, texture),
        }
    }

    /// Generates an axis-aligned box centred at the origin.
    pub fn generate_box(&self, size: DVec3, texture: bool) -> Result<Mesh, MeshError> {
        let mut mesh = primitives::create_box(size)?;
        self.finish("box", &mut mesh, Some(BOX_CREASE_ANGLE));
        if texture {
            texcoord::generate_for_box(&mut mesh);
        }
        Ok(mesh)
    }

    /// Generates a sphere centred at the origin.
    pub fn generate_sphere(&self, radius: f64, texture: bool) -> Result<Mesh, MeshError> {
        let mut mesh = primitives::create_sphere(radius, self.division_number())?;
        self.finish("sphere", &mut mesh, Some(SPHERE_CREASE_ANGLE));
        if texture {
            texcoord::generate_for_sphere(&mut mesh, radius);
        }
        Ok(mesh)
    }

    /// Generates a Y-axis cylinder centred at the origin.
    pub fn generate_cylinder(
        &self,
        radius: f64,
        height: f64,
        faces: CylinderFaces,
        texture: bool,
    ) -> Result<Mesh, MeshError> {
        let mut mesh =
            primitives::create_cylinder(radius, height, faces, self.division_number())?;
        self.finish("cylinder", &mut mesh, Some(CYLINDER_CREASE_ANGLE));
        if texture {
            texcoord::generate_for_cylinder(&mut mesh);
        }
        Ok(mesh)
    }

    /// Generates a Y-axis cone centred at the origin, apex up.
    pub fn generate_cone(
        &self,
        radius: f64,
        height: f64,
        faces: ConeFaces,
        texture: bool,
    ) -> Result<Mesh, MeshError> {
        let mut mesh = primitives::create_cone(radius, height, faces, self.division_number())?;
        self.finish("cone", &mut mesh, Some(CONE_CREASE_ANGLE));
        if texture {
            texcoord::generate_for_cone(&mut mesh);
        }
        Ok(mesh)
    }

    /// Generates a Y-axis capsule centred at the origin.
    pub fn generate_capsule(&self, radius: f64, height: f64) -> Result<Mesh, MeshError> {
        let mut mesh = primitives::create_capsule(radius, height, self.division_number())?;
        self.finish("capsule", &mut mesh, Some(CAPSULE_CREASE_ANGLE));
        Ok(mesh)
    }

    /// Generates a flat annulus in the y = 0 plane.
    ///
    /// The disc carries its own single normal whatever the normal setting.
    pub fn generate_disc(&self, radius: f64, inner_radius: f64) -> Result<Mesh, MeshError> {
        let mut mesh = primitives::create_disc(radius, inner_radius, self.division_number())?;
        self.finish("disc", &mut mesh, None);
        Ok(mesh)
    }

    /// Generates a full torus around the Y axis.
    pub fn generate_torus(&self, radius: f64, cross_section_radius: f64) -> Result<Mesh, MeshError> {
        self.generate_partial_torus(radius, cross_section_radius, 0.0, TAU)
    }

    /// Generates a torus swept from `begin_angle` to `end_angle` (radians).
    pub fn generate_partial_torus(
        &self,
        radius: f64,
        cross_section_radius: f64,
        begin_angle: f64,
        end_angle: f64,
    ) -> Result<Mesh, MeshError> {
        let mut mesh = primitives::create_torus(
            radius,
            cross_section_radius,
            begin_angle,
            end_angle,
            self.division_number(),
        )?;
        self.finish("torus", &mut mesh, Some(TORUS_CREASE_ANGLE));
        Ok(mesh)
    }

    /// Generates an arrow along +Y: a cylinder shaft centred at the origin,
    /// open at the top, with a cone head sitting on it.
    pub fn generate_arrow(
        &self,
        cylinder_radius: f64,
        cylinder_height: f64,
        cone_radius: f64,
        cone_height: f64,
    ) -> Result<Mesh, MeshError> {
        let head = self.generate_cone(cone_radius, cone_height, ConeFaces::ALL, false)?;
        let shaft_faces = CylinderFaces {
            bottom: true,
            top: false,
            side: true,
        };
        let shaft = self.generate_cylinder(cylinder_radius, cylinder_height, shaft_faces, false)?;

        let head_offset = DVec3::new(0.0, cylinder_height / 2.0 + cone_height / 2.0, 0.0);
        let mut mesh = integrate(vec![
            PlacedMesh::with_transform(head, DMat4::from_translation(head_offset)),
            PlacedMesh::new(shaft),
        ]);
        self.finish("arrow", &mut mesh, None);
        Ok(mesh)
    }

    /// Sweeps an extrusion.
    pub fn generate_extrusion(&self, extrusion: &Extrusion, texture: bool) -> Result<Mesh, MeshError> {
        let Sweep {
            mut mesh,
            begin_cap_triangles,
            end_cap_triangles,
        } = extrusion::create_extrusion(extrusion)?;
        self.finish("extrusion", &mut mesh, Some(extrusion.crease_angle));
        if texture {
            texcoord::generate_for_extrusion(
                &mut mesh,
                extrusion,
                begin_cap_triangles,
                end_cap_triangles,
            );
        }
        Ok(mesh)
    }

    /// Builds the wireframe of an extrusion from its swept mesh.
    pub fn generate_extrusion_line_set(
        &self,
        extrusion: &Extrusion,
        mesh: &Mesh,
    ) -> Result<LineSet, MeshError> {
        extrusion::create_extrusion_line_set(extrusion, mesh)
    }

    /// Generates an elevation grid.
    pub fn generate_elevation_grid(
        &self,
        grid: &ElevationGrid,
        texture: bool,
    ) -> Result<Mesh, MeshError> {
        let mut mesh = primitives::create_elevation_grid(grid)?;
        self.finish("elevation grid", &mut mesh, Some(grid.crease_angle));
        if texture {
            texcoord::generate_for_elevation_grid(
                &mut mesh,
                grid.x_spacing * f64::from(grid.x_dimension - 1),
                grid.z_spacing * f64::from(grid.z_dimension - 1),
            );
        }
        Ok(mesh)
    }

    /// Adds projected texture coordinates to an arbitrary mesh.
    pub fn generate_texture_coordinates_for_indexed_face_set(&self, mesh: &mut Mesh) {
        texcoord::generate_for_indexed_face_set(mesh);
    }

    /// Applies the configured post-processing to a freshly sampled mesh.
    fn finish(&self, kind: &str, mesh: &mut Mesh, crease_angle: Option<f64>) {
        if self.config.bounding_box_update {
            mesh.update_bounding_box();
        }
        if let (true, Some(crease_angle)) = (self.config.normal_generation, crease_angle) {
            generate_normals(mesh, crease_angle);
        }
        debug!(
            "generated {}: {} vertices, {} triangles",
            kind,
            mesh.vertex_count(),
            mesh.triangle_count()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn assert_send_sync<T: Send + Sync>() {}

    #[test]
    fn test_generator_is_send_sync() {
        assert_send_sync::<MeshGenerator>();
    }

    #[test]
    fn test_division_number_reset() {
        let mut generator = MeshGenerator::new();
        assert_eq!(generator.division_number(), MeshGenerator::default_division_number());

        generator.set_division_number(8);
        assert_eq!(generator.division_number(), 8);

        generator.set_division_number(-3);
        assert_eq!(generator.division_number(), 20);
    }

    #[test]
    fn test_toggles() {
        let mut generator = MeshGenerator::new();
        generator.set_normal_generation_enabled(false);
        generator.set_bounding_box_update_enabled(false);
        assert!(!generator.is_normal_generation_enabled());
        assert!(!generator.is_bounding_box_update_enabled());

        let mesh = generator.generate_box(DVec3::ONE, false).unwrap();
        assert!(mesh.normals().is_none());
        assert!(mesh.bounding_box().is_none());
    }

    #[test]
    fn test_box_has_flat_normals() {
        let generator = MeshGenerator::new();
        let mesh = generator.generate_box(DVec3::new(1.0, 2.0, 3.0), true).unwrap();
        let normals = mesh.normals().unwrap();
        for i in 0..mesh.triangle_count() {
            let [a, b, c] = mesh.triangle_points(i);
            let face = (b - a).cross(c - a).normalize();
            for k in 0..3 {
                let n = normals[mesh.normal_indices()[i * 3 + k] as usize];
                assert!(n.abs_diff_eq(face, 1e-12));
            }
        }
        assert!(mesh.validate_indices());
        let bbox = mesh.bounding_box().unwrap();
        assert_eq!(bbox.size(), DVec3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_sphere_normals_are_radial() {
        let mut generator = MeshGenerator::new();
        generator.set_division_number(16);
        let mesh = generator.generate_sphere(2.0, false).unwrap();
        let normals = mesh.normals().unwrap();
        for (i, tri) in mesh.triangles().iter().enumerate() {
            for (k, &v) in tri.iter().enumerate() {
                let n = normals[mesh.normal_indices()[i * 3 + k] as usize];
                let radial = mesh.vertex(v).normalize();
                assert!(n.dot(radial) > 0.95);
            }
        }
    }

    #[test]
    fn test_cylinder_rim_stays_sharp() {
        let mut generator = MeshGenerator::new();
        generator.set_division_number(8);
        let mesh = generator
            .generate_cylinder(1.0, 2.0, CylinderFaces::ALL, false)
            .unwrap();
        let normals = mesh.normals().unwrap();
        // Top cap corners point straight up
        for k in 0..3 {
            let n = normals[mesh.normal_indices()[k] as usize];
            assert!(n.abs_diff_eq(DVec3::Y, 1e-12));
        }
        // Side corners are horizontal
        for k in 3..6 {
            let n = normals[mesh.normal_indices()[k] as usize];
            assert_relative_eq!(n.y, 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_disc_keeps_own_normal() {
        let generator = MeshGenerator::new();
        let mesh = generator.generate_disc(2.0, 1.0).unwrap();
        assert_eq!(mesh.normals().unwrap(), &[DVec3::Z]);
        assert!(mesh.bounding_box().is_some());
    }

    #[test]
    fn test_arrow_assembly() {
        let mut generator = MeshGenerator::new();
        generator.set_division_number(8);
        let mesh = generator.generate_arrow(0.1, 1.0, 0.2, 0.5).unwrap();

        // Cone 8 + 2 vertices, cylinder 16 + 2
        assert_eq!(mesh.vertex_count(), 10 + 18);
        // Cone side + base, cylinder side + bottom
        assert_eq!(mesh.triangle_count(), 16 + 24);
        assert!(mesh.primitive().is_none());
        assert!(mesh.validate_indices());
        assert!(mesh.normals().is_some());

        let bbox = mesh.bounding_box().unwrap();
        assert_relative_eq!(bbox.min.y, -0.5);
        assert_relative_eq!(bbox.max.y, 1.0);
    }

    #[test]
    fn test_full_and_partial_torus() {
        let mut generator = MeshGenerator::new();
        generator.set_division_number(16);
        let full = generator.generate_torus(2.0, 0.5).unwrap();
        assert_eq!(full.vertex_count(), 16 * 4);
        assert!(full.primitive().is_none());

        let half = generator
            .generate_partial_torus(2.0, 0.5, 0.0, std::f64::consts::PI)
            .unwrap();
        assert_eq!(half.vertex_count(), 9 * 4);
    }

    #[test]
    fn test_generate_dispatch() {
        let generator = MeshGenerator::new();
        let direct = generator.generate_sphere(1.5, true).unwrap();
        let dispatched = generator
            .generate(&Shape::Sphere { radius: 1.5 }, true)
            .unwrap();
        assert_eq!(direct, dispatched);
    }

    #[test]
    fn test_generate_rejects_unsupported_texture() {
        let generator = MeshGenerator::new();
        let capsule = Shape::Capsule {
            radius: 1.0,
            height: 1.0,
        };
        assert!(matches!(
            generator.generate(&capsule, true),
            Err(MeshError::Unsupported { .. })
        ));
        assert!(generator.generate(&capsule, false).is_ok());
    }

    #[test]
    fn test_extrusion_with_texture() {
        let generator = MeshGenerator::new();
        let extrusion = Extrusion::default();
        let mesh = generator.generate_extrusion(&extrusion, true).unwrap();
        assert!(mesh.validate_indices());
        assert!(mesh.normals().is_some());
        assert!(mesh.tex_coords().is_some());

        let lines = generator
            .generate_extrusion_line_set(&extrusion, &mesh)
            .unwrap();
        assert_eq!(lines.vertices, mesh.vertices());
    }

    #[test]
    fn test_elevation_grid_with_texture() {
        let generator = MeshGenerator::new();
        let grid = ElevationGrid {
            x_dimension: 3,
            z_dimension: 2,
            x_spacing: 0.5,
            z_spacing: 2.0,
            height: vec![0.0, 1.0, 0.0, 0.0, 1.0, 0.0],
            crease_angle: 1.0,
            ccw: true,
        };
        let mesh = generator.generate_elevation_grid(&grid, true).unwrap();
        assert_eq!(mesh.triangle_count(), 4);
        assert!(mesh.validate_indices());
        assert_eq!(mesh.tex_coords().unwrap()[5], glam::DVec2::ONE);
    }
}
