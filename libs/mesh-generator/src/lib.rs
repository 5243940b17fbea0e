//! # Mesh Generator
//!
//! Procedural triangle meshes for primitive solids, swept extrusions and
//! elevation grids, with crease-angle normals and texture coordinates.
//!
//! ## Architecture
//!
//! ```text
//! Shape parameters → primitives / extrusion (Mesh)
//!                  → normals (crease angle)
//!                  → texcoord (per-shape mapping)
//! ```
//!
//! ## Coordinate Conventions
//!
//! - Curved primitives are centred at the origin with their axis along +Y
//! - Triangles are wound counter-clockwise seen from outside
//! - Normals and texture coordinates are indexed per triangle corner
//!
//! ## Usage
//!
//! ```rust
//! use mesh_generator::{MeshGenerator, Shape};
//! use glam::DVec3;
//!
//! let generator = MeshGenerator::new();
//! let mesh = generator
//!     .generate(&Shape::Box { size: DVec3::splat(2.0) }, true)
//!     .unwrap();
//! assert_eq!(mesh.vertex_count(), 8);
//! assert_eq!(mesh.triangle_count(), 12);
//! ```

pub mod error;
pub mod extrusion;
pub mod generator;
pub mod integrate;
pub mod mesh;
pub mod normals;
pub mod primitives;
pub mod settings;
pub mod shape;
pub mod texcoord;
pub mod triangulate;

pub use error::MeshError;
pub use extrusion::{AxisAngle, Extrusion, LineSet};
pub use generator::MeshGenerator;
pub use mesh::{BoundingBox, Mesh, Primitive};
pub use primitives::{ConeFaces, CylinderFaces, ElevationGrid};
pub use settings::GeneratorConfig;
pub use shape::Shape;
