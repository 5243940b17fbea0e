//! # Shape Descriptions
//!
//! Closed set of shapes the generator can build, for callers that pick the
//! shape kind at run time.

use glam::DVec3;
use serde::{Deserialize, Serialize};

use crate::extrusion::Extrusion;
use crate::primitives::{ConeFaces, CylinderFaces, ElevationGrid};

/// A shape with its parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Shape {
    /// Axis-aligned box
    Box {
        /// Full extents
        size: DVec3,
    },
    /// Sphere
    Sphere {
        /// Radius
        radius: f64,
    },
    /// Y-axis cylinder
    Cylinder {
        /// Radius
        radius: f64,
        /// Extent along Y
        height: f64,
        /// Face groups to build
        faces: CylinderFaces,
    },
    /// Y-axis cone, apex up
    Cone {
        /// Base radius
        radius: f64,
        /// Extent along Y
        height: f64,
        /// Face groups to build
        faces: ConeFaces,
    },
    /// Y-axis capsule
    Capsule {
        /// Radius
        radius: f64,
        /// Length of the cylindrical part
        height: f64,
    },
    /// Flat annulus
    Disc {
        /// Outer radius
        radius: f64,
        /// Inner radius
        inner_radius: f64,
    },
    /// Torus around the Y axis, swept over `[begin_angle, end_angle]`
    Torus {
        /// Distance from the axis to the tube centre
        radius: f64,
        /// Tube radius
        cross_section_radius: f64,
        /// Sweep start in radians
        begin_angle: f64,
        /// Sweep end in radians
        end_angle: f64,
    },
    /// Cylinder shaft with a cone head
    Arrow {
        /// Shaft radius
        cylinder_radius: f64,
        /// Shaft length
        cylinder_height: f64,
        /// Head base radius
        cone_radius: f64,
        /// Head length
        cone_height: f64,
    },
    /// Cross-section swept along a spine
    Extrusion(Extrusion),
    /// Height field
    ElevationGrid(ElevationGrid),
}

impl Shape {
    /// Short lowercase name of the shape kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Shape::Box { .. } => "box",
            Shape::Sphere { .. } => "sphere",
            Shape::Cylinder { .. } => "cylinder",
            Shape::Cone { .. } => "cone",
            Shape::Capsule { .. } => "capsule",
            Shape::Disc { .. } => "disc",
            Shape::Torus { .. } => "torus",
            Shape::Arrow { .. } => "arrow",
            Shape::Extrusion(_) => "extrusion",
            Shape::ElevationGrid(_) => "elevation grid",
        }
    }

    /// Returns true if texture coordinates can be generated for this kind.
    pub fn supports_texture_coordinates(&self) -> bool {
        !matches!(
            self,
            Shape::Capsule { .. } | Shape::Disc { .. } | Shape::Torus { .. } | Shape::Arrow { .. }
        )
    }
}
