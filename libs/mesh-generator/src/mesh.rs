//! # Mesh Data Structure
//!
//! Core mesh representation: vertices, triangles, indexed normals, indexed
//! texture coordinates and an optional analytic primitive tag.

use config::constants::EPSILON;
use glam::{DMat4, DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// Analytic description of a primitive solid.
///
/// Kept next to the tessellation for consumers that prefer exact shape data
/// (collision, ray casting) over triangles.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Primitive {
    /// Axis-aligned box centred at the origin
    Box {
        /// Full extents
        size: DVec3,
    },
    /// Sphere centred at the origin
    Sphere {
        /// Radius
        radius: f64,
    },
    /// Y-aligned cylinder centred at the origin
    Cylinder {
        /// Radius
        radius: f64,
        /// Extent along Y
        height: f64,
    },
    /// Y-aligned cone centred at the origin, apex at `+height / 2`
    Cone {
        /// Base radius
        radius: f64,
        /// Extent along Y
        height: f64,
    },
    /// Y-aligned capsule
    Capsule {
        /// Radius of the hemispheres and the tube
        radius: f64,
        /// Length of the cylindrical part
        height: f64,
    },
}

/// Axis-aligned bounding box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    /// Minimum corner
    pub min: DVec3,
    /// Maximum corner
    pub max: DVec3,
}

impl BoundingBox {
    /// Returns the extent along each axis.
    #[inline]
    pub fn size(&self) -> DVec3 {
        self.max - self.min
    }

    /// Returns the centre point.
    #[inline]
    pub fn center(&self) -> DVec3 {
        (self.min + self.max) * 0.5
    }
}

/// A triangle mesh with indexed normals and texture coordinates.
///
/// All geometry calculations use f64 internally. Normals and texture
/// coordinates are indexed per triangle corner, so `normal_indices` and
/// `tex_coord_indices` hold three entries per triangle when present.
///
/// # Example
///
/// ```rust
/// use mesh_generator::Mesh;
/// use glam::DVec3;
///
/// let mut mesh = Mesh::new();
/// mesh.add_vertex(DVec3::new(0.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(1.0, 0.0, 0.0));
/// mesh.add_vertex(DVec3::new(0.0, 1.0, 0.0));
/// mesh.add_triangle(0, 1, 2);
/// assert!(mesh.validate_indices());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Vertex positions (f64 for precision)
    vertices: Vec<DVec3>,
    /// Triangle indices (3 indices per triangle)
    triangles: Vec<[u32; 3]>,
    /// Optional normal vectors
    normals: Option<Vec<DVec3>>,
    /// Normal index per triangle corner
    normal_indices: Vec<u32>,
    /// Optional texture coordinates
    tex_coords: Option<Vec<DVec2>>,
    /// Texture-coordinate index per triangle corner
    tex_coord_indices: Vec<u32>,
    /// Analytic shape tag
    primitive: Option<Primitive>,
    /// Cached bounds, refreshed by `update_bounding_box`
    bounding_box: Option<BoundingBox>,
}

impl Mesh {
    /// Creates an empty mesh.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mesh with pre-allocated capacity.
    pub fn with_capacity(vertex_count: usize, triangle_count: usize) -> Self {
        Self {
            vertices: Vec::with_capacity(vertex_count),
            triangles: Vec::with_capacity(triangle_count),
            ..Self::default()
        }
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of triangles.
    #[inline]
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    /// Returns true if the mesh is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Adds a vertex and returns its index.
    pub fn add_vertex(&mut self, position: DVec3) -> u32 {
        let index = self.vertices.len() as u32;
        self.vertices.push(position);
        index
    }

    /// Adds a triangle by vertex indices.
    pub fn add_triangle(&mut self, v0: u32, v1: u32, v2: u32) {
        self.triangles.push([v0, v1, v2]);
    }

    /// Returns a reference to the vertices.
    #[inline]
    pub fn vertices(&self) -> &[DVec3] {
        &self.vertices
    }

    /// Returns a reference to the triangles.
    #[inline]
    pub fn triangles(&self) -> &[[u32; 3]] {
        &self.triangles
    }

    /// Returns the vertex at the given index.
    #[inline]
    pub fn vertex(&self, index: u32) -> DVec3 {
        self.vertices[index as usize]
    }

    /// Returns the triangle at the given index.
    #[inline]
    pub fn triangle(&self, index: usize) -> [u32; 3] {
        self.triangles[index]
    }

    /// Returns the corner positions of a triangle.
    #[inline]
    pub fn triangle_points(&self, index: usize) -> [DVec3; 3] {
        let [a, b, c] = self.triangles[index];
        [
            self.vertices[a as usize],
            self.vertices[b as usize],
            self.vertices[c as usize],
        ]
    }

    /// Sets indexed normals.
    ///
    /// `indices` must hold one entry per triangle corner.
    pub fn set_normals(&mut self, normals: Vec<DVec3>, indices: Vec<u32>) {
        self.normals = Some(normals);
        self.normal_indices = indices;
    }

    /// Returns the normals.
    pub fn normals(&self) -> Option<&[DVec3]> {
        self.normals.as_deref()
    }

    /// Returns the per-corner normal indices.
    pub fn normal_indices(&self) -> &[u32] {
        &self.normal_indices
    }

    /// Sets indexed texture coordinates.
    ///
    /// `indices` must hold one entry per triangle corner.
    pub fn set_tex_coords(&mut self, tex_coords: Vec<DVec2>, indices: Vec<u32>) {
        self.tex_coords = Some(tex_coords);
        self.tex_coord_indices = indices;
    }

    /// Returns the texture coordinates.
    pub fn tex_coords(&self) -> Option<&[DVec2]> {
        self.tex_coords.as_deref()
    }

    /// Returns the per-corner texture-coordinate indices.
    pub fn tex_coord_indices(&self) -> &[u32] {
        &self.tex_coord_indices
    }

    /// Flattens the triangle list into per-corner vertex indices.
    pub fn triangle_vertex_indices(&self) -> Vec<u32> {
        self.triangles.iter().flatten().copied().collect()
    }

    /// Sets the analytic primitive tag.
    pub fn set_primitive(&mut self, primitive: Primitive) {
        self.primitive = Some(primitive);
    }

    /// Returns the analytic primitive tag, if any.
    pub fn primitive(&self) -> Option<&Primitive> {
        self.primitive.as_ref()
    }

    /// Computes the axis-aligned bounding box.
    ///
    /// Returns (min, max) corners of the bounding box.
    pub fn compute_bounding_box(&self) -> (DVec3, DVec3) {
        if self.vertices.is_empty() {
            return (DVec3::ZERO, DVec3::ZERO);
        }

        let mut min = self.vertices[0];
        let mut max = self.vertices[0];

        for v in &self.vertices[1..] {
            min = min.min(*v);
            max = max.max(*v);
        }

        (min, max)
    }

    /// Recomputes and caches the bounding box.
    pub fn update_bounding_box(&mut self) {
        let (min, max) = self.compute_bounding_box();
        self.bounding_box = Some(BoundingBox { min, max });
    }

    /// Returns the cached bounding box, if it has been computed.
    pub fn bounding_box(&self) -> Option<&BoundingBox> {
        self.bounding_box.as_ref()
    }

    /// Transforms all vertices by a 4x4 matrix.
    ///
    /// The primitive tag is dropped since the shape is no longer in its
    /// canonical placement.
    pub fn transform(&mut self, matrix: &DMat4) {
        for v in &mut self.vertices {
            *v = matrix.transform_point3(*v);
        }

        // Normals use the inverse transpose
        if let Some(normals) = &mut self.normals {
            let normal_matrix = matrix.inverse().transpose();
            for n in normals {
                *n = normal_matrix.transform_vector3(*n).normalize_or_zero();
            }
        }

        self.primitive = None;
        if self.bounding_box.is_some() {
            self.update_bounding_box();
        }
    }

    /// Merges another mesh into this one.
    ///
    /// Normals and texture coordinates survive only when both meshes carry
    /// them (or this mesh had no triangles yet).
    pub fn merge(&mut self, other: &Mesh) {
        let was_empty = self.triangles.is_empty();
        let offset = self.vertices.len() as u32;

        self.vertices.extend_from_slice(&other.vertices);

        for tri in &other.triangles {
            self.triangles
                .push([tri[0] + offset, tri[1] + offset, tri[2] + offset]);
        }

        self.normals = merge_attribute(
            self.normals.take(),
            &mut self.normal_indices,
            other.normals.as_deref(),
            &other.normal_indices,
            was_empty,
        );
        self.tex_coords = merge_attribute(
            self.tex_coords.take(),
            &mut self.tex_coord_indices,
            other.tex_coords.as_deref(),
            &other.tex_coord_indices,
            was_empty,
        );

        self.primitive = None;
        self.bounding_box = None;
    }

    /// Checks that every index array stays within its target array and
    /// that the per-corner arrays match the triangle count.
    pub fn validate_indices(&self) -> bool {
        let vertex_count = self.vertices.len() as u32;
        let corner_count = self.triangles.len() * 3;

        if self
            .triangles
            .iter()
            .flatten()
            .any(|&index| index >= vertex_count)
        {
            return false;
        }

        if let Some(normals) = &self.normals {
            if self.normal_indices.len() != corner_count
                || self
                    .normal_indices
                    .iter()
                    .any(|&index| index as usize >= normals.len())
            {
                return false;
            }
        }

        if let Some(tex_coords) = &self.tex_coords {
            if self.tex_coord_indices.len() != corner_count
                || self
                    .tex_coord_indices
                    .iter()
                    .any(|&index| index as usize >= tex_coords.len())
            {
                return false;
            }
        }

        true
    }

    /// Validates the mesh for correctness.
    ///
    /// Checks:
    /// - All index arrays are valid (see [`Mesh::validate_indices`])
    /// - No degenerate triangles (repeated index or zero area)
    ///
    /// Returns true if valid.
    pub fn validate(&self) -> bool {
        if !self.validate_indices() {
            return false;
        }

        for tri in &self.triangles {
            if tri[0] == tri[1] || tri[1] == tri[2] || tri[0] == tri[2] {
                return false;
            }

            let v0 = self.vertices[tri[0] as usize];
            let v1 = self.vertices[tri[1] as usize];
            let v2 = self.vertices[tri[2] as usize];
            let area = (v1 - v0).cross(v2 - v0).length();
            if area < EPSILON {
                return false;
            }
        }

        true
    }
}

/// Appends an indexed attribute of `other` onto `own`, re-offsetting indices.
fn merge_attribute<T: Copy>(
    own: Option<Vec<T>>,
    own_indices: &mut Vec<u32>,
    other: Option<&[T]>,
    other_indices: &[u32],
    own_was_empty: bool,
) -> Option<Vec<T>> {
    match (own, other) {
        (Some(mut values), Some(theirs)) => {
            let offset = values.len() as u32;
            values.extend_from_slice(theirs);
            own_indices.extend(other_indices.iter().map(|i| i + offset));
            Some(values)
        }
        (None, Some(theirs)) if own_was_empty => {
            own_indices.clear();
            own_indices.extend_from_slice(other_indices);
            Some(theirs.to_vec())
        }
        _ => {
            own_indices.clear();
            None
        }
    }
}
