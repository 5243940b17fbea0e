//! # Extrusion
//!
//! Sweeps a 2D cross-section along a 3D spine:
//! - **frame**: orientation of the cross-section plane at each spine point
//! - **sweep**: ring vertices, side quads and end caps
//! - **line_set**: wireframe of the cross-section and spine rails
//!
//! The cross-section lies in the local XZ plane (`DVec2::x` → X,
//! `DVec2::y` → Z); the local Y axis follows the spine.
//!
//! A point list whose first and last entries are exactly equal is closed.
//! Closing drops the duplicate end point and wraps the surface around.

mod frame;
mod line_set;
mod sweep;


pub use frame::spine_frames;
pub use line_set::{create_extrusion_line_set, LineSet};
pub use sweep::{create_extrusion, Sweep};

use glam::{DQuat, DVec2, DVec3};
use serde::{Deserialize, Serialize};

/// Rotation about an axis, in radians.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisAngle {
    /// Rotation axis; need not be normalized
    pub axis: DVec3,
    /// Angle in radians
    pub angle: f64,
}

impl AxisAngle {
    /// Creates an axis-angle rotation.
    pub fn new(axis: DVec3, angle: f64) -> Self {
        Self { axis, angle }
    }

    /// Converts to a quaternion. A zero axis yields the identity.
    pub fn to_quat(self) -> DQuat {
        match self.axis.try_normalize() {
            Some(axis) => DQuat::from_axis_angle(axis, self.angle),
            None => DQuat::IDENTITY,
        }
    }
}

impl Default for AxisAngle {
    fn default() -> Self {
        Self {
            axis: DVec3::Z,
            angle: 0.0,
        }
    }
}

/// Extrusion description.
///
/// `scale` and `orientation` hold zero entries (identity), one entry (shared
/// by every spine point) or one entry per spine point.
///
/// # Example
///
/// ```rust
/// use mesh_generator::extrusion::{create_extrusion, Extrusion};
///
/// let sweep = create_extrusion(&Extrusion::default()).unwrap();
/// // 4 side quads plus two capped squares
/// assert_eq!(sweep.mesh.triangle_count(), 8 + 2 + 2);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Extrusion {
    /// 2D profile swept along the spine
    pub cross_section: Vec<DVec2>,
    /// Path the profile follows
    pub spine: Vec<DVec3>,
    /// Profile scale per spine point
    pub scale: Vec<DVec2>,
    /// Profile rotation per spine point
    pub orientation: Vec<AxisAngle>,
    /// Crease angle used for normal generation
    pub crease_angle: f64,
    /// Cap the first ring (open spines only)
    pub begin_cap: bool,
    /// Cap the last ring (open spines only)
    pub end_cap: bool,
}

impl Default for Extrusion {
    fn default() -> Self {
        Self {
            cross_section: vec![
                DVec2::new(1.0, 1.0),
                DVec2::new(1.0, -1.0),
                DVec2::new(-1.0, -1.0),
                DVec2::new(-1.0, 1.0),
                DVec2::new(1.0, 1.0),
            ],
            spine: vec![DVec3::ZERO, DVec3::Y],
            scale: vec![DVec2::ONE],
            orientation: vec![AxisAngle::default()],
            crease_angle: 0.0,
            begin_cap: true,
            end_cap: true,
        }
    }
}

impl Extrusion {
    /// Returns true if the spine's first and last points are equal.
    pub fn is_spine_closed(&self) -> bool {
        is_closed(&self.spine)
    }

    /// Returns true if the cross-section's first and last points are equal.
    pub fn is_cross_section_closed(&self) -> bool {
        is_closed(&self.cross_section)
    }

    /// Spine points without the closing duplicate.
    pub fn spine_points(&self) -> &[DVec3] {
        distinct_points(&self.spine)
    }

    /// Cross-section points without the closing duplicate.
    pub fn cross_section_points(&self) -> &[DVec2] {
        distinct_points(&self.cross_section)
    }

    /// Index of the first vertex of the last ring in the swept mesh.
    pub fn end_ring_start(&self) -> usize {
        self.cross_section_points().len() * self.spine_points().len().saturating_sub(1)
    }
}

fn is_closed<T: PartialEq>(points: &[T]) -> bool {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) => points.len() > 1 && first == last,
        _ => false,
    }
}

fn distinct_points<T: PartialEq>(points: &[T]) -> &[T] {
    if is_closed(points) {
        &points[..points.len() - 1]
    } else {
        points
    }
}

/// Picks the value for spine point `index` from a 0/1/N-entry list.
///
/// A list shorter than the spine repeats its last entry.
fn per_point<T: Copy>(values: &[T], index: usize) -> Option<T> {
    match values.len() {
        0 => None,
        1 => Some(values[0]),
        _ => values.get(index).or(values.last()).copied(),
    }
}
