//! # Configuration Constants
//!
//! Centralized constants for the mesh generator. All tessellation defaults,
//! crease angles and precision values are defined here.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Resolution**: Default and minimum division numbers
//! - **Crease Angles**: Per-shape smoothing thresholds for normal generation

use std::f64::consts::{FRAC_PI_2, PI};

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// Used for determining if two floating-point values are "equal" within
/// numerical tolerance.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Tolerance for merging texture coordinates.
///
/// Two UV points closer than this on both axes are treated as the same entry
/// of a texture-coordinate array.
///
/// # Example
///
/// ```rust
/// use config::constants::TEXCOORD_MERGE_EPSILON;
///
/// let a = [0.25_f64, 0.5];
/// let b = [0.25_f64 + 1e-9, 0.5];
/// let same = (a[0] - b[0]).abs() <= TEXCOORD_MERGE_EPSILON
///     && (a[1] - b[1]).abs() <= TEXCOORD_MERGE_EPSILON;
/// assert!(same);
/// ```
pub const TEXCOORD_MERGE_EPSILON: f64 = 1e-6;

/// Threshold below which a normalized seam coordinate snaps to zero.
///
/// Longitude angles mapped to `[0, 1]` that land within this distance of zero
/// are treated as exactly zero so the seam rule can promote them to `1.0`.
pub const SEAM_EPSILON: f64 = 1e-6;

/// Tolerance used when deciding that two face normals are parallel.
///
/// Faces whose unit normals have a dot product of at least `1 - NORMAL_PARALLEL_EPSILON`
/// always share a vertex normal, even with a zero crease angle.
pub const NORMAL_PARALLEL_EPSILON: f64 = 1e-9;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default division number for curved primitives.
///
/// A negative division request resets the generator to this value.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_DIVISION_NUMBER;
///
/// assert_eq!(DEFAULT_DIVISION_NUMBER, 20);
/// ```
pub const DEFAULT_DIVISION_NUMBER: u32 = 20;

/// Minimum division number for curved primitives.
///
/// Spheres, cylinders, cones, capsules, discs and tori are rejected below
/// this resolution.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_DIVISION_NUMBER, MIN_CURVED_DIVISION_NUMBER};
///
/// assert!(DEFAULT_DIVISION_NUMBER >= MIN_CURVED_DIVISION_NUMBER);
/// ```
pub const MIN_CURVED_DIVISION_NUMBER: u32 = 4;

/// Largest accepted division number.
///
/// A sphere at this resolution has just under `u32::MAX` triangles, so every
/// vertex index and count of a curved solid stays within `u32`.
pub const MAX_DIVISION_NUMBER: u32 = 65_535;

// =============================================================================
// CREASE ANGLE CONSTANTS
// =============================================================================

/// Crease angle for boxes: every edge stays hard.
pub const BOX_CREASE_ANGLE: f64 = 0.0;

/// Crease angle for spheres: fully smooth.
pub const SPHERE_CREASE_ANGLE: f64 = PI;

/// Crease angle for cylinders: smooth side, hard rims.
pub const CYLINDER_CREASE_ANGLE: f64 = FRAC_PI_2;

/// Crease angle for cones: smooth side, hard base rim.
pub const CONE_CREASE_ANGLE: f64 = FRAC_PI_2;

/// Crease angle for capsules.
pub const CAPSULE_CREASE_ANGLE: f64 = FRAC_PI_2;

/// Crease angle for tori: fully smooth.
pub const TORUS_CREASE_ANGLE: f64 = PI;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
