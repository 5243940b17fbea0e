//! # Tests for Config Constants
//!
//! Unit tests verifying the correctness of configuration constants
//! and helper functions.

use crate::constants::*;
use std::f64::consts::PI;

// =============================================================================
// PRECISION TESTS
// =============================================================================

#[test]
fn test_epsilon_is_positive() {
    assert!(EPSILON > 0.0, "EPSILON must be positive");
}

#[test]
fn test_epsilon_is_small() {
    assert!(EPSILON < 1e-6, "EPSILON should be small for precision");
}

#[test]
fn test_texcoord_epsilon_larger_than_epsilon() {
    assert!(
        TEXCOORD_MERGE_EPSILON >= EPSILON,
        "TEXCOORD_MERGE_EPSILON should be >= EPSILON"
    );
}

#[test]
fn test_seam_epsilon_is_small() {
    assert!(SEAM_EPSILON > 0.0 && SEAM_EPSILON < 1e-3);
}

// =============================================================================
// RESOLUTION TESTS
// =============================================================================

#[test]
fn test_default_division_number() {
    assert_eq!(DEFAULT_DIVISION_NUMBER, 20);
}

#[test]
fn test_default_division_satisfies_minimum() {
    assert!(DEFAULT_DIVISION_NUMBER >= MIN_CURVED_DIVISION_NUMBER);
    assert!(DEFAULT_DIVISION_NUMBER <= MAX_DIVISION_NUMBER);
}

// =============================================================================
// CREASE ANGLE TESTS
// =============================================================================

#[test]
fn test_crease_angles_in_range() {
    for angle in [
        BOX_CREASE_ANGLE,
        SPHERE_CREASE_ANGLE,
        CYLINDER_CREASE_ANGLE,
        CONE_CREASE_ANGLE,
        CAPSULE_CREASE_ANGLE,
        TORUS_CREASE_ANGLE,
    ] {
        assert!((0.0..=PI).contains(&angle));
    }
}

#[test]
fn test_box_edges_are_hard() {
    assert_eq!(BOX_CREASE_ANGLE, 0.0);
}

// =============================================================================
// HELPER TESTS
// =============================================================================

#[test]
fn test_approx_equal() {
    assert!(approx_equal(1.0, 1.0));
    assert!(approx_equal(1.0, 1.0 + 1e-11));
    assert!(!approx_equal(1.0, 1.0 + 1e-9));
}

#[test]
fn test_approx_zero() {
    assert!(approx_zero(0.0));
    assert!(approx_zero(1e-11));
    assert!(approx_zero(-1e-11));
    assert!(!approx_zero(1e-9));
}
