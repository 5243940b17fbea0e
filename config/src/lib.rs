//! # Config Crate
//!
//! Centralized configuration constants for the mesh generator workspace.
//! Tessellation defaults, crease angles and comparison tolerances live here so
//! the generator crate never carries literal magic numbers.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_DIVISION_NUMBER, EPSILON};
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 0.00000000001; // 1e-11, smaller than EPSILON (1e-10)
//! let is_zero = value.abs() < EPSILON;
//! assert!(is_zero);
//!
//! // A negative division request falls back to the default
//! let requested: i32 = -1;
//! let divisions = if requested < 0 { DEFAULT_DIVISION_NUMBER } else { requested as u32 };
//! assert_eq!(divisions, 20);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Pure constants and tiny helpers
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;

#[cfg(test)]
mod tests;
