//! # Mesh Errors
//!
//! Error types for mesh generation. Every rejected input degrades to one of
//! these variants; the generator never panics on bad parameters.

use thiserror::Error;

/// Errors that can occur during mesh generation.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MeshError {
    /// A dimension or descriptor field is out of range
    #[error("Invalid parameter: {message}")]
    InvalidParameter {
        /// What was rejected
        message: String,
    },

    /// The configured division number is too small for a curved solid
    #[error("Insufficient resolution for {shape}: {divisions} (min: {minimum})")]
    InsufficientResolution {
        /// Shape kind
        shape: &'static str,
        /// Requested division number
        divisions: u32,
        /// Smallest accepted division number
        minimum: u32,
    },

    /// Degenerate geometry
    #[error("Degenerate geometry: {message}")]
    DegenerateGeometry {
        /// What degenerated
        message: String,
    },

    /// Unsupported operation
    #[error("Unsupported: {message}")]
    Unsupported {
        /// What was requested
        message: String,
    },
}

impl MeshError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            message: message.into(),
        }
    }

    /// Creates an insufficient resolution error.
    pub fn insufficient_resolution(shape: &'static str, divisions: u32, minimum: u32) -> Self {
        Self::InsufficientResolution {
            shape,
            divisions,
            minimum,
        }
    }

    /// Creates a degenerate geometry error.
    pub fn degenerate(message: impl Into<String>) -> Self {
        Self::DegenerateGeometry {
            message: message.into(),
        }
    }

    /// Creates an unsupported operation error.
    pub fn unsupported(message: impl Into<String>) -> Self {
        Self::Unsupported {
            message: message.into(),
        }
    }
}
