//! Error types for geofigures library

use std::fmt;
use thiserror::Error;

/// Main error type for geofigures operations
#[derive(Debug, Error)]
pub enum FigureError {
    /// A shape parameter was rejected before any state was touched
    #[error("Invalid argument: {name} must be a positive finite number, got {value}")]
    InvalidArgument {
        /// Name of the rejected parameter
        name: &'static str,
        /// The offending value
        value: f64,
    },

    /// Formatting error while writing a report
    #[error("Format error: {0}")]
    Fmt(#[from] fmt::Error),
}

impl FigureError {
    /// Build an invalid-argument error for a rejected radius
    pub fn invalid_radius(value: f64) -> Self {
        FigureError::InvalidArgument {
            name: "radius",
            value,
        }
    }
}

/// Result type alias for geofigures operations
pub type Result<T> = std::result::Result<T, FigureError>;
