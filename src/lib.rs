//! # geofigures
//!
//! A small Rust library modelling two-dimensional geometric figures.
//!
//! Every figure has an integer position and exposes its area, its perimeter
//! and the derived area/perimeter ratio. Derived values are cached in the
//! figure's base state and refreshed whenever a defining parameter changes,
//! so the ratio is always consistent with the current area and perimeter.
//!
//! ## Quick Start
//!
//! ```rust
//! use geofigures::{Circle, Figure, FigureType};
//!
//! let mut circle = Circle::with_position(5, 10, 3.0)?;
//! assert!((circle.area_perimeter_ratio() - 1.5).abs() < 1e-12);
//!
//! // Invalid radii are rejected and leave the circle untouched
//! assert!(circle.set_radius(-1.0).is_err());
//! assert_eq!(circle.radius(), 3.0);
//!
//! // Use through the generic figure reference
//! let figure = FigureType::from(circle);
//! println!("{} has area {:.4}", figure, figure.as_figure().area());
//! # Ok::<(), geofigures::error::FigureError>(())
//! ```
//!
//! ## Architecture
//!
//! - `Figure` - Base trait for all figures (position, area, perimeter, ratio)
//! - `FigureCommon` - Shared base state holding the cached metrics
//! - `FigureType` - Closed enumeration of all figure variants
//! - `report` - Human-readable reports over `FigureType` values

#![allow(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod error;
pub mod figures;
pub mod report;
pub mod types;

// Re-export commonly used types
pub use error::{FigureError, Result};
pub use types::Position;

// Re-export figure types
pub use figures::{Circle, Figure, FigureCommon, FigureType};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
