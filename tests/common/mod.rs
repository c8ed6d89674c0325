//! Shared test utilities for geofigures integration tests.

#![allow(dead_code)]

use geofigures::{Circle, FigureType};

/// Tolerance for comparing computed metrics against closed-form values.
pub const EPSILON: f64 = 1e-9;

/// Assert that two floats are within [`EPSILON`] of each other.
pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}

/// Build a circle figure, panicking on an invalid radius.
pub fn circle_figure(x: i32, y: i32, radius: f64) -> FigureType {
    Circle::with_position(x, y, radius)
        .expect("valid radius")
        .into()
}

/// The three circles used by the sample report.
pub fn sample_figures() -> Vec<FigureType> {
    vec![
        circle_figure(0, 0, 1.0),
        circle_figure(0, 0, 2.0),
        circle_figure(5, 10, 3.0),
    ]
}
