//! Figure types and traits

use crate::types::Position;

pub mod circle;

pub use circle::Circle;

mod sealed {
    pub trait Sealed {}
}

/// Base trait for all figures.
///
/// A figure is anything with a position, an area and a perimeter. The set of
/// implementors is closed; use [`FigureType`] to hold any of them by value.
pub trait Figure: sealed::Sealed {
    /// Shared base state (read-only)
    fn common(&self) -> &FigureCommon;

    /// Get the figure type name
    fn figure_type(&self) -> &'static str;

    /// Get the X coordinate
    fn x(&self) -> i32 {
        self.common().x()
    }

    /// Get the Y coordinate
    fn y(&self) -> i32 {
        self.common().y()
    }

    /// Get the position
    fn position(&self) -> Position {
        self.common().position()
    }

    /// Move the figure to a new position
    fn set_position(&mut self, x: i32, y: i32);

    /// Move the figure by an offset
    fn translate(&mut self, dx: i32, dy: i32) {
        let moved = self.position().offset(dx, dy);
        self.set_position(moved.x, moved.y);
    }

    /// Get the area. Defaults to the cached base value.
    fn area(&self) -> f64 {
        self.common().area()
    }

    /// Get the perimeter. Defaults to the cached base value.
    fn perimeter(&self) -> f64 {
        self.common().perimeter()
    }

    /// Get the area / perimeter ratio (0 when the perimeter is 0)
    fn area_perimeter_ratio(&self) -> f64 {
        self.common().area_perimeter_ratio()
    }
}

/// Common figure data shared by all figures.
///
/// Only the owning figure can write to it, through its position and shape
/// parameter setters. Outside the crate the base state is read-only:
///
/// ```compile_fail
/// use geofigures::{Circle, Figure, FigureCommon};
///
/// let mut circle = Circle::new(4.0).unwrap();
/// *circle.common_mut() = circle.common().clone();
/// ```
///
/// ```compile_fail
/// use geofigures::FigureCommon;
///
/// let common = FigureCommon::new(0, 0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FigureCommon {
    position: Position,
    area: f64,
    perimeter: f64,
    area_perimeter_ratio: f64,
}

impl FigureCommon {
    /// Create base state at the given coordinates with zeroed metrics
    pub(crate) fn new(x: i32, y: i32) -> Self {
        Self::at(Position::new(x, y))
    }

    /// Create base state at a position with zeroed metrics
    pub(crate) fn at(position: Position) -> Self {
        FigureCommon {
            position,
            area: 0.0,
            perimeter: 0.0,
            area_perimeter_ratio: 0.0,
        }
    }

    pub fn x(&self) -> i32 {
        self.position.x
    }

    pub fn y(&self) -> i32 {
        self.position.y
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Overwrite the position. Metrics do not depend on it.
    pub(crate) fn set_position(&mut self, x: i32, y: i32) {
        self.position = Position::new(x, y);
    }

    /// Last area pushed by the owning figure
    pub fn area(&self) -> f64 {
        self.area
    }

    /// Last perimeter pushed by the owning figure
    pub fn perimeter(&self) -> f64 {
        self.perimeter
    }

    pub fn area_perimeter_ratio(&self) -> f64 {
        self.area_perimeter_ratio
    }

    pub(crate) fn set_area(&mut self, area: f64) {
        self.area = area;
        self.update_ratio();
    }

    pub(crate) fn set_perimeter(&mut self, perimeter: f64) {
        self.perimeter = perimeter;
        self.update_ratio();
    }

    /// Push freshly computed metrics from a figure variant.
    pub(crate) fn update_metrics(&mut self, area: f64, perimeter: f64) {
        self.set_area(area);
        self.set_perimeter(perimeter);
    }

    fn update_ratio(&mut self) {
        self.area_perimeter_ratio = if self.perimeter != 0.0 {
            self.area / self.perimeter
        } else {
            0.0
        };
    }
}

/// Enumeration of all figure types for type-safe storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum FigureType {
    /// Circle figure
    Circle(Circle),
}

impl FigureType {
    /// Get a reference to the figure trait object
    pub fn as_figure(&self) -> &dyn Figure {
        match self {
            FigureType::Circle(f) => f,
        }
    }

    /// Get a mutable reference to the figure trait object
    pub fn as_figure_mut(&mut self) -> &mut dyn Figure {
        match self {
            FigureType::Circle(f) => f,
        }
    }

    /// Narrow to a circle, if this figure is one
    pub fn as_circle(&self) -> Option<&Circle> {
        match self {
            FigureType::Circle(c) => Some(c),
        }
    }

    /// Narrow to a mutable circle, if this figure is one
    pub fn as_circle_mut(&mut self) -> Option<&mut Circle> {
        match self {
            FigureType::Circle(c) => Some(c),
        }
    }
}

impl From<Circle> for FigureType {
    fn from(circle: Circle) -> Self {
        FigureType::Circle(circle)
    }
}

impl std::fmt::Display for FigureType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FigureType::Circle(c) => std::fmt::Display::fmt(c, f),
        }
    }
}
