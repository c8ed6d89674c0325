//! Circle figure

use super::{sealed, Figure, FigureCommon};
use crate::error::{FigureError, Result};
use std::f64::consts::PI;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A circle figure.
///
/// The radius is always strictly positive and finite. Area and perimeter are
/// recomputed and pushed into the base state on every radius change, so the
/// cached area/perimeter ratio is never stale.
#[derive(Debug, Clone)]
pub struct Circle {
    common: FigureCommon,
    radius: f64,
}

impl Circle {
    /// Create a new circle at the origin.
    ///
    /// The radius is validated like in [`Circle::set_radius`].
    pub fn new(radius: f64) -> Result<Self> {
        Self::with_position(0, 0, radius)
    }

    /// Create a new circle at the given position
    pub fn with_position(x: i32, y: i32, radius: f64) -> Result<Self> {
        validate_radius(radius)?;
        let mut circle = Circle {
            common: FigureCommon::new(x, y),
            radius,
        };
        circle.refresh_metrics();
        Ok(circle)
    }

    /// Get the radius
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Get the diameter of the circle
    pub fn diameter(&self) -> f64 {
        self.radius * 2.0
    }

    /// Change the radius.
    ///
    /// Fails with [`FigureError::InvalidArgument`] and leaves the circle
    /// untouched if `radius` is zero, negative, NaN or infinite. Infinity is
    /// refused because it would turn the area/perimeter ratio into NaN.
    pub fn set_radius(&mut self, radius: f64) -> Result<()> {
        validate_radius(radius)?;
        tracing::debug!(old = self.radius, new = radius, "circle radius changed");
        self.radius = radius;
        self.refresh_metrics();
        Ok(())
    }

    fn refresh_metrics(&mut self) {
        let (area, perimeter) = (self.area(), self.perimeter());
        self.common.update_metrics(area, perimeter);
    }
}

fn validate_radius(radius: f64) -> Result<()> {
    // also rejects NaN
    if radius > 0.0 && radius.is_finite() {
        Ok(())
    } else {
        tracing::debug!(radius, "rejected circle radius");
        Err(FigureError::invalid_radius(radius))
    }
}

impl sealed::Sealed for Circle {}

impl Figure for Circle {
    fn common(&self) -> &FigureCommon {
        &self.common
    }

    fn set_position(&mut self, x: i32, y: i32) {
        self.common.set_position(x, y);
    }

    fn figure_type(&self) -> &'static str {
        "CIRCLE"
    }

    fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }
}

impl PartialEq for Circle {
    fn eq(&self, other: &Self) -> bool {
        self.x() == other.x()
            && self.y() == other.y()
            && self.radius.to_bits() == other.radius.to_bits()
    }
}

impl Eq for Circle {}

impl Hash for Circle {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.x().hash(state);
        self.y().hash(state);
        self.radius.to_bits().hash(state);
    }
}

impl fmt::Display for Circle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Circle [x={}, y={}, radius={:.2}, area={:.2}, perimeter={:.2}]",
            self.x(),
            self.y(),
            self.radius,
            self.area(),
            self.perimeter()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Position;
    use std::collections::hash_map::DefaultHasher;

    fn hash_of(circle: &Circle) -> u64 {
        let mut hasher = DefaultHasher::new();
        circle.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_circle_creation() {
        let circle = Circle::new(1.0).unwrap();
        assert_eq!(circle.position(), Position::ORIGIN);
        assert_eq!(circle.radius(), 1.0);
        assert_eq!(circle.figure_type(), "CIRCLE");
    }

    #[test]
    fn test_unit_circle_metrics() {
        let circle = Circle::new(1.0).unwrap();
        assert!((circle.area() - PI).abs() < 1e-10);
        assert!((circle.perimeter() - 2.0 * PI).abs() < 1e-10);
        assert!((circle.area_perimeter_ratio() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_circle_with_position() {
        let circle = Circle::with_position(5, 10, 3.0).unwrap();
        assert_eq!(circle.x(), 5);
        assert_eq!(circle.y(), 10);
        assert!((circle.area() - 28.274333882308138).abs() < 1e-10);
        assert!((circle.perimeter() - 18.84955592153876).abs() < 1e-10);
        assert!((circle.area_perimeter_ratio() - 1.5).abs() < 1e-12);
    }

    #[test]
    fn test_base_state_matches_formulas() {
        let circle = Circle::new(2.5).unwrap();
        assert_eq!(circle.common().area(), circle.area());
        assert_eq!(circle.common().perimeter(), circle.perimeter());
    }

    #[test]
    fn test_circle_rejects_invalid_radius() {
        for radius in [0.0, -0.0, -1.0, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = Circle::new(radius).unwrap_err();
            assert!(matches!(err, FigureError::InvalidArgument { .. }));
        }
    }

    #[test]
    fn test_set_radius_failure_keeps_state() {
        let mut circle = Circle::with_position(1, 2, 4.0).unwrap();
        let before = circle.clone();

        let err = circle.set_radius(-3.0).unwrap_err();
        assert!(err.to_string().contains("-3"));

        assert_eq!(circle, before);
        assert_eq!(circle.common(), before.common());
    }

    #[test]
    fn test_set_radius_rejects_infinity() {
        let mut circle = Circle::new(2.0).unwrap();
        let before = circle.clone();
        assert!(circle.set_radius(f64::INFINITY).is_err());
        assert_eq!(circle.common(), before.common());
        assert_eq!(circle.radius(), 2.0);
    }

    #[test]
    fn test_base_state_follows_every_mutation() {
        let mut circle = Circle::with_position(1, 1, 4.0).unwrap();
        let check = |c: &Circle| {
            assert_eq!(c.common().area(), c.area());
            assert_eq!(c.common().perimeter(), c.perimeter());
            assert_eq!(c.area_perimeter_ratio(), c.area() / c.perimeter());
        };
        check(&circle);

        circle.set_position(-3, 9);
        check(&circle);
        circle.translate(2, 2);
        check(&circle);
        assert_eq!(circle.position(), Position::new(-1, 11));

        circle.set_radius(10.0).unwrap();
        check(&circle);
        assert!((circle.area_perimeter_ratio() - 5.0).abs() < 1e-12);

        assert!(circle.set_radius(0.0).is_err());
        check(&circle);
    }

    #[test]
    fn test_doubling_radius() {
        let mut circle = Circle::new(2.0).unwrap();
        let (area, perimeter) = (circle.area(), circle.perimeter());

        circle.set_radius(4.0).unwrap();
        assert!((circle.area() - 4.0 * area).abs() < 1e-10);
        assert!((circle.perimeter() - 2.0 * perimeter).abs() < 1e-10);
        assert!((circle.area_perimeter_ratio() - 2.0).abs() < 1e-12);

        circle.set_radius(2.0).unwrap();
        assert_eq!(circle.area(), area);
        assert_eq!(circle.perimeter(), perimeter);
        assert_eq!(circle.area_perimeter_ratio(), 1.0);
    }

    #[test]
    fn test_set_position_does_not_touch_metrics() {
        let mut circle = Circle::new(3.0).unwrap();
        let ratio = circle.area_perimeter_ratio();
        circle.set_position(-4, 8);
        assert_eq!(circle.position(), Position::new(-4, 8));
        assert_eq!(circle.area_perimeter_ratio(), ratio);
    }

    #[test]
    fn test_circle_equality_and_hash() {
        let a = Circle::with_position(1, 2, 3.0).unwrap();
        let b = Circle::with_position(1, 2, 3.0).unwrap();
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));

        assert_ne!(a, Circle::with_position(0, 2, 3.0).unwrap());
        assert_ne!(a, Circle::with_position(1, 0, 3.0).unwrap());
        assert_ne!(a, Circle::with_position(1, 2, 3.0000001).unwrap());
    }

    #[test]
    fn test_equality_follows_position_changes() {
        let a = Circle::with_position(1, 2, 3.0).unwrap();
        let mut b = Circle::new(3.0).unwrap();
        assert_ne!(a, b);
        b.set_position(1, 2);
        assert_eq!(a, b);
    }

    #[test]
    fn test_circle_display() {
        let circle = Circle::with_position(5, 10, 3.0).unwrap();
        assert_eq!(
            circle.to_string(),
            "Circle [x=5, y=10, radius=3.00, area=28.27, perimeter=18.85]"
        );
    }

    #[test]
    fn test_diameter() {
        let circle = Circle::new(1.25).unwrap();
        assert_eq!(circle.diameter(), 2.5);
    }
}
