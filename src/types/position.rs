//! Integer position type for figures

use std::fmt;

/// Integer 2D position of a figure on the drawing plane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a new position
    pub const fn new(x: i32, y: i32) -> Self {
        Position { x, y }
    }

    /// The origin (0, 0)
    pub const ORIGIN: Position = Position::new(0, 0);

    /// Return this position moved by an offset.
    ///
    /// Saturates at the `i32` bounds instead of overflowing.
    pub fn offset(&self, dx: i32, dy: i32) -> Self {
        Position::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::ORIGIN
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
