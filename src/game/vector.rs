use std::fmt;
use std::ops::Add;

/// A cell on the game grid, or a step between two cells
///
/// The same type is used for absolute positions and for movement deltas.
/// Deltas are always one of the four unit directions or [`Vector::ZERO`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Vector {
    pub x: i32,
    pub y: i32,
}

impl Vector {
    pub const ZERO: Vector = Vector::new(0, 0);
    pub const UP: Vector = Vector::new(0, -1);
    pub const DOWN: Vector = Vector::new(0, 1);
    pub const LEFT: Vector = Vector::new(-1, 0);
    pub const RIGHT: Vector = Vector::new(1, 0);

    /// The four unit directions, in input order
    pub const DIRECTIONS: [Vector; 4] = [Vector::UP, Vector::DOWN, Vector::LEFT, Vector::RIGHT];

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn is_zero(&self) -> bool {
        *self == Vector::ZERO
    }

    /// Returns true for the four unit directions
    pub fn is_unit_direction(&self) -> bool {
        Vector::DIRECTIONS.contains(self)
    }
}

impl Add for Vector {
    type Output = Vector;

    fn add(self, other: Vector) -> Vector {
        Vector::new(self.x + other.x, self.y + other.y)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_addition() {
        let pos = Vector::new(5, 5);
        assert_eq!(pos + Vector::RIGHT, Vector::new(6, 5));
        assert_eq!(pos + Vector::LEFT, Vector::new(4, 5));
        assert_eq!(pos + Vector::DOWN, Vector::new(5, 6));
        assert_eq!(pos + Vector::UP, Vector::new(5, 4));
        assert_eq!(pos + Vector::ZERO, pos);
    }

    #[test]
    fn test_value_equality() {
        assert_eq!(Vector::new(3, 7), Vector::new(3, 7));
        assert_ne!(Vector::new(3, 7), Vector::new(7, 3));
        assert_eq!(Vector::default(), Vector::ZERO);
    }

    #[test]
    fn test_unit_directions() {
        for direction in Vector::DIRECTIONS {
            assert!(direction.is_unit_direction());
            assert!(!direction.is_zero());
        }
        assert!(!Vector::ZERO.is_unit_direction());
        assert!(!Vector::new(1, 1).is_unit_direction());
    }

    #[test]
    fn test_display() {
        assert_eq!(Vector::new(-1, 12).to_string(), "(-1, 12)");
    }
}
