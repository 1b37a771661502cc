//! Integer geometry primitives: [`Point`], [`Vector`] and the fixed
//! cardinal [`DIRECTIONS`].

use std::fmt;
use std::ops::{Add, Mul};

/// An integer 2D displacement.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Vector {
    pub x: i32,
    pub y: i32,
}

impl Vector {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// The four cardinal unit vectors, in the order used for every direction
/// scan in the crate. The order is a tie-breaking rule: carving picks the
/// first qualifying direction after a shuffle, searches stage neighbours in
/// this order, and path reconstruction descends along the first matching
/// neighbour.
pub const DIRECTIONS: [Vector; 4] = [
    Vector::new(0, 1),
    Vector::new(1, 0),
    Vector::new(0, -1),
    Vector::new(-1, 0),
];

/// An integer 2D point. Compared and deduplicated by coordinate value; no
/// ordering beyond equality is defined.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl Add<Vector> for Point {
    type Output = Point;

    #[inline]
    fn add(self, rhs: Vector) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Mul<i32> for Point {
    type Output = Point;

    #[inline]
    fn mul(self, rhs: i32) -> Point {
        Point::new(self.x * rhs, self.y * rhs)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn point_arithmetic() {
        let p = Point::new(1, 2);
        assert_eq!(p + Vector::new(0, -1), Point::new(1, 1));
        assert_eq!(p * 3, Point::new(3, 6));
        assert_eq!(p * 2 + Vector::new(1, 1), Point::new(3, 5));
    }

    #[test]
    fn point_equality_by_value() {
        assert_eq!(Point::new(4, 7), Point::new(4, 7));
        assert_ne!(Point::new(4, 7), Point::new(7, 4));
    }

    #[test]
    fn direction_order_is_fixed() {
        let expected = [(0, 1), (1, 0), (0, -1), (-1, 0)];
        for (dir, (x, y)) in DIRECTIONS.iter().zip(expected) {
            assert_eq!((dir.x, dir.y), (x, y));
        }
    }

    #[test]
    fn point_display() {
        assert_eq!(Point::new(-1, 9).to_string(), "(-1, 9)");
    }
}
