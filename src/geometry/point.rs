use std::{
    hash::{Hash, Hasher},
    ops::{Add, Div, Mul, Sub},
};

use nalgebra::Vector2;
use ordered_float::OrderedFloat;

/// A 2D coordinate.
///
/// Equality and hashing go through [OrderedFloat] so points can be collected into sets.
#[derive(Debug, Clone, Copy, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance(&self, other: &Point) -> f64 {
        (other.to_vector() - self.to_vector()).norm()
    }

    pub fn to_vector(self) -> Vector2<f64> {
        Vector2::new(self.x, self.y)
    }

    pub fn is_close_to(&self, other: &Point, tolerance: f64) -> bool {
        self.distance(other) < tolerance
    }

    fn key(&self) -> (OrderedFloat<f64>, OrderedFloat<f64>) {
        (OrderedFloat(self.x), OrderedFloat(self.y))
    }
}

impl PartialEq for Point {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Point {}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<Vector2<f64>> for Point {
    fn from(vector: Vector2<f64>) -> Self {
        Self::new(vector.x, vector.y)
    }
}

impl Add for Point {
    type Output = Point;

    fn add(self, rhs: Self) -> Self::Output {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Add<Vector2<f64>> for Point {
    type Output = Point;

    fn add(self, rhs: Vector2<f64>) -> Self::Output {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Vector2<f64>;

    fn sub(self, rhs: Self) -> Self::Output {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Point {
    type Output = Point;

    fn mul(self, factor: f64) -> Self::Output {
        Point::new(self.x * factor, self.y * factor)
    }
}

impl Div<f64> for Point {
    type Output = Point;

    fn div(self, divisor: f64) -> Self::Output {
        self * (1.0 / divisor)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    fn assert_close(expected: Point, actual: Point) {
        assert!(
            expected.is_close_to(&actual, 1e-7),
            "expected {expected:?}, got {actual:?}"
        );
    }

    #[test]
    fn test_tuple_construction() {
        let point = Point::from((4.7, 1.1));
        assert_eq!(point.x, 4.7);
        assert_eq!(point.y, 1.1);
    }

    #[test]
    fn test_addition() {
        let result = Point::new(12.3, 45.6) + Point::new(-7.8, -9.0);
        assert_close(Point::new(4.5, 36.6), result);
    }

    #[test]
    fn test_scaling() {
        assert_close(Point::new(49.2, 182.4), Point::new(12.3, 45.6) * 4.0);
        assert_close(Point::new(19.5, 22.5), Point::new(-7.8, -9.0) * -2.5);
        assert_close(Point::new(49.2, 182.4), Point::new(12.3, 45.6) / 0.25);
        assert_close(Point::new(19.5, 22.5), Point::new(-7.8, -9.0) / -0.4);
    }

    #[test]
    fn test_distance() {
        assert_eq!(Point::new(0.0, 0.0).distance(&Point::new(3.0, 4.0)), 5.0);
    }

    #[test]
    fn test_set_deduplication() {
        let points: HashSet<Point> = [
            Point::new(2.0, 2.0),
            Point::new(2.0, 2.0),
            Point::new(0.0, 1.0),
        ]
        .into_iter()
        .collect();

        assert_eq!(points.len(), 2);
    }
}
