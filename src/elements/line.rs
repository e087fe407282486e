use nalgebra::Vector2;

use crate::{angle::Angle, geometry::Point};

/// Lines steeper than this are handled like vertical lines.
const MAX_SLOPE: f64 = 1e9;
const VERTICAL_TOLERANCE: f64 = 1e-7;

/// A straight line from `start` to `end`.
///
/// The kernel treats it as the infinite line through both points whenever it intersects or
/// offsets it. `end_is_valid` is false for provisional rays whose end point only exists to
/// give the line a direction and must not be continued from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineElement {
    pub start: Point,
    pub end: Point,
    pub end_is_valid: bool,
}

impl LineElement {
    pub fn new(start: Point, end: Point) -> Self {
        Self {
            start,
            end,
            end_is_valid: true,
        }
    }

    pub fn with_end_validity(start: Point, end: Point, end_is_valid: bool) -> Self {
        Self {
            start,
            end,
            end_is_valid,
        }
    }

    /// A provisional ray of `length` leaving `start` along `heading`.
    pub fn ray(start: Point, heading: Angle, length: f64) -> Self {
        let (sin, cos) = heading.radians().sin_cos();
        Self {
            start,
            end: start + Vector2::new(cos, sin) * length,
            end_is_valid: false,
        }
    }

    /// A line of `length` arriving at `end` along `heading`.
    pub fn ending_at(heading: Angle, length: f64, end: Point) -> Self {
        let (sin, cos) = heading.radians().sin_cos();
        Self {
            start: end + Vector2::new(cos, sin) * -length,
            end,
            end_is_valid: true,
        }
    }

    pub fn dx(&self) -> f64 {
        self.end.x - self.start.x
    }

    pub fn dy(&self) -> f64 {
        self.end.y - self.start.y
    }

    pub fn direction(&self) -> Vector2<f64> {
        self.end - self.start
    }

    pub fn length(&self) -> f64 {
        self.direction().norm()
    }

    /// True for vertical and nearly vertical lines, where slope and intercept are unusable.
    pub fn is_vertical(&self) -> bool {
        let dx = self.dx();
        dx.abs() < VERTICAL_TOLERANCE || (self.dy() / dx).abs() > MAX_SLOPE
    }

    pub fn is_horizontal(&self) -> bool {
        self.dy() == 0.0
    }

    /// The slope `m` of `y = mx + b`. Meaningless for vertical lines.
    pub fn slope(&self) -> f64 {
        self.dy() / self.dx()
    }

    /// The intercept `b` of `y = mx + b`. Meaningless for vertical lines.
    pub fn intercept(&self) -> f64 {
        self.start.y - self.slope() * self.start.x
    }

    pub fn y_at(&self, x: f64) -> f64 {
        self.slope() * x + self.intercept()
    }

    pub fn heading(&self) -> Angle {
        Angle::from_components(self.dx(), self.dy()).unwrap_or(Angle::from_degrees(0.0))
    }

    /// The end point, if the next element may continue from it.
    pub fn end_point(&self) -> Option<Point> {
        self.end_is_valid.then_some(self.end)
    }

    pub fn reversed(&self) -> Self {
        Self::new(self.end, self.start)
    }
}
