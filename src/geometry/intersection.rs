use std::f64::consts::{PI, TAU};

use itertools::Itertools;
use nalgebra::{Matrix2, Vector2};

use crate::{
    angle::Angle,
    elements::{ArcElement, LineElement, PathElement},
    error::GeometryError,
};

use super::{Circle, Point};

/// Two x-coordinates closer than this describe the same vertical line.
const COINCIDENCE_TOLERANCE: f64 = 1e-9;

/// Sine of the angle between two lines below which they count as parallel.
const PARALLEL_TOLERANCE: f64 = 1e-12;

/// Negative discriminants this close to zero are rounding noise around a tangent.
const TANGENCY_TOLERANCE: f64 = 1e-12;

/// A point where two path elements meet.
#[derive(Debug, Clone, Copy)]
pub struct Intersection {
    pub point: Point,
    pub element0: PathElement,
    pub element1: PathElement,
    /// Heading of `element0` at `point`.
    pub angle0: Angle,
    /// Heading of `element1` at `point`.
    pub angle1: Angle,
}

impl Intersection {
    /// The signed change of heading from `element0` to `element1`, within `(-π, π]`.
    ///
    /// Positive values are left turns.
    pub fn direction_change(&self) -> f64 {
        let change = self.angle1.radians() - self.angle0.radians();
        if change > PI {
            change - TAU
        } else if change <= -PI {
            change + TAU
        } else {
            change
        }
    }
}

/// Intersects the infinite lines through `line0` and `line1`.
pub fn intersect_lines(
    line0: &LineElement,
    line1: &LineElement,
) -> Result<Intersection, GeometryError> {
    if line0.length() == 0.0 || line1.length() == 0.0 {
        return Err(GeometryError::DegenerateLine);
    }

    let point = match (line0.is_vertical(), line1.is_vertical()) {
        (true, true) => {
            return if (line0.start.x - line1.start.x).abs() < COINCIDENCE_TOLERANCE {
                Err(GeometryError::IdenticalLines)
            } else {
                Err(GeometryError::NoIntersection)
            };
        }
        (true, false) => Point::new(line0.start.x, line1.y_at(line0.start.x)),
        (false, true) => Point::new(line1.start.x, line0.y_at(line1.start.x)),
        (false, false) => solve_general(line0, line1)?,
    };

    Ok(Intersection {
        point,
        element0: PathElement::Line(*line0),
        element1: PathElement::Line(*line1),
        angle0: line0.heading(),
        angle1: line1.heading(),
    })
}

/// Solves `dy·x − dx·y = dy·x₀ − dx·y₀` for both lines at once.
fn solve_general(line0: &LineElement, line1: &LineElement) -> Result<Point, GeometryError> {
    let direction0 = line0.direction();
    let direction1 = line1.direction();

    let sine = direction0.perp(&direction1) / (direction0.norm() * direction1.norm());
    if sine.abs() < PARALLEL_TOLERANCE {
        let offset = direction0.perp(&(line1.start - line0.start)) / direction0.norm();
        return if offset.abs() < COINCIDENCE_TOLERANCE {
            Err(GeometryError::IdenticalLines)
        } else {
            Err(GeometryError::NoIntersection)
        };
    }

    let matrix = Matrix2::new(
        direction0.y,
        -direction0.x,
        direction1.y,
        -direction1.x,
    );
    let constants = Vector2::new(
        direction0.y * line0.start.x - direction0.x * line0.start.y,
        direction1.y * line1.start.x - direction1.x * line1.start.y,
    );

    matrix
        .lu()
        .solve(&constants)
        .map(Point::from)
        .ok_or(GeometryError::NoIntersection)
}

/// Intersects a circle with the infinite line through `line`.
///
/// A tangent yields exactly one point.
pub fn intersection_points(circle: &Circle, line: &LineElement) -> Result<Vec<Point>, GeometryError> {
    let radius = circle.radius;
    let center = circle.center;

    let candidates = if line.is_vertical() {
        let x = line.start.x;
        let offset = x - center.x;
        if offset.abs() > radius {
            return Err(GeometryError::NoIntersection);
        }

        let root = (radius * radius - offset * offset).max(0.0).sqrt();
        [Point::new(x, center.y + root), Point::new(x, center.y - root)]
    } else {
        let m = line.slope();
        let b = line.intercept();

        // The circle equation with y = mx + b substituted, normalised to x² + px + q = 0.
        let normaliser = 1.0 + m * m;
        let p = (2.0 * m * b - 2.0 * center.x - 2.0 * center.y * m) / normaliser;
        let q = (b * b + center.x * center.x - 2.0 * center.y * b + center.y * center.y
            - radius * radius)
            / normaliser;

        let radix = (p / 2.0) * (p / 2.0) - q;
        if radix < -TANGENCY_TOLERANCE {
            return Err(GeometryError::NoIntersection);
        }

        let root = radix.max(0.0).sqrt();
        let x0 = -p / 2.0 + root;
        let x1 = -p / 2.0 - root;
        [Point::new(x0, m * x0 + b), Point::new(x1, m * x1 + b)]
    };

    Ok(candidates.into_iter().unique().collect())
}

/// Intersects the circle of `arc` with `line`, attaching each element's heading at the
/// resulting points.
pub fn arc_line_intersections(
    arc: &ArcElement,
    line: &LineElement,
) -> Result<Vec<Intersection>, GeometryError> {
    let points = intersection_points(&Circle::from(arc), line)?;

    Ok(points
        .into_iter()
        .map(|point| Intersection {
            point,
            element0: PathElement::Arc(*arc),
            element1: PathElement::Line(*line),
            angle0: arc.heading_at(point),
            angle1: line.heading(),
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(start: (f64, f64), end: (f64, f64)) -> LineElement {
        LineElement::new(start.into(), end.into())
    }

    fn sorted(points: Vec<Point>) -> Vec<Point> {
        points
            .into_iter()
            .sorted_by(|a, b| a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)))
            .collect()
    }

    #[test]
    fn test_perpendicular_lines() {
        let vertical = line((10.0, 20.0), (10.0, 40.0));
        let horizontal = line((0.0, 30.0), (30.0, 30.0));

        let result = intersect_lines(&vertical, &horizontal).unwrap();
        assert_eq!(result.point, Point::new(10.0, 30.0));
    }

    #[test]
    fn test_diagonal_lines() {
        let line0 = line((0.0, 0.0), (40.0, 30.0));
        let line1 = line((0.0, 30.0), (40.0, 0.0));

        let result = intersect_lines(&line0, &line1).unwrap();
        assert!(result.point.is_close_to(&Point::new(20.0, 15.0), 1e-9));
    }

    #[test]
    fn test_nearly_vertical_line() {
        let steep = line((5.0, 0.0), (5.0 + 1e-10, 100.0));
        let horizontal = line((0.0, 30.0), (30.0, 30.0));

        let result = intersect_lines(&steep, &horizontal).unwrap();
        assert!(result.point.is_close_to(&Point::new(5.0, 30.0), 1e-6));
    }

    #[test]
    fn test_parallel_lines() {
        let vertical0 = line((1.0, 0.0), (1.0, 5.0));
        let vertical1 = line((2.0, 0.0), (2.0, 5.0));
        let vertical2 = line((1.0, 7.0), (1.0, 9.0));
        assert_eq!(
            intersect_lines(&vertical0, &vertical1).unwrap_err(),
            GeometryError::NoIntersection
        );
        assert_eq!(
            intersect_lines(&vertical0, &vertical2).unwrap_err(),
            GeometryError::IdenticalLines
        );

        let diagonal0 = line((0.0, 0.0), (1.0, 1.0));
        let diagonal1 = line((0.0, 1.0), (2.0, 3.0));
        let diagonal2 = line((5.0, 5.0), (7.0, 7.0));
        assert_eq!(
            intersect_lines(&diagonal0, &diagonal1).unwrap_err(),
            GeometryError::NoIntersection
        );
        assert_eq!(
            intersect_lines(&diagonal0, &diagonal2).unwrap_err(),
            GeometryError::IdenticalLines
        );
    }

    #[test]
    fn test_degenerate_line() {
        let point = line((1.0, 1.0), (1.0, 1.0));
        let other = line((0.0, 0.0), (3.0, 1.0));

        assert_eq!(
            intersect_lines(&point, &other).unwrap_err(),
            GeometryError::DegenerateLine
        );
    }

    #[test]
    fn test_direction_change() {
        let east = line((0.0, 0.0), (1.0, 0.0));
        let north = line((1.0, -1.0), (1.0, 1.0));
        let south = line((1.0, 1.0), (1.0, -1.0));

        let left_turn = intersect_lines(&east, &north).unwrap();
        assert!((left_turn.direction_change() - PI / 2.0).abs() < 1e-9);

        let right_turn = intersect_lines(&east, &south).unwrap();
        assert!((right_turn.direction_change() + PI / 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_circle_and_vertical_line() {
        let circle = Circle::new(Point::new(3.0, 2.0), 1.0);

        assert_eq!(
            intersection_points(&circle, &line((1.9, 0.0), (1.9, 20.0))).unwrap_err(),
            GeometryError::NoIntersection
        );
        assert_eq!(
            intersection_points(&circle, &line((2.0, 0.0), (2.0, 20.0))).unwrap(),
            vec![Point::new(2.0, 2.0)]
        );
        assert_eq!(
            sorted(intersection_points(&circle, &line((3.0, 0.0), (3.0, 20.0))).unwrap()),
            vec![Point::new(3.0, 1.0), Point::new(3.0, 3.0)]
        );
        assert_eq!(
            intersection_points(&circle, &line((4.1, 0.0), (4.1, 20.0))).unwrap_err(),
            GeometryError::NoIntersection
        );
    }

    #[test]
    fn test_circle_and_horizontal_line() {
        let circle = Circle::new(Point::new(-3.0, -2.0), 1.0);

        assert_eq!(
            intersection_points(&circle, &line((0.0, -0.9), (20.0, -0.9))).unwrap_err(),
            GeometryError::NoIntersection
        );
        assert_eq!(
            intersection_points(&circle, &line((0.0, -1.0), (20.0, -1.0))).unwrap(),
            vec![Point::new(-3.0, -1.0)]
        );
        assert_eq!(
            sorted(intersection_points(&circle, &line((0.0, -2.0), (20.0, -2.0))).unwrap()),
            vec![Point::new(-4.0, -2.0), Point::new(-2.0, -2.0)]
        );
        assert_eq!(
            intersection_points(&circle, &line((0.0, -3.1), (20.0, -3.1))).unwrap_err(),
            GeometryError::NoIntersection
        );
    }

    #[test]
    fn test_arc_line_headings() {
        let arc = ArcElement::new(
            Point::new(0.0, 0.0),
            1.0,
            Angle::from_degrees(180.0),
            Angle::from_degrees(0.0),
            true,
        );
        let horizontal = line((-5.0, 0.0), (5.0, 0.0));

        let intersections = arc_line_intersections(&arc, &horizontal).unwrap();
        assert_eq!(intersections.len(), 2);

        for intersection in intersections {
            assert_eq!(intersection.angle1.degrees(), 0.0);
            if intersection.point.x > 0.0 {
                assert_eq!(intersection.angle0.degrees(), 270.0);
            } else {
                assert_eq!(intersection.angle0.degrees(), 90.0);
            }
        }
    }
}
