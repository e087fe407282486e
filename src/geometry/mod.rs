//! Geometry primitives and the intersection engine.

mod fillet;
mod intersection;
mod offset;
mod point;

use std::f64::consts::FRAC_PI_2;

use nalgebra::Vector2;

pub use fillet::{fillet_arc_line, fillet_lines};
pub use intersection::{arc_line_intersections, intersect_lines, intersection_points, Intersection};
pub use offset::{heading_change, parallel, perpendicular};
pub use point::Point;

use crate::{angle::Angle, elements::ArcElement};

/// A full circle. Only used as an intersection helper.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub fn new(center: Point, radius: f64) -> Self {
        Self { center, radius }
    }
}

impl From<&ArcElement> for Circle {
    fn from(arc: &ArcElement) -> Self {
        Self::new(arc.center, arc.radius)
    }
}

/// Direction of `point` as seen from `center`. A point on the center lies at 0°.
pub fn angle_of(point: Point, center: Point) -> Angle {
    Angle::from_components(point.x - center.x, point.y - center.y)
        .unwrap_or(Angle::from_degrees(0.0))
}

pub fn circle_point(center: Point, radius: f64, angle: f64) -> Point {
    let (sin, cos) = angle.sin_cos();
    center + Vector2::new(cos, sin) * radius
}

/// Center of an arc that leaves `start` tangentially to `heading`.
pub fn arc_center(start: Point, heading: Angle, radius: f64, negative_direction: bool) -> Point {
    let direction = if negative_direction {
        heading.radians() - FRAC_PI_2
    } else {
        heading.radians() + FRAC_PI_2
    };

    circle_point(start, radius, direction)
}
