use std::f64::consts::TAU;

use crate::{
    angle::Angle,
    geometry::{angle_of, circle_point, Point},
};

/// Two angular distances closer than this are the same position on a circle.
const ANGULAR_TOLERANCE: f64 = 1e-9;

/// The sweep direction of an arc.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    /// Clockwise arcs run in the mathematically negative direction.
    pub fn is_negative(self) -> bool {
        self == Direction::Clockwise
    }

    pub fn inverted(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

/// A circular arc. Only the radius and direction are mandatory; the rest is inferred from
/// the surrounding elements.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arc {
    pub radius: f64,
    pub direction: Direction,
    pub center: Option<Point>,
    pub start: Option<Point>,
    pub end: Option<Point>,
    pub start_angle: Option<Angle>,
    pub end_angle: Option<Angle>,
    pub from_x: Option<f64>,
    pub to_x: Option<f64>,
    pub center_y: Option<f64>,
}

impl Arc {
    /// An arc attaching tangentially to the previous element.
    pub fn radius(radius: f64, direction: Direction) -> Self {
        Self {
            radius,
            direction,
            center: None,
            start: None,
            end: None,
            start_angle: None,
            end_angle: None,
            from_x: None,
            to_x: None,
            center_y: None,
        }
    }

    /// A fully placed arc from `start` around `center` until it reaches `to_x`.
    pub fn center_from_to_x(
        center: impl Into<Point>,
        start: impl Into<Point>,
        to_x: f64,
        direction: Direction,
    ) -> Self {
        let center = center.into();
        let start = start.into();
        Self {
            center: Some(center),
            start: Some(start),
            to_x: Some(to_x),
            ..Self::radius(center.distance(&start), direction)
        }
    }

    /// A tangential arc that runs until it reaches `to_x`.
    pub fn to_x(radius: f64, to_x: f64, direction: Direction) -> Self {
        Self {
            to_x: Some(to_x),
            ..Self::radius(radius, direction)
        }
    }

    pub fn from_x(radius: f64, from_x: f64, direction: Direction) -> Self {
        Self {
            from_x: Some(from_x),
            ..Self::radius(radius, direction)
        }
    }

    /// An arc around `center` that starts at `from_x` and ends in `end`.
    pub fn center_from_x_to(
        center: impl Into<Point>,
        from_x: f64,
        end: impl Into<Point>,
        direction: Direction,
    ) -> Self {
        let center = center.into();
        let end = end.into();
        Self {
            center: Some(center),
            end: Some(end),
            from_x: Some(from_x),
            ..Self::radius(center.distance(&end), direction)
        }
    }

    /// An arc whose center lies on the horizontal line `y = center_y`.
    pub fn center_y(radius: f64, center_y: f64, direction: Direction) -> Self {
        Self {
            center_y: Some(center_y),
            ..Self::radius(radius, direction)
        }
    }

    /// A tangential arc ending at `end_angle`, measured from its center.
    pub fn to_angle(radius: f64, direction: Direction, end_angle: Angle) -> Self {
        Self {
            end_angle: Some(end_angle),
            ..Self::radius(radius, direction)
        }
    }

    /// An arc that starts out along `heading`.
    pub fn from_heading(radius: f64, heading: Angle, direction: Direction) -> Self {
        Self {
            start_angle: Some(radius_angle_for(heading, direction)),
            ..Self::radius(radius, direction)
        }
    }

    /// An arc that ends up running along `heading`.
    pub fn to_heading(radius: f64, direction: Direction, heading: Angle) -> Self {
        Self {
            end_angle: Some(radius_angle_for(heading, direction)),
            ..Self::radius(radius, direction)
        }
    }

    pub fn with_center(radius: f64, center: impl Into<Point>, direction: Direction) -> Self {
        Self {
            center: Some(center.into()),
            ..Self::radius(radius, direction)
        }
    }

    pub fn negative_direction(&self) -> bool {
        self.direction.is_negative()
    }

    /// Radius and direction are always known, so a center is all that is missing.
    pub fn is_completely_defined(&self) -> bool {
        self.center.is_some()
    }

    /// The same arc as seen when walking the profile backwards.
    pub fn reversed(&self) -> Self {
        Self {
            radius: self.radius,
            direction: self.direction.inverted(),
            center: self.center,
            start: self.end,
            end: self.start,
            start_angle: self.end_angle,
            end_angle: self.start_angle,
            from_x: self.to_x,
            to_x: self.from_x,
            center_y: self.center_y,
        }
    }
}

/// Angle of the radius at the point where an arc runs along `heading`.
fn radius_angle_for(heading: Angle, direction: Direction) -> Angle {
    match direction {
        Direction::Clockwise => heading + Angle::from_degrees(90.0),
        Direction::CounterClockwise => heading - Angle::from_degrees(90.0),
    }
}

/// The first point with an x-coordinate of `to_x` reached when walking around `center`
/// from `start`.
///
/// Targets beside the circle are clamped onto it. A target at the start position itself
/// counts as a full revolution away.
pub fn arc_end_point(
    center: Point,
    radius: f64,
    start: Point,
    to_x: f64,
    negative_direction: bool,
) -> Point {
    let target = ((to_x - center.x) / radius).clamp(-1.0, 1.0).acos();
    let start_angle = angle_of(start, center).radians();
    let factor = if negative_direction { -1.0 } else { 1.0 };

    let distance_to = |angle: f64| {
        let distance = (factor * (angle - start_angle)).rem_euclid(TAU);
        if distance < ANGULAR_TOLERANCE || TAU - distance < ANGULAR_TOLERANCE {
            TAU
        } else {
            distance
        }
    };

    let angle = if distance_to(target) <= distance_to(-target) {
        target
    } else {
        -target
    };

    circle_point(center, radius, angle)
}
