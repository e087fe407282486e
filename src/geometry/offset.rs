use nalgebra::Vector2;

use crate::{angle::Angle, elements::LineElement};

use super::Point;

/// A copy of `line` shifted sideways by `distance`.
///
/// Positive distances move it to the right of its direction of travel, negative ones to
/// the left.
pub fn parallel(line: &LineElement, distance: f64) -> LineElement {
    let length = line.length();
    let shift = Vector2::new(line.dy() / length, -line.dx() / length) * distance;

    LineElement::with_end_validity(line.start + shift, line.end + shift, line.end_is_valid)
}

/// A line through `point`, perpendicular to `line` and of the same length.
pub fn perpendicular(line: &LineElement, point: Point) -> LineElement {
    let direction = line.direction();
    LineElement::new(point, point + Vector2::new(-direction.y, direction.x))
}

/// Heading of `line1` minus heading of `line0`, within `[0°, 360°)`.
pub fn heading_change(line0: &LineElement, line1: &LineElement) -> Angle {
    line1.heading() - line0.heading()
}
