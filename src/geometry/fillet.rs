use ordered_float::OrderedFloat;

use crate::{
    elements::{ArcElement, LineElement},
    error::GeometryError,
};

use super::{
    angle_of, circle_point, intersect_lines, intersection_points, parallel, perpendicular, Circle,
    Point,
};

/// How far a tangent point may sit outside of its line, relative to the line's length.
const SEGMENT_TOLERANCE: f64 = 1e-9;

/// The arc of `radius` tangent to both lines, running from `line0` onto `line1`.
///
/// Fails when the lines never meet or when the radius needs more of `line0` or `line1` than
/// they have.
pub fn fillet_lines(
    line0: &LineElement,
    line1: &LineElement,
    radius: f64,
) -> Result<ArcElement, GeometryError> {
    if radius <= 0.0 {
        return Err(GeometryError::NoIntersection);
    }

    let corner = intersect_lines(line0, line1)?;

    // Left turns bulge to the right and sweep counter-clockwise.
    let (distance, negative_direction) = if corner.direction_change() >= 0.0 {
        (-radius, false)
    } else {
        (radius, true)
    };

    let center = intersect_lines(&parallel(line0, distance), &parallel(line1, distance))?.point;
    let start = intersect_lines(line0, &perpendicular(line0, center))?.point;
    let end = intersect_lines(line1, &perpendicular(line1, center))?.point;

    if parameter_on(line0, start) < -SEGMENT_TOLERANCE
        || parameter_on(line1, end) > 1.0 + SEGMENT_TOLERANCE
    {
        log::debug!("Fillet of radius {radius} does not fit between the lines");
        return Err(GeometryError::NoIntersection);
    }

    Ok(ArcElement::from_points(
        center,
        radius,
        start,
        end,
        negative_direction,
    ))
}

/// The arc of `radius` tangent to the inside of `arc` and to `line`.
///
/// Of all candidate centers, the one reached first when walking along `arc` wins.
pub fn fillet_arc_line(
    arc: &ArcElement,
    line: &LineElement,
    radius: f64,
) -> Result<ArcElement, GeometryError> {
    let inner_radius = arc.radius - radius;
    if radius <= 0.0 || inner_radius <= 0.0 {
        return Err(GeometryError::NoIntersection);
    }

    let offset_circle = Circle::new(arc.center, inner_radius);
    let center = [radius, -radius]
        .into_iter()
        .flat_map(|distance| {
            intersection_points(&offset_circle, &parallel(line, distance)).unwrap_or_default()
        })
        .min_by_key(|candidate| OrderedFloat(arc.angular_length(*candidate).radians()))
        .ok_or(GeometryError::NoIntersection)?;

    let start = circle_point(center, radius, angle_of(center, arc.center).radians());
    let end = intersect_lines(line, &perpendicular(line, center))?.point;

    Ok(ArcElement::from_points(
        center,
        radius,
        start,
        end,
        arc.negative_direction,
    ))
}

/// Position of `point` along `line`, 0 at its start and 1 at its end.
fn parameter_on(line: &LineElement, point: Point) -> f64 {
    let direction = line.direction();
    (point - line.start).dot(&direction) / direction.norm_squared()
}
