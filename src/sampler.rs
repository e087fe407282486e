//! Discretisation of resolved elements into point sequences.
//!
//! Every sampler leaves out the start point and ends exactly on the end point, so the
//! samples of a continuous chain can simply be concatenated.

use std::f64::consts::TAU;

use itertools::Itertools;

use crate::{
    elements::PathElement,
    error::SamplingError,
    geometry::{angle_of, circle_point, Point},
};

/// Samples closer than this to the start point are the start point.
const COINCIDENCE_TOLERANCE: f64 = 1e-9;

fn validate(resolution: f64) -> Result<(), SamplingError> {
    if resolution.is_finite() && resolution > 0.0 {
        Ok(())
    } else {
        Err(SamplingError::InvalidResolution(resolution))
    }
}

/// Points along the straight line from `start` to `end`, no further than `resolution` apart.
pub fn sample_line(start: Point, end: Point, resolution: f64) -> Result<Vec<Point>, SamplingError> {
    validate(resolution)?;
    Ok(line_points(start, end, resolution))
}

fn line_points(start: Point, end: Point, resolution: f64) -> Vec<Point> {
    let length = start.distance(&end);
    if length == 0.0 {
        return Vec::new();
    }

    let count = (length / resolution).floor() as usize + 1;
    let step = (end - start) / length * resolution;

    // Walk backwards from the end so that it is hit exactly.
    let mut points: Vec<Point> = (0..count)
        .map(|index| match count - index - 1 {
            0 => end,
            steps_from_end => end + step * -(steps_from_end as f64),
        })
        .collect();

    if points
        .first()
        .map_or(false, |first| first.is_close_to(&start, COINCIDENCE_TOLERANCE))
    {
        points.remove(0);
    }

    points
}

/// Points along the arc around `center` from `start` to `end`.
///
/// Only the angles of `start` and `end` are used; the final point is `end` itself.
pub fn sample_arc(
    start: Point,
    end: Point,
    center: Point,
    radius: f64,
    negative_direction: bool,
    resolution: f64,
) -> Result<Vec<Point>, SamplingError> {
    validate(resolution)?;
    Ok(arc_points(
        start,
        end,
        center,
        radius,
        negative_direction,
        resolution,
    ))
}

fn arc_points(
    start: Point,
    end: Point,
    center: Point,
    radius: f64,
    negative_direction: bool,
    resolution: f64,
) -> Vec<Point> {
    let start_angle = angle_of(start, center).radians();
    let end_angle = angle_of(end, center).radians();
    let circumference = TAU * radius;

    let sweep = if negative_direction {
        start_angle - end_angle
    } else {
        end_angle - start_angle
    };
    let mut arc_length = sweep * radius;
    if arc_length < 0.0 {
        arc_length += circumference;
    }
    let arc_length = arc_length % circumference;

    let count = (arc_length / resolution).floor() as usize + 1;
    let angle_step = if negative_direction {
        resolution / radius
    } else {
        -resolution / radius
    };

    let mut points: Vec<Point> = (0..count)
        .map(|index| {
            let steps_from_end = count - index - 1;
            if steps_from_end == 0 {
                end
            } else {
                circle_point(
                    center,
                    radius,
                    end_angle + angle_step * steps_from_end as f64,
                )
            }
        })
        .collect();

    if points
        .first()
        .map_or(false, |first| first.is_close_to(&start, COINCIDENCE_TOLERANCE))
    {
        points.remove(0);
    }

    points
}

/// Samples a single element, leaving out its start point.
pub fn sample_element(element: &PathElement, resolution: f64) -> Result<Vec<Point>, SamplingError> {
    validate(resolution)?;

    let points = match element {
        PathElement::Line(line) => line_points(line.start, line.end, resolution),
        PathElement::Arc(arc) => arc_points(
            arc.start(),
            arc.end(),
            arc.center,
            arc.radius,
            arc.negative_direction,
            resolution,
        ),
    };

    Ok(points)
}

/// Inserts points into a polyline until no two neighbours are further apart than
/// `resolution`. Existing points are kept.
pub fn resample(points: &[Point], resolution: f64) -> Result<Vec<Point>, SamplingError> {
    validate(resolution)?;

    let Some(first) = points.first() else {
        return Ok(Vec::new());
    };

    let mut result = vec![*first];
    for (start, end) in points.iter().tuple_windows() {
        let segment = line_points(*start, *end, resolution);
        if segment.is_empty() {
            // Duplicated points survive.
            result.push(*end);
        } else {
            result.extend(segment);
        }
    }

    Ok(result)
}
