use ordered_float::OrderedFloat;

use crate::{
    angle::Angle,
    descriptions::{arc_end_point, Arc},
    elements::{ArcElement, LineElement, PathElement},
    error::BuildError,
    geometry::{
        angle_of, arc_center, intersect_lines, intersection_points, parallel, perpendicular,
        Circle, Point,
    },
};

use super::{connection, Connector, PathBuilder, Update};

/// An arc can start a profile once it is placed on the plane.
///
/// An arc with nothing but a center becomes a zero-length marker at 0°, to be shaped by
/// whatever connects to it.
pub(super) fn first_arc(arc: &Arc) -> Result<PathElement, BuildError> {
    let negative_direction = arc.negative_direction();

    let element = match (arc.center, arc.start, arc.to_x, arc.end) {
        (Some(center), Some(start), Some(to_x), _) => {
            let end = arc_end_point(center, arc.radius, start, to_x, negative_direction);
            ArcElement::from_points(center, arc.radius, start, end, negative_direction)
        }
        (Some(center), Some(start), None, Some(end)) => {
            ArcElement::from_points(center, arc.radius, start, end, negative_direction)
        }
        (Some(center), _, _, _) => ArcElement::new(
            center,
            arc.radius,
            Angle::from_degrees(0.0),
            Angle::from_degrees(0.0),
            negative_direction,
        ),
        _ => return Err(BuildError::ElementNotAppended),
    };

    Ok(element.into())
}

/// The horizontal line `y = center_y`, used to search arc centers.
fn horizontal_at(center_y: f64) -> LineElement {
    LineElement::new(Point::new(0.0, center_y), Point::new(10.0, center_y))
}

impl PathBuilder {
    pub(super) fn arc_update(
        &self,
        arc: &Arc,
        connector: Option<Connector>,
    ) -> Result<Update, BuildError> {
        let last = self.last()?;
        let negative_direction = arc.negative_direction();

        if let (Some(to_x), Some(current)) = (arc.to_x, last.end_point()) {
            let center = arc_center(current, last.end_heading(), arc.radius, negative_direction);
            let end = arc_end_point(center, arc.radius, current, to_x, negative_direction);
            let element =
                ArcElement::from_points(center, arc.radius, current, end, negative_direction);

            Ok(Update::appending(vec![element.into()]))
        } else if let (Some(end_angle), Some(current)) = (arc.end_angle, last.end_point()) {
            let heading = last.end_heading();
            let center = arc_center(current, heading, arc.radius, negative_direction);
            let start_angle = if negative_direction {
                heading + Angle::from_degrees(90.0)
            } else {
                heading - Angle::from_degrees(90.0)
            };
            let element =
                ArcElement::new(center, arc.radius, start_angle, end_angle, negative_direction);

            Ok(Update::appending(vec![element.into()]))
        } else {
            match last {
                PathElement::Line(line) => self.arc_after_line(arc, line, connector),
                PathElement::Arc(previous) => self.arc_after_arc(arc, previous, connector),
            }
        }
    }

    fn arc_after_line(
        &self,
        arc: &Arc,
        line: &LineElement,
        connector: Option<Connector>,
    ) -> Result<Update, BuildError> {
        let negative_direction = arc.negative_direction();

        match (arc.center_y, arc.center, connector) {
            (Some(center_y), _, None) => {
                let distance = if negative_direction {
                    arc.radius
                } else {
                    -arc.radius
                };
                let center = intersect_lines(&parallel(line, distance), &horizontal_at(center_y))
                    .map_err(|_| BuildError::ElementNotAppended)?
                    .point;
                let start = intersect_lines(line, &perpendicular(line, center))
                    .map_err(|_| BuildError::ElementNotAppended)?
                    .point;

                Ok(Update::replacing_last(vec![
                    LineElement::new(line.start, start).into(),
                    ArcElement::from_points(center, arc.radius, start, start, negative_direction)
                        .into(),
                ]))
            }
            (_, Some(center), Some(Connector::Fillet(fillet))) => {
                // Marks the sweep direction; the fillet decides where the arc is entered.
                let (start_angle, end_angle) = if negative_direction {
                    (Angle::from_degrees(1.0), Angle::from_degrees(0.0))
                } else {
                    (Angle::from_degrees(0.0), Angle::from_degrees(1.0))
                };
                let placeholder =
                    ArcElement::new(center, arc.radius, start_angle, end_angle, negative_direction);

                let mut diagnostics = Vec::new();
                let elements = connection::join(
                    &PathElement::Line(*line),
                    &placeholder.into(),
                    Some(fillet),
                    &mut diagnostics,
                )
                .unwrap_or_else(|_| vec![PathElement::Line(*line), placeholder.into()]);

                Ok(Update::replacing_last(elements)
                    .with_diagnostics(diagnostics)
                    .using_connector())
            }
            _ => Err(BuildError::ElementNotAppended),
        }
    }

    /// Places the new arc inside `previous`, touching it, with its center on `y = center_y`.
    fn arc_after_arc(
        &self,
        arc: &Arc,
        previous: &ArcElement,
        connector: Option<Connector>,
    ) -> Result<Update, BuildError> {
        let (Some(center_y), None) = (arc.center_y, connector) else {
            return Err(BuildError::ElementNotAppended);
        };

        let inner_radius = previous.radius - arc.radius;
        if inner_radius <= 0.0 {
            return Err(BuildError::ElementNotAppended);
        }

        let center = intersection_points(
            &Circle::new(previous.center, inner_radius),
            &horizontal_at(center_y),
        )
        .map_err(|_| BuildError::ElementNotAppended)?
        .into_iter()
        .min_by_key(|candidate| {
            OrderedFloat(previous.angular_distance_from_end(*candidate).radians())
        })
        .ok_or(BuildError::ElementNotAppended)?;

        let contact = angle_of(center, previous.center);
        Ok(Update::replacing_last(vec![
            ArcElement {
                end_angle: contact,
                ..*previous
            }
            .into(),
            ArcElement::new(
                center,
                arc.radius,
                contact,
                contact,
                arc.negative_direction(),
            )
            .into(),
        ]))
    }
}
