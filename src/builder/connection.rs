use ordered_float::OrderedFloat;

use crate::{
    descriptions::Fillet,
    elements::{reversed_completely, ArcElement, LineElement, PathElement},
    error::GeometryError,
    geometry::{arc_line_intersections, fillet_arc_line, fillet_lines, intersect_lines, Point},
};

use super::{Connector, Diagnostic, PathBuilder, Update};

/// Intersections closer to the start of an arc than this are the start itself.
const ANGULAR_TOLERANCE: f64 = 1e-9;

/// Joins `first` and `second` where they meet, rounding the corner if `fillet` is given.
///
/// A fillet that cannot be constructed is reported and the elements are still trimmed to
/// meet, rather than left as they were. Fails only if the elements cannot be trimmed
/// against each other either.
pub(super) fn join(
    first: &PathElement,
    second: &PathElement,
    fillet: Option<Fillet>,
    diagnostics: &mut Vec<Diagnostic>,
) -> Result<Vec<PathElement>, GeometryError> {
    if let Some(fillet) = fillet {
        match filleted(first, second, fillet.radius) {
            Ok(elements) => return Ok(elements),
            Err(None) => diagnostics.push(Diagnostic::UnsupportedConnection),
            Err(Some(reason)) => diagnostics.push(Diagnostic::FilletSkipped {
                radius: fillet.radius,
                reason,
            }),
        }
    }

    match (first, second) {
        (PathElement::Line(line0), PathElement::Line(line1)) => trimmed_lines(line0, line1),
        (PathElement::Arc(arc), PathElement::Line(line)) => trimmed_arc_line(arc, line),
        (PathElement::Line(line), PathElement::Arc(arc)) => {
            Ok(reversed_completely(&trimmed_arc_line(&arc.reversed(), &line.reversed())?))
        }
        (PathElement::Arc(_), PathElement::Arc(_)) => Err(GeometryError::NoIntersection),
    }
}

/// Inserts a fillet between two elements. `Err(None)` marks a pair that fillets cannot join.
fn filleted(
    first: &PathElement,
    second: &PathElement,
    radius: f64,
) -> Result<Vec<PathElement>, Option<GeometryError>> {
    match (first, second) {
        (PathElement::Line(line0), PathElement::Line(line1)) => {
            let fillet = fillet_lines(line0, line1, radius)?;
            Ok(vec![
                LineElement::new(line0.start, fillet.start()).into(),
                fillet.into(),
                continued(line1, fillet.end()).into(),
            ])
        }
        (PathElement::Arc(arc), PathElement::Line(line)) => Ok(filleted_arc_line(arc, line, radius)?),
        (PathElement::Line(line), PathElement::Arc(arc)) => {
            let elements = filleted_arc_line(&arc.reversed(), &line.reversed(), radius)?;
            Ok(reversed_completely(&elements))
        }
        (PathElement::Arc(_), PathElement::Arc(_)) => Err(None),
    }
}

fn filleted_arc_line(
    arc: &ArcElement,
    line: &LineElement,
    radius: f64,
) -> Result<Vec<PathElement>, GeometryError> {
    let fillet = fillet_arc_line(arc, line, radius)?;
    Ok(vec![
        arc.with_end(fillet.start()).into(),
        fillet.into(),
        continued(line, fillet.end()).into(),
    ])
}

fn trimmed_lines(
    line0: &LineElement,
    line1: &LineElement,
) -> Result<Vec<PathElement>, GeometryError> {
    let corner = intersect_lines(line0, line1)?.point;
    Ok(vec![
        LineElement::new(line0.start, corner).into(),
        continued(line1, corner).into(),
    ])
}

/// Ends `arc` where `line` first cuts its circle and starts `line` there.
fn trimmed_arc_line(
    arc: &ArcElement,
    line: &LineElement,
) -> Result<Vec<PathElement>, GeometryError> {
    let mut candidates = arc_line_intersections(arc, line)?;
    candidates.sort_by_key(|candidate| OrderedFloat(arc.angular_length(candidate.point).radians()));

    let point = candidates
        .iter()
        .find(|candidate| arc.angular_length(candidate.point).radians() > ANGULAR_TOLERANCE)
        .or_else(|| candidates.first())
        .ok_or(GeometryError::NoIntersection)?
        .point;

    Ok(vec![arc.with_end(point).into(), continued(line, point).into()])
}

/// `line` moved to start at `start`, keeping its end and whether that end is final.
fn continued(line: &LineElement, start: Point) -> LineElement {
    LineElement::with_end_validity(start, line.end, line.end_is_valid)
}

impl PathBuilder {
    /// Attaches a run resolved backwards to the end of the chain.
    pub(super) fn splice_update(
        &self,
        run: Vec<PathElement>,
        connector: Option<Connector>,
    ) -> Update {
        let (Some(first), Ok(last)) = (run.first(), self.last()) else {
            return Update::appending(run);
        };

        let fillet = connector.map(|Connector::Fillet(fillet)| fillet);
        let open_ended = last.end_point().is_none();
        let mut diagnostics = Vec::new();

        if fillet.is_some() || (open_ended && matches!(first, PathElement::Line(_))) {
            if let Ok(mut joined) = join(last, first, fillet, &mut diagnostics) {
                joined.extend(run.iter().skip(1).copied());
                return Update::replacing_last(joined)
                    .with_diagnostics(diagnostics)
                    .using_connector();
            }
        }

        let gap = last.terminal_point().distance(&first.start_point());
        if gap > self.config.continuity_tolerance {
            diagnostics.push(Diagnostic::Discontinuity {
                index: self.elements.len(),
                gap,
            });
        }

        let update = Update::appending(run).with_diagnostics(diagnostics);
        if fillet.is_some() {
            update.using_connector()
        } else {
            update
        }
    }
}
