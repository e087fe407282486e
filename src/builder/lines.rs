use crate::{
    descriptions::Line,
    elements::{LineElement, PathElement},
    error::{BuildError, GeometryError},
};

use super::{connection, Connector, Diagnostic, PathBuilder, Update};

/// A line can only start a profile when both of its ends are known and apart.
pub(super) fn first_line(line: &Line) -> Result<PathElement, BuildError> {
    match (line.start, line.end) {
        (Some(start), Some(end)) if start != end => Ok(LineElement::new(start, end).into()),
        _ => Err(BuildError::ElementNotAppended),
    }
}

/// Leaves the chain as it is. A pending fillet is not consumed by the skipped line.
fn zero_length_skipped() -> Update {
    Update::default().with_diagnostics(vec![Diagnostic::ZeroLengthLine])
}

impl PathBuilder {
    pub(super) fn line_update(
        &self,
        line: &Line,
        connector: Option<Connector>,
    ) -> Result<Update, BuildError> {
        let last = self.last()?;
        let ray_length = self.config.ray_length();

        let update = match (line.start, line.end, line.heading, last.end_point()) {
            (Some(start), Some(end), _, _) => {
                self.intersecting_update(LineElement::new(start, end), connector)?
            }
            (_, Some(end), Some(heading), _) => self.intersecting_update(
                LineElement::ending_at(heading, ray_length, end),
                connector,
            )?,
            (_, Some(end), None, Some(current)) => {
                let new_line = LineElement::new(current, end);
                match last {
                    PathElement::Line(_) => self.intersecting_update(new_line, connector)?,
                    PathElement::Arc(_) if self.is_zero_length(&new_line) => {
                        zero_length_skipped()
                    }
                    PathElement::Arc(_) => Update::appending(vec![new_line.into()]),
                }
            }
            (None, None, None, Some(current)) => Update::appending(vec![LineElement::ray(
                current,
                last.end_heading(),
                ray_length,
            )
            .into()]),
            (Some(start), None, Some(heading), _) => {
                self.intersecting_update(LineElement::ray(start, heading, ray_length), connector)?
            }
            (None, None, Some(heading), Some(current)) => {
                Update::appending(vec![LineElement::ray(current, heading, ray_length).into()])
            }
            _ => return Err(BuildError::ElementNotAppended),
        };

        Ok(update)
    }

    /// Trims the last element and `new_line` to meet each other, rounding the corner if a
    /// fillet is pending.
    fn intersecting_update(
        &self,
        new_line: LineElement,
        connector: Option<Connector>,
    ) -> Result<Update, BuildError> {
        if self.is_zero_length(&new_line) {
            return Ok(zero_length_skipped());
        }

        let last = self.last()?;
        let fillet = connector.map(|Connector::Fillet(fillet)| fillet);
        let mut diagnostics = Vec::new();

        let update = match connection::join(last, &new_line.into(), fillet, &mut diagnostics) {
            Ok(elements) => Update::replacing_last(elements),
            Err(reason) => self.joined_directly(new_line, reason)?,
        };

        Ok(update.with_diagnostics(diagnostics).using_connector())
    }

    /// Draws `new_line` from the current end point when it cannot be trimmed.
    ///
    /// After a provisional ray there is no end point to draw from, so the line is appended
    /// as it is and the gap is reported.
    fn joined_directly(
        &self,
        new_line: LineElement,
        reason: GeometryError,
    ) -> Result<Update, BuildError> {
        let last = self.last()?;
        let tolerance = self.config.continuity_tolerance;

        let Some(current) = last.end_point() else {
            let mut diagnostics = vec![Diagnostic::TrimSkipped { reason }];
            let gap = last.terminal_point().distance(&new_line.start);
            if gap > tolerance {
                diagnostics.push(Diagnostic::Discontinuity {
                    index: self.elements.len(),
                    gap,
                });
            }

            return Ok(Update::appending(vec![new_line.into()]).with_diagnostics(diagnostics));
        };

        let joined = LineElement::with_end_validity(current, new_line.end, new_line.end_is_valid);
        if self.is_zero_length(&joined) {
            return Ok(zero_length_skipped());
        }

        let update = Update::appending(vec![joined.into()]);
        if current.is_close_to(&new_line.start, tolerance) {
            // A line continuing straight on from the current end point loses nothing.
            Ok(update)
        } else {
            Ok(update.with_diagnostics(vec![Diagnostic::TrimSkipped { reason }]))
        }
    }

    fn is_zero_length(&self, line: &LineElement) -> bool {
        line.length() <= self.config.continuity_tolerance
    }
}
