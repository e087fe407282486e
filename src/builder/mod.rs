//! Incremental resolution of segment descriptions into a chain of path elements.
//!
//! Descriptions are consumed strictly in order. Whatever cannot be resolved from the chain
//! built so far is held back until a completely defined description arrives. That held
//! back run is then resolved backwards, starting from the anchor, and joined to the chain.

mod arcs;
mod connection;
mod diagnostics;
mod lines;

pub use diagnostics::Diagnostic;

use crate::{
    config::BuilderConfig,
    descriptions::{self, Fillet, SegmentDescription},
    elements::{self, PathElement},
    error::BuildError,
    path::Path,
};

/// A description that joins the elements on either side of it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Connector {
    Fillet(Fillet),
}

impl Connector {
    pub fn radius(&self) -> f64 {
        match self {
            Connector::Fillet(fillet) => fillet.radius,
        }
    }
}

/// Direction in which a run of descriptions is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Traversal {
    Forward,
    /// Resolve the reversed run, then reverse the result back.
    Backward,
}

#[derive(Debug, Clone, PartialEq)]
enum State {
    Empty,
    HasContext,
    /// Descriptions waiting for a completely defined successor, oldest first.
    Deferred(Vec<SegmentDescription>),
}

/// Replacement for the tail of the chain.
///
/// Updates are computed without touching the builder, so a description that fails to
/// resolve leaves no trace.
#[derive(Debug, Default)]
struct Update {
    /// Number of trailing elements replaced by `elements`.
    replaced: usize,
    elements: Vec<PathElement>,
    diagnostics: Vec<Diagnostic>,
    connector_used: bool,
}

impl Update {
    fn appending(elements: Vec<PathElement>) -> Self {
        Self {
            elements,
            ..Self::default()
        }
    }

    fn replacing_last(elements: Vec<PathElement>) -> Self {
        Self {
            replaced: 1,
            elements,
            ..Self::default()
        }
    }

    fn with_diagnostics(mut self, diagnostics: Vec<Diagnostic>) -> Self {
        self.diagnostics.extend(diagnostics);
        self
    }

    fn using_connector(mut self) -> Self {
        self.connector_used = true;
        self
    }
}

/// Resolves profile descriptions one at a time.
#[derive(Debug, Clone)]
pub struct PathBuilder {
    config: BuilderConfig,
    state: State,
    elements: Vec<PathElement>,
    connector: Option<Connector>,
    diagnostics: Vec<Diagnostic>,
    position: usize,
}

impl PathBuilder {
    pub fn new(config: BuilderConfig) -> Self {
        Self {
            config,
            state: State::Empty,
            elements: Vec::new(),
            connector: None,
            diagnostics: Vec::new(),
            position: 0,
        }
    }

    /// The elements resolved so far. The last one may still be trimmed by what follows.
    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    pub fn push(&mut self, description: SegmentDescription) {
        let index = self.position;
        self.position += 1;
        log::debug!("Resolving description {}: {:?}", index, description);

        match std::mem::replace(&mut self.state, State::Empty) {
            State::Empty => self.start_chain(index, description),
            State::Deferred(mut stack) => {
                stack.push(description);
                if description.is_completely_defined() {
                    self.resolve_deferred(&stack);
                    self.state = State::HasContext;
                } else {
                    self.state = State::Deferred(stack);
                }
            }
            State::HasContext => {
                self.state = State::HasContext;
                self.append(description);
            }
        }
    }

    /// Ends the input and hands over the resolved chain.
    pub fn finish(self) -> Path {
        let (elements, diagnostics) = self.into_parts();
        Path::new(elements, diagnostics)
    }

    fn into_parts(mut self) -> (Vec<PathElement>, Vec<Diagnostic>) {
        if let State::Deferred(stack) = &self.state {
            let count = stack.len();
            self.report(Diagnostic::DeferredDropped { count });
        }

        if let Some(connector) = self.connector.take() {
            self.report(Diagnostic::DanglingConnector {
                radius: connector.radius(),
            });
        }

        if self
            .elements
            .last()
            .map_or(false, |last| last.end_point().is_none())
        {
            self.report(Diagnostic::OpenEnded);
        }

        (self.elements, self.diagnostics)
    }

    fn start_chain(&mut self, index: usize, description: SegmentDescription) {
        let first = match description {
            SegmentDescription::Line(line) => lines::first_line(&line),
            SegmentDescription::Arc(arc) => arcs::first_arc(&arc),
            SegmentDescription::Fillet(_) => Err(BuildError::ElementNotAppended),
        };

        match first {
            Ok(element) => {
                self.elements.push(element);
                self.state = State::HasContext;
            }
            Err(_) => self.report(Diagnostic::UnresolvedFirstElement { index }),
        }
    }

    fn append(&mut self, description: SegmentDescription) {
        let connector = self.connector;
        let update = match description {
            SegmentDescription::Line(line) => self.line_update(&line, connector),
            SegmentDescription::Arc(arc) => self.arc_update(&arc, connector),
            SegmentDescription::Fillet(fillet) => {
                if let Some(replaced) = self.connector.replace(Connector::Fillet(fillet)) {
                    self.report(Diagnostic::ConnectorIgnored {
                        radius: replaced.radius(),
                    });
                }
                return;
            }
        };

        match update {
            Ok(update) => self.apply(update, connector),
            Err(error) => {
                log::debug!("Deferring description: {}", error);
                self.state = State::Deferred(vec![description]);
            }
        }
    }

    fn resolve_deferred(&mut self, stack: &[SegmentDescription]) {
        log::debug!("Resolving {} deferred descriptions backwards", stack.len());

        let (run, diagnostics) = resolve(stack, Traversal::Backward, &self.config);
        self.diagnostics.extend(diagnostics);

        let connector = self.connector;
        let update = self.splice_update(run, connector);
        self.apply(update, connector);
    }

    fn apply(&mut self, update: Update, connector: Option<Connector>) {
        let unchanged =
            update.replaced == 0 && update.elements.is_empty() && !update.connector_used;

        let kept = self.elements.len().saturating_sub(update.replaced);
        self.elements.truncate(kept);
        self.elements.extend(update.elements);

        for diagnostic in update.diagnostics {
            self.report(diagnostic);
        }

        if unchanged {
            // Nothing was added, so a pending connector still applies to what follows.
            return;
        }

        if let Some(connector) = connector {
            if !update.connector_used {
                self.report(Diagnostic::ConnectorIgnored {
                    radius: connector.radius(),
                });
            }
        }
        self.connector = None;
    }

    fn report(&mut self, diagnostic: Diagnostic) {
        log::warn!("{}", diagnostic);
        self.diagnostics.push(diagnostic);
    }

    /// The element the next description continues from.
    fn last(&self) -> Result<&PathElement, BuildError> {
        self.elements.last().ok_or(BuildError::ElementNotAppended)
    }
}

/// Resolves a complete run of descriptions through a fresh builder.
pub(crate) fn resolve(
    descriptions: &[SegmentDescription],
    traversal: Traversal,
    config: &BuilderConfig,
) -> (Vec<PathElement>, Vec<Diagnostic>) {
    match traversal {
        Traversal::Forward => {
            let mut builder = PathBuilder::new(*config);
            for description in descriptions {
                builder.push(*description);
            }
            builder.into_parts()
        }
        Traversal::Backward => {
            let reversed = descriptions::reversed_completely(descriptions);
            let (elements, diagnostics) = resolve(&reversed, Traversal::Forward, config);

            // The open end of a backwards run becomes its start and is trimmed when spliced.
            let diagnostics = diagnostics
                .into_iter()
                .filter(|diagnostic| *diagnostic != Diagnostic::OpenEnded)
                .collect();

            (elements::reversed_completely(&elements), diagnostics)
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        angle::Angle,
        descriptions::{Arc, Direction, Line},
        elements::{ArcElement, LineElement},
        geometry::Point,
    };

    use super::*;

    const EPSILON: f64 = 1e-8;

    fn build(descriptions: &[SegmentDescription]) -> (Vec<PathElement>, Vec<Diagnostic>) {
        resolve(descriptions, Traversal::Forward, &BuilderConfig::default())
    }

    fn assert_line(element: &PathElement, start: (f64, f64), end: (f64, f64)) {
        let expected = PathElement::Line(LineElement::new(start.into(), end.into()));
        assert!(
            element.is_close_to(&expected, EPSILON),
            "{element:?} != {expected:?}"
        );
    }

    #[test]
    fn test_three_simple_lines() {
        let (elements, diagnostics) = build(&[
            Line::from_to((0.0, 0.0), (20.0, 0.0)).into(),
            Line::to((20.0, 10.0)).into(),
            Line::from_to((25.0, 10.0), (0.0, 10.0)).into(),
        ]);

        assert_eq!(elements.len(), 3);
        assert_line(&elements[0], (0.0, 0.0), (20.0, 0.0));
        assert_line(&elements[1], (20.0, 0.0), (20.0, 10.0));
        assert_line(&elements[2], (20.0, 10.0), (0.0, 10.0));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_intersecting_lines_are_trimmed() {
        let (elements, _) = build(&[
            Line::from_to((0.0, 0.0), (20.0, 0.0)).into(),
            Line::from_to((10.0, -10.0), (10.0, 10.0)).into(),
        ]);

        assert_eq!(elements.len(), 2);
        assert_line(&elements[0], (0.0, 0.0), (10.0, 0.0));
        assert_line(&elements[1], (10.0, 0.0), (10.0, 10.0));
    }

    #[test]
    fn test_lines_connected_with_fillet() {
        let (elements, diagnostics) = build(&[
            Line::from_to((10.0, 10.0), (20.0, 10.0)).into(),
            Fillet::new(5.0).into(),
            Line::from_to((20.0, 10.0), (20.0, 20.0)).into(),
        ]);

        assert_eq!(elements.len(), 3);
        assert_line(&elements[0], (10.0, 10.0), (15.0, 10.0));
        let expected = PathElement::Arc(ArcElement::from_points(
            Point::new(15.0, 15.0),
            5.0,
            Point::new(15.0, 10.0),
            Point::new(20.0, 15.0),
            false,
        ));
        assert!(elements[1].is_close_to(&expected, EPSILON));
        assert_line(&elements[2], (20.0, 15.0), (20.0, 20.0));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_unresolvable_first_elements_are_skipped() {
        let (elements, diagnostics) = build(&[
            Fillet::new(1.0).into(),
            Line::to((5.0, 5.0)).into(),
            Line::from_to((0.0, 0.0), (1.0, 0.0)).into(),
        ]);

        assert_eq!(elements.len(), 1);
        assert_eq!(
            diagnostics,
            vec![
                Diagnostic::UnresolvedFirstElement { index: 0 },
                Diagnostic::UnresolvedFirstElement { index: 1 },
            ]
        );
    }

    #[test]
    fn test_continuing_line_is_open_ended() {
        let (elements, diagnostics) = build(&[
            Line::from_to((0.0, 0.0), (10.0, 0.0)).into(),
            Line::new().into(),
        ]);

        assert_eq!(elements.len(), 2);
        assert_eq!(elements[1].end_point(), None);
        assert!((elements[1].end_heading().degrees()).abs() < EPSILON);
        assert_eq!(diagnostics, vec![Diagnostic::OpenEnded]);
    }

    #[test]
    fn test_ray_is_cut_by_following_line() {
        let (elements, diagnostics) = build(&[
            Line::from_to((0.0, 0.0), (10.0, 0.0)).into(),
            Line::heading(Angle::from_degrees(90.0)).into(),
            Line::from_to((0.0, 30.0), (-10.0, 30.0)).into(),
        ]);

        assert_eq!(elements.len(), 3);
        assert_line(&elements[1], (10.0, 0.0), (10.0, 30.0));
        assert_line(&elements[2], (10.0, 30.0), (-10.0, 30.0));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_line_with_heading_and_end() {
        let (elements, _) = build(&[
            Line::from_to((0.0, 0.0), (30.0, 0.0)).into(),
            Line::heading_to(Angle::from_degrees(45.0), (30.0, 20.0)).into(),
        ]);

        assert_eq!(elements.len(), 2);
        assert_line(&elements[0], (0.0, 0.0), (10.0, 0.0));
        assert_line(&elements[1], (10.0, 0.0), (30.0, 20.0));
    }

    #[test]
    fn test_collinear_continuation() {
        let (elements, diagnostics) = build(&[
            Line::from_to((0.0, 0.0), (10.0, 0.0)).into(),
            Line::to((20.0, 0.0)).into(),
        ]);

        assert_eq!(elements.len(), 2);
        assert_line(&elements[1], (10.0, 0.0), (20.0, 0.0));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_parallel_line_is_joined_directly() {
        let (elements, diagnostics) = build(&[
            Line::from_to((0.0, 0.0), (10.0, 0.0)).into(),
            Line::from_to((0.0, 5.0), (20.0, 5.0)).into(),
        ]);

        assert_eq!(elements.len(), 2);
        assert_line(&elements[1], (10.0, 0.0), (20.0, 5.0));
        assert_eq!(
            diagnostics,
            vec![Diagnostic::TrimSkipped {
                reason: crate::error::GeometryError::NoIntersection
            }]
        );
    }

    #[test]
    fn test_tangential_arc_to_x() {
        let (elements, diagnostics) = build(&[
            Line::from_to((0.0, 0.0), (10.0, 0.0)).into(),
            Arc::to_x(5.0, 15.0, Direction::CounterClockwise).into(),
        ]);

        assert_eq!(elements.len(), 2);
        match elements[1] {
            PathElement::Arc(arc) => {
                assert!(arc.center.is_close_to(&Point::new(10.0, 5.0), EPSILON));
                assert!(arc.start().is_close_to(&Point::new(10.0, 0.0), EPSILON));
                assert!(arc.end().is_close_to(&Point::new(15.0, 5.0), EPSILON));
            }
            PathElement::Line(_) => panic!("expected an arc"),
        }
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_tangential_arc_to_angle() {
        let (elements, _) = build(&[
            Line::from_to((0.0, 0.0), (10.0, 0.0)).into(),
            Arc::to_angle(5.0, Direction::Clockwise, Angle::from_degrees(0.0)).into(),
        ]);

        match elements[1] {
            PathElement::Arc(arc) => {
                assert!(arc.center.is_close_to(&Point::new(10.0, -5.0), EPSILON));
                assert!(arc.start().is_close_to(&Point::new(10.0, 0.0), EPSILON));
                assert!(arc.end().is_close_to(&Point::new(15.0, -5.0), EPSILON));
                assert!(arc.negative_direction);
            }
            PathElement::Line(_) => panic!("expected an arc"),
        }
    }

    #[test]
    fn test_arc_with_center_y_after_line() {
        let (elements, _) = build(&[
            Line::from_to((0.0, 0.0), (0.0, 30.0)).into(),
            Arc::center_y(4.0, 20.0, Direction::CounterClockwise).into(),
        ]);

        assert_eq!(elements.len(), 2);
        assert_line(&elements[0], (0.0, 0.0), (0.0, 20.0));
        match elements[1] {
            PathElement::Arc(arc) => {
                assert!(arc.center.is_close_to(&Point::new(-4.0, 20.0), EPSILON));
                assert!(arc.start().is_close_to(&Point::new(0.0, 20.0), EPSILON));
                assert!((arc.start_heading().degrees() - 90.0).abs() < EPSILON);
            }
            PathElement::Line(_) => panic!("expected an arc"),
        }
    }

    #[test]
    fn test_deferred_run_is_resolved_backwards() {
        let (elements, diagnostics) = build(&[
            Line::from_to((0.0, 0.0), (10.0, 0.0)).into(),
            Line::heading(Angle::from_degrees(90.0)).into(),
            Line::new().into(),
            Line::from_to((0.0, 30.0), (-10.0, 30.0)).into(),
        ]);

        assert_eq!(elements.len(), 4);
        assert_line(&elements[0], (0.0, 0.0), (10.0, 0.0));
        assert_line(&elements[1], (10.0, 0.0), (10.0, 30.0));
        assert_line(&elements[2], (10.0, 30.0), (0.0, 30.0));
        assert_line(&elements[3], (0.0, 30.0), (-10.0, 30.0));
        assert!(elements.iter().all(|element| element.end_point().is_some()));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_unanchored_deferred_line_is_dropped() {
        let (elements, diagnostics) = build(&[
            Line::from_to((0.0, 0.0), (10.0, 0.0)).into(),
            Line::new().into(),
            Line::to((30.0, 10.0)).into(),
            Line::from_to((30.0, 10.0), (30.0, 20.0)).into(),
        ]);

        // Walking backwards, the line to (30, 10) only knows where it starts.
        assert_eq!(elements.len(), 3);
        assert_line(&elements[0], (0.0, 0.0), (10.0, 0.0));
        assert_line(&elements[1], (10.0, 0.0), (30.0, 0.0));
        assert_line(&elements[2], (30.0, 0.0), (30.0, 20.0));
        assert_eq!(diagnostics, vec![Diagnostic::DeferredDropped { count: 1 }]);
    }

    #[test]
    fn test_untrimmable_line_after_ray_reports_gap() {
        let (elements, diagnostics) = build(&[
            Line::from_to((0.0, 0.0), (10.0, 0.0)).into(),
            Line::new().into(),
            Line::from_to((0.0, 5.0), (20.0, 5.0)).into(),
        ]);

        assert_eq!(elements.len(), 3);
        assert_line(&elements[2], (0.0, 5.0), (20.0, 5.0));
        assert_eq!(diagnostics.len(), 2);
        assert_eq!(
            diagnostics[0],
            Diagnostic::TrimSkipped {
                reason: crate::error::GeometryError::NoIntersection
            }
        );
        match diagnostics[1] {
            Diagnostic::Discontinuity { index, gap } => {
                assert_eq!(index, 2);
                assert!((gap - (1010.0f64.powi(2) + 25.0).sqrt()).abs() < 1e-6);
            }
            other => panic!("expected a discontinuity, got {other:?}"),
        }
    }

    #[test]
    fn test_zero_length_line_is_skipped() {
        let (elements, diagnostics) = build(&[
            Line::from_to((0.0, 0.0), (0.0, 10.0)).into(),
            Line::to((0.0, 10.0)).into(),
            Line::new().into(),
        ]);

        assert_eq!(elements.len(), 2);
        assert_line(&elements[0], (0.0, 0.0), (0.0, 10.0));
        assert!((elements[1].start_heading().degrees() - 90.0).abs() < EPSILON);
        assert_eq!(
            diagnostics,
            vec![Diagnostic::ZeroLengthLine, Diagnostic::OpenEnded]
        );
    }

    #[test]
    fn test_zero_length_line_keeps_pending_fillet() {
        let (elements, diagnostics) = build(&[
            Line::from_to((10.0, 10.0), (20.0, 10.0)).into(),
            Fillet::new(5.0).into(),
            Line::to((20.0, 10.0)).into(),
            Line::from_to((20.0, 10.0), (20.0, 20.0)).into(),
        ]);

        assert_eq!(elements.len(), 3);
        assert!(matches!(elements[1], PathElement::Arc(ArcElement { radius, .. }) if radius == 5.0));
        assert_eq!(diagnostics, vec![Diagnostic::ZeroLengthLine]);
    }

    #[test]
    fn test_zero_length_first_line_is_unresolved() {
        let (elements, diagnostics) = build(&[
            Line::from_to((1.0, 1.0), (1.0, 1.0)).into(),
            Line::from_to((0.0, 0.0), (1.0, 0.0)).into(),
        ]);

        assert_eq!(elements.len(), 1);
        assert_eq!(
            diagnostics,
            vec![Diagnostic::UnresolvedFirstElement { index: 0 }]
        );
    }

    #[test]
    fn test_leftovers_at_end_of_input() {
        let (_, diagnostics) = build(&[
            Line::from_to((0.0, 0.0), (10.0, 0.0)).into(),
            Line::new().into(),
            Fillet::new(1.0).into(),
            Line::to((30.0, 10.0)).into(),
        ]);

        assert!(diagnostics.contains(&Diagnostic::DeferredDropped { count: 1 }));
        assert!(diagnostics.contains(&Diagnostic::DanglingConnector { radius: 1.0 }));
        assert!(diagnostics.contains(&Diagnostic::OpenEnded));
    }

    #[test]
    fn test_fillet_on_open_line_then_deferred_anchor() {
        let (elements, diagnostics) = build(&[
            Line::from_to((0.0, 0.0), (10.0, 0.0)).into(),
            Line::new().into(),
            Fillet::new(2.0).into(),
            Line::to((20.0, 10.0)).into(),
            Line::from_to((20.0, 10.0), (20.0, 20.0)).into(),
        ]);

        assert_eq!(elements.len(), 4);
        assert_line(&elements[0], (0.0, 0.0), (10.0, 0.0));
        assert_line(&elements[1], (10.0, 0.0), (18.0, 0.0));
        match elements[2] {
            PathElement::Arc(arc) => {
                assert!(arc.center.is_close_to(&Point::new(18.0, 2.0), EPSILON));
                assert!(arc.end().is_close_to(&Point::new(20.0, 2.0), EPSILON));
            }
            PathElement::Line(_) => panic!("expected a fillet"),
        }
        assert_line(&elements[3], (20.0, 2.0), (20.0, 20.0));
        assert_eq!(diagnostics, vec![Diagnostic::DeferredDropped { count: 1 }]);
    }
}
