//! Fully resolved path elements.

mod arc;
mod line;

pub use arc::ArcElement;
pub use line::LineElement;

use crate::{angle::Angle, geometry::Point};

/// One concrete piece of a resolved profile.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathElement {
    Line(LineElement),
    Arc(ArcElement),
}

impl PathElement {
    pub fn start_point(&self) -> Point {
        match self {
            PathElement::Line(line) => line.start,
            PathElement::Arc(arc) => arc.start(),
        }
    }

    pub fn start_heading(&self) -> Angle {
        match self {
            PathElement::Line(line) => line.heading(),
            PathElement::Arc(arc) => arc.start_heading(),
        }
    }

    /// The point the next element continues from.
    ///
    /// Absent only for provisional rays, whose end is still to be determined.
    pub fn end_point(&self) -> Option<Point> {
        match self {
            PathElement::Line(line) => line.end_point(),
            PathElement::Arc(arc) => Some(arc.end()),
        }
    }

    /// The geometric end, whether or not it may be continued from.
    pub fn terminal_point(&self) -> Point {
        match self {
            PathElement::Line(line) => line.end,
            PathElement::Arc(arc) => arc.end(),
        }
    }

    pub fn end_heading(&self) -> Angle {
        match self {
            PathElement::Line(line) => line.heading(),
            PathElement::Arc(arc) => arc.end_heading(),
        }
    }

    /// The same geometry traversed from end to start.
    pub fn reversed(&self) -> Self {
        match self {
            PathElement::Line(line) => PathElement::Line(line.reversed()),
            PathElement::Arc(arc) => PathElement::Arc(arc.reversed()),
        }
    }

    /// Compares geometry and direction within `tolerance`.
    pub fn is_close_to(&self, other: &PathElement, tolerance: f64) -> bool {
        match (self, other) {
            (PathElement::Line(a), PathElement::Line(b)) => {
                a.start.is_close_to(&b.start, tolerance) && a.end.is_close_to(&b.end, tolerance)
            }
            (PathElement::Arc(a), PathElement::Arc(b)) => {
                a.negative_direction == b.negative_direction
                    && a.center.is_close_to(&b.center, tolerance)
                    && (a.radius - b.radius).abs() < tolerance
                    && a.start().is_close_to(&b.start(), tolerance)
                    && a.end().is_close_to(&b.end(), tolerance)
            }
            _ => false,
        }
    }
}

impl From<LineElement> for PathElement {
    fn from(line: LineElement) -> Self {
        PathElement::Line(line)
    }
}

impl From<ArcElement> for PathElement {
    fn from(arc: ArcElement) -> Self {
        PathElement::Arc(arc)
    }
}

/// Reverses the order of `elements` and the direction of each one.
pub(crate) fn reversed_completely(elements: &[PathElement]) -> Vec<PathElement> {
    elements.iter().rev().map(PathElement::reversed).collect()
}
