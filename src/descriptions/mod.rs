//! Under-specified segment descriptions, the input of the path builder.

mod arc;
mod fillet;
mod line;

pub use arc::{arc_end_point, Arc, Direction};
pub use fillet::Fillet;
pub use line::Line;

/// One entry of a profile description.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SegmentDescription {
    Line(Line),
    Arc(Arc),
    /// Connects its neighbours. Never resolves to anything on its own.
    Fillet(Fillet),
}

impl SegmentDescription {
    /// True if the description can be resolved without looking at its neighbours.
    pub fn is_completely_defined(&self) -> bool {
        match self {
            SegmentDescription::Line(line) => line.is_completely_defined(),
            SegmentDescription::Arc(arc) => arc.is_completely_defined(),
            SegmentDescription::Fillet(_) => false,
        }
    }

    pub fn reversed(&self) -> Self {
        match self {
            SegmentDescription::Line(line) => SegmentDescription::Line(line.reversed()),
            SegmentDescription::Arc(arc) => SegmentDescription::Arc(arc.reversed()),
            SegmentDescription::Fillet(fillet) => SegmentDescription::Fillet(*fillet),
        }
    }
}

impl From<Line> for SegmentDescription {
    fn from(line: Line) -> Self {
        SegmentDescription::Line(line)
    }
}

impl From<Arc> for SegmentDescription {
    fn from(arc: Arc) -> Self {
        SegmentDescription::Arc(arc)
    }
}

impl From<Fillet> for SegmentDescription {
    fn from(fillet: Fillet) -> Self {
        SegmentDescription::Fillet(fillet)
    }
}

/// Reverses the order of `descriptions` and the role of each one.
pub(crate) fn reversed_completely(descriptions: &[SegmentDescription]) -> Vec<SegmentDescription> {
    descriptions
        .iter()
        .rev()
        .map(SegmentDescription::reversed)
        .collect()
}
