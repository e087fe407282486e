use crate::{angle::Angle, geometry::Point};

/// A straight line, described by any combination of start, end and heading.
///
/// Whatever is left out is inferred from the surrounding elements when the profile is
/// resolved.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Line {
    pub start: Option<Point>,
    pub end: Option<Point>,
    pub heading: Option<Angle>,
}

impl Line {
    /// A line continuing the heading of the previous element until something cuts it.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_to(start: impl Into<Point>, end: impl Into<Point>) -> Self {
        Self {
            start: Some(start.into()),
            end: Some(end.into()),
            heading: None,
        }
    }

    pub fn to(end: impl Into<Point>) -> Self {
        Self {
            end: Some(end.into()),
            ..Self::default()
        }
    }

    pub fn from_start(start: impl Into<Point>) -> Self {
        Self {
            start: Some(start.into()),
            ..Self::default()
        }
    }

    pub fn heading(heading: Angle) -> Self {
        Self {
            heading: Some(heading),
            ..Self::default()
        }
    }

    pub fn heading_to(heading: Angle, end: impl Into<Point>) -> Self {
        Self {
            end: Some(end.into()),
            heading: Some(heading),
            ..Self::default()
        }
    }

    pub fn from_heading(start: impl Into<Point>, heading: Angle) -> Self {
        Self {
            start: Some(start.into()),
            heading: Some(heading),
            ..Self::default()
        }
    }

    pub fn is_completely_defined(&self) -> bool {
        self.start.is_some() && self.end.is_some()
    }

    /// The same line as seen when walking the profile backwards.
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            end: self.start,
            heading: self.heading.map(|heading| heading.opposite()),
        }
    }
}
