use std::fmt;

use crate::error::GeometryError;

/// Something the builder had to work around while resolving a profile.
///
/// None of these stop resolution. They record where the resolved chain differs from what
/// the descriptions asked for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Diagnostic {
    /// A leading description could not start the chain and was skipped. `index` is its
    /// position within the run being resolved.
    UnresolvedFirstElement { index: usize },

    /// A fillet could not be constructed. The neighbouring elements were joined without it.
    FilletSkipped { radius: f64, reason: GeometryError },

    /// A new line could not be trimmed against the previous element and was joined to its end
    /// point directly.
    TrimSkipped { reason: GeometryError },

    /// A pending fillet reached an element that cannot be connected with one.
    ConnectorIgnored { radius: f64 },

    /// Fillets between two arcs are not supported.
    UnsupportedConnection,

    /// Descriptions that were still waiting for an anchor when the input ended.
    DeferredDropped { count: usize },

    /// A fillet was still pending when the input ended.
    DanglingConnector { radius: f64 },

    /// A line that would end where it starts was skipped.
    ZeroLengthLine,

    /// A resolved run or line was joined to the chain across a gap.
    Discontinuity { index: usize, gap: f64 },

    /// The chain ends in a provisional ray.
    OpenEnded,
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::UnresolvedFirstElement { index } => {
                write!(f, "description {index} cannot start a profile and was skipped")
            }
            Diagnostic::FilletSkipped { radius, reason } => {
                write!(f, "fillet of radius {radius} skipped: {reason}")
            }
            Diagnostic::TrimSkipped { reason } => {
                write!(f, "line joined without trimming: {reason}")
            }
            Diagnostic::ConnectorIgnored { radius } => {
                write!(f, "fillet of radius {radius} cannot connect the next element")
            }
            Diagnostic::UnsupportedConnection => write!(f, "arcs cannot be connected by fillets"),
            Diagnostic::DeferredDropped { count } => {
                write!(f, "{count} unresolved descriptions dropped at the end of the profile")
            }
            Diagnostic::DanglingConnector { radius } => {
                write!(f, "fillet of radius {radius} has nothing to connect to")
            }
            Diagnostic::Discontinuity { index, gap } => {
                write!(f, "gap of {gap} before element {index}")
            }
            Diagnostic::ZeroLengthLine => write!(f, "line of zero length skipped"),
            Diagnostic::OpenEnded => write!(f, "profile ends in an unbounded line"),
        }
    }
}
