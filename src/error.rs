use thiserror::Error;

/// Failures of the intersection engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// The elements do not meet, e.g. parallel lines or a line passing beside a circle.
    #[error("the elements do not intersect")]
    NoIntersection,

    /// Both lines lie on the same infinite line, so there is no single intersection.
    #[error("the lines are identical")]
    IdenticalLines,

    /// A line of zero length has no direction.
    #[error("the line has zero length")]
    DegenerateLine,
}

/// Control flow of the path builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BuildError {
    /// The description lacks enough information to be resolved in the current context.
    #[error("element could not be appended in the current context")]
    ElementNotAppended,
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum SamplingError {
    #[error("sampling resolution must be a positive finite number, got {0}")]
    InvalidResolution(f64),
}
