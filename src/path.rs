//! A resolved profile and its conversion into points.

use geo::{Coord, LineString};
use itertools::Itertools;

use crate::{
    builder::{Diagnostic, PathBuilder},
    config::{BuilderConfig, SamplerConfig},
    descriptions::SegmentDescription,
    elements::PathElement,
    error::SamplingError,
    geometry::Point,
    sampler,
};

/// The chain of elements resolved from a list of descriptions, along with everything the
/// builder had to work around to get there.
#[derive(Debug, Clone, PartialEq)]
pub struct Path {
    elements: Vec<PathElement>,
    diagnostics: Vec<Diagnostic>,
}

impl Path {
    pub(crate) fn new(elements: Vec<PathElement>, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            elements,
            diagnostics,
        }
    }

    pub fn resolve(descriptions: impl IntoIterator<Item = SegmentDescription>) -> Self {
        Self::resolve_with(descriptions, &BuilderConfig::default())
    }

    pub fn resolve_with(
        descriptions: impl IntoIterator<Item = SegmentDescription>,
        config: &BuilderConfig,
    ) -> Self {
        let mut builder = PathBuilder::new(*config);
        for description in descriptions {
            builder.push(description);
        }

        let path = builder.finish();
        log::debug!(
            "Resolved {} elements with {} diagnostics",
            path.elements.len(),
            path.diagnostics.len()
        );

        path
    }

    pub fn elements(&self) -> &[PathElement] {
        &self.elements
    }

    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Whether every element starts where the previous one ends.
    pub fn is_continuous(&self, tolerance: f64) -> bool {
        self.elements.iter().tuple_windows().all(|(previous, next)| {
            previous
                .terminal_point()
                .is_close_to(&next.start_point(), tolerance)
        })
    }

    /// Samples the whole chain, starting with the start point of its first element.
    pub fn profile(&self, resolution: f64) -> Result<Vec<Point>, SamplingError> {
        let Some(first) = self.elements.first() else {
            return Ok(Vec::new());
        };

        let mut points = vec![first.start_point()];
        for element in self.elements.iter() {
            points.extend(sampler::sample_element(element, resolution)?);
        }

        Ok(points)
    }

    pub fn profile_with(&self, config: &SamplerConfig) -> Result<Vec<Point>, SamplingError> {
        self.profile(config.resolution())
    }

    pub fn to_line_string(&self, resolution: f64) -> Result<LineString<f64>, SamplingError> {
        let points = self
            .profile(resolution)?
            .into_iter()
            .map(|point| Coord {
                x: point.x,
                y: point.y,
            })
            .collect();

        Ok(LineString(points))
    }
}
