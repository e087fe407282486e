//! Resolution of under-specified 2D profile descriptions into concrete geometry.
//!
//! A profile is described as an ordered list of [SegmentDescription]s: lines, arcs and
//! fillet connectors, each of which may leave out most of its geometry. The [PathBuilder]
//! resolves that list into a continuous chain of [PathElement]s, deferring descriptions
//! that can only be solved once a later, fully specified element anchors them. The
//! [sampler] then turns the chain into a point sequence at a chosen resolution.
//!
//! ```
//! use profile_forge::{Fillet, Line, Path, Point};
//!
//! let path = Path::resolve(vec![
//!     Line::from_to((10.0, 10.0), (20.0, 10.0)).into(),
//!     Fillet::new(5.0).into(),
//!     Line::from_to((20.0, 10.0), (20.0, 20.0)).into(),
//! ]);
//!
//! assert_eq!(path.elements().len(), 3);
//! let points = path.profile(0.5).unwrap();
//! assert_eq!(points.first(), Some(&Point::new(10.0, 10.0)));
//! ```

pub mod angle;
pub mod builder;
pub mod config;
pub mod descriptions;
pub mod elements;
pub mod error;
pub mod geometry;
pub mod path;
pub mod sampler;

pub use angle::Angle;
pub use builder::{Connector, Diagnostic, PathBuilder};
pub use config::{BuilderConfig, Config, SamplerConfig};
pub use descriptions::{Arc, Direction, Fillet, Line, SegmentDescription};
pub use elements::{ArcElement, LineElement, PathElement};
pub use error::{BuildError, GeometryError, SamplingError};
pub use geometry::{Circle, Intersection, Point};
pub use path::Path;
