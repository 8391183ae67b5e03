//! Point-in-Polygon (PIP) keyword resolution.
//!
//! Loads the country, US state, Canadian province and ocean basin
//! shapefiles once and resolves each coordinate through the
//! country -> state/province -> ocean cascade.

mod boundary;
mod geometry;
mod service;

pub use boundary::{PolygonLayer, PolygonRecord, RecordKey};
pub use geometry::{field_to_string, shape_to_multipolygon};
pub use service::{GcmdResolver, GeometrySet, CANADA, UNITED_STATES};
