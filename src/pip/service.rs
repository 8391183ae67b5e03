//! Keyword resolution cascade for a coordinate.

use tracing::debug;

use super::{PolygonLayer, PolygonRecord};
use crate::keywords::KeywordTables;
use crate::models::{Coordinate, Dataset, Resolution};

/// Country `NAME` that routes to the US state dataset
pub const UNITED_STATES: &str = "United States of America";
/// Country `NAME` that routes to the Canadian province dataset
pub const CANADA: &str = "Canada";

/// The four polygon datasets consulted by the cascade
#[derive(Debug, Clone)]
pub struct GeometrySet {
    pub countries: PolygonLayer,
    pub states: PolygonLayer,
    pub provinces: PolygonLayer,
    pub oceans: PolygonLayer,
}

/// Resolves coordinates to GCMD location keywords
pub struct GcmdResolver {
    geometry: GeometrySet,
    keywords: KeywordTables,
}

impl GcmdResolver {
    pub fn new(geometry: GeometrySet, keywords: KeywordTables) -> Self {
        Self { geometry, keywords }
    }

    /// Resolve one coordinate.
    ///
    /// The first containing country decides the branch: the United States and
    /// Canada descend into their state/province polygons, any other country
    /// resolves directly. A point inside the US or Canada polygon that falls in
    /// no state/province is `NotFound` and is not tested against oceans.
    /// Ocean basins are only consulted when no country contains the point.
    pub fn resolve(&self, coord: &Coordinate) -> Resolution {
        let point = coord.point();

        if let Some(country) = self.geometry.countries.first_containing(&point) {
            let resolution = match country.name.as_deref() {
                Some(UNITED_STATES) => self
                    .geometry
                    .states
                    .first_containing(&point)
                    .map(|state| self.lookup(Dataset::State, state)),
                Some(CANADA) => self
                    .geometry
                    .provinces
                    .first_containing(&point)
                    .map(|province| self.lookup(Dataset::Province, province)),
                _ => Some(self.lookup(Dataset::Country, country)),
            };

            debug!(
                "({}, {}) in country {} {:?}: {:?}",
                coord.lon, coord.lat, country.key, country.name, resolution
            );
            return resolution.unwrap_or(Resolution::NotFound);
        }

        let resolution = self
            .geometry
            .oceans
            .first_containing(&point)
            .map(|basin| self.lookup(Dataset::Ocean, basin))
            .unwrap_or(Resolution::NotFound);

        debug!("({}, {}) off land: {:?}", coord.lon, coord.lat, resolution);
        resolution
    }

    /// Resolve every coordinate, preserving input order
    pub fn resolve_all(&self, coords: &[Coordinate]) -> Vec<Resolution> {
        coords.iter().map(|c| self.resolve(c)).collect()
    }

    fn lookup(&self, dataset: Dataset, record: &PolygonRecord) -> Resolution {
        match self.keywords.table(dataset).get(&record.key) {
            Some(keyword) => Resolution::Keyword {
                dataset,
                key: record.key.clone(),
                keyword: keyword.to_string(),
            },
            None => Resolution::Unmapped {
                dataset,
                key: record.key.clone(),
            },
        }
    }
}
