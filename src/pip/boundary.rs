//! Polygon datasets loaded from shapefiles.

use std::path::Path;

use geo::{Contains, MultiPolygon, Point};
use shapefile::dbase::Record;
use tracing::{debug, info};

use crate::error::{GcmdError, Result};
use crate::models::Dataset;
use crate::pip::geometry::{field_to_string, shape_to_multipolygon};

/// Where a record's lookup key comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordKey {
    /// Zero-based position of the record in the file ("0", "1", ...)
    Position,
    /// Value of a named dBASE attribute
    Field(String),
}

/// A single polygon record with its lookup key
#[derive(Debug, Clone)]
pub struct PolygonRecord {
    pub key: String,
    /// Display name, only loaded for datasets that route on it
    pub name: Option<String>,
    pub geometry: MultiPolygon<f64>,
}

impl PolygonRecord {
    pub fn new(key: impl Into<String>, geometry: MultiPolygon<f64>) -> Self {
        Self {
            key: key.into(),
            name: None,
            geometry,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }
}

/// All records of one dataset, in file order
#[derive(Debug, Clone)]
pub struct PolygonLayer {
    dataset: Dataset,
    records: Vec<PolygonRecord>,
}

impl PolygonLayer {
    pub fn new(dataset: Dataset, records: Vec<PolygonRecord>) -> Self {
        Self { dataset, records }
    }

    /// Read every record of a polygon shapefile into memory.
    ///
    /// Shapes that are not polygons keep their position (so positional keys
    /// stay aligned with the file) but get an empty geometry.
    pub fn open(
        path: &Path,
        dataset: Dataset,
        key: &RecordKey,
        name_field: Option<&str>,
    ) -> Result<Self> {
        info!("Loading {} polygons from {}", dataset, path.display());

        let open_err = |source| GcmdError::GeometryOpen {
            path: path.to_path_buf(),
            source,
        };

        let mut reader = shapefile::Reader::from_path(path).map_err(open_err)?;

        let mut records = Vec::new();
        for (index, item) in reader.iter_shapes_and_records().enumerate() {
            let (shape, attributes) = item.map_err(open_err)?;

            let key = match key {
                RecordKey::Position => index.to_string(),
                RecordKey::Field(field) => required_field(&attributes, field, path, index)?,
            };
            let name = name_field
                .map(|field| required_field(&attributes, field, path, index))
                .transpose()?;

            let geometry = shape_to_multipolygon(shape).unwrap_or_else(|| {
                debug!("{} record {} has no polygon geometry", dataset, index);
                MultiPolygon::new(vec![])
            });

            records.push(PolygonRecord {
                key,
                name,
                geometry,
            });
        }

        info!("Loaded {} {} polygons", records.len(), dataset);
        Ok(Self::new(dataset, records))
    }

    /// First record in file order whose interior contains the point
    pub fn first_containing(&self, point: &Point<f64>) -> Option<&PolygonRecord> {
        self.records.iter().find(|r| r.geometry.contains(point))
    }

    pub fn dataset(&self) -> Dataset {
        self.dataset
    }

    pub fn records(&self) -> &[PolygonRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

fn required_field(record: &Record, field: &str, path: &Path, index: usize) -> Result<String> {
    record
        .get(field)
        .and_then(field_to_string)
        .ok_or_else(|| GcmdError::MissingField {
            path: path.to_path_buf(),
            record: index,
            field: field.to_string(),
        })
}
