//! Input coordinates and the whitespace-delimited site file they come from.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use geo::Point;
use serde::Serialize;
use tracing::info;

use crate::error::{GcmdError, Result};

/// A site location in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    pub lon: f64,
    pub lat: f64,
}

impl Coordinate {
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// Planar point with x = longitude, y = latitude
    pub fn point(&self) -> Point<f64> {
        Point::new(self.lon, self.lat)
    }
}

/// Load site coordinates from a file with a `lat`/`lon` header row
pub fn load_sites(path: &Path) -> Result<Vec<Coordinate>> {
    info!("Loading sites from {}", path.display());

    let file = File::open(path).map_err(|e| GcmdError::io(path, e))?;
    let sites = parse_sites(BufReader::new(file), path)?;

    info!("Loaded {} sites", sites.len());
    Ok(sites)
}

/// Parse site rows from any reader. `path` is only used in error messages.
///
/// The first non-blank line is the header. Columns are located by name, so
/// extra columns and either column order are accepted.
pub fn parse_sites<R: BufRead>(reader: R, path: &Path) -> Result<Vec<Coordinate>> {
    let mut columns: Option<(usize, usize)> = None;
    let mut sites = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line_no = idx + 1;
        let line = line.map_err(|e| GcmdError::io(path, e))?;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        if tokens.is_empty() {
            continue;
        }

        let (lat_idx, lon_idx) = match columns {
            Some(cols) => cols,
            None => {
                let find = |name: &str| {
                    tokens
                        .iter()
                        .position(|t| *t == name)
                        .ok_or_else(|| GcmdError::MissingColumn {
                            path: path.to_path_buf(),
                            column: name.to_string(),
                        })
                };
                columns = Some((find("lat")?, find("lon")?));
                continue;
            }
        };

        let lat = parse_degrees(&tokens, lat_idx, "lat", path, line_no)?;
        let lon = parse_degrees(&tokens, lon_idx, "lon", path, line_no)?;
        sites.push(Coordinate::new(lon, lat));
    }

    Ok(sites)
}

fn parse_degrees(
    tokens: &[&str],
    idx: usize,
    column: &str,
    path: &Path,
    line: usize,
) -> Result<f64> {
    let err = |reason: String| GcmdError::SiteParse {
        path: path.to_path_buf(),
        line,
        reason,
    };

    let raw = tokens
        .get(idx)
        .ok_or_else(|| err(format!("missing {} value", column)))?;
    let value: f64 = raw
        .parse()
        .map_err(|_| err(format!("invalid {} value {:?}", column, raw)))?;

    if !value.is_finite() {
        return Err(err(format!("non-finite {} value {:?}", column, raw)));
    }
    Ok(value)
}
