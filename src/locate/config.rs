//! TOML configuration naming the shapefiles, lookup tables and attribute fields.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use gcmd_locate::keywords::DuplicatePolicy;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub datasets: DatasetPaths,
    pub lookups: LookupConfig,
    #[serde(default)]
    pub fields: FieldConfig,
}

/// Shapefile path for each polygon dataset
#[derive(Debug, Deserialize, Clone)]
pub struct DatasetPaths {
    pub countries: PathBuf,
    pub states: PathBuf,
    pub provinces: PathBuf,
    pub oceans: PathBuf,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LookupConfig {
    pub countries: PathBuf,
    pub states: PathBuf,
    pub provinces: PathBuf,
    pub oceans: PathBuf,
    #[serde(default)]
    pub reject_duplicates: bool,
}

/// Attribute names read from the shapefiles
#[derive(Debug, Deserialize, Clone)]
pub struct FieldConfig {
    #[serde(default = "default_country_name")]
    pub country_name: String,
    #[serde(default = "default_state_id")]
    pub state_id: String,
    #[serde(default = "default_province_id")]
    pub province_id: String,
}

fn default_country_name() -> String {
    "NAME".to_string()
}

fn default_state_id() -> String {
    "GEOID".to_string()
}

fn default_province_id() -> String {
    "PRUID".to_string()
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            country_name: default_country_name(),
            state_id: default_state_id(),
            province_id: default_province_id(),
        }
    }
}

impl LookupConfig {
    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        if self.reject_duplicates {
            DuplicatePolicy::Reject
        } else {
            DuplicatePolicy::LastWins
        }
    }
}

impl Config {
    /// Load the config and resolve relative paths against its directory
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::parse(&content).context("Failed to parse config file")?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        Ok(config.relative_to(base))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    fn relative_to(mut self, base: &Path) -> Self {
        for path in [
            &mut self.datasets.countries,
            &mut self.datasets.states,
            &mut self.datasets.provinces,
            &mut self.datasets.oceans,
            &mut self.lookups.countries,
            &mut self.lookups.states,
            &mut self.lookups.provinces,
            &mut self.lookups.oceans,
        ] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
        self
    }
}
