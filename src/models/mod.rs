//! Core data models for the keyword lookup.

pub mod resolution;
pub mod site;

pub use resolution::{Dataset, Resolution};
pub use site::{load_sites, parse_sites, Coordinate};
