//! gcmd-locate - Map coordinates to NASA GCMD location keywords
//!
//! This library provides shared types and modules for the locate and extract binaries.

pub mod columns;
pub mod error;
pub mod keywords;
pub mod models;
pub mod pip;

pub use error::{GcmdError, Result};
pub use models::{Coordinate, Dataset, Resolution};
