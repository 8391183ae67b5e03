//! GCMD keyword lookup tables.
//!
//! Each geometry dataset has a flat text file mapping a record identifier
//! to its GCMD location keyword.

mod table;

pub use table::{DuplicatePolicy, KeywordTable, KeywordTables};
