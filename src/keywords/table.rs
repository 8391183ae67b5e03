use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use hashbrown::HashMap;
use tracing::{info, warn};

use crate::error::{GcmdError, Result};
use crate::models::Dataset;

/// How a repeated key in a lookup file is handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Later lines overwrite earlier ones (logged as a warning)
    #[default]
    LastWins,
    /// Fail the load on the first repeated key
    Reject,
}

/// Mapping from shapefile record identifier to GCMD keyword
#[derive(Debug, Clone, Default)]
pub struct KeywordTable {
    entries: HashMap<String, String>,
}

impl KeywordTable {
    /// Load a `<key> <keyword...>` file
    pub fn load(path: &Path, policy: DuplicatePolicy) -> Result<Self> {
        info!("Loading keyword table from {}", path.display());

        let file = File::open(path).map_err(|e| GcmdError::io(path, e))?;
        let table = Self::parse(BufReader::new(file), path, policy)?;

        info!("Loaded {} keywords", table.len());
        Ok(table)
    }

    /// Parse lookup lines from any reader. `path` is only used in messages.
    ///
    /// The key is the first whitespace-delimited token and the keyword is the
    /// trimmed remainder of the line. A line with fewer than two tokens,
    /// including a blank line, is a parse error.
    pub fn parse<R: BufRead>(reader: R, path: &Path, policy: DuplicatePolicy) -> Result<Self> {
        let mut entries = HashMap::new();

        for (idx, line) in reader.lines().enumerate() {
            let line_no = idx + 1;
            let line = line.map_err(|e| GcmdError::io(path, e))?;
            let trimmed = line.trim();

            let (key, keyword) = split_entry(trimmed).ok_or_else(|| GcmdError::LookupParse {
                path: path.to_path_buf(),
                line: line_no,
                content: line.clone(),
            })?;

            if entries.insert(key.to_string(), keyword.to_string()).is_some() {
                match policy {
                    DuplicatePolicy::LastWins => {
                        warn!(
                            "{}:{}: duplicate key {:?} overrides earlier entry",
                            path.display(),
                            line_no,
                            key
                        );
                    }
                    DuplicatePolicy::Reject => {
                        return Err(GcmdError::DuplicateKey {
                            path: path.to_path_buf(),
                            line: line_no,
                            key: key.to_string(),
                        });
                    }
                }
            }
        }

        Ok(Self { entries })
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for KeywordTable {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// Split a trimmed line at its first whitespace run
fn split_entry(line: &str) -> Option<(&str, &str)> {
    let (key, rest) = line.split_once(char::is_whitespace)?;
    let keyword = rest.trim();
    if keyword.is_empty() {
        None
    } else {
        Some((key, keyword))
    }
}

/// One lookup table per geometry dataset
#[derive(Debug, Clone, Default)]
pub struct KeywordTables {
    pub country: KeywordTable,
    pub state: KeywordTable,
    pub province: KeywordTable,
    pub ocean: KeywordTable,
}

impl KeywordTables {
    pub fn table(&self, dataset: Dataset) -> &KeywordTable {
        match dataset {
            Dataset::Country => &self.country,
            Dataset::State => &self.state,
            Dataset::Province => &self.province,
            Dataset::Ocean => &self.ocean,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    fn parse(text: &str, policy: DuplicatePolicy) -> Result<KeywordTable> {
        KeywordTable::parse(Cursor::new(text), Path::new("GCMD-state-lookup.txt"), policy)
    }

    #[test]
    fn test_tab_separated_keyword() {
        let table = parse(
            "US-CO\tNORTH AMERICA : UNITED STATES OF AMERICA : COLORADO\n",
            DuplicatePolicy::LastWins,
        )
        .unwrap();
        assert_eq!(
            table.get("US-CO"),
            Some("NORTH AMERICA : UNITED STATES OF AMERICA : COLORADO")
        );
    }

    #[test]
    fn test_keyword_is_trimmed_and_keeps_inner_spaces() {
        let table = parse(
            "  08    CONTINENT > NORTH AMERICA > UNITED STATES   \r\n",
            DuplicatePolicy::LastWins,
        )
        .unwrap();
        assert_eq!(
            table.get("08"),
            Some("CONTINENT > NORTH AMERICA > UNITED STATES")
        );
    }

    #[test]
    fn test_single_token_line_fails() {
        let err = parse("01 ALABAMA\n02\n", DuplicatePolicy::LastWins).unwrap_err();
        assert!(matches!(err, GcmdError::LookupParse { line: 2, .. }));
    }

    #[test]
    fn test_blank_line_fails_at_its_line() {
        let err = parse("01 ALABAMA\n\n02 ALASKA\n", DuplicatePolicy::LastWins).unwrap_err();
        assert!(matches!(err, GcmdError::LookupParse { line: 2, .. }));

        let err = parse("01 ALABAMA\n   \n", DuplicatePolicy::LastWins).unwrap_err();
        assert!(matches!(err, GcmdError::LookupParse { line: 2, .. }));
    }

    #[test]
    fn test_duplicate_last_wins() {
        let table = parse("01 FIRST\n01 SECOND\n", DuplicatePolicy::LastWins).unwrap();
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("01"), Some("SECOND"));
    }

    #[test]
    fn test_duplicate_rejected() {
        let err = parse("01 FIRST\n01 SECOND\n", DuplicatePolicy::Reject).unwrap_err();
        assert!(matches!(err, GcmdError::DuplicateKey { line: 2, ref key, .. } if key == "01"));
    }

    #[test]
    fn test_missing_key_is_none() {
        let table = parse("01 ALABAMA\n", DuplicatePolicy::LastWins).unwrap();
        assert_eq!(table.get("99"), None);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "24\tNORTH AMERICA : CANADA : ONTARIO").unwrap();
        writeln!(file, "35 NORTH AMERICA : CANADA : QUEBEC").unwrap();

        let table = KeywordTable::load(file.path(), DuplicatePolicy::Reject).unwrap();
        assert_eq!(table.get("35"), Some("NORTH AMERICA : CANADA : QUEBEC"));
    }

    #[test]
    fn test_load_missing_file() {
        let err = KeywordTable::load(Path::new("/nonexistent/lookup.txt"), DuplicatePolicy::LastWins)
            .unwrap_err();
        assert!(matches!(err, GcmdError::Io { .. }));
    }
}
