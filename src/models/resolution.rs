//! Outcome of resolving one coordinate.

use serde::Serialize;

/// The four geometry datasets, each paired with its own lookup table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Dataset {
    Country,
    State,
    Province,
    Ocean,
}

impl Dataset {
    pub fn name(&self) -> &'static str {
        match self {
            Dataset::Country => "country",
            Dataset::State => "state",
            Dataset::Province => "province",
            Dataset::Ocean => "ocean",
        }
    }
}

impl std::fmt::Display for Dataset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// What a single coordinate resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Resolution {
    /// A containing polygon was found and its identifier is in the lookup table
    Keyword {
        dataset: Dataset,
        key: String,
        keyword: String,
    },
    /// A containing polygon was found but its identifier has no lookup entry
    Unmapped { dataset: Dataset, key: String },
    /// No polygon in the cascade contains the point
    NotFound,
}

impl Resolution {
    /// Text printed for points outside every polygon
    pub const NOT_FOUND: &'static str = "Not found";

    pub fn keyword(&self) -> Option<&str> {
        match self {
            Resolution::Keyword { keyword, .. } => Some(keyword),
            _ => None,
        }
    }

    /// Short status label, also used as the JSON `status` tag
    pub fn status(&self) -> &'static str {
        match self {
            Resolution::Keyword { .. } => "keyword",
            Resolution::Unmapped { .. } => "unmapped",
            Resolution::NotFound => "not_found",
        }
    }
}

impl std::fmt::Display for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resolution::Keyword { keyword, .. } => f.write_str(keyword),
            Resolution::Unmapped { dataset, key } => {
                write!(f, "Unmapped identifier: {} {}", dataset, key)
            }
            Resolution::NotFound => f.write_str(Self::NOT_FOUND),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_lines() {
        let found = Resolution::Keyword {
            dataset: Dataset::State,
            key: "08".to_string(),
            keyword: "NORTH AMERICA : UNITED STATES OF AMERICA : COLORADO".to_string(),
        };
        assert_eq!(
            found.to_string(),
            "NORTH AMERICA : UNITED STATES OF AMERICA : COLORADO"
        );

        let unmapped = Resolution::Unmapped {
            dataset: Dataset::Ocean,
            key: "17".to_string(),
        };
        assert_eq!(unmapped.to_string(), "Unmapped identifier: ocean 17");
        assert_eq!(Resolution::NotFound.to_string(), "Not found");
    }

    #[test]
    fn test_unmapped_is_distinct_from_not_found() {
        let unmapped = Resolution::Unmapped {
            dataset: Dataset::Country,
            key: "3".to_string(),
        };
        assert_ne!(unmapped, Resolution::NotFound);
        assert!(unmapped.keyword().is_none());
        assert_ne!(unmapped.status(), Resolution::NotFound.status());
    }

    #[test]
    fn test_serialize_status_tag() {
        let json = serde_json::to_value(Resolution::Unmapped {
            dataset: Dataset::Province,
            key: "24".to_string(),
        })
        .unwrap();
        assert_eq!(json["status"], "unmapped");
        assert_eq!(json["dataset"], "province");
        assert_eq!(json["key"], "24");
    }
}
