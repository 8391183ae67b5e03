//! Writes one line per resolved coordinate.

use std::io::Write;

use anyhow::Result;
use clap::ValueEnum;
use serde::Serialize;

use gcmd_locate::{Coordinate, Resolution};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Keyword, "Not found", or "Unmapped identifier: <dataset> <key>"
    Text,
    /// One JSON object per line
    Json,
}

#[derive(Serialize)]
struct JsonLine<'a> {
    lat: f64,
    lon: f64,
    #[serde(flatten)]
    resolution: &'a Resolution,
}

/// Per-status tallies for the end-of-run summary
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub keyword: usize,
    pub unmapped: usize,
    pub not_found: usize,
}

impl Summary {
    pub fn total(&self) -> usize {
        self.keyword + self.unmapped + self.not_found
    }
}

pub struct Reporter<W: Write> {
    out: W,
    format: OutputFormat,
    summary: Summary,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, format: OutputFormat) -> Self {
        Self {
            out,
            format,
            summary: Summary::default(),
        }
    }

    pub fn report(&mut self, site: &Coordinate, resolution: &Resolution) -> Result<()> {
        match resolution {
            Resolution::Keyword { .. } => self.summary.keyword += 1,
            Resolution::Unmapped { .. } => self.summary.unmapped += 1,
            Resolution::NotFound => self.summary.not_found += 1,
        }

        match self.format {
            OutputFormat::Text => writeln!(self.out, "{}", resolution)?,
            OutputFormat::Json => {
                let line = JsonLine {
                    lat: site.lat,
                    lon: site.lon,
                    resolution,
                };
                serde_json::to_writer(&mut self.out, &line)?;
                writeln!(self.out)?;
            }
        }
        Ok(())
    }

    /// Flush output and return the tallies
    pub fn finish(mut self) -> Result<Summary> {
        self.out.flush()?;
        Ok(self.summary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gcmd_locate::Dataset;

    fn sample() -> Vec<(Coordinate, Resolution)> {
        vec![
            (
                Coordinate::new(-105.0, 39.0),
                Resolution::Keyword {
                    dataset: Dataset::State,
                    key: "08".to_string(),
                    keyword: "NORTH AMERICA : UNITED STATES OF AMERICA : COLORADO".to_string(),
                },
            ),
            (Coordinate::new(0.0, -89.0), Resolution::NotFound),
            (
                Coordinate::new(120.0, 0.0),
                Resolution::Unmapped {
                    dataset: Dataset::Ocean,
                    key: "17".to_string(),
                },
            ),
        ]
    }

    #[test]
    fn test_text_report() {
        let mut buf = Vec::new();
        let mut reporter = Reporter::new(&mut buf, OutputFormat::Text);
        for (site, resolution) in sample() {
            reporter.report(&site, &resolution).unwrap();
        }
        let summary = reporter.finish().unwrap();

        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "NORTH AMERICA : UNITED STATES OF AMERICA : COLORADO\nNot found\nUnmapped identifier: ocean 17\n"
        );
        assert_eq!(
            summary,
            Summary {
                keyword: 1,
                unmapped: 1,
                not_found: 1
            }
        );
        assert_eq!(summary.total(), 3);
    }

    #[test]
    fn test_json_report() {
        let mut buf = Vec::new();
        let mut reporter = Reporter::new(&mut buf, OutputFormat::Json);
        for (site, resolution) in sample() {
            reporter.report(&site, &resolution).unwrap();
        }
        reporter.finish().unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<serde_json::Value> = text
            .lines()
            .map(|l| serde_json::from_str(l).unwrap())
            .collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0]["status"], "keyword");
        assert_eq!(lines[0]["key"], "08");
        assert_eq!(lines[0]["lat"], 39.0);
        assert_eq!(lines[1]["status"], "not_found");
        assert!(lines[1].get("keyword").is_none());
        assert_eq!(lines[2]["dataset"], "ocean");
    }
}
