//! Tab-delimited column extraction and text file comparison.

use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use tracing::info;

use crate::error::{GcmdError, Result};

/// Return tab-separated fields `start..end` of `s`, joined by tabs.
///
/// Fails when `end` is not below the number of fields, so the final field of
/// a line can never be selected.
pub fn split_at_tabs(s: &str, start: usize, end: usize) -> Result<String> {
    let parts: Vec<&str> = s.split('\t').collect();
    if end >= parts.len() {
        return Err(GcmdError::ColumnOutOfRange {
            end,
            fields: parts.len(),
        });
    }
    if start >= end {
        return Ok(String::new());
    }
    Ok(parts[start..end].join("\t"))
}

/// Compare two text files line by line.
///
/// `\r\n` and `\n` line endings compare equal.
pub fn files_are_textually_equal(a: &Path, b: &Path) -> Result<bool> {
    let open = |path: &Path| {
        File::open(path)
            .map(BufReader::new)
            .map_err(|e| GcmdError::io(path, e))
    };
    let mut left = open(a)?;
    let mut right = open(b)?;

    let mut left_line = String::new();
    let mut right_line = String::new();
    loop {
        left_line.clear();
        right_line.clear();
        let left_n = left
            .read_line(&mut left_line)
            .map_err(|e| GcmdError::io(a, e))?;
        let right_n = right
            .read_line(&mut right_line)
            .map_err(|e| GcmdError::io(b, e))?;

        if normalize_newline(&left_line) != normalize_newline(&right_line) {
            return Ok(false);
        }
        if left_n == 0 && right_n == 0 {
            return Ok(true);
        }
    }
}

fn normalize_newline(line: &str) -> std::borrow::Cow<'_, str> {
    match line.strip_suffix("\r\n") {
        Some(body) => format!("{}\n", body).into(),
        None => line.into(),
    }
}

/// Copy columns `start..=end` (1-based) of every non-comment line of `input`
/// into `output`. Returns the number of lines written.
pub fn extract_columns(input: &Path, output: &Path, start: usize, end: usize) -> Result<usize> {
    if start == 0 || start > end {
        return Err(GcmdError::InvalidColumnSpan { start, end });
    }

    info!(
        "Extracting columns {}..={} from {} into {}",
        start,
        end,
        input.display(),
        output.display()
    );

    let reader = File::open(input)
        .map(BufReader::new)
        .map_err(|e| GcmdError::io(input, e))?;

    let mut selected = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(|e| GcmdError::io(input, e))?;
        if line.starts_with('#') {
            continue;
        }
        selected.push(split_at_tabs(&line, start - 1, end)?);
    }

    let file = File::create(output).map_err(|e| GcmdError::io(output, e))?;
    let mut writer = BufWriter::new(file);
    for row in &selected {
        writeln!(writer, "{}", row).map_err(|e| GcmdError::io(output, e))?;
    }
    writer.flush().map_err(|e| GcmdError::io(output, e))?;

    info!("Wrote {} lines", selected.len());
    Ok(selected.len())
}
