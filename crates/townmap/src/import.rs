//! Road-file import.
//!
//! A road file holds one record per line:
//!
//! ```text
//! RoadName,Weight;SourceTown;DestinationTown
//! ```
//!
//! The road name runs up to the first `,`, the weight up to the next `;`, the source town up to
//! the following `;`, and the destination town is the rest of the line. Fields are not trimmed,
//! so a weight padded with spaces is malformed. Blank lines are ignored.

use crate::{Error, Result};
use serde::Serialize;

/// How [`parse_records`] treats malformed lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportOptions {
    /// Skip malformed lines (logging a warning) instead of failing the whole import.
    pub lenient: bool,
}

/// One parsed road-file line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadRecord {
    pub name: String,
    pub weight: u32,
    pub source: String,
    pub destination: String,
}

impl RoadRecord {
    pub fn new(
        name: impl Into<String>,
        weight: u32,
        source: impl Into<String>,
        destination: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            weight,
            source: source.into(),
            destination: destination.into(),
        }
    }
}

/// Counters reported after records have been applied to a map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ImportSummary {
    pub records: usize,
    pub towns_added: usize,
    pub roads_added: usize,
    /// Records naming a town pair that was already connected. The first road wins.
    pub duplicate_roads: usize,
    pub skipped_lines: usize,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedRecords {
    pub records: Vec<RoadRecord>,
    pub skipped_lines: usize,
}

fn parse_fields(text: &str) -> std::result::Result<RoadRecord, &'static str> {
    let (name, rest) = text
        .split_once(',')
        .ok_or("expected `,` after the road name")?;
    let (weight, towns) = rest
        .split_once(';')
        .ok_or("expected `;` after the weight")?;
    let (source, destination) = towns
        .split_once(';')
        .ok_or("expected `;` between the two towns")?;

    if name.is_empty() {
        return Err("road name is empty");
    }
    if source.is_empty() || destination.is_empty() {
        return Err("town name is empty");
    }
    let weight = weight
        .parse::<u32>()
        .map_err(|_| "weight is not a non-negative integer")?;

    Ok(RoadRecord::new(name, weight, source, destination))
}

/// Parses a single line. `line` is the 1-based line number used in errors.
pub fn parse_record(line: usize, text: &str) -> Result<RoadRecord> {
    parse_fields(text).map_err(|message| Error::MalformedRecord {
        line,
        message: message.to_string(),
    })
}

/// Parses a whole road file.
///
/// In strict mode the first malformed line aborts parsing, so nothing is applied from a file
/// that fails.
pub fn parse_records(text: &str, options: ImportOptions) -> Result<ParsedRecords> {
    let mut out = ParsedRecords::default();
    for (ix, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match parse_record(ix + 1, line) {
            Ok(record) => out.records.push(record),
            Err(err) if options.lenient => {
                tracing::warn!(line = ix + 1, "skipping road record: {err}");
                out.skipped_lines += 1;
            }
            Err(err) => return Err(err),
        }
    }
    Ok(out)
}
