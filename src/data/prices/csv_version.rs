//! Flat-file price source
//!
//! The scraper keeps two files: a historical one with a `Date,Price` header and
//! a recent one it appends `Time,Price` rows to without a header. Both go
//! through the same line parser; rows that fail to parse are skipped.

use std::io::ErrorKind;
use std::path::PathBuf;

use anyhow::{Context, Result};
use async_trait::async_trait;
use thiserror::Error;

#[cfg(debug_assertions)]
use crate::config::debug::{PRINT_CSV_LOAD, PRINT_DROPPED_ROWS};
use crate::config::persistence::CsvLayout;
use crate::domain::PricePoint;
use crate::utils::time_utils::parse_timestamp;

use super::PriceSource;

/// Why a single CSV row was rejected
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RowError {
    #[error("expected 2 fields, got {0}")]
    FieldCount(usize),

    #[error("failed to parse timestamp '{0}'")]
    InvalidTimestamp(String),

    #[error("failed to parse price '{0}'")]
    InvalidPrice(String),
}

/// Split one line on commas, honouring double-quoted fields (`"1,234.50"`).
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields
}

/// Price cells may carry a currency sign or thousands separators.
fn parse_price(text: &str) -> Option<f64> {
    let cleaned: String = text
        .trim()
        .trim_start_matches('$')
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();
    cleaned.parse().ok()
}

pub fn parse_line(line: &str) -> Result<PricePoint, RowError> {
    let fields = split_fields(line);
    if fields.len() != 2 {
        return Err(RowError::FieldCount(fields.len()));
    }

    let timestamp = parse_timestamp(&fields[0])
        .ok_or_else(|| RowError::InvalidTimestamp(fields[0].trim().to_string()))?;
    let price =
        parse_price(&fields[1]).ok_or_else(|| RowError::InvalidPrice(fields[1].trim().to_string()))?;

    Ok(PricePoint::new(timestamp, price))
}

/// True when `line` names the layout's columns (`Date,Price`), ignoring case.
fn is_header(line: &str, layout: &CsvLayout) -> bool {
    let fields = split_fields(line);
    fields.len() == 2
        && fields[0].trim().eq_ignore_ascii_case(layout.time_column)
        && fields[1].trim().eq_ignore_ascii_case(layout.price_column)
}

/// Parse a whole file. Returns the good rows in file order and the number of
/// rows skipped. Price validity (> 0, finite) is checked later by the series.
///
/// A first line naming the layout's columns is dropped without counting as a
/// bad row. Any other first line is parsed as data, even in a layout that
/// expects a header.
pub fn parse_csv(text: &str, layout: &CsvLayout) -> (Vec<PricePoint>, usize) {
    let mut points = Vec::new();
    let mut skipped = 0;
    let mut first_line = true;

    for (_line_number, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        if std::mem::take(&mut first_line) {
            if is_header(trimmed, layout) {
                continue;
            }
            if layout.has_header {
                log::debug!(
                    "Expected a '{},{}' header, got {:?}",
                    layout.time_column,
                    layout.price_column,
                    trimmed
                );
            }
        }

        match parse_line(trimmed) {
            Ok(point) => points.push(point),
            Err(_e) => {
                skipped += 1;
                #[cfg(debug_assertions)]
                if PRINT_DROPPED_ROWS {
                    log::info!("Skipping line {}: {} ({:?})", _line_number + 1, _e, trimmed);
                }
            }
        }
    }

    (points, skipped)
}

pub struct CsvVersion {
    signature: &'static str,
    pub path: PathBuf,
    layout: CsvLayout,
}

impl CsvVersion {
    pub fn new(signature: &'static str, path: PathBuf, layout: CsvLayout) -> Self {
        Self {
            signature,
            path,
            layout,
        }
    }
}

#[async_trait]
impl PriceSource for CsvVersion {
    fn signature(&self) -> &'static str {
        self.signature
    }

    async fn load_points(&self) -> Result<Vec<PricePoint>> {
        #[cfg(debug_assertions)]
        let start_time = PRINT_CSV_LOAD.then(|| {
            log::info!("Reading prices from: {:?}...", self.path);
            std::time::Instant::now()
        });

        let text = match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                log::info!("{} not found at {:?}, treating as empty", self.signature, self.path);
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(e).context(format!("Failed to read price file: {:?}", self.path));
            }
        };

        let (points, skipped) = parse_csv(&text, &self.layout);
        if skipped > 0 {
            log::debug!("{}: skipped {} unparseable rows", self.signature, skipped);
        }

        #[cfg(debug_assertions)]
        if let Some(start) = start_time {
            log::info!(
                "✅ {} loaded: {} rows ({} skipped) in {:.3}s",
                self.signature,
                points.len(),
                skipped,
                start.elapsed().as_secs_f64()
            );
        }

        Ok(points)
    }
}
