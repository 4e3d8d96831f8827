//! Survey CSV Reader
//!
//! Reads a delimited survey listing into a validated `SurveyStations` store.
//! The first three columns are measured depth, inclination and azimuth;
//! anything after them (tool face, comments, vendor columns) is ignored.
//!
//! # Usage
//!
//! ```ignore
//! use wellpath::survey::csv_source::{load_survey_csv, SurveyCsvOptions};
//!
//! let stations = load_survey_csv("surveys.csv", &SurveyCsvOptions::default())?;
//! let trajectory = stations.trajectory(&params)?;
//! ```

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, info};

use super::{SurveyError, SurveyStations};
use crate::types::SurveyStation;

const COLUMN_NAMES: [&str; 3] = ["measured_depth", "inclination", "azimuth"];

// ============================================================================
// Errors
// ============================================================================

#[derive(Debug, Error)]
pub enum SurveyLoadError {
    #[error("Failed to read survey file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error while reading survey: {0}")]
    Read(#[from] std::io::Error),

    #[error("Line {line}: expected at least 3 columns, found {found}")]
    MissingColumns { line: usize, found: usize },

    #[error("Line {line}: cannot parse {column} value '{value}'")]
    Parse {
        line: usize,
        column: &'static str,
        value: String,
    },

    #[error(transparent)]
    Invalid(#[from] SurveyError),
}

// ============================================================================
// Options
// ============================================================================

/// How to interpret a survey file.
#[derive(Debug, Clone)]
pub struct SurveyCsvOptions {
    /// Skip the first non-blank line as a header row
    pub has_header: bool,
    /// Field separator
    pub delimiter: char,
}

impl Default for SurveyCsvOptions {
    fn default() -> Self {
        Self {
            has_header: true,
            delimiter: crate::config::defaults::SURVEY_DELIMITER,
        }
    }
}

// ============================================================================
// Splitting
// ============================================================================

/// Split a line on `delimiter`, respecting double-quoted fields.
fn split_fields(line: &str, delimiter: char) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    // "" inside quotes is a literal quote
                    if chars.peek() == Some(&'"') {
                        current.push('"');
                        chars.next();
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == delimiter && !in_quotes => {
                fields.push(std::mem::take(&mut current));
            }
            _ => current.push(ch),
        }
    }
    fields.push(current);
    fields
}

fn parse_value(raw: &str, line: usize, column: usize) -> Result<f64, SurveyLoadError> {
    raw.trim().parse::<f64>().map_err(|_| SurveyLoadError::Parse {
        line,
        column: COLUMN_NAMES[column],
        value: raw.trim().to_string(),
    })
}

fn parse_line(line: &str, line_no: usize, delimiter: char) -> Result<SurveyStation, SurveyLoadError> {
    let fields = split_fields(line, delimiter);
    if fields.len() < COLUMN_NAMES.len() {
        return Err(SurveyLoadError::MissingColumns {
            line: line_no,
            found: fields.len(),
        });
    }

    Ok(SurveyStation::new(
        parse_value(&fields[0], line_no, 0)?,
        parse_value(&fields[1], line_no, 1)?,
        parse_value(&fields[2], line_no, 2)?,
    ))
}

// ============================================================================
// Loading
// ============================================================================

/// Parse survey stations from any reader.
///
/// Blank lines and lines starting with `#` are skipped. The header, when
/// enabled, is the first line that is neither.
pub fn parse_survey_csv<R: Read>(
    reader: R,
    options: &SurveyCsvOptions,
) -> Result<SurveyStations, SurveyLoadError> {
    let mut stations = Vec::new();
    let mut header_pending = options.has_header;

    for (idx, line) in BufReader::new(reader).lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        if header_pending {
            header_pending = false;
            debug!(header = trimmed, "Skipping survey header");
            continue;
        }
        stations.push(parse_line(trimmed, idx + 1, options.delimiter)?);
    }

    Ok(SurveyStations::new(stations)?)
}

/// Open and parse a survey file.
pub fn load_survey_csv(
    path: impl AsRef<Path>,
    options: &SurveyCsvOptions,
) -> Result<SurveyStations, SurveyLoadError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| SurveyLoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let stations = parse_survey_csv(file, options)?;
    info!(
        path = %path.display(),
        stations = stations.len(),
        course_length = stations.total_course_length(),
        "Loaded survey"
    );
    Ok(stations)
}
