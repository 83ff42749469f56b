//! Structured record loading from delimited content files.
//!
//! Reads a comma-delimited file with a header row into a sequence of
//! `Record`s, dropping rows that lack any expected column. File-level
//! failures (missing file, unreadable or undecodable content) degrade to an
//! empty sequence plus a log entry; only `try_load` exposes them as errors.

use crate::error::{ContentError, Result};
use crate::models::{ContentKind, Record};
use csv::{ReaderBuilder, StringRecord, Trim};
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};
use tracing::{debug, error, warn};

const UTF8_BOM: char = '\u{feff}';

/// How a load attempt ended at the file level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LoadOutcome {
    /// File was parsed; individual rows may still have been skipped
    Loaded,
    FileMissing,
    FileUnreadable,
}

/// A data row dropped for lacking expected columns
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRow {
    /// 1-based line number in the source file
    pub line: u64,
    pub missing: Vec<String>,
}

/// Report of a single load call
#[derive(Debug, Clone, Serialize)]
pub struct LoadStats {
    pub path: PathBuf,
    pub outcome: LoadOutcome,

    /// Data rows encountered, excluding the header
    pub rows_read: usize,

    /// Rows returned to the caller
    pub rows_accepted: usize,

    pub skipped: Vec<SkippedRow>,

    /// Description of the file-level failure, if any
    pub error: Option<String>,

    #[serde(skip)]
    pub load_duration: Duration,
}

impl LoadStats {
    fn new(path: &Path, outcome: LoadOutcome) -> Self {
        Self {
            path: path.to_path_buf(),
            outcome,
            rows_read: 0,
            rows_accepted: 0,
            skipped: Vec::new(),
            error: None,
            load_duration: Duration::ZERO,
        }
    }

    pub fn rows_skipped(&self) -> usize {
        self.skipped.len()
    }

    pub fn is_loaded(&self) -> bool {
        self.outcome == LoadOutcome::Loaded
    }

    pub fn has_skipped_rows(&self) -> bool {
        !self.skipped.is_empty()
    }

    /// Get a summary string of the load
    pub fn summary(&self) -> String {
        match self.outcome {
            LoadOutcome::Loaded => format!(
                "Loaded {} of {} rows from {} ({} skipped) in {:.2}ms",
                self.rows_accepted,
                self.rows_read,
                self.path.display(),
                self.rows_skipped(),
                self.load_duration.as_secs_f64() * 1000.0
            ),
            LoadOutcome::FileMissing => format!("File not found: {}", self.path.display()),
            LoadOutcome::FileUnreadable => format!(
                "File unreadable: {} ({})",
                self.path.display(),
                self.error.as_deref().unwrap_or("unknown error")
            ),
        }
    }
}

/// Loader for one content file layout, defined by its required columns
#[derive(Debug, Clone)]
pub struct StructuredRecordLoader {
    expected_fields: Vec<String>,
}

impl StructuredRecordLoader {
    pub fn new<I, S>(expected_fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            expected_fields: expected_fields.into_iter().map(Into::into).collect(),
        }
    }

    /// Create a loader requiring the columns of a content kind
    pub fn for_kind(kind: ContentKind) -> Self {
        Self::new(kind.expected_fields().iter().copied())
    }

    pub fn expected_fields(&self) -> &[String] {
        &self.expected_fields
    }

    /// Load valid records from `path`, in file order
    ///
    /// Never fails: a missing file logs a warning, an unreadable file logs an
    /// error, and both yield an empty sequence.
    pub fn load(&self, path: &Path) -> Vec<Record> {
        self.load_with_stats(path).0
    }

    /// Load valid records along with a report of what happened
    pub fn load_with_stats(&self, path: &Path) -> (Vec<Record>, LoadStats) {
        let start_time = Instant::now();

        let (records, mut stats) = match self.try_load(path) {
            Ok(loaded) => loaded,
            Err(e) => {
                let outcome = match &e {
                    ContentError::FileMissing { .. } => {
                        warn!("{}, returning no records", e);
                        LoadOutcome::FileMissing
                    }
                    _ => {
                        error!("Error loading {}: {}", path.display(), e);
                        LoadOutcome::FileUnreadable
                    }
                };
                let mut stats = LoadStats::new(path, outcome);
                stats.error = Some(e.to_string());
                (Vec::new(), stats)
            }
        };

        stats.load_duration = start_time.elapsed();
        (records, stats)
    }

    /// Load records, surfacing file-level failures as typed errors
    ///
    /// Rows lacking expected columns are still dropped and recorded in the
    /// returned `LoadStats`; only the file-level variants are returned.
    pub fn try_load(&self, path: &Path) -> Result<(Vec<Record>, LoadStats)> {
        debug!("Loading content file: {}", path.display());

        if !path.exists() {
            return Err(ContentError::FileMissing {
                path: path.to_path_buf(),
            });
        }

        let unreadable = |source: csv::Error| ContentError::FileUnreadable {
            path: path.to_path_buf(),
            source,
        };

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(Trim::Headers)
            .from_path(path)
            .map_err(unreadable)?;

        let headers = normalize_headers(reader.headers().map_err(unreadable)?);

        let mut stats = LoadStats::new(path, LoadOutcome::Loaded);
        let mut records = Vec::new();
        let mut row = StringRecord::new();

        while reader.read_record(&mut row).map_err(unreadable)? {
            stats.rows_read += 1;
            // Header occupies line 1
            let line = row
                .position()
                .map(|pos| pos.line())
                .unwrap_or(stats.rows_read as u64 + 1);

            match self.build_record(path, line, &headers, &row) {
                Ok(record) => records.push(record),
                Err(ContentError::RowMissingField { line, missing, .. }) => {
                    warn!(
                        "Skipping row at line {} in {}: missing fields {}",
                        line,
                        path.display(),
                        missing.join(", ")
                    );
                    stats.skipped.push(SkippedRow { line, missing });
                }
                Err(e) => return Err(e),
            }
        }

        stats.rows_accepted = records.len();

        debug!(
            "Loaded {} records from {} ({} rows skipped)",
            stats.rows_accepted,
            path.display(),
            stats.rows_skipped()
        );

        Ok((records, stats))
    }

    /// Pair a data row with the header and check the expected columns
    fn build_record(
        &self,
        path: &Path,
        line: u64,
        headers: &[String],
        row: &StringRecord,
    ) -> Result<Record> {
        // Short rows stop at their last cell; extra cells have no name
        let record: Record = headers
            .iter()
            .zip(row.iter())
            .map(|(name, value)| (name.as_str(), value))
            .collect();

        let missing = record.missing_fields(&self.expected_fields);
        if !missing.is_empty() {
            return Err(ContentError::RowMissingField {
                path: path.to_path_buf(),
                line,
                missing: missing.into_iter().map(str::to_string).collect(),
            });
        }

        Ok(record)
    }
}

/// Load valid records from `path`, requiring every name in `expected_fields`
pub fn load(path: &Path, expected_fields: &[&str]) -> Vec<Record> {
    StructuredRecordLoader::new(expected_fields.iter().copied()).load(path)
}

fn normalize_headers(headers: &StringRecord) -> Vec<String> {
    headers
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let name = if index == 0 {
                name.trim_start_matches(UTF8_BOM)
            } else {
                name
            };
            name.trim().to_string()
        })
        .collect()
}
