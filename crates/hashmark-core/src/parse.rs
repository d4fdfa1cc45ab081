// Dweve Hashmark - Hash Table Benchmark Analysis
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CSV parsing of benchmark result tables.

use crate::error::{HashmarkError, Result};
use crate::record::{
    TrialRecord, COL_ALGORITHM, COL_DISTRIBUTION, COL_INSERT, COL_LOOKUP, COL_MEMORY,
    COL_NUM_KEYS, REQUIRED_COLUMNS,
};
use crate::table::{ParseWarning, RecordTable};
use std::io::Read;
use tracing::{debug, warn};

/// Default maximum number of data rows accepted from one input.
pub const DEFAULT_MAX_ROWS: usize = 1_000_000;

/// How malformed rows are treated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ParseMode {
    /// Any malformed row aborts the parse.
    #[default]
    Strict,
    /// Malformed rows are skipped and reported through [`RecordTable::warnings`].
    Lenient,
}

/// Configuration for reading a result table.
///
/// # Examples
///
/// ```
/// use hashmark_core::{ParseConfig, ParseMode};
///
/// let config = ParseConfig::default();
/// assert_eq!(config.delimiter, b',');
/// assert!(config.trim);
/// assert_eq!(config.max_rows, 1_000_000);
/// assert_eq!(config.mode, ParseMode::Strict);
///
/// let tsv = ParseConfig {
///     delimiter: b'\t',
///     mode: ParseMode::Lenient,
///     ..Default::default()
/// };
/// # let _ = tsv;
/// ```
#[derive(Debug, Clone)]
pub struct ParseConfig {
    /// Field delimiter (default: `,`).
    pub delimiter: u8,
    /// Trim whitespace around headers and fields (default: `true`).
    pub trim: bool,
    /// Maximum number of data rows (default: [`DEFAULT_MAX_ROWS`]).
    ///
    /// Exceeding it is an error in both modes.
    pub max_rows: usize,
    /// Strict or lenient handling of malformed rows (default: strict).
    pub mode: ParseMode,
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            delimiter: b',',
            trim: true,
            max_rows: DEFAULT_MAX_ROWS,
            mode: ParseMode::Strict,
        }
    }
}

/// Parses CSV text with the default configuration.
pub fn parse_str(input: &str) -> Result<RecordTable> {
    parse_reader_with_config(input.as_bytes(), ParseConfig::default())
}

/// Parses CSV text with a custom configuration.
pub fn parse_str_with_config(input: &str, config: ParseConfig) -> Result<RecordTable> {
    parse_reader_with_config(input.as_bytes(), config)
}

/// Parses CSV from a reader with the default configuration.
pub fn parse_reader<R: Read>(reader: R) -> Result<RecordTable> {
    parse_reader_with_config(reader, ParseConfig::default())
}

/// Positions of the required columns within a header row.
struct ColumnIndex {
    num_keys: usize,
    distribution: usize,
    algorithm: usize,
    insert: usize,
    lookup: usize,
    memory: usize,
}

impl ColumnIndex {
    fn resolve(headers: &csv::StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| HashmarkError::MissingColumn(name.to_string()))
        };
        // Report the first missing column in canonical order.
        for name in REQUIRED_COLUMNS {
            find(name)?;
        }
        Ok(Self {
            num_keys: find(COL_NUM_KEYS)?,
            distribution: find(COL_DISTRIBUTION)?,
            algorithm: find(COL_ALGORITHM)?,
            insert: find(COL_INSERT)?,
            lookup: find(COL_LOOKUP)?,
            memory: find(COL_MEMORY)?,
        })
    }
}

/// Parses CSV from a reader.
///
/// The header row must name all required columns (exact, case-sensitive);
/// extra columns are ignored. Header problems and the row limit are hard
/// errors. Malformed data rows abort in [`ParseMode::Strict`] and are skipped
/// with a warning in [`ParseMode::Lenient`].
pub fn parse_reader_with_config<R: Read>(reader: R, config: ParseConfig) -> Result<RecordTable> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .delimiter(config.delimiter)
        .has_headers(true)
        .trim(if config.trim {
            csv::Trim::All
        } else {
            csv::Trim::None
        })
        .from_reader(reader);

    let headers = csv_reader.headers()?.clone();
    let columns = ColumnIndex::resolve(&headers)?;

    let mut records = Vec::new();
    let mut warnings = Vec::new();

    for (record_idx, result) in csv_reader.records().enumerate() {
        if record_idx >= config.max_rows {
            return Err(HashmarkError::RowLimitExceeded {
                limit: config.max_rows,
            });
        }
        let row = record_idx + 1;

        let parsed = result
            .map_err(HashmarkError::from)
            .and_then(|fields| parse_row(&fields, &columns, row));

        match parsed {
            Ok(record) => records.push(record),
            Err(HashmarkError::Csv(e)) if e.is_io_error() => return Err(HashmarkError::Csv(e)),
            Err(e) if config.mode == ParseMode::Lenient => {
                warn!(row, error = %e, "skipping malformed row");
                warnings.push(ParseWarning {
                    row,
                    message: e.to_string(),
                });
            }
            Err(e) => return Err(e),
        }
    }

    debug!(
        rows = records.len(),
        skipped = warnings.len(),
        "parsed benchmark result table"
    );
    Ok(RecordTable::with_warnings(records, warnings))
}

fn parse_row(fields: &csv::StringRecord, columns: &ColumnIndex, row: usize) -> Result<TrialRecord> {
    let field = |idx: usize, column: &str| -> Result<&str> {
        fields.get(idx).ok_or_else(|| HashmarkError::InvalidField {
            row,
            column: column.to_string(),
            value: String::new(),
            reason: "field missing".to_string(),
        })
    };

    let num_keys = parse_num_keys(field(columns.num_keys, COL_NUM_KEYS)?, row)?;
    let distribution = parse_tag(field(columns.distribution, COL_DISTRIBUTION)?, COL_DISTRIBUTION, row)?;
    let algorithm = parse_tag(field(columns.algorithm, COL_ALGORITHM)?, COL_ALGORITHM, row)?;
    let insert = parse_metric(field(columns.insert, COL_INSERT)?, COL_INSERT, row)?;
    let lookup = parse_metric(field(columns.lookup, COL_LOOKUP)?, COL_LOOKUP, row)?;
    let memory = parse_metric(field(columns.memory, COL_MEMORY)?, COL_MEMORY, row)?;

    TrialRecord::new(algorithm, distribution, num_keys, insert, lookup, memory)
        .map_err(|e| e.at_row(row))
}

fn parse_num_keys(raw: &str, row: usize) -> Result<u64> {
    let non_positive = || HashmarkError::NonPositiveKeyCount {
        row,
        value: raw.to_string(),
    };
    match raw.parse::<u64>() {
        Ok(0) => Err(non_positive()),
        Ok(n) => Ok(n),
        Err(_) if is_negative_integer(raw) => Err(non_positive()),
        Err(e) => Err(HashmarkError::InvalidField {
            row,
            column: COL_NUM_KEYS.to_string(),
            value: raw.to_string(),
            reason: e.to_string(),
        }),
    }
}

fn is_negative_integer(raw: &str) -> bool {
    raw.strip_prefix('-')
        .map_or(false, |d| !d.is_empty() && d.bytes().all(|b| b.is_ascii_digit()))
}

fn parse_tag<'r>(raw: &'r str, column: &str, row: usize) -> Result<&'r str> {
    if raw.is_empty() {
        return Err(HashmarkError::InvalidField {
            row,
            column: column.to_string(),
            value: String::new(),
            reason: "empty value".to_string(),
        });
    }
    Ok(raw)
}

fn parse_metric(raw: &str, column: &str, row: usize) -> Result<f64> {
    let value: f64 = raw.parse().map_err(|e: std::num::ParseFloatError| HashmarkError::InvalidField {
        row,
        column: column.to_string(),
        value: raw.to_string(),
        reason: e.to_string(),
    })?;
    if !value.is_finite() || value < 0.0 {
        return Err(HashmarkError::InvalidMetric {
            row,
            column: column.to_string(),
            value,
        });
    }
    Ok(value)
}
