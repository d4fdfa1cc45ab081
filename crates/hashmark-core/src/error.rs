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

//! Error types for parsing and aggregating benchmark results.

use thiserror::Error;

/// Result type for hashmark operations.
pub type Result<T> = std::result::Result<T, HashmarkError>;

/// Errors produced while loading or querying a [`RecordTable`](crate::RecordTable).
///
/// Malformed input (see [`HashmarkError::is_malformed_input`]) aborts a strict
/// parse. [`HashmarkError::EmptyScope`] is returned by extremum queries over
/// zero records; series and pivot builders return empty results instead.
///
/// # Examples
///
/// ```
/// use hashmark_core::HashmarkError;
///
/// let err = HashmarkError::MissingColumn("Num_Keys".to_string());
/// assert_eq!(err.to_string(), "Missing required column: Num_Keys");
/// assert!(err.is_malformed_input());
/// ```
#[derive(Debug, Error)]
pub enum HashmarkError {
    /// A required column is absent from the header row.
    #[error("Missing required column: {0}")]
    MissingColumn(String),

    /// A field could not be parsed into its expected type.
    #[error("Invalid value in row {row}, column '{column}': '{value}' ({reason})")]
    InvalidField {
        /// Data row number (1-based, header excluded).
        row: usize,
        /// Column name.
        column: String,
        /// Raw field text.
        value: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// `Num_Keys` parsed but was zero.
    #[error("Non-positive key count in row {row}: {value}")]
    NonPositiveKeyCount {
        /// Data row number (1-based, header excluded).
        row: usize,
        /// Raw field text.
        value: String,
    },

    /// A metric was NaN, infinite or negative.
    #[error("Invalid metric in row {row}, column '{column}': {value} (must be finite and non-negative)")]
    InvalidMetric {
        /// Data row number (1-based, header excluded), 0 when built in code.
        row: usize,
        /// Metric column name.
        column: String,
        /// Offending value.
        value: f64,
    },

    /// The input has more data rows than the configured limit.
    #[error("Row limit exceeded: input has more than {limit} rows")]
    RowLimitExceeded {
        /// Configured maximum.
        limit: usize,
    },

    /// Error from the underlying CSV reader.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error while reading the input.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Extremum requested over zero records.
    #[error("No records in scope '{scope}' to compute an extremum of {metric}")]
    EmptyScope {
        /// Scope description (a distribution tag or "all").
        scope: String,
        /// Metric column name.
        metric: String,
    },

    /// Metric name not recognised.
    #[error("Unknown metric: '{0}'")]
    UnknownMetric(String),

    /// Extremum mode not recognised.
    #[error("Unknown extremum mode: '{0}' (expected 'max' or 'min')")]
    UnknownExtremumMode(String),

    /// Size ordering policy not recognised.
    #[error("Unknown size ordering: '{0}' (expected 'extended' or 'canonical')")]
    UnknownSizeOrdering(String),
}

impl HashmarkError {
    /// Returns true for the errors that make up a malformed-input condition.
    pub fn is_malformed_input(&self) -> bool {
        matches!(
            self,
            HashmarkError::MissingColumn(_)
                | HashmarkError::InvalidField { .. }
                | HashmarkError::NonPositiveKeyCount { .. }
                | HashmarkError::InvalidMetric { .. }
                | HashmarkError::RowLimitExceeded { .. }
                | HashmarkError::Csv(_)
        )
    }

    /// Returns the 1-based data row an error refers to, if any.
    pub fn row(&self) -> Option<usize> {
        match self {
            HashmarkError::InvalidField { row, .. }
            | HashmarkError::NonPositiveKeyCount { row, .. }
            | HashmarkError::InvalidMetric { row, .. } => Some(*row),
            _ => None,
        }
    }

    /// Returns a copy of this error tagged with a data row number.
    pub(crate) fn at_row(self, row: usize) -> Self {
        match self {
            HashmarkError::InvalidMetric { column, value, .. } => {
                HashmarkError::InvalidMetric { row, column, value }
            }
            other => other,
        }
    }
}
