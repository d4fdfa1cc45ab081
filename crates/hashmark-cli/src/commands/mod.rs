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

//! CLI command implementations

mod compare;
mod export;
mod extremum;
mod pivot;
mod series;
mod summary;

pub use compare::compare;
pub use export::export;
pub use extremum::extremum;
pub use pivot::pivot;
pub use series::series;
pub use summary::summary;

use crate::cli::InputArgs;
use crate::error::CliError;
use hashmark_core::{parse_str_with_config, RecordTable};
use serde::Serialize;
use std::fs;
use std::io::{self, Write};
use tracing::debug;

/// Default maximum input file size (256 MB).
/// Can be overridden via the HASHMARK_MAX_FILE_SIZE environment variable.
pub const DEFAULT_MAX_FILE_SIZE: u64 = 256 * 1024 * 1024;

fn get_max_file_size() -> u64 {
    std::env::var("HASHMARK_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a file from disk with size validation.
///
/// Files larger than the configured maximum are rejected before any bytes
/// are read.
///
/// # Errors
///
/// Returns `Err` if the metadata cannot be read, the file is too large, or
/// the content is not valid UTF-8.
pub fn read_file(path: &str) -> Result<String, CliError> {
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }

    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Write content to a file or stdout.
///
/// # Errors
///
/// Returns `Err` if the file or stdout cannot be written.
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("<stdout>", e)),
    }
}

/// Reads and parses a benchmark results file.
///
/// Rows skipped in lenient mode are logged by the parser at warn level.
pub fn load_table(path: &str, input: &InputArgs) -> Result<RecordTable, CliError> {
    let content = read_file(path)?;
    let table = parse_str_with_config(&content, input.parse_config()?)?;
    debug!(
        path,
        records = table.len(),
        skipped = table.warnings().len(),
        "loaded results"
    );
    Ok(table)
}

/// Serializes a value as pretty JSON followed by a newline.
pub(crate) fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, CliError> {
    let mut json = serde_json::to_string_pretty(value)?;
    json.push('\n');
    Ok(json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashmark_test::samples;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_file_missing() {
        let err = read_file("/nonexistent/results.csv").unwrap_err();
        assert!(matches!(err, CliError::Io { .. }));
    }

    #[test]
    fn test_load_table_from_disk() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(samples::RUNNER_OUTPUT_CSV.as_bytes()).unwrap();
        let path = file.path().to_str().unwrap();

        let table = load_table(path, &InputArgs::default()).unwrap();
        assert_eq!(table.len(), 13);
    }

    #[test]
    fn test_load_table_reports_parse_errors() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "Num_Keys,Distribution").unwrap();
        let path = file.path().to_str().unwrap();

        let err = load_table(path, &InputArgs::default()).unwrap_err();
        assert!(matches!(err, CliError::Analysis(_)));
    }

    #[test]
    fn test_to_json_ends_with_newline() {
        let json = to_json(&[1, 2, 3]).unwrap();
        assert!(json.ends_with("]\n"));
    }
}
