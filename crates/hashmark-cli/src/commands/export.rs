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

//! Export command - full analysis bundle as JSON

use super::{load_table, read_file, to_json, write_output};
use crate::cli::InputArgs;
use crate::error::CliError;
use hashmark_core::{analyze, AnalysisConfig};
use tracing::info;

/// Run every analysis product and write the bundle as pretty JSON.
///
/// `config` names a JSON [`AnalysisConfig`]; omitted fields keep their
/// defaults.
///
/// # Errors
///
/// Returns `Err` if the input or config cannot be read or parsed, or if the
/// output cannot be written.
pub fn export(
    file: &str,
    input: &InputArgs,
    output: Option<&str>,
    config: Option<&str>,
) -> Result<(), CliError> {
    let config = match config {
        Some(path) => load_config(path)?,
        None => AnalysisConfig::default(),
    };
    let table = load_table(file, input)?;
    let bundle = analyze(&table, &config)?;

    let json = to_json(&bundle)?;
    write_output(&json, output)?;

    if let Some(path) = output {
        info!(
            path,
            trends = bundle.trends.len(),
            heatmaps = bundle.heatmaps.len(),
            gaps = bundle.gap_count(),
            "analysis exported"
        );
    }
    Ok(())
}

fn load_config(path: &str) -> Result<AnalysisConfig, CliError> {
    let content = read_file(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashmark_core::{Metric, SizeOrdering};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_partial_config_keeps_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"size_ordering": "canonical"}}"#).unwrap();

        let config = load_config(file.path().to_str().unwrap()).unwrap();
        assert_eq!(config.size_ordering, SizeOrdering::Canonical);
        assert_eq!(config.heatmap_metric, Metric::InsertOpsPerSec);
        assert_eq!(config.left_distribution, "uniform");
    }

    #[test]
    fn test_invalid_config_is_json_error() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = load_config(file.path().to_str().unwrap()).unwrap_err();
        assert!(matches!(err, CliError::Json(_)));
    }
}
