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

//! Summary command - best performer per metric and distribution

use super::{load_table, to_json, write_output};
use crate::cli::{InputArgs, OutputFormat};
use crate::error::CliError;
use hashmark_core::{AnalysisConfig, SummaryReport};

/// Print the five-entry best-performer report.
///
/// Entries whose scope holds no records are reported as missing rather than
/// failing the command.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or parsed.
pub fn summary(file: &str, input: &InputArgs, format: OutputFormat) -> Result<(), CliError> {
    let table = load_table(file, input)?;
    let report = SummaryReport::build(&table, &AnalysisConfig::default())?;

    let output = match format {
        OutputFormat::Text => format!("{}\n", report),
        OutputFormat::Json => to_json(&report)?,
    };
    write_output(&output, None)
}
