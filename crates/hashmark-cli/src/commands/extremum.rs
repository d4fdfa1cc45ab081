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

//! Extremum command - single best trial for a metric

use super::{load_table, to_json, write_output};
use crate::cli::{InputArgs, OutputFormat};
use crate::error::CliError;
use hashmark_core::{find_extremum, ExtremumMode, Metric};
use tracing::debug;

/// Print the trial with the highest or lowest `metric`.
///
/// Searches the whole table, or one distribution when `distribution` is set.
/// Ties resolve to the first trial in file order.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or parsed, or if the scope holds
/// no records.
pub fn extremum(
    file: &str,
    input: &InputArgs,
    metric: Metric,
    mode: ExtremumMode,
    distribution: Option<&str>,
    format: OutputFormat,
) -> Result<(), CliError> {
    let table = load_table(file, input)?;

    let found = match distribution {
        Some(tag) => find_extremum(&table.view(tag), metric, mode)?,
        None => find_extremum(&table, metric, mode)?,
    };
    debug!(position = found.position, mode = mode.as_str(), "extremum found");
    let best = found.to_best_performer(metric);

    let output = match format {
        OutputFormat::Text => format!("{}\n", best),
        OutputFormat::Json => to_json(&best)?,
    };
    write_output(&output, None)
}
