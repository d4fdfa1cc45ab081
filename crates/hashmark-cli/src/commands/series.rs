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

//! Series command - one metric against key count, per algorithm

use super::{load_table, to_json, write_output};
use crate::cli::{InputArgs, OutputFormat};
use crate::error::CliError;
use colored::Colorize;
use hashmark_core::{build_series, size_label, Metric, SeriesSet};

/// Print the series of `metric` for every algorithm in `distribution`.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or parsed.
pub fn series(
    file: &str,
    input: &InputArgs,
    distribution: &str,
    metric: Metric,
    format: OutputFormat,
) -> Result<(), CliError> {
    let table = load_table(file, input)?;
    let set = build_series(&table.view(distribution), metric);

    let output = match format {
        OutputFormat::Text => render(&set, distribution, metric),
        OutputFormat::Json => to_json(&set)?,
    };
    write_output(&output, None)
}

fn render(set: &SeriesSet, distribution: &str, metric: Metric) -> String {
    let mut out = format!(
        "{} ({}) vs Num_Keys, distribution '{}'\n",
        metric.column().bold(),
        metric.unit(),
        distribution
    );
    if set.is_empty() {
        out.push_str("  no records\n");
        return out;
    }

    for entry in set {
        out.push('\n');
        out.push_str(&format!("{}\n", entry.algorithm.cyan().bold()));
        for point in &entry.points {
            out.push_str(&format!(
                "  {:>6} {:>12} {:>14.2}\n",
                size_label(point.x),
                point.x,
                point.y
            ));
        }
    }
    out
}
