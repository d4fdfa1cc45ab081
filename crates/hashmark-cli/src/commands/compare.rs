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

//! Compare command - one metric across two distributions

use super::{load_table, to_json, write_output};
use crate::cli::{InputArgs, OutputFormat};
use crate::error::CliError;
use colored::Colorize;
use hashmark_core::{compare_distributions, DistributionComparison, Metric};

/// Print the aligned comparison of `metric` between `left` and `right`.
///
/// Completeness gaps are part of the output and do not fail the command.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or parsed.
pub fn compare(
    file: &str,
    input: &InputArgs,
    metric: Metric,
    left: &str,
    right: &str,
    format: OutputFormat,
) -> Result<(), CliError> {
    let table = load_table(file, input)?;
    let comparison = compare_distributions(&table.view(left), &table.view(right), metric);

    let output = match format {
        OutputFormat::Text => render(&comparison),
        OutputFormat::Json => to_json(&comparison)?,
    };
    write_output(&output, None)
}

fn render(comparison: &DistributionComparison) -> String {
    let mut out = format!(
        "{} ({}): {} vs {}\n",
        comparison.metric.column().bold(),
        comparison.metric.unit(),
        comparison.left,
        comparison.right
    );

    for entry in &comparison.algorithms {
        if entry.points.is_empty() {
            continue;
        }
        out.push('\n');
        out.push_str(&format!("{}\n", entry.algorithm.cyan().bold()));
        out.push_str(&format!(
            "  {:>6} {:>12} {:>12} {:>12} {:>12} {:>8}\n",
            "size", "keys", comparison.left, comparison.right, "delta", "ratio"
        ));
        for point in &entry.points {
            let ratio = point
                .ratio
                .map(|r| format!("{:.3}x", r))
                .unwrap_or_else(|| "-".to_string());
            out.push_str(&format!(
                "  {:>6} {:>12} {:>12.2} {:>12.2} {:>+12.2} {:>8}\n",
                point.size_label, point.num_keys, point.left, point.right, point.delta, ratio
            ));
        }
    }

    if !comparison.gaps.is_empty() {
        out.push('\n');
        out.push_str(&format!(
            "{} ({})\n",
            "Completeness gaps".yellow().bold(),
            comparison.gaps.len()
        ));
        for gap in &comparison.gaps {
            out.push_str(&format!("  {}\n", gap));
        }
    }
    out
}
