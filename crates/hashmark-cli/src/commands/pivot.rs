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

//! Pivot command - algorithm by size label matrix of mean values

use super::{load_table, to_json, write_output};
use crate::cli::{InputArgs, OutputFormat};
use crate::error::CliError;
use colored::Colorize;
use hashmark_core::{build_pivot_with_ordering, Metric, PivotMatrix, SizeOrdering};

const MIN_CELL_WIDTH: usize = 10;

/// Print the pivot of `metric` within `distribution`.
///
/// Labels dropped by the canonical ordering are logged at warn level.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or parsed.
pub fn pivot(
    file: &str,
    input: &InputArgs,
    distribution: &str,
    metric: Metric,
    ordering: SizeOrdering,
    format: OutputFormat,
) -> Result<(), CliError> {
    let table = load_table(file, input)?;
    let matrix = build_pivot_with_ordering(&table.view(distribution), metric, ordering);

    let output = match format {
        OutputFormat::Text => render(&matrix),
        OutputFormat::Json => to_json(&matrix)?,
    };
    write_output(&output, None)
}

/// Renders the matrix as an aligned table; absent cells are shown as `-`.
fn render(matrix: &PivotMatrix) -> String {
    let mut out = format!(
        "{} ({}) mean, distribution '{}'\n",
        matrix.metric().column().bold(),
        matrix.metric().unit(),
        matrix.distribution()
    );
    if matrix.is_empty() {
        out.push_str("  no records\n");
        return out;
    }

    let name_width = matrix
        .algorithms()
        .iter()
        .map(|a| a.len())
        .chain(std::iter::once("Algorithm".len()))
        .max()
        .unwrap_or(0);
    let cell_width = matrix
        .size_labels()
        .iter()
        .map(|l| l.len())
        .chain(std::iter::once(MIN_CELL_WIDTH))
        .max()
        .unwrap_or(MIN_CELL_WIDTH);

    out.push_str(&format!("{:<name_width$}", "Algorithm"));
    for label in matrix.size_labels() {
        out.push_str(&format!(" {:>cell_width$}", label));
    }
    out.push('\n');

    for (algorithm, row) in matrix.algorithms().iter().zip(matrix.rows()) {
        out.push_str(&format!("{:<name_width$}", algorithm));
        for cell in row {
            match cell {
                Some(value) => out.push_str(&format!(" {:>cell_width$.2}", value)),
                None => out.push_str(&format!(" {:>cell_width$}", "-")),
            }
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashmark_core::build_pivot;
    use hashmark_test::TableBuilder;

    #[test]
    fn test_render_marks_absent_cells() {
        colored::control::set_override(false);
        let table = TableBuilder::new()
            .trial("A", "uniform", 1_000, 10.0, 20.0, 5.0)
            .trial("B", "uniform", 1_000, 8.0, 18.0, 4.0)
            .trial("A", "uniform", 1_000_000, 9.0, 19.0, 50.0)
            .build();
        let matrix = build_pivot(&table.view("uniform"), Metric::InsertOpsPerSec);

        let text = render(&matrix);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].starts_with("Algorithm"));
        assert!(lines[1].find("1k").unwrap() < lines[1].find("1M").unwrap());
        assert!(lines[2].starts_with('A') && lines[2].contains("10.00") && lines[2].contains("9.00"));
        assert!(lines[3].starts_with('B') && lines[3].contains("8.00"));
        assert!(lines[3].trim_end().ends_with('-'));
    }

    #[test]
    fn test_rows_are_aligned() {
        colored::control::set_override(false);
        let table = TableBuilder::new()
            .trial("Short", "uniform", 1_000, 1.0, 1.0, 1.0)
            .trial("A much longer name", "uniform", 10_000, 123456.5, 1.0, 1.0)
            .build();
        let matrix = build_pivot(&table.view("uniform"), Metric::InsertOpsPerSec);

        let text = render(&matrix);
        let widths: Vec<usize> = text.lines().skip(1).map(|l| l.len()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
    }
}
