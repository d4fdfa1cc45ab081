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

//! CLI command definitions and argument parsing.
//!
//! Every command reads one benchmark results CSV, so the parsing flags live
//! in [`InputArgs`] and are shared through `execute`.

mod args;

use crate::commands;
use crate::error::CliError;
use clap::Subcommand;
use hashmark_core::{ExtremumMode, Metric, SizeOrdering};

pub use args::{InputArgs, OutputFormat};

/// Top-level CLI commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the best-performer summary
    ///
    /// Reports the fastest insert and lookup algorithm per distribution and
    /// the lowest memory usage over all trials.
    Summary {
        /// Benchmark results CSV
        #[arg(value_name = "FILE")]
        file: String,

        /// Output format (text, json)
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print one metric as a series per algorithm
    ///
    /// Points are ordered by key count; repeated trials are kept as separate
    /// points.
    Series {
        /// Benchmark results CSV
        #[arg(value_name = "FILE")]
        file: String,

        /// Distribution tag to select
        #[arg(short, long, default_value = "uniform")]
        distribution: String,

        /// Metric column or alias (insert, lookup, memory)
        #[arg(short, long, default_value = "insert")]
        metric: Metric,

        /// Output format (text, json)
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Print the algorithm by size label matrix of mean values
    Pivot {
        /// Benchmark results CSV
        #[arg(value_name = "FILE")]
        file: String,

        /// Distribution tag to select
        #[arg(short, long, default_value = "uniform")]
        distribution: String,

        /// Metric column or alias (insert, lookup, memory)
        #[arg(short, long, default_value = "insert")]
        metric: Metric,

        /// Column ordering (extended, canonical)
        #[arg(long, default_value = "extended")]
        ordering: SizeOrdering,

        /// Output format (text, json)
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Compare one metric across two distributions
    ///
    /// Trials are matched by key count. Unmatched trials are listed as
    /// completeness gaps after the comparison table.
    Compare {
        /// Benchmark results CSV
        #[arg(value_name = "FILE")]
        file: String,

        /// Metric column or alias (insert, lookup, memory)
        #[arg(short, long, default_value = "insert")]
        metric: Metric,

        /// Left-hand distribution
        #[arg(long, default_value = "uniform")]
        left: String,

        /// Right-hand distribution
        #[arg(long, default_value = "gaussian")]
        right: String,

        /// Output format (text, json)
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Find the trial with the highest or lowest metric value
    Extremum {
        /// Benchmark results CSV
        #[arg(value_name = "FILE")]
        file: String,

        /// Metric column or alias (insert, lookup, memory)
        #[arg(short, long)]
        metric: Metric,

        /// max or min (defaults to max for throughput, min for memory)
        #[arg(long)]
        mode: Option<ExtremumMode>,

        /// Restrict the search to one distribution
        #[arg(short, long)]
        distribution: Option<String>,

        /// Output format (text, json)
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },

    /// Export every analysis product as JSON
    ///
    /// Writes trends, heatmaps, comparisons and the summary in one document.
    Export {
        /// Benchmark results CSV
        #[arg(value_name = "FILE")]
        file: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// JSON analysis configuration
        #[arg(short, long, value_name = "CONFIG")]
        config: Option<String>,
    },
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the input cannot be read or parsed, if an extremum
    /// query has an empty scope, or if output cannot be written.
    pub fn execute(self, input: &InputArgs) -> Result<(), CliError> {
        match self {
            Commands::Summary { file, format } => commands::summary(&file, input, format),
            Commands::Series {
                file,
                distribution,
                metric,
                format,
            } => commands::series(&file, input, &distribution, metric, format),
            Commands::Pivot {
                file,
                distribution,
                metric,
                ordering,
                format,
            } => commands::pivot(&file, input, &distribution, metric, ordering, format),
            Commands::Compare {
                file,
                metric,
                left,
                right,
                format,
            } => commands::compare(&file, input, metric, &left, &right, format),
            Commands::Extremum {
                file,
                metric,
                mode,
                distribution,
                format,
            } => commands::extremum(
                &file,
                input,
                metric,
                mode.unwrap_or_else(|| metric.preferred_extremum()),
                distribution.as_deref(),
                format,
            ),
            Commands::Export {
                file,
                output,
                config,
            } => commands::export(&file, input, output.as_deref(), config.as_deref()),
        }
    }
}
