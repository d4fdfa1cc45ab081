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

//! Hashmark Command Line Interface

use clap::Parser;
use hashmark_cli::cli::{Commands, InputArgs};
use std::io::IsTerminal;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Hashmark - hash table benchmark analysis
///
/// Aggregates benchmark result tables into series, pivots, cross-distribution
/// comparisons and best-performer summaries.
///
/// # Examples
///
/// ```bash
/// # Best performers
/// hashmark summary results.csv
///
/// # Insert throughput matrix for gaussian keys
/// hashmark pivot results.csv --distribution gaussian --metric insert
///
/// # Everything as JSON
/// hashmark export results.csv -o analysis.json
/// ```
#[derive(Parser)]
#[command(name = "hashmark")]
#[command(author, version, about = "Hashmark - hash table benchmark analysis", long_about = None)]
struct Cli {
    #[command(flatten)]
    input: InputArgs,

    #[command(subcommand)]
    command: Commands,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "hashmark=debug" } else { "hashmark=info" };
    let mut filter = EnvFilter::from_default_env();
    if let Ok(directive) = default.parse() {
        filter = filter.add_directive(directive);
    }

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.input.verbose);

    match cli.command.execute(&cli.input) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
