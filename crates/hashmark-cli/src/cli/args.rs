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

//! Arguments shared by every command.

use crate::error::CliError;
use clap::{Args, ValueEnum};
use hashmark_core::{ParseConfig, ParseMode, DEFAULT_MAX_ROWS};

/// Input handling flags, accepted before or after the subcommand.
#[derive(Args, Debug, Clone)]
pub struct InputArgs {
    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Field delimiter of the input CSV
    #[arg(long, global = true, default_value_t = ',')]
    pub delimiter: char,

    /// Skip malformed rows with a warning instead of failing
    #[arg(long, global = true)]
    pub lenient: bool,

    /// Maximum number of data rows to accept
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_ROWS)]
    pub max_rows: usize,
}

impl Default for InputArgs {
    fn default() -> Self {
        Self {
            verbose: false,
            delimiter: ',',
            lenient: false,
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

impl InputArgs {
    /// Converts the flags into a parser configuration.
    ///
    /// # Errors
    ///
    /// Returns `CliError::InvalidInput` if the delimiter is not a single ASCII
    /// character.
    pub fn parse_config(&self) -> Result<ParseConfig, CliError> {
        if !self.delimiter.is_ascii() {
            return Err(CliError::InvalidInput(format!(
                "delimiter must be an ASCII character, got '{}'",
                self.delimiter
            )));
        }
        Ok(ParseConfig {
            delimiter: self.delimiter as u8,
            max_rows: self.max_rows,
            mode: if self.lenient {
                ParseMode::Lenient
            } else {
                ParseMode::Strict
            },
            ..ParseConfig::default()
        })
    }
}

/// Output format of data commands.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human-readable tables
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_flags_give_default_config() {
        let config = InputArgs::default().parse_config().unwrap();
        assert_eq!(config.delimiter, b',');
        assert_eq!(config.mode, ParseMode::Strict);
        assert_eq!(config.max_rows, DEFAULT_MAX_ROWS);
        assert!(config.trim);
    }

    #[test]
    fn test_lenient_and_delimiter() {
        let args = InputArgs {
            delimiter: ';',
            lenient: true,
            max_rows: 10,
            ..InputArgs::default()
        };
        let config = args.parse_config().unwrap();
        assert_eq!(config.delimiter, b';');
        assert_eq!(config.mode, ParseMode::Lenient);
        assert_eq!(config.max_rows, 10);
    }

    #[test]
    fn test_non_ascii_delimiter_rejected() {
        let args = InputArgs {
            delimiter: '§',
            ..InputArgs::default()
        };
        assert!(matches!(
            args.parse_config(),
            Err(CliError::InvalidInput(_))
        ));
    }
}
