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

//! Fluent construction of result tables.

use crate::HEADER;
use hashmark_core::{RecordTable, TrialRecord};

/// One row queued in a [`TableBuilder`].
#[derive(Debug, Clone, PartialEq)]
struct Row {
    algorithm: String,
    distribution: String,
    num_keys: u64,
    insert: f64,
    lookup: f64,
    memory: f64,
}

/// Builder for result tables and their CSV text.
///
/// # Examples
///
/// ```
/// use hashmark_test::TableBuilder;
///
/// let builder = TableBuilder::new()
///     .trial("A", "uniform", 1000, 10.0, 20.0, 5.0)
///     .sweep("B", "gaussian", &[1000, 10_000], |keys| (1.0, 2.0, keys as f64 / 1000.0));
///
/// assert_eq!(builder.build().len(), 3);
/// assert!(builder.to_csv().starts_with("Num_Keys,"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct TableBuilder {
    rows: Vec<Row>,
}

impl TableBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds one trial.
    pub fn trial(
        mut self,
        algorithm: &str,
        distribution: &str,
        num_keys: u64,
        insert: f64,
        lookup: f64,
        memory: f64,
    ) -> Self {
        self.rows.push(Row {
            algorithm: algorithm.to_string(),
            distribution: distribution.to_string(),
            num_keys,
            insert,
            lookup,
            memory,
        });
        self
    }

    /// Adds one trial per key count, with metrics computed by `metrics`.
    pub fn sweep(
        mut self,
        algorithm: &str,
        distribution: &str,
        sizes: &[u64],
        metrics: impl Fn(u64) -> (f64, f64, f64),
    ) -> Self {
        for &keys in sizes {
            let (insert, lookup, memory) = metrics(keys);
            self = self.trial(algorithm, distribution, keys, insert, lookup, memory);
        }
        self
    }

    /// Number of queued rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Builds the table.
    ///
    /// # Panics
    ///
    /// Panics if a queued row violates the record invariants; use
    /// [`to_csv`](Self::to_csv) to exercise the parser's error paths instead.
    pub fn build(&self) -> RecordTable {
        self.rows
            .iter()
            .map(|r| {
                TrialRecord::new(
                    r.algorithm.as_str(),
                    r.distribution.as_str(),
                    r.num_keys,
                    r.insert,
                    r.lookup,
                    r.memory,
                )
                .expect("fixture row must be a valid trial")
            })
            .collect()
    }

    /// Renders the rows as CSV text with the canonical header.
    pub fn to_csv(&self) -> String {
        let mut out = String::from(HEADER);
        out.push('\n');
        for r in &self.rows {
            out.push_str(&format!(
                "{},{},{},{},{},{}\n",
                r.num_keys, r.distribution, r.algorithm, r.insert, r.lookup, r.memory
            ));
        }
        out
    }
}
