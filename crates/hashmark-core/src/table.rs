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

//! The in-memory table of parsed trial records.

use crate::error::Result;
use crate::parse::{parse_reader_with_config, ParseConfig};
use crate::record::TrialRecord;
use crate::view::DistributionView;
use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// A row that was skipped while parsing in lenient mode.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParseWarning {
    /// Data row number (1-based, header excluded).
    pub row: usize,
    /// Description of the problem.
    pub message: String,
}

/// Ordered collection of trial records.
///
/// Row order is the input order. Every other structure in this crate is a
/// read-only projection of a `RecordTable`.
///
/// # Examples
///
/// ```
/// use hashmark_core::RecordTable;
///
/// let csv = "\
/// Num_Keys,Distribution,Algorithm,Insert_Ops_Per_Sec,Lookup_Ops_Per_Sec,Memory_Usage_MB
/// 1000,uniform,Linear,10.0,20.0,5.0
/// 1000,gaussian,Linear,9.5,19.0,5.0
/// ";
/// let table = RecordTable::parse_str(csv).unwrap();
/// assert_eq!(table.len(), 2);
/// assert_eq!(table.distributions(), vec!["uniform", "gaussian"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RecordTable {
    records: Vec<TrialRecord>,
    warnings: Vec<ParseWarning>,
}

impl RecordTable {
    /// Creates a table from already validated records.
    pub fn new(records: Vec<TrialRecord>) -> Self {
        Self {
            records,
            warnings: Vec::new(),
        }
    }

    pub(crate) fn with_warnings(records: Vec<TrialRecord>, warnings: Vec<ParseWarning>) -> Self {
        Self { records, warnings }
    }

    /// Parses CSV text with the default (strict) configuration.
    pub fn parse_str(input: &str) -> Result<Self> {
        parse_reader_with_config(input.as_bytes(), ParseConfig::default())
    }

    /// Reads and parses a CSV file.
    pub fn from_path(path: impl AsRef<Path>, config: ParseConfig) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        parse_reader_with_config(BufReader::new(file), config)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the table holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns the record at `index`.
    pub fn get(&self, index: usize) -> Option<&TrialRecord> {
        self.records.get(index)
    }

    /// Iterates records in input order.
    pub fn iter(&self) -> std::slice::Iter<'_, TrialRecord> {
        self.records.iter()
    }

    /// Returns all records as a slice.
    pub fn records(&self) -> &[TrialRecord] {
        &self.records
    }

    /// Rows skipped by a lenient parse.
    pub fn warnings(&self) -> &[ParseWarning] {
        &self.warnings
    }

    /// Distinct distribution tags in first-seen order.
    pub fn distributions(&self) -> Vec<&str> {
        first_seen(self.records.iter().map(TrialRecord::distribution))
    }

    /// Distinct algorithm identifiers in first-seen order.
    pub fn algorithms(&self) -> Vec<&str> {
        first_seen(self.records.iter().map(TrialRecord::algorithm))
    }

    /// Returns the sub-table of records tagged with `distribution`.
    pub fn view(&self, distribution: &str) -> DistributionView<'_> {
        DistributionView::filter(self, distribution)
    }
}

impl<'a> IntoIterator for &'a RecordTable {
    type Item = &'a TrialRecord;
    type IntoIter = std::slice::Iter<'a, TrialRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}

impl FromIterator<TrialRecord> for RecordTable {
    fn from_iter<I: IntoIterator<Item = TrialRecord>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

pub(crate) fn first_seen<'a>(values: impl Iterator<Item = &'a str>) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    values.filter(|v| seen.insert(*v)).collect()
}
