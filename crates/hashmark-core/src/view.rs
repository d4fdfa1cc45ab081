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

//! Per-distribution sub-tables.

use crate::record::TrialRecord;
use crate::table::{first_seen, RecordTable};

/// The records of a [`RecordTable`] that share one distribution tag.
///
/// Relative order is preserved. A tag with no matching records gives an
/// empty view, never an error.
#[derive(Debug, Clone)]
pub struct DistributionView<'a> {
    distribution: String,
    records: Vec<&'a TrialRecord>,
}

impl<'a> DistributionView<'a> {
    /// Selects the records of `table` tagged with `distribution`.
    pub fn filter(table: &'a RecordTable, distribution: &str) -> Self {
        let records = table
            .iter()
            .filter(|r| r.distribution() == distribution)
            .collect();
        Self {
            distribution: distribution.to_string(),
            records,
        }
    }

    /// The distribution tag this view was built for.
    pub fn distribution(&self) -> &str {
        &self.distribution
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Iterates the view's records in table order.
    pub fn iter(&self) -> impl Iterator<Item = &'a TrialRecord> + '_ {
        self.records.iter().copied()
    }

    /// Distinct algorithms in first-seen order within the view.
    pub fn algorithms(&self) -> Vec<&'a str> {
        first_seen(self.records.iter().map(|&r| r.algorithm()))
    }
}

impl<'a, 'v> IntoIterator for &'v DistributionView<'a> {
    type Item = &'a TrialRecord;
    type IntoIter = std::iter::Copied<std::slice::Iter<'v, &'a TrialRecord>>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter().copied()
    }
}
