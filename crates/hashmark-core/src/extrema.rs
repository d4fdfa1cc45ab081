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

//! Best and worst performers of a metric.

use crate::error::{HashmarkError, Result};
use crate::record::{ExtremumMode, Metric, TrialRecord};
use crate::table::RecordTable;
use crate::view::DistributionView;
use std::fmt;

/// A set of records an extremum can be searched in.
///
/// Implemented for the whole table, for distribution views and for plain
/// record slices.
pub trait RecordScope<'a> {
    /// Iterator over the scope in scan order.
    type Iter: Iterator<Item = &'a TrialRecord>;

    /// Short description used in error messages.
    fn scope_name(&self) -> &str;

    /// Iterates the scope's records.
    fn scan(&self) -> Self::Iter;
}

impl<'a> RecordScope<'a> for &'a RecordTable {
    type Iter = std::slice::Iter<'a, TrialRecord>;

    fn scope_name(&self) -> &str {
        "all"
    }

    fn scan(&self) -> Self::Iter {
        self.iter()
    }
}

impl<'a, 'v> RecordScope<'a> for &'v DistributionView<'a> {
    type Iter = std::iter::Copied<std::slice::Iter<'v, &'a TrialRecord>>;

    fn scope_name(&self) -> &str {
        self.distribution()
    }

    fn scan(&self) -> Self::Iter {
        (*self).into_iter()
    }
}

impl<'a> RecordScope<'a> for &'a [TrialRecord] {
    type Iter = std::slice::Iter<'a, TrialRecord>;

    fn scope_name(&self) -> &str {
        "records"
    }

    fn scan(&self) -> Self::Iter {
        self.iter()
    }
}

/// The record achieving an extremum.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extremum<'a> {
    /// The winning record.
    pub record: &'a TrialRecord,
    /// Its metric value.
    pub value: f64,
    /// Position of the record in scan order.
    pub position: usize,
}

impl Extremum<'_> {
    /// Projects to an owned display row.
    pub fn to_best_performer(&self, metric: Metric) -> BestPerformer {
        BestPerformer {
            algorithm: self.record.algorithm().to_string(),
            num_keys: self.record.num_keys(),
            size_label: self.record.size_label().to_string(),
            value: self.value,
            unit: metric.unit().to_string(),
        }
    }
}

/// Owned projection of an extremum, ready for reporting.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BestPerformer {
    pub algorithm: String,
    pub num_keys: u64,
    pub size_label: String,
    pub value: f64,
    pub unit: String,
}

impl fmt::Display for BestPerformer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {:.2} {} @ {} keys",
            self.algorithm, self.value, self.unit, self.size_label
        )
    }
}

/// Finds the record with the largest or smallest `metric` in a scope.
///
/// Single linear scan; a record only replaces the current best when it is
/// strictly better, so the first record with the extremal value wins ties.
///
/// # Errors
///
/// Returns [`HashmarkError::EmptyScope`] when the scope has no records.
///
/// # Examples
///
/// ```
/// use hashmark_core::{find_extremum, ExtremumMode, Metric, RecordTable};
///
/// let table = RecordTable::parse_str("\
/// Num_Keys,Distribution,Algorithm,Insert_Ops_Per_Sec,Lookup_Ops_Per_Sec,Memory_Usage_MB
/// 1000,uniform,A,10.0,20.0,5.0
/// 1000,uniform,B,8.0,18.0,4.0
/// 1000000,uniform,A,9.0,19.0,50.0
/// ").unwrap();
///
/// let view = table.view("uniform");
/// let best = find_extremum(&view, Metric::MemoryUsageMb, ExtremumMode::Min).unwrap();
/// assert_eq!(best.record.algorithm(), "B");
/// assert_eq!(best.value, 4.0);
///
/// assert!(find_extremum(&table.view("gaussian"), Metric::MemoryUsageMb, ExtremumMode::Min).is_err());
/// ```
pub fn find_extremum<'a, S>(scope: S, metric: Metric, mode: ExtremumMode) -> Result<Extremum<'a>>
where
    S: RecordScope<'a>,
{
    let mut best: Option<Extremum<'a>> = None;

    for (position, record) in scope.scan().enumerate() {
        let value = record.metric(metric);
        let better = match &best {
            None => true,
            Some(current) => mode.improves(value, current.value),
        };
        if better {
            best = Some(Extremum {
                record,
                value,
                position,
            });
        }
    }

    best.ok_or_else(|| HashmarkError::EmptyScope {
        scope: scope.scope_name().to_string(),
        metric: metric.column().to_string(),
    })
}
