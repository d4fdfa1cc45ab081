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

//! Algorithm × size-label aggregate matrices (heatmap input).

use crate::error::{HashmarkError, Result};
use crate::record::Metric;
use crate::size_label::{is_canonical, label_magnitude, CANONICAL_SIZE_ORDER};
use crate::view::DistributionView;
use std::collections::HashMap;
use std::str::FromStr;
use tracing::warn;

/// How the size-label axis of a pivot matrix is ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum SizeOrdering {
    /// Every present label, ordered by the key count it stands for.
    ///
    /// For labels in [`CANONICAL_SIZE_ORDER`] this is exactly the canonical
    /// order; other labels (`"100M"`, `"500"`) slot in at their numeric place.
    #[default]
    Extended,
    /// Only labels from [`CANONICAL_SIZE_ORDER`], in that order.
    ///
    /// Columns for other labels are dropped and listed in
    /// [`PivotMatrix::dropped_labels`].
    Canonical,
}

impl SizeOrdering {
    pub fn as_str(&self) -> &'static str {
        match self {
            SizeOrdering::Extended => "extended",
            SizeOrdering::Canonical => "canonical",
        }
    }
}

impl FromStr for SizeOrdering {
    type Err = HashmarkError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "extended" => Ok(SizeOrdering::Extended),
            "canonical" => Ok(SizeOrdering::Canonical),
            other => Err(HashmarkError::UnknownSizeOrdering(other.to_string())),
        }
    }
}

/// One aggregated cell of a pivot matrix.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PivotCell {
    pub algorithm: String,
    pub size_label: String,
    /// Arithmetic mean of the metric over the contributing records.
    pub value: f64,
    /// Number of contributing records.
    pub samples: usize,
}

/// Mean of a metric per (algorithm, size label) pair.
///
/// Cells with no contributing records are absent, which renderers must keep
/// distinct from a zero value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PivotMatrix {
    metric: Metric,
    distribution: String,
    algorithms: Vec<String>,
    size_labels: Vec<String>,
    dropped_labels: Vec<String>,
    cells: Vec<PivotCell>,
    #[cfg_attr(feature = "serde", serde(skip))]
    index: HashMap<(usize, usize), usize>,
}

impl PivotMatrix {
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Distribution the matrix was built from.
    pub fn distribution(&self) -> &str {
        &self.distribution
    }

    /// Row axis: algorithms in first-seen order.
    pub fn algorithms(&self) -> &[String] {
        &self.algorithms
    }

    /// Column axis: size labels in the configured order.
    pub fn size_labels(&self) -> &[String] {
        &self.size_labels
    }

    /// Labels present in the data but excluded from the column axis.
    pub fn dropped_labels(&self) -> &[String] {
        &self.dropped_labels
    }

    /// Cells in row-major axis order.
    pub fn cells(&self) -> &[PivotCell] {
        &self.cells
    }

    /// Number of populated cells.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Returns true when the matrix has no populated cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    fn cell(&self, algorithm: &str, size_label: &str) -> Option<&PivotCell> {
        let row = self.algorithms.iter().position(|a| a == algorithm)?;
        let col = self.size_labels.iter().position(|l| l == size_label)?;
        self.index.get(&(row, col)).map(|&i| &self.cells[i])
    }

    /// Returns the mean for `(algorithm, size_label)`, or `None` if absent.
    pub fn get(&self, algorithm: &str, size_label: &str) -> Option<f64> {
        self.cell(algorithm, size_label).map(|c| c.value)
    }

    /// Returns how many records were averaged into a cell.
    pub fn sample_count(&self, algorithm: &str, size_label: &str) -> usize {
        self.cell(algorithm, size_label).map_or(0, |c| c.samples)
    }

    /// Dense grid in axis order; `None` marks an absent cell.
    pub fn rows(&self) -> Vec<Vec<Option<f64>>> {
        let mut grid = vec![vec![None; self.size_labels.len()]; self.algorithms.len()];
        for (&(row, col), &i) in &self.index {
            grid[row][col] = Some(self.cells[i].value);
        }
        grid
    }
}

#[derive(Default)]
struct Accumulator {
    sum: f64,
    count: usize,
}

/// Builds the pivot matrix of `metric` over a view with extended size ordering.
///
/// # Examples
///
/// ```
/// use hashmark_core::{build_pivot, Metric, RecordTable};
///
/// let table = RecordTable::parse_str("\
/// Num_Keys,Distribution,Algorithm,Insert_Ops_Per_Sec,Lookup_Ops_Per_Sec,Memory_Usage_MB
/// 1000,uniform,A,10.0,20.0,5.0
/// 1500,uniform,A,12.0,20.0,5.0
/// 1000000,uniform,A,9.0,19.0,50.0
/// ").unwrap();
///
/// let pivot = build_pivot(&table.view("uniform"), Metric::InsertOpsPerSec);
/// assert_eq!(pivot.size_labels(), ["1k", "1M"]);
/// assert_eq!(pivot.get("A", "1k"), Some(11.0));
/// assert_eq!(pivot.sample_count("A", "1k"), 2);
/// ```
pub fn build_pivot(view: &DistributionView<'_>, metric: Metric) -> PivotMatrix {
    build_pivot_with_ordering(view, metric, SizeOrdering::default())
}

/// Builds the pivot matrix of `metric` over a view.
///
/// Records are grouped by (algorithm, size label) and each group is reduced to
/// its arithmetic mean. The algorithm axis is in first-seen order; the label
/// axis follows `ordering`.
pub fn build_pivot_with_ordering(
    view: &DistributionView<'_>,
    metric: Metric,
    ordering: SizeOrdering,
) -> PivotMatrix {
    let algorithms = view.algorithms();
    let mut groups: HashMap<(&str, &str), Accumulator> = HashMap::new();
    let mut present: Vec<&str> = Vec::new();

    for record in view {
        let label = record.size_label();
        if !present.contains(&label) {
            present.push(label);
        }
        let acc = groups.entry((record.algorithm(), label)).or_default();
        acc.sum += record.metric(metric);
        acc.count += 1;
    }

    present.sort_by_key(|l| (label_magnitude(l).unwrap_or(u64::MAX), *l));
    let (size_labels, dropped_labels): (Vec<&str>, Vec<&str>) = match ordering {
        SizeOrdering::Extended => (present, Vec::new()),
        SizeOrdering::Canonical => {
            let kept: Vec<&str> = CANONICAL_SIZE_ORDER
                .iter()
                .copied()
                .filter(|l| present.contains(l))
                .collect();
            let dropped: Vec<&str> = present.into_iter().filter(|l| !is_canonical(l)).collect();
            (kept, dropped)
        }
    };

    if !dropped_labels.is_empty() {
        warn!(
            distribution = view.distribution(),
            metric = %metric,
            dropped = ?dropped_labels,
            "size labels outside the canonical order were dropped from the pivot"
        );
    }

    let mut cells = Vec::new();
    let mut index = HashMap::new();
    for (row, alg) in algorithms.iter().enumerate() {
        for (col, label) in size_labels.iter().enumerate() {
            if let Some(acc) = groups.get(&(*alg, *label)) {
                index.insert((row, col), cells.len());
                cells.push(PivotCell {
                    algorithm: alg.to_string(),
                    size_label: label.to_string(),
                    value: acc.sum / acc.count as f64,
                    samples: acc.count,
                });
            }
        }
    }

    PivotMatrix {
        metric,
        distribution: view.distribution().to_string(),
        algorithms: algorithms.iter().map(|a| a.to_string()).collect(),
        size_labels: size_labels.iter().map(|l| l.to_string()).collect(),
        dropped_labels: dropped_labels.iter().map(|l| l.to_string()).collect(),
        cells,
        index,
    }
}
