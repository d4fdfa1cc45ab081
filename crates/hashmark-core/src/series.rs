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

//! Trend series per algorithm.

use crate::record::Metric;
use crate::view::DistributionView;
use std::collections::HashMap;

/// One point of a trend line: key count against a metric value.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SeriesPoint {
    /// Key count (x axis).
    pub x: u64,
    /// Metric value (y axis).
    pub y: f64,
}

/// The trend line of one algorithm.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AlgorithmSeries {
    /// Algorithm identifier.
    pub algorithm: String,
    /// Points by ascending key count.
    pub points: Vec<SeriesPoint>,
}

/// Trend series for every algorithm of a view, in first-seen algorithm order.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct SeriesSet {
    series: Vec<AlgorithmSeries>,
}

impl SeriesSet {
    /// Returns the points of `algorithm`, if present.
    pub fn get(&self, algorithm: &str) -> Option<&[SeriesPoint]> {
        self.series
            .iter()
            .find(|s| s.algorithm == algorithm)
            .map(|s| s.points.as_slice())
    }

    /// Algorithms in series order.
    pub fn algorithms(&self) -> Vec<&str> {
        self.series.iter().map(|s| s.algorithm.as_str()).collect()
    }

    /// Number of series.
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Returns true when there are no series.
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Total number of points across all series.
    pub fn point_count(&self) -> usize {
        self.series.iter().map(|s| s.points.len()).sum()
    }

    /// Iterates series in order.
    pub fn iter(&self) -> std::slice::Iter<'_, AlgorithmSeries> {
        self.series.iter()
    }
}

impl<'s> IntoIterator for &'s SeriesSet {
    type Item = &'s AlgorithmSeries;
    type IntoIter = std::slice::Iter<'s, AlgorithmSeries>;

    fn into_iter(self) -> Self::IntoIter {
        self.series.iter()
    }
}

/// Builds one trend series per algorithm from a distribution view.
///
/// Algorithms appear in first-seen order. Within a series points are sorted
/// by ascending key count; the sort is stable, so duplicate trials at the same
/// key count stay separate points in row order. No averaging happens here.
///
/// An empty view yields an empty set.
///
/// # Examples
///
/// ```
/// use hashmark_core::{build_series, Metric, RecordTable};
///
/// let table = RecordTable::parse_str("\
/// Num_Keys,Distribution,Algorithm,Insert_Ops_Per_Sec,Lookup_Ops_Per_Sec,Memory_Usage_MB
/// 10000,uniform,A,8.0,20.0,5.0
/// 1000,uniform,A,10.0,20.0,1.0
/// ").unwrap();
///
/// let series = build_series(&table.view("uniform"), Metric::InsertOpsPerSec);
/// let xs: Vec<u64> = series.get("A").unwrap().iter().map(|p| p.x).collect();
/// assert_eq!(xs, vec![1000, 10000]);
/// ```
pub fn build_series(view: &DistributionView<'_>, metric: Metric) -> SeriesSet {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut series: Vec<AlgorithmSeries> = Vec::new();

    for record in view {
        let slot = *index.entry(record.algorithm()).or_insert_with(|| {
            series.push(AlgorithmSeries {
                algorithm: record.algorithm().to_string(),
                points: Vec::new(),
            });
            series.len() - 1
        });
        series[slot].points.push(SeriesPoint {
            x: record.num_keys(),
            y: record.metric(metric),
        });
    }

    for s in &mut series {
        s.points.sort_by_key(|p| p.x);
    }

    SeriesSet { series }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::TrialRecord;
    use crate::table::RecordTable;

    fn table(rows: &[(&str, u64, f64)]) -> RecordTable {
        rows.iter()
            .map(|(a, k, v)| TrialRecord::new(*a, "uniform", *k, *v, *v * 2.0, 1.0).unwrap())
            .collect()
    }

    #[test]
    fn test_group_order_is_first_seen() {
        let t = table(&[("B", 1000, 1.0), ("A", 1000, 2.0), ("B", 10, 3.0)]);
        let series = build_series(&t.view("uniform"), Metric::InsertOpsPerSec);
        assert_eq!(series.algorithms(), vec!["B", "A"]);
        assert_eq!(series.len(), 2);
    }

    #[test]
    fn test_points_sorted_by_key_count() {
        let t = table(&[("A", 1_000_000, 1.0), ("A", 1000, 2.0), ("A", 10_000, 3.0)]);
        let series = build_series(&t.view("uniform"), Metric::LookupOpsPerSec);
        let points = series.get("A").unwrap();
        assert_eq!(
            points,
            &[
                SeriesPoint { x: 1000, y: 4.0 },
                SeriesPoint { x: 10_000, y: 6.0 },
                SeriesPoint { x: 1_000_000, y: 2.0 },
            ]
        );
    }

    #[test]
    fn test_duplicate_trials_kept_in_row_order() {
        let t = table(&[("A", 1000, 5.0), ("A", 10, 1.0), ("A", 1000, 7.0), ("A", 1000, 6.0)]);
        let series = build_series(&t.view("uniform"), Metric::InsertOpsPerSec);
        let ys: Vec<f64> = series.get("A").unwrap().iter().map(|p| p.y).collect();
        assert_eq!(ys, vec![1.0, 5.0, 7.0, 6.0]);
        assert_eq!(series.point_count(), 4);
    }

    #[test]
    fn test_empty_view() {
        let t = table(&[("A", 1000, 5.0)]);
        let series = build_series(&t.view("gaussian"), Metric::InsertOpsPerSec);
        assert!(series.is_empty());
        assert_eq!(series.point_count(), 0);
        assert!(series.get("A").is_none());
    }
}
