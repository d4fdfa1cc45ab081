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

//! Cross-distribution comparison of trend series.
//!
//! Points are paired by key count, not by position. Anything that cannot be
//! paired is reported as a [`CompletenessGap`] instead of being truncated.

use crate::record::Metric;
use crate::series::{build_series, SeriesPoint};
use crate::size_label::size_label;
use crate::view::DistributionView;
use std::fmt;
use tracing::warn;

/// What is missing on one side of a comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum GapKind {
    /// The algorithm has no trials at all in one distribution.
    MissingAlgorithm,
    /// A trial at some key count has no counterpart in the other distribution.
    MissingTrial,
}

/// A data-completeness gap between two distributions.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CompletenessGap {
    /// Algorithm affected.
    pub algorithm: String,
    /// Key count of the unmatched trial, `None` for a whole missing algorithm.
    pub num_keys: Option<u64>,
    /// Distribution that has the data.
    pub present_in: String,
    /// Distribution that lacks it.
    pub missing_from: String,
    /// Gap classification.
    pub kind: GapKind,
}

impl fmt::Display for CompletenessGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.num_keys {
            Some(keys) => write!(
                f,
                "{}: trial at {} keys present in '{}' but missing from '{}'",
                self.algorithm, keys, self.present_in, self.missing_from
            ),
            None => write!(
                f,
                "{}: present in '{}' but has no trials in '{}'",
                self.algorithm, self.present_in, self.missing_from
            ),
        }
    }
}

/// A pair of measurements of one algorithm at one key count.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ComparisonPoint {
    pub num_keys: u64,
    pub size_label: String,
    /// Value under the left distribution.
    pub left: f64,
    /// Value under the right distribution.
    pub right: f64,
    /// `right - left`.
    pub delta: f64,
    /// `right / left`, `None` when `left` is zero.
    pub ratio: Option<f64>,
}

impl ComparisonPoint {
    fn new(num_keys: u64, left: f64, right: f64) -> Self {
        Self {
            num_keys,
            size_label: size_label(num_keys),
            left,
            right,
            delta: right - left,
            ratio: if left == 0.0 { None } else { Some(right / left) },
        }
    }
}

/// Aligned points of one algorithm.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AlgorithmComparison {
    pub algorithm: String,
    /// Points in ascending key-count order.
    pub points: Vec<ComparisonPoint>,
}

/// Comparison of one metric between two distributions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DistributionComparison {
    pub metric: Metric,
    /// Left distribution tag.
    pub left: String,
    /// Right distribution tag.
    pub right: String,
    /// Algorithms with at least one aligned point.
    pub algorithms: Vec<AlgorithmComparison>,
    /// Everything that could not be aligned.
    pub gaps: Vec<CompletenessGap>,
}

impl DistributionComparison {
    /// Returns true when every trial found a counterpart.
    pub fn is_complete(&self) -> bool {
        self.gaps.is_empty()
    }

    /// Returns the aligned points of `algorithm`.
    pub fn get(&self, algorithm: &str) -> Option<&[ComparisonPoint]> {
        self.algorithms
            .iter()
            .find(|a| a.algorithm == algorithm)
            .map(|a| a.points.as_slice())
    }
}

/// Compares `metric` between two distribution views, algorithm by algorithm.
///
/// Algorithms are visited in first-seen order of `left`, followed by those
/// only present in `right`. Within an algorithm, trials are matched on equal
/// key count; duplicates at one key count are matched in row order. Unmatched
/// trials and algorithms missing from one side become gaps, each logged at
/// warn level.
pub fn compare_distributions(
    left: &DistributionView<'_>,
    right: &DistributionView<'_>,
    metric: Metric,
) -> DistributionComparison {
    let left_series = build_series(left, metric);
    let right_series = build_series(right, metric);

    let mut order: Vec<&str> = left_series.algorithms();
    for alg in right_series.algorithms() {
        if !order.contains(&alg) {
            order.push(alg);
        }
    }

    let mut comparison = DistributionComparison {
        metric,
        left: left.distribution().to_string(),
        right: right.distribution().to_string(),
        algorithms: Vec::new(),
        gaps: Vec::new(),
    };

    for alg in order {
        match (left_series.get(alg), right_series.get(alg)) {
            (Some(l), Some(r)) => {
                let points = align(alg, l, r, &comparison.left, &comparison.right, &mut comparison.gaps);
                if !points.is_empty() {
                    comparison.algorithms.push(AlgorithmComparison {
                        algorithm: alg.to_string(),
                        points,
                    });
                }
            }
            (Some(_), None) => comparison.gaps.push(CompletenessGap {
                algorithm: alg.to_string(),
                num_keys: None,
                present_in: comparison.left.clone(),
                missing_from: comparison.right.clone(),
                kind: GapKind::MissingAlgorithm,
            }),
            (None, Some(_)) => comparison.gaps.push(CompletenessGap {
                algorithm: alg.to_string(),
                num_keys: None,
                present_in: comparison.right.clone(),
                missing_from: comparison.left.clone(),
                kind: GapKind::MissingAlgorithm,
            }),
            (None, None) => {}
        }
    }

    for gap in &comparison.gaps {
        warn!(metric = %metric, "data completeness gap: {}", gap);
    }

    comparison
}

/// Merges two key-sorted point lists, pairing equal key counts.
fn align(
    algorithm: &str,
    l: &[SeriesPoint],
    r: &[SeriesPoint],
    left_tag: &str,
    right_tag: &str,
    gaps: &mut Vec<CompletenessGap>,
) -> Vec<ComparisonPoint> {
    let trial_gap = |keys: u64, present_in: &str, missing_from: &str| CompletenessGap {
        algorithm: algorithm.to_string(),
        num_keys: Some(keys),
        present_in: present_in.to_string(),
        missing_from: missing_from.to_string(),
        kind: GapKind::MissingTrial,
    };

    let mut points = Vec::with_capacity(l.len().min(r.len()));
    let (mut i, mut j) = (0, 0);
    while i < l.len() || j < r.len() {
        match (l.get(i), r.get(j)) {
            (Some(a), Some(b)) if a.x == b.x => {
                points.push(ComparisonPoint::new(a.x, a.y, b.y));
                i += 1;
                j += 1;
            }
            (Some(a), Some(b)) if a.x < b.x => {
                gaps.push(trial_gap(a.x, left_tag, right_tag));
                i += 1;
            }
            (Some(a), None) => {
                gaps.push(trial_gap(a.x, left_tag, right_tag));
                i += 1;
            }
            (_, Some(b)) => {
                gaps.push(trial_gap(b.x, right_tag, left_tag));
                j += 1;
            }
            (None, None) => break,
        }
    }
    points
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::TrialRecord;
    use crate::table::RecordTable;

    fn table(rows: &[(&str, &str, u64, f64)]) -> RecordTable {
        rows.iter()
            .map(|(a, d, k, v)| TrialRecord::new(*a, *d, *k, *v, 1.0, 1.0).unwrap())
            .collect()
    }

    #[test]
    fn test_complete_alignment() {
        let t = table(&[
            ("A", "uniform", 1000, 10.0),
            ("A", "uniform", 10_000, 8.0),
            ("A", "gaussian", 10_000, 6.0),
            ("A", "gaussian", 1000, 12.0),
        ]);
        let cmp = compare_distributions(&t.view("uniform"), &t.view("gaussian"), Metric::InsertOpsPerSec);
        assert!(cmp.is_complete());
        let points = cmp.get("A").unwrap();
        assert_eq!(points.len(), 2);
        assert_eq!(points[0].num_keys, 1000);
        assert_eq!(points[0].size_label, "1k");
        assert_eq!(points[0].delta, 2.0);
        assert_eq!(points[0].ratio, Some(1.2));
        assert_eq!(points[1].delta, -2.0);
    }

    #[test]
    fn test_missing_trial_is_not_mispaired() {
        // Positional pairing would match uniform@10k with gaussian@1M.
        let t = table(&[
            ("A", "uniform", 1000, 10.0),
            ("A", "uniform", 10_000, 8.0),
            ("A", "gaussian", 1000, 9.0),
            ("A", "gaussian", 1_000_000, 4.0),
        ]);
        let cmp = compare_distributions(&t.view("uniform"), &t.view("gaussian"), Metric::InsertOpsPerSec);
        let points = cmp.get("A").unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!(points[0].num_keys, 1000);

        assert_eq!(cmp.gaps.len(), 2);
        assert_eq!(cmp.gaps[0].num_keys, Some(10_000));
        assert_eq!(cmp.gaps[0].missing_from, "gaussian");
        assert_eq!(cmp.gaps[1].num_keys, Some(1_000_000));
        assert_eq!(cmp.gaps[1].missing_from, "uniform");
        assert!(cmp.gaps.iter().all(|g| g.kind == GapKind::MissingTrial));
    }

    #[test]
    fn test_missing_algorithm_both_directions() {
        let t = table(&[
            ("A", "uniform", 1000, 1.0),
            ("B", "uniform", 1000, 1.0),
            ("A", "gaussian", 1000, 1.0),
            ("C", "gaussian", 1000, 1.0),
        ]);
        let cmp = compare_distributions(&t.view("uniform"), &t.view("gaussian"), Metric::InsertOpsPerSec);
        assert_eq!(cmp.algorithms.len(), 1);
        assert_eq!(cmp.gaps.len(), 2);
        assert_eq!(cmp.gaps[0].algorithm, "B");
        assert_eq!(cmp.gaps[0].kind, GapKind::MissingAlgorithm);
        assert_eq!(cmp.gaps[0].num_keys, None);
        assert_eq!(cmp.gaps[1].algorithm, "C");
        assert_eq!(cmp.gaps[1].present_in, "gaussian");
        assert!(cmp.gaps[1].to_string().contains("no trials in 'uniform'"));
    }

    #[test]
    fn test_duplicates_pair_in_row_order() {
        let t = table(&[
            ("A", "uniform", 1000, 1.0),
            ("A", "uniform", 1000, 2.0),
            ("A", "gaussian", 1000, 3.0),
        ]);
        let cmp = compare_distributions(&t.view("uniform"), &t.view("gaussian"), Metric::InsertOpsPerSec);
        let points = cmp.get("A").unwrap();
        assert_eq!(points.len(), 1);
        assert_eq!((points[0].left, points[0].right), (1.0, 3.0));
        assert_eq!(cmp.gaps.len(), 1);
        assert_eq!(cmp.gaps[0].num_keys, Some(1000));
    }

    #[test]
    fn test_zero_left_has_no_ratio() {
        let t = table(&[("A", "uniform", 10, 0.0), ("A", "gaussian", 10, 1.0)]);
        let cmp = compare_distributions(&t.view("uniform"), &t.view("gaussian"), Metric::InsertOpsPerSec);
        assert_eq!(cmp.get("A").unwrap()[0].ratio, None);
    }

    #[test]
    fn test_both_empty() {
        let t = RecordTable::default();
        let cmp = compare_distributions(&t.view("uniform"), &t.view("gaussian"), Metric::LookupOpsPerSec);
        assert!(cmp.algorithms.is_empty());
        assert!(cmp.is_complete());
    }
}
