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

//! The full set of data products for one result table.
//!
//! Renderers consume an [`AnalysisBundle`]: trend series for every metric in
//! both distributions, insert heatmaps, uniform-vs-gaussian comparisons and
//! the best-performer summary.

use crate::compare::{compare_distributions, DistributionComparison};
use crate::error::Result;
use crate::pivot::{build_pivot_with_ordering, PivotMatrix, SizeOrdering};
use crate::record::Metric;
use crate::series::{build_series, SeriesSet};
use crate::summary::SummaryReport;
use crate::table::{ParseWarning, RecordTable};
use tracing::debug;

/// Settings for [`analyze`].
///
/// # Examples
///
/// ```
/// use hashmark_core::{AnalysisConfig, Metric, SizeOrdering};
///
/// let config = AnalysisConfig::default();
/// assert_eq!(config.left_distribution, "uniform");
/// assert_eq!(config.right_distribution, "gaussian");
/// assert_eq!(config.heatmap_metric, Metric::InsertOpsPerSec);
/// assert_eq!(config.size_ordering, SizeOrdering::Extended);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct AnalysisConfig {
    /// First distribution of every pairwise product.
    pub left_distribution: String,
    /// Second distribution of every pairwise product.
    pub right_distribution: String,
    /// Metric aggregated into heatmaps.
    pub heatmap_metric: Metric,
    /// Column ordering of heatmaps.
    pub size_ordering: SizeOrdering,
    /// Metrics compared across the two distributions.
    pub comparison_metrics: Vec<Metric>,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            left_distribution: "uniform".to_string(),
            right_distribution: "gaussian".to_string(),
            heatmap_metric: Metric::InsertOpsPerSec,
            size_ordering: SizeOrdering::Extended,
            comparison_metrics: vec![Metric::InsertOpsPerSec, Metric::LookupOpsPerSec],
        }
    }
}

impl AnalysisConfig {
    fn distributions(&self) -> [&str; 2] {
        [self.left_distribution.as_str(), self.right_distribution.as_str()]
    }
}

/// Trend chart input: series of one metric within one distribution.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TrendChart {
    pub distribution: String,
    pub metric: Metric,
    pub series: SeriesSet,
}

/// Every data product derived from a table.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AnalysisBundle {
    /// Number of records analysed.
    pub record_count: usize,
    /// Distribution tags in first-seen order.
    pub distributions: Vec<String>,
    /// Algorithms in first-seen order.
    pub algorithms: Vec<String>,
    /// Rows skipped by a lenient parse.
    pub skipped_rows: Vec<ParseWarning>,
    pub trends: Vec<TrendChart>,
    pub heatmaps: Vec<PivotMatrix>,
    pub comparisons: Vec<DistributionComparison>,
    pub summary: SummaryReport,
}

impl AnalysisBundle {
    /// Returns the trend chart for a distribution and metric.
    pub fn trend(&self, distribution: &str, metric: Metric) -> Option<&TrendChart> {
        self.trends
            .iter()
            .find(|t| t.distribution == distribution && t.metric == metric)
    }

    /// Returns the heatmap of a distribution.
    pub fn heatmap(&self, distribution: &str) -> Option<&PivotMatrix> {
        self.heatmaps.iter().find(|h| h.distribution() == distribution)
    }

    /// Returns the comparison of a metric.
    pub fn comparison(&self, metric: Metric) -> Option<&DistributionComparison> {
        self.comparisons.iter().find(|c| c.metric == metric)
    }

    /// Total number of completeness gaps across all comparisons.
    pub fn gap_count(&self) -> usize {
        self.comparisons.iter().map(|c| c.gaps.len()).sum()
    }
}

/// Derives every chart input and the summary report from `table`.
///
/// # Errors
///
/// Propagates summary query errors other than an empty scope.
pub fn analyze(table: &RecordTable, config: &AnalysisConfig) -> Result<AnalysisBundle> {
    let views = config.distributions().map(|d| table.view(d));

    let trends = views
        .iter()
        .flat_map(|view| {
            Metric::ALL.into_iter().map(move |metric| TrendChart {
                distribution: view.distribution().to_string(),
                metric,
                series: build_series(view, metric),
            })
        })
        .collect();

    let heatmaps = views
        .iter()
        .map(|view| build_pivot_with_ordering(view, config.heatmap_metric, config.size_ordering))
        .collect();

    let [left, right] = &views;
    let comparisons = config
        .comparison_metrics
        .iter()
        .map(|&metric| compare_distributions(left, right, metric))
        .collect();

    let bundle = AnalysisBundle {
        record_count: table.len(),
        distributions: table.distributions().into_iter().map(String::from).collect(),
        algorithms: table.algorithms().into_iter().map(String::from).collect(),
        skipped_rows: table.warnings().to_vec(),
        trends,
        heatmaps,
        comparisons,
        summary: SummaryReport::build(table, config)?,
    };

    debug!(
        records = bundle.record_count,
        trends = bundle.trends.len(),
        heatmaps = bundle.heatmaps.len(),
        gaps = bundle.gap_count(),
        "analysis complete"
    );
    Ok(bundle)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::TrialRecord;

    fn table() -> RecordTable {
        let mut rows = Vec::new();
        for (dist, factor) in [("uniform", 1.0), ("gaussian", 0.9)] {
            for alg in ["Linear", "Cuckoo"] {
                for keys in [1000, 10_000, 1_000_000] {
                    rows.push(
                        TrialRecord::new(alg, dist, keys, 10.0 * factor, 20.0 * factor, keys as f64 / 1000.0)
                            .unwrap(),
                    );
                }
            }
        }
        rows.into_iter().collect()
    }

    #[test]
    fn test_bundle_shape() {
        let bundle = analyze(&table(), &AnalysisConfig::default()).unwrap();
        assert_eq!(bundle.record_count, 12);
        assert_eq!(bundle.trends.len(), 6);
        assert_eq!(bundle.heatmaps.len(), 2);
        assert_eq!(bundle.comparisons.len(), 2);
        assert_eq!(bundle.summary.entries.len(), 5);
        assert_eq!(bundle.gap_count(), 0);
        assert_eq!(bundle.algorithms, vec!["Linear", "Cuckoo"]);
    }

    #[test]
    fn test_lookup_helpers() {
        let bundle = analyze(&table(), &AnalysisConfig::default()).unwrap();
        let trend = bundle.trend("gaussian", Metric::MemoryUsageMb).unwrap();
        assert_eq!(trend.series.point_count(), 6);

        let heatmap = bundle.heatmap("uniform").unwrap();
        assert_eq!(heatmap.size_labels(), ["1k", "10k", "1M"]);
        assert_eq!(heatmap.get("Cuckoo", "10k"), Some(10.0));

        let cmp = bundle.comparison(Metric::LookupOpsPerSec).unwrap();
        assert_eq!(cmp.get("Linear").unwrap().len(), 3);
        assert!(bundle.comparison(Metric::MemoryUsageMb).is_none());
    }

    #[test]
    fn test_custom_config() {
        let config = AnalysisConfig {
            heatmap_metric: Metric::MemoryUsageMb,
            comparison_metrics: vec![Metric::MemoryUsageMb],
            ..Default::default()
        };
        let bundle = analyze(&table(), &config).unwrap();
        assert_eq!(bundle.heatmap("gaussian").unwrap().get("Linear", "1M"), Some(1000.0));
        assert!(bundle.comparison(Metric::MemoryUsageMb).unwrap().is_complete());
    }

    #[test]
    fn test_empty_table_produces_empty_products() {
        let bundle = analyze(&RecordTable::default(), &AnalysisConfig::default()).unwrap();
        assert_eq!(bundle.trends.len(), 6);
        assert!(bundle.trends.iter().all(|t| t.series.is_empty()));
        assert!(bundle.heatmaps.iter().all(|h| h.is_empty()));
        assert_eq!(bundle.summary.missing_count(), 5);
    }
}
