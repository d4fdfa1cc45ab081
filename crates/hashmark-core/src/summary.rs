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

//! Best-performer summary report.

use crate::analysis::AnalysisConfig;
use crate::error::{HashmarkError, Result};
use crate::extrema::{find_extremum, BestPerformer, Extremum, RecordScope};
use crate::record::{ExtremumMode, Metric};
use crate::table::RecordTable;
use std::fmt;

/// One line of the summary: the extremum of a metric within a scope.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SummaryEntry {
    /// Heading, e.g. "Best Insert Performance (Uniform)".
    pub title: String,
    pub metric: Metric,
    pub mode: ExtremumMode,
    /// Distribution tag, or "all" for the whole table.
    pub scope: String,
    /// `None` when the scope had no records.
    pub best: Option<BestPerformer>,
}

/// The best-performer report printed after an analysis run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SummaryReport {
    pub entries: Vec<SummaryEntry>,
}

impl SummaryReport {
    /// Builds the five standard entries: best insert and lookup throughput
    /// within each of the two configured distributions, and lowest memory
    /// usage over the whole table.
    ///
    /// An empty scope yields an entry without a best performer; any other
    /// query error is returned.
    pub fn build(table: &RecordTable, config: &AnalysisConfig) -> Result<Self> {
        let mut entries = Vec::with_capacity(5);
        for (label, metric) in [
            ("Insert", Metric::InsertOpsPerSec),
            ("Lookup", Metric::LookupOpsPerSec),
        ] {
            for dist in [&config.left_distribution, &config.right_distribution] {
                let title = format!("Best {} Performance ({})", label, capitalize(dist));
                entries.push(entry(title, &table.view(dist), metric, ExtremumMode::Max)?);
            }
        }
        entries.push(entry(
            "Lowest Memory Usage".to_string(),
            table,
            Metric::MemoryUsageMb,
            ExtremumMode::Min,
        )?);
        Ok(Self { entries })
    }

    /// Returns the entry with `title`.
    pub fn get(&self, title: &str) -> Option<&SummaryEntry> {
        self.entries.iter().find(|e| e.title == title)
    }

    /// Number of entries whose scope had no data.
    pub fn missing_count(&self) -> usize {
        self.entries.iter().filter(|e| e.best.is_none()).count()
    }
}

fn entry<'a, S: RecordScope<'a>>(
    title: String,
    scope: S,
    metric: Metric,
    mode: ExtremumMode,
) -> Result<SummaryEntry> {
    let scope_name = scope.scope_name().to_string();
    let best = best_or_missing(find_extremum(scope, metric, mode), metric)?;
    Ok(SummaryEntry {
        title,
        metric,
        mode,
        scope: scope_name,
        best,
    })
}

fn best_or_missing(found: Result<Extremum<'_>>, metric: Metric) -> Result<Option<BestPerformer>> {
    match found {
        Ok(extremum) => Ok(Some(extremum.to_best_performer(metric))),
        Err(HashmarkError::EmptyScope { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

impl fmt::Display for SummaryReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(80);
        writeln!(f, "{}", rule)?;
        writeln!(f, "SUMMARY STATISTICS")?;
        writeln!(f, "{}", rule)?;
        for entry in &self.entries {
            writeln!(f)?;
            writeln!(f, "{}:", entry.title)?;
            match &entry.best {
                Some(best) => writeln!(f, "  {}", best)?,
                None => writeln!(f, "  no data in scope '{}'", entry.scope)?,
            }
        }
        writeln!(f)?;
        write!(f, "{}", rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::TrialRecord;

    fn table() -> RecordTable {
        vec![
            TrialRecord::new("A", "uniform", 1000, 10.0, 20.0, 5.0).unwrap(),
            TrialRecord::new("B", "uniform", 1000, 8.0, 18.0, 4.0).unwrap(),
            TrialRecord::new("A", "uniform", 1_000_000, 9.0, 19.0, 50.0).unwrap(),
            TrialRecord::new("B", "gaussian", 10_000, 7.0, 30.0, 3.5).unwrap(),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_five_entries() {
        let report = SummaryReport::build(&table(), &AnalysisConfig::default()).unwrap();
        let titles: Vec<&str> = report.entries.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Best Insert Performance (Uniform)",
                "Best Insert Performance (Gaussian)",
                "Best Lookup Performance (Uniform)",
                "Best Lookup Performance (Gaussian)",
                "Lowest Memory Usage",
            ]
        );
        assert_eq!(report.missing_count(), 0);
    }

    #[test]
    fn test_entry_values() {
        let report = SummaryReport::build(&table(), &AnalysisConfig::default()).unwrap();
        let insert = report.get("Best Insert Performance (Uniform)").unwrap();
        let best = insert.best.as_ref().unwrap();
        assert_eq!((best.algorithm.as_str(), best.num_keys), ("A", 1000));

        let memory = report.get("Lowest Memory Usage").unwrap();
        assert_eq!(memory.scope, "all");
        assert_eq!(memory.best.as_ref().unwrap().value, 3.5);
    }

    #[test]
    fn test_missing_distribution_is_reported_not_fabricated() {
        let config = AnalysisConfig {
            right_distribution: "zipf".to_string(),
            ..Default::default()
        };
        let report = SummaryReport::build(&table(), &config).unwrap();
        assert_eq!(report.missing_count(), 2);
        let text = report.to_string();
        assert!(text.contains("Best Insert Performance (Zipf):\n  no data in scope 'zipf'"));
    }

    #[test]
    fn test_display_lines() {
        let report = SummaryReport::build(&table(), &AnalysisConfig::default()).unwrap();
        let text = report.to_string();
        assert!(text.starts_with(&"=".repeat(80)));
        assert!(text.contains("SUMMARY STATISTICS"));
        assert!(text.contains("Best Lookup Performance (Gaussian):\n  B: 30.00 Mops/s @ 10k keys"));
        assert!(text.contains("Lowest Memory Usage:\n  B: 3.50 MB @ 10k keys"));
    }

    #[test]
    fn test_capitalize() {
        assert_eq!(capitalize("uniform"), "Uniform");
        assert_eq!(capitalize(""), "");
    }

    #[test]
    fn test_only_empty_scope_counts_as_missing() {
        let empty = HashmarkError::EmptyScope {
            scope: "gaussian".to_string(),
            metric: "Insert_Ops_Per_Sec".to_string(),
        };
        assert_eq!(best_or_missing(Err(empty), Metric::InsertOpsPerSec).unwrap(), None);

        let other = HashmarkError::UnknownMetric("Build_Time_MS".to_string());
        let err = best_or_missing(Err(other), Metric::InsertOpsPerSec).unwrap_err();
        assert!(matches!(err, HashmarkError::UnknownMetric(_)));
    }
}
