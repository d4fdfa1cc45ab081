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

//! Integration tests for hashmark-core against shared fixtures.

use hashmark_core::{
    analyze, build_pivot, build_pivot_with_ordering, build_series, compare_distributions,
    find_extremum, parse_str_with_config, AnalysisConfig, ExtremumMode, GapKind, HashmarkError,
    Metric, ParseConfig, ParseMode, RecordTable, SizeOrdering, CANONICAL_SIZE_ORDER,
};
use hashmark_test::{errors, samples, TableBuilder};
use std::io::Write;

#[test]
fn test_worked_example() {
    let table = RecordTable::parse_str(&samples::worked_example_csv()).unwrap();
    let uniform = table.view("uniform");

    let pivot = build_pivot(&uniform, Metric::InsertOpsPerSec);
    assert_eq!(pivot.cell_count(), 3);
    assert_eq!(pivot.get("A", "1k"), Some(10.0));
    assert_eq!(pivot.get("A", "1M"), Some(9.0));
    assert_eq!(pivot.get("B", "1k"), Some(8.0));

    let lowest = find_extremum(&uniform, Metric::MemoryUsageMb, ExtremumMode::Min).unwrap();
    assert_eq!(
        (lowest.record.algorithm(), lowest.record.num_keys(), lowest.value),
        ("B", 1000, 4.0)
    );
}

#[test]
fn test_runner_layout_with_extra_column() {
    let table = samples::results_table();
    let uniform = table.view("uniform");

    let series = build_series(&uniform, Metric::LookupOpsPerSec);
    assert_eq!(series.len(), 3);
    assert_eq!(series.algorithms()[0], "Basic Perfect Hash (FKS)");
    let bdz = series.get("BDZ Minimal Perfect Hash").unwrap();
    assert_eq!(bdz.iter().map(|p| p.x).collect::<Vec<_>>(), vec![1000, 1_000_000]);

    let best = find_extremum(&uniform, Metric::LookupOpsPerSec, ExtremumMode::Max).unwrap();
    assert_eq!(best.record.algorithm(), "BDZ Minimal Perfect Hash");
    assert_eq!(best.value, 41.25);
}

#[test]
fn test_failed_run_tag_is_outside_views() {
    let table = samples::results_table();
    let overall = find_extremum(&table, Metric::MemoryUsageMb, ExtremumMode::Min).unwrap();
    // The failed run reports zero memory and is part of the whole-table scope.
    assert!(overall.record.algorithm().starts_with("Ultra-Low-Memory"));

    let uniform = table.view("uniform");
    let in_view = find_extremum(&uniform, Metric::MemoryUsageMb, ExtremumMode::Min).unwrap();
    assert_eq!(in_view.record.algorithm(), "BDZ Minimal Perfect Hash");
}

#[test]
fn test_every_malformed_sample_is_rejected() {
    for (name, csv) in errors::malformed_samples() {
        let err = RecordTable::parse_str(&csv).expect_err(name);
        assert!(err.is_malformed_input(), "{name}: {err}");
    }
}

#[test]
fn test_lenient_parse_of_malformed_rows() {
    let config = ParseConfig {
        mode: ParseMode::Lenient,
        ..Default::default()
    };
    let csv = hashmark_test::csv_with_rows(&[
        "1000,uniform,A,1,1,1",
        "1000,uniform,A,1,-1,1",
        "10000,uniform,A,2,2,2",
    ]);
    let table = parse_str_with_config(&csv, config).unwrap();
    assert_eq!(table.len(), 2);
    assert_eq!(table.warnings().len(), 1);
    assert_eq!(table.warnings()[0].row, 2);
}

#[test]
fn test_from_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(samples::RUNNER_OUTPUT_CSV.as_bytes()).unwrap();
    let table = RecordTable::from_path(file.path(), ParseConfig::default()).unwrap();
    assert_eq!(table.len(), 13);

    let missing = RecordTable::from_path("/definitely/not/here.csv", ParseConfig::default());
    assert!(matches!(missing, Err(HashmarkError::Io(_))));
}

#[test]
fn test_full_sweep_heatmap_uses_canonical_columns() {
    let table = samples::full_sweep().build();
    for dist in ["uniform", "gaussian"] {
        let pivot = build_pivot(&table.view(dist), Metric::InsertOpsPerSec);
        assert_eq!(pivot.size_labels(), CANONICAL_SIZE_ORDER);
        assert_eq!(pivot.algorithms(), ["Linear", "Cuckoo", "Compact"]);
        assert_eq!(pivot.cell_count(), 18);
    }
}

#[test]
fn test_ordering_policies_differ_only_on_unseen_labels() {
    let table = samples::full_sweep()
        .trial("Linear", "uniform", 100_000_000, 1.0, 1.0, 1.0)
        .build();
    let view = table.view("uniform");

    let extended = build_pivot_with_ordering(&view, Metric::InsertOpsPerSec, SizeOrdering::Extended);
    assert_eq!(extended.size_labels().last().map(String::as_str), Some("100M"));
    assert_eq!(extended.get("Linear", "100M"), Some(1.0));

    let canonical = build_pivot_with_ordering(&view, Metric::InsertOpsPerSec, SizeOrdering::Canonical);
    assert_eq!(canonical.size_labels(), CANONICAL_SIZE_ORDER);
    assert_eq!(canonical.dropped_labels(), ["100M"]);
    assert_eq!(extended.cell_count(), canonical.cell_count() + 1);
}

#[test]
fn test_ragged_comparison_surfaces_gaps() {
    let table = samples::ragged_sweep().build();
    let cmp = compare_distributions(
        &table.view("uniform"),
        &table.view("gaussian"),
        Metric::InsertOpsPerSec,
    );

    assert!(!cmp.is_complete());
    assert_eq!(cmp.get("Linear").unwrap().len(), 6);
    let cuckoo = cmp.get("Cuckoo").unwrap();
    assert_eq!(cuckoo.len(), 5);
    assert!(cuckoo.iter().all(|p| p.num_keys != 5_000_000));

    let kinds: Vec<(&str, GapKind, Option<u64>)> = cmp
        .gaps
        .iter()
        .map(|g| (g.algorithm.as_str(), g.kind, g.num_keys))
        .collect();
    assert_eq!(
        kinds,
        vec![
            ("Cuckoo", GapKind::MissingTrial, Some(5_000_000)),
            ("Compact", GapKind::MissingAlgorithm, None),
        ]
    );
}

#[test]
fn test_analysis_of_full_sweep() {
    let table = samples::full_sweep().build();
    let bundle = analyze(&table, &AnalysisConfig::default()).unwrap();

    assert_eq!(bundle.gap_count(), 0);
    let summary = &bundle.summary;
    let winner = |title: &str| {
        summary
            .get(title)
            .and_then(|e| e.best.as_ref())
            .map(|b| (b.algorithm.clone(), b.size_label.clone()))
            .unwrap()
    };
    assert_eq!(winner("Best Insert Performance (Uniform)"), ("Linear".into(), "1k".into()));
    assert_eq!(winner("Best Lookup Performance (Gaussian)"), ("Cuckoo".into(), "1k".into()));
    assert_eq!(winner("Lowest Memory Usage"), ("Compact".into(), "1k".into()));
}

#[test]
fn test_empty_distribution_renders_empty_products() {
    let table = TableBuilder::new()
        .trial("A", "uniform", 1000, 1.0, 1.0, 1.0)
        .build();
    let gaussian = table.view("gaussian");

    assert!(build_series(&gaussian, Metric::InsertOpsPerSec).is_empty());
    assert!(build_pivot(&gaussian, Metric::InsertOpsPerSec).is_empty());
    assert!(matches!(
        find_extremum(&gaussian, Metric::InsertOpsPerSec, ExtremumMode::Max),
        Err(HashmarkError::EmptyScope { .. })
    ));
}
