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

//! Aggregation and summarization engine for hash table benchmark results.
//!
//! This crate turns a flat CSV of benchmark trials (one row per algorithm ×
//! key count × key distribution) into the comparative views needed to judge
//! algorithm performance.
//!
//! # Components
//!
//! - [`RecordTable`]: parsed, validated trial records in input order
//! - [`size_label`]: canonical short labels for key counts (`"1k"`, `"1M"`)
//! - [`DistributionView`]: the records of one distribution tag
//! - [`build_series`]: per-algorithm trend series sorted by key count
//! - [`build_pivot`]: algorithm × size-label matrices of mean values
//! - [`find_extremum`]: best or worst record of a metric in a scope
//! - [`compare_distributions`]: key-aligned comparison of two distributions
//! - [`analyze`]: every data product plus the best-performer summary
//!
//! All derived structures are read-only projections of the table; nothing is
//! mutated after parsing, so every operation is deterministic and may run
//! concurrently over the same table.
//!
//! # Example
//!
//! ```
//! use hashmark_core::{build_pivot, find_extremum, ExtremumMode, Metric, RecordTable};
//!
//! let csv = "\
//! Num_Keys,Distribution,Algorithm,Insert_Ops_Per_Sec,Lookup_Ops_Per_Sec,Memory_Usage_MB
//! 1000,uniform,A,10.0,20.0,5.0
//! 1000,uniform,B,8.0,18.0,4.0
//! 1000000,uniform,A,9.0,19.0,50.0
//! ";
//! let table = RecordTable::parse_str(csv)?;
//! let uniform = table.view("uniform");
//!
//! let pivot = build_pivot(&uniform, Metric::InsertOpsPerSec);
//! assert_eq!(pivot.get("A", "1k"), Some(10.0));
//! assert_eq!(pivot.get("A", "1M"), Some(9.0));
//! assert_eq!(pivot.get("B", "1k"), Some(8.0));
//!
//! let lowest = find_extremum(&uniform, Metric::MemoryUsageMb, ExtremumMode::Min)?;
//! assert_eq!(lowest.record.algorithm(), "B");
//! # Ok::<(), hashmark_core::HashmarkError>(())
//! ```
//!
//! # Strictness
//!
//! Parsing is strict by default: any malformed row aborts with an error.
//! [`ParseMode::Lenient`] skips such rows and records a [`ParseWarning`] for
//! each of them instead.

mod analysis;
mod compare;
mod error;
mod extrema;
mod parse;
mod pivot;
mod record;
mod series;
mod size_label;
mod summary;
mod table;
mod view;

pub use analysis::{analyze, AnalysisBundle, AnalysisConfig, TrendChart};
pub use compare::{
    compare_distributions, AlgorithmComparison, CompletenessGap, ComparisonPoint,
    DistributionComparison, GapKind,
};
pub use error::{HashmarkError, Result};
pub use extrema::{find_extremum, BestPerformer, Extremum, RecordScope};
pub use parse::{
    parse_reader, parse_reader_with_config, parse_str, parse_str_with_config, ParseConfig,
    ParseMode, DEFAULT_MAX_ROWS,
};
pub use pivot::{build_pivot, build_pivot_with_ordering, PivotCell, PivotMatrix, SizeOrdering};
pub use record::{
    ExtremumMode, Metric, TrialRecord, COL_ALGORITHM, COL_DISTRIBUTION, COL_INSERT, COL_LOOKUP,
    COL_MEMORY, COL_NUM_KEYS, REQUIRED_COLUMNS,
};
pub use series::{build_series, AlgorithmSeries, SeriesPoint, SeriesSet};
pub use size_label::{is_canonical, label_magnitude, size_label, CANONICAL_SIZE_ORDER};
pub use summary::{SummaryEntry, SummaryReport};
pub use table::{ParseWarning, RecordTable};
pub use view::DistributionView;
