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

//! Trial records and the metrics measured on them.

use crate::error::{HashmarkError, Result};
use crate::size_label::size_label;
use std::fmt;
use std::str::FromStr;

/// Column name of the key count field.
pub const COL_NUM_KEYS: &str = "Num_Keys";
/// Column name of the distribution tag field.
pub const COL_DISTRIBUTION: &str = "Distribution";
/// Column name of the algorithm identifier field.
pub const COL_ALGORITHM: &str = "Algorithm";
/// Column name of the insert throughput metric.
pub const COL_INSERT: &str = "Insert_Ops_Per_Sec";
/// Column name of the lookup throughput metric.
pub const COL_LOOKUP: &str = "Lookup_Ops_Per_Sec";
/// Column name of the memory usage metric.
pub const COL_MEMORY: &str = "Memory_Usage_MB";

/// All columns a benchmark result table must carry, in canonical order.
pub const REQUIRED_COLUMNS: &[&str] = &[
    COL_NUM_KEYS,
    COL_DISTRIBUTION,
    COL_ALGORITHM,
    COL_INSERT,
    COL_LOOKUP,
    COL_MEMORY,
];

/// A measured quantity of a trial.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Metric {
    /// Insert throughput, millions of operations per second.
    #[cfg_attr(feature = "serde", serde(rename = "Insert_Ops_Per_Sec"))]
    InsertOpsPerSec,
    /// Lookup throughput, millions of operations per second.
    #[cfg_attr(feature = "serde", serde(rename = "Lookup_Ops_Per_Sec"))]
    LookupOpsPerSec,
    /// Memory footprint in megabytes.
    #[cfg_attr(feature = "serde", serde(rename = "Memory_Usage_MB"))]
    MemoryUsageMb,
}

impl Metric {
    /// Every metric, in column order.
    pub const ALL: [Metric; 3] = [
        Metric::InsertOpsPerSec,
        Metric::LookupOpsPerSec,
        Metric::MemoryUsageMb,
    ];

    /// Returns the input column this metric is read from.
    pub fn column(&self) -> &'static str {
        match self {
            Metric::InsertOpsPerSec => COL_INSERT,
            Metric::LookupOpsPerSec => COL_LOOKUP,
            Metric::MemoryUsageMb => COL_MEMORY,
        }
    }

    /// Returns the display unit.
    pub fn unit(&self) -> &'static str {
        match self {
            Metric::InsertOpsPerSec | Metric::LookupOpsPerSec => "Mops/s",
            Metric::MemoryUsageMb => "MB",
        }
    }

    /// Returns the direction in which this metric improves.
    pub fn preferred_extremum(&self) -> ExtremumMode {
        match self {
            Metric::InsertOpsPerSec | Metric::LookupOpsPerSec => ExtremumMode::Max,
            Metric::MemoryUsageMb => ExtremumMode::Min,
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column())
    }
}

impl FromStr for Metric {
    type Err = HashmarkError;

    /// Accepts the exact column name or a short alias (`insert`, `lookup`, `memory`).
    fn from_str(s: &str) -> Result<Self> {
        match s {
            COL_INSERT | "insert" => Ok(Metric::InsertOpsPerSec),
            COL_LOOKUP | "lookup" => Ok(Metric::LookupOpsPerSec),
            COL_MEMORY | "memory" => Ok(Metric::MemoryUsageMb),
            other => Err(HashmarkError::UnknownMetric(other.to_string())),
        }
    }
}

/// Direction of an extremum query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ExtremumMode {
    /// Largest value wins.
    Max,
    /// Smallest value wins.
    Min,
}

impl ExtremumMode {
    /// Returns true when `candidate` strictly beats `best`.
    pub(crate) fn improves(&self, candidate: f64, best: f64) -> bool {
        match self {
            ExtremumMode::Max => candidate > best,
            ExtremumMode::Min => candidate < best,
        }
    }

    /// Returns the mode as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExtremumMode::Max => "max",
            ExtremumMode::Min => "min",
        }
    }
}

impl FromStr for ExtremumMode {
    type Err = HashmarkError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "max" => Ok(ExtremumMode::Max),
            "min" => Ok(ExtremumMode::Min),
            other => Err(HashmarkError::UnknownExtremumMode(other.to_string())),
        }
    }
}

/// One benchmark observation: an algorithm run at a key count under a distribution.
///
/// Records are validated on construction and immutable afterwards. The size
/// label is derived once and cached.
///
/// # Examples
///
/// ```
/// use hashmark_core::{Metric, TrialRecord};
///
/// let rec = TrialRecord::new("Cuckoo", "uniform", 1_500_000, 12.5, 20.0, 48.0).unwrap();
/// assert_eq!(rec.size_label(), "1M");
/// assert_eq!(rec.metric(Metric::LookupOpsPerSec), 20.0);
///
/// assert!(TrialRecord::new("Cuckoo", "uniform", 0, 1.0, 1.0, 1.0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TrialRecord {
    algorithm: String,
    distribution: String,
    num_keys: u64,
    insert_ops_per_sec: f64,
    lookup_ops_per_sec: f64,
    memory_usage_mb: f64,
    size_label: String,
}

impl TrialRecord {
    /// Creates a record, validating key count and metrics.
    pub fn new(
        algorithm: impl Into<String>,
        distribution: impl Into<String>,
        num_keys: u64,
        insert_ops_per_sec: f64,
        lookup_ops_per_sec: f64,
        memory_usage_mb: f64,
    ) -> Result<Self> {
        if num_keys == 0 {
            return Err(HashmarkError::NonPositiveKeyCount {
                row: 0,
                value: num_keys.to_string(),
            });
        }
        check_metric(COL_INSERT, insert_ops_per_sec)?;
        check_metric(COL_LOOKUP, lookup_ops_per_sec)?;
        check_metric(COL_MEMORY, memory_usage_mb)?;

        Ok(Self {
            algorithm: algorithm.into(),
            distribution: distribution.into(),
            num_keys,
            insert_ops_per_sec,
            lookup_ops_per_sec,
            memory_usage_mb,
            size_label: size_label(num_keys),
        })
    }

    /// Algorithm identifier.
    pub fn algorithm(&self) -> &str {
        &self.algorithm
    }

    /// Key distribution tag.
    pub fn distribution(&self) -> &str {
        &self.distribution
    }

    /// Number of keys in the trial.
    pub fn num_keys(&self) -> u64 {
        self.num_keys
    }

    /// Cached size label for [`num_keys`](Self::num_keys).
    pub fn size_label(&self) -> &str {
        &self.size_label
    }

    pub fn insert_ops_per_sec(&self) -> f64 {
        self.insert_ops_per_sec
    }

    pub fn lookup_ops_per_sec(&self) -> f64 {
        self.lookup_ops_per_sec
    }

    pub fn memory_usage_mb(&self) -> f64 {
        self.memory_usage_mb
    }

    /// Returns the value of `metric` for this trial.
    pub fn metric(&self, metric: Metric) -> f64 {
        match metric {
            Metric::InsertOpsPerSec => self.insert_ops_per_sec,
            Metric::LookupOpsPerSec => self.lookup_ops_per_sec,
            Metric::MemoryUsageMb => self.memory_usage_mb,
        }
    }
}

fn check_metric(column: &str, value: f64) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(HashmarkError::InvalidMetric {
            row: 0,
            column: column.to_string(),
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_from_column_name() {
        assert_eq!("Insert_Ops_Per_Sec".parse::<Metric>().unwrap(), Metric::InsertOpsPerSec);
        assert_eq!("Lookup_Ops_Per_Sec".parse::<Metric>().unwrap(), Metric::LookupOpsPerSec);
        assert_eq!("Memory_Usage_MB".parse::<Metric>().unwrap(), Metric::MemoryUsageMb);
    }

    #[test]
    fn test_metric_aliases_and_case_sensitivity() {
        assert_eq!("memory".parse::<Metric>().unwrap(), Metric::MemoryUsageMb);
        assert!("memory_usage_mb".parse::<Metric>().is_err());
        assert!(matches!(
            "Speed".parse::<Metric>(),
            Err(HashmarkError::UnknownMetric(name)) if name == "Speed"
        ));
    }

    #[test]
    fn test_metric_units_and_direction() {
        assert_eq!(Metric::InsertOpsPerSec.unit(), "Mops/s");
        assert_eq!(Metric::MemoryUsageMb.unit(), "MB");
        assert_eq!(Metric::LookupOpsPerSec.preferred_extremum(), ExtremumMode::Max);
        assert_eq!(Metric::MemoryUsageMb.preferred_extremum(), ExtremumMode::Min);
        assert_eq!(Metric::MemoryUsageMb.to_string(), "Memory_Usage_MB");
    }

    #[test]
    fn test_extremum_mode_strictness() {
        assert!(ExtremumMode::Max.improves(2.0, 1.0));
        assert!(!ExtremumMode::Max.improves(1.0, 1.0));
        assert!(ExtremumMode::Min.improves(0.5, 1.0));
        assert!(!ExtremumMode::Min.improves(1.0, 1.0));
        assert_eq!("min".parse::<ExtremumMode>().unwrap(), ExtremumMode::Min);
        assert!("MAX".parse::<ExtremumMode>().is_err());
    }

    #[test]
    fn test_record_accessors() {
        let rec = TrialRecord::new("Robin", "gaussian", 10_000, 8.0, 18.0, 4.5).unwrap();
        assert_eq!(rec.algorithm(), "Robin");
        assert_eq!(rec.distribution(), "gaussian");
        assert_eq!(rec.num_keys(), 10_000);
        assert_eq!(rec.size_label(), "10k");
        assert_eq!(rec.metric(Metric::InsertOpsPerSec), 8.0);
        assert_eq!(rec.metric(Metric::MemoryUsageMb), 4.5);
    }

    #[test]
    fn test_record_rejects_invalid_metrics() {
        assert!(matches!(
            TrialRecord::new("A", "uniform", 10, -1.0, 1.0, 1.0),
            Err(HashmarkError::InvalidMetric { column, .. }) if column == COL_INSERT
        ));
        assert!(TrialRecord::new("A", "uniform", 10, 1.0, f64::NAN, 1.0).is_err());
        assert!(TrialRecord::new("A", "uniform", 10, 1.0, 1.0, f64::INFINITY).is_err());
        assert!(TrialRecord::new("A", "uniform", 10, 0.0, 0.0, 0.0).is_ok());
    }
}
