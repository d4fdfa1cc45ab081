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

//! Shared test fixtures and utilities for Hashmark crates.
//!
//! # Quick Start
//!
//! ```rust
//! use hashmark_test::{samples, TableBuilder};
//!
//! // Pre-built inputs
//! let table = samples::results_table();
//! assert_eq!(table.distributions(), vec!["uniform", "gaussian", "UNIFORM"]);
//! assert_eq!(table.view("uniform").len(), 6);
//!
//! // Custom inputs
//! let table = TableBuilder::new()
//!     .trial("A", "uniform", 1000, 10.0, 20.0, 5.0)
//!     .trial("B", "uniform", 1000, 8.0, 18.0, 4.0)
//!     .build();
//! assert_eq!(table.len(), 2);
//!
//! // Malformed inputs for error-path tests
//! for (name, csv) in hashmark_test::errors::malformed_samples() {
//!     assert!(hashmark_core::RecordTable::parse_str(&csv).is_err(), "{name}");
//! }
//! ```

pub mod builders;
pub mod errors;
pub mod samples;

pub use builders::TableBuilder;

/// Header row in canonical column order.
pub const HEADER: &str =
    "Num_Keys,Distribution,Algorithm,Insert_Ops_Per_Sec,Lookup_Ops_Per_Sec,Memory_Usage_MB";

/// Prefixes `rows` with [`HEADER`] and joins them into CSV text.
pub fn csv_with_rows(rows: &[&str]) -> String {
    let mut out = String::from(HEADER);
    out.push('\n');
    for row in rows {
        out.push_str(row);
        out.push('\n');
    }
    out
}
