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

//! Hashmark CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **summary**: Best insert and lookup performer per distribution, lowest memory overall
//! - **series**: One metric against key count for every algorithm
//! - **pivot**: Algorithm by size label matrix of mean values
//! - **compare**: One metric across two distributions, matched by key count
//! - **extremum**: Single highest or lowest trial for a metric
//! - **export**: Every analysis product as one JSON document
//!
//! All commands read a benchmark results CSV with the columns `Num_Keys`,
//! `Distribution`, `Algorithm`, `Insert_Ops_Per_Sec`, `Lookup_Ops_Per_Sec` and
//! `Memory_Usage_MB`. Text and JSON go to stdout; logs and warnings go to
//! stderr.

pub mod cli;
pub mod commands;
pub mod error;

pub use error::CliError;
