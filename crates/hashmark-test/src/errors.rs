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

//! Malformed inputs for error-path tests.

use crate::{csv_with_rows, HEADER};

/// Returns `(name, csv)` pairs that a strict parse must reject.
pub fn malformed_samples() -> Vec<(&'static str, String)> {
    vec![
        ("empty_input", String::new()),
        (
            "missing_memory_column",
            "Num_Keys,Distribution,Algorithm,Insert_Ops_Per_Sec,Lookup_Ops_Per_Sec\n1000,uniform,A,1,1\n"
                .to_string(),
        ),
        (
            "lowercase_header",
            HEADER.to_lowercase() + "\n1000,uniform,A,1,1,1\n",
        ),
        ("zero_keys", csv_with_rows(&["0,uniform,A,1,1,1"])),
        ("negative_keys", csv_with_rows(&["-10,uniform,A,1,1,1"])),
        ("fractional_keys", csv_with_rows(&["10.5,uniform,A,1,1,1"])),
        ("text_metric", csv_with_rows(&["1000,uniform,A,fast,1,1"])),
        ("negative_metric", csv_with_rows(&["1000,uniform,A,1,-0.5,1"])),
        ("nan_metric", csv_with_rows(&["1000,uniform,A,1,1,NaN"])),
        ("infinite_metric", csv_with_rows(&["1000,uniform,A,inf,1,1"])),
        ("empty_algorithm", csv_with_rows(&["1000,uniform,,1,1,1"])),
        ("short_row", csv_with_rows(&["1000,uniform,A,1,1"])),
        (
            "bad_row_after_good_rows",
            csv_with_rows(&["1000,uniform,A,1,1,1", "10000,uniform,A,1,1,"]),
        ),
    ]
}
