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

//! Human-readable size buckets for key counts.
//!
//! Labels are lossy on purpose: 1,500,000 and 1,999,999 keys both become
//! `"1M"`, which is what lets the pivot aggregator average nearby trial sizes
//! into a single heatmap column.

/// Canonical column order for heatmaps.
pub const CANONICAL_SIZE_ORDER: &[&str] = &["1k", "10k", "100k", "1M", "5M", "10M"];

const MILLION: u64 = 1_000_000;
const THOUSAND: u64 = 1_000;

/// Maps a key count to its size label.
///
/// # Examples
///
/// ```
/// use hashmark_core::size_label;
///
/// assert_eq!(size_label(999), "999");
/// assert_eq!(size_label(1_000), "1k");
/// assert_eq!(size_label(999_999), "999k");
/// assert_eq!(size_label(1_999_999), "1M");
/// ```
pub fn size_label(num_keys: u64) -> String {
    if num_keys >= MILLION {
        format!("{}M", num_keys / MILLION)
    } else if num_keys >= THOUSAND {
        format!("{}k", num_keys / THOUSAND)
    } else {
        num_keys.to_string()
    }
}

/// Returns the smallest key count that maps to `label`.
///
/// This is the inverse of [`size_label`] on its image, so sorting labels by
/// magnitude orders them the same way as the key counts they came from.
/// Returns `None` for text that `size_label` can never produce.
///
/// ```
/// use hashmark_core::label_magnitude;
///
/// assert_eq!(label_magnitude("5M"), Some(5_000_000));
/// assert_eq!(label_magnitude("100k"), Some(100_000));
/// assert_eq!(label_magnitude("42"), Some(42));
/// assert_eq!(label_magnitude("1000k"), None);
/// ```
pub fn label_magnitude(label: &str) -> Option<u64> {
    let (digits, scale) = match label.as_bytes().last()? {
        b'M' => (&label[..label.len() - 1], MILLION),
        b'k' => (&label[..label.len() - 1], THOUSAND),
        _ => (label, 1),
    };
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let value: u64 = digits.parse().ok()?;
    let magnitude = value.checked_mul(scale)?;
    // Reject spellings size_label never emits ("0k", "1000k", "01M").
    if magnitude == 0 || size_label(magnitude) != label {
        return None;
    }
    Some(magnitude)
}

/// Returns true when `label` is part of [`CANONICAL_SIZE_ORDER`].
pub fn is_canonical(label: &str) -> bool {
    CANONICAL_SIZE_ORDER.contains(&label)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundaries() {
        assert_eq!(size_label(1), "1");
        assert_eq!(size_label(999), "999");
        assert_eq!(size_label(1_000), "1k");
        assert_eq!(size_label(999_999), "999k");
        assert_eq!(size_label(1_000_000), "1M");
        assert_eq!(size_label(5_000_000), "5M");
        assert_eq!(size_label(10_000_000), "10M");
    }

    #[test]
    fn test_truncating_division() {
        assert_eq!(size_label(1_500), "1k");
        assert_eq!(size_label(1_500_000), "1M");
        assert_eq!(size_label(1_999_999), "1M");
        assert_eq!(size_label(100_000_000), "100M");
    }

    #[test]
    fn test_magnitude_of_canonical_labels_is_increasing() {
        let magnitudes: Vec<u64> = CANONICAL_SIZE_ORDER
            .iter()
            .map(|l| label_magnitude(l).unwrap())
            .collect();
        assert!(magnitudes.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_magnitude_rejects_foreign_text() {
        assert_eq!(label_magnitude(""), None);
        assert_eq!(label_magnitude("k"), None);
        assert_eq!(label_magnitude("0"), None);
        assert_eq!(label_magnitude("0k"), None);
        assert_eq!(label_magnitude("01M"), None);
        assert_eq!(label_magnitude("1.5M"), None);
        assert_eq!(label_magnitude("10G"), None);
    }

    #[test]
    fn test_magnitude_round_trips_through_label() {
        for n in [1, 7, 999, 1_000, 42_000, 999_000, 1_000_000, 100_000_000] {
            assert_eq!(label_magnitude(&size_label(n)), Some(n));
        }
    }

    #[test]
    fn test_is_canonical() {
        assert!(is_canonical("1M"));
        assert!(!is_canonical("100M"));
        assert!(!is_canonical("500"));
    }
}
