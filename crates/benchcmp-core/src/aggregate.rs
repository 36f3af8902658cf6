// Dweve Benchcmp - Benchmark Comparison Toolkit
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

//! Per-variant statistics.
//!
//! Reduces every sample a variant produced in one group (across all inputs)
//! to a summary. Time statistics are taken from the sorted sequence of
//! `ns/op` values, which makes the result independent of insertion order.

use crate::line::RawSample;
use serde::Serialize;

/// Statistical summary of one variant in one group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AggregateStat {
    /// Number of samples folded in (never zero).
    pub count: usize,
    /// Fastest observation.
    pub min_ns: f64,
    /// Slowest observation.
    pub max_ns: f64,
    /// Arithmetic mean.
    pub mean_ns: f64,
    /// Median.
    pub median_ns: f64,
    /// Population standard deviation.
    pub std_dev_ns: f64,
    /// Mean bytes per operation, truncated.
    pub mean_bytes: u64,
    /// Mean allocations per operation, truncated.
    pub mean_allocs: u64,
}

/// Reduces a non-empty list of samples.
///
/// Mean and median always lie within `[min_ns, max_ns]`; the mean is pinned
/// to that range to absorb summation rounding.
///
/// # Panics
///
/// Panics if `samples` is empty. Store buckets are never empty, so an empty
/// slice here is a caller bug.
///
/// # Examples
///
/// ```
/// use benchcmp_core::aggregate::reduce;
/// use benchcmp_core::line::RawSample;
///
/// let samples = [
///     RawSample::new("BenchmarkEmail/Match/Input[0]/stdlib", 1, 100.0),
///     RawSample::new("BenchmarkEmail/Match/Input[1]/stdlib", 1, 120.0),
/// ];
/// let stat = reduce(&samples);
/// assert_eq!(stat.mean_ns, 110.0);
/// assert_eq!(stat.median_ns, 110.0);
/// assert_eq!((stat.min_ns, stat.max_ns), (100.0, 120.0));
/// ```
pub fn reduce(samples: &[RawSample]) -> AggregateStat {
    assert!(!samples.is_empty(), "cannot aggregate an empty sample list");

    let mut ns: Vec<f64> = samples.iter().map(|s| s.ns_per_op).collect();
    ns.sort_by(f64::total_cmp);

    let count = ns.len();
    let min_ns = ns[0];
    let max_ns = ns[count - 1];

    let mid = count / 2;
    // Halving the gap keeps the midpoint finite for values near f64::MAX.
    let median_ns = if count % 2 == 0 {
        ns[mid - 1] + (ns[mid] - ns[mid - 1]) / 2.0
    } else {
        ns[mid]
    };

    let n = count as f64;
    let sum = ns.iter().sum::<f64>();
    let mean = if sum.is_finite() {
        sum / n
    } else {
        ns.iter().map(|x| x / n).sum()
    };
    let mean_ns = mean.max(min_ns).min(max_ns);

    let std_dev_ns = std_dev(&ns, mean_ns, max_ns);

    let total_bytes: u128 = samples.iter().map(|s| u128::from(s.bytes_per_op)).sum();
    let total_allocs: u128 = samples.iter().map(|s| u128::from(s.allocs_per_op)).sum();

    AggregateStat {
        count,
        min_ns,
        max_ns,
        mean_ns,
        median_ns,
        std_dev_ns,
        mean_bytes: (total_bytes / count as u128) as u64,
        mean_allocs: (total_allocs / count as u128) as u64,
    }
}

/// Population standard deviation around `mean`.
///
/// Squared deviations of very large values overflow, in which case the
/// deviations are scaled by `scale` before squaring.
fn std_dev(ns: &[f64], mean: f64, scale: f64) -> f64 {
    let n = ns.len() as f64;
    let variance = ns.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>() / n;
    if variance.is_finite() || scale == 0.0 {
        return variance.sqrt();
    }
    let scaled = ns
        .iter()
        .map(|x| {
            let d = (x - mean) / scale;
            d * d
        })
        .sum::<f64>()
        / n;
    scaled.sqrt() * scale
}
