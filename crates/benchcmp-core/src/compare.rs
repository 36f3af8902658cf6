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

//! Baseline comparison.
//!
//! Relates a candidate variant's aggregate to the baseline aggregate of the
//! same group. Everything here is a pure function of two [`AggregateStat`]s.
//!
//! Zero-division policy, applied uniformly:
//!
//! - a percentage delta against a zero baseline value is `0`;
//! - a speedup ratio against a zero candidate mean is `None` (not comparable).

use crate::aggregate::AggregateStat;
use crate::name::GroupKey;
use serde::Serialize;
use std::cmp::Ordering;

/// Candidate versus baseline within one group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Comparison {
    /// `baseline.mean_ns / candidate.mean_ns`; above 1 means the candidate is
    /// faster. `None` when the candidate mean is zero.
    pub ratio: Option<f64>,
    /// Time reduction in percent of the baseline mean (negative = slower).
    pub time_delta_pct: f64,
    /// Memory reduction in percent of the baseline (negative = more memory).
    pub bytes_delta_pct: f64,
    /// Allocation reduction in percent of the baseline (negative = more allocations).
    pub allocs_delta_pct: f64,
    /// `candidate.mean_ns < baseline.mean_ns`.
    pub faster_than_baseline: bool,
    /// Baseline mean, kept for regression reporting.
    pub baseline_mean_ns: f64,
    /// Candidate mean, kept for regression reporting.
    pub candidate_mean_ns: f64,
}

impl Comparison {
    /// How much slower the candidate is, in percent of the baseline mean.
    ///
    /// Negative when the candidate is faster; `0` for a zero baseline.
    pub fn slower_by_pct(&self) -> f64 {
        -self.time_delta_pct
    }
}

/// Compares a candidate aggregate against the baseline aggregate.
///
/// # Examples
///
/// ```
/// use benchcmp_core::aggregate::reduce;
/// use benchcmp_core::compare::compare;
/// use benchcmp_core::line::RawSample;
///
/// let baseline = reduce(&[RawSample::new("b", 1, 100.0)]);
/// let candidate = reduce(&[RawSample::new("c", 1, 25.0)]);
///
/// let cmp = compare(&baseline, &candidate);
/// assert_eq!(cmp.ratio, Some(4.0));
/// assert!(cmp.faster_than_baseline);
/// ```
pub fn compare(baseline: &AggregateStat, candidate: &AggregateStat) -> Comparison {
    let ratio = if candidate.mean_ns > 0.0 {
        Some(baseline.mean_ns / candidate.mean_ns)
    } else {
        None
    };

    Comparison {
        ratio,
        time_delta_pct: delta_pct(baseline.mean_ns, candidate.mean_ns),
        bytes_delta_pct: delta_pct(baseline.mean_bytes as f64, candidate.mean_bytes as f64),
        allocs_delta_pct: delta_pct(baseline.mean_allocs as f64, candidate.mean_allocs as f64),
        faster_than_baseline: candidate.mean_ns < baseline.mean_ns,
        baseline_mean_ns: baseline.mean_ns,
        candidate_mean_ns: candidate.mean_ns,
    }
}

/// `(baseline - candidate) / baseline * 100`, or `0` when the baseline is `0`.
pub fn delta_pct(baseline: f64, candidate: f64) -> f64 {
    if baseline == 0.0 {
        0.0
    } else {
        (baseline - candidate) / baseline * 100.0
    }
}

/// A comparison labelled with where it came from.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedComparison {
    /// Group the comparison belongs to.
    pub group: GroupKey,
    /// Candidate variant.
    pub variant: String,
    /// The comparison itself.
    #[serde(flatten)]
    pub comparison: Comparison,
}

/// Orders comparisons worst regression first.
///
/// Sorts by ratio ascending; ties fall back to the group name and then the
/// variant so output is deterministic. Entries without a ratio go last.
pub fn rank_by_ratio(comparisons: &mut [RankedComparison]) {
    comparisons.sort_by(|a, b| {
        let by_ratio = match (a.comparison.ratio, b.comparison.ratio) {
            (Some(x), Some(y)) => x.total_cmp(&y),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        by_ratio
            .then_with(|| a.group.cmp(&b.group))
            .then_with(|| a.variant.cmp(&b.variant))
    });
}
