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

//! Category rollup of baseline-versus-candidate results.
//!
//! For every group that measured both the baseline and the primary candidate,
//! the group's aggregates are folded into its category and into an overall
//! total. Groups where the candidate is not faster are listed as regressions,
//! worst first.

use crate::aggregate::AggregateStat;
use crate::analysis::Analysis;
use crate::compare::delta_pct;
use crate::config::AnalysisConfig;
use crate::name::GroupKey;
use serde::Serialize;
use std::collections::BTreeMap;

/// How far a candidate fell behind the baseline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Less than 15% slower.
    Minor,
    /// 15% to 50% slower.
    Moderate,
    /// 50% slower or worse.
    Severe,
}

impl Severity {
    /// Classifies a slowdown percentage.
    pub fn from_slower_pct(pct: f64) -> Self {
        if pct >= 50.0 {
            Severity::Severe
        } else if pct >= 15.0 {
            Severity::Moderate
        } else {
            Severity::Minor
        }
    }

    /// Returns the severity as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Minor => "minor",
            Severity::Moderate => "moderate",
            Severity::Severe => "severe",
        }
    }
}

/// A group where the candidate did not beat the baseline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Regression {
    /// Group identity.
    pub group: GroupKey,
    /// Slowdown in percent of the baseline mean.
    pub slower_by_pct: f64,
    /// Baseline mean time.
    pub baseline_ns: f64,
    /// Candidate mean time.
    pub candidate_ns: f64,
    /// Slowdown class.
    pub severity: Severity,
}

/// Mean figures over a set of compared groups.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Totals {
    /// Groups compared.
    pub compared: usize,
    /// Groups where the candidate was faster.
    pub candidate_faster: usize,
    /// Groups where the baseline was at least as fast.
    pub baseline_faster: usize,
    /// Mean baseline time per group.
    pub baseline_mean_ns: f64,
    /// Mean candidate time per group.
    pub candidate_mean_ns: f64,
    /// Mean baseline bytes per group.
    pub baseline_mean_bytes: f64,
    /// Mean candidate bytes per group.
    pub candidate_mean_bytes: f64,
    /// Mean baseline allocations per group.
    pub baseline_mean_allocs: f64,
    /// Mean candidate allocations per group.
    pub candidate_mean_allocs: f64,
    /// Time reduction of the candidate in percent.
    pub time_delta_pct: f64,
    /// Memory reduction of the candidate in percent.
    pub bytes_delta_pct: f64,
    /// Allocation reduction of the candidate in percent.
    pub allocs_delta_pct: f64,
}

#[derive(Default)]
struct Accumulator {
    compared: usize,
    candidate_faster: usize,
    sums: [f64; 6],
}

impl Accumulator {
    fn add(&mut self, baseline: &AggregateStat, candidate: &AggregateStat) {
        self.compared += 1;
        if candidate.mean_ns < baseline.mean_ns {
            self.candidate_faster += 1;
        }
        let values = [
            baseline.mean_ns,
            candidate.mean_ns,
            baseline.mean_bytes as f64,
            candidate.mean_bytes as f64,
            baseline.mean_allocs as f64,
            candidate.mean_allocs as f64,
        ];
        for (sum, value) in self.sums.iter_mut().zip(values) {
            *sum += value;
        }
    }

    fn finish(&self) -> Totals {
        if self.compared == 0 {
            return Totals::default();
        }
        let n = self.compared as f64;
        let [b_ns, c_ns, b_bytes, c_bytes, b_allocs, c_allocs] = self.sums.map(|s| s / n);
        Totals {
            compared: self.compared,
            candidate_faster: self.candidate_faster,
            baseline_faster: self.compared - self.candidate_faster,
            baseline_mean_ns: b_ns,
            candidate_mean_ns: c_ns,
            baseline_mean_bytes: b_bytes,
            candidate_mean_bytes: c_bytes,
            baseline_mean_allocs: b_allocs,
            candidate_mean_allocs: c_allocs,
            time_delta_pct: delta_pct(b_ns, c_ns),
            bytes_delta_pct: delta_pct(b_bytes, c_bytes),
            allocs_delta_pct: delta_pct(b_allocs, c_allocs),
        }
    }
}

/// Rollup of one category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySummary {
    /// Category token.
    pub category: String,
    /// Category means.
    #[serde(flatten)]
    pub totals: Totals,
    /// Worst regressions, up to the configured limit.
    pub regressions: Vec<Regression>,
    /// Regressions beyond the limit.
    pub omitted_regressions: usize,
}

/// Category rollup for the whole run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Baseline variant.
    pub baseline: String,
    /// Candidate variant.
    pub candidate: String,
    /// Categories in name order; categories without any comparable group are left out.
    pub categories: Vec<CategorySummary>,
    /// Totals over every compared group.
    pub overall: Totals,
}

impl Summary {
    /// Total regressions across categories, including omitted ones.
    pub fn regression_count(&self) -> usize {
        self.categories
            .iter()
            .map(|c| c.regressions.len() + c.omitted_regressions)
            .sum()
    }
}

/// Builds the category rollup for the configured primary candidate.
pub fn summarize(analysis: &Analysis, config: &AnalysisConfig) -> Summary {
    let candidate = config.primary_candidate.as_str();
    let mut overall = Accumulator::default();
    let mut categories: BTreeMap<&str, (Accumulator, Vec<Regression>)> = BTreeMap::new();

    for group in &analysis.groups {
        let (Some(base), Some(cand)) = (group.variant(&analysis.baseline), group.variant(candidate))
        else {
            continue;
        };

        overall.add(base, cand);
        let (acc, regressions) = categories.entry(group.group.category.as_str()).or_default();
        acc.add(base, cand);

        if cand.mean_ns >= base.mean_ns {
            let slower_by_pct = -delta_pct(base.mean_ns, cand.mean_ns);
            regressions.push(Regression {
                group: group.group.clone(),
                slower_by_pct,
                baseline_ns: base.mean_ns,
                candidate_ns: cand.mean_ns,
                severity: Severity::from_slower_pct(slower_by_pct),
            });
        }
    }

    let categories = categories
        .into_iter()
        .map(|(category, (acc, mut regressions))| {
            regressions.sort_by(|a, b| {
                b.slower_by_pct
                    .total_cmp(&a.slower_by_pct)
                    .then_with(|| a.group.cmp(&b.group))
            });
            let omitted_regressions = regressions.len().saturating_sub(config.regression_limit);
            regressions.truncate(config.regression_limit);
            CategorySummary {
                category: category.to_string(),
                totals: acc.finish(),
                regressions,
                omitted_regressions,
            }
        })
        .collect();

    Summary {
        baseline: analysis.baseline.clone(),
        candidate: candidate.to_string(),
        categories,
        overall: overall.finish(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyze;

    const OUTPUT: &str = "\
BenchmarkEmail/Match/Input[0]/stdlib-8    1000   100 ns/op   64 B/op   2 allocs/op
BenchmarkEmail/Match/Input[0]/regengo-8   1000    50 ns/op   32 B/op   1 allocs/op
BenchmarkGreedy/Match/Input[0]/stdlib-8   1000   100 ns/op    0 B/op   0 allocs/op
BenchmarkGreedy/Match/Input[0]/regengo-8  1000   200 ns/op    0 B/op   0 allocs/op
BenchmarkLazy/Match/Input[0]/stdlib-8     1000   100 ns/op    0 B/op   0 allocs/op
BenchmarkLazy/Match/Input[0]/regengo-8    1000   110 ns/op    0 B/op   0 allocs/op
BenchmarkDate/FindAll/Input[0]/stdlib-8   1000   300 ns/op  128 B/op   4 allocs/op
BenchmarkDate/FindAll/Input[0]/regengo-8  1000   100 ns/op    0 B/op   0 allocs/op
BenchmarkURL/FindAll/Input[0]/regengo-8   1000   100 ns/op    0 B/op   0 allocs/op
";

    fn summary(config: &AnalysisConfig) -> Summary {
        let analysis = analyze(OUTPUT.as_bytes(), config).unwrap();
        summarize(&analysis, config)
    }

    #[test]
    fn test_category_counts() {
        let summary = summary(&AnalysisConfig::default());
        assert_eq!(summary.categories.len(), 2);

        let find_all = &summary.categories[0];
        assert_eq!(find_all.category, "FindAll");
        assert_eq!(find_all.totals.compared, 1);
        assert_eq!(find_all.totals.candidate_faster, 1);
        assert!(find_all.regressions.is_empty());

        let matching = &summary.categories[1];
        assert_eq!(matching.category, "Match");
        assert_eq!(matching.totals.compared, 3);
        assert_eq!(matching.totals.candidate_faster, 1);
        assert_eq!(matching.totals.baseline_faster, 2);
    }

    #[test]
    fn test_category_means() {
        let summary = summary(&AnalysisConfig::default());
        let matching = &summary.categories[1].totals;
        assert_eq!(matching.baseline_mean_ns, 100.0);
        assert_eq!(matching.candidate_mean_ns, 120.0);
        assert_eq!(matching.time_delta_pct, -20.0);

        let find_all = &summary.categories[0].totals;
        assert_eq!(find_all.bytes_delta_pct, 100.0);
        assert_eq!(find_all.allocs_delta_pct, 100.0);
    }

    #[test]
    fn test_regressions_worst_first() {
        let summary = summary(&AnalysisConfig::default());
        let regressions = &summary.categories[1].regressions;
        assert_eq!(regressions.len(), 2);
        assert_eq!(regressions[0].group.subject, "Greedy");
        assert_eq!(regressions[0].slower_by_pct, 100.0);
        assert_eq!(regressions[0].severity, Severity::Severe);
        assert_eq!(regressions[1].group.subject, "Lazy");
        assert_eq!(regressions[1].severity, Severity::Minor);
        assert_eq!(summary.regression_count(), 2);
    }

    #[test]
    fn test_regression_limit() {
        let config = AnalysisConfig::default().with_regression_limit(1);
        let summary = summary(&config);
        let matching = &summary.categories[1];
        assert_eq!(matching.regressions.len(), 1);
        assert_eq!(matching.omitted_regressions, 1);
        assert_eq!(summary.regression_count(), 2);
    }

    #[test]
    fn test_overall_totals() {
        let summary = summary(&AnalysisConfig::default());
        assert_eq!(summary.overall.compared, 4);
        assert_eq!(summary.overall.candidate_faster, 2);
        assert_eq!(summary.overall.baseline_mean_ns, 150.0);
        assert_eq!(summary.overall.candidate_mean_ns, 115.0);
    }

    #[test]
    fn test_unknown_candidate_yields_empty_summary() {
        let config = AnalysisConfig::default().with_primary_candidate("missing");
        let summary = summary(&config);
        assert!(summary.categories.is_empty());
        assert_eq!(summary.overall, Totals::default());
    }

    #[test]
    fn test_json_shape() {
        let summary = summary(&AnalysisConfig::default());
        let json = serde_json::to_value(&summary).unwrap();
        let matching = &json["categories"][1];
        assert_eq!(matching["compared"], 3);
        assert_eq!(matching["regressions"][0]["severity"], "severe");
        assert_eq!(matching["regressions"][0]["group"]["subject"], "Greedy");
        assert!(matching["regressions"][0]["group"].get("template").is_none());
        assert_eq!(json["overall"]["candidate_faster"], 2);
    }

    #[test]
    fn test_severity_thresholds() {
        assert_eq!(Severity::from_slower_pct(0.0), Severity::Minor);
        assert_eq!(Severity::from_slower_pct(14.9), Severity::Minor);
        assert_eq!(Severity::from_slower_pct(15.0), Severity::Moderate);
        assert_eq!(Severity::from_slower_pct(50.0), Severity::Severe);
        assert_eq!(Severity::Severe.as_str(), "severe");
    }
}
