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

//! End-to-end analysis pipeline.
//!
//! ```text
//! Read -> LineReader -> parse_line -> decompose -> RecordStore -> reduce -> compare -> Analysis
//! ```
//!
//! Ingestion is a single sequential pass. Once the store is complete it is
//! only read; groups are reduced independently and in parallel, then
//! collected back in group order.

use crate::aggregate::{reduce, AggregateStat};
use crate::compare::{compare, rank_by_ratio, Comparison, RankedComparison};
use crate::config::AnalysisConfig;
use crate::error::{BenchError, Result};
use crate::line::parse_line;
use crate::name::{decompose, GroupKey, NameRules};
use crate::reader::LineReader;
use crate::store::{RecordStore, VariantSamples};
use rayon::prelude::*;
use serde::Serialize;
use std::io::Read;
use tracing::{debug, info};

/// Diagnostic counters from one ingestion pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct IngestStats {
    /// Lines read.
    pub lines: usize,
    /// Lines matching the benchmark grammar.
    pub matched: usize,
    /// Matching lines whose name did not decompose.
    pub unparseable: usize,
    /// Samples filed into the store.
    pub samples: usize,
}

/// Reads benchmark output into a fresh store.
///
/// Noise lines are skipped and identifiers that do not decompose are counted
/// and dropped. Only a read failure is an error.
pub fn ingest<R: Read>(input: R, rules: &NameRules) -> Result<(RecordStore, IngestStats)> {
    let mut store = RecordStore::new();
    let mut stats = IngestStats::default();

    for line in LineReader::new(input) {
        let (line_number, text) = line?;
        stats.lines += 1;

        let Some(sample) = parse_line(&text) else {
            continue;
        };
        stats.matched += 1;

        match decompose(&sample.identifier, rules) {
            Ok(key) => {
                store.insert(key, sample);
                stats.samples += 1;
            }
            Err(e) => {
                debug!(
                    line = line_number,
                    identifier = %sample.identifier,
                    error = %e,
                    "dropping benchmark"
                );
                stats.unparseable += 1;
            }
        }
    }

    info!(
        lines = stats.lines,
        samples = stats.samples,
        unparseable = stats.unparseable,
        groups = store.len(),
        "ingested benchmark output"
    );
    Ok((store, stats))
}

/// Aggregate of one variant within a group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct VariantStat {
    /// Variant name.
    pub variant: String,
    /// Its aggregate.
    #[serde(flatten)]
    pub stat: AggregateStat,
}

/// A candidate's comparison against the group baseline.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CandidateComparison {
    /// Candidate variant.
    pub variant: String,
    /// Comparison against the baseline.
    #[serde(flatten)]
    pub comparison: Comparison,
}

/// Everything computed for one comparison group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupAnalysis {
    /// Group identity.
    pub group: GroupKey,
    /// Variant aggregates, baseline first.
    pub variants: Vec<VariantStat>,
    /// Candidate comparisons; empty when the baseline was never measured.
    pub comparisons: Vec<CandidateComparison>,
}

impl GroupAnalysis {
    fn build(group: &GroupKey, samples: &VariantSamples, config: &AnalysisConfig) -> Self {
        let mut variants: Vec<VariantStat> = samples
            .iter()
            .map(|(variant, samples)| VariantStat {
                variant: variant.clone(),
                stat: reduce(samples),
            })
            .collect();
        variants.sort_by(|a, b| {
            config
                .variant_rank(&a.variant)
                .cmp(&config.variant_rank(&b.variant))
                .then_with(|| a.variant.cmp(&b.variant))
        });

        let comparisons = match variants.iter().find(|v| v.variant == config.baseline) {
            Some(baseline) => variants
                .iter()
                .filter(|v| v.variant != config.baseline)
                .map(|candidate| CandidateComparison {
                    variant: candidate.variant.clone(),
                    comparison: compare(&baseline.stat, &candidate.stat),
                })
                .collect(),
            None => Vec::new(),
        };

        Self {
            group: group.clone(),
            variants,
            comparisons,
        }
    }

    /// Aggregate for a variant.
    pub fn variant(&self, name: &str) -> Option<&AggregateStat> {
        self.variants
            .iter()
            .find(|v| v.variant == name)
            .map(|v| &v.stat)
    }

    /// Comparison for a candidate variant.
    pub fn comparison(&self, variant: &str) -> Option<&Comparison> {
        self.comparisons
            .iter()
            .find(|c| c.variant == variant)
            .map(|c| &c.comparison)
    }
}

/// Result of one analysis run, handed to reporters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    /// Baseline variant the comparisons are against.
    pub baseline: String,
    /// Groups in key order.
    pub groups: Vec<GroupAnalysis>,
    /// Ingestion counters.
    pub stats: IngestStats,
}

impl Analysis {
    /// Reduces and compares every group of a completed store.
    pub fn from_store(store: &RecordStore, stats: IngestStats, config: &AnalysisConfig) -> Self {
        let buckets: Vec<_> = store.groups().collect();
        let groups = buckets
            .into_par_iter()
            .map(|(group, samples)| GroupAnalysis::build(group, samples, config))
            .collect();

        Self {
            baseline: config.baseline.clone(),
            groups,
            stats,
        }
    }

    /// Returns `true` when no samples were parsed.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Turns an empty analysis into [`BenchError::NoResults`].
    pub fn require_results(self) -> Result<Self> {
        if self.is_empty() {
            Err(BenchError::NoResults)
        } else {
            Ok(self)
        }
    }

    /// Group analysis by key.
    pub fn group(&self, key: &GroupKey) -> Option<&GroupAnalysis> {
        self.groups.iter().find(|g| &g.group == key)
    }

    /// Every comparison, worst regression first.
    pub fn ranked(&self) -> Vec<RankedComparison> {
        let mut ranked: Vec<RankedComparison> = self
            .groups
            .iter()
            .flat_map(|g| {
                g.comparisons.iter().map(move |c| RankedComparison {
                    group: g.group.clone(),
                    variant: c.variant.clone(),
                    comparison: c.comparison.clone(),
                })
            })
            .collect();
        rank_by_ratio(&mut ranked);
        ranked
    }
}

/// Runs the whole pipeline over one input stream.
///
/// An input without benchmark lines yields an empty [`Analysis`], not an
/// error; use [`Analysis::require_results`] to turn that into
/// [`BenchError::NoResults`].
///
/// # Examples
///
/// ```
/// use benchcmp_core::{analyze, AnalysisConfig, GroupKey};
///
/// let output = "\
/// goos: darwin
/// BenchmarkEmail/Match/Input[0]/stdlib-12   1000   100 ns/op   0 B/op   0 allocs/op
/// BenchmarkEmail/Match/Input[1]/stdlib-12   1000   120 ns/op   0 B/op   0 allocs/op
/// BenchmarkEmail/Match/Input[0]/regengo-12  1000    25 ns/op   0 B/op   0 allocs/op
/// BenchmarkEmail/Match/Input[1]/regengo-12  1000    30 ns/op   0 B/op   0 allocs/op
/// PASS
/// ";
///
/// let analysis = analyze(output.as_bytes(), &AnalysisConfig::default()).unwrap();
/// let group = analysis.group(&GroupKey::new("Email", "Match")).unwrap();
/// assert_eq!(group.variant("stdlib").unwrap().mean_ns, 110.0);
/// assert_eq!(group.comparison("regengo").unwrap().ratio, Some(4.0));
/// ```
pub fn analyze<R: Read>(input: R, config: &AnalysisConfig) -> Result<Analysis> {
    config.validate()?;
    let (store, stats) = ingest(input, &config.names)?;
    Ok(Analysis::from_store(&store, stats, config))
}
