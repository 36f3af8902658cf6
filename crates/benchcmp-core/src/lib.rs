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

//! Benchmark output analysis.
//!
//! Turns raw benchmark text (one line per measured operation) into per-group
//! statistics and baseline comparisons.
//!
//! ## Pipeline
//!
//! - [`line`]: recognizes measurement lines and extracts their figures
//! - [`name`]: splits hierarchical benchmark names into group, input and variant
//! - [`store`]: files samples by group and variant
//! - [`aggregate`]: reduces each variant's samples to summary statistics
//! - [`compare`]: relates candidate aggregates to the baseline
//! - [`analysis`]: drives the whole pass over an input stream
//! - [`summary`]: per-category rollup and regression list
//!
//! ## Usage
//!
//! ```bash
//! go test -bench=. -benchmem ./... | benchcmp summary
//! ```
//!
//! ```
//! use benchcmp_core::{analyze, AnalysisConfig};
//!
//! let input = "BenchmarkEmail/Match/Input[0]/stdlib-8  1000  80 ns/op\n\
//!              BenchmarkEmail/Match/Input[0]/regengo-8  1000  20 ns/op\n";
//! let analysis = analyze(input.as_bytes(), &AnalysisConfig::default())?;
//! assert_eq!(analysis.ranked()[0].comparison.ratio, Some(4.0));
//! # Ok::<(), benchcmp_core::BenchError>(())
//! ```

pub mod aggregate;
pub mod analysis;
pub mod compare;
pub mod config;
pub mod error;
pub mod line;
pub mod name;
pub mod reader;
pub mod store;
pub mod summary;

pub use aggregate::{reduce, AggregateStat};
pub use analysis::{
    analyze, ingest, Analysis, CandidateComparison, GroupAnalysis, IngestStats, VariantStat,
};
pub use compare::{compare, rank_by_ratio, Comparison, RankedComparison};
pub use config::AnalysisConfig;
pub use error::{BenchError, Result};
pub use line::{parse_line, RawSample};
pub use name::{decompose, BenchmarkKey, GroupKey, NameError, NameRules};
pub use store::RecordStore;
pub use summary::{summarize, CategorySummary, Regression, Severity, Summary, Totals};
