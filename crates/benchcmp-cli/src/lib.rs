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

//! Benchcmp CLI library for command-line parsing and execution.
//!
//! Every command reads benchmark output from a file or standard input, runs
//! it through [`benchcmp_core::analyze`] and renders the result as a text
//! table or JSON.
//!
//! # Commands
//!
//! - **aggregate**: per-group statistics for every variant plus comparisons
//!   against the baseline
//! - **summary**: per-category rollup of baseline vs primary candidate with
//!   the slowest regressions listed
//! - **rank**: every comparison ordered worst regression first
//!
//! # Examples
//!
//! ```
//! use benchcmp_cli::commands::{aggregate, OutputFormat};
//! use benchcmp_core::AnalysisConfig;
//!
//! # fn main() -> Result<(), benchcmp_cli::error::CliError> {
//! let input = "BenchmarkEmail/Match/Input[0]/stdlib-8   1000  80 ns/op\n\
//!              BenchmarkEmail/Match/Input[0]/regengo-8  1000  20 ns/op\n";
//! let mut out = Vec::new();
//! aggregate(input.as_bytes(), &mut out, &AnalysisConfig::default(), OutputFormat::Json)?;
//! assert!(String::from_utf8_lossy(&out).contains("\"ratio\": 4.0"));
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! Commands return `Result<(), CliError>`. Input without any benchmark lines
//! is not an error: the commands print a notice and succeed.

pub mod cli;
pub mod commands;
pub mod error;
