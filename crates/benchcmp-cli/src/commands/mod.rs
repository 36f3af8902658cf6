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

//! CLI command implementations
//!
//! Commands take any reader and writer so they can be driven from standard
//! streams by the binary and from byte buffers in tests.

mod aggregate;
mod rank;
mod summary;

pub use aggregate::aggregate;
pub use rank::rank;
pub use summary::summary;

use crate::error::CliError;
use benchcmp_core::{analyze, Analysis, AnalysisConfig};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::str::FromStr;
use tracing::debug;

/// Notice printed when the input holds no benchmark lines.
pub const NO_RESULTS: &str = "No benchmark results found.";

const STDOUT: &str = "<stdout>";

/// Report rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable tables
    Text,
    /// Pretty-printed JSON
    Json,
}

impl FromStr for OutputFormat {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            other => Err(CliError::invalid_input(format!(
                "unknown output format '{}' (expected text or json)",
                other
            ))),
        }
    }
}

/// Opens a benchmark output file, or standard input for `None` and `"-"`.
pub fn open_input(path: Option<&str>) -> Result<Box<dyn Read>, CliError> {
    match path {
        None | Some("-") => {
            debug!("reading benchmark output from stdin");
            Ok(Box::new(io::stdin().lock()))
        }
        Some(path) => {
            debug!(path, "reading benchmark output from file");
            let file = File::open(path).map_err(|e| CliError::io_error(path, e))?;
            Ok(Box::new(BufReader::new(file)))
        }
    }
}

/// Runs the analysis, returning `None` after printing the notice when the
/// input held no results.
fn load<R: Read, W: Write>(
    input: R,
    out: &mut W,
    config: &AnalysisConfig,
) -> Result<Option<Analysis>, CliError> {
    let analysis = analyze(input, config)?;
    if analysis.is_empty() {
        writeln!(out, "{}", NO_RESULTS).map_err(write_error)?;
        return Ok(None);
    }
    Ok(Some(analysis))
}

fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<(), CliError> {
    let json = serde_json::to_string_pretty(value)?;
    writeln!(out, "{}", json).map_err(write_error)
}

fn write_error(e: io::Error) -> CliError {
    CliError::io_error(STDOUT, e)
}

/// Formats a speedup ratio, `n/a` when not comparable.
fn format_ratio(ratio: Option<f64>) -> String {
    match ratio {
        Some(r) => format!("{:.2}x", r),
        None => "n/a".to_string(),
    }
}

/// Formats a baseline-relative reduction as the candidate's signed change.
///
/// A reduction of 75 % renders as `-75.0%`.
fn format_change(delta_pct: f64) -> String {
    format!("{:+.1}%", 0.0 - delta_pct)
}
