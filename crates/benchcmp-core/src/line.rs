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

//! Benchmark line recognition.
//!
//! Classifies one line of benchmark output and extracts its measurements.
//! The grammar is fixed:
//!
//! ```text
//! <name>[-<procs>]  <iterations>  <ns> ns/op  [<mb> MB/s]  [<bytes> B/op]  [<allocs> allocs/op]
//! ```
//!
//! Lines that do not match are not errors; most benchmark logs are dominated
//! by noise (`PASS`, `goos: linux`, package headers) and those lines are
//! skipped silently.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

static BENCH_LINE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"^(\S+?)(?:-(\d+))?\s+(\d+)\s+([\d.]+)\s+ns/op",
        r"(?:\s+[\d.]+\s+MB/s)?",
        r"(?:\s+(\d+)\s+B/op)?",
        r"(?:\s+(\d+)\s+allocs/op)?",
    ))
    .expect("benchmark line grammar is a valid regex")
});

/// One measured data point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RawSample {
    /// Full benchmark name with the CPU-count suffix removed.
    pub identifier: String,
    /// CPU-count suffix that was attached to the name, if any.
    pub procs: Option<u32>,
    /// Iterations of the timed loop.
    pub iterations: u64,
    /// Nanoseconds per operation.
    pub ns_per_op: f64,
    /// Bytes allocated per operation.
    pub bytes_per_op: u64,
    /// Allocations per operation.
    pub allocs_per_op: u64,
}

impl RawSample {
    /// Creates a time-only sample with no memory figures.
    pub fn new(identifier: impl Into<String>, iterations: u64, ns_per_op: f64) -> Self {
        Self {
            identifier: identifier.into(),
            procs: None,
            iterations,
            ns_per_op,
            bytes_per_op: 0,
            allocs_per_op: 0,
        }
    }

    /// Sets the memory figures.
    pub fn with_memory(mut self, bytes_per_op: u64, allocs_per_op: u64) -> Self {
        self.bytes_per_op = bytes_per_op;
        self.allocs_per_op = allocs_per_op;
        self
    }

    /// Sets the CPU-count suffix.
    pub fn with_procs(mut self, procs: u32) -> Self {
        self.procs = Some(procs);
        self
    }
}

/// Renders the sample as a benchmark line that [`parse_line`] accepts.
impl fmt::Display for RawSample {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.identifier)?;
        if let Some(procs) = self.procs {
            write!(f, "-{}", procs)?;
        }
        write!(
            f,
            "\t{}\t{} ns/op\t{} B/op\t{} allocs/op",
            self.iterations, self.ns_per_op, self.bytes_per_op, self.allocs_per_op
        )
    }
}

/// Parses one line of benchmark output.
///
/// Returns `None` when the line is not a measurement line. Missing memory
/// columns default to `0`, and a numeric token that fails to convert also
/// becomes `0` so one bad line never aborts a run.
///
/// # Examples
///
/// ```
/// use benchcmp_core::line::parse_line;
///
/// let line = "BenchmarkDateCapture/Match/Input[0]/stdlib-12  16418577  72.75 ns/op  0 B/op  0 allocs/op";
/// let sample = parse_line(line).unwrap();
/// assert_eq!(sample.identifier, "BenchmarkDateCapture/Match/Input[0]/stdlib");
/// assert_eq!(sample.procs, Some(12));
/// assert_eq!(sample.ns_per_op, 72.75);
///
/// assert!(parse_line("PASS").is_none());
/// ```
pub fn parse_line(line: &str) -> Option<RawSample> {
    let caps = BENCH_LINE.captures(line.trim_end())?;

    let identifier = caps[1].to_string();
    let procs = caps.get(2).map(|m| number::<u32>(m.as_str(), "procs"));
    let iterations = number::<u64>(&caps[3], "iterations");
    let ns_per_op = match caps[4].parse::<f64>() {
        Ok(ns) if ns.is_finite() => ns,
        _ => {
            debug!(token = &caps[4], "unparseable ns/op value, using 0");
            0.0
        }
    };
    let bytes_per_op = caps.get(5).map_or(0, |m| number(m.as_str(), "B/op"));
    let allocs_per_op = caps.get(6).map_or(0, |m| number(m.as_str(), "allocs/op"));

    Some(RawSample {
        identifier,
        procs,
        iterations,
        ns_per_op,
        bytes_per_op,
        allocs_per_op,
    })
}

fn number<T: FromStr + Default>(token: &str, field: &'static str) -> T {
    token.parse().unwrap_or_else(|_| {
        debug!(token, field, "unparseable integer, using 0");
        T::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_line() {
        let line = "BenchmarkDateCapture/Match/Input[0]/stdlib-12  \t16418577\t        72.75 ns/op\t       0 B/op\t       0 allocs/op";
        let sample = parse_line(line).unwrap();
        assert_eq!(sample.identifier, "BenchmarkDateCapture/Match/Input[0]/stdlib");
        assert_eq!(sample.procs, Some(12));
        assert_eq!(sample.iterations, 16418577);
        assert_eq!(sample.ns_per_op, 72.75);
        assert_eq!(sample.bytes_per_op, 0);
        assert_eq!(sample.allocs_per_op, 0);
    }

    #[test]
    fn test_parse_memory_columns() {
        let line = "BenchmarkEmail/Match/Input[1]/regengo-8   1000   1534 ns/op   96 B/op   3 allocs/op";
        let sample = parse_line(line).unwrap();
        assert_eq!(sample.ns_per_op, 1534.0);
        assert_eq!(sample.bytes_per_op, 96);
        assert_eq!(sample.allocs_per_op, 3);
    }

    #[test]
    fn test_time_only_line() {
        let sample = parse_line("BenchmarkEmail/Match/Input[0]/stdlib-4  500  10 ns/op").unwrap();
        assert_eq!(sample.ns_per_op, 10.0);
        assert_eq!(sample.bytes_per_op, 0);
        assert_eq!(sample.allocs_per_op, 0);
    }

    #[test]
    fn test_throughput_column_is_skipped() {
        let line = "BenchmarkURL/Match/Input[0]/stdlib-8  2000  650.5 ns/op  120.30 MB/s  48 B/op  1 allocs/op";
        let sample = parse_line(line).unwrap();
        assert_eq!(sample.ns_per_op, 650.5);
        assert_eq!(sample.bytes_per_op, 48);
        assert_eq!(sample.allocs_per_op, 1);
    }

    #[test]
    fn test_no_procs_suffix() {
        let sample = parse_line("BenchmarkEmail/Match/Input[0]/stdlib  100  5.5 ns/op").unwrap();
        assert_eq!(sample.identifier, "BenchmarkEmail/Match/Input[0]/stdlib");
        assert_eq!(sample.procs, None);
    }

    #[test]
    fn test_hyphenated_variant_keeps_name() {
        let line = "BenchmarkEmail/Match/Input[0]/regengo-v2-16  100  5 ns/op";
        let sample = parse_line(line).unwrap();
        assert_eq!(sample.identifier, "BenchmarkEmail/Match/Input[0]/regengo-v2");
        assert_eq!(sample.procs, Some(16));
    }

    #[test]
    fn test_noise_lines_are_skipped() {
        for line in [
            "",
            "PASS",
            "goos: darwin",
            "goarch: arm64",
            "pkg: github.com/example/bench",
            "cpu: Apple M4 Pro",
            "ok  \tgithub.com/example/bench\t12.345s",
            "--- FAIL: BenchmarkBroken",
            "BenchmarkOnlyName-8",
        ] {
            assert!(parse_line(line).is_none(), "{line:?} should not match");
        }
    }

    #[test]
    fn test_malformed_number_degrades_to_zero() {
        let sample = parse_line("BenchmarkX/Match/Input[0]/stdlib-8  100  1.2.3 ns/op  7 B/op");
        let sample = sample.unwrap();
        assert_eq!(sample.ns_per_op, 0.0);
        assert_eq!(sample.bytes_per_op, 7);

        let huge = "9".repeat(40);
        let line = format!("BenchmarkX/Match/Input[0]/stdlib-8  {huge}  3 ns/op");
        let sample = parse_line(&line).unwrap();
        assert_eq!(sample.iterations, 0);
        assert_eq!(sample.ns_per_op, 3.0);
    }

    #[test]
    fn test_display_reparses() {
        let sample = RawSample::new("BenchmarkEmail/Match/Input[0]/stdlib", 250, 123.456)
            .with_memory(32, 2)
            .with_procs(10);
        let line = sample.to_string();
        assert_eq!(parse_line(&line), Some(sample));
    }

    #[test]
    fn test_trailing_whitespace_and_crlf() {
        let sample = parse_line("BenchmarkX/Match/Input[0]/stdlib-2  10  4 ns/op  \r").unwrap();
        assert_eq!(sample.ns_per_op, 4.0);
    }
}
