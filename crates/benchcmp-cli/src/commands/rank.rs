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

//! Rank command - every comparison ordered worst regression first

use super::{format_change, format_ratio, load, write_error, write_json, OutputFormat};
use crate::error::CliError;
use benchcmp_core::{AnalysisConfig, RankedComparison};
use colored::Colorize;
use std::io::{Read, Write};

/// Rank every candidate comparison by speedup ratio, ascending.
///
/// The slowest candidates (lowest ratio) come first; comparisons without a
/// ratio come last. `limit` keeps only the first entries.
///
/// # Errors
///
/// Returns `Err` if reading the input or writing the report fails, or if the
/// configuration is rejected.
pub fn rank<R: Read, W: Write>(
    input: R,
    out: &mut W,
    config: &AnalysisConfig,
    format: OutputFormat,
    limit: Option<usize>,
) -> Result<(), CliError> {
    let Some(analysis) = load(input, out, config)? else {
        return Ok(());
    };

    let mut ranked = analysis.ranked();
    if let Some(limit) = limit {
        ranked.truncate(limit);
    }

    match format {
        OutputFormat::Json => write_json(out, &ranked),
        OutputFormat::Text => write_text(out, &ranked, &analysis.baseline).map_err(write_error),
    }
}

fn write_text<W: Write>(
    out: &mut W,
    ranked: &[RankedComparison],
    baseline: &str,
) -> std::io::Result<()> {
    if ranked.is_empty() {
        return writeln!(out, "No group contains the {} baseline.", baseline);
    }

    writeln!(
        out,
        "{:>4}  {:<40} {:<20} {:>9} {:>8}",
        "#", "group", "variant", "ratio", "time"
    )?;
    for (i, entry) in ranked.iter().enumerate() {
        let cmp = &entry.comparison;
        let marker = match cmp.ratio {
            None => "-".normal(),
            Some(_) if cmp.faster_than_baseline => "+".green(),
            Some(_) => "!".red().bold(),
        };
        writeln!(
            out,
            "{:>4}  {:<40} {:<20} {:>9} {:>8} {}",
            i + 1,
            entry.group.to_string(),
            entry.variant,
            format_ratio(cmp.ratio),
            format_change(cmp.time_delta_pct),
            marker
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const OUTPUT: &str = "\
BenchmarkEmail/Match/Input[0]/stdlib-8          1000   100 ns/op
BenchmarkEmail/Match/Input[0]/regengo-8         1000    25 ns/op
BenchmarkEmail/Match/Input[0]/regengo_reuse-8   1000    20 ns/op
BenchmarkGreedy/Match/Input[0]/stdlib-8         1000   100 ns/op
BenchmarkGreedy/Match/Input[0]/regengo-8        1000   200 ns/op
BenchmarkLazy/Match/Input[0]/stdlib-8           1000   100 ns/op
BenchmarkLazy/Match/Input[0]/regengo-8          1000     0 ns/op
";

    fn run(format: OutputFormat, limit: Option<usize>) -> String {
        colored::control::set_override(false);
        let mut out = Vec::new();
        rank(OUTPUT.as_bytes(), &mut out, &AnalysisConfig::default(), format, limit).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_worst_first_not_comparable_last() {
        let json: serde_json::Value = serde_json::from_str(&run(OutputFormat::Json, None)).unwrap();
        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0]["group"]["subject"], "Greedy");
        assert_eq!(entries[0]["ratio"], 0.5);
        assert_eq!(entries[1]["variant"], "regengo");
        assert_eq!(entries[2]["variant"], "regengo_reuse");
        assert_eq!(entries[3]["group"]["subject"], "Lazy");
        assert!(entries[3]["ratio"].is_null());
    }

    #[test]
    fn test_limit_truncates() {
        let text = run(OutputFormat::Text, Some(1));
        assert!(text.contains("Greedy/Match"));
        assert!(text.contains("0.50x"));
        assert!(!text.contains("Email/Match"));
    }

    #[test]
    fn test_text_marks_not_comparable() {
        let text = run(OutputFormat::Text, None);
        let last = text.lines().last().unwrap();
        assert!(last.contains("Lazy/Match"));
        assert!(last.contains("n/a"));
    }
}
