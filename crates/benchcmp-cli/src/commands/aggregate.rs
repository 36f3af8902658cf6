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

//! Aggregate command - per-group statistics and baseline comparisons

use super::{format_change, format_ratio, load, write_error, write_json, OutputFormat};
use crate::error::CliError;
use benchcmp_core::{Analysis, AnalysisConfig, GroupAnalysis};
use colored::Colorize;
use std::io::{Read, Write};

/// Reduce benchmark output to per-group statistics and write the report.
///
/// Text output prints one table per group (baseline first, then the
/// configured candidate order) followed by each candidate's comparison with
/// the baseline. JSON output serializes the whole [`Analysis`].
///
/// # Errors
///
/// Returns `Err` if reading the input or writing the report fails, or if the
/// configuration is rejected.
pub fn aggregate<R: Read, W: Write>(
    input: R,
    out: &mut W,
    config: &AnalysisConfig,
    format: OutputFormat,
) -> Result<(), CliError> {
    let Some(analysis) = load(input, out, config)? else {
        return Ok(());
    };

    match format {
        OutputFormat::Json => write_json(out, &analysis),
        OutputFormat::Text => write_text(out, &analysis).map_err(write_error),
    }
}

fn write_text<W: Write>(out: &mut W, analysis: &Analysis) -> std::io::Result<()> {
    for group in &analysis.groups {
        write_group(out, group, &analysis.baseline)?;
        writeln!(out)?;
    }

    let stats = &analysis.stats;
    writeln!(
        out,
        "{} groups, {} samples from {} lines ({} unparseable names skipped)",
        analysis.groups.len(),
        stats.samples,
        stats.lines,
        stats.unparseable
    )
}

fn write_group<W: Write>(
    out: &mut W,
    group: &GroupAnalysis,
    baseline: &str,
) -> std::io::Result<()> {
    writeln!(out, "{}", group.group.to_string().bold())?;
    writeln!(
        out,
        "  {:<20} {:>7} {:>12} {:>12} {:>12} {:>12} {:>10} {:>8} {:>9}",
        "variant",
        "samples",
        "mean ns",
        "median ns",
        "min ns",
        "max ns",
        "stddev",
        "B/op",
        "allocs/op"
    )?;
    for v in &group.variants {
        let s = &v.stat;
        writeln!(
            out,
            "  {:<20} {:>7} {:>12.2} {:>12.2} {:>12.2} {:>12.2} {:>10.2} {:>8} {:>9}",
            v.variant,
            s.count,
            s.mean_ns,
            s.median_ns,
            s.min_ns,
            s.max_ns,
            s.std_dev_ns,
            s.mean_bytes,
            s.mean_allocs
        )?;
    }

    if group.comparisons.is_empty() {
        return Ok(());
    }

    writeln!(out, "  vs {}:", baseline)?;
    for c in &group.comparisons {
        let cmp = &c.comparison;
        let verdict = match cmp.ratio {
            None => "not comparable".yellow(),
            Some(_) if cmp.faster_than_baseline => "faster".green(),
            Some(_) => "slower".red(),
        };
        writeln!(
            out,
            "    {:<18} {:>9}  time {:>8}  memory {:>8}  allocs {:>8}  {}",
            c.variant,
            format_ratio(cmp.ratio),
            format_change(cmp.time_delta_pct),
            format_change(cmp.bytes_delta_pct),
            format_change(cmp.allocs_delta_pct),
            verdict
        )?;
    }
    Ok(())
}
