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

//! Summary command - per-category rollup of the primary candidate

use super::{format_change, load, write_error, write_json, OutputFormat};
use crate::error::CliError;
use benchcmp_core::summary::{Severity, Summary, Totals};
use benchcmp_core::{summarize, AnalysisConfig};
use colored::{ColoredString, Colorize};
use std::io::{Read, Write};

/// Summarize the primary candidate against the baseline, per category.
///
/// # Errors
///
/// Returns `Err` if reading the input or writing the report fails, or if the
/// configuration is rejected.
pub fn summary<R: Read, W: Write>(
    input: R,
    out: &mut W,
    config: &AnalysisConfig,
    format: OutputFormat,
) -> Result<(), CliError> {
    let Some(analysis) = load(input, out, config)? else {
        return Ok(());
    };
    let summary = summarize(&analysis, config);

    match format {
        OutputFormat::Json => write_json(out, &summary),
        OutputFormat::Text => write_text(out, &summary).map_err(write_error),
    }
}

fn write_text<W: Write>(out: &mut W, summary: &Summary) -> std::io::Result<()> {
    writeln!(out, "Baseline:  {}", summary.baseline)?;
    writeln!(out, "Candidate: {}", summary.candidate)?;

    if summary.overall.compared == 0 {
        writeln!(out)?;
        writeln!(
            out,
            "No group contains both {} and {}.",
            summary.baseline, summary.candidate
        )?;
        return Ok(());
    }

    for category in &summary.categories {
        writeln!(out)?;
        writeln!(out, "{}", category.category.bold())?;
        write_totals(out, &category.totals, summary)?;

        if category.regressions.is_empty() {
            continue;
        }
        writeln!(out, "  regressions:")?;
        for r in &category.regressions {
            writeln!(
                out,
                "    [{}] {}: {:.1}% slower ({:.2} ns vs {:.2} ns)",
                severity_label(r.severity),
                r.group,
                r.slower_by_pct + 0.0,
                r.baseline_ns,
                r.candidate_ns
            )?;
        }
        if category.omitted_regressions > 0 {
            writeln!(out, "    ... and {} more", category.omitted_regressions)?;
        }
    }

    writeln!(out)?;
    writeln!(out, "{}", "Overall".bold())?;
    write_totals(out, &summary.overall, summary)
}

fn write_totals<W: Write>(out: &mut W, totals: &Totals, summary: &Summary) -> std::io::Result<()> {
    let (base, cand) = (&summary.baseline, &summary.candidate);
    writeln!(
        out,
        "  compared: {} ({} faster: {}, {} faster: {})",
        totals.compared, cand, totals.candidate_faster, base, totals.baseline_faster
    )?;
    writeln!(
        out,
        "  time:     {} {:.2} ns, {} {:.2} ns ({})",
        base,
        totals.baseline_mean_ns,
        cand,
        totals.candidate_mean_ns,
        format_change(totals.time_delta_pct)
    )?;
    writeln!(
        out,
        "  memory:   {} {:.1} B, {} {:.1} B ({})",
        base,
        totals.baseline_mean_bytes,
        cand,
        totals.candidate_mean_bytes,
        format_change(totals.bytes_delta_pct)
    )?;
    writeln!(
        out,
        "  allocs:   {} {:.1}, {} {:.1} ({})",
        base,
        totals.baseline_mean_allocs,
        cand,
        totals.candidate_mean_allocs,
        format_change(totals.allocs_delta_pct)
    )
}

fn severity_label(severity: Severity) -> ColoredString {
    match severity {
        Severity::Minor => severity.as_str().yellow(),
        Severity::Moderate => severity.as_str().red(),
        Severity::Severe => severity.as_str().red().bold(),
    }
}
