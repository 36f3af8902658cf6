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

//! Benchcmp command line interface

use benchcmp_cli::cli::Commands;
use clap::Parser;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Benchcmp - compare benchmark implementations against a baseline
///
/// Reads raw benchmark output (as printed by `go test -bench`) and reports
/// per-group statistics, category summaries and rankings of every candidate
/// against the baseline implementation.
///
/// # Examples
///
/// ```bash
/// # Per-group aggregates and comparisons
/// go test -bench=. -benchmem ./... | benchcmp aggregate
///
/// # Category rollup as JSON
/// benchcmp summary bench.txt --format json
///
/// # Worst regressions first
/// benchcmp rank bench.txt --limit 5
/// ```
#[derive(Parser)]
#[command(name = "benchcmp")]
#[command(author, version, about = "Benchcmp - benchmark comparison toolkit", long_about = None)]
struct Cli {
    /// Enable debug logging on stderr (RUST_LOG takes precedence)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "benchcmp_core=debug,benchcmp_cli=debug"
    } else {
        "benchcmp_core=warn,benchcmp_cli=warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command.execute() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
