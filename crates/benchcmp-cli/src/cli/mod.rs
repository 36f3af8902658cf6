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

//! CLI command definitions and argument parsing.
//!
//! Every command shares the [`AnalysisArgs`] block (input, output format and
//! the variant selection) and adds its own options on top.

use crate::commands::{self, OutputFormat};
use crate::error::CliError;
use benchcmp_core::config::{DEFAULT_BASELINE, DEFAULT_REGRESSION_LIMIT};
use benchcmp_core::name::DEFAULT_TEMPLATE_CATEGORY;
use benchcmp_core::AnalysisConfig;
use clap::{Args, Subcommand};

/// Arguments common to every analysis command.
#[derive(Args, Debug, Clone)]
pub struct AnalysisArgs {
    /// Benchmark output file (omit or use "-" for standard input)
    #[arg(value_name = "FILE")]
    pub input: Option<String>,

    /// Output format (text, json)
    #[arg(short, long, default_value = "text")]
    pub format: String,

    /// Variant every other variant is compared against
    #[arg(short, long, default_value = DEFAULT_BASELINE)]
    pub baseline: String,

    /// Primary candidate variant, listed first after the baseline
    /// (defaults to the first known variant other than the baseline)
    #[arg(short, long)]
    pub candidate: Option<String>,

    /// Category whose benchmark names carry a template segment
    #[arg(long, default_value = DEFAULT_TEMPLATE_CATEGORY)]
    pub template_category: String,
}

impl AnalysisArgs {
    /// Builds the analysis configuration these arguments describe.
    pub fn config(&self) -> AnalysisConfig {
        let config = AnalysisConfig::new(self.baseline.as_str())
            .with_template_category(self.template_category.as_str());
        match &self.candidate {
            Some(candidate) => config.with_primary_candidate(candidate.as_str()),
            None => config,
        }
    }

    /// Parses the `--format` value.
    pub fn output_format(&self) -> Result<OutputFormat, CliError> {
        self.format.parse()
    }
}

/// Top-level CLI commands.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use benchcmp_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Subcommand)]
pub enum Commands {
    /// Per-group statistics and comparisons against the baseline
    ///
    /// Reduces every variant of every benchmark group to count, mean, median,
    /// min, max and standard deviation, then compares each candidate with the
    /// baseline variant of the same group.
    Aggregate {
        #[command(flatten)]
        args: AnalysisArgs,
    },

    /// Per-category rollup of the primary candidate against the baseline
    ///
    /// Counts the groups where each side wins, averages time, memory and
    /// allocations per category and lists the slowest regressions.
    Summary {
        #[command(flatten)]
        args: AnalysisArgs,

        /// Maximum regressions listed per category
        #[arg(short, long, default_value_t = DEFAULT_REGRESSION_LIMIT)]
        limit: usize,
    },

    /// Every comparison ranked worst regression first
    Rank {
        #[command(flatten)]
        args: AnalysisArgs,

        /// Show only the first N entries
        #[arg(short, long)]
        limit: Option<usize>,
    },
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - The input cannot be opened or read
    /// - The output format or the variant selection is invalid
    /// - Writing the report fails
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Aggregate { args } => {
                let format = args.output_format()?;
                let config = args.config();
                let input = commands::open_input(args.input.as_deref())?;
                commands::aggregate(input, &mut std::io::stdout().lock(), &config, format)
            }
            Commands::Summary { args, limit } => {
                let format = args.output_format()?;
                let config = args.config().with_regression_limit(limit);
                let input = commands::open_input(args.input.as_deref())?;
                commands::summary(input, &mut std::io::stdout().lock(), &config, format)
            }
            Commands::Rank { args, limit } => {
                let format = args.output_format()?;
                let config = args.config();
                let input = commands::open_input(args.input.as_deref())?;
                commands::rank(input, &mut std::io::stdout().lock(), &config, format, limit)
            }
        }
    }
}
