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

//! Error types for benchmark analysis.
//!
//! Per-line anomalies (noise lines, unparseable names, malformed numbers) are
//! absorbed where they happen and never surface here. The only failures that
//! reach a caller are reading the input stream, an invalid configuration, and
//! the explicit "nothing found" signal.

use std::io;
use thiserror::Error;

/// Result type for analysis operations.
pub type Result<T> = std::result::Result<T, BenchError>;

/// Errors that can occur while analyzing benchmark output.
#[derive(Error, Debug)]
pub enum BenchError {
    /// Reading the input stream failed.
    #[error("I/O error reading benchmark output: {0}")]
    Io(#[from] io::Error),

    /// The input contained no parseable benchmark records.
    ///
    /// This is a reportable condition rather than a crash: callers usually
    /// print a notice and exit successfully.
    #[error("no benchmark results found in input")]
    NoResults,

    /// A configuration parameter was rejected by [`AnalysisConfig::validate`].
    ///
    /// [`AnalysisConfig::validate`]: crate::config::AnalysisConfig::validate
    #[error("invalid configuration parameter '{parameter}': {reason}")]
    InvalidConfig {
        /// Parameter name
        parameter: String,
        /// Reason for invalidity
        reason: String,
    },
}

impl BenchError {
    /// Create an [`BenchError::InvalidConfig`] error.
    pub fn invalid_config(parameter: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            parameter: parameter.into(),
            reason: reason.into(),
        }
    }

    /// Returns `true` for the empty-result signal.
    #[inline]
    pub fn is_no_results(&self) -> bool {
        matches!(self, Self::NoResults)
    }
}
