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

//! Structured error types for the benchcmp CLI.

use benchcmp_core::BenchError;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by CLI commands.
///
/// `main` prints these as `Error: <message>` and exits with a failure code.
#[derive(Error, Debug)]
pub enum CliError {
    /// Reading the input or writing the report failed.
    #[error("I/O error for '{path}': {message}")]
    Io {
        /// Input path, or `<stdin>` / `<stdout>`
        path: PathBuf,
        /// The error message
        message: String,
    },

    /// The analysis pipeline rejected the input or configuration.
    #[error("Analysis error: {0}")]
    Analysis(#[from] BenchError),

    /// JSON serialization failed.
    #[error("JSON format error: {message}")]
    JsonFormat {
        /// The error message
        message: String,
    },

    /// Invalid input provided by the user.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl CliError {
    /// Create an I/O error with path context.
    ///
    /// ```rust
    /// use benchcmp_cli::error::CliError;
    /// use std::io;
    ///
    /// let err = CliError::io_error("bench.txt", io::Error::new(io::ErrorKind::NotFound, "gone"));
    /// assert!(err.to_string().contains("bench.txt"));
    /// ```
    pub fn io_error(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            message: source.to_string(),
        }
    }

    /// Create an invalid input error.
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(source: serde_json::Error) -> Self {
        Self::JsonFormat {
            message: source.to_string(),
        }
    }
}
