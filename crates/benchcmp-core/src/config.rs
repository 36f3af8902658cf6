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

//! Centralized analysis configuration.
//!
//! Names the baseline variant, the preferred ordering of candidate variants,
//! and the identifier grammar used by the name decomposer.

use crate::error::{BenchError, Result};
use crate::name::NameRules;

/// Default baseline variant.
pub const DEFAULT_BASELINE: &str = "stdlib";

/// Default primary candidate used by the category summary.
pub const DEFAULT_CANDIDATE: &str = "regengo";

/// Default ordering of candidate variants after the baseline.
pub const DEFAULT_VARIANT_ORDER: &[&str] = &[
    "regengo",
    "regengo_runtime",
    "regengo_reuse",
    "regengo_append",
];

/// Default number of regressions listed per category.
pub const DEFAULT_REGRESSION_LIMIT: usize = 10;

/// Analysis configuration.
///
/// # Example
///
/// ```
/// use benchcmp_core::config::AnalysisConfig;
///
/// let config = AnalysisConfig::default()
///     .with_baseline("pcre")
///     .with_primary_candidate("rust_regex")
///     .with_regression_limit(5);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.baseline, "pcre");
/// ```
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Identifier grammar for the name decomposer.
    pub names: NameRules,
    /// Variant every other variant in a group is compared against.
    pub baseline: String,
    /// Candidate ordering after the baseline; unknown variants follow, sorted.
    pub variant_order: Vec<String>,
    /// Candidate the category summary compares against the baseline.
    pub primary_candidate: String,
    /// Maximum regressions listed per category in the summary.
    pub regression_limit: usize,
}

impl AnalysisConfig {
    /// Creates a configuration with the given baseline and default settings.
    ///
    /// The primary candidate is the first entry of the default variant order
    /// that is not the baseline.
    pub fn new(baseline: impl Into<String>) -> Self {
        let mut config = Self {
            names: NameRules::default(),
            baseline: baseline.into(),
            variant_order: DEFAULT_VARIANT_ORDER.iter().map(|v| v.to_string()).collect(),
            primary_candidate: DEFAULT_CANDIDATE.to_string(),
            regression_limit: DEFAULT_REGRESSION_LIMIT,
        };
        config.reselect_candidate();
        config
    }

    /// Sets the baseline variant.
    ///
    /// A primary candidate equal to the new baseline is replaced by the first
    /// other variant of the order.
    pub fn with_baseline(mut self, baseline: impl Into<String>) -> Self {
        self.baseline = baseline.into();
        self.reselect_candidate();
        self
    }

    fn reselect_candidate(&mut self) {
        if self.primary_candidate != self.baseline {
            return;
        }
        if let Some(next) = self.variant_order.iter().find(|v| **v != self.baseline) {
            self.primary_candidate = next.clone();
        }
    }

    /// Sets the primary candidate and moves it to the front of the variant order.
    pub fn with_primary_candidate(mut self, candidate: impl Into<String>) -> Self {
        let candidate = candidate.into();
        self.variant_order.retain(|v| *v != candidate);
        self.variant_order.insert(0, candidate.clone());
        self.primary_candidate = candidate;
        self
    }

    /// Replaces the candidate ordering.
    pub fn with_variant_order<I, S>(mut self, order: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.variant_order = order.into_iter().map(Into::into).collect();
        self
    }

    /// Sets the category whose identifiers carry a template segment.
    pub fn with_template_category(mut self, category: impl Into<String>) -> Self {
        self.names.template_category = category.into();
        self
    }

    /// Sets the leading marker every identifier must carry.
    pub fn with_marker(mut self, marker: impl Into<String>) -> Self {
        self.names.marker = marker.into();
        self
    }

    /// Sets the per-category regression list length.
    pub fn with_regression_limit(mut self, limit: usize) -> Self {
        self.regression_limit = limit;
        self
    }

    /// Sort rank of a variant: baseline first, then the configured order,
    /// then everything else.
    pub fn variant_rank(&self, variant: &str) -> usize {
        if variant == self.baseline {
            return 0;
        }
        self.variant_order
            .iter()
            .position(|v| v == variant)
            .map_or(usize::MAX, |pos| pos + 1)
    }

    /// Checks the configuration for values that would make every group
    /// incomparable.
    pub fn validate(&self) -> Result<()> {
        if self.names.marker.is_empty() {
            return Err(BenchError::invalid_config("marker", "must not be empty"));
        }
        if self.baseline.is_empty() {
            return Err(BenchError::invalid_config("baseline", "must not be empty"));
        }
        if self.primary_candidate == self.baseline {
            return Err(BenchError::invalid_config(
                "candidate",
                format!("'{}' is already the baseline", self.baseline),
            ));
        }
        Ok(())
    }
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASELINE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AnalysisConfig::default();
        assert_eq!(config.baseline, "stdlib");
        assert_eq!(config.primary_candidate, "regengo");
        assert_eq!(config.names.marker, "Benchmark");
        assert_eq!(config.names.template_category, "Replace");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_variant_rank() {
        let config = AnalysisConfig::default();
        assert_eq!(config.variant_rank("stdlib"), 0);
        assert_eq!(config.variant_rank("regengo"), 1);
        assert_eq!(config.variant_rank("regengo_append"), 4);
        assert_eq!(config.variant_rank("something_else"), usize::MAX);
    }

    #[test]
    fn test_primary_candidate_moves_to_front() {
        let config = AnalysisConfig::default().with_primary_candidate("regengo_reuse");
        assert_eq!(config.variant_rank("regengo_reuse"), 1);
        assert_eq!(config.variant_rank("regengo"), 2);
        assert_eq!(config.variant_order.len(), DEFAULT_VARIANT_ORDER.len());
    }

    #[test]
    fn test_validate_rejects_candidate_equal_to_baseline() {
        let config = AnalysisConfig::default().with_primary_candidate("stdlib");
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("candidate"));
    }

    #[test]
    fn test_baseline_from_variant_order_picks_next_candidate() {
        let config = AnalysisConfig::new("regengo");
        assert_eq!(config.primary_candidate, "regengo_runtime");
        assert!(config.validate().is_ok());

        let config = AnalysisConfig::default().with_baseline("regengo");
        assert_eq!(config.primary_candidate, "regengo_runtime");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_explicit_candidate_survives_unrelated_baseline() {
        let config = AnalysisConfig::default()
            .with_primary_candidate("regengo_reuse")
            .with_baseline("pcre");
        assert_eq!(config.primary_candidate, "regengo_reuse");
    }

    #[test]
    fn test_validate_rejects_empty_values() {
        assert!(AnalysisConfig::default().with_baseline("").validate().is_err());
        assert!(AnalysisConfig::default().with_marker("").validate().is_err());
    }
}
