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

//! Hierarchical benchmark name decomposition.
//!
//! Benchmark identifiers encode their provenance as a path:
//!
//! ```text
//! Benchmark<subject>/<category>/<input>/<variant>
//! Benchmark<subject>/<category>/<template>/<input>/<variant>   (template category only)
//! ```
//!
//! The five-segment shape is selected by the literal category token, never by
//! the segment count alone. A shape/count mismatch is reported as
//! unparseable rather than guessed at.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Default leading marker on every identifier.
pub const DEFAULT_MARKER: &str = "Benchmark";

/// Default path separator.
pub const DEFAULT_SEPARATOR: char = '/';

/// Default category whose identifiers carry a template segment.
pub const DEFAULT_TEMPLATE_CATEGORY: &str = "Replace";

/// Grammar parameters for [`decompose`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRules {
    /// Marker that must prefix every identifier.
    pub marker: String,
    /// Path separator.
    pub separator: char,
    /// Category that uses the five-segment shape.
    pub template_category: String,
}

impl Default for NameRules {
    fn default() -> Self {
        Self {
            marker: DEFAULT_MARKER.to_string(),
            separator: DEFAULT_SEPARATOR,
            template_category: DEFAULT_TEMPLATE_CATEGORY.to_string(),
        }
    }
}

/// Why an identifier could not be decomposed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NameError {
    /// The identifier does not start with the required marker.
    #[error("identifier does not start with '{marker}'")]
    MissingMarker {
        /// Expected marker
        marker: String,
    },

    /// Fewer than four path segments.
    #[error("expected at least 4 segments, found {found}")]
    TooFewSegments {
        /// Segments present
        found: usize,
    },

    /// The segment count does not fit the shape implied by the category.
    #[error("category '{category}' expects {expected} segments, found {found}")]
    ShapeMismatch {
        /// Category token
        category: String,
        /// Segments the category's shape requires
        expected: usize,
        /// Segments present
        found: usize,
    },

    /// A path segment is empty.
    #[error("segment {index} is empty")]
    EmptySegment {
        /// Zero-based segment index
        index: usize,
    },
}

/// Identity of a comparison group: all variants in a group measured the
/// same workload and operation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct GroupKey {
    /// Thing being measured (a pattern or workload).
    pub subject: String,
    /// Kind of operation measured.
    pub category: String,
    /// Secondary parameter, present only for the template category.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub template: Option<String>,
}

impl GroupKey {
    /// Creates a group key without a template.
    pub fn new(subject: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            category: category.into(),
            template: None,
        }
    }

    /// Sets the template.
    pub fn with_template(mut self, template: impl Into<String>) -> Self {
        self.template = Some(template.into());
        self
    }
}

impl fmt::Display for GroupKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.subject, self.category)?;
        if let Some(template) = &self.template {
            write!(f, "/{}", template)?;
        }
        Ok(())
    }
}

/// Structural identity of one sample.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BenchmarkKey {
    /// Comparison group.
    pub group: GroupKey,
    /// Input fixture that produced the sample.
    pub input: String,
    /// Implementation or strategy that produced the sample.
    pub variant: String,
}

/// Decomposes an identifier (CPU suffix already stripped) into its key.
///
/// # Examples
///
/// ```
/// use benchcmp_core::name::{decompose, NameRules};
///
/// let rules = NameRules::default();
/// let key = decompose("BenchmarkDateCapture/Match/Input[0]/stdlib", &rules).unwrap();
/// assert_eq!(key.group.subject, "DateCapture");
/// assert_eq!(key.group.category, "Match");
/// assert_eq!(key.group.template, None);
/// assert_eq!(key.input, "Input[0]");
/// assert_eq!(key.variant, "stdlib");
///
/// let key = decompose(
///     "BenchmarkReplaceDate/Replace/Template[1]/Input[0]/regengo_append",
///     &rules,
/// )
/// .unwrap();
/// assert_eq!(key.group.template.as_deref(), Some("Template[1]"));
/// ```
pub fn decompose(identifier: &str, rules: &NameRules) -> Result<BenchmarkKey, NameError> {
    let path = identifier
        .strip_prefix(rules.marker.as_str())
        .ok_or_else(|| NameError::MissingMarker {
            marker: rules.marker.clone(),
        })?;

    let parts: Vec<&str> = path.split(rules.separator).collect();
    if parts.len() < 4 {
        return Err(NameError::TooFewSegments { found: parts.len() });
    }
    if let Some(index) = parts.iter().position(|p| p.is_empty()) {
        return Err(NameError::EmptySegment { index });
    }

    let category = parts[1];
    let expected = if category == rules.template_category { 5 } else { 4 };
    if parts.len() != expected {
        return Err(NameError::ShapeMismatch {
            category: category.to_string(),
            expected,
            found: parts.len(),
        });
    }

    let mut group = GroupKey::new(parts[0], category);
    let rest = if expected == 5 {
        group.template = Some(parts[2].to_string());
        &parts[3..]
    } else {
        &parts[2..]
    };

    Ok(BenchmarkKey {
        group,
        input: rest[0].to_string(),
        variant: rest[1].to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rules() -> NameRules {
        NameRules::default()
    }

    #[test]
    fn test_four_segment_shape() {
        let key = decompose("BenchmarkEmail/FindAll/Input[2]/regengo_reuse", &rules()).unwrap();
        assert_eq!(key.group, GroupKey::new("Email", "FindAll"));
        assert_eq!(key.input, "Input[2]");
        assert_eq!(key.variant, "regengo_reuse");
    }

    #[test]
    fn test_five_segment_shape() {
        let key = decompose("BenchmarkReplaceURL/Replace/Template[0]/Input[3]/stdlib", &rules())
            .unwrap();
        assert_eq!(
            key.group,
            GroupKey::new("ReplaceURL", "Replace").with_template("Template[0]")
        );
        assert_eq!(key.input, "Input[3]");
        assert_eq!(key.variant, "stdlib");
    }

    #[test]
    fn test_missing_marker() {
        let err = decompose("TestEmail/Match/Input[0]/stdlib", &rules()).unwrap_err();
        assert!(matches!(err, NameError::MissingMarker { .. }));
    }

    #[test]
    fn test_too_few_segments() {
        let err = decompose("BenchmarkEmail/Match/stdlib", &rules()).unwrap_err();
        assert_eq!(err, NameError::TooFewSegments { found: 3 });
        let err = decompose("BenchmarkEmailMatchString", &rules()).unwrap_err();
        assert_eq!(err, NameError::TooFewSegments { found: 1 });
    }

    #[test]
    fn test_category_decides_shape() {
        // Five segments under a non-template category are not guessed at.
        let err = decompose("BenchmarkEmail/Match/Extra/Input[0]/stdlib", &rules()).unwrap_err();
        assert_eq!(
            err,
            NameError::ShapeMismatch {
                category: "Match".to_string(),
                expected: 4,
                found: 5,
            }
        );

        // The template category needs its template segment.
        let err = decompose("BenchmarkReplaceDate/Replace/Input[0]/stdlib", &rules()).unwrap_err();
        assert!(matches!(err, NameError::ShapeMismatch { expected: 5, found: 4, .. }));
    }

    #[test]
    fn test_empty_segment() {
        let err = decompose("Benchmark/Match/Input[0]/stdlib", &rules()).unwrap_err();
        assert_eq!(err, NameError::EmptySegment { index: 0 });
    }

    #[test]
    fn test_custom_rules() {
        let rules = NameRules {
            marker: "Bench_".to_string(),
            separator: ':',
            template_category: "Sub".to_string(),
        };
        let key = decompose("Bench_json:Sub:t1:small:serde", &rules).unwrap();
        assert_eq!(key.group.template.as_deref(), Some("t1"));
        assert_eq!(key.variant, "serde");
    }

    #[test]
    fn test_group_display() {
        assert_eq!(GroupKey::new("Email", "Match").to_string(), "Email/Match");
        assert_eq!(
            GroupKey::new("ReplaceDate", "Replace")
                .with_template("Template[0]")
                .to_string(),
            "ReplaceDate/Replace/Template[0]"
        );
    }

    #[test]
    fn test_absent_template_orders_before_present() {
        let plain = GroupKey::new("A", "Replace");
        let templated = GroupKey::new("A", "Replace").with_template("");
        assert_ne!(plain, templated);
        assert!(plain < templated);
    }
}
