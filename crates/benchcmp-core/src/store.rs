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

//! Grouping index for raw samples.
//!
//! Samples are filed under their comparison group and then their variant.
//! A bucket only comes into existence through an insert, so every bucket the
//! store hands out holds at least one sample.

use crate::line::RawSample;
use crate::name::{BenchmarkKey, GroupKey};
use std::collections::BTreeMap;

/// Variant name to the samples it produced, across all inputs.
pub type VariantSamples = BTreeMap<String, Vec<RawSample>>;

/// Multi-level grouping index owned by one analysis run.
///
/// ```
/// use benchcmp_core::line::RawSample;
/// use benchcmp_core::name::{decompose, GroupKey, NameRules};
/// use benchcmp_core::store::RecordStore;
///
/// let rules = NameRules::default();
/// let mut store = RecordStore::new();
/// for (name, ns) in [
///     ("BenchmarkEmail/Match/Input[0]/stdlib", 100.0),
///     ("BenchmarkEmail/Match/Input[1]/stdlib", 120.0),
/// ] {
///     let key = decompose(name, &rules).unwrap();
///     store.insert(key, RawSample::new(name, 1, ns));
/// }
///
/// let group = store.group(&GroupKey::new("Email", "Match")).unwrap();
/// assert_eq!(group["stdlib"].len(), 2);
/// ```
#[derive(Debug, Default, Clone)]
pub struct RecordStore {
    groups: BTreeMap<GroupKey, VariantSamples>,
    samples: usize,
}

impl RecordStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Files a sample under its group and variant.
    ///
    /// The key's input is not part of the bucket identity: samples for
    /// different inputs of the same group and variant share one bucket.
    pub fn insert(&mut self, key: BenchmarkKey, sample: RawSample) {
        self.groups
            .entry(key.group)
            .or_default()
            .entry(key.variant)
            .or_default()
            .push(sample);
        self.samples += 1;
    }

    /// Variant buckets for one group.
    pub fn group(&self, key: &GroupKey) -> Option<&VariantSamples> {
        self.groups.get(key)
    }

    /// All groups in key order.
    pub fn groups(&self) -> impl Iterator<Item = (&GroupKey, &VariantSamples)> {
        self.groups.iter()
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if nothing was inserted.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of samples inserted.
    pub fn sample_count(&self) -> usize {
        self.samples
    }
}
