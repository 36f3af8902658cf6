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

//! Ingestion benchmarks.
//!
//! Measures line recognition on its own and the full analysis pipeline over
//! synthetic benchmark logs of increasing size.

use benchcmp_core::{analyze, parse_line, AnalysisConfig};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

const SUBJECTS: &[&str] = &["Email", "DateCapture", "URLCapture", "Greedy", "Lazy"];
const CATEGORIES: &[&str] = &["Match", "FindFirst", "FindAll"];
const VARIANTS: &[&str] = &["stdlib", "regengo", "regengo_reuse"];

/// Builds a log with `inputs` inputs per group, interleaved with noise lines.
fn generate_log(inputs: usize) -> String {
    let mut log = String::from("goos: linux\ngoarch: amd64\npkg: example.com/bench\n");
    for subject in SUBJECTS {
        for category in CATEGORIES {
            for input in 0..inputs {
                for (v, variant) in VARIANTS.iter().enumerate() {
                    let ns = 50.0 + (input * 7 + v * 13) as f64 * 1.25;
                    log.push_str(&format!(
                        "Benchmark{subject}/{category}/Input[{input}]/{variant}-12\t1000000\t{ns} ns/op\t{} B/op\t{} allocs/op\n",
                        v * 16,
                        v
                    ));
                }
            }
            log.push_str(&format!(
                "Benchmark{subject}/Replace/Template[0]/Input[0]/stdlib-12\t1000\t900 ns/op\t256 B/op\t8 allocs/op\n"
            ));
        }
    }
    log.push_str("PASS\nok  \texample.com/bench\t42.000s\n");
    log
}

fn bench_parse_line(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse_line");

    let cases = [
        (
            "full",
            "BenchmarkDateCapture/Match/Input[0]/stdlib-12\t16418577\t72.75 ns/op\t0 B/op\t0 allocs/op",
        ),
        ("time_only", "BenchmarkDateCapture/Match/Input[0]/stdlib-12  16418577  72.75 ns/op"),
        ("noise", "goos: darwin"),
    ];

    for (name, line) in cases {
        group.bench_function(name, |b| b.iter(|| parse_line(black_box(line))));
    }

    group.finish();
}

fn bench_analyze(c: &mut Criterion) {
    let mut group = c.benchmark_group("analyze");
    let config = AnalysisConfig::default();

    for inputs in [1usize, 10, 100] {
        let log = generate_log(inputs);
        group.throughput(Throughput::Bytes(log.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(inputs), &log, |b, log| {
            b.iter(|| analyze(black_box(log.as_bytes()), &config))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_parse_line, bench_analyze);
criterion_main!(benches);
