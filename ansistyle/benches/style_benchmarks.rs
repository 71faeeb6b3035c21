//
// Copyright 2017-2026 Hans W. Uhlig. All Rights Reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//

//! Benchmarks for SGR serialization and composed rendering

use bytes::BytesMut;
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use tinct_ansistyle::{Arg, BasicColor, Color, Value, append_nos, printf, sprintf};

// Benchmark serializing attribute sets of growing size
fn bench_append_nos(c: &mut Criterion) {
    let mut group = c.benchmark_group("append_nos");
    let colors = [
        ("empty", Color::empty()),
        ("basic", Color::empty().fg(BasicColor::Red)),
        ("bold_bright", Color::empty().bold().bright_fg(BasicColor::Cyan).bg(BasicColor::Black)),
        ("full", Color::from_bits_retain(u32::MAX)),
    ];

    for (name, color) in colors {
        group.bench_with_input(BenchmarkId::from_parameter(name), &color, |b, &color| {
            let mut buffer = BytesMut::with_capacity(64);
            b.iter(|| {
                buffer.clear();
                append_nos(black_box(color), &mut buffer, true);
                black_box(buffer.len());
            });
        });
    }
    group.finish();
}

// Benchmark displaying a styled value
fn bench_display_value(c: &mut Criterion) {
    let mut group = c.benchmark_group("display_value");

    for size in [10, 100, 1000].iter() {
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, &size| {
            let value = Value::new("A".repeat(size)).bold().fg_index(202);
            b.iter(|| black_box(value.to_string()));
        });
    }
    group.finish();
}

// Benchmark the template engine without styling
fn bench_printf(c: &mut Criterion) {
    let args = [Arg::from("cats"), Arg::from(5), Arg::from(2.5)];
    c.bench_function("printf", |b| {
        b.iter(|| black_box(printf(black_box("%s: %5d (%.2f)"), &args)));
    });
}

// Benchmark composing styled arguments into a styled template
fn bench_sprintf_nested(c: &mut Criterion) {
    let mut group = c.benchmark_group("sprintf_nested");

    for count in [1, 4, 16].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &count| {
            let template = Value::new("%v ".repeat(count)).fg(BasicColor::Blue);
            let args: Vec<Arg> = (0..count)
                .map(|n| Arg::from(Value::new(n).fg(BasicColor::Cyan).bold()))
                .collect();
            b.iter(|| black_box(sprintf(template.clone(), args.clone())));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_append_nos,
    bench_display_value,
    bench_printf,
    bench_sprintf_nested
);
criterion_main!(benches);
