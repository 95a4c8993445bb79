//! Formatting benchmarks.

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};
use stringforge_core::fmt::{self, Arg};
use stringforge_core::string;

fn bench_directives(c: &mut Criterion) {
    let cases: &[(&str, &str, Arg<'static>)] = &[
        ("signed", "%d", Arg::Int(-1234567)),
        ("hex_alt", "%#010x", Arg::Uint(0xdead_beef)),
        ("fixed", "%.6f", Arg::Float(3.141592653589793)),
        ("scientific", "%.3e", Arg::Float(6.02214076e23)),
        ("general", "%g", Arg::Float(0.0001)),
        ("string_padded", "%-20s", Arg::Str(b"the quick brown fox")),
    ];
    let mut group = c.benchmark_group("directive");

    for &(name, spec, arg) in cases {
        group.bench_with_input(BenchmarkId::from_parameter(name), &arg, |b, &arg| {
            b.iter(|| {
                let out = fmt::vformat(spec.as_bytes(), &[arg]).unwrap();
                black_box(out);
            });
        });
    }
    group.finish();
}

fn bench_mixed_line(c: &mut Criterion) {
    let args = [
        Arg::Str(b"worker-3"),
        Arg::Int(8841),
        Arg::Float(99.7265),
        Arg::Uint(0x7f2c),
    ];
    c.bench_function("mixed_report_line", |b| {
        b.iter(|| {
            let out = fmt::vformat(b"[%s] pid=%d load=%6.2f%% flags=%#06x", &args).unwrap();
            black_box(out);
        });
    });
}

fn bench_literal_heavy(c: &mut Criterion) {
    let spec = "x".repeat(4096);
    c.bench_function("literal_copy_4k", |b| {
        b.iter(|| {
            let out = fmt::vformat(spec.as_bytes(), &[]).unwrap();
            black_box(out);
        });
    });
}

fn bench_strlen_sizes(c: &mut Criterion) {
    let sizes: &[usize] = &[16, 256, 4096];
    let mut group = c.benchmark_group("strlen");

    for &size in sizes {
        let mut s = vec![b'A'; size];
        s.push(0);
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                black_box(string::strlen(&s));
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_directives,
    bench_mixed_line,
    bench_literal_heavy,
    bench_strlen_sizes
);
criterion_main!(benches);
