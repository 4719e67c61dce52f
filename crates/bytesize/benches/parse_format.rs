// Benchmarks for the parse and format hot paths of bytesize

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use bytesize::{BinaryUnit, FixedLocale, RoundDir, Size, Unit};

// ===== PARSE =====

fn bench_parse(c: &mut Criterion) {
    let mut group = c.benchmark_group("parse");
    for spec in ["1024", "1.5 GiB", "  -12e3 kb ", "1208925819614629174706176 YiB"] {
        group.bench_with_input(BenchmarkId::new("posix", spec), spec, |b, spec| {
            b.iter(|| black_box(spec).parse::<Size>());
        });
    }

    let czech = FixedLocale::new(",");
    group.bench_function("comma_radix", |b| {
        b.iter(|| Size::parse_in(black_box("1,5 MiB"), &czech));
    });
    group.finish();
}

// ===== ARITHMETIC =====

fn bench_arithmetic(c: &mut Criterion) {
    let mut group = c.benchmark_group("arithmetic");
    let a: Size = "1.5 TiB".parse().unwrap();
    let b: Size = "3 MiB".parse().unwrap();
    group.bench_function("add", |bench| bench.iter(|| black_box(&a).add(black_box(&b))));
    group.bench_function("mul_float_str", |bench| {
        bench.iter(|| black_box(&a).mul_float_str(black_box("1.51")));
    });
    group.bench_function("true_div", |bench| bench.iter(|| black_box(&a).true_div(black_box(&b))));
    group.bench_function("round_to_nearest", |bench| {
        bench.iter(|| black_box(&a).round_to_nearest(black_box(&b), RoundDir::HalfUp));
    });
    group.finish();
}

// ===== FORMAT =====

fn bench_format(c: &mut Criterion) {
    let mut group = c.benchmark_group("format");
    let value: Size = "123456789123 B".parse().unwrap();
    group.bench_function("bytes_str", |b| b.iter(|| black_box(&value).bytes_str()));
    group.bench_function("convert_to", |b| {
        b.iter(|| black_box(&value).convert_to(Unit::Binary(BinaryUnit::GiB)));
    });
    group.bench_function("human_readable", |b| {
        b.iter(|| black_box(&value).human_readable(BinaryUnit::B, Some(2), false));
    });
    group.finish();
}

criterion_group!(benches, bench_parse, bench_arithmetic, bench_format);
criterion_main!(benches);
