use criterion::{black_box, criterion_group, criterion_main, Criterion};

use bson_decimal128::Decimal128;

// A mix of plain, scientific, and signed-zero renderings.
const CORPUS: &[&str] = &[
    "0",
    "-0",
    "12345678901234567",
    "0.0012345",
    "-100E-10",
    "9.999999999999999999999999999999999E+6144",
    "1E-6176",
];

fn parse_benchmark(c: &mut Criterion) {
    c.bench_function("parse", |b| {
        b.iter(|| {
            for text in CORPUS {
                let value: Decimal128 = black_box(text).parse().unwrap();
                black_box(value);
            }
        })
    });
}

fn format_benchmark(c: &mut Criterion) {
    let values: Vec<Decimal128> = CORPUS.iter().map(|text| text.parse().unwrap()).collect();
    c.bench_function("format", |b| {
        b.iter(|| {
            for value in &values {
                black_box(black_box(value).to_string());
            }
        })
    });
}

fn byte_round_trip_benchmark(c: &mut Criterion) {
    let values: Vec<Decimal128> = CORPUS.iter().map(|text| text.parse().unwrap()).collect();
    c.bench_function("byte round trip", |b| {
        b.iter(|| {
            for value in &values {
                let bytes = black_box(value).to_le_bytes();
                black_box(Decimal128::from_le_bytes(bytes));
            }
        })
    });
}

criterion_group!(
    benches,
    parse_benchmark,
    format_benchmark,
    byte_round_trip_benchmark
);
criterion_main!(benches);
