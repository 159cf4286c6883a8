//! Benchmarks for property record decoding.
//!
//! Tests decoding performance for the record shapes that matter:
//! - Base layout only (Bool)
//! - Flag-conditional replication offset (Net)
//! - Reference-bearing kinds (Object, Class)
//! - The compact index codec in isolation

use criterion::{criterion_group, criterion_main, Criterion};
use std::hint::black_box;
use unscope::{
    metadata::{
        names::NameTable,
        properties::{PropertyDescriptor, PropertyKind},
    },
    Parser,
};

fn package_names() -> NameTable {
    NameTable::new(vec![
        "None".to_string(),
        "Core".to_string(),
        "Engine".to_string(),
        "Default".to_string(),
    ])
}

/// Benchmark decoding a record with nothing beyond the base layout.
fn bench_base_record(c: &mut Criterion) {
    let names = package_names();
    let record = [
        0x01, 0x00, 0x00, 0x00, //
        0x00, 0x00, 0x00, 0x00, //
        0x02, //
    ];

    c.bench_function("property_base_record", |b| {
        b.iter(|| {
            let mut parser = Parser::new(black_box(&record));
            let descriptor =
                PropertyDescriptor::read(&mut parser, &names, PropertyKind::Bool, "bHidden")
                    .unwrap();
            black_box(descriptor)
        });
    });
}

/// Benchmark decoding a replicated object property, the shape with every
/// conditional field present.
fn bench_replicated_object(c: &mut Criterion) {
    let names = package_names();
    let record = [
        0x01, 0x00, 0x00, 0x00, //
        0x20, 0x00, 0x00, 0x00, //
        0x03, //
        0x0C, 0x00, //
        0x07, //
    ];

    c.bench_function("property_replicated_object", |b| {
        b.iter(|| {
            let mut parser = Parser::new(black_box(&record));
            let descriptor =
                PropertyDescriptor::read(&mut parser, &names, PropertyKind::Object, "Target")
                    .unwrap();
            black_box(descriptor)
        });
    });
}

/// Benchmark decoding a class property, the only kind with two trailing
/// compact indices.
fn bench_class_record(c: &mut Criterion) {
    let names = package_names();
    let record = [
        0x01, 0x00, 0x00, 0x00, //
        0x00, 0x00, 0x00, 0x00, //
        0x00, //
        0x05, //
        0x02, //
    ];

    c.bench_function("property_class_record", |b| {
        b.iter(|| {
            let mut parser = Parser::new(black_box(&record));
            let descriptor =
                PropertyDescriptor::read(&mut parser, &names, PropertyKind::Class, "PawnClass")
                    .unwrap();
            black_box(descriptor)
        });
    });
}

/// Benchmark the compact index codec across its encoded widths.
fn bench_compact_index(c: &mut Criterion) {
    let encoded = [
        0x05, // one byte
        0x6C, 0x04, // two bytes
        0x40, 0x80, 0x80, 0x80, 0x08, // five bytes
    ];

    c.bench_function("compact_index_codec", |b| {
        b.iter(|| {
            let mut parser = Parser::new(black_box(&encoded));
            let a = parser.read_compact_index().unwrap();
            let b2 = parser.read_compact_index().unwrap();
            let c2 = parser.read_compact_index().unwrap();
            black_box((a, b2, c2))
        });
    });
}

criterion_group!(
    benches,
    bench_base_record,
    bench_replicated_object,
    bench_class_record,
    bench_compact_index
);
criterion_main!(benches);
