use chrono::{TimeZone, Utc};
use criterion::{criterion_group, criterion_main, Criterion};
use snowflake_id::{SnowflakeConfig, SnowflakeGenerator};
use std::hint::black_box;
use std::sync::Arc;

fn generator(datacenter_id_bits: u8) -> SnowflakeGenerator {
    let epoch = Utc.with_ymd_and_hms(2020, 1, 1, 0, 0, 0).unwrap();
    let config = SnowflakeConfig::builder(epoch)
        .datacenter_id_bits(datacenter_id_bits)
        .worker_id_bits(10 - datacenter_id_bits)
        .datacenter_id(1)
        .worker_id(1)
        .build()
        .unwrap();
    SnowflakeGenerator::new(config)
}

pub fn bit_split_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("Bit Split Comparison");

    // The split only moves the datacenter/worker boundary, so throughput
    // should be flat across it; this guards against layout-dependent slowdowns
    for &datacenter_id_bits in &[1, 4, 5, 9] {
        let generator = generator(datacenter_id_bits);
        group.bench_function(
            format!("dc_{}_worker_{}", datacenter_id_bits, 10 - datacenter_id_bits),
            |b| {
                b.iter(|| {
                    black_box(generator.create_id().unwrap());
                });
            },
        );
    }

    group.finish();
}

pub fn batch_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Batch");
    let generator = generator(4);

    for &count in &[1, 10, 100] {
        group.bench_function(format!("create_ids/{}", count), |b| {
            b.iter(|| {
                black_box(generator.create_ids(black_box(count)).unwrap());
            });
        });
    }

    group.finish();
}

pub fn component_extraction_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Component Extraction");
    let generator = generator(4);
    let id = generator.create_id().unwrap();

    group.bench_function("decompose", |b| {
        b.iter(|| {
            black_box(generator.extract.decompose(black_box(id)));
        });
    });

    group.finish();
}

pub fn concurrent_benchmarks(c: &mut Criterion) {
    let mut group = c.benchmark_group("Concurrent");

    for &thread_count in &[2, 4, 8] {
        group.bench_function(format!("threads/{}", thread_count), |b| {
            let generator = Arc::new(generator(4));
            b.iter(|| {
                let mut handles = Vec::with_capacity(thread_count);

                for _ in 0..thread_count {
                    let generator = Arc::clone(&generator);
                    handles.push(std::thread::spawn(move || {
                        for _ in 0..100 {
                            black_box(generator.create_id().unwrap());
                        }
                    }));
                }

                for handle in handles {
                    handle.join().unwrap();
                }
            });
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bit_split_comparison,
    batch_benchmarks,
    concurrent_benchmarks,
    component_extraction_benchmarks
);
criterion_main!(benches);
