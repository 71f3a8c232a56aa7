//! Criterion micro-benchmarks for region request and disposal operations.

use criterion::{black_box, criterion_group, criterion_main, BatchSize, Criterion};
use moraine::{Region, RegionConfig};

fn bench_request_within_block(c: &mut Criterion) {
    let config = RegionConfig {
        block_size: 64 * 1024,
        max_request: 64 * 1024,
        max_blocks: 1024,
    };
    c.bench_function("request_64b_x512_one_block", |b| {
        b.iter_batched(
            || Region::with_config(config.clone()).unwrap(),
            |mut region| {
                for _ in 0..512 {
                    black_box(region.request(64).unwrap());
                }
                region
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_request_across_blocks(c: &mut Criterion) {
    let config = RegionConfig {
        block_size: 1024,
        max_request: 1024,
        max_blocks: 1024,
    };
    c.bench_function("request_1kb_x64_fresh_block_each", |b| {
        b.iter_batched(
            || Region::with_config(config.clone()).unwrap(),
            |mut region| {
                // Every request fills a whole block, so each one walks
                // the block-append path.
                for _ in 0..64 {
                    black_box(region.request(1024).unwrap());
                }
                region
            },
            BatchSize::SmallInput,
        );
    });
}

fn bench_dispose(c: &mut Criterion) {
    let config = RegionConfig {
        block_size: 1024,
        max_request: 1024,
        max_blocks: 16,
    };
    c.bench_function("dispose_16_blocks", |b| {
        b.iter_batched(
            || {
                let mut region = Region::with_config(config.clone()).unwrap();
                for _ in 0..16 {
                    region.request(1024).unwrap();
                }
                region
            },
            |mut region| {
                region.dispose().unwrap();
                region
            },
            BatchSize::SmallInput,
        );
    });
}

criterion_group!(
    benches,
    bench_request_within_block,
    bench_request_across_blocks,
    bench_dispose
);
criterion_main!(benches);
