// Copyright 2025 the Stagelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use stagelight_act::store::TourStore;

fn sparse_store(scenes: i32) -> TourStore<u32> {
    let mut store = TourStore::new();
    // Sparse ids: every third slot registered.
    for i in 0..scenes {
        store.register_scene("bench", i * 3, i as u32).unwrap();
    }
    store
}

fn bench_registration(c: &mut Criterion) {
    let mut group = c.benchmark_group("act");
    group.throughput(Throughput::Elements(1024));
    group.bench_function("register_1024", |b| {
        b.iter_batched(
            TourStore::<u32>::new,
            |mut store| {
                for i in 0..1024 {
                    store.register_scene("bench", i, 0).unwrap();
                }
                black_box(store)
            },
            BatchSize::SmallInput,
        );
    });
    group.finish();
}

fn bench_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("act");
    group.throughput(Throughput::Elements(1024));
    group.bench_function("walk_1024", |b| {
        b.iter_batched(
            || sparse_store(1024),
            |mut store| {
                store.start("bench", None).unwrap();
                while store.next().is_ok() {}
                while store.prev().is_ok() {}
                black_box(store)
            },
            BatchSize::SmallInput,
        );
    });
    group.bench_function("view_1024", |b| {
        let mut store = sparse_store(1024);
        store.start("bench", None).unwrap();
        b.iter(|| black_box(store.view()));
    });
    group.finish();
}

criterion_group!(benches, bench_registration, bench_walk);
criterion_main!(benches);
