// Copyright 2025 the Stagelight Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use stagelight_placement::resolve::resolve_placement;
use stagelight_placement::types::Side;

const VIEWPORT: Size = Size::new(1920.0, 1080.0);
const CALLOUT: Size = Size::new(300.0, 180.0);

fn gen_targets(n: usize) -> Vec<Rect> {
    // Sweep targets across the viewport, including off-screen positions,
    // so every elimination branch gets exercised.
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = (x as f64 / n as f64) * (VIEWPORT.width + 400.0) - 200.0;
            let y0 = (y as f64 / n as f64) * (VIEWPORT.height + 400.0) - 200.0;
            out.push(Rect::new(x0, y0, x0 + 240.0, y0 + 120.0));
        }
    }
    out
}

fn bench_resolve(c: &mut Criterion) {
    let targets = gen_targets(64);
    let mut group = c.benchmark_group("placement");
    group.throughput(Throughput::Elements(targets.len() as u64 * 4));
    group.bench_function("resolve_sweep", |b| {
        b.iter(|| {
            let mut acc = 0usize;
            for &target in &targets {
                for side in [Side::Top, Side::Bottom, Side::Left, Side::Right] {
                    let got = resolve_placement(side, black_box(target), CALLOUT, VIEWPORT);
                    acc += got as usize;
                }
            }
            black_box(acc)
        });
    });
    group.finish();
}

criterion_group!(benches, bench_resolve);
criterion_main!(benches);
