// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Rect, Size};
use understory_box_world::spawn::spawn;
use understory_box_world::{SpawnConfig, World, XorShift32};
use understory_redraw::{Budget, Palette, RecordingSurface, RedrawScheduler};

const COUNT: usize = 200_000;

fn gen_world(seed: u32) -> World {
    let mut world = World::with_capacity(COUNT);
    spawn(
        &mut world,
        &mut XorShift32::new(seed),
        Size::new(1920.0, 1080.0),
        &SpawnConfig::default(),
    )
    .unwrap();
    world
}

fn bench_all_dirty(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick_all_dirty");
    let palette = Palette::default();
    for &n in &[100usize, 1_000, 10_000] {
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("draws_{n}"), |b| {
            b.iter_batched(
                || (gen_world(0xBEEF), RecordingSurface::new()),
                |(mut world, mut surface)| {
                    let mut sched = RedrawScheduler::new(Budget::Draws(n));
                    black_box(sched.tick(&mut world, &mut surface, &palette));
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_sparse(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick_sparse");
    let palette = Palette::default();
    let mut world = gen_world(0xF00D);
    world.as_mut_slice().iter_mut().for_each(|b| b.clear_dirty());
    let region = Rect::new(900.0, 500.0, 1000.0, 600.0);
    for budget in [Budget::Draws(1_000), Budget::Visits(1_000)] {
        group.bench_function(format!("{budget:?}"), |b| {
            let mut sched = RedrawScheduler::new(budget);
            let mut surface = RecordingSurface::new();
            b.iter(|| {
                world.mark_dirty_in(region);
                let report = sched.tick(&mut world, &mut surface, &palette);
                surface.clear();
                black_box(report);
            })
        });
    }
    group.finish();
}

fn bench_clean_cycle(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick_clean");
    let palette = Palette::default();
    let mut world = gen_world(0xCAFE);
    world.as_mut_slice().iter_mut().for_each(|b| b.clear_dirty());
    group.throughput(Throughput::Elements(COUNT as u64));
    group.bench_function("full_cycle_skip", |b| {
        let mut sched = RedrawScheduler::default();
        let mut surface = RecordingSurface::new();
        b.iter(|| black_box(sched.tick(&mut world, &mut surface, &palette)))
    });
    group.finish();
}

criterion_group!(benches, bench_all_dirty, bench_sparse, bench_clean_cycle);
criterion_main!(benches);
