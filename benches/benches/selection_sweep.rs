// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use kurbo::{Point, Size};
use understory_box_world::spawn::spawn;
use understory_box_world::{SpawnConfig, World, XorShift32};
use understory_hand::Hand;

const COUNT: usize = 200_000;

fn gen_world() -> World {
    let mut world = World::with_capacity(COUNT);
    spawn(
        &mut world,
        &mut XorShift32::new(0x5EED),
        Size::new(1920.0, 1080.0),
        &SpawnConfig::default(),
    )
    .unwrap();
    world
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("selection_sweep");
    group.throughput(Throughput::Elements(COUNT as u64));
    for &side in &[10.0f64, 200.0, 1000.0] {
        group.bench_function(format!("marquee_{side}"), |b| {
            b.iter_batched(
                || (gen_world(), Hand::default()),
                |(mut world, mut hand)| {
                    hand.pointer_down(&mut world, Point::new(100.0, 100.0));
                    let outcome =
                        hand.pointer_move(&mut world, Point::new(100.0 + side, 100.0 + side));
                    black_box(outcome);
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_drag(c: &mut Criterion) {
    let mut group = c.benchmark_group("group_drag");
    let mut world = gen_world();
    let mut hand = Hand::default();
    hand.pointer_down(&mut world, Point::new(500.0, 300.0));
    hand.pointer_move(&mut world, Point::new(900.0, 700.0));
    hand.pointer_up(&mut world);
    group.throughput(Throughput::Elements(hand.selected_len() as u64));
    hand.pointer_down(&mut world, Point::new(700.0, 500.0));
    let mut step = 0.0;
    group.bench_function("move_selected", |b| {
        b.iter(|| {
            step = (step + 1.0) % 50.0;
            black_box(hand.pointer_move(&mut world, Point::new(700.0 + step, 500.0)))
        })
    });
    group.finish();
}

criterion_group!(benches, bench_sweep, bench_drag);
criterion_main!(benches);
