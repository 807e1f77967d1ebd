// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Redraw budgets.
//!
//! Compare the draw-count and visit-count budget policies on the same world,
//! first with every box stale and then with a sparse scattering of dirty boxes.
//!
//! Run:
//! - `cargo run -p understory_demos --example redraw_budget`
//! - `RUST_LOG=trace cargo run -p understory_demos --example redraw_budget` to see
//!   every tick.

use kurbo::Size;
use tracing_subscriber::EnvFilter;
use understory_box_world::spawn::spawn;
use understory_box_world::{SpawnConfig, World, XorShift32};
use understory_redraw::{Budget, Palette, RecordingSurface, RedrawScheduler};

fn run(world: &mut World, budget: Budget) -> (usize, usize) {
    let mut scheduler = RedrawScheduler::new(budget);
    let mut surface = RecordingSurface::new();
    let palette = Palette::default();
    let (mut ticks, mut visited) = (0, 0);
    while world.dirty_count() > 0 {
        visited += scheduler.tick(world, &mut surface, &palette).visited;
        surface.clear();
        ticks += 1;
    }
    (ticks, visited)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let mut world = World::new();
    spawn(
        &mut world,
        &mut XorShift32::new(42),
        Size::new(1280.0, 720.0),
        &SpawnConfig::default(),
    )
    .unwrap();

    for budget in [Budget::Draws(1_000), Budget::Visits(1_000)] {
        world.invalidate_all();
        let (ticks, visited) = run(&mut world, budget);
        println!("{budget:?}, all stale: {ticks} ticks, {visited} visits");

        let sparse = world.mark_dirty_where(|b| b.position().x < 8.0);
        let (ticks, visited) = run(&mut world, budget);
        println!("{budget:?}, {sparse} stale: {ticks} ticks, {visited} visits");
    }
}
