// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Stage basics.
//!
//! Spawn 200,000 boxes, drain the initial redraw, then select and drag a
//! group against a recording surface, reporting the work done per frame.
//!
//! Run:
//! - `cargo run -p understory_demos --example stage_basics`
//! - `RUST_LOG=debug cargo run -p understory_demos --example stage_basics` to see
//!   gesture and resize events.

use kurbo::{Point, Size};
use tracing_subscriber::EnvFilter;
use understory_box_world::XorShift32;
use understory_redraw::RecordingSurface;
use understory_stage::{Stage, StageConfig};

fn drain(stage: &mut Stage, surface: &mut RecordingSurface) -> usize {
    let mut frames = 0;
    while stage.world().dirty_count() > 0 {
        stage.update(surface);
        surface.clear();
        frames += 1;
    }
    frames
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let viewport = Size::new(1280.0, 720.0);
    let mut stage = Stage::new(StageConfig::default()).unwrap();
    let count = stage
        .spawn(&mut XorShift32::new(0x5EED), viewport)
        .unwrap();
    let mut surface = RecordingSurface::new();
    println!(
        "spawned {count} boxes; initial redraw took {} frames",
        drain(&mut stage, &mut surface)
    );

    // Sweep a marquee from the bottom right towards the top left.
    stage.pointer_down(Point::new(640.0, 400.0));
    for step in 1..=30 {
        let t = f64::from(step);
        stage.pointer_move(Point::new(640.0 - 6.0 * t, 400.0 - 4.0 * t));
        let report = stage.update(&mut surface);
        surface.clear();
        if step % 10 == 0 {
            println!(
                "select step {step}: {} selected, drew {}, erased-marked {}",
                stage.hand().selected_len(),
                report.tick.drawn,
                report.erased_marked
            );
        }
    }
    stage.pointer_up();
    println!("selection settled after {} frames", drain(&mut stage, &mut surface));

    // Grab the marquee and drag the group.
    stage.pointer_down(Point::new(550.0, 340.0));
    assert!(stage.hand().is_dragging(), "press inside the marquee drags");
    for step in 1..=20 {
        let t = f64::from(step);
        stage.pointer_move(Point::new(550.0 + 5.0 * t, 340.0 + 2.0 * t));
        let report = stage.update(&mut surface);
        surface.clear();
        if step % 5 == 0 {
            println!(
                "drag step {step}: drew {}, visited {}, erased-marked {}",
                report.tick.drawn, report.tick.visited, report.erased_marked
            );
        }
    }
    stage.pointer_up();
    println!("drag settled after {} frames", drain(&mut stage, &mut surface));

    stage.resize();
    println!("resize repaint took {} frames", drain(&mut stage, &mut surface));
}
