// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_redraw --heading-base-level=0

//! Understory Redraw: budgeted incremental redraw for large box populations.
//!
//! Redrawing 200,000 boxes every frame stalls the frame loop. Instead each box
//! carries a `NEEDS_DRAW` flag, and a [`RedrawScheduler`] walks the world with
//! a persistent round-robin cursor, drawing the dirty boxes it meets until the
//! per-tick [`Budget`] runs out.
//!
//! - [`Surface`]: the narrow immediate-mode drawing interface this crate consumes.
//! - [`Palette`]: colors for boxes, highlight, background, and marquee.
//! - [`RedrawScheduler`]: cursor + budget; [`RedrawScheduler::resize`] is the only
//!   full-invalidation path.
//! - [`MarqueeOverlay`]: erase-then-redraw bookkeeping for the selection rectangle,
//!   kept apart from the box redraw.
//! - [`RecordingSurface`]: a surface that records calls, for tests and headless runs.
//!
//! ## Guarantees
//!
//! - If no more boxes are dirty than the budget, a single tick draws all of them.
//! - Otherwise, with no new dirtying, every box is visited within
//!   [`Budget::ticks_per_cycle`] ticks. The cursor advances past every visited box,
//!   drawn or not, so no box is starved.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use understory_box_world::{BoxConfig, BoxNode, World};
//! use understory_redraw::{Budget, Palette, RecordingSurface, RedrawScheduler};
//!
//! let mut world = World::new();
//! for i in 0..10 {
//!     let node = BoxNode::new(BoxConfig {
//!         position: Point::new(f64::from(i) * 20.0, 0.0),
//!         dimensions: Vec2::new(10.0, 10.0),
//!         ..Default::default()
//!     })
//!     .unwrap();
//!     world.register(node);
//! }
//!
//! let mut scheduler = RedrawScheduler::new(Budget::Draws(4));
//! let mut surface = RecordingSurface::new();
//! let palette = Palette::default();
//!
//! // Fresh boxes are dirty; four are drawn per tick.
//! let report = scheduler.tick(&mut world, &mut surface, &palette);
//! assert_eq!(report.drawn, 4);
//! assert_eq!(world.dirty_count(), 6);
//!
//! // Resizing invalidates everything again.
//! scheduler.resize(&mut world);
//! assert_eq!(world.dirty_count(), 10);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod overlay;
pub mod recording;
pub mod scheduler;
pub mod surface;

pub use overlay::{EraseMode, Erased, Marquee, MarqueeOverlay};
pub use recording::{RecordingSurface, SurfaceOp};
pub use scheduler::{Budget, RedrawScheduler, TickReport};
pub use surface::{Palette, Surface, draw_box};
