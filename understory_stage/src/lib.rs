// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_stage --heading-base-level=0

//! Understory Stage: a selectable, draggable box field with incremental redraw.
//!
//! [`Stage`] owns a [`World`](understory_box_world::World), a
//! [`Hand`](understory_hand::Hand), a
//! [`RedrawScheduler`](understory_redraw::RedrawScheduler), and a
//! [`MarqueeOverlay`](understory_redraw::MarqueeOverlay). A host forwards
//! pointer events as they arrive and calls [`Stage::update`] once per frame
//! with its drawing surface.
//!
//! Each frame:
//!
//! 1. A deferred selection sweep runs, if one is pending.
//! 2. The line width is applied.
//! 3. The previous marquee is painted over in the background color, and boxes
//!    under the painted area are marked dirty.
//! 4. The scheduler redraws dirty boxes within its budget.
//! 5. The current marquee is stroked on top.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use understory_box_world::{SpawnConfig, XorShift32};
//! use understory_redraw::{Budget, RecordingSurface};
//! use understory_stage::{Stage, StageConfig};
//!
//! let mut stage = Stage::new(StageConfig {
//!     budget: Budget::Draws(100),
//!     spawn: SpawnConfig { count: 250, ..Default::default() },
//!     ..Default::default()
//! })
//! .unwrap();
//! stage.spawn(&mut XorShift32::new(1), Size::new(320.0, 240.0)).unwrap();
//!
//! let mut surface = RecordingSurface::new();
//! let mut frames = 0;
//! while stage.world().dirty_count() > 0 {
//!     stage.update(&mut surface);
//!     frames += 1;
//! }
//! assert_eq!(frames, 3);
//!
//! stage.pointer_down(Point::new(0.0, 0.0));
//! stage.pointer_move(Point::new(8.0, 8.0));
//! stage.pointer_up();
//! let report = stage.update(&mut surface);
//! assert_eq!(report.tick.drawn, stage.hand().selected_len());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod stage;

pub use stage::{FrameReport, Stage, StageConfig};
