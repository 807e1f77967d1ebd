// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_hand --heading-base-level=0

//! Understory Hand: marquee selection and group drag over a box world.
//!
//! A [`Hand`] turns pointer-down, pointer-move, and pointer-up into one of
//! three gestures:
//!
//! - Down outside the current marquee clears the selection and starts a new
//!   marquee. Moves grow it and sweep the world: boxes entering it are
//!   highlighted, boxes leaving it are un-highlighted.
//! - Down inside the marquee (edges included) starts a drag. Moves translate
//!   the marquee and every selected box by the pointer's displacement from
//!   where the drag started.
//! - Up ends either gesture and keeps the selection.
//!
//! Every box whose highlight or position changes is marked dirty, so a redraw
//! scheduler picks it up. The selection set and the `HIGHLIGHTED` flags always
//! agree.
//!
//! ## Large jumps
//!
//! Sweeping is linear in the world. When consecutive samples are further apart
//! than [`HandConfig::jump_threshold`], [`JumpPolicy::Defer`] postpones the
//! sweep to [`Hand::refresh_selection`], which a frame loop can call once per
//! frame instead of once per input event.
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use understory_box_world::{BoxConfig, BoxNode, World};
//! use understory_hand::{Hand, HandState};
//!
//! let mut world = World::new();
//! let id = world.register(
//!     BoxNode::new(BoxConfig {
//!         position: Point::new(12.0, 12.0),
//!         dimensions: Vec2::new(10.0, 10.0),
//!         ..Default::default()
//!     })
//!     .unwrap(),
//! );
//!
//! let mut hand = Hand::default();
//! hand.pointer_down(&mut world, Point::new(10.0, 10.0));
//! hand.pointer_move(&mut world, Point::new(50.0, 50.0));
//! hand.pointer_up(&mut world);
//! assert!(world[id].is_highlighted());
//!
//! // Grab the marquee and drag it.
//! assert_eq!(hand.pointer_down(&mut world, Point::new(25.0, 25.0)), HandState::Dragging);
//! hand.pointer_move(&mut world, Point::new(45.0, 30.0));
//! hand.pointer_up(&mut world);
//! assert_eq!(world[id].position(), Point::new(32.0, 17.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod hand;
mod types;

pub use hand::Hand;
pub use types::{HandConfig, HandState, JumpPolicy, MoveOutcome};
