// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_box_world --heading-base-level=0

//! Understory Box World: an append-only registry of axis-aligned boxes.
//!
//! This crate holds the state that an incremental renderer and a selection
//! engine share:
//!
//! - [`BoxNode`]: position, dimensions, cached [`Bounds`], and per-frame [`BoxFlags`]
//!   (`HIGHLIGHTED`, `NEEDS_DRAW`) plus a drag anchor.
//! - [`World`]: the ordered, append-only collection of boxes, addressed by [`BoxId`].
//! - [`geom`]: selection predicates (overlap and inclusive containment against two
//!   corners in any order) and small vector helpers.
//! - [`spawn`](spawn::spawn): scatter a population of boxes over a viewport using any
//!   [`RandomSource`].
//!
//! There is no spatial index. Renderers and selection sweeps walk the world
//! linearly, which is what they need anyway: a redraw pass visits boxes in
//! order and a selection sweep must revisit every box to find the ones that
//! left the rectangle.
//!
//! ## Bounds
//!
//! Bounds are recomputed by every mutator that touches position or dimensions.
//! Negative dimensions are either kept, producing inverted bounds, or folded into
//! the position; see [`DimensionPolicy`].
//!
//! # Example
//!
//! ```rust
//! use kurbo::{Point, Vec2};
//! use understory_box_world::{BoxConfig, BoxNode, World, geom};
//!
//! let mut world = World::new();
//! let a = world.register(BoxNode::new(BoxConfig::default()).unwrap());
//! let b = world.register(
//!     BoxNode::new(BoxConfig {
//!         position: Point::new(100.0, 100.0),
//!         dimensions: Vec2::new(10.0, 10.0),
//!         ..Default::default()
//!     })
//!     .unwrap(),
//! );
//!
//! // Drag a selection from bottom-right to top-left.
//! let (start, end) = (Point::new(20.0, 20.0), Point::new(0.0, 0.0));
//! assert!(geom::overlaps(world[a].bounds(), start, end));
//! assert!(!geom::overlaps(world[b].bounds(), start, end));
//!
//! // Move a box; bounds follow.
//! world[b].set_position(Point::new(50.0, 0.0));
//! assert_eq!(world[b].bounds().left, 50.0);
//! assert_eq!(world[b].bounds().right, 60.0);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod error;
pub mod geom;
mod node;
pub mod spawn;
mod types;
mod world;

pub use error::ConfigError;
pub use node::{BoxConfig, BoxNode};
pub use spawn::{RandomSource, SpawnConfig, XorShift32};
pub use types::{BoxFlags, BoxId, Bounds, DimensionPolicy};
pub use world::World;
