// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the box world: box identifiers, flags, and cached bounds.

use kurbo::{Point, Rect, Vec2};

/// Identifier for a box in a [`World`](crate::World).
///
/// A `BoxId` is the position of the box in the world's spawn order. Worlds are
/// append-only, so an id handed out by [`World::register`](crate::World::register)
/// stays valid for the life of that world.
///
/// Ids are only meaningful for the world that issued them.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct BoxId(pub(crate) u32);

impl BoxId {
    pub(crate) const fn new(idx: u32) -> Self {
        Self(idx)
    }

    /// Position of this box in spawn order.
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

bitflags::bitflags! {
    /// Per-box interaction and redraw state.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct BoxFlags: u8 {
        /// Box is part of the current selection.
        const HIGHLIGHTED = 0b0000_0001;
        /// On-screen representation is stale; cleared only by drawing the box.
        const NEEDS_DRAW  = 0b0000_0010;
    }
}

impl Default for BoxFlags {
    fn default() -> Self {
        Self::NEEDS_DRAW
    }
}

/// How a box treats negative dimensions.
///
/// Spawning with a negative size bias can produce boxes whose width or height
/// is below zero. Drawing surfaces accept such rectangles, but the cached
/// bounds then have `right < left` (or `bottom < top`).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DimensionPolicy {
    /// Keep negative dimensions as given. The box is inverted on that axis.
    ///
    /// Overlap tests compare raw sides, so an inverted axis only overlaps a
    /// selection that spans the whole inverted extent.
    #[default]
    Preserve,
    /// Fold a negative extent into the position so that the visible rectangle
    /// is unchanged and the stored dimension is non-negative.
    Normalize,
}

impl DimensionPolicy {
    /// Apply the policy to a position/dimensions pair.
    pub fn apply(self, position: Point, dimensions: Vec2) -> (Point, Vec2) {
        match self {
            Self::Preserve => (position, dimensions),
            Self::Normalize => {
                let (x, w) = fold_axis(position.x, dimensions.x);
                let (y, h) = fold_axis(position.y, dimensions.y);
                (Point::new(x, y), Vec2::new(w, h))
            }
        }
    }
}

fn fold_axis(origin: f64, extent: f64) -> (f64, f64) {
    if extent < 0.0 {
        (origin + extent, -extent)
    } else {
        (origin, extent)
    }
}

/// Cached sides of a box, derived from its position and dimensions.
///
/// `left = x`, `top = y`, `right = x + w`, `bottom = y + h`. The sides are never
/// reordered, so an inverted box keeps `right < left`.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Bounds {
    /// Left side (`x`).
    pub left: f64,
    /// Right side (`x + width`).
    pub right: f64,
    /// Top side (`y`).
    pub top: f64,
    /// Bottom side (`y + height`).
    pub bottom: f64,
}

impl Bounds {
    /// Derive sides from a top-left anchor and dimensions.
    pub fn from_origin_dimensions(position: Point, dimensions: Vec2) -> Self {
        Self {
            left: position.x,
            right: position.x + dimensions.x,
            top: position.y,
            bottom: position.y + dimensions.y,
        }
    }

    /// Signed width (`right - left`).
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    /// Signed height (`bottom - top`).
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    /// Whether either axis is inverted.
    pub fn is_inverted(&self) -> bool {
        self.right < self.left || self.bottom < self.top
    }

    /// The covered area as a normalized rectangle.
    pub fn to_rect(&self) -> Rect {
        Rect::new(self.left, self.top, self.right, self.bottom).abs()
    }
}
