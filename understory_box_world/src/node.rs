// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The box entity: geometry, cached bounds, and per-frame flags.

use kurbo::{Point, Vec2};

use crate::error::ConfigError;
use crate::types::{BoxFlags, Bounds, DimensionPolicy};

/// Construction parameters for a [`BoxNode`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoxConfig {
    /// Top-left anchor.
    pub position: Point,
    /// Width and height. May be negative; see [`DimensionPolicy`].
    pub dimensions: Vec2,
    /// Start out as part of the selection.
    pub highlighted: bool,
    /// Start out stale. A box that has never been drawn normally wants this.
    pub needs_draw: bool,
    /// Treatment of negative dimensions, here and on every later resize.
    pub dimension_policy: DimensionPolicy,
}

impl Default for BoxConfig {
    fn default() -> Self {
        Self {
            position: Point::ZERO,
            dimensions: Vec2::new(10.0, 10.0),
            highlighted: false,
            needs_draw: true,
            dimension_policy: DimensionPolicy::default(),
        }
    }
}

impl BoxConfig {
    /// Check that every coordinate is finite.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.position.is_finite() {
            return Err(ConfigError::NonFinite { field: "position" });
        }
        if !self.dimensions.is_finite() {
            return Err(ConfigError::NonFinite {
                field: "dimensions",
            });
        }
        Ok(())
    }
}

/// An axis-aligned box with cached bounds and redraw state.
///
/// The cached [`Bounds`] are recomputed by every mutator that touches the
/// position or dimensions, so they are never stale once a call returns.
#[derive(Clone, Debug, PartialEq)]
pub struct BoxNode {
    position: Point,
    dimensions: Vec2,
    bounds: Bounds,
    flags: BoxFlags,
    drag_anchor: Point,
    policy: DimensionPolicy,
}

impl BoxNode {
    /// Build a box from a validated configuration.
    pub fn new(config: BoxConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let (position, dimensions) = config
            .dimension_policy
            .apply(config.position, config.dimensions);
        let mut flags = BoxFlags::empty();
        flags.set(BoxFlags::HIGHLIGHTED, config.highlighted);
        flags.set(BoxFlags::NEEDS_DRAW, config.needs_draw);
        Ok(Self {
            position,
            dimensions,
            bounds: Bounds::from_origin_dimensions(position, dimensions),
            flags,
            drag_anchor: position,
            policy: config.dimension_policy,
        })
    }

    /// Top-left anchor.
    pub fn position(&self) -> Point {
        self.position
    }

    /// Width and height as stored (after the dimension policy).
    pub fn dimensions(&self) -> Vec2 {
        self.dimensions
    }

    /// Cached sides.
    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Raw flags.
    pub fn flags(&self) -> BoxFlags {
        self.flags
    }

    /// Whether the box is part of the current selection.
    pub fn is_highlighted(&self) -> bool {
        self.flags.contains(BoxFlags::HIGHLIGHTED)
    }

    /// Whether the box must be redrawn.
    pub fn needs_draw(&self) -> bool {
        self.flags.contains(BoxFlags::NEEDS_DRAW)
    }

    /// Position snapshot used as the base of a drag.
    ///
    /// Only meaningful while the box is selected.
    pub fn drag_anchor(&self) -> Point {
        self.drag_anchor
    }

    /// Move the box, keeping its dimensions.
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
        self.update_bounds();
    }

    /// Resize the box, applying its dimension policy.
    pub fn set_dimensions(&mut self, dimensions: Vec2) {
        let (position, dimensions) = self.policy.apply(self.position, dimensions);
        self.position = position;
        self.dimensions = dimensions;
        self.update_bounds();
    }

    /// Place the box at `drag_anchor + displacement`.
    pub fn move_from_anchor(&mut self, displacement: Vec2) {
        self.set_position(self.drag_anchor + displacement);
    }

    /// Record the current position as the drag anchor.
    pub fn snapshot_anchor(&mut self) {
        self.drag_anchor = self.position;
    }

    /// Set or clear the highlight. Returns `true` if it changed.
    ///
    /// This does not mark the box dirty; callers decide when a change is visible.
    pub fn set_highlighted(&mut self, highlighted: bool) -> bool {
        let changed = self.is_highlighted() != highlighted;
        self.flags.set(BoxFlags::HIGHLIGHTED, highlighted);
        changed
    }

    /// Mark the on-screen representation stale.
    pub fn mark_dirty(&mut self) {
        self.flags.insert(BoxFlags::NEEDS_DRAW);
    }

    /// Clear the stale flag. Renderers call this after drawing the box.
    pub fn clear_dirty(&mut self) {
        self.flags.remove(BoxFlags::NEEDS_DRAW);
    }

    fn update_bounds(&mut self) {
        self.bounds = Bounds::from_origin_dimensions(self.position, self.dimensions);
    }
}
