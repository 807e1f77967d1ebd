// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Round-robin redraw with a per-tick budget.

use understory_box_world::World;

use crate::surface::{Palette, Surface, draw_box};

/// How much work a single tick may do.
///
/// Whatever the policy, a tick never visits more than one full cycle of the
/// world. A zero budget is treated as one so the cursor always moves.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Budget {
    /// Stop after this many boxes were actually drawn.
    ///
    /// Clean boxes are skipped for free (up to one full cycle). This favors
    /// responsiveness under heavy dirtying.
    Draws(usize),
    /// Stop after this many boxes were visited, drawn or not.
    ///
    /// This bounds the worst case regardless of how many boxes are dirty.
    Visits(usize),
}

impl Default for Budget {
    fn default() -> Self {
        Self::Draws(1_000)
    }
}

impl Budget {
    /// Per-tick `(max_visits, max_draws)` for a world of `len` boxes.
    fn limits(self, len: usize) -> (usize, usize) {
        match self {
            Self::Draws(n) => (len, n.max(1)),
            Self::Visits(n) => (n.clamp(1, len.max(1)), usize::MAX),
        }
    }

    /// Upper bound on ticks needed to visit every box once with no new dirtying.
    ///
    /// For [`Budget::Draws`] this is the bound under the pessimistic assumption
    /// that every visited box is dirty.
    pub fn ticks_per_cycle(self, len: usize) -> usize {
        let per_tick = match self {
            Self::Draws(n) | Self::Visits(n) => n.max(1),
        };
        len.div_ceil(per_tick)
    }
}

/// Work done by one tick.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    /// Boxes the cursor passed over.
    pub visited: usize,
    /// Boxes drawn (a subset of the visited ones).
    pub drawn: usize,
}

/// Redraws dirty boxes a bounded number at a time.
///
/// The scheduler keeps a cursor into the world that persists across ticks.
/// Each tick resumes at the cursor, draws the dirty boxes it meets, and
/// advances past every visited box, wrapping at the end. No box can be passed
/// over twice before the cursor completes a full cycle, so a dirty box is drawn
/// within [`Budget::ticks_per_cycle`] ticks even when the dirty set is larger
/// than the budget.
#[derive(Clone, Debug, Default)]
pub struct RedrawScheduler {
    cursor: usize,
    budget: Budget,
}

impl RedrawScheduler {
    /// Create a scheduler with the given budget, cursor at the first box.
    pub fn new(budget: Budget) -> Self {
        Self { cursor: 0, budget }
    }

    /// Current budget.
    pub fn budget(&self) -> Budget {
        self.budget
    }

    /// Change the budget. The cursor is kept.
    pub fn set_budget(&mut self, budget: Budget) {
        self.budget = budget;
    }

    /// Index of the next box to visit.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Apply the palette's line width, then run one budgeted pass.
    pub fn tick(
        &mut self,
        world: &mut World,
        surface: &mut impl Surface,
        palette: &Palette,
    ) -> TickReport {
        surface.set_line_width(palette.line_width);
        self.run(world, surface, palette)
    }

    /// Run one budgeted pass without touching frame-level surface state.
    pub fn run(
        &mut self,
        world: &mut World,
        surface: &mut impl Surface,
        palette: &Palette,
    ) -> TickReport {
        let boxes = world.as_mut_slice();
        let len = boxes.len();
        if len == 0 {
            self.cursor = 0;
            return TickReport::default();
        }
        if self.cursor >= len {
            self.cursor %= len;
        }

        let (max_visits, max_draws) = self.budget.limits(len);
        let mut report = TickReport::default();
        while report.visited < max_visits && report.drawn < max_draws {
            let node = &mut boxes[self.cursor];
            if node.needs_draw() {
                draw_box(surface, node, palette);
                node.clear_dirty();
                report.drawn += 1;
            }
            report.visited += 1;
            self.cursor += 1;
            if self.cursor == len {
                self.cursor = 0;
            }
        }
        tracing::trace!(
            visited = report.visited,
            drawn = report.drawn,
            cursor = self.cursor,
            "redraw tick"
        );
        report
    }

    /// Invalidate every box after the surface was cleared or resized.
    pub fn resize(&mut self, world: &mut World) {
        world.invalidate_all();
        tracing::debug!(boxes = world.len(), "surface resized; all boxes invalidated");
    }
}
