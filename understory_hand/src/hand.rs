// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The hand: pointer gestures to selection and group drag.

use hashbrown::HashSet;
use kurbo::{Point, Rect, Vec2};
use understory_box_world::geom::{
    contains, displacement, distance, overlaps_rect, selection_rect, sum,
};
use understory_box_world::{BoxId, World};

use crate::types::{HandConfig, HandState, JumpPolicy, MoveOutcome};

/// Interaction state for a single pointer.
///
/// The hand owns the selection set and the marquee corners; the boxes
/// themselves stay in the [`World`], which is passed into every call. All calls
/// are expected from one execution context, in input arrival order.
///
/// Invariant: the selection set is exactly the set of boxes with the
/// `HIGHLIGHTED` flag. Every operation that changes one changes the other and
/// marks the box dirty.
#[derive(Clone, Debug, Default)]
pub struct Hand {
    config: HandConfig,
    is_down: bool,
    is_dragging: bool,
    drag_start: Option<Point>,
    drag_offset: Vec2,
    selection_start: Option<Point>,
    selection_end: Option<Point>,
    selection_previous: Option<Point>,
    selected: HashSet<BoxId>,
    extent: Option<Rect>,
    stale: bool,
}

impl Hand {
    /// Create an idle hand with no selection.
    pub fn new(config: HandConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Current configuration.
    pub fn config(&self) -> &HandConfig {
        &self.config
    }

    /// Current gesture state.
    pub fn state(&self) -> HandState {
        match (self.is_down, self.is_dragging) {
            (false, _) => HandState::Idle,
            (true, false) => HandState::Selecting,
            (true, true) => HandState::Dragging,
        }
    }

    /// Whether the pointer is down.
    pub fn is_down(&self) -> bool {
        self.is_down
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.is_dragging
    }

    /// Corner where the marquee started (moved along while dragging).
    pub fn selection_start(&self) -> Option<Point> {
        self.selection_start
    }

    /// Opposite marquee corner. `None` until the first move of a selection.
    pub fn selection_end(&self) -> Option<Point> {
        self.selection_end
    }

    /// Normalized marquee rectangle, if both corners are known.
    pub fn selection_rect(&self) -> Option<Rect> {
        Some(selection_rect(self.selection_start?, self.selection_end?))
    }

    /// Union of the marquee and the bounds of every selected box.
    ///
    /// This is the area whose pixels go stale when the selection is dragged.
    pub fn extent(&self) -> Option<Rect> {
        self.extent
    }

    /// Selected boxes, in no particular order.
    pub fn selected(&self) -> impl Iterator<Item = BoxId> + '_ {
        self.selected.iter().copied()
    }

    /// Number of selected boxes.
    pub fn selected_len(&self) -> usize {
        self.selected.len()
    }

    /// Whether `id` is selected.
    pub fn is_selected(&self, id: BoxId) -> bool {
        self.selected.contains(&id)
    }

    /// Whether a deferred sweep is pending.
    pub fn is_stale(&self) -> bool {
        self.stale
    }

    /// Handle pointer-down.
    ///
    /// Inside the current marquee (boundary inclusive) this starts a drag of
    /// the selection. Anywhere else it clears the selection and starts a new
    /// one at `position`. A down while already down first ends the previous
    /// gesture, as if the pointer had been released.
    pub fn pointer_down(&mut self, world: &mut World, position: Point) -> HandState {
        if self.is_down {
            self.pointer_up(world);
        }
        self.refresh_selection(world);
        self.is_down = true;

        if contains(position, self.selection_start, self.selection_end) {
            let Some(start) = self.selection_start else {
                return self.state();
            };
            self.drag_start = Some(position);
            self.drag_offset = displacement(start, position);
            self.is_dragging = true;
            for &id in &self.selected {
                if let Some(node) = world.get_mut(id) {
                    node.snapshot_anchor();
                }
            }
            tracing::debug!(
                x = position.x,
                y = position.y,
                selected = self.selected.len(),
                "drag started"
            );
        } else {
            let cleared = self.clear_selection(world);
            self.selection_start = Some(position);
            self.selection_end = None;
            self.selection_previous = None;
            tracing::debug!(
                x = position.x,
                y = position.y,
                cleared,
                "selection started"
            );
        }
        self.state()
    }

    /// Handle pointer-move. A no-op while the pointer is up.
    pub fn pointer_move(&mut self, world: &mut World, position: Point) -> MoveOutcome {
        if !self.is_down {
            return MoveOutcome::Ignored;
        }
        if self.is_dragging {
            return self.drag_to(world, position);
        }

        self.selection_end = Some(position);
        let jumped = self
            .selection_previous
            .is_some_and(|prev| distance(prev, position) > self.config.jump_threshold);
        self.selection_previous = Some(position);
        if jumped {
            tracing::trace!(
                x = position.x,
                y = position.y,
                policy = ?self.config.jump_policy,
                "large pointer jump during selection"
            );
            if self.config.jump_policy == JumpPolicy::Defer {
                self.stale = true;
                return MoveOutcome::Deferred;
            }
        }

        let (added, removed) = self.sweep(world);
        MoveOutcome::Selected { added, removed }
    }

    /// Handle pointer-up. A no-op while the pointer is already up.
    ///
    /// Ending a drag re-anchors every selected box at its new position, so the
    /// next drag starts from there. The selection itself is kept.
    pub fn pointer_up(&mut self, world: &mut World) -> HandState {
        if !self.is_down {
            return self.state();
        }
        self.refresh_selection(world);
        if self.is_dragging {
            for &id in &self.selected {
                if let Some(node) = world.get_mut(id) {
                    node.snapshot_anchor();
                }
            }
            self.is_dragging = false;
            self.drag_start = None;
            tracing::debug!(selected = self.selected.len(), "drag ended");
        } else {
            tracing::debug!(selected = self.selected.len(), "selection ended");
        }
        self.is_down = false;
        self.state()
    }

    /// Run a deferred sweep, if one is pending. Returns `true` if it ran.
    pub fn refresh_selection(&mut self, world: &mut World) -> bool {
        if !self.stale {
            return false;
        }
        let (added, removed) = self.sweep(world);
        tracing::trace!(added, removed, "deferred selection sweep");
        true
    }

    /// Take over the highlight state already present in `world`.
    ///
    /// Every box with the `HIGHLIGHTED` flag becomes selected and is anchored
    /// at its current position. Any previous selection is forgotten without
    /// touching the world. Returns the number of boxes adopted.
    pub fn adopt(&mut self, world: &mut World) -> usize {
        self.selected.clear();
        self.extent = None;
        self.stale = false;
        for (id, node) in world.iter_mut() {
            if node.is_highlighted() {
                node.snapshot_anchor();
                self.selected.insert(id);
            }
        }
        self.selected.len()
    }

    /// Deselect every selected box, marking each dirty. Returns how many were cleared.
    pub fn clear_selection(&mut self, world: &mut World) -> usize {
        let cleared = self.selected.len();
        for id in self.selected.drain() {
            if let Some(node) = world.get_mut(id) {
                node.set_highlighted(false);
                node.mark_dirty();
            }
        }
        self.extent = None;
        self.stale = false;
        cleared
    }

    /// Update highlights against the current marquee.
    ///
    /// Only boxes whose membership changes are mutated: boxes entering the
    /// marquee are highlighted, anchored, and added; boxes leaving it are
    /// un-highlighted and removed. Both kinds are marked dirty. Membership is
    /// judged by the selection set, so a box highlighted behind the hand's back
    /// is brought back in line either way.
    fn sweep(&mut self, world: &mut World) -> (usize, usize) {
        self.stale = false;
        let Some(rect) = self.selection_rect() else {
            return (0, 0);
        };
        let mut extent = rect;
        let (mut added, mut removed) = (0, 0);
        for (id, node) in world.iter_mut() {
            if overlaps_rect(node.bounds(), rect) {
                extent = extent.union(node.bounds().to_rect());
                if node.is_highlighted() && self.selected.contains(&id) {
                    continue;
                }
                node.set_highlighted(true);
                node.mark_dirty();
                node.snapshot_anchor();
                self.selected.insert(id);
                added += 1;
            } else {
                if !node.is_highlighted() {
                    continue;
                }
                node.set_highlighted(false);
                node.mark_dirty();
                self.selected.remove(&id);
                removed += 1;
            }
        }
        self.extent = Some(extent);
        (added, removed)
    }

    fn drag_to(&mut self, world: &mut World, position: Point) -> MoveOutcome {
        let (Some(start), Some(end), Some(drag_start)) =
            (self.selection_start, self.selection_end, self.drag_start)
        else {
            return MoveOutcome::Ignored;
        };
        let dimensions = displacement(end, start);
        let new_start = sum(position, self.drag_offset);
        let new_end = sum(new_start, dimensions);
        let moved_by = displacement(position, drag_start);

        let mut extent = selection_rect(new_start, new_end);
        for &id in &self.selected {
            if let Some(node) = world.get_mut(id) {
                node.move_from_anchor(moved_by);
                node.mark_dirty();
                extent = extent.union(node.bounds().to_rect());
            }
        }
        self.selection_start = Some(new_start);
        self.selection_end = Some(new_end);
        self.extent = Some(extent);
        MoveOutcome::Dragged {
            moved: self.selected.len(),
        }
    }
}
