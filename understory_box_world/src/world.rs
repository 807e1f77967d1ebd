// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Append-only box registry.

use alloc::vec::Vec;
use kurbo::Rect;

use crate::geom::paints_into;
use crate::node::BoxNode;
use crate::types::BoxId;

/// Ordered, append-only collection of boxes.
///
/// Iteration order is insertion order. The world owns its boxes; other
/// components refer to them by [`BoxId`].
///
/// A world is not synchronized. It is meant to be mutated from the single
/// context that drives both pointer handling and the frame tick.
#[derive(Clone, Default)]
pub struct World {
    boxes: Vec<BoxNode>,
}

impl core::fmt::Debug for World {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("World")
            .field("len", &self.boxes.len())
            .field("dirty", &self.dirty_count())
            .finish_non_exhaustive()
    }
}

impl World {
    /// Create an empty world.
    pub fn new() -> Self {
        Self { boxes: Vec::new() }
    }

    /// Create an empty world with room for `capacity` boxes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            boxes: Vec::with_capacity(capacity),
        }
    }

    /// Append a box and return its id.
    pub fn register(&mut self, node: BoxNode) -> BoxId {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "BoxId uses 32-bit indices by design."
        )]
        let id = BoxId::new(self.boxes.len() as u32);
        self.boxes.push(node);
        id
    }

    /// Number of boxes.
    pub fn len(&self) -> usize {
        self.boxes.len()
    }

    /// True if no boxes have been registered.
    pub fn is_empty(&self) -> bool {
        self.boxes.is_empty()
    }

    /// Look up a box.
    pub fn get(&self, id: BoxId) -> Option<&BoxNode> {
        self.boxes.get(id.index())
    }

    /// Look up a box mutably.
    pub fn get_mut(&mut self, id: BoxId) -> Option<&mut BoxNode> {
        self.boxes.get_mut(id.index())
    }

    /// Boxes in spawn order.
    pub fn as_slice(&self) -> &[BoxNode] {
        &self.boxes
    }

    /// Boxes in spawn order, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [BoxNode] {
        &mut self.boxes
    }

    /// All ids in spawn order.
    pub fn ids(&self) -> impl Iterator<Item = BoxId> + use<> {
        #[allow(
            clippy::cast_possible_truncation,
            reason = "BoxId uses 32-bit indices by design."
        )]
        let len = self.boxes.len() as u32;
        (0..len).map(BoxId::new)
    }

    /// Iterate `(id, box)` pairs in spawn order.
    pub fn iter(&self) -> impl Iterator<Item = (BoxId, &BoxNode)> + '_ {
        self.ids().zip(self.boxes.iter())
    }

    /// Iterate `(id, box)` pairs in spawn order, mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (BoxId, &mut BoxNode)> + '_ {
        self.ids().zip(self.boxes.iter_mut())
    }

    /// Mark every box stale.
    pub fn invalidate_all(&mut self) {
        for b in &mut self.boxes {
            b.mark_dirty();
        }
    }

    /// Mark every box painting into `rect` stale. Returns how many were marked.
    ///
    /// Coverage is judged by [`paints_into`], so inverted boxes count wherever
    /// their pixels are.
    pub fn mark_dirty_in(&mut self, rect: Rect) -> usize {
        let mut marked = 0;
        for b in &mut self.boxes {
            if paints_into(b.bounds(), rect) {
                b.mark_dirty();
                marked += 1;
            }
        }
        marked
    }

    /// Mark every box matching `pred` stale. Returns how many were marked.
    pub fn mark_dirty_where(&mut self, mut pred: impl FnMut(&BoxNode) -> bool) -> usize {
        let mut marked = 0;
        for b in &mut self.boxes {
            if pred(b) {
                b.mark_dirty();
                marked += 1;
            }
        }
        marked
    }

    /// Number of boxes currently waiting to be drawn.
    pub fn dirty_count(&self) -> usize {
        self.boxes.iter().filter(|b| b.needs_draw()).count()
    }
}

impl core::ops::Index<BoxId> for World {
    type Output = BoxNode;

    fn index(&self, id: BoxId) -> &BoxNode {
        &self.boxes[id.index()]
    }
}

impl core::ops::IndexMut<BoxId> for World {
    fn index_mut(&mut self, id: BoxId) -> &mut BoxNode {
        &mut self.boxes[id.index()]
    }
}
