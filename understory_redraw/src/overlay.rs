// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marquee overlay: erase-then-redraw of the selection rectangle.
//!
//! The marquee is painted straight onto the surface rather than tracked as a
//! box, so moving it leaves its old pixels behind. The overlay remembers what
//! it drew last frame and, when the target changes, paints over the old
//! marquee in the background color before the new one is stroked.
//!
//! Erasing is a dirty region of its own. Boxes under the erased area lose
//! their pixels, so the caller re-dirties them with [`Erased::touches`] and the
//! [`RedrawScheduler`](crate::RedrawScheduler) repaints them like any other
//! stale box.
//!
//! ## Usage
//!
//! 1) After input, call [`MarqueeOverlay::set_target`] with where the marquee should be.
//! 2) At the start of the frame, call [`MarqueeOverlay::flush_erase`] and mark the boxes
//!    the returned [`Erased`] region touches.
//! 3) Run the box redraw.
//! 4) Call [`MarqueeOverlay::draw`] so the outline ends up on top.

use kurbo::Rect;
use understory_box_world::Bounds;
use understory_box_world::geom::{paints_into, touches_outline};

use crate::surface::{Palette, Surface};

/// How the previously drawn marquee is erased.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum EraseMode {
    /// Repaint only the outline band. Used while selecting, where nothing under
    /// the marquee moves.
    #[default]
    Outline,
    /// Clear the whole extent. Used while dragging, where the selected boxes
    /// leave their old pixels inside the extent.
    Fill,
}

/// Where the marquee should be and how to erase it once it moves.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Marquee {
    /// Normalized selection rectangle to stroke.
    pub outline: Rect,
    /// Area whose pixels may go stale when the marquee moves (the outline
    /// plus anything dragged along with it).
    pub extent: Rect,
    /// Erase policy for this marquee.
    pub erase: EraseMode,
}

impl Marquee {
    /// A marquee whose extent is its own outline, erased as an outline.
    pub fn outline(rect: Rect) -> Self {
        Self {
            outline: rect,
            extent: rect,
            erase: EraseMode::Outline,
        }
    }

    fn same_place(&self, other: &Self) -> bool {
        self.outline == other.outline && self.extent == other.extent
    }
}

/// Region painted over by [`MarqueeOverlay::flush_erase`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Erased {
    /// The band of `2 * half_width` around `rect`'s outline.
    Outline {
        /// The old marquee outline.
        rect: Rect,
        /// Half the width of the erased band.
        half_width: f64,
    },
    /// The whole rectangle.
    Fill {
        /// The filled rectangle.
        rect: Rect,
        /// How far a box's own stroke reaches past its bounds.
        spill: f64,
    },
}

impl Erased {
    /// Whether a box with these bounds had pixels in the erased region.
    pub fn touches(&self, bounds: Bounds) -> bool {
        match *self {
            Self::Outline { rect, half_width } => touches_outline(bounds, rect, half_width),
            Self::Fill { rect, spill } => paints_into(bounds, rect.inflate(spill, spill)),
        }
    }
}

/// Tracks the drawn and target marquee.
#[derive(Clone, Debug, Default)]
pub struct MarqueeOverlay {
    drawn: Option<Marquee>,
    target: Option<Marquee>,
}

impl MarqueeOverlay {
    /// Create an overlay with nothing drawn.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set where the marquee should be from the next frame on. `None` hides it.
    pub fn set_target(&mut self, target: Option<Marquee>) {
        self.target = target;
    }

    /// Marquee that the next [`Self::draw`] will stroke.
    pub fn target(&self) -> Option<Marquee> {
        self.target
    }

    /// Marquee currently on the surface.
    pub fn drawn(&self) -> Option<Marquee> {
        self.drawn
    }

    /// Whether the surface no longer shows the target.
    pub fn needs_erase(&self) -> bool {
        match (self.drawn, self.target) {
            (Some(drawn), Some(target)) => !drawn.same_place(&target),
            (Some(_), None) => true,
            (None, _) => false,
        }
    }

    /// Paint over the previously drawn marquee if it is out of date.
    ///
    /// Returns the erased region so the caller can re-dirty boxes under it.
    pub fn flush_erase(
        &mut self,
        surface: &mut impl Surface,
        palette: &Palette,
    ) -> Option<Erased> {
        if !self.needs_erase() {
            return None;
        }
        let old = self.drawn.take()?;
        let fill = old.erase == EraseMode::Fill
            || self.target.is_some_and(|t| t.erase == EraseMode::Fill);
        let erased = if fill {
            let half = palette.line_width;
            let rect = old.extent.union(old.outline).inflate(half, half);
            surface.set_fill_style(palette.background);
            surface.fill_rect(rect.x0, rect.y0, rect.width(), rect.height());
            Erased::Fill {
                rect,
                spill: palette.line_width / 2.0,
            }
        } else {
            let r = old.outline;
            surface.set_stroke_style(palette.background);
            surface.stroke_rect(r.x0, r.y0, r.width(), r.height());
            Erased::Outline {
                rect: r,
                half_width: palette.line_width,
            }
        };
        Some(erased)
    }

    /// Stroke the target marquee, if any, and record it as drawn.
    pub fn draw(&mut self, surface: &mut impl Surface, palette: &Palette) {
        self.drawn = self.target;
        if let Some(m) = self.target {
            let r = m.outline;
            surface.set_stroke_style(palette.marquee);
            surface.stroke_rect(r.x0, r.y0, r.width(), r.height());
        }
    }

    /// Forget what was drawn, for example after the surface was cleared.
    pub fn invalidate(&mut self) {
        self.drawn = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recording::{RecordingSurface, SurfaceOp};
    use alloc::vec::Vec;
    use kurbo::{Point, Vec2};

    fn bounds(x: f64, y: f64, w: f64, h: f64) -> Bounds {
        Bounds::from_origin_dimensions(Point::new(x, y), Vec2::new(w, h))
    }

    #[test]
    fn first_frame_only_draws() {
        let mut overlay = MarqueeOverlay::new();
        let mut surface = RecordingSurface::new();
        let palette = Palette::default();
        overlay.set_target(Some(Marquee::outline(Rect::new(0.0, 0.0, 10.0, 10.0))));
        assert!(overlay.flush_erase(&mut surface, &palette).is_none());
        overlay.draw(&mut surface, &palette);
        assert_eq!(surface.strokes().count(), 1);
        assert_eq!(surface.fills().count(), 0);
        assert_eq!(overlay.drawn(), overlay.target());
    }

    #[test]
    fn unchanged_target_is_not_erased() {
        let mut overlay = MarqueeOverlay::new();
        let mut surface = RecordingSurface::new();
        let palette = Palette::default();
        overlay.set_target(Some(Marquee::outline(Rect::new(0.0, 0.0, 10.0, 10.0))));
        overlay.draw(&mut surface, &palette);
        assert!(!overlay.needs_erase());
        assert!(overlay.flush_erase(&mut surface, &palette).is_none());
    }

    #[test]
    fn moved_outline_erases_band_in_background() {
        let mut overlay = MarqueeOverlay::new();
        let mut surface = RecordingSurface::new();
        let palette = Palette::default();
        let old = Rect::new(0.0, 0.0, 100.0, 100.0);
        overlay.set_target(Some(Marquee::outline(old)));
        overlay.draw(&mut surface, &palette);
        overlay.set_target(Some(Marquee::outline(Rect::new(0.0, 0.0, 120.0, 100.0))));
        surface.clear();

        let erased = overlay.flush_erase(&mut surface, &palette).unwrap();
        assert_eq!(
            erased,
            Erased::Outline {
                rect: old,
                half_width: palette.line_width
            }
        );
        let strokes: Vec<_> = surface.strokes().collect();
        assert_eq!(strokes.len(), 1);
        assert_eq!(strokes[0].0, old);
        assert_eq!(strokes[0].1.components, palette.background.components);
        assert!(erased.touches(bounds(99.0, 50.0, 5.0, 5.0)));
        assert!(!erased.touches(bounds(40.0, 40.0, 5.0, 5.0)));
    }

    #[test]
    fn drag_erases_whole_extent() {
        let mut overlay = MarqueeOverlay::new();
        let mut surface = RecordingSurface::new();
        let palette = Palette::default();
        let outline = Rect::new(10.0, 10.0, 50.0, 50.0);
        overlay.set_target(Some(Marquee {
            outline,
            extent: Rect::new(5.0, 10.0, 50.0, 55.0),
            erase: EraseMode::Outline,
        }));
        overlay.draw(&mut surface, &palette);

        let moved = outline + Vec2::new(20.0, 5.0);
        overlay.set_target(Some(Marquee {
            outline: moved,
            extent: moved,
            erase: EraseMode::Fill,
        }));
        surface.clear();
        let erased = overlay.flush_erase(&mut surface, &palette).unwrap();
        let lw = palette.line_width;
        let expected = Rect::new(5.0 - lw, 10.0 - lw, 50.0 + lw, 55.0 + lw);
        assert_eq!(
            erased,
            Erased::Fill {
                rect: expected,
                spill: lw / 2.0
            }
        );
        assert!(matches!(
            surface.ops(),
            [SurfaceOp::FillStyle(_), SurfaceOp::FillRect { .. }]
        ));
        assert!(erased.touches(bounds(30.0, 30.0, 2.0, 2.0)));
        // A box just outside the fill still strokes into it.
        assert!(erased.touches(bounds(expected.x1 + 0.5, 30.0, 5.0, 5.0)));
        assert!(!erased.touches(bounds(expected.x1 + lw, 30.0, 5.0, 5.0)));
    }

    #[test]
    fn hiding_erases_and_invalidate_forgets() {
        let mut overlay = MarqueeOverlay::new();
        let mut surface = RecordingSurface::new();
        let palette = Palette::default();
        overlay.set_target(Some(Marquee::outline(Rect::new(0.0, 0.0, 10.0, 10.0))));
        overlay.draw(&mut surface, &palette);
        overlay.set_target(None);
        assert!(overlay.flush_erase(&mut surface, &palette).is_some());
        overlay.draw(&mut surface, &palette);
        assert!(overlay.drawn().is_none());

        overlay.set_target(Some(Marquee::outline(Rect::new(0.0, 0.0, 10.0, 10.0))));
        overlay.draw(&mut surface, &palette);
        overlay.invalidate();
        overlay.set_target(Some(Marquee::outline(Rect::new(5.0, 0.0, 10.0, 10.0))));
        assert!(overlay.flush_erase(&mut surface, &palette).is_none());
    }
}
