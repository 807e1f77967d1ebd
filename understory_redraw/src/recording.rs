// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`Surface`] that records calls instead of rasterizing.
//!
//! Intended for tests, headless runs, and debugging that want to assert on the
//! emitted operations and on the style in effect when each one was issued.

use alloc::vec::Vec;
use kurbo::Rect;
use peniko::Color;

use crate::surface::Surface;

/// One recorded surface call.
#[derive(Copy, Clone, Debug)]
pub enum SurfaceOp {
    /// [`Surface::set_line_width`].
    LineWidth(f64),
    /// [`Surface::set_stroke_style`].
    StrokeStyle(Color),
    /// [`Surface::set_fill_style`].
    FillStyle(Color),
    /// [`Surface::stroke_rect`], with the stroke color in effect.
    StrokeRect {
        /// Rectangle as passed (`x0 = x`, `x1 = x + w`); not normalized.
        rect: Rect,
        /// Stroke color at the time of the call.
        color: Color,
    },
    /// [`Surface::fill_rect`], with the fill color in effect.
    FillRect {
        /// Rectangle as passed (`x0 = x`, `x1 = x + w`); not normalized.
        rect: Rect,
        /// Fill color at the time of the call.
        color: Color,
    },
}

/// Recording surface with current style tracking.
#[derive(Clone, Debug)]
pub struct RecordingSurface {
    ops: Vec<SurfaceOp>,
    line_width: f64,
    stroke: Color,
    fill: Color,
}

impl Default for RecordingSurface {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordingSurface {
    /// Create an empty recorder. Styles start out black with a line width of 1.
    pub fn new() -> Self {
        Self {
            ops: Vec::new(),
            line_width: 1.0,
            stroke: Color::BLACK,
            fill: Color::BLACK,
        }
    }

    /// All recorded calls in order.
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Forget the recorded calls, keeping the current style.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Current line width.
    pub fn line_width(&self) -> f64 {
        self.line_width
    }

    /// Filled rectangles with the color used for each.
    pub fn fills(&self) -> impl Iterator<Item = (Rect, Color)> + '_ {
        self.ops.iter().filter_map(|op| match *op {
            SurfaceOp::FillRect { rect, color } => Some((rect, color)),
            _ => None,
        })
    }

    /// Stroked rectangles with the color used for each.
    pub fn strokes(&self) -> impl Iterator<Item = (Rect, Color)> + '_ {
        self.ops.iter().filter_map(|op| match *op {
            SurfaceOp::StrokeRect { rect, color } => Some((rect, color)),
            _ => None,
        })
    }
}

impl Surface for RecordingSurface {
    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
        self.ops.push(SurfaceOp::LineWidth(width));
    }

    fn set_stroke_style(&mut self, color: Color) {
        self.stroke = color;
        self.ops.push(SurfaceOp::StrokeStyle(color));
    }

    fn set_fill_style(&mut self, color: Color) {
        self.fill = color;
        self.ops.push(SurfaceOp::FillStyle(color));
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(SurfaceOp::StrokeRect {
            rect: Rect::new(x, y, x + w, y + h),
            color: self.stroke,
        });
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        self.ops.push(SurfaceOp::FillRect {
            rect: Rect::new(x, y, x + w, y + h),
            color: self.fill,
        });
    }
}
