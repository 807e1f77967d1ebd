// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rendering surface abstraction and box styling.

use peniko::Color;
use understory_box_world::{BoxNode, ConfigError};

/// Minimal immediate-mode drawing surface.
///
/// This mirrors a 2D canvas context: style state is set, then rectangles are
/// stroked or filled with the current style. Widths and heights are passed raw
/// and may be negative.
pub trait Surface {
    /// Set the stroke line width.
    fn set_line_width(&mut self, width: f64);

    /// Set the color used by [`Surface::stroke_rect`].
    fn set_stroke_style(&mut self, color: Color);

    /// Set the color used by [`Surface::fill_rect`].
    fn set_fill_style(&mut self, color: Color);

    /// Stroke the outline of a rectangle.
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64);

    /// Fill a rectangle.
    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn set_line_width(&mut self, width: f64) {
        (**self).set_line_width(width);
    }

    fn set_stroke_style(&mut self, color: Color) {
        (**self).set_stroke_style(color);
    }

    fn set_fill_style(&mut self, color: Color) {
        (**self).set_fill_style(color);
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        (**self).stroke_rect(x, y, w, h);
    }

    fn fill_rect(&mut self, x: f64, y: f64, w: f64, h: f64) {
        (**self).fill_rect(x, y, w, h);
    }
}

/// Colors and line width used for boxes and the marquee.
#[derive(Copy, Clone, Debug)]
pub struct Palette {
    /// Line width applied once per frame.
    pub line_width: f64,
    /// Box outline.
    pub stroke: Color,
    /// Box fill when not selected.
    pub fill: Color,
    /// Box fill when selected.
    pub highlight: Color,
    /// Background, used to erase the marquee.
    pub background: Color,
    /// Marquee outline.
    pub marquee: Color,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            line_width: 2.0,
            stroke: Color::BLACK,
            fill: Color::WHITE,
            highlight: Color::from_rgb8(255, 255, 0),
            background: Color::BLACK,
            marquee: Color::WHITE,
        }
    }
}

impl Palette {
    /// Check that the line width is a finite, non-negative number.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.line_width.is_finite() {
            return Err(ConfigError::NonFinite {
                field: "line_width",
            });
        }
        if self.line_width < 0.0 {
            return Err(ConfigError::Negative {
                field: "line_width",
            });
        }
        Ok(())
    }
}

/// Draw one box with its current geometry and highlight state.
///
/// This does not touch the box's dirty flag.
pub fn draw_box(surface: &mut impl Surface, node: &BoxNode, palette: &Palette) {
    let p = node.position();
    let d = node.dimensions();
    surface.set_stroke_style(palette.stroke);
    surface.stroke_rect(p.x, p.y, d.x, d.y);
    surface.set_fill_style(if node.is_highlighted() {
        palette.highlight
    } else {
        palette.fill
    });
    surface.fill_rect(p.x, p.y, d.x, d.y);
}
