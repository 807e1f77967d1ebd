// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Configuration errors reported at construction time.

use core::fmt;

/// Error returned when a configuration is rejected.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// A coordinate or extent was NaN or infinite.
    NonFinite {
        /// Name of the offending field.
        field: &'static str,
    },
    /// A width or threshold was negative.
    Negative {
        /// Name of the offending field.
        field: &'static str,
    },
    /// The size jitter modulus was zero.
    ZeroJitter,
    /// Base, bias, and jitter together leave the `i32` range.
    ExtentOverflow,
    /// The viewport has no whole-unit area to spawn into.
    EmptyViewport {
        /// Viewport width as given.
        width: f64,
        /// Viewport height as given.
        height: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonFinite { field } => write!(f, "`{field}` must be finite"),
            Self::Negative { field } => write!(f, "`{field}` must not be negative"),
            Self::ZeroJitter => f.write_str("size jitter must be at least 1"),
            Self::ExtentOverflow => f.write_str("box extent range overflows `i32`"),
            Self::EmptyViewport { width, height } => {
                write!(f, "viewport {width}x{height} has no area to spawn into")
            }
        }
    }
}

impl core::error::Error for ConfigError {}
