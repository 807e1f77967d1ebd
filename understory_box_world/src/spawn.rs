// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Populating a world with randomly placed boxes.

use kurbo::{Point, Size, Vec2};

use crate::error::ConfigError;
use crate::node::{BoxConfig, BoxNode};
use crate::types::DimensionPolicy;
use crate::world::World;

/// Source of uniformly distributed unsigned integers.
pub trait RandomSource {
    /// Next uniformly distributed `u32`.
    fn next_u32(&mut self) -> u32;

    /// Next uniformly distributed `u8`. Defaults to the high byte of [`Self::next_u32`].
    fn next_u8(&mut self) -> u8 {
        self.next_u32().to_be_bytes()[0]
    }
}

/// Small deterministic xorshift generator.
#[derive(Clone, Debug)]
pub struct XorShift32(u32);

impl XorShift32 {
    /// Seed the generator. A zero seed is replaced by a fixed non-zero one.
    pub const fn new(seed: u32) -> Self {
        if seed == 0 {
            Self(0x9E37_79B9)
        } else {
            Self(seed)
        }
    }
}

impl RandomSource for XorShift32 {
    fn next_u32(&mut self) -> u32 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.0 = x;
        x
    }
}

/// Parameters for [`spawn`].
///
/// Each axis of a box gets `size_base + (u8 % size_jitter) + size_bias` units.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SpawnConfig {
    /// Number of boxes to add.
    pub count: usize,
    /// Base extent of each axis.
    pub size_base: i32,
    /// Modulus applied to the random byte.
    pub size_jitter: u8,
    /// Offset added after the jitter. Negative values can invert boxes.
    pub size_bias: i32,
    /// Treatment of negative extents.
    pub dimension_policy: DimensionPolicy,
}

impl Default for SpawnConfig {
    fn default() -> Self {
        Self {
            count: 200_000,
            size_base: 5,
            size_jitter: 10,
            size_bias: -5,
            dimension_policy: DimensionPolicy::Preserve,
        }
    }
}

impl SpawnConfig {
    /// Check the jitter modulus and that every extent fits in an `i32`.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.size_jitter == 0 {
            return Err(ConfigError::ZeroJitter);
        }
        self.size_base
            .checked_add(self.size_bias)
            .and_then(|low| low.checked_add(i32::from(self.size_jitter - 1)))
            .ok_or(ConfigError::ExtentOverflow)?;
        Ok(())
    }

    fn extent(&self, rng: &mut impl RandomSource) -> f64 {
        let jitter = i32::from(rng.next_u8() % self.size_jitter);
        // Range checked by `validate`.
        f64::from(self.size_base + self.size_bias + jitter)
    }
}

/// Append `config.count` boxes scattered over `viewport`.
///
/// Positions are whole units: `x = u32 % width`, `y = u32 % height`, with the
/// viewport truncated to whole units. The viewport is only read here.
///
/// Returns the number of boxes added.
pub fn spawn(
    world: &mut World,
    rng: &mut impl RandomSource,
    viewport: Size,
    config: &SpawnConfig,
) -> Result<usize, ConfigError> {
    config.validate()?;
    let (width, height) = whole_units(viewport)?;
    for _ in 0..config.count {
        let x = f64::from(rng.next_u32() % width);
        let y = f64::from(rng.next_u32() % height);
        let w = config.extent(rng);
        let h = config.extent(rng);
        let node = BoxNode::new(BoxConfig {
            position: Point::new(x, y),
            dimensions: Vec2::new(w, h),
            dimension_policy: config.dimension_policy,
            ..Default::default()
        })?;
        world.register(node);
    }
    tracing::debug!(
        count = config.count,
        width,
        height,
        total = world.len(),
        "spawned boxes"
    );
    Ok(config.count)
}

fn whole_units(viewport: Size) -> Result<(u32, u32), ConfigError> {
    let empty = ConfigError::EmptyViewport {
        width: viewport.width,
        height: viewport.height,
    };
    if !viewport.is_finite() || viewport.width < 1.0 || viewport.height < 1.0 {
        return Err(empty);
    }
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Viewports are truncated to whole units; values past u32::MAX saturate."
    )]
    let dims = (viewport.width as u32, viewport.height as u32);
    Ok(dims)
}
