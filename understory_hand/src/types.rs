// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Public types for the hand: gesture states, configuration, and move outcomes.

use understory_box_world::ConfigError;

/// Gesture state of a [`Hand`](crate::Hand).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HandState {
    /// Pointer is up.
    #[default]
    Idle,
    /// Pointer went down outside the selection; moves resize the marquee.
    Selecting,
    /// Pointer went down inside the selection; moves translate the selected boxes.
    Dragging,
}

/// What to do when consecutive selection samples are far apart.
///
/// A large jump means the marquee swept over many boxes since the previous
/// sample, so the selection sweep is comparatively expensive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum JumpPolicy {
    /// Sweep on every sample regardless of distance.
    #[default]
    Immediate,
    /// On a jump, mark the selection stale and sweep later in
    /// [`Hand::refresh_selection`](crate::Hand::refresh_selection).
    Defer,
}

/// Tuning for a [`Hand`](crate::Hand).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HandConfig {
    /// Distance between consecutive selection samples above which a sample
    /// counts as a jump.
    pub jump_threshold: f64,
    /// How jumps are handled.
    pub jump_policy: JumpPolicy,
}

impl Default for HandConfig {
    fn default() -> Self {
        Self {
            jump_threshold: 10.0,
            jump_policy: JumpPolicy::Immediate,
        }
    }
}

impl HandConfig {
    /// Check that the jump threshold is a finite, non-negative distance.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.jump_threshold.is_finite() {
            return Err(ConfigError::NonFinite {
                field: "jump_threshold",
            });
        }
        if self.jump_threshold < 0.0 {
            return Err(ConfigError::Negative {
                field: "jump_threshold",
            });
        }
        Ok(())
    }
}

/// Result of [`Hand::pointer_move`](crate::Hand::pointer_move).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Pointer is not down; nothing happened.
    Ignored,
    /// The selection was swept.
    Selected {
        /// Boxes that joined the selection.
        added: usize,
        /// Boxes that left the selection.
        removed: usize,
    },
    /// The sample was a jump and the sweep was deferred.
    Deferred,
    /// The selected boxes and the marquee were translated.
    Dragged {
        /// Number of boxes moved.
        moved: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_validation() {
        assert!(HandConfig::default().validate().is_ok());
        let config = HandConfig {
            jump_threshold: -1.0,
            ..Default::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::Negative {
                field: "jump_threshold"
            })
        );
        let config = HandConfig {
            jump_threshold: f64::INFINITY,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }
}
