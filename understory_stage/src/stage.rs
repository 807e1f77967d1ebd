// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The stage and its per-frame update.

use kurbo::{Point, Size};
use understory_box_world::spawn::spawn;
use understory_box_world::{ConfigError, RandomSource, SpawnConfig, World};
use understory_hand::{Hand, HandConfig, HandState, MoveOutcome};
use understory_redraw::{
    Budget, EraseMode, Erased, Marquee, MarqueeOverlay, Palette, RedrawScheduler, Surface,
    TickReport,
};

/// Everything needed to build a [`Stage`].
#[derive(Copy, Clone, Debug, Default)]
pub struct StageConfig {
    /// Per-frame redraw budget.
    pub budget: Budget,
    /// Colors and line width.
    pub palette: Palette,
    /// Selection tuning.
    pub hand: HandConfig,
    /// Population used by [`Stage::spawn`].
    pub spawn: SpawnConfig,
}

impl StageConfig {
    /// Validate every part of the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.palette.validate()?;
        self.hand.validate()?;
        self.spawn.validate()
    }
}

/// Work done by one [`Stage::update`].
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FrameReport {
    /// Whether a deferred selection sweep ran.
    pub refreshed: bool,
    /// Region painted over to erase the previous marquee.
    pub erased: Option<Erased>,
    /// Boxes re-dirtied because they had pixels in the erased region.
    pub erased_marked: usize,
    /// The budgeted box redraw.
    pub tick: TickReport,
}

/// A box world with a pointer and an incremental renderer attached.
///
/// Input methods only mutate state and mark boxes dirty. Nothing is drawn
/// until [`Stage::update`], which a host calls once per frame.
#[derive(Debug)]
pub struct Stage {
    world: World,
    hand: Hand,
    scheduler: RedrawScheduler,
    overlay: MarqueeOverlay,
    palette: Palette,
    spawn: SpawnConfig,
}

impl Stage {
    /// Create an empty stage.
    pub fn new(config: StageConfig) -> Result<Self, ConfigError> {
        Self::with_world(config, World::new())
    }

    /// Create a stage around an existing world. Every box starts dirty.
    ///
    /// Boxes that are already highlighted become the initial selection.
    pub fn with_world(config: StageConfig, mut world: World) -> Result<Self, ConfigError> {
        config.validate()?;
        world.invalidate_all();
        let mut hand = Hand::new(config.hand);
        hand.adopt(&mut world);
        Ok(Self {
            world,
            hand,
            scheduler: RedrawScheduler::new(config.budget),
            overlay: MarqueeOverlay::new(),
            palette: config.palette,
            spawn: config.spawn,
        })
    }

    /// The boxes.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The pointer state and selection.
    pub fn hand(&self) -> &Hand {
        &self.hand
    }

    /// The redraw scheduler.
    pub fn scheduler(&self) -> &RedrawScheduler {
        &self.scheduler
    }

    /// The marquee overlay.
    pub fn overlay(&self) -> &MarqueeOverlay {
        &self.overlay
    }

    /// Colors and line width in use.
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Change the redraw budget from the next frame on.
    pub fn set_budget(&mut self, budget: Budget) {
        self.scheduler.set_budget(budget);
    }

    /// Scatter the configured population over `viewport`.
    ///
    /// New boxes are dirty and are drawn over the following frames.
    pub fn spawn(
        &mut self,
        rng: &mut impl RandomSource,
        viewport: Size,
    ) -> Result<usize, ConfigError> {
        spawn(&mut self.world, rng, viewport, &self.spawn)
    }

    /// Forward a pointer-down.
    pub fn pointer_down(&mut self, position: Point) -> HandState {
        let state = self.hand.pointer_down(&mut self.world, position);
        self.retarget();
        state
    }

    /// Forward a pointer-move.
    pub fn pointer_move(&mut self, position: Point) -> MoveOutcome {
        let outcome = self.hand.pointer_move(&mut self.world, position);
        if outcome != MoveOutcome::Ignored {
            self.retarget();
        }
        outcome
    }

    /// Forward a pointer-up.
    pub fn pointer_up(&mut self) -> HandState {
        let state = self.hand.pointer_up(&mut self.world);
        self.retarget();
        state
    }

    /// The surface was resized or cleared: everything must be painted again.
    pub fn resize(&mut self) {
        self.scheduler.resize(&mut self.world);
        self.overlay.invalidate();
    }

    /// Produce one frame.
    ///
    /// In order: run a deferred selection sweep, set the line width, erase the
    /// old marquee and re-dirty the boxes under it, run the budgeted box
    /// redraw, then stroke the marquee on top.
    pub fn update(&mut self, surface: &mut impl Surface) -> FrameReport {
        let refreshed = self.hand.refresh_selection(&mut self.world);
        if refreshed {
            self.retarget();
        }
        surface.set_line_width(self.palette.line_width);

        let erased = self.overlay.flush_erase(surface, &self.palette);
        let erased_marked = erased.map_or(0, |region| {
            let marked = self
                .world
                .mark_dirty_where(|node| region.touches(node.bounds()));
            tracing::trace!(?region, marked, "marquee erased");
            marked
        });

        let tick = self.scheduler.run(&mut self.world, surface, &self.palette);
        self.overlay.draw(surface, &self.palette);

        FrameReport {
            refreshed,
            erased,
            erased_marked,
            tick,
        }
    }

    fn retarget(&mut self) {
        let erase = if self.hand.is_dragging() {
            EraseMode::Fill
        } else {
            EraseMode::Outline
        };
        let target = self.hand.selection_rect().map(|outline| Marquee {
            outline,
            extent: self.hand.extent().map_or(outline, |e| e.union(outline)),
            erase,
        });
        self.overlay.set_target(target);
    }
}
