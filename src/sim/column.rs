// column.rs - Falling columns
//
// One slot per glyph cell across the surface. Only the fall offset (in
// cells) is carried from frame to frame; speed is rolled fresh every frame.

use crate::config::RainConfig;
use crate::rng::RandomSource;

/// Offset a fresh column starts at: the first row, just under the top edge.
pub const START_OFFSET: u32 = 1;

#[derive(Debug, Clone, Default)]
pub struct Columns {
    pub offset: Vec<u32>,
}

impl Columns {
    pub fn new(count: usize) -> Self {
        Self { offset: vec![START_OFFSET; count] }
    }

    /// Rebuild for `count` slots. Nothing survives from the previous layout.
    pub fn reset(&mut self, count: usize) {
        self.offset.clear();
        self.offset.resize(count, START_OFFSET);
    }

    pub fn len(&self) -> usize {
        self.offset.len()
    }

    #[inline]
    pub fn advance(&mut self, i: usize, step: u32) {
        self.offset[i] = self.offset[i].saturating_add(step);
    }

    #[inline]
    pub fn restart(&mut self, i: usize) {
        self.offset[i] = 0;
    }
}

/// Cells a column falls this frame.
#[inline]
pub fn fall_step(cfg: &RainConfig, rng: &mut impl RandomSource) -> u32 {
    if rng.chance(cfg.fast_step_chance) { cfg.fast_step } else { 1 }
}

/// Whether a column that has left the surface starts over this frame.
/// Rolled per column so exits do not line up into synchronized waves.
#[inline]
pub fn should_restart(cfg: &RainConfig, rng: &mut impl RandomSource) -> bool {
    rng.chance(cfg.restart_chance)
}
