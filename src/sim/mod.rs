// sim/ - Glyph rain simulation
//
// Column state plus the per-frame update. Each entity type in its own module.

mod burst;
mod column;

pub use burst::Burst;
pub use column::{Columns, START_OFFSET, fall_step, should_restart};

use crate::config::RainConfig;
use crate::render::{GlyphStyle, Surface};
use crate::rng::RandomSource;
use crate::theme::{GLYPHS, Palette, Rgba, Theme};

/// Number of columns that fit across `width` pixels.
#[inline]
pub fn column_count(width: u32, cell_size: u32) -> usize {
    (width / cell_size.max(1)) as usize
}

/// One glyph choice: its color and whether it rolled as a highlight.
#[inline]
pub fn pick_color(
    cfg: &RainConfig,
    palette: &Palette,
    rng: &mut impl RandomSource,
) -> (Rgba, bool) {
    if rng.chance(cfg.highlight_chance) {
        (rng.pick(palette.highlight), true)
    } else {
        (rng.pick(palette.base), false)
    }
}

#[inline]
pub fn pick_glyph(rng: &mut impl RandomSource) -> char {
    rng.pick(GLYPHS)
}

/// Glyph rain world
pub struct GlyphRain {
    // Surface dimensions
    w: u32,
    h: u32,

    cfg: RainConfig,
    columns: Columns,
}

impl GlyphRain {
    pub fn new(cfg: RainConfig, w: u32, h: u32) -> Self {
        let columns = Columns::new(column_count(w, cfg.cell_size));
        Self { w, h, cfg, columns }
    }

    pub fn resize(&mut self, w: u32, h: u32) {
        self.w = w;
        self.h = h;
        self.columns.reset(column_count(w, self.cfg.cell_size));
    }

    /// Paint one frame and advance every column.
    pub fn tick(&mut self, theme: Theme, surface: &mut impl Surface, rng: &mut impl RandomSource) {
        let palette = theme.palette();
        let cell = self.cfg.cell_size as f32;
        let rows = self.h as f32 / cell;

        surface.fade(palette.background.with_alpha(self.cfg.trail_alpha));

        for i in 0..self.columns.len() {
            let glyph = pick_glyph(rng);
            let (mut color, highlight) = pick_color(&self.cfg, palette, rng);

            let offset = self.columns.offset[i];
            let x = i as f32 * cell;
            let y = offset as f32 * cell;

            if self.cfg.depth_fade && rows > 0.0 {
                let depth = (offset as f32 / rows * 0.8).min(1.0);
                color = color.with_alpha(color.a * depth);
            }

            let style = if highlight && self.cfg.highlight_bold {
                GlyphStyle { color, size: cell * self.cfg.highlight_scale, bold: true }
            } else {
                GlyphStyle { color, size: cell, bold: false }
            };
            surface.glyph(glyph, x, y, style);

            self.columns.advance(i, fall_step(&self.cfg, rng));

            if y > self.h as f32 && should_restart(&self.cfg, rng) {
                self.columns.restart(i);
            }
        }

        if let Some(burst) = Burst::roll(&self.cfg, palette, self.w, self.h, rng) {
            burst.draw(surface, cell);
        }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn offsets(&self) -> &[u32] {
        &self.columns.offset
    }
}
