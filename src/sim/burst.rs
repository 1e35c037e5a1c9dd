// burst.rs - Rare horizontal flourishes
//
// A burst is rolled, drawn once and forgotten. It ignores the column grid.

use crate::config::RainConfig;
use crate::render::{GlyphStyle, Surface};
use crate::rng::RandomSource;
use crate::theme::{GLYPHS, Palette, Rgba};

#[derive(Debug, Clone, PartialEq)]
pub struct Burst {
    pub x: f32,
    pub y: f32,
    pub color: Rgba,
    pub glyphs: Vec<char>,
}

impl Burst {
    /// Roll for a burst this frame on a `w`x`h` surface.
    pub fn roll(
        cfg: &RainConfig,
        palette: &Palette,
        w: u32,
        h: u32,
        rng: &mut impl RandomSource,
    ) -> Option<Self> {
        if !rng.chance(cfg.burst_chance) {
            return None;
        }

        let x = rng.next_f32() * w as f32;
        let y = rng.next_f32() * h as f32;
        let color = rng.pick(palette.highlight);
        let len = rng.range(cfg.burst_min, cfg.burst_max) as usize;
        let glyphs = (0..len).map(|_| rng.pick(GLYPHS)).collect();

        Some(Self { x, y, color, glyphs })
    }

    pub fn draw(&self, surface: &mut impl Surface, cell: f32) {
        let style = GlyphStyle { color: self.color, size: cell, bold: true };
        for (k, &g) in self.glyphs.iter().enumerate() {
            surface.glyph(g, self.x + k as f32 * cell, self.y, style);
        }
    }
}
