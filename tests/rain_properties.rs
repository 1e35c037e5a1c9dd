//! Property-based invariant tests for the glyph rain.
//!
//! Verifies:
//! 1. Column count is floor(width / cell) at creation and after any resize
//! 2. Resize resets every surviving column to offset 1
//! 3. Offsets only grow, except for a restart to exactly 0
//! 4. Every glyph color in a frame comes from the active theme's palette
//! 5. Same seed, same frames: output is deterministic

use glyph_wallpaper::{DrawList, DrawOp, GlyphRain, RainConfig, Theme, XorShift32};
use proptest::prelude::*;

fn arb_theme() -> impl Strategy<Value = Theme> {
    prop_oneof![Just(Theme::Light), Just(Theme::Dark)]
}

fn arb_config() -> impl Strategy<Value = RainConfig> {
    (1u32..=40, 0.0f32..=1.0, 0.0f32..=1.0, 1u32..=4, 0.0f32..=1.0, any::<bool>()).prop_map(
        |(cell_size, highlight_chance, fast_step_chance, fast_step, restart_chance, depth_fade)| {
            RainConfig {
                cell_size,
                highlight_chance,
                fast_step_chance,
                fast_step,
                restart_chance,
                depth_fade,
                ..RainConfig::default()
            }
        },
    )
}

// ═════════════════════════════════════════════════════════════════════════
// 1-2. Column layout
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn column_count_tracks_width(
        cell in 1u32..=64,
        w in 0u32..=4000,
        w2 in 0u32..=4000,
        h in 1u32..=2000,
        seed in any::<u32>(),
    ) {
        let cfg = RainConfig { cell_size: cell, ..RainConfig::default() };
        let mut rain = GlyphRain::new(cfg, w, h);
        prop_assert_eq!(rain.column_count(), (w / cell) as usize);

        let mut list = DrawList::new(w, h);
        let mut rng = XorShift32::new(seed);
        for _ in 0..5 {
            rain.tick(Theme::Dark, &mut list, &mut rng);
        }

        rain.resize(w2, h);
        prop_assert_eq!(rain.column_count(), (w2 / cell) as usize);
        prop_assert!(rain.offsets().iter().all(|&o| o == 1));
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. Offsets are monotone between restarts
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn offsets_monotone_until_restart(
        cfg in arb_config(),
        w in 1u32..=800,
        h in 1u32..=300,
        seed in any::<u32>(),
        frames in 1usize..=200,
    ) {
        let mut rain = GlyphRain::new(cfg.clone(), w, h);
        let mut list = DrawList::new(w, h);
        let mut rng = XorShift32::new(seed);
        let mut prev = rain.offsets().to_vec();

        for _ in 0..frames {
            rain.tick(Theme::Light, &mut list, &mut rng);
            list.clear();
            for (i, (&before, &after)) in prev.iter().zip(rain.offsets()).enumerate() {
                let was_below = before as u64 * cfg.cell_size as u64 > h as u64;
                prop_assert!(
                    after > before || (after == 0 && was_below),
                    "column {} went {} -> {}", i, before, after
                );
                prop_assert!(after <= before + cfg.fast_step);
            }
            prev = rain.offsets().to_vec();
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. Palette isolation
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn glyph_colors_stay_in_theme(
        cfg in arb_config(),
        theme in arb_theme(),
        switch_at in 0usize..20,
        seed in any::<u32>(),
    ) {
        let cfg = RainConfig { burst_chance: 0.5, ..cfg };
        let mut rain = GlyphRain::new(cfg, 420, 300);
        let mut list = DrawList::new(420, 300);
        let mut rng = XorShift32::new(seed);

        for frame in 0..20 {
            let active = if frame < switch_at { theme } else { theme.toggled() };
            rain.tick(active, &mut list, &mut rng);

            let palette = active.palette();
            for op in list.take() {
                match op {
                    DrawOp::Fade(c) => prop_assert_eq!(c.rgb(), palette.background.rgb()),
                    DrawOp::Glyph { style, .. } => prop_assert!(
                        palette.owns(style.color),
                        "{:?} not in {} palette", style.color, active
                    ),
                }
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. Determinism
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn same_seed_same_frames(seed in any::<u32>(), theme in arb_theme()) {
        let run = || {
            let mut rain = GlyphRain::new(RainConfig::default(), 280, 140);
            let mut list = DrawList::new(280, 140);
            let mut rng = XorShift32::new(seed);
            for _ in 0..30 {
                rain.tick(theme, &mut list, &mut rng);
            }
            (list.take(), rain.offsets().to_vec())
        };
        prop_assert_eq!(run(), run());
    }
}
