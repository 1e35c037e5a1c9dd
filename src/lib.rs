// ============================================================================
// GLYPH WALLPAPER - Falling-character background for the site
// ============================================================================
//
// Columns of random glyphs rain down a full-viewport canvas behind the page,
// leaving a fading trail. The core is host-agnostic: `sim` updates columns
// and paints through the `Surface` trait, `renderer` drives it from whatever
// animation and resize primitives a `Host` offers. On wasm32 the `web`
// module wires that to a canvas and exports `Wallpaper` to JavaScript.

pub mod config;
pub mod host;
pub mod render;
pub mod renderer;
pub mod rng;
pub mod sim;
pub mod theme;

#[cfg(target_arch = "wasm32")]
mod web;

pub use config::{ConfigError, RainConfig};
pub use host::{FrameToken, Host, HostError};
pub use render::{DrawList, DrawOp, GlyphStyle, Surface};
pub use renderer::{Renderer, State};
pub use rng::{RandomSource, Replay, XorShift32};
pub use sim::GlyphRain;
pub use theme::{GLYPHS, Palette, Rgba, Theme};

#[cfg(target_arch = "wasm32")]
pub use web::Wallpaper;
