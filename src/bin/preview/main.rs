// preview - Render glyph rain frames to a PNG
//
// Runs the same simulation the browser runs, against a software surface,
// so tuning changes can be eyeballed without a page.
//
// Usage: cargo run --bin preview -- out.png [--width 700] [--height 500]
//        [--frames 120] [--theme dark] [--seed N] [--config rain.toml]

mod raster;

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use glyph_wallpaper::{GlyphRain, RainConfig, Theme, XorShift32};
use tracing::info;
use tracing_subscriber::EnvFilter;

use raster::RasterSurface;

#[derive(Parser, Debug)]
#[command(name = "preview", version, about = "Render glyph rain frames to a PNG")]
struct Args {
    /// Output PNG path
    output: PathBuf,

    #[arg(long, default_value_t = 700)]
    width: u32,

    #[arg(long, default_value_t = 500)]
    height: u32,

    /// Frames to simulate before saving
    #[arg(long, default_value_t = 120)]
    frames: u32,

    /// `light` or `dark`; anything else is light
    #[arg(long, default_value = "dark")]
    theme: String,

    #[arg(long, default_value_t = 0xDEAD_BEEF)]
    seed: u32,

    /// TOML file with tuning overrides
    #[arg(long)]
    config: Option<PathBuf>,
}

fn load_config(path: Option<&PathBuf>) -> Result<RainConfig> {
    let Some(path) = path else {
        return Ok(RainConfig::default());
    };
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let cfg: RainConfig = toml::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    cfg.validate()
        .with_context(|| format!("validating config {}", path.display()))?;
    Ok(cfg)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let cfg = load_config(args.config.as_ref())?;
    let theme = Theme::from_flag(&args.theme);

    info!(
        width = args.width,
        height = args.height,
        frames = args.frames,
        %theme,
        "rendering preview"
    );

    let mut surface = RasterSurface::new(args.width, args.height, theme.palette().background);
    let mut rain = GlyphRain::new(cfg, args.width, args.height);
    let mut rng = XorShift32::new(args.seed);

    for _ in 0..args.frames {
        rain.tick(theme, &mut surface, &mut rng);
    }

    surface
        .image()
        .save(&args.output)
        .with_context(|| format!("writing {}", args.output.display()))?;

    info!(columns = rain.column_count(), output = %args.output.display(), "preview written");
    Ok(())
}
