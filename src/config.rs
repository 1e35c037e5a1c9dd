// config.rs - Tuning knobs for the rain
//
// The probabilities are plain tuning values carried over as named defaults.
// Every field is optional when deserializing; missing ones take the default.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_CELL_SIZE: u32 = 14;
pub const DEFAULT_TRAIL_ALPHA: f32 = 0.05;
pub const DEFAULT_HIGHLIGHT_CHANCE: f32 = 0.02;
pub const DEFAULT_HIGHLIGHT_SCALE: f32 = 1.15;
pub const DEFAULT_FAST_STEP_CHANCE: f32 = 0.01;
pub const DEFAULT_FAST_STEP: u32 = 2;
pub const DEFAULT_RESTART_CHANCE: f32 = 0.03;
pub const DEFAULT_BURST_CHANCE: f32 = 0.01;
pub const DEFAULT_BURST_MIN: u32 = 3;
pub const DEFAULT_BURST_MAX: u32 = 8;
/// Longest burst a config may ask for.
pub const MAX_BURST_LEN: u32 = 64;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RainConfig {
    /// Glyph cell edge in logical pixels; also the font size.
    pub cell_size: u32,
    /// Opacity of the background overlay painted each frame.
    pub trail_alpha: f32,
    pub highlight_chance: f32,
    /// Draw highlights bold and scaled by `highlight_scale`.
    pub highlight_bold: bool,
    pub highlight_scale: f32,
    pub fast_step_chance: f32,
    /// Cells advanced on a fast frame.
    pub fast_step: u32,
    /// Chance per frame that a column past the bottom starts over.
    pub restart_chance: f32,
    pub burst_chance: f32,
    pub burst_min: u32,
    pub burst_max: u32,
    /// Fade glyphs near the top, brighter as they fall.
    pub depth_fade: bool,
}

impl Default for RainConfig {
    fn default() -> Self {
        Self {
            cell_size: DEFAULT_CELL_SIZE,
            trail_alpha: DEFAULT_TRAIL_ALPHA,
            highlight_chance: DEFAULT_HIGHLIGHT_CHANCE,
            highlight_bold: true,
            highlight_scale: DEFAULT_HIGHLIGHT_SCALE,
            fast_step_chance: DEFAULT_FAST_STEP_CHANCE,
            fast_step: DEFAULT_FAST_STEP,
            restart_chance: DEFAULT_RESTART_CHANCE,
            burst_chance: DEFAULT_BURST_CHANCE,
            burst_min: DEFAULT_BURST_MIN,
            burst_max: DEFAULT_BURST_MAX,
            depth_fade: false,
        }
    }
}

impl RainConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let cfg: Self = serde_json::from_str(json).map_err(|e| ConfigError::Parse(e.to_string()))?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.cell_size == 0 {
            return Err(ConfigError::ZeroCellSize);
        }
        for (name, p) in [
            ("trail_alpha", self.trail_alpha),
            ("highlight_chance", self.highlight_chance),
            ("fast_step_chance", self.fast_step_chance),
            ("restart_chance", self.restart_chance),
            ("burst_chance", self.burst_chance),
        ] {
            if !(0.0..=1.0).contains(&p) {
                return Err(ConfigError::OutOfRange { field: name, value: p });
            }
        }
        if !(self.highlight_scale.is_finite() && self.highlight_scale > 0.0) {
            return Err(ConfigError::OutOfRange {
                field: "highlight_scale",
                value: self.highlight_scale,
            });
        }
        if self.fast_step == 0 {
            return Err(ConfigError::ZeroFastStep);
        }
        if self.burst_min == 0
            || self.burst_min > self.burst_max
            || self.burst_max > MAX_BURST_LEN
        {
            return Err(ConfigError::BurstLength { min: self.burst_min, max: self.burst_max });
        }
        Ok(())
    }
}

/// Rejected configuration.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// Input could not be deserialized.
    Parse(String),
    ZeroCellSize,
    ZeroFastStep,
    OutOfRange { field: &'static str, value: f32 },
    BurstLength { min: u32, max: u32 },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(msg) => write!(f, "invalid rain config: {msg}"),
            Self::ZeroCellSize => write!(f, "cell_size must be at least 1"),
            Self::ZeroFastStep => write!(f, "fast_step must be at least 1"),
            Self::OutOfRange { field, value } => write!(f, "{field} out of range: {value}"),
            Self::BurstLength { min, max } => {
                write!(f, "burst length {min}..={max} must be within 1..={MAX_BURST_LEN}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_are_valid() {
        assert_eq!(RainConfig::default().validate(), Ok(()));
    }

    #[test]
    fn partial_json_fills_defaults() {
        let cfg = RainConfig::from_json(r#"{ "cell_size": 20, "depth_fade": true }"#).unwrap();
        assert_eq!(
            cfg,
            RainConfig { cell_size: 20, depth_fade: true, ..RainConfig::default() }
        );
    }

    #[test]
    fn empty_object_is_default() {
        assert_eq!(RainConfig::from_json("{}").unwrap(), RainConfig::default());
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let err = RainConfig::from_json(r#"{ "font": "serif" }"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)), "{err}");
    }

    #[test]
    fn out_of_range_values_are_rejected() {
        let err = RainConfig::from_json(r#"{ "restart_chance": 1.5 }"#).unwrap_err();
        assert_eq!(err, ConfigError::OutOfRange { field: "restart_chance", value: 1.5 });

        let err = RainConfig::from_json(r#"{ "cell_size": 0 }"#).unwrap_err();
        assert_eq!(err, ConfigError::ZeroCellSize);

        let err = RainConfig::from_json(r#"{ "burst_min": 9, "burst_max": 4 }"#).unwrap_err();
        assert_eq!(err, ConfigError::BurstLength { min: 9, max: 4 });

        let err = RainConfig::from_json(
            r#"{ "burst_chance": 1.0, "burst_min": 1, "burst_max": 4294967295 }"#,
        )
        .unwrap_err();
        assert_eq!(err, ConfigError::BurstLength { min: 1, max: u32::MAX });

        let cfg = RainConfig { burst_max: MAX_BURST_LEN + 1, ..RainConfig::default() };
        assert!(cfg.validate().is_err());
        let cfg = RainConfig {
            burst_min: MAX_BURST_LEN,
            burst_max: MAX_BURST_LEN,
            ..RainConfig::default()
        };
        assert_eq!(cfg.validate(), Ok(()));

        let cfg = RainConfig { fast_step: 0, ..RainConfig::default() };
        assert_eq!(cfg.validate(), Err(ConfigError::ZeroFastStep));
    }

    #[test]
    fn nan_probability_is_rejected() {
        let cfg = RainConfig { highlight_chance: f32::NAN, ..RainConfig::default() };
        assert!(cfg.validate().is_err());
    }
}
