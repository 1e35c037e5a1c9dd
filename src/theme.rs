// theme.rs - Light/dark palettes and the glyph set
//
// Each theme owns a background (used for the trailing fade), a list of base
// colors and a shorter list of highlight colors. The two palettes share no
// entries, so a glyph's color always tells which theme drew it.

use std::fmt;

/// Characters the rain samples from, one per column per frame.
pub const GLYPHS: &[char] = &[
    '{', '}', '[', ']', '(', ')', '<', '>', '+', '-', '*', '/', '=', ';', ':', ',', '.',
    'A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J', 'K', 'L', 'M',
    'N', 'O', 'P', 'Q', 'R', 'S', 'T', 'U', 'V', 'W', 'X', 'Y', 'Z',
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9',
    '$', '#', '@', '%', '&', '^', '!',
    'a', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'i', 'j', 'k', 'l', 'm',
    'n', 'o', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// 8-bit RGB with a CSS-style alpha in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a: a.clamp(0.0, 1.0), ..self }
    }

    pub fn rgb(self) -> (u8, u8, u8) {
        (self.r, self.g, self.b)
    }

    /// CSS `rgba(...)` string for canvas fill styles.
    pub fn as_css(&self) -> String {
        format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

pub struct Palette {
    pub background: Rgba,
    pub base: &'static [Rgba],
    pub highlight: &'static [Rgba],
}

impl Palette {
    /// True if `color` (ignoring alpha) belongs to this palette's glyph colors.
    pub fn owns(&self, color: Rgba) -> bool {
        self.base.iter().chain(self.highlight).any(|c| c.rgb() == color.rgb())
    }
}

static DARK: Palette = Palette {
    background: Rgba::opaque(0, 0, 0),
    base: &[
        Rgba::new(0, 150, 255, 0.8),
        Rgba::new(0, 120, 220, 0.7),
        Rgba::new(40, 170, 255, 0.6),
    ],
    highlight: &[Rgba::new(0, 200, 255, 1.0), Rgba::new(140, 230, 255, 1.0)],
};

static LIGHT: Palette = Palette {
    background: Rgba::opaque(255, 255, 255),
    base: &[
        Rgba::new(0, 100, 200, 0.5),
        Rgba::new(0, 80, 170, 0.45),
        Rgba::new(30, 120, 210, 0.4),
    ],
    highlight: &[Rgba::new(0, 120, 240, 0.8), Rgba::new(0, 90, 220, 0.9)],
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Only an explicit `"dark"` selects the dark palette.
    pub fn from_flag(flag: &str) -> Self {
        if flag.trim().eq_ignore_ascii_case("dark") {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn palette(self) -> &'static Palette {
        match self {
            Theme::Light => &LIGHT,
            Theme::Dark => &DARK,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_flags_fall_back_to_light() {
        assert_eq!(Theme::from_flag("dark"), Theme::Dark);
        assert_eq!(Theme::from_flag(" DARK "), Theme::Dark);
        assert_eq!(Theme::from_flag("light"), Theme::Light);
        assert_eq!(Theme::from_flag("system"), Theme::Light);
        assert_eq!(Theme::from_flag(""), Theme::Light);
    }

    #[test]
    fn toggle_flips_between_the_two_themes() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled().toggled(), Theme::Dark);
    }

    #[test]
    fn palettes_do_not_share_glyph_colors() {
        let dark = Theme::Dark.palette();
        let light = Theme::Light.palette();
        for c in dark.base.iter().chain(dark.highlight) {
            assert!(!light.owns(*c), "{c:?} appears in both palettes");
        }
        assert!(dark.highlight.len() < dark.base.len());
        assert!(light.highlight.len() < light.base.len());
    }

    #[test]
    fn css_output() {
        assert_eq!(Rgba::new(0, 150, 255, 0.8).as_css(), "rgba(0, 150, 255, 0.8)");
        assert_eq!(Rgba::opaque(0, 0, 0).with_alpha(0.05).as_css(), "rgba(0, 0, 0, 0.05)");
    }

    #[test]
    fn glyph_set_has_no_duplicates() {
        let mut seen = std::collections::HashSet::new();
        assert!(GLYPHS.iter().all(|g| seen.insert(*g)));
    }
}
