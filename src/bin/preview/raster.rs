// raster.rs - Software surface over an RGBA image
//
// No font rendering: each glyph is stamped as a 4x7 dot pattern hashed from
// the character, scaled into its cell. Good enough to judge density, color
// and trail length.

use glyph_wallpaper::{GlyphStyle, Rgba, Surface};
use image::{Rgba as Pixel, RgbaImage};

const DOTS_W: u32 = 4;
const DOTS_H: u32 = 7;

pub struct RasterSurface {
    img: RgbaImage,
    fill: Rgba,
}

impl RasterSurface {
    /// `fill` is the opaque color the image starts as.
    pub fn new(w: u32, h: u32, fill: Rgba) -> Self {
        Self { img: RgbaImage::from_pixel(w, h, opaque(fill)), fill }
    }

    pub fn image(&self) -> &RgbaImage {
        &self.img
    }

    #[inline]
    fn blend(&mut self, x: i64, y: i64, c: Rgba) {
        if x < 0 || y < 0 || x >= self.img.width() as i64 || y >= self.img.height() as i64 {
            return;
        }
        let px = self.img.get_pixel_mut(x as u32, y as u32);
        *px = mix(*px, c);
    }
}

impl Surface for RasterSurface {
    fn resize(&mut self, width: u32, height: u32) {
        if (width, height) != self.img.dimensions() {
            self.img = RgbaImage::from_pixel(width, height, opaque(self.fill));
        }
    }

    fn fade(&mut self, color: Rgba) {
        for px in self.img.pixels_mut() {
            *px = mix(*px, color);
        }
    }

    fn glyph(&mut self, glyph: char, x: f32, y: f32, style: GlyphStyle) {
        let pattern = dot_pattern(glyph);
        let size = style.size.max(1.0);
        let dot_w = (size / (DOTS_W + 1) as f32).max(1.0);
        let dot_h = (size / (DOTS_H + 1) as f32).max(1.0);
        // (x, y) is the baseline-left corner; glyphs extend upwards
        let top = y - size;
        let pad = if style.bold { 1.0 } else { 0.0 };

        for row in 0..DOTS_H {
            for col in 0..DOTS_W {
                if pattern & (1 << (row * DOTS_W + col)) == 0 {
                    continue;
                }
                let x0 = (x + col as f32 * dot_w) as i64;
                let y0 = (top + row as f32 * dot_h) as i64;
                let x1 = (x + (col + 1) as f32 * dot_w + pad) as i64;
                let y1 = (top + (row + 1) as f32 * dot_h + pad) as i64;
                for py in y0..y1.max(y0 + 1) {
                    for px in x0..x1.max(x0 + 1) {
                        self.blend(px, py, style.color);
                    }
                }
            }
        }
    }
}

/// 28 pattern bits for a glyph; never blank.
fn dot_pattern(c: char) -> u32 {
    let h = (c as u32).wrapping_mul(0x9E37_79B1).rotate_left(7) ^ 0x5bd1_e995;
    let bits = h & ((1 << (DOTS_W * DOTS_H)) - 1);
    if bits == 0 { 0b0110 } else { bits }
}

fn opaque(c: Rgba) -> Pixel<u8> {
    Pixel([c.r, c.g, c.b, 255])
}

/// Source-over blend of `c` onto an opaque pixel.
fn mix(dst: Pixel<u8>, c: Rgba) -> Pixel<u8> {
    let a = c.a.clamp(0.0, 1.0);
    let ch = |d: u8, s: u8| (d as f32 + (s as f32 - d as f32) * a).round() as u8;
    Pixel([ch(dst[0], c.r), ch(dst[1], c.g), ch(dst[2], c.b), 255])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fade_moves_toward_overlay() {
        let mut s = RasterSurface::new(2, 2, Rgba::opaque(255, 255, 255));
        s.fade(Rgba::new(0, 0, 0, 0.5));
        assert_eq!(s.image().get_pixel(0, 0).0, [128, 128, 128, 255]);
    }

    #[test]
    fn glyph_stays_inside_bounds() {
        let mut s = RasterSurface::new(14, 14, Rgba::opaque(0, 0, 0));
        let style = GlyphStyle { color: Rgba::opaque(0, 200, 255), size: 14.0, bold: true };
        // partially off-canvas on every side
        s.glyph('W', -7.0, 7.0, style);
        s.glyph('W', 7.0, 21.0, style);
        s.glyph('W', 0.0, 14.0, style);
        assert!(s.image().pixels().any(|p| p.0 == [0, 200, 255, 255]));
    }

    #[test]
    fn patterns_are_never_blank() {
        for c in glyph_wallpaper::GLYPHS {
            assert_ne!(dot_pattern(*c), 0);
        }
    }
}
