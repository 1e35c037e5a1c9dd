// render.rs - Drawing surface abstraction
//
// The simulation only ever does two things to a surface: wash it with a
// translucent overlay, and stamp a glyph at a pixel position. `DrawList`
// records those calls instead of painting, which is what tests and the
// preview tool build on.

use crate::theme::Rgba;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GlyphStyle {
    pub color: Rgba,
    /// Font size in logical pixels.
    pub size: f32,
    pub bold: bool,
}

/// Something glyph rain can be painted on.
pub trait Surface {
    /// Match the backing store to the viewport.
    fn resize(&mut self, width: u32, height: u32);

    /// Paint `color` over the entire surface without clearing it first.
    fn fade(&mut self, color: Rgba);

    /// Draw one glyph with its baseline-left corner at `(x, y)`.
    fn glyph(&mut self, glyph: char, x: f32, y: f32, style: GlyphStyle);
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Fade(Rgba),
    Glyph { glyph: char, x: f32, y: f32, style: GlyphStyle },
}

/// Recording surface.
#[derive(Debug, Default, Clone)]
pub struct DrawList {
    w: u32,
    h: u32,
    ops: Vec<DrawOp>,
}

impl DrawList {
    pub fn new(w: u32, h: u32) -> Self {
        Self { w, h, ops: Vec::new() }
    }

    pub fn width(&self) -> u32 { self.w }
    pub fn height(&self) -> u32 { self.h }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Hand back the recorded ops and start over.
    pub fn take(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    /// Only the glyph ops, as `(glyph, x, y, style)`.
    pub fn glyphs(&self) -> impl Iterator<Item = (char, f32, f32, &GlyphStyle)> + '_ {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Glyph { glyph, x, y, style } => Some((*glyph, *x, *y, style)),
            DrawOp::Fade(_) => None,
        })
    }
}

impl Surface for DrawList {
    fn resize(&mut self, width: u32, height: u32) {
        self.w = width;
        self.h = height;
    }

    fn fade(&mut self, color: Rgba) {
        self.ops.push(DrawOp::Fade(color));
    }

    fn glyph(&mut self, glyph: char, x: f32, y: f32, style: GlyphStyle) {
        self.ops.push(DrawOp::Glyph { glyph, x, y, style });
    }
}
