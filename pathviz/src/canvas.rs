//! The [`Canvas`] type: a terminal-sized buffer of styled glyphs, and the
//! [`Frame`] diff that the driver flushes.
//!
//! Positions are terminal cells: `row` is the screen line, `col` the column.

use pathviz_core::Point;

use crate::style::Style;

/// A styled character on screen.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Glyph {
    pub ch: char,
    pub style: Style,
}

impl Glyph {
    #[inline]
    pub const fn new(ch: char, style: Style) -> Self {
        Self { ch, style }
    }
}

impl Default for Glyph {
    #[inline]
    fn default() -> Self {
        Self {
            ch: ' ',
            style: Style::default(),
        }
    }
}

// ---------------------------------------------------------------------------
// Canvas
// ---------------------------------------------------------------------------

/// A width×height buffer of glyphs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    glyphs: Vec<Glyph>,
    width: i32,
    height: i32,
}

impl Canvas {
    /// Create a blank canvas.
    pub fn new(width: i32, height: i32) -> Self {
        let width = width.max(0);
        let height = height.max(0);
        Self {
            glyphs: vec![Glyph::default(); (width * height) as usize],
            width,
            height,
        }
    }

    #[inline]
    pub fn width(&self) -> i32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> i32 {
        self.height
    }

    #[inline]
    fn index(&self, p: Point) -> Option<usize> {
        if p.row >= 0 && p.col >= 0 && p.row < self.height && p.col < self.width {
            Some((p.row * self.width + p.col) as usize)
        } else {
            None
        }
    }

    /// Read the glyph at `p`. Returns `Glyph::default()` outside bounds.
    pub fn at(&self, p: Point) -> Glyph {
        self.index(p).map(|i| self.glyphs[i]).unwrap_or_default()
    }

    /// Set the glyph at `p`. No-op outside bounds.
    pub fn set(&mut self, p: Point, glyph: Glyph) {
        if let Some(i) = self.index(p) {
            self.glyphs[i] = glyph;
        }
    }

    /// Fill every position with `glyph`.
    pub fn fill(&mut self, glyph: Glyph) {
        self.glyphs.fill(glyph);
    }

    /// Write `text` starting at `p`, clipped at the right edge. Returns the
    /// number of columns written.
    pub fn text(&mut self, p: Point, text: &str, style: Style) -> i32 {
        let mut col = p.col;
        for ch in text.chars() {
            if col >= self.width {
                break;
            }
            self.set(Point::new(p.row, col), Glyph::new(ch, style));
            col += 1;
        }
        col - p.col
    }

    /// Make `self` a copy of `src`, reusing the allocation.
    pub fn copy_from(&mut self, src: &Canvas) {
        self.clone_from(src);
    }
}

// ---------------------------------------------------------------------------
// Frame / FrameCell / compute_frame
// ---------------------------------------------------------------------------

/// A single glyph that changed between frames.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameCell {
    pub glyph: Glyph,
    pub pos: Point,
}

/// A set of glyph changes (a diff frame).
#[derive(Clone, Debug, Default)]
pub struct Frame {
    pub cells: Vec<FrameCell>,
    pub width: i32,
    pub height: i32,
}

/// Compute the difference between two canvases.
///
/// If the sizes differ every glyph of `curr` is included.
pub fn compute_frame(prev: &Canvas, curr: &Canvas) -> Frame {
    let full = prev.width != curr.width || prev.height != curr.height;
    let mut cells = Vec::new();
    for row in 0..curr.height {
        for col in 0..curr.width {
            let p = Point::new(row, col);
            let cc = curr.at(p);
            if full || prev.at(p) != cc {
                cells.push(FrameCell { glyph: cc, pos: p });
            }
        }
    }
    Frame {
        cells,
        width: curr.width,
        height: curr.height,
    }
}
