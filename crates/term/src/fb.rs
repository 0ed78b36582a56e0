//! Character grid the board view draws into.

use crate::palette::{Highlight, Tone};

/// One character position on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    pub ch: char,
    pub tone: Tone,
    pub highlight: Highlight,
    pub bold: bool,
}

impl Glyph {
    pub const BLANK: Glyph = Glyph {
        ch: ' ',
        tone: Tone::Text,
        highlight: Highlight::Screen,
        bold: false,
    };

    pub fn new(ch: char, tone: Tone) -> Self {
        Self {
            ch,
            tone,
            ..Self::BLANK
        }
    }

    pub fn on(mut self, highlight: Highlight) -> Self {
        self.highlight = highlight;
        self
    }

    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }
}

impl Default for Glyph {
    fn default() -> Self {
        Self::BLANK
    }
}

/// Row-major grid of glyphs, blank on creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer {
    width: u16,
    height: u16,
    glyphs: Vec<Glyph>,
}

impl FrameBuffer {
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            glyphs: vec![Glyph::BLANK; width as usize * height as usize],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn get(&self, x: u16, y: u16) -> Option<Glyph> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.glyphs[y as usize * self.width as usize + x as usize])
    }

    /// Out-of-range writes are dropped.
    pub fn set(&mut self, x: u16, y: u16, glyph: Glyph) {
        if x < self.width && y < self.height {
            self.glyphs[y as usize * self.width as usize + x as usize] = glyph;
        }
    }

    /// Glyphs of row `y`; empty past the bottom edge.
    pub fn row(&self, y: u16) -> &[Glyph] {
        if y >= self.height {
            return &[];
        }
        let start = y as usize * self.width as usize;
        &self.glyphs[start..start + self.width as usize]
    }

    /// Text of row `y`, for tests and debugging.
    pub fn row_text(&self, y: u16) -> String {
        self.row(y).iter().map(|g| g.ch).collect()
    }

    /// Write `text` left to right starting at `(x, y)`, clipped at the edge.
    pub fn put_str(&mut self, x: u16, y: u16, text: &str, template: Glyph) {
        for (i, ch) in text.chars().enumerate() {
            let Some(cx) = x.checked_add(i as u16) else {
                break;
            };
            self.set(cx, y, Glyph { ch, ..template });
        }
    }
}
