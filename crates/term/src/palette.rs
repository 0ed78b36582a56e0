//! Palette: every color the board view puts on screen.
//!
//! Glyphs carry a [`Tone`] (what is drawn) and a [`Highlight`] (what it sits
//! on). Only the renderer turns those into terminal colors.

use crossterm::style::Color as TermColor;

use crate::types::Color;

/// Foreground role of a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Text,
    /// Panel headings and overlays
    Label,
    /// Empty-cell dots
    Muted,
    Border,
    Ball(Color),
}

/// Background role of a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Highlight {
    /// Outside the board
    #[default]
    Screen,
    /// Ordinary board cell
    Board,
    Cursor,
    /// Ball picked up for the next move
    Selected,
}

/// RGB triple of a ball color.
pub fn ball_rgb(color: Color) -> (u8, u8, u8) {
    match color {
        Color::Red => (220, 60, 60),
        Color::Blue => (70, 110, 230),
        Color::Green => (80, 200, 90),
        Color::Gold => (240, 200, 60),
        Color::Indigo => (110, 70, 200),
        Color::Aqua => (80, 210, 220),
        Color::Burgundy => (150, 30, 70),
    }
}

fn rgb((r, g, b): (u8, u8, u8)) -> TermColor {
    TermColor::Rgb { r, g, b }
}

pub fn foreground(tone: Tone) -> TermColor {
    rgb(match tone {
        Tone::Text => (200, 200, 200),
        Tone::Label => (255, 255, 255),
        Tone::Muted => (90, 90, 100),
        Tone::Border => (170, 170, 180),
        Tone::Ball(color) => ball_rgb(color),
    })
}

pub fn background(highlight: Highlight) -> TermColor {
    rgb(match highlight {
        Highlight::Screen => (0, 0, 0),
        Highlight::Board => (30, 30, 40),
        Highlight::Cursor => (75, 75, 100),
        Highlight::Selected => (120, 100, 30),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ball_colors_are_distinct() {
        for (i, a) in Color::ALL.iter().enumerate() {
            for b in &Color::ALL[i + 1..] {
                assert_ne!(ball_rgb(*a), ball_rgb(*b), "{:?} / {:?}", a, b);
            }
        }
    }

    #[test]
    fn highlights_stand_out_from_the_board() {
        let board = background(Highlight::Board);
        assert_ne!(background(Highlight::Cursor), board);
        assert_ne!(background(Highlight::Selected), board);
        assert_ne!(background(Highlight::Cursor), background(Highlight::Selected));
    }
}
