//! GameView: draws a `core::Game` plus cursor/selection into a framebuffer.
//!
//! Pure (no I/O), so layouts are unit-tested.

use crate::core::{Game, RandomSource};
use crate::fb::{FrameBuffer, Glyph};
use crate::palette::{Highlight, Tone};
use crate::types::Cell;

const BALL: char = '●';
const EMPTY: char = '·';

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Interaction state drawn on top of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ViewState {
    pub cursor: Cell,
    /// Ball picked up for the next move, if any.
    pub selected: Option<Cell>,
}

impl ViewState {
    fn highlight(&self, cell: Cell) -> Highlight {
        if self.selected == Some(cell) {
            Highlight::Selected
        } else if self.cursor == cell {
            Highlight::Cursor
        } else {
            Highlight::Board
        }
    }
}

/// Board layout: a framed grid with a stats panel to its right.
pub struct GameView {
    /// Terminal columns per board cell.
    cell_w: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // Two columns per cell keeps the board roughly square.
        Self { cell_w: 2 }
    }
}

impl GameView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
        }
    }

    /// Outer size of the framed board, border included.
    pub fn frame_size(&self, size: u8) -> (u16, u16) {
        (size as u16 * self.cell_w + 2, size as u16 + 2)
    }

    /// Top-left corner of the frame, centered in the viewport.
    pub fn frame_origin(&self, size: u8, viewport: Viewport) -> (u16, u16) {
        let (w, h) = self.frame_size(size);
        (
            viewport.width.saturating_sub(w) / 2,
            viewport.height.saturating_sub(h) / 2,
        )
    }

    /// Screen position of the first column of `cell`.
    pub fn cell_origin(&self, size: u8, viewport: Viewport, cell: Cell) -> (u16, u16) {
        let (x0, y0) = self.frame_origin(size, viewport);
        (x0 + 1 + cell.x as u16 * self.cell_w, y0 + 1 + cell.y as u16)
    }

    pub fn render<R: RandomSource>(&self, game: &Game<R>, ui: &ViewState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        let size = game.field().size();
        let (x0, y0) = self.frame_origin(size, viewport);
        let (w, h) = self.frame_size(size);

        draw_frame(&mut fb, x0, y0, w, h);

        for cell in game.field().cells() {
            let highlight = ui.highlight(cell);
            let glyph = match game.field().ball(cell) {
                Some(ball) if highlight == Highlight::Selected => {
                    Glyph::new(BALL, Tone::Ball(ball.color)).bold()
                }
                Some(ball) => Glyph::new(BALL, Tone::Ball(ball.color)),
                None => Glyph::new(EMPTY, Tone::Muted),
            }
            .on(highlight);

            let (px, py) = self.cell_origin(size, viewport, cell);
            fb.set(px, py, glyph);
            // Padding columns share the cell's background.
            for dx in 1..self.cell_w {
                fb.set(px + dx, py, Glyph { ch: ' ', ..glyph });
            }
        }

        draw_panel(&mut fb, game, x0 + w + 2, y0);

        if game.is_finished() {
            let text = "GAME OVER";
            let x = x0 + w.saturating_sub(text.len() as u16) / 2;
            fb.put_str(x, y0 + h / 2, text, Glyph::new(' ', Tone::Label).bold());
        }
        fb
    }
}

fn draw_frame(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16) {
    let (right, bottom) = (x + w - 1, y + h - 1);
    let border = |ch| Glyph::new(ch, Tone::Border);
    for cx in x + 1..right {
        fb.set(cx, y, border('─'));
        fb.set(cx, bottom, border('─'));
    }
    for cy in y + 1..bottom {
        fb.set(x, cy, border('│'));
        fb.set(right, cy, border('│'));
    }
    fb.set(x, y, border('┌'));
    fb.set(right, y, border('┐'));
    fb.set(x, bottom, border('└'));
    fb.set(right, bottom, border('┘'));
}

/// Score, moves and the upcoming balls; skipped when there is no room.
fn draw_panel<R: RandomSource>(fb: &mut FrameBuffer, game: &Game<R>, x: u16, y: u16) {
    if x.saturating_add(8) > fb.width() {
        return;
    }
    let label = Glyph::new(' ', Tone::Label).bold();
    let value = Glyph::new(' ', Tone::Text);

    let stats = [("SCORE", game.score()), ("MOVES", game.moves_num())];
    for (i, (name, n)) in stats.into_iter().enumerate() {
        let row = y + 3 * i as u16;
        fb.put_str(x, row, name, label);
        fb.put_str(x, row + 1, &n.to_string(), value);
    }

    fb.put_str(x, y + 6, "NEXT", label);
    for (i, ball) in game.next_balls().iter().enumerate() {
        fb.set(x + 2 * i as u16, y + 7, Glyph::new(BALL, Tone::Ball(ball.color)));
    }
}
