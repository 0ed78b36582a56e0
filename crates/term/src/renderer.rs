//! TerminalRenderer: puts frames on a real terminal.
//!
//! A frame is compared with the previous one row by row and only rows that
//! differ are rewritten. The board is small, so whole-row granularity keeps the
//! output short without tracking individual glyph runs.

use std::io::{self, Write};

use anyhow::Result;
use crossterm::{
    cursor, execute,
    style::{Attribute, Colors, Print, ResetColor, SetAttribute, SetColors},
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, Glyph};
use crate::palette::{background, foreground, Highlight, Tone};

pub struct TerminalRenderer {
    out: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            out: io::stdout(),
            last: None,
            buf: Vec::new(),
        }
    }

    /// Switch to raw mode on the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        execute!(
            self.out,
            terminal::EnterAlternateScreen,
            cursor::Hide,
            terminal::DisableLineWrap
        )?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        execute!(
            self.out,
            ResetColor,
            SetAttribute(Attribute::Reset),
            terminal::EnableLineWrap,
            cursor::Show,
            terminal::LeaveAlternateScreen
        )?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Repaint everything on the next draw.
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Show `frame`, rewriting only the rows that changed since the last draw.
    pub fn draw(&mut self, frame: FrameBuffer) -> Result<()> {
        self.buf.clear();
        encode_frame(self.last.as_ref(), &frame, &mut self.buf)?;
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        self.last = Some(frame);
        Ok(())
    }
}

/// Encode the commands that turn `prev` into `next`, returning the rows written.
///
/// Without a previous frame, or when the size changed, the screen is cleared
/// and every row is written.
pub fn encode_frame(prev: Option<&FrameBuffer>, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<u16> {
    let prev = prev.filter(|p| p.width() == next.width() && p.height() == next.height());
    if prev.is_none() {
        out.queue(terminal::Clear(terminal::ClearType::All))?;
    }

    let mut pen = Pen::default();
    let mut rows = 0;
    for y in 0..next.height() {
        let row = next.row(y);
        if prev.is_some_and(|p| p.row(y) == row) {
            continue;
        }
        out.queue(cursor::MoveTo(0, y))?;
        for glyph in row {
            pen.apply(out, glyph)?;
            out.queue(Print(glyph.ch))?;
        }
        rows += 1;
    }

    if rows > 0 {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
    }
    Ok(rows)
}

/// Terminal color state, so unchanged attributes are not re-sent.
#[derive(Default)]
struct Pen {
    current: Option<(Tone, Highlight, bool)>,
}

impl Pen {
    fn apply(&mut self, out: &mut Vec<u8>, glyph: &Glyph) -> Result<()> {
        let wanted = (glyph.tone, glyph.highlight, glyph.bold);
        if self.current == Some(wanted) {
            return Ok(());
        }
        let bold_changed = self.current.map_or(true, |(_, _, bold)| bold != glyph.bold);
        out.queue(SetColors(Colors::new(
            foreground(glyph.tone),
            background(glyph.highlight),
        )))?;
        if bold_changed {
            let weight = if glyph.bold {
                Attribute::Bold
            } else {
                Attribute::NormalIntensity
            };
            out.queue(SetAttribute(weight))?;
        }
        self.current = Some(wanted);
        Ok(())
    }
}
