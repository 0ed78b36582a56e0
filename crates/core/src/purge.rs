//! Line detection - finds every same-colored run that must be purged
//!
//! The field is scanned along six families of straight lines:
//!
//! - rows (start on the left border, step `(+1, 0)`)
//! - columns (start on the top border, step `(0, +1)`)
//! - NW-SE diagonals starting on the left border, and on the top border
//! - NE-SW diagonals starting on the left border, and on the bottom border
//!
//! Together the diagonal families cover every diagonal of every length. Each line
//! is walked once with a small run state; a run closes on an empty cell, a color
//! change or the end of the line, and is marked when it reaches [`MIN_LINE_SIZE`].

use indexmap::IndexSet;

use crate::field::Field;
use crate::types::{Cell, Color, MIN_LINE_SIZE};

/// One family of parallel lines: where they start and how they advance.
struct LineFamily {
    starts: Vec<(i16, i16)>,
    step: (i16, i16),
}

fn line_families(size: i16) -> [LineFamily; 6] {
    let left: Vec<(i16, i16)> = (0..size).map(|y| (0, y)).collect();
    [
        LineFamily {
            starts: left.clone(),
            step: (1, 0),
        },
        LineFamily {
            starts: (0..size).map(|x| (x, 0)).collect(),
            step: (0, 1),
        },
        LineFamily {
            starts: left.clone(),
            step: (1, 1),
        },
        LineFamily {
            starts: (1..size).map(|x| (x, 0)).collect(),
            step: (1, 1),
        },
        LineFamily {
            starts: left,
            step: (1, -1),
        },
        LineFamily {
            starts: (1..size).map(|x| (x, size - 1)).collect(),
            step: (1, -1),
        },
    ]
}

/// Run currently being accumulated along a line.
#[derive(Default)]
struct Run {
    color: Option<Color>,
    cells: Vec<Cell>,
}

impl Run {
    /// Close the run, marking its cells when long enough.
    fn close(&mut self, marked: &mut IndexSet<Cell>) {
        if self.color.is_some() && self.cells.len() >= MIN_LINE_SIZE {
            marked.extend(self.cells.iter().copied());
        }
        self.color = None;
        self.cells.clear();
    }

    fn feed(&mut self, cell: Cell, color: Option<Color>, marked: &mut IndexSet<Cell>) {
        if color.is_some() && color == self.color {
            self.cells.push(cell);
            return;
        }
        self.close(marked);
        if color.is_some() {
            self.color = color;
            self.cells.push(cell);
        }
    }
}

/// Collect every cell that belongs to a purgeable run.
///
/// The result is a set: a cell on both a row and a column run appears once.
/// Order is detection order (rows first).
pub fn find_lines(field: &Field) -> IndexSet<Cell> {
    let mut marked = IndexSet::new();
    let mut run = Run::default();

    for family in line_families(field.size() as i16) {
        let (dx, dy) = family.step;
        for (sx, sy) in family.starts {
            let (mut x, mut y) = (sx, sy);
            while let Some(cell) = field.cell(x, y) {
                run.feed(cell, field.ball(cell).map(|b| b.color), &mut marked);
                x += dx;
                y += dy;
            }
            run.close(&mut marked);
        }
    }

    marked
}
