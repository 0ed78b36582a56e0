//! Field module - the square game grid
//!
//! The field is a `size x size` grid where each cell is either empty or holds a ball.
//! Uses a flat vector for storage, indexed in construction order `x * size + y`
//! (so cell `i` is `(i / size, i % size)`).
//! Coordinates: `x` grows to the right, `y` grows towards the bottom.
//!
//! The set of cells never changes after construction; only occupancy does, and
//! only the game mutates it.

use crate::error::GameError;
use crate::types::{Ball, Cell, Direction, MIN_FIELD_SIZE};

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    size: u8,
    /// Flat array of occupants, `x * size + y`
    balls: Vec<Option<Ball>>,
}

impl Field {
    /// Create an empty field.
    ///
    /// Sizes below [`MIN_FIELD_SIZE`] are rejected.
    pub fn new(size: u8) -> Result<Self, GameError> {
        if size < MIN_FIELD_SIZE {
            return Err(GameError::InvalidSize {
                size,
                min: MIN_FIELD_SIZE,
            });
        }
        let len = (size as usize) * (size as usize);
        Ok(Self {
            size,
            balls: vec![None; len],
        })
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    /// Total number of cells (`size * size`)
    pub fn len(&self) -> usize {
        self.balls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.balls.is_empty()
    }

    /// Flat index of a cell, `None` if the cell is not on this field
    #[inline(always)]
    pub(crate) fn index(&self, cell: Cell) -> Option<usize> {
        if cell.x >= self.size || cell.y >= self.size {
            return None;
        }
        Some((cell.x as usize) * (self.size as usize) + (cell.y as usize))
    }

    /// Get the cell at `(x, y)`.
    /// Returns None if out of bounds
    pub fn cell(&self, x: i16, y: i16) -> Option<Cell> {
        let size = self.size as i16;
        if x < 0 || x >= size || y < 0 || y >= size {
            return None;
        }
        Some(Cell::new(x as u8, y as u8))
    }

    /// Get the cell at flat index `i` (construction order).
    pub fn cell_at(&self, i: usize) -> Option<Cell> {
        if i >= self.len() {
            return None;
        }
        let size = self.size as usize;
        Some(Cell::new((i / size) as u8, (i % size) as u8))
    }

    /// Check whether `cell` lies on this field
    pub fn contains(&self, cell: Cell) -> bool {
        self.index(cell).is_some()
    }

    /// Neighbor of `cell` one step in `direction`, `None` at the border.
    pub fn neighbor(&self, cell: Cell, direction: Direction) -> Option<Cell> {
        if !self.contains(cell) {
            return None;
        }
        let (dx, dy) = direction.offset();
        self.cell(cell.x as i16 + dx, cell.y as i16 + dy)
    }

    /// Ball occupying `cell`, `None` when empty or off the field.
    pub fn ball(&self, cell: Cell) -> Option<Ball> {
        self.index(cell).and_then(|i| self.balls[i])
    }

    /// Check if cell is on the field and holds a ball
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.ball(cell).is_some()
    }

    /// Replace the occupant of `cell`, returning the previous one.
    pub(crate) fn set_ball(&mut self, cell: Cell, ball: Option<Ball>) -> Option<Ball> {
        match self.index(cell) {
            Some(i) => std::mem::replace(&mut self.balls[i], ball),
            None => None,
        }
    }

    /// All cells in construction order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.len()).filter_map(move |i| self.cell_at(i))
    }
}
