//! Game state module - manages the complete game state
//!
//! This module ties together all core components: field, reachability, line
//! detection, scoring and the random source. It handles the opening deal, moves,
//! refills and the end of the game.
//!
//! Every cell of the field is in exactly one of two partitions at all times:
//! `occupied` (holds a ball) or `free`. `occupied` keeps insertion order because
//! it is serialized in that order.

use arrayvec::ArrayVec;
use indexmap::IndexSet;
use tracing::{debug, info};

use crate::error::GameError;
use crate::field::Field;
use crate::purge::find_lines;
use crate::reach::can_reach;
use crate::rng::{RandomSource, SimpleRng};
use crate::scoring::calculate_purge_score;
use crate::types::{Ball, Cell, NEXT_BALLS_COUNT};

/// Outcome of [`Game::start`] and [`Game::move_ball`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveResult {
    /// False when the move was illegal (state unchanged).
    pub success: bool,
    /// Cells emptied by this call, each listed once.
    pub purged: Vec<Cell>,
    pub game_finished: bool,
}

impl MoveResult {
    fn rejected(game_finished: bool) -> Self {
        Self {
            success: false,
            purged: Vec::new(),
            game_finished,
        }
    }
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct Game<R = SimpleRng> {
    field: Field,
    /// Cells holding a ball, in the order they were filled.
    occupied: IndexSet<Cell>,
    free: IndexSet<Cell>,
    next_balls: ArrayVec<Ball, NEXT_BALLS_COUNT>,
    score: u32,
    /// Legal moves applied so far.
    moves_num: u32,
    rng: R,
}

impl Game<SimpleRng> {
    /// Create a new game; without a seed the generator is seeded from the clock.
    pub fn new(size: u8, seed: Option<u32>) -> Result<Self, GameError> {
        let rng = seed.map(SimpleRng::new).unwrap_or_else(SimpleRng::from_entropy);
        Self::with_rng(size, rng)
    }
}

impl<R: RandomSource> Game<R> {
    /// Create a new game drawing from `rng`.
    pub fn with_rng(size: u8, rng: R) -> Result<Self, GameError> {
        let field = Field::new(size)?;
        let free = field.cells().collect();
        Ok(Self {
            field,
            occupied: IndexSet::new(),
            free,
            next_balls: ArrayVec::new(),
            score: 0,
            moves_num: 0,
            rng,
        })
    }

    /// Rebuild a game from a field whose balls are already placed.
    ///
    /// `occupied` must list exactly the field's occupied cells; `free` is
    /// derived as every other cell in construction order.
    pub(crate) fn from_parts(
        field: Field,
        occupied: IndexSet<Cell>,
        next_balls: ArrayVec<Ball, NEXT_BALLS_COUNT>,
        score: u32,
        moves_num: u32,
        rng: R,
    ) -> Self {
        let free = field.cells().filter(|c| !occupied.contains(c)).collect();
        Self {
            field,
            occupied,
            free,
            next_balls,
            score,
            moves_num,
            rng,
        }
    }

    pub fn field(&self) -> &Field {
        &self.field
    }

    pub fn next_balls(&self) -> &[Ball] {
        &self.next_balls
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn moves_num(&self) -> u32 {
        self.moves_num
    }

    /// Occupied cells in fill order.
    pub fn occupied(&self) -> impl Iterator<Item = Cell> + '_ {
        self.occupied.iter().copied()
    }

    pub fn free(&self) -> impl Iterator<Item = Cell> + '_ {
        self.free.iter().copied()
    }

    pub fn occupied_count(&self) -> usize {
        self.occupied.len()
    }

    pub fn free_count(&self) -> usize {
        self.free.len()
    }

    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.occupied.contains(&cell)
    }

    /// True once there is no room left to place the preview.
    pub fn is_finished(&self) -> bool {
        self.free.len() <= self.next_balls.len()
    }

    /// Deal the opening balls and the first preview.
    pub fn start(&mut self) -> MoveResult {
        for _ in 0..NEXT_BALLS_COUNT {
            let Some(index) = self.draw_free_index() else {
                break;
            };
            let ball = Ball::new(self.rng.next_color());
            self.put_at(index, ball);
        }
        self.next_balls = self.draw_next_balls();
        let purged = self.purge();

        debug!(
            occupied = self.occupied.len(),
            purged = purged.len(),
            "game started"
        );

        MoveResult {
            success: true,
            purged,
            game_finished: self.is_finished(),
        }
    }

    /// Check if the ball at `from` can travel to `to`.
    pub fn can_move(&self, from: Cell, to: Cell) -> bool {
        can_reach(&self.field, from, to)
    }

    /// Move the ball at `from` to `to`.
    ///
    /// Illegal moves leave the state untouched. A move that clears lines is
    /// scored and nothing is added; otherwise the preview is dropped onto the
    /// board, or the game ends when there is no room for it.
    pub fn move_ball(&mut self, from: Cell, to: Cell) -> MoveResult {
        if !self.can_move(from, to) {
            debug!(?from, ?to, "move rejected");
            return MoveResult::rejected(self.is_finished());
        }

        self.moves_num += 1;
        self.relocate(from, to);

        let purged = self.purge();
        if !purged.is_empty() {
            let points = calculate_purge_score(purged.len());
            self.score = self.score.saturating_add(points);
            debug!(
                ?from,
                ?to,
                purged = purged.len(),
                points,
                score = self.score,
                "lines purged"
            );
            return MoveResult {
                success: true,
                purged,
                game_finished: false,
            };
        }

        if self.free.len() > self.next_balls.len() {
            let incoming = std::mem::take(&mut self.next_balls);
            for ball in incoming {
                self.put_random(ball);
            }
            // Lines formed by the refill are removed but not scored.
            let purged = self.purge();
            self.next_balls = self.draw_next_balls();
            debug!(
                ?from,
                ?to,
                free = self.free.len(),
                purged = purged.len(),
                "board refilled"
            );
            return MoveResult {
                success: true,
                purged,
                game_finished: false,
            };
        }

        info!(
            score = self.score,
            moves = self.moves_num,
            "game finished"
        );
        MoveResult {
            success: true,
            purged: Vec::new(),
            game_finished: true,
        }
    }

    /// Move a ball between cells and keep both partitions in step.
    fn relocate(&mut self, from: Cell, to: Cell) {
        if from == to {
            return;
        }
        let ball = self.field.set_ball(from, None);
        self.field.set_ball(to, ball);
        self.occupied.shift_remove(&from);
        self.occupied.insert(to);
        self.free.swap_remove(&to);
        self.free.insert(from);
    }

    /// Remove every purgeable run and return the emptied cells.
    fn purge(&mut self) -> Vec<Cell> {
        let marked = find_lines(&self.field);
        for &cell in &marked {
            self.field.set_ball(cell, None);
            self.occupied.shift_remove(&cell);
            self.free.insert(cell);
        }
        marked.into_iter().collect()
    }

    fn draw_free_index(&mut self) -> Option<usize> {
        if self.free.is_empty() {
            return None;
        }
        Some(self.rng.next_index(self.free.len()))
    }

    /// Place `ball` on a uniformly chosen free cell.
    fn put_random(&mut self, ball: Ball) -> Option<Cell> {
        let index = self.draw_free_index()?;
        self.put_at(index, ball)
    }

    fn put_at(&mut self, free_index: usize, ball: Ball) -> Option<Cell> {
        let cell = self.free.swap_remove_index(free_index)?;
        self.field.set_ball(cell, Some(ball));
        self.occupied.insert(cell);
        Some(cell)
    }

    fn draw_next_balls(&mut self) -> ArrayVec<Ball, NEXT_BALLS_COUNT> {
        (0..NEXT_BALLS_COUNT)
            .map(|_| Ball::new(self.rng.next_color()))
            .collect()
    }
}
