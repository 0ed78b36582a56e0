//! App: cursor and selection controller driving a [`Game`].
//!
//! The terminal front end only knows about [`UiAction`]s. Picking up a ball
//! and then choosing a free cell becomes a [`Game::move_ball`] call.

use tracing::{debug, warn};

use crate::core::{Game, GameError, MoveResult, SimpleRng};
use crate::term::ViewState;
use crate::types::{Direction, UiAction};

pub struct App {
    game: Game,
    view: ViewState,
    /// Seeds the games dealt by `NewGame`.
    seeds: SimpleRng,
    last_result: Option<MoveResult>,
}

impl App {
    /// Deal a fresh game.
    pub fn new(size: u8, seed: Option<u32>) -> Result<Self, GameError> {
        let mut seeds = seed.map(SimpleRng::new).unwrap_or_else(SimpleRng::from_entropy);
        let mut game = Game::new(size, Some(seeds.next_u32()))?;
        game.start();
        Ok(Self::with_seeds(game, seeds))
    }

    /// Continue a restored game. A snapshot of an unstarted game is dealt now.
    pub fn resume(mut game: Game, seed: Option<u32>) -> Self {
        if game.occupied_count() == 0 && game.next_balls().is_empty() {
            game.start();
        }
        let seeds = seed.map(SimpleRng::new).unwrap_or_else(SimpleRng::from_entropy);
        Self::with_seeds(game, seeds)
    }

    fn with_seeds(game: Game, seeds: SimpleRng) -> Self {
        Self {
            game,
            view: ViewState::default(),
            seeds,
            last_result: None,
        }
    }

    pub fn game(&self) -> &Game {
        &self.game
    }

    pub fn view_state(&self) -> &ViewState {
        &self.view
    }

    /// Result of the most recent move attempt in this game.
    pub fn last_result(&self) -> Option<&MoveResult> {
        self.last_result.as_ref()
    }

    pub fn apply(&mut self, action: UiAction) {
        match action {
            UiAction::Cursor(direction) => self.move_cursor(direction),
            UiAction::Select => self.select(),
            UiAction::Cancel => self.view.selected = None,
            UiAction::NewGame => self.new_game(),
        }
    }

    fn move_cursor(&mut self, direction: Direction) {
        if let Some(next) = self.game.field().neighbor(self.view.cursor, direction) {
            self.view.cursor = next;
        }
    }

    fn select(&mut self) {
        if self.game.is_finished() {
            return;
        }
        let cursor = self.view.cursor;
        match self.view.selected {
            Some(selected) if selected == cursor => self.view.selected = None,
            _ if self.game.is_occupied(cursor) => self.view.selected = Some(cursor),
            None => {}
            Some(selected) => {
                let result = self.game.move_ball(selected, cursor);
                if result.success {
                    self.view.selected = None;
                }
                self.last_result = Some(result);
            }
        }
    }

    fn new_game(&mut self) {
        let size = self.game.field().size();
        match Game::new(size, Some(self.seeds.next_u32())) {
            Ok(mut game) => {
                game.start();
                debug!(size, "new game dealt");
                self.game = game;
                self.view.selected = None;
                self.last_result = None;
            }
            Err(err) => warn!(%err, "cannot deal a new game"),
        }
    }
}
