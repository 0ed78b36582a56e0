//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and serialization.
//! It has **no dependencies** on UI, terminal or file I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Board positions can be built directly from snapshot bytes
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`field`]: square grid with bounds-checked lookup and neighbor queries
//! - [`reach`]: move legality (breadth-first reachability over free cells)
//! - [`purge`]: line detection in rows, columns and both diagonal orientations
//! - [`scoring`]: points awarded per purge
//! - [`rng`]: seedable random source for cell and color draws
//! - [`game`]: turn orchestration (`start`, `move_ball`)
//! - [`snapshot`]: compact one-byte-per-field save format
//!
//! # Game Rules
//!
//! - The game opens with 3 random balls and a preview of the next 3.
//! - A ball may only travel through free cells (4-directional steps).
//! - Five or more same-colored balls in a row, column or diagonal are removed
//!   and scored.
//! - A move that removes nothing drops the previewed balls onto random free cells.
//! - The game ends when a non-clearing move leaves no room for the preview.
//!
//! # Example
//!
//! ```
//! use lines_core::Game;
//!
//! let mut game = Game::new(9, Some(42)).unwrap();
//! let result = game.start();
//! assert!(result.success);
//! assert_eq!(game.occupied_count(), 3);
//! assert_eq!(game.next_balls().len(), 3);
//!
//! // Moving a ball onto itself is always legal and triggers a refill.
//! let from = game.occupied().next().unwrap();
//! let result = game.move_ball(from, from);
//! assert!(result.success);
//! assert_eq!(game.moves_num(), 1);
//!
//! let bytes = game.snapshot().unwrap();
//! let restored = Game::restore(&bytes).unwrap();
//! assert_eq!(restored.score(), game.score());
//! ```

pub mod error;
pub mod field;
pub mod game;
pub mod purge;
pub mod reach;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use lines_types as types;

// Re-export commonly used types for convenience
pub use error::{GameError, SnapshotError};
pub use field::Field;
pub use game::{Game, MoveResult};
pub use rng::{RandomSource, SimpleRng};
pub use scoring::calculate_purge_score;
