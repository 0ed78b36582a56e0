//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::UiAction`]. The game has no
//! timing, so there is no repeat handling: one key press is one action.

pub mod map;

pub use lines_types as types;

pub use map::{handle_key_event, should_quit};
