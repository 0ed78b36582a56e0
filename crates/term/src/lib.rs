//! Terminal rendering for the board.
//!
//! The view fills a small glyph grid; the renderer compares it with the previous
//! frame and rewrites changed rows. Cells are 2 characters wide to keep the
//! board roughly square.

pub mod fb;
pub mod game_view;
pub mod palette;
pub mod renderer;

pub use lines_core as core;
pub use lines_types as types;

pub use fb::{FrameBuffer, Glyph};
pub use game_view::{GameView, ViewState, Viewport};
pub use palette::{ball_rgb, Highlight, Tone};
pub use renderer::{encode_frame, TerminalRenderer};
