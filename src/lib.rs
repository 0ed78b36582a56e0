//! Terminal Lines (workspace facade crate).
//!
//! Re-exports the member crates as `lines::{core,input,term,types}` and hosts
//! the application glue shared by the binary and the integration tests.

pub use lines_core as core;
pub use lines_input as input;
pub use lines_term as term;
pub use lines_types as types;

pub mod app;
pub mod config;
pub mod save;
