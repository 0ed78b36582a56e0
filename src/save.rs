//! Snapshot file persistence.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::core::{Game, RandomSource};

/// Load a saved game, or `None` when there is no save file yet.
pub fn load<R: RandomSource>(path: &Path, rng: R) -> Result<Option<Game<R>>> {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
        Err(err) => {
            return Err(err).with_context(|| format!("failed to read {}", path.display()));
        }
    };
    let game = Game::restore_with_rng(&bytes, rng)
        .with_context(|| format!("corrupt save file {}", path.display()))?;
    Ok(Some(game))
}

/// Write the game to `path`, replacing any previous save.
pub fn store<R: RandomSource>(path: &Path, game: &Game<R>) -> Result<()> {
    let bytes = game.snapshot().context("game cannot be saved")?;
    fs::write(path, &bytes).with_context(|| format!("failed to write {}", path.display()))?;
    info!(path = %path.display(), bytes = bytes.len(), "game saved");
    Ok(())
}
