//! Terminal Lines runner (default binary).
//!
//! Uses crossterm for input and the framebuffer renderer from `lines::term`.
//! The game is turn based, so the loop blocks on input and redraws after every
//! event.

use std::fs::File;
use std::sync::Mutex;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::info;
use tracing_subscriber::EnvFilter;

use lines::app::App;
use lines::config::AppConfig;
use lines::core::SimpleRng;
use lines::input::{handle_key_event, should_quit};
use lines::save;
use lines::term::{GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let config = AppConfig::from_env();
    init_logging(&config)?;

    let mut app = load_app(&config)?;

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut app);

    // Always try to restore terminal state.
    let _ = term.exit();
    result?;

    if let Some(path) = &config.save_path {
        save::store(path, app.game())?;
    }
    Ok(())
}

/// Logs go to a file: the terminal itself is in raw mode.
fn init_logging(config: &AppConfig) -> Result<()> {
    let Some(path) = &config.log_path else {
        return Ok(());
    };
    let file = File::create(path).with_context(|| format!("failed to create {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.log_filter))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install log subscriber: {err}"))?;
    Ok(())
}

fn load_app(config: &AppConfig) -> Result<App> {
    if let Some(path) = &config.save_path {
        let rng = config.seed.map(SimpleRng::new).unwrap_or_else(SimpleRng::from_entropy);
        if let Some(game) = save::load(path, rng)? {
            info!(path = %path.display(), "resuming saved game");
            return Ok(App::resume(game, config.seed));
        }
    }
    App::new(config.size, config.seed).context("invalid LINES_SIZE")
}

fn run(term: &mut TerminalRenderer, app: &mut App) -> Result<()> {
    let view = GameView::default();

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        term.draw(view.render(app.game(), app.view_state(), Viewport::new(w, h)))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    return Ok(());
                }
                if let Some(action) = handle_key_event(key) {
                    app.apply(action);
                }
            }
            Event::Resize(_, _) => term.invalidate(),
            _ => {}
        }
    }
}
