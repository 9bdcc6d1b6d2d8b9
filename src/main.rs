use anyhow::Context;
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fs::File;
use std::sync::Mutex;
use tracing::Level;

use jump_tui::platform::TerminalGuard;
use jump_tui::{GameConfig, Platform, Session, app};

const LOG_FILE: &str = "jump-tui.log";

/// Logs go to a file: the terminal belongs to the game.
fn init_logging() {
    let path = std::env::temp_dir().join(LOG_FILE);
    let Ok(file) = File::create(&path) else {
        return;
    };
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::INFO)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let cfg = GameConfig::default();
    let mut session =
        Session::new(cfg.clone(), StdRng::from_entropy()).context("invalid game configuration")?;

    let guard = TerminalGuard::enter().context("failed to set up the terminal")?;
    let mut platform = Platform::terminal(&cfg, &guard).context("failed to query the terminal")?;

    let result = app::run(&mut platform, &mut session);
    drop(platform);
    drop(guard);
    result.context("game loop failed")
}
