use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use connect_four::config::GameConfig;
use connect_four::game::Game;
use connect_four::logging;
use connect_four::ui::App;

const CONFIG_PATH: &str = "connect4.toml";

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    logging::init();

    // A broken config file must not keep the game from starting
    let config = GameConfig::load_or_warn(Path::new(CONFIG_PATH));

    let game = Game::new(config.players());
    let mut app = App::new(game, io::stdin().lock(), io::stdout(), config.error_pause());

    // Quitting, winning and drawing all exit with status 0
    app.run().context("terminal I/O failed")?;
    Ok(())
}
