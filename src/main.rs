mod body;
mod border;
mod canvas;
mod collision;
mod config;
mod direction;
mod event_loop;
mod food;
mod game;
mod game_input;
mod geometry;
mod head;
mod log;
mod render;
mod score;
mod segment;
mod snake;
mod store;

use std::path::Path;

fn main() -> anyhow::Result<()> {
    log::init(Path::new(log::LOG_FILE))?;
    let config = config::load(&config::config_path())?;
    tracing::info!(tick_ms = config.tick_ms, "starting snake");

    event_loop::run(config)
}
