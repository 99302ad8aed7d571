use std::path::Path;

use anyhow::Context;
use tracing_subscriber::EnvFilter;

use tilestrike_app::config::{AppConfig, CONFIG_PATH};
use tilestrike_app::game_loop::GameLoop;
use tilestrike_app::input::ScriptedInput;

fn main() -> anyhow::Result<()> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("tilestrike=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = AppConfig::load_or_create(Path::new(CONFIG_PATH))
        .with_context(|| format!("loading {CONFIG_PATH}"))?;
    config.sim.validate().context("invalid sim settings")?;

    let mut game = GameLoop::new(&config);
    match game.run(&mut ScriptedInput::default()) {
        Ok(summary) => {
            tracing::info!(frames = summary.frames, ticks = summary.ticks, "session finished");
            Ok(())
        }
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "game loop aborted");
            Err(err)
        }
    }
}
