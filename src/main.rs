use std::path::PathBuf;

use anyhow::Context;
use treasure_hunter::GameConfig;
use treasure_hunter::window::{WindowConfig, WindowMode};

#[derive(clap::Parser)]
#[command(about = "Carry the treasure to the door without running out of health.")]
struct Opts {
    /// JSON file overriding the default layout and tuning.
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed for enemy placement (overrides the config file).
    #[arg(long)]
    seed: Option<u64>,
    /// Start in borderless fullscreen.
    #[arg(long)]
    fullscreen: bool,
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<GameConfig> {
    let Some(path) = path else { return Ok(GameConfig::default()) };
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("when loading config file at {path:?}"))?;
    GameConfig::from_json(&content).with_context(|| format!("when parsing config file at {path:?}"))
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let opts: Opts = clap::Parser::parse();

    let mut config = load_config(opts.config.as_ref())?;
    if let Some(seed) = opts.seed {
        config.seed = seed;
    }
    config.validate().context("invalid game config")?;

    let mut window_config = WindowConfig::from_game(&config);
    if opts.fullscreen {
        window_config.mode = WindowMode::Borderless;
    }

    log::info!("Treasure Hunter starting (seed {})", config.seed);
    treasure_hunter::app::run(config, window_config)
        .map_err(|e| anyhow::anyhow!("event loop error: {e}"))?;
    Ok(())
}
