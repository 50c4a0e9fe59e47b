use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use torus_snake::game::GameConfig;
use torus_snake::modes::HumanMode;

#[derive(Parser)]
#[command(name = "torus_snake")]
#[command(version, about = "Snake on a wrap-around grid")]
struct Cli {
    /// TOML config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Board height in units
    #[arg(long)]
    height: Option<u32>,

    /// Board width in units
    #[arg(long)]
    width: Option<u32>,

    /// Units per movement step
    #[arg(long)]
    step_size: Option<u32>,

    /// Milliseconds per tick
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Seed for food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (RUST_LOG sets the filter)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => GameConfig::default(),
        };

        if let Some(height) = self.height {
            config.board_height = height;
        }
        if let Some(width) = self.width {
            config.board_width = width;
        }
        if let Some(step_size) = self.step_size {
            config.step_size = step_size;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_interval_ms = tick_ms;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config.validate()?;
        Ok(config)
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        torus_snake::logging::init(path)?;
    }

    let config = cli.game_config()?;
    tracing::info!(?config, "starting");

    HumanMode::new(config).run()
}
