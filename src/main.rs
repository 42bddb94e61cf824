use anyhow::{Context, Result, anyhow};
use clap::{Parser, ValueEnum};
use snake_feast::game::GameConfig;
use snake_feast::modes::HumanMode;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "snake_feast")]
#[command(version, about = "Snake on a grid full of food")]
struct Cli {
    /// Game mode
    #[arg(long, default_value = "human")]
    mode: Mode,

    /// JSON file with game settings; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Grid width
    #[arg(long)]
    width: Option<usize>,

    /// Grid height
    #[arg(long)]
    height: Option<usize>,

    /// Number of food items on the grid
    #[arg(long)]
    food: Option<usize>,

    /// Milliseconds between simulation ticks
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Seed for reproducible food placement
    #[arg(long)]
    seed: Option<u64>,

    /// Write logs to this file (the terminal is taken by the game)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

#[derive(Clone, ValueEnum)]
enum Mode {
    /// Play snake with keyboard controls
    Human,
}

impl Cli {
    /// Defaults, then the config file, then command line flags
    fn game_config(&self) -> Result<GameConfig> {
        let mut config = match &self.config {
            Some(path) => GameConfig::load(path)?,
            None => GameConfig::default(),
        };

        if let Some(width) = self.width {
            config.grid_width = width;
        }
        if let Some(height) = self.height {
            config.grid_height = height;
        }
        if let Some(food) = self.food {
            config.food_count = food;
        }
        if let Some(tick_ms) = self.tick_ms {
            config.tick_interval_ms = tick_ms;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }

        config
            .validate()
            .map_err(|msg| anyhow!("Invalid game configuration: {}", msg))?;

        Ok(config)
    }
}

fn init_logging(path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Failed to create log file {:?}", path))?;
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .init();

    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        init_logging(path)?;
    }

    let config = cli.game_config()?;

    // Dispatch to appropriate mode
    match cli.mode {
        Mode::Human => {
            let mut human_mode = HumanMode::new(config);
            human_mode.run().await?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_flags() {
        let cli = Cli::parse_from(["snake_feast"]);
        assert_eq!(cli.game_config().unwrap(), GameConfig::default());
    }

    #[test]
    fn test_flags_override_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("game.json");
        std::fs::write(&path, r#"{ "grid_width": 30, "food_count": 20 }"#).unwrap();

        let cli = Cli::parse_from([
            "snake_feast",
            "--config",
            path.to_str().unwrap(),
            "--food",
            "40",
            "--seed",
            "5",
        ]);
        let config = cli.game_config().unwrap();

        assert_eq!(config.grid_width, 30);
        assert_eq!(config.grid_height, 25);
        assert_eq!(config.food_count, 40);
        assert_eq!(config.seed, Some(5));
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let cli = Cli::parse_from(["snake_feast", "--width", "3", "--height", "3", "--food", "9"]);
        let err = cli.game_config().unwrap_err();
        assert!(err.to_string().contains("Invalid game configuration"));
    }
}
