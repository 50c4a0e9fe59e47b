use thiserror::Error;

/// Rejected game configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("step size must be positive")]
    ZeroStepSize,
    #[error("grid of {rows}x{cols} cells is too small to hold a snake and food")]
    GridTooSmall { rows: usize, cols: usize },
    #[error("initial snake length must be positive")]
    ZeroSnakeLength,
    #[error("food spawner needs at least one sampling attempt")]
    ZeroSpawnAttempts,
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Food placement failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SpawnError {
    #[error("no empty cell left for food")]
    BoardFull,
}
