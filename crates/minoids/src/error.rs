//! Game error type

use minoids_engine::config::ConfigError;
use minoids_engine::ecs::EcsError;
use thiserror::Error;

/// Anything that can stop the game
#[derive(Debug, Error)]
pub enum GameError {
    /// ECS operation failed
    #[error("ECS error: {0}")]
    Ecs(#[from] EcsError),

    /// Configuration could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
}

/// Game result alias
pub type GameResult<T> = Result<T, GameError>;
