//! Configuration system
//!
//! Engine settings are plain serde structs with sensible defaults. Any of them
//! can be loaded from or saved to TOML or RON through the [`Config`] trait.

use crate::foundation::color::Color;
use crate::input::InputBindings;
pub use serde::{Serialize, Deserialize};

/// Configuration trait
pub trait Config: Serialize + for<'de> Deserialize<'de> + Default {
    /// Load configuration from file
    fn load_from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(ConfigError::Io)?;

        // Try different formats
        if path.ends_with(".toml") {
            toml::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else if path.ends_with(".ron") {
            ron::from_str(&contents).map_err(|e| ConfigError::Parse(e.to_string()))
        } else {
            Err(ConfigError::UnsupportedFormat(path.to_string()))
        }
    }

    /// Save configuration to file
    fn save_to_file(&self, path: &str) -> Result<(), ConfigError> {
        let contents = if path.ends_with(".toml") {
            toml::to_string_pretty(self).map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else if path.ends_with(".ron") {
            ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
                .map_err(|e| ConfigError::Serialize(e.to_string()))?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.to_string()));
        };

        std::fs::write(path, contents).map_err(ConfigError::Io)
    }
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),
}

/// Top-level engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Registry sizing and entropy
    pub ecs: EcsConfig,
    /// Per-frame simulation tuning
    pub simulation: SimulationConfig,
    /// Key bindings for the input system
    pub input: InputBindings,
}

impl Config for EngineConfig {}

/// Registry configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EcsConfig {
    /// Maximum entity id (exclusive) every component store can index
    pub capacity: usize,
    /// Seed for the registry's random source; `None` seeds from the OS
    pub rng_seed: Option<u64>,
}

impl Default for EcsConfig {
    fn default() -> Self {
        Self {
            capacity: 1024,
            rng_seed: None,
        }
    }
}

/// Simulation tuning shared by the frame systems
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Distance past the screen edge before a position wraps around
    pub wrap_margin: f32,
    /// Seconds a weapon beam takes to reach full length and retract
    pub weapon_fire_seconds: f32,
    /// Particles spawned when a circle takes a hit
    pub impact_particle: ImpactParticleConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            wrap_margin: 30.0,
            weapon_fire_seconds: 0.5,
            impact_particle: ImpactParticleConfig::default(),
        }
    }
}

/// Impact particle settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ImpactParticleConfig {
    /// Lifetime in frames, stored as the particle's health
    pub lifetime: f32,
    /// Render radius
    pub radius: f32,
    /// Maximum divergence from the source velocity, in radians either way.
    /// Only the magnitude is used.
    pub spread: f32,
    /// Speed multiplier jitter, the multiplier lies in `1 ± |speed_jitter|`
    pub speed_jitter: f32,
    /// Particle color
    pub color: Color,
}

impl Default for ImpactParticleConfig {
    fn default() -> Self {
        Self {
            lifetime: 20.0,
            radius: 2.0,
            spread: 0.6,
            speed_jitter: 0.5,
            color: Color::BROWN,
        }
    }
}
