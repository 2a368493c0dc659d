//! Game configuration

use log::info;
use minoids_engine::config::{Config, ConfigError, EngineConfig};
use minoids_engine::render::ScreenMetrics;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Top level game configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Gameplay tuning
    pub gameplay: GameplayConfig,

    /// Screen size
    pub screen: ScreenConfig,

    /// Engine settings
    pub engine: EngineConfig,

    /// Headless demo run
    pub demo: DemoConfig,
}

impl Config for GameConfig {}

impl GameConfig {
    /// File looked up by the binary
    pub const DEFAULT_PATH: &'static str = "minoids.toml";

    /// Load `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &str) -> Result<Self, ConfigError> {
        if Path::new(path).exists() {
            info!("Loading configuration from {path}");
            Self::load_from_file(path)
        } else {
            info!("No configuration at {path}, using defaults");
            Ok(Self::default())
        }
    }
}

/// Gameplay configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplayConfig {
    /// Spaceship width
    pub ship_width: f32,

    /// Spaceship height
    pub ship_height: f32,

    /// Force added per frame while a direction is held
    pub push_force_step: f32,

    /// Maximum push force magnitude
    pub max_push_force: f32,

    /// Meteor drift speed per frame
    pub meteor_speed: f32,

    /// Rim noise amplitude of meteor outlines
    pub meteor_noise_amplitude: f32,

    /// Rim vertices per meteor
    pub meteor_points: usize,

    /// Radius lost per frame by a destroyed meteor
    pub meteor_shrink_step: f32,

    /// Health bar pixels per health point
    pub health_bar_scale: f32,
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self {
            ship_width: 30.0,
            ship_height: 20.0,
            push_force_step: 0.2,
            max_push_force: 3.0,
            meteor_speed: 1.0,
            meteor_noise_amplitude: 4.0,
            meteor_points: 16,
            meteor_shrink_step: 1.0,
            health_bar_scale: 6.0,
        }
    }
}

/// Screen configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenConfig {
    /// Screen width
    pub width: f32,

    /// Screen height
    pub height: f32,
}

impl ScreenConfig {
    /// Screen metrics for the systems
    pub fn metrics(&self) -> ScreenMetrics {
        ScreenMetrics::new(self.width, self.height)
    }
}

impl Default for ScreenConfig {
    fn default() -> Self {
        let metrics = ScreenMetrics::default();
        Self {
            width: metrics.width,
            height: metrics.height,
        }
    }
}

/// Headless demo configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DemoConfig {
    /// Frames to simulate
    pub frames: u32,

    /// Seconds per frame
    pub delta_time: f32,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            frames: 900,
            delta_time: 1.0 / 60.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let config = GameConfig::load_or_default("definitely/not/here.toml").unwrap();
        assert_eq!(config.demo.frames, 900);
        assert_eq!(config.screen.width, 800.0);
        assert_eq!(config.engine.ecs.capacity, 1024);
    }

    #[test]
    fn test_partial_file_overrides_only_given_keys() {
        let path = std::env::temp_dir().join("minoids_partial_config.toml");
        std::fs::write(&path, "[demo]\nframes = 12\n\n[engine.ecs]\nrng_seed = 9\n").unwrap();

        let config = GameConfig::load_or_default(path.to_str().unwrap()).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.demo.frames, 12);
        assert_eq!(config.engine.ecs.rng_seed, Some(9));
        assert_eq!(config.engine.ecs.capacity, 1024);
        assert_eq!(config.gameplay.meteor_points, 16);
    }
}
