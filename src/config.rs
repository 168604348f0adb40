//! Runtime configuration
//!
//! Window dimensions, frame pacing, and RNG seeding for the driver
//! programs, loaded from a JSON file named by the `BOUNCE_BOX_CONFIG`
//! environment variable. A missing or malformed file falls back to
//! defaults; configuration problems are never fatal.

use serde::{Deserialize, Serialize};

/// Environment variable holding the config file path
pub const CONFIG_ENV: &str = "BOUNCE_BOX_CONFIG";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Override for the per-driver frame delay
    pub frame_delay_ms: Option<u64>,
    /// Fixed RNG seed for reproducible spawns
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            frame_delay_ms: None,
            seed: None,
        }
    }
}

impl Config {
    /// Load from the file named by [`CONFIG_ENV`], or fall back to defaults
    pub fn load() -> Self {
        let Some(path) = std::env::var_os(CONFIG_ENV) else {
            log::info!("using default configuration");
            return Self::default();
        };
        let path = std::path::PathBuf::from(path);
        match std::fs::read_to_string(&path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => {
                    log::info!("loaded configuration from {}", path.display());
                    config
                }
                Err(err) => {
                    log::warn!("ignoring malformed config {}: {err}", path.display());
                    Self::default()
                }
            },
            Err(err) => {
                log::warn!("cannot read config {}: {err}", path.display());
                Self::default()
            }
        }
    }

    /// The driver's frame delay unless overridden
    pub fn frame_delay(&self, default_ms: u64) -> u64 {
        self.frame_delay_ms.unwrap_or(default_ms)
    }

    /// Configured seed, or a fresh one logged so the run can be replayed
    pub fn rng_seed(&self) -> u64 {
        match self.seed {
            Some(seed) => seed,
            None => {
                let seed = rand::random::<u64>();
                log::info!("generated spawn seed {seed}");
                seed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_standard_playfield() {
        let config = Config::default();
        assert_eq!(config.width, 800);
        assert_eq!(config.height, 600);
        assert_eq!(config.frame_delay(40), 40);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: Config = serde_json::from_str(r#"{"width": 1024}"#).unwrap();
        assert_eq!(config.width, 1024);
        assert_eq!(config.height, 600);
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_roundtrip() {
        let config = Config {
            width: 640,
            height: 480,
            frame_delay_ms: Some(16),
            seed: Some(42),
        };
        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(serde_json::from_str::<Config>(&json).unwrap(), config);
    }

    #[test]
    fn test_fixed_seed_is_stable() {
        let config = Config {
            seed: Some(99),
            ..Config::default()
        };
        assert_eq!(config.rng_seed(), 99);
        assert_eq!(config.rng_seed(), 99);
    }
}
