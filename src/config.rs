//! Configuration loading and management
//!
//! Handles parsing of `.todo.toml` configuration files.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::{Error, Result};
use crate::id::IdStrategy;

pub const CONFIG_FILE: &str = ".todo.toml";

const MIN_NARROW_WIDTH: u16 = 20;
const MAX_NARROW_WIDTH: u16 = 1000;

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Seed data configuration
    #[serde(default)]
    pub seed: SeedConfig,

    /// Id generation configuration
    #[serde(default)]
    pub ids: IdsConfig,

    /// Terminal board configuration
    #[serde(default)]
    pub board: BoardConfig,
}

/// Seed data configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeedConfig {
    /// JSON file with the initial task list; bundled sample when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

/// Id generation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdsConfig {
    /// "sequential" or "clock"
    #[serde(default = "default_id_strategy")]
    pub strategy: String,
}

fn default_id_strategy() -> String {
    IdStrategy::default().as_str().to_string()
}

impl Default for IdsConfig {
    fn default() -> Self {
        Self {
            strategy: default_id_strategy(),
        }
    }
}

impl IdsConfig {
    pub fn strategy(&self) -> Result<IdStrategy> {
        self.strategy.parse()
    }
}

/// Terminal board configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoardConfig {
    /// Below this width only the focused lane is shown
    #[serde(default = "default_narrow_width")]
    pub narrow_width: u16,

    /// Ask before deleting a task
    #[serde(default = "default_true")]
    pub confirm_delete: bool,
}

fn default_narrow_width() -> u16 {
    90
}

fn default_true() -> bool {
    true
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            narrow_width: default_narrow_width(),
            confirm_delete: true,
        }
    }
}

impl Config {
    /// Load configuration from a `.todo.toml` file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Config = toml::from_str(&content)?;
        config.validate()?;
        if let (Some(seed), Some(base)) = (config.seed.path.as_ref(), path.parent()) {
            if seed.is_relative() {
                config.seed.path = Some(base.join(seed));
            }
        }
        Ok(config)
    }

    /// Load configuration from `dir`, or return defaults
    pub fn load_from_dir(dir: &Path) -> Self {
        let config_path = dir.join(CONFIG_FILE);
        if !config_path.exists() {
            return Self::default();
        }
        match Self::load(&config_path) {
            Ok(config) => config,
            Err(err) => {
                warn!(path = %config_path.display(), error = %err, "ignoring invalid config");
                Self::default()
            }
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        if let Some(path) = self.seed.path.as_ref() {
            if path.as_os_str().to_string_lossy().trim().is_empty() {
                return Err(Error::InvalidConfig(
                    "seed.path cannot be empty".to_string(),
                ));
            }
        }
        self.ids.strategy()?;
        if !(MIN_NARROW_WIDTH..=MAX_NARROW_WIDTH).contains(&self.board.narrow_width) {
            return Err(Error::InvalidConfig(format!(
                "board.narrow_width must be between {MIN_NARROW_WIDTH} and {MAX_NARROW_WIDTH}"
            )));
        }
        Ok(())
    }
}
