//! Configuration for ladder
//!
//! Configuration is stored as TOML, by default in
//! `~/.config/ladder/config.toml`. Every section is optional and a missing
//! file means defaults.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{LadderError, Result};
use crate::word::{LadderOptions, NeighborStrategy};

const CONFIG_DIR: &str = "ladder";
const CONFIG_FILE: &str = "config.toml";
const CONFIG_DIR_ENV_VAR: &str = "LADDER_CONFIG_DIR";

/// Top-level configuration file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub search: SearchConfig,
    #[serde(default)]
    pub dictionary: DictionaryConfig,
}

/// `[search]` section: word ladder search tuning
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// How neighbors of a word are enumerated
    #[serde(default)]
    pub strategy: NeighborStrategy,
    /// Longest ladder (in steps) the search will consider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_steps: Option<usize>,
}

impl SearchConfig {
    pub fn to_options(&self) -> LadderOptions {
        LadderOptions {
            strategy: self.strategy,
            max_steps: self.max_steps,
        }
    }
}

/// `[dictionary]` section: how word lists are read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DictionaryConfig {
    /// Fold every loaded word to lowercase
    #[serde(default = "default_lowercase")]
    pub lowercase: bool,
}

fn default_lowercase() -> bool {
    true
}

impl Default for DictionaryConfig {
    fn default() -> Self {
        DictionaryConfig {
            lowercase: default_lowercase(),
        }
    }
}

impl Config {
    /// Default config file location
    ///
    /// `$LADDER_CONFIG_DIR/config.toml` when set, otherwise the platform
    /// config directory.
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = if let Ok(env_dir) = std::env::var(CONFIG_DIR_ENV_VAR) {
            PathBuf::from(env_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| {
                    LadderError::Other("unable to determine config directory".to_string())
                })?
                .join(CONFIG_DIR)
        };

        Ok(config_dir.join(CONFIG_FILE))
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| LadderError::io_operation("read config", path.display(), e))?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Resolve the configuration for a run.
    ///
    /// An explicit path must exist. Without one, the default location is
    /// used when present and defaults otherwise.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        let path = match Self::default_path() {
            Ok(path) => path,
            Err(e) => {
                tracing::debug!(error = %e, "no config directory, using defaults");
                return Ok(Self::default());
            }
        };

        if path.exists() {
            tracing::debug!(path = %path.display(), "loading config");
            Self::load(&path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| LadderError::Other(format!("failed to serialize config: {}", e)))?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .map_err(|e| LadderError::io_operation("create directory", dir.display(), e))?;
        }

        fs::write(path, content)
            .map_err(|e| LadderError::io_operation("write config", path.display(), e))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.search.strategy, NeighborStrategy::Generate);
        assert!(config.search.max_steps.is_none());
        assert!(config.dictionary.lowercase);
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.search.strategy = NeighborStrategy::Scan;
        config.search.max_steps = Some(12);
        config.dictionary.lowercase = false;
        config.save(&path).unwrap();

        let loaded = Config::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[search]\nstrategy = \"scan\"\n").unwrap();

        let config = Config::load(&path).unwrap();
        assert_eq!(config.search.strategy, NeighborStrategy::Scan);
        assert!(config.search.max_steps.is_none());
        assert!(config.dictionary.lowercase);
    }

    #[test]
    fn test_invalid_strategy_is_toml_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[search]\nstrategy = \"teleport\"\n").unwrap();

        let err = Config::load(&path).unwrap_err();
        assert_eq!(err.error_type(), "toml_error");
    }

    #[test]
    fn test_resolve_explicit_missing_file_fails() {
        let dir = tempdir().unwrap();
        let err = Config::resolve(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(err.to_string().contains("read config"));
    }

    #[test]
    fn test_to_options() {
        let search = SearchConfig {
            strategy: NeighborStrategy::Scan,
            max_steps: Some(4),
        };
        let opts = search.to_options();
        assert_eq!(opts.strategy, NeighborStrategy::Scan);
        assert_eq!(opts.max_steps, Some(4));
    }
}
