//! Repository location, resolved once at process start.
//!
//! The repository root comes from, in order: the `--repo` flag, the `GITOSCOPE_REPO`
//! environment variable, `config.json` in the user config directory, and finally the
//! current directory.

use crate::core::dirs::get_config_directory;
use crate::core::error::{GitoscopeError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const REPO_ENV_VAR: &str = "GITOSCOPE_REPO";
pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Serialize, Deserialize, Debug, Default, Clone, PartialEq, Eq)]
pub struct GitoscopeConfig {
    #[serde(default)]
    pub repository: Option<PathBuf>,
}

impl GitoscopeConfig {
    /// Loads the user config file, or defaults when there is none
    pub fn load() -> Result<Self> {
        Self::load_from(&get_config_directory().join(CONFIG_FILE_NAME))
    }

    pub fn load_from(config_file: &Path) -> Result<Self> {
        if !config_file.exists() {
            log::debug!("No config file at {}", config_file.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(config_file)
            .map_err(|e| GitoscopeError::config_read_failed(config_file, e))?;
        serde_json::from_str(&content)
            .map_err(|e| GitoscopeError::config_parse_failed(config_file, e))
    }

    /// Picks the repository root from the flag, the environment, this config,
    /// then the current directory
    pub fn resolve_repository(
        &self,
        flag: Option<PathBuf>,
        env_value: Option<String>,
    ) -> Result<PathBuf> {
        if let Some(path) = flag {
            return Ok(path);
        }
        if let Some(path) = env_value.filter(|v| !v.trim().is_empty()) {
            return Ok(PathBuf::from(path));
        }
        if let Some(path) = &self.repository {
            return Ok(path.clone());
        }
        Ok(std::env::current_dir()?)
    }
}
