use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use crate::{
    errors::ConfigError,
    ledger::{BalancePolicy, CategorySet, Ledger, PREDEFINED_CATEGORIES},
};

pub const CONFIG_ENV_VAR: &str = "EXPENSE_TRACKER_CONFIG";
const APP_DIR: &str = "expense_tracker";
const CONFIG_FILE: &str = "config.json";

/// Startup settings. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub categories: Vec<String>,
    pub balance_policy: BalancePolicy,
    pub plain_output: bool,
    pub show_banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            categories: PREDEFINED_CATEGORIES.iter().map(|c| c.to_string()).collect(),
            balance_policy: BalancePolicy::default(),
            plain_output: false,
            show_banner: true,
        }
    }
}

impl Config {
    pub fn category_set(&self) -> Result<CategorySet, ConfigError> {
        CategorySet::new(self.categories.iter().cloned())
    }

    /// Builds an empty ledger using the configured categories and policy.
    pub fn build_ledger(&self) -> Result<Ledger, ConfigError> {
        Ok(Ledger::with_policy(self.category_set()?, self.balance_policy))
    }
}

/// Locates and reads the configuration file.
pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    /// Uses `EXPENSE_TRACKER_CONFIG` when set, else the platform config dir.
    pub fn new() -> Self {
        let path = env::var_os(CONFIG_ENV_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(default_path);
        Self { path }
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Reads the file, falling back to defaults when it does not exist.
    pub fn load(&self) -> Result<Config, ConfigError> {
        if !self.path.exists() {
            tracing::debug!(path = %self.path.display(), "no config file; using defaults");
            return Ok(Config::default());
        }
        let data = fs::read_to_string(&self.path)?;
        let config: Config = serde_json::from_str(&data)?;
        config.category_set()?;
        tracing::debug!(path = %self.path.display(), "config loaded");
        Ok(config)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for ConfigManager {
    fn default() -> Self {
        Self::new()
    }
}

fn default_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join(CONFIG_FILE)
}
