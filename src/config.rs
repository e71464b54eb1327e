use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

pub const CONFIG_FILE_NAME: &str = ".tsmergerc.json";

/// Project configuration read from `.tsmergerc.json`.
///
/// Relative paths are resolved against the directory holding the config file.
#[derive(Debug, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Reference `.ts` file to take translations from.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// `.ts` files to update in place.
    #[serde(default, alias = "target")]
    pub targets: Vec<String>,
}

impl Config {
    /// Starter config written by `tsmerge init`.
    pub fn template() -> Self {
        Self {
            source: Some("translations/reference.ts".to_string()),
            targets: vec!["translations/app.ts".to_string()],
        }
    }

    /// Validate configuration values.
    ///
    /// Returns an error if any configured path is empty.
    pub fn validate(&self) -> Result<()> {
        if self.source.as_deref().is_some_and(|s| s.trim().is_empty()) {
            bail!("Invalid path in 'source': must not be empty");
        }
        if self.targets.iter().any(|t| t.trim().is_empty()) {
            bail!("Invalid path in 'targets': must not be empty");
        }
        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::template();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let config_path = current.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }
        if current.join(".git").exists() {
            return None;
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Result of loading configuration.
pub struct ConfigLoadResult {
    pub config: Config,
    /// Directory relative config paths are resolved against.
    pub base_dir: PathBuf,
    /// True if config was loaded from a file, false if using defaults.
    pub from_file: bool,
}

impl ConfigLoadResult {
    pub fn source(&self) -> Option<PathBuf> {
        self.config.source.as_deref().map(|s| self.base_dir.join(s))
    }

    pub fn targets(&self) -> Vec<PathBuf> {
        self.config
            .targets
            .iter()
            .map(|t| self.base_dir.join(t))
            .collect()
    }
}

pub fn load_config(start_dir: &Path) -> Result<ConfigLoadResult> {
    match find_config_file(start_dir) {
        Some(path) => {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            let config: Config = serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
            config.validate()?;
            let base_dir = path
                .parent()
                .map_or_else(|| start_dir.to_path_buf(), Path::to_path_buf);
            Ok(ConfigLoadResult {
                config,
                base_dir,
                from_file: true,
            })
        }
        None => Ok(ConfigLoadResult {
            config: Config::default(),
            base_dir: start_dir.to_path_buf(),
            from_file: false,
        }),
    }
}
