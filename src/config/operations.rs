//! Config loading and validation.

use super::model::Config;
use super::types::DEFAULT_CONFIG_FILE;
use crate::error::{Result, TagdiffError};
use std::path::Path;
use tracing::debug;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(TagdiffError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            TagdiffError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load `.tagdiff.yaml` from `repo_root` if present, defaults otherwise.
    pub fn load_or_default<P: AsRef<Path>>(repo_root: P) -> Result<Self> {
        let path = repo_root.as_ref().join(DEFAULT_CONFIG_FILE);
        if path.is_file() {
            debug!(path = %path.display(), "loading config");
            Self::load(&path)
        } else {
            debug!("no config file, using defaults");
            Ok(Self::default())
        }
    }

    /// Parse config from a YAML string.
    ///
    /// An empty document yields the defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = if yaml.trim().is_empty() {
            Config::default()
        } else {
            serde_yaml::from_str(yaml).map_err(|e| {
                TagdiffError::UserError(format!("failed to parse config YAML: {}", e))
            })?
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `remote` and `ctags_command` must be non-empty
    /// - `web_scheme` must be non-empty and contain no `:` or `/`
    /// - `extra_ignore` entries must be non-empty
    pub fn validate(&self) -> Result<()> {
        if self.remote.trim().is_empty() {
            return Err(TagdiffError::UserError(
                "config validation failed: remote must be non-empty".to_string(),
            ));
        }

        if self.ctags_command.trim().is_empty() {
            return Err(TagdiffError::UserError(
                "config validation failed: ctags_command must be non-empty".to_string(),
            ));
        }

        if self.web_scheme.is_empty() || self.web_scheme.contains([':', '/']) {
            return Err(TagdiffError::UserError(format!(
                "config validation failed: web_scheme must be a bare scheme like 'https' (found '{}')",
                self.web_scheme
            )));
        }

        if self.extra_ignore.iter().any(|t| t.trim().is_empty()) {
            return Err(TagdiffError::UserError(
                "config validation failed: extra_ignore entries must be non-empty".to_string(),
            ));
        }

        Ok(())
    }
}
