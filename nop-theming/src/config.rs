// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use log::warn;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug)]
pub enum ConfigError {
    LoadError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::LoadError(msg) => write!(f, "Configuration load error: {}", msg),
            ConfigError::ValidationError(msg) => {
                write!(f, "Configuration validation error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AppConfig {
    #[serde(default = "default_app_name")]
    pub name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            name: default_app_name(),
        }
    }
}

fn default_app_name() -> String {
    "NoPressure".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct AdminConfig {
    #[serde(default = "default_admin_path")]
    pub path: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            path: default_admin_path(),
        }
    }
}

fn default_admin_path() -> String {
    "/admin".to_string()
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StaticsConfig {
    #[serde(default = "default_max_file_size_mb")]
    pub max_file_size_mb: u64, // 0 means unlimited
    #[serde(default = "default_allowed_extensions")]
    pub allowed_extensions: Vec<String>,
}

impl Default for StaticsConfig {
    fn default() -> Self {
        Self {
            max_file_size_mb: default_max_file_size_mb(),
            allowed_extensions: default_allowed_extensions(),
        }
    }
}

fn default_max_file_size_mb() -> u64 {
    10 // theme statics are small; 10MB covers bundled JS
}

fn default_allowed_extensions() -> Vec<String> {
    vec!["css".to_string(), "js".to_string()]
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub app: AppConfig,
    #[serde(default)]
    pub admin: AdminConfig,
    #[serde(default)]
    pub statics: StaticsConfig,
}

#[derive(Debug, Clone)]
pub struct ValidatedConfig {
    pub app: AppConfig,
    pub admin: AdminConfig,
    pub statics: StaticsConfig,
}

impl Config {
    /// Load the module configuration from `config.yaml` under the runtime root.
    /// A missing file yields the built-in defaults.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let config_path = root.join("config.yaml");
        if !config_path.exists() {
            warn!(
                "No config.yaml found at '{}', using default theming configuration",
                config_path.display()
            );
            return Ok(Config::default());
        }

        let config_content = fs::read_to_string(&config_path).map_err(|e| {
            ConfigError::LoadError(format!(
                "Failed to read config file '{}': {}",
                config_path.display(),
                e
            ))
        })?;

        let config: Config = serde_yaml::from_str(&config_content)
            .map_err(|e| ConfigError::LoadError(format!("Failed to parse config.yaml: {}", e)))?;

        Ok(config)
    }

    pub fn load_and_validate(root: &Path) -> Result<ValidatedConfig, ConfigError> {
        let config = Self::load(root)?;
        config.validate()
    }

    pub fn validate(self) -> Result<ValidatedConfig, ConfigError> {
        if self.app.name.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "app.name must not be empty".to_string(),
            ));
        }

        if !self.admin.path.starts_with('/') || self.admin.path.ends_with('/') {
            return Err(ConfigError::ValidationError(format!(
                "admin.path '{}' must start with '/' and must not end with '/'",
                self.admin.path
            )));
        }

        if self.statics.allowed_extensions.is_empty() {
            return Err(ConfigError::ValidationError(
                "statics.allowed_extensions must not be empty".to_string(),
            ));
        }
        for extension in &self.statics.allowed_extensions {
            if extension.is_empty()
                || extension.starts_with('.')
                || !extension
                    .chars()
                    .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
            {
                return Err(ConfigError::ValidationError(format!(
                    "statics.allowed_extensions entry '{}' must be a bare lowercase extension without the dot",
                    extension
                )));
            }
        }

        Ok(ValidatedConfig {
            app: self.app,
            admin: self.admin,
            statics: self.statics,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_validate() {
        let validated = Config::default().validate().expect("default config");
        assert_eq!(validated.app.name, "NoPressure");
        assert_eq!(validated.admin.path, "/admin");
        assert_eq!(validated.statics.allowed_extensions, vec!["css", "js"]);
    }

    #[test]
    fn missing_config_file_uses_defaults() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let validated = Config::load_and_validate(temp_dir.path()).expect("defaults");
        assert_eq!(validated.statics.max_file_size_mb, 10);
    }

    #[test]
    fn config_file_overrides_defaults() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        std::fs::write(
            temp_dir.path().join("config.yaml"),
            "admin:\n  path: /manage\nstatics:\n  max_file_size_mb: 2\n",
        )
        .expect("write config");
        let validated = Config::load_and_validate(temp_dir.path()).expect("config");
        assert_eq!(validated.admin.path, "/manage");
        assert_eq!(validated.statics.max_file_size_mb, 2);
        assert_eq!(validated.statics.allowed_extensions, vec!["css", "js"]);
    }

    #[test]
    fn rejects_admin_path_without_leading_slash() {
        let mut config = Config::default();
        config.admin.path = "admin".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_dotted_extension_entries() {
        let mut config = Config::default();
        config.statics.allowed_extensions = vec![".css".to_string()];
        assert!(config.validate().is_err());
    }
}
