// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::config::ConfigError;
use std::fs;
use std::path::{Path, PathBuf};

/// Filesystem layout for the theming module under the host's runtime root.
/// Uploaded theme statics land in per-site directories below `sites_dir`.
#[derive(Debug, Clone)]
pub struct RuntimePaths {
    pub root: PathBuf,
    pub web_root: PathBuf,
    pub sites_dir: PathBuf,
}

impl RuntimePaths {
    pub fn from_root(root: &Path) -> Result<Self, ConfigError> {
        let root_path = if root.as_os_str().is_empty() {
            PathBuf::from(".")
        } else {
            root.to_path_buf()
        };

        if !root_path.exists() {
            fs::create_dir_all(&root_path).map_err(|e| {
                ConfigError::ValidationError(format!(
                    "Failed to create runtime root '{}': {}",
                    root_path.display(),
                    e
                ))
            })?;
        }

        let root_canonical = root_path.canonicalize().map_err(|e| {
            ConfigError::ValidationError(format!(
                "Failed to canonicalize runtime root '{}': {}",
                root_path.display(),
                e
            ))
        })?;

        let web_root = root_canonical.join("web");
        let sites_dir = web_root.join("sites");
        ensure_dir_exists(&web_root)?;
        ensure_dir_exists(&sites_dir)?;

        let web_root = web_root.canonicalize().map_err(|e| {
            ConfigError::ValidationError(format!(
                "Failed to canonicalize web root '{}': {}",
                web_root.display(),
                e
            ))
        })?;
        let sites_dir = sites_dir.canonicalize().map_err(|e| {
            ConfigError::ValidationError(format!(
                "Failed to canonicalize sites directory '{}': {}",
                sites_dir.display(),
                e
            ))
        })?;

        Ok(Self {
            root: root_canonical,
            web_root,
            sites_dir,
        })
    }
}

fn ensure_dir_exists(path: &Path) -> Result<(), ConfigError> {
    fs::create_dir_all(path).map_err(|e| {
        ConfigError::ValidationError(format!(
            "Failed to create directory '{}': {}",
            path.display(),
            e
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_and_canonicalizes_layout() {
        let temp_dir = tempfile::tempdir().expect("tempdir");
        let paths = RuntimePaths::from_root(temp_dir.path()).expect("runtime paths");
        assert!(paths.web_root.is_dir());
        assert!(paths.sites_dir.is_dir());
        assert!(paths.sites_dir.starts_with(&paths.web_root));
    }
}
