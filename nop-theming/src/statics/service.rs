// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::config::StaticsConfig;
use log::{info, warn};
use std::fmt;
use std::path::{Path, PathBuf};
use tokio::fs;

/// One file of an upload batch, fully buffered.
#[derive(Debug, Clone)]
pub struct StaticUpload {
    pub filename: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug)]
pub enum StaticsError {
    InvalidArgument(String),
    Storage {
        context: String,
        source: std::io::Error,
    },
    NotImplemented(&'static str),
}

impl fmt::Display for StaticsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StaticsError::InvalidArgument(msg) => write!(f, "{}", msg),
            StaticsError::Storage { context, source } => write!(f, "{}: {}", context, source),
            StaticsError::NotImplemented(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for StaticsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StaticsError::Storage { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Manages static files for a site, such as CSS and JavaScript theme files.
///
/// Files land in a flat per-site directory under the sites root. Re-uploading
/// a file of the same name overwrites the previous one; there is no
/// versioning and no manifest. The batch is validated as a whole before any
/// write, but the writes themselves are not atomic: an I/O failure midway
/// leaves the already-written files on disk.
pub struct SiteStaticFileService {
    sites_dir: PathBuf,
    allowed_extensions: Vec<String>,
    max_file_size_mb: u64,
}

impl SiteStaticFileService {
    pub fn new(sites_dir: PathBuf, config: &StaticsConfig) -> Self {
        Self {
            sites_dir,
            allowed_extensions: config.allowed_extensions.clone(),
            max_file_size_mb: config.max_file_size_mb,
        }
    }

    /// Save a batch of static files for a specific site.
    ///
    /// The whole batch is rejected before anything touches disk when the
    /// site id is empty, the batch is empty, any file is empty, oversized,
    /// or has a disallowed extension.
    pub async fn save_static_files(
        &self,
        site_id: &str,
        files: &[StaticUpload],
    ) -> Result<(), StaticsError> {
        if site_id.is_empty() {
            return Err(StaticsError::InvalidArgument(
                "Site ID cannot be empty.".to_string(),
            ));
        }
        validate_path_segment(site_id)
            .map_err(|_| StaticsError::InvalidArgument("Site ID is not valid.".to_string()))?;

        if files.is_empty() {
            return Err(StaticsError::InvalidArgument(
                "No files provided to save.".to_string(),
            ));
        }

        for file in files {
            validate_path_segment(&file.filename).map_err(|_| {
                StaticsError::InvalidArgument(format!(
                    "File {} has an invalid name.",
                    file.filename
                ))
            })?;
            if file.bytes.is_empty() {
                return Err(StaticsError::InvalidArgument(format!(
                    "File {} is empty.",
                    file.filename
                )));
            }
            let extension = extension_of(&file.filename);
            if !self
                .allowed_extensions
                .iter()
                .any(|allowed| Some(allowed.as_str()) == extension.as_deref())
            {
                return Err(StaticsError::InvalidArgument(format!(
                    "File {} is not a valid {} file.",
                    file.filename,
                    describe_extensions(&self.allowed_extensions)
                )));
            }
            if self.max_file_size_mb > 0
                && file.bytes.len() as u64 > self.max_file_size_mb * 1024 * 1024
            {
                return Err(StaticsError::InvalidArgument(format!(
                    "File {} exceeds the maximum size of {} MB.",
                    file.filename, self.max_file_size_mb
                )));
            }
        }

        let site_dir = self.sites_dir.join(site_id);
        fs::create_dir_all(&site_dir)
            .await
            .map_err(|e| StaticsError::Storage {
                context: format!("Failed to create site directory '{}'", site_dir.display()),
                source: e,
            })?;

        for file in files {
            let file_path = site_dir.join(&file.filename);
            if file_path.exists() {
                warn!(
                    "Overwriting existing static file '{}' for site {}",
                    file.filename, site_id
                );
            }
            fs::write(&file_path, &file.bytes)
                .await
                .map_err(|e| StaticsError::Storage {
                    context: format!("Failed to write file '{}'", file_path.display()),
                    source: e,
                })?;
        }

        info!(
            "Saved {} static file(s) for site {}",
            files.len(),
            site_id
        );
        Ok(())
    }

    /// List static files stored for a site.
    ///
    /// Intentionally unimplemented until a storage-listing strategy is
    /// chosen; callers must handle the typed error rather than rely on a
    /// silent directory scan.
    pub async fn list_files(&self, _site_id: &str) -> Result<Vec<String>, StaticsError> {
        Err(StaticsError::NotImplemented(
            "Listing site static files is not implemented yet.",
        ))
    }

    /// Public URL a stored file is reachable at after upload.
    pub fn public_url(&self, site_id: &str, filename: &str) -> String {
        format!("/sites/{}/{}", site_id, filename)
    }
}

fn extension_of(filename: &str) -> Option<String> {
    Path::new(filename)
        .extension()
        .map(|ext| ext.to_string_lossy().to_ascii_lowercase())
}

/// Reject anything that could escape the per-site directory. Ordinary site
/// ids and file names pass untouched.
fn validate_path_segment(segment: &str) -> Result<(), ()> {
    if segment.contains('/') || segment.contains('\\') {
        return Err(());
    }
    if segment == "." || segment == ".." || segment.starts_with('.') {
        return Err(());
    }
    if segment.chars().any(|c| c.is_control()) {
        return Err(());
    }
    Ok(())
}

fn describe_extensions(extensions: &[String]) -> String {
    let names: Vec<&str> = extensions
        .iter()
        .map(|ext| match ext.as_str() {
            "css" => "CSS",
            "js" => "JavaScript",
            "html" => "HTML",
            other => other,
        })
        .collect();
    match names.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{} or {}", rest.join(", "), last),
        Some((last, _)) => last.to_string(),
        None => String::new(),
    }
}
