// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

//! Seam to the host framework's generic media library. The upload-file
//! field's authoring UI stores through this service; the theming module
//! only consumes the result, it does not implement storage here (the
//! dedicated CSS/JS path lives in `statics`).

use crate::fields::{UploadFile, UploadFileField};
use crate::util::detect_mime_type;
use chrono::Utc;
use futures_util::future::BoxFuture;
use std::fmt;
use uuid::Uuid;

#[derive(Debug)]
pub struct MediaError {
    message: String,
}

impl MediaError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for MediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "media library error: {}", self.message)
    }
}

impl std::error::Error for MediaError {}

/// A file handed to the media library for storage.
#[derive(Debug, Clone)]
pub struct MediaFile {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

impl MediaFile {
    /// Build a media file, detecting the MIME type from the content with
    /// an extension-based fallback when the client declared none.
    pub fn new(filename: impl Into<String>, bytes: Vec<u8>) -> Self {
        let filename = filename.into();
        let content_type = detect_mime_type(&filename, &bytes);
        Self {
            filename,
            content_type,
            bytes,
        }
    }
}

/// Result of a media-library upload, as reported by the host.
#[derive(Debug, Clone)]
pub struct MediaUpload {
    pub id: Uuid,
    pub filename: String,
    pub content_type: String,
    pub size: u64,
    pub public_url: String,
}

impl MediaUpload {
    /// Turn the upload result into an upload-file field value.
    pub fn into_field(self) -> UploadFileField {
        UploadFileField {
            value: UploadFile {
                id: self.id,
                filename: self.filename,
                content_type: self.content_type,
                size: self.size,
                public_url: self.public_url,
                upload_date: Utc::now(),
                description: None,
            },
        }
    }
}

/// The host framework's media library, consumed by the file-field
/// authoring UI.
pub trait MediaLibrary: Send + Sync {
    fn upload_media(
        &self,
        file: MediaFile,
        folder: &str,
    ) -> BoxFuture<'static, Result<MediaUpload, MediaError>>;
}
