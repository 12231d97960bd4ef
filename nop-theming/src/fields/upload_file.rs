// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::hash::{Hash, Hasher};
use uuid::Uuid;

/// Metadata of an uploaded file referenced by a content field.
///
/// The public URL is the authoritative identity; everything else is
/// descriptive metadata kept only in the field value, never on disk.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadFile {
    pub id: Uuid,
    #[serde(default)]
    pub filename: String,
    #[serde(default)]
    pub content_type: String,
    #[serde(default)]
    pub size: u64,
    #[serde(default)]
    pub public_url: String,
    pub upload_date: DateTime<Utc>,
    #[serde(default)]
    pub description: Option<String>,
}

impl Default for UploadFile {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            filename: String::new(),
            content_type: String::new(),
            size: 0,
            public_url: String::new(),
            upload_date: Utc::now(),
            description: None,
        }
    }
}

/// Content field holding an uploaded file reference.
///
/// The stored string form of the field is exactly the public URL. Two
/// fields are equal when their public URLs are equal, regardless of size,
/// upload date, or any other metadata.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UploadFileField {
    pub value: UploadFile,
}

impl UploadFileField {
    /// Construct the field from its stored string form. Total: malformed
    /// input yields a field with an empty derived filename, never an error.
    pub fn from_str_value(stored: &str) -> Self {
        let filename = stored
            .rsplit_once('/')
            .map(|(_, name)| name.to_string())
            .unwrap_or_default();
        Self {
            value: UploadFile {
                public_url: stored.to_string(),
                filename,
                ..UploadFile::default()
            },
        }
    }

    /// The stored string form of the field: the public URL, or the empty
    /// string when no file has been attached.
    pub fn as_str_value(&self) -> &str {
        &self.value.public_url
    }
}

impl PartialEq for UploadFileField {
    fn eq(&self, other: &Self) -> bool {
        self.value.public_url == other.value.public_url
    }
}

impl Eq for UploadFileField {}

impl Hash for UploadFileField {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.public_url.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_url_and_derives_filename() {
        let field = UploadFileField::from_str_value("https://x/y/z/file.css");
        assert_eq!(field.as_str_value(), "https://x/y/z/file.css");
        assert_eq!(field.value.filename, "file.css");
    }

    #[test]
    fn empty_input_yields_empty_field() {
        let field = UploadFileField::from_str_value("");
        assert_eq!(field.as_str_value(), "");
        assert_eq!(field.value.filename, "");
    }

    #[test]
    fn input_without_separator_has_no_filename() {
        let field = UploadFileField::from_str_value("no-separator-here");
        assert_eq!(field.as_str_value(), "no-separator-here");
        assert_eq!(field.value.filename, "");
    }

    #[test]
    fn equality_ignores_metadata() {
        let mut a = UploadFileField::from_str_value("/sites/abc/theme.css");
        let mut b = UploadFileField::from_str_value("/sites/abc/theme.css");
        a.value.size = 10;
        b.value.size = 999;
        b.value.upload_date = a.value.upload_date + chrono::Duration::hours(1);
        assert_eq!(a, b);

        let c = UploadFileField::from_str_value("/sites/abc/other.css");
        assert_ne!(a, c);
    }

    #[test]
    fn default_field_serializes_to_empty_string() {
        let field = UploadFileField::default();
        assert_eq!(field.as_str_value(), "");
    }
}
