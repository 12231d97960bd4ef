// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

/// MIME type for an uploaded file. Content sniffing wins; text formats
/// like CSS have no magic bytes, so the filename extension decides those.
pub fn detect_mime_type(filename: &str, content: &[u8]) -> String {
    if let Some(kind) = infer::get(content) {
        return kind.mime_type().to_string();
    }
    mime_guess::from_path(filename)
        .first()
        .map(|mime| mime.to_string())
        .unwrap_or_else(|| "application/octet-stream".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn binary_content_is_sniffed_regardless_of_name() {
        let png_magic = [0x89, b'P', b'N', b'G', 13, 10, 26, 10];
        assert_eq!(detect_mime_type("theme.css", &png_magic), "image/png");
    }

    #[test]
    fn text_files_use_extension_fallback() {
        assert_eq!(
            detect_mime_type("theme.css", b"body { margin: 0; }"),
            "text/css"
        );
    }

    #[test]
    fn unknown_content_falls_back_to_octet_stream() {
        assert_eq!(
            detect_mime_type("mystery", b"plain text"),
            "application/octet-stream"
        );
    }
}
