// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use serde::{Deserialize, Serialize};

/// Content field holding an inline source-code snippet.
///
/// The content is a single opaque text blob; whether it is rendered as
/// HTML, CSS, or JavaScript is decided by the consuming template, not
/// stored with the field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CodeEditorField {
    #[serde(default)]
    pub content: String,
}

impl CodeEditorField {
    pub fn from_str_value(stored: &str) -> Self {
        Self {
            content: stored.to_string(),
        }
    }

    pub fn as_str_value(&self) -> &str {
        &self.content
    }
}
