// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

pub mod code_editor;
pub mod registry;
pub mod upload_file;

pub use code_editor::CodeEditorField;
pub use registry::{
    FieldDescriptor, FieldRegistry, RegistryError, register_builtin_fields,
};
pub use upload_file::{UploadFile, UploadFileField};
