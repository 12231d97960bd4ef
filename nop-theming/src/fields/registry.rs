// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::fields::{CodeEditorField, UploadFileField};
use serde_json::Value;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub struct RegistryError {
    message: String,
}

impl RegistryError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "registry error: {}", self.message)
    }
}

impl Error for RegistryError {}

/// Registration entry for one field type.
///
/// `from_str` and `to_str` are the field's stored-string conversions,
/// erased through JSON so the editor surface can handle any field type
/// uniformly. Both are total: malformed stored values come back as the
/// empty string, never an error.
#[derive(Clone)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub shorthand: &'static str,
    pub component: &'static str,
    pub from_str: fn(&str) -> Value,
    pub to_str: fn(&Value) -> String,
}

/// Explicit table of field types available to the authoring surface.
/// Populated by startup calls, not by reflection over annotations.
#[derive(Default)]
pub struct FieldRegistry {
    fields: BTreeMap<&'static str, FieldDescriptor>,
}

impl FieldRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, descriptor: FieldDescriptor) -> Result<(), RegistryError> {
        if self.fields.contains_key(descriptor.shorthand) {
            return Err(RegistryError::new(format!(
                "Field type '{}' already registered",
                descriptor.shorthand
            )));
        }
        self.fields.insert(descriptor.shorthand, descriptor);
        Ok(())
    }

    pub fn descriptor(&self, shorthand: &str) -> Option<&FieldDescriptor> {
        self.fields.get(shorthand)
    }

    pub fn shorthands(&self) -> Vec<&'static str> {
        self.fields.keys().copied().collect()
    }
}

fn upload_file_from_str(stored: &str) -> Value {
    serde_json::to_value(UploadFileField::from_str_value(stored)).unwrap_or(Value::Null)
}

fn upload_file_to_str(value: &Value) -> String {
    serde_json::from_value::<UploadFileField>(value.clone())
        .map(|field| field.as_str_value().to_string())
        .unwrap_or_default()
}

fn code_editor_from_str(stored: &str) -> Value {
    serde_json::to_value(CodeEditorField::from_str_value(stored)).unwrap_or(Value::Null)
}

fn code_editor_to_str(value: &Value) -> String {
    serde_json::from_value::<CodeEditorField>(value.clone())
        .map(|field| field.as_str_value().to_string())
        .unwrap_or_default()
}

/// Install the field types this module ships with.
pub fn register_builtin_fields(registry: &mut FieldRegistry) -> Result<(), RegistryError> {
    registry.register(FieldDescriptor {
        name: "Code Editor",
        shorthand: "codeeditor",
        component: "code-editor-field",
        from_str: code_editor_from_str,
        to_str: code_editor_to_str,
    })?;
    registry.register(FieldDescriptor {
        name: "Upload File",
        shorthand: "uploadfile",
        component: "upload-file-field",
        from_str: upload_file_from_str,
        to_str: upload_file_to_str,
    })?;
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegionDisplay {
    Content,
    Setting,
}

#[derive(Debug, Clone)]
pub struct FieldRef {
    pub key: &'static str,
    pub title: &'static str,
    pub description: Option<&'static str>,
    pub field_type: &'static str,
}

#[derive(Debug, Clone)]
pub struct RegionDescriptor {
    pub key: &'static str,
    pub title: &'static str,
    pub display: RegionDisplay,
    pub fields: Vec<FieldRef>,
}

#[derive(Debug, Clone)]
pub struct SiteTypeDescriptor {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub regions: Vec<RegionDescriptor>,
}

/// Explicit table of site content types and their setting regions.
#[derive(Default)]
pub struct SiteTypeRegistry {
    types: BTreeMap<&'static str, SiteTypeDescriptor>,
}

impl SiteTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a site type. Every field reference must name a field type
    /// the given registry knows about; an unresolvable reference is a
    /// startup error, not a silent gap in the editor.
    pub fn register(
        &mut self,
        descriptor: SiteTypeDescriptor,
        fields: &FieldRegistry,
    ) -> Result<(), RegistryError> {
        if self.types.contains_key(descriptor.id) {
            return Err(RegistryError::new(format!(
                "Site type '{}' already registered",
                descriptor.id
            )));
        }
        for region in &descriptor.regions {
            for field in &region.fields {
                if fields.descriptor(field.field_type).is_none() && !is_host_field(field.field_type)
                {
                    return Err(RegistryError::new(format!(
                        "Site type '{}' region '{}' references unknown field type '{}'",
                        descriptor.id, region.key, field.field_type
                    )));
                }
            }
        }
        self.types.insert(descriptor.id, descriptor);
        Ok(())
    }

    pub fn descriptor(&self, id: &str) -> Option<&SiteTypeDescriptor> {
        self.types.get(id)
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.types.keys().copied().collect()
    }
}

/// Primitive field types provided by the host framework itself.
fn is_host_field(shorthand: &str) -> bool {
    matches!(shorthand, "string" | "text" | "checkbox" | "image")
}

pub fn register_builtin_site_types(
    registry: &mut SiteTypeRegistry,
    fields: &FieldRegistry,
) -> Result<(), RegistryError> {
    registry.register(crate::site::super_site_descriptor(), fields)
}
