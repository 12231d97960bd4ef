// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::fields::registry::{
    FieldRef, RegionDescriptor, RegionDisplay, SiteTypeDescriptor,
};
use crate::fields::{CodeEditorField, UploadFileField};
use serde::{Deserialize, Serialize};

/// Theming aggregate owned by a site record. Created with the site,
/// mutated by content authors, destroyed with the site. The regions are
/// plain value aggregates; per-field validation is the authoring UI's
/// concern.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuperSite {
    #[serde(default)]
    pub header: HeaderRegion,
    #[serde(default)]
    pub footer: FooterRegion,
    #[serde(default)]
    pub global_settings: GlobalSettingsRegion,
    #[serde(default)]
    pub seo_settings: SeoSettingsRegion,
    #[serde(default)]
    pub theme_customization: ThemeCustomizationRegion,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HeaderRegion {
    #[serde(default)]
    pub template: CodeEditorField,
    #[serde(default)]
    pub is_sticky: bool,
    #[serde(default)]
    pub logo: UploadFileField,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FooterRegion {
    #[serde(default)]
    pub template: CodeEditorField,
    #[serde(default)]
    pub copyright: String,
    #[serde(default)]
    pub show_social_media: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GlobalSettingsRegion {
    #[serde(default)]
    pub custom_code: CodeEditorField,
    #[serde(default)]
    pub favicon: UploadFileField,
    #[serde(default)]
    pub google_analytics_id: String,
    #[serde(default)]
    pub enable_dark_mode: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SeoSettingsRegion {
    #[serde(default)]
    pub default_meta_description: String,
    #[serde(default)]
    pub default_meta_keywords: String,
    #[serde(default)]
    pub custom_meta_tags: CodeEditorField,
    #[serde(default)]
    pub enable_open_graph: bool,
    #[serde(default)]
    pub enable_twitter_cards: bool,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ThemeCustomizationRegion {
    #[serde(default)]
    pub primary_color: String,
    #[serde(default)]
    pub secondary_color: String,
    #[serde(default)]
    pub background_color: String,
    #[serde(default)]
    pub text_color: String,
    #[serde(default)]
    pub custom_css_variables: CodeEditorField,
    #[serde(default)]
    pub heading_font: String,
    #[serde(default)]
    pub body_font: String,
}

/// Registration descriptor for the super-site type: the region list the
/// editor surface renders, with display metadata per region and field.
pub fn super_site_descriptor() -> SiteTypeDescriptor {
    SiteTypeDescriptor {
        id: "super-site",
        title: "Super site",
        description: "More powerful than a standard site, with additional features and capabilities.",
        regions: vec![
            RegionDescriptor {
                key: "header",
                title: "Header Configuration",
                display: RegionDisplay::Setting,
                fields: vec![
                    FieldRef {
                        key: "template",
                        title: "Header Template",
                        description: Some("HTML, CSS, and JavaScript for the site header"),
                        field_type: "codeeditor",
                    },
                    FieldRef {
                        key: "is_sticky",
                        title: "Sticky Header",
                        description: None,
                        field_type: "checkbox",
                    },
                    FieldRef {
                        key: "logo",
                        title: "Header Logo",
                        description: None,
                        field_type: "uploadfile",
                    },
                ],
            },
            RegionDescriptor {
                key: "footer",
                title: "Footer Configuration",
                display: RegionDisplay::Setting,
                fields: vec![
                    FieldRef {
                        key: "template",
                        title: "Footer Template",
                        description: Some("HTML, CSS, and JavaScript for the site footer"),
                        field_type: "codeeditor",
                    },
                    FieldRef {
                        key: "copyright",
                        title: "Copyright Text",
                        description: None,
                        field_type: "string",
                    },
                    FieldRef {
                        key: "show_social_media",
                        title: "Show Social Media",
                        description: None,
                        field_type: "checkbox",
                    },
                ],
            },
            RegionDescriptor {
                key: "global_settings",
                title: "Global Settings",
                display: RegionDisplay::Setting,
                fields: vec![
                    FieldRef {
                        key: "custom_code",
                        title: "Custom CSS/JS",
                        description: Some(
                            "Add custom CSS and JavaScript that will be applied site-wide",
                        ),
                        field_type: "codeeditor",
                    },
                    FieldRef {
                        key: "favicon",
                        title: "Favicon",
                        description: None,
                        field_type: "uploadfile",
                    },
                    FieldRef {
                        key: "google_analytics_id",
                        title: "Google Analytics ID",
                        description: None,
                        field_type: "string",
                    },
                    FieldRef {
                        key: "enable_dark_mode",
                        title: "Enable Dark Mode Support",
                        description: None,
                        field_type: "checkbox",
                    },
                ],
            },
            RegionDescriptor {
                key: "seo_settings",
                title: "SEO Settings",
                display: RegionDisplay::Setting,
                fields: vec![
                    FieldRef {
                        key: "default_meta_description",
                        title: "Default Meta Description",
                        description: Some(
                            "Default description used when a page doesn't have a specific one",
                        ),
                        field_type: "text",
                    },
                    FieldRef {
                        key: "default_meta_keywords",
                        title: "Default Meta Keywords",
                        description: Some(
                            "Default keywords used when a page doesn't have specific ones",
                        ),
                        field_type: "string",
                    },
                    FieldRef {
                        key: "custom_meta_tags",
                        title: "Custom Meta Tags",
                        description: Some("Add custom meta tags using HTML"),
                        field_type: "codeeditor",
                    },
                    FieldRef {
                        key: "enable_open_graph",
                        title: "Enable Open Graph Tags",
                        description: None,
                        field_type: "checkbox",
                    },
                    FieldRef {
                        key: "enable_twitter_cards",
                        title: "Enable Twitter Cards",
                        description: None,
                        field_type: "checkbox",
                    },
                ],
            },
            RegionDescriptor {
                key: "theme_customization",
                title: "Theme Customization",
                display: RegionDisplay::Setting,
                fields: vec![
                    FieldRef {
                        key: "primary_color",
                        title: "Primary Color",
                        description: None,
                        field_type: "string",
                    },
                    FieldRef {
                        key: "secondary_color",
                        title: "Secondary Color",
                        description: None,
                        field_type: "string",
                    },
                    FieldRef {
                        key: "background_color",
                        title: "Background Color",
                        description: None,
                        field_type: "string",
                    },
                    FieldRef {
                        key: "text_color",
                        title: "Text Color",
                        description: None,
                        field_type: "string",
                    },
                    FieldRef {
                        key: "custom_css_variables",
                        title: "Custom CSS Variables",
                        description: Some(
                            "Define custom CSS variables for theme customization",
                        ),
                        field_type: "codeeditor",
                    },
                    FieldRef {
                        key: "heading_font",
                        title: "Heading Font",
                        description: None,
                        field_type: "string",
                    },
                    FieldRef {
                        key: "body_font",
                        title: "Body Font",
                        description: None,
                        field_type: "string",
                    },
                ],
            },
        ],
    }
}
