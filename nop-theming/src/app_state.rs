// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use std::sync::Arc;

use crate::config::ValidatedConfig;
use crate::fields::register_builtin_fields;
use crate::fields::registry::{
    FieldRegistry, RegistryError, SiteTypeRegistry, register_builtin_site_types,
};
use crate::runtime_paths::RuntimePaths;
use crate::statics::SiteStaticFileService;

pub struct AppState {
    pub runtime_paths: RuntimePaths,
    pub statics: SiteStaticFileService,
    pub fields: Arc<FieldRegistry>,
    pub site_types: Arc<SiteTypeRegistry>,
}

impl AppState {
    pub fn new(
        config: &ValidatedConfig,
        runtime_paths: RuntimePaths,
    ) -> Result<Self, RegistryError> {
        let mut fields = FieldRegistry::new();
        register_builtin_fields(&mut fields)?;
        let mut site_types = SiteTypeRegistry::new();
        register_builtin_site_types(&mut site_types, &fields)?;
        let statics =
            SiteStaticFileService::new(runtime_paths.sites_dir.clone(), &config.statics);
        Ok(Self {
            runtime_paths,
            statics,
            fields: Arc::new(fields),
            site_types: Arc::new(site_types),
        })
    }
}
