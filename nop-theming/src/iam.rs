// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use actix_web::{HttpMessage, HttpRequest};

/// Capability required to manage a site's theming and static assets.
pub const MANAGE_SITES: &str = "manage-sites";

/// Identity of the authenticated caller, seeded into request extensions by
/// the host framework's authentication middleware before this module's
/// handlers run. This module never authenticates anyone itself.
#[derive(Debug, Clone)]
pub struct CallerIdentity {
    pub email: String,
    pub name: String,
    pub capabilities: Vec<String>,
}

/// Trait to add authorization methods to HttpRequest
pub trait AuthRequest {
    fn caller_info(&self) -> Option<CallerIdentity>;
    fn has_capability(&self, capability: &str) -> bool;
    fn is_authenticated(&self) -> bool;
}

impl AuthRequest for HttpRequest {
    fn caller_info(&self) -> Option<CallerIdentity> {
        self.extensions().get::<CallerIdentity>().cloned()
    }

    fn has_capability(&self, capability: &str) -> bool {
        self.caller_info()
            .map(|info| info.capabilities.iter().any(|c| c == capability))
            .unwrap_or(false)
    }

    fn is_authenticated(&self) -> bool {
        self.caller_info().is_some()
    }
}
