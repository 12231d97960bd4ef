// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

pub mod middleware;
pub mod shared;
pub mod statics_api;

use actix_web::web;

/// Mount the theming module's admin routes under the host's admin path.
/// Every route in this scope requires the manage-sites capability.
pub fn configure(cfg: &mut web::ServiceConfig, admin_path: &str) {
    cfg.service(
        web::scope(admin_path)
            .wrap(middleware::RequireManageSitesMiddleware)
            .configure(|cfg| {
                statics_api::configure(cfg, "/sites");
            }),
    );
}
