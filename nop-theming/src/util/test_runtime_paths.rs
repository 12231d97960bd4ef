// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

#![allow(dead_code)]

use crate::runtime_paths::RuntimePaths;
use tempfile::TempDir;

pub fn short_runtime_paths(prefix: &str) -> (TempDir, RuntimePaths) {
    let temp_dir = tempfile::Builder::new()
        .prefix(prefix)
        .tempdir_in("/tmp")
        .expect("tempdir");
    let root = temp_dir.path().to_path_buf();
    let web_root = root.join("web");
    let sites_dir = web_root.join("sites");

    std::fs::create_dir_all(&sites_dir).expect("sites dir");

    let runtime_paths = RuntimePaths {
        root: root.clone(),
        web_root: web_root.canonicalize().expect("web root canonical"),
        sites_dir: sites_dir.canonicalize().expect("sites dir canonical"),
    };

    (temp_dir, runtime_paths)
}
