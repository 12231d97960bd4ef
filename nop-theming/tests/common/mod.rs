// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

#![allow(dead_code)]

use actix_web::dev::{
    Service, ServiceFactory, ServiceRequest, ServiceResponse, Transform, forward_ready,
};
use actix_web::{App, Error, HttpMessage, web};
use std::future::{Ready, ready};
use nop_theming::admin;
use nop_theming::app_state::AppState;
use nop_theming::config::{Config, ValidatedConfig};
use nop_theming::iam::{CallerIdentity, MANAGE_SITES};
use nop_theming::runtime_paths::RuntimePaths;
use std::sync::Arc;
use tempfile::TempDir;

pub const MULTIPART_BOUNDARY: &str = "----nop-theming-test-boundary";

pub struct TestHarness {
    pub temp: TempDir,
    pub config: Arc<ValidatedConfig>,
    pub runtime_paths: RuntimePaths,
    pub app_state: Arc<AppState>,
}

impl TestHarness {
    pub fn new() -> Self {
        let temp = tempfile::Builder::new()
            .prefix("theming-test-")
            .tempdir_in("/tmp")
            .expect("tempdir");
        let config = Arc::new(Config::load_and_validate(temp.path()).expect("config"));
        let runtime_paths = RuntimePaths::from_root(temp.path()).expect("runtime paths");
        let app_state =
            Arc::new(AppState::new(&config, runtime_paths.clone()).expect("app state"));
        Self {
            temp,
            config,
            runtime_paths,
            app_state,
        }
    }

    pub fn manage_sites_caller() -> CallerIdentity {
        CallerIdentity {
            email: "admin@example.com".to_string(),
            name: "Admin User".to_string(),
            capabilities: vec![MANAGE_SITES.to_string()],
        }
    }

    pub fn viewer_caller() -> CallerIdentity {
        CallerIdentity {
            email: "viewer@example.com".to_string(),
            name: "Viewer".to_string(),
            capabilities: Vec::new(),
        }
    }
}

/// Stand-in for the host framework's authentication middleware: copies the
/// caller identity registered as app data into the request extensions,
/// which is where the module's capability gate looks for it.
pub struct SeedHostIdentity;

impl<S, B> Transform<S, ServiceRequest> for SeedHostIdentity
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = SeedHostIdentityService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(SeedHostIdentityService { service }))
    }
}

pub struct SeedHostIdentityService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for SeedHostIdentityService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = S::Future;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let caller = req
            .app_data::<web::Data<CallerIdentity>>()
            .map(|data| data.get_ref().clone());
        if let Some(caller) = caller {
            req.extensions_mut().insert(caller);
        }
        self.service.call(req)
    }
}

pub fn build_test_app(
    harness: &TestHarness,
    caller: Option<CallerIdentity>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let admin_path = harness.config.admin.path.clone();
    let mut app = App::new()
        .app_data(web::Data::from(harness.config.clone()))
        .app_data(web::Data::from(harness.app_state.clone()));
    if let Some(caller) = caller {
        app = app.app_data(web::Data::new(caller));
    }
    app.wrap(SeedHostIdentity)
        .configure(move |cfg| admin::configure(cfg, &admin_path))
}

/// Build a multipart/form-data body from (filename, content type, bytes)
/// triples, all under the `files` form field.
pub fn multipart_body(files: &[(&str, &str, &[u8])]) -> Vec<u8> {
    let mut body = Vec::new();
    for (filename, content_type, bytes) in files {
        body.extend_from_slice(format!("--{}\r\n", MULTIPART_BOUNDARY).as_bytes());
        body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"files\"; filename=\"{}\"\r\n",
                filename
            )
            .as_bytes(),
        );
        body.extend_from_slice(format!("Content-Type: {}\r\n\r\n", content_type).as_bytes());
        body.extend_from_slice(bytes);
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", MULTIPART_BOUNDARY).as_bytes());
    body
}

/// A multipart body with one plain text field and no file parts.
pub fn multipart_body_without_files() -> Vec<u8> {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{}\r\n", MULTIPART_BOUNDARY).as_bytes());
    body.extend_from_slice(b"Content-Disposition: form-data; name=\"note\"\r\n\r\n");
    body.extend_from_slice(b"no files here");
    body.extend_from_slice(format!("\r\n--{}--\r\n", MULTIPART_BOUNDARY).as_bytes());
    body
}

pub fn multipart_content_type() -> String {
    format!("multipart/form-data; boundary={}", MULTIPART_BOUNDARY)
}
