// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::admin::shared;
use crate::iam::{AuthRequest, MANAGE_SITES};
use actix_web::{
    Error,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready},
    http::StatusCode,
};
use futures_util::future::LocalBoxFuture;
use std::future::{Ready, ready};

/// Middleware requiring the manage-sites capability on every route in its
/// scope. The capability itself is granted by the host framework; this
/// module only checks what the host's authentication middleware seeded
/// into the request.
pub struct RequireManageSitesMiddleware;

impl<S, B> Transform<S, ServiceRequest> for RequireManageSitesMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireManageSitesMiddlewareService<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireManageSitesMiddlewareService { service }))
    }
}

pub struct RequireManageSitesMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for RequireManageSitesMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if !req.request().has_capability(MANAGE_SITES) {
            let is_authenticated = req.request().is_authenticated();
            let (req, _) = req.into_parts();

            let response = if is_authenticated {
                log::warn!(
                    "Caller without manage-sites capability denied on {}",
                    req.path()
                );
                shared::json_error_response(
                    "Manage sites permission required",
                    StatusCode::FORBIDDEN,
                )
            } else {
                shared::json_error_response("Authentication required", StatusCode::UNAUTHORIZED)
            }
            .map_into_right_body();

            return Box::pin(async move { Ok(ServiceResponse::new(req, response)) });
        }

        let fut = self.service.call(req);
        Box::pin(async move {
            // Map normal responses to left body
            fut.await.map(ServiceResponse::map_into_left_body)
        })
    }
}
