// This file is part of the product NoPressure.
// SPDX-FileCopyrightText: 2025-2026 Zivatar Limited
// SPDX-License-Identifier: AGPL-3.0-or-later
// The code and documentation in this repository is licensed under the GNU Affero General Public License v3.0 or later (AGPL-3.0-or-later). See LICENSE.

use crate::admin::shared;
use crate::app_state::AppState;
use crate::statics::{StaticUpload, StaticsError};
use crate::util::detect_mime_type;
use actix_multipart::Multipart;
use actix_web::{HttpResponse, Result, http::StatusCode, web};
use futures_util::StreamExt as _;
use serde_json::json;

pub fn configure(cfg: &mut web::ServiceConfig, base_path: &str) {
    cfg.route(
        &format!("{}/upload-theme-statics", base_path),
        web::post().to(upload_theme_statics_without_site),
    )
    .route(
        &format!("{}/upload-theme-statics/{{site_id}}", base_path),
        web::post().to(upload_theme_statics),
    );
}

/// Upload a batch of CSS/JS theme files for a site.
pub async fn upload_theme_statics(
    path: web::Path<String>,
    payload: Multipart,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    let site_id = path.into_inner();
    handle_upload(&site_id, payload, app_state.as_ref()).await
}

/// Same route without the site segment. The empty id is delegated to the
/// service, which rejects it like any other invalid argument.
pub async fn upload_theme_statics_without_site(
    payload: Multipart,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse> {
    handle_upload("", payload, app_state.as_ref()).await
}

async fn handle_upload(
    site_id: &str,
    mut payload: Multipart,
    app_state: &AppState,
) -> Result<HttpResponse> {
    let files = match collect_files(&mut payload).await {
        Ok(files) => files,
        Err(message) => {
            log::warn!("Rejected theme statics upload for site '{}': {}", site_id, message);
            return Ok(shared::json_error_response(&message, StatusCode::BAD_REQUEST));
        }
    };

    match app_state.statics.save_static_files(site_id, &files).await {
        Ok(()) => {
            for file in &files {
                log::info!(
                    "Stored theme static '{}' ({}) for site '{}'",
                    file.filename,
                    detect_mime_type(&file.filename, &file.bytes),
                    site_id
                );
            }
            Ok(HttpResponse::Ok().json(json!({
                "message": "Files uploaded successfully."
            })))
        }
        Err(err) => {
            let status = status_for(&err);
            if status == StatusCode::INTERNAL_SERVER_ERROR {
                log::error!("Theme statics upload failed for site '{}': {}", site_id, err);
            } else {
                log::warn!("Rejected theme statics upload for site '{}': {}", site_id, err);
            }
            Ok(shared::json_error_response(&err.to_string(), status))
        }
    }
}

fn status_for(err: &StaticsError) -> StatusCode {
    match err {
        StaticsError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
        StaticsError::Storage { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        StaticsError::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
    }
}

/// Drain the multipart stream into memory. Every part that carries a
/// filename joins the batch; other form fields are ignored.
async fn collect_files(payload: &mut Multipart) -> std::result::Result<Vec<StaticUpload>, String> {
    let mut files = Vec::new();
    while let Some(item) = payload.next().await {
        let mut field = item.map_err(|e| format!("Malformed multipart payload: {}", e))?;
        let filename = field
            .content_disposition()
            .and_then(|cd| cd.get_filename())
            .map(str::to_owned);
        let Some(filename) = filename else {
            while let Some(chunk) = field.next().await {
                chunk.map_err(|e| format!("Malformed multipart payload: {}", e))?;
            }
            continue;
        };

        let mut bytes = Vec::new();
        while let Some(chunk) = field.next().await {
            let chunk = chunk.map_err(|e| format!("Failed to read upload stream: {}", e))?;
            bytes.extend_from_slice(&chunk);
        }
        files.push(StaticUpload { filename, bytes });
    }
    Ok(files)
}
