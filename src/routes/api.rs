use axum::{
    extract::{Multipart, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use std::sync::Arc;

use crate::batch::{self, rows, BatchError};
use crate::state::AppState;
use crate::storage;

pub async fn root() -> impl IntoResponse {
    Json(serde_json::json!({ "message": "Sertiko certificate generator API" }))
}

fn error_response(err: &BatchError) -> Response {
    let status = if err.is_input() {
        StatusCode::BAD_REQUEST
    } else {
        StatusCode::INTERNAL_SERVER_ERROR
    };
    (status, Json(serde_json::json!({ "detail": err.to_string() }))).into_response()
}

async fn read_file_field(multipart: &mut Multipart) -> Option<(Vec<u8>, String)> {
    while let Ok(Some(field)) = multipart.next_field().await {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or("upload").to_string();
        if let Ok(data) = field.bytes().await {
            return Some((data.to_vec(), filename));
        }
    }
    None
}

/// Stores the raster template used by every subsequent batch. Bytes are kept
/// as uploaded; decoding happens at generation time.
pub async fn upload_template(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Response {
    let Some((data, filename)) = read_file_field(&mut multipart).await else {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "detail": "missing template file" })),
        )
            .into_response();
    };
    if data.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "detail": "template file is empty" })),
        )
            .into_response();
    }

    let path = storage::template_path(&state.config.upload_folder);
    if let Err(e) = std::fs::write(&path, &data) {
        tracing::error!("failed to store template: {}", e);
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "detail": "failed to store template" })),
        )
            .into_response();
    }

    tracing::info!("template updated ({} bytes) from {}", data.len(), filename);
    Json(serde_json::json!({
        "message": "Template uploaded successfully",
        "filename": filename
    }))
    .into_response()
}

/// Renders one certificate per participant row and returns the ZIP archive.
pub async fn generate(State(state): State<Arc<AppState>>, mut multipart: Multipart) -> Response {
    let Some((data, filename)) = read_file_field(&mut multipart).await else {
        return (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({ "detail": "missing participant file" })),
        )
            .into_response();
    };

    let template = match batch::load_template(&storage::template_path(&state.config.upload_folder))
    {
        Ok(t) => t,
        Err(e) => return error_response(&e),
    };

    let records = match rows::parse_participants(&data) {
        Ok(r) => r,
        Err(e) => return error_response(&e),
    };
    let record_count = records.len();

    let batch_id = storage::generate_batch_id();
    tracing::info!("batch {}: rendering {} certificates", batch_id, record_count);

    let archive = match batch::run(Arc::new(template), state.fonts.clone(), records).await {
        Ok(a) => a,
        Err(e) => {
            tracing::error!("batch {} failed: {}", batch_id, e);
            return error_response(&e);
        }
    };

    // History is fire-and-forget: a failed insert never fails the delivery.
    if let Err(e) =
        crate::db::insert_batch(state.pool.as_ref(), &batch_id, &filename, record_count as i32)
            .await
    {
        tracing::warn!("batch {}: history insert failed: {}", batch_id, e);
    }

    tracing::info!("batch {}: done ({} bytes)", batch_id, archive.len());
    Response::builder()
        .header("Content-Type", "application/zip")
        .header(
            "Content-Disposition",
            format!("attachment; filename=\"certificates_{}.zip\"", batch_id),
        )
        .body(axum::body::Body::from(archive))
        .unwrap()
        .into_response()
}

pub async fn list_batches(State(state): State<Arc<AppState>>) -> Response {
    match crate::db::list_batches(state.pool.as_ref()).await {
        Ok(batches) => Json(batches).into_response(),
        Err(e) => {
            tracing::error!("failed to list batches: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(serde_json::json!({ "detail": "database error" })),
            )
                .into_response()
        }
    }
}

pub async fn download_sample() -> Response {
    Response::builder()
        .header("Content-Type", "text/csv")
        .header(
            "Content-Disposition",
            "attachment; filename=\"sample_participants.csv\"",
        )
        .body(axum::body::Body::from(rows::sample_csv()))
        .unwrap()
        .into_response()
}
