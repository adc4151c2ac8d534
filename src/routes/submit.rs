use axum::body::Bytes;
use axum::extract::State;
use axum::http::HeaderMap;
use axum::Json;
use serde::Serialize;

use crate::error::AppError;
use crate::models::SubmissionRecord;
use crate::state::SharedState;
use crate::submission::{parser, pipeline};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub ok: bool,
    pub image_file: String,
    pub row: SubmissionRecord,
}

pub async fn submit(
    State(state): State<SharedState>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<SubmitResponse>, AppError> {
    let content_type = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    let parsed = if content_type.contains("multipart/form-data") {
        parser::parse_multipart(&headers, body).await
    } else if content_type.contains("application/x-www-form-urlencoded") {
        parser::parse_form_urlencoded(&body)
    } else {
        Err(format!("Unsupported content type: '{content_type}'"))
    };
    let form = parsed.map_err(AppError::InvalidRequest)?;

    let accepted = pipeline::run(&state.store, form).await?;

    tracing::info!(
        image = %accepted.image_file,
        "Recorded submission"
    );

    Ok(Json(SubmitResponse {
        ok: true,
        image_file: accepted.image_file,
        row: accepted.row,
    }))
}
