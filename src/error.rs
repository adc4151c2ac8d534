use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

/// Failure of the ingestion pipeline. The message of each variant is what
/// the client receives.
#[derive(Debug)]
pub enum SubmitError {
    SaveImage(std::io::Error),
    AppendRow(std::io::Error),
}

impl std::fmt::Display for SubmitError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SubmitError::SaveImage(err) => write!(f, "Error: failed to store image: {err}"),
            SubmitError::AppendRow(err) => write!(f, "Error: failed to append row: {err}"),
        }
    }
}

impl std::error::Error for SubmitError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SubmitError::SaveImage(err) | SubmitError::AppendRow(err) => Some(err),
        }
    }
}

/// Every variant maps to a 500 with a plain-text body; they differ only in
/// how they are logged.
#[derive(Debug)]
pub enum AppError {
    InvalidRequest(String),
    Submit(SubmitError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::InvalidRequest(msg) => write!(f, "Invalid request: {msg}"),
            AppError::Submit(err) => write!(f, "{err}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidRequest(msg) => {
                tracing::warn!("Rejected submission: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
            AppError::Submit(err) => {
                tracing::error!("Submission failed: {err}");
                (StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
            }
        };

        (
            status,
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            message,
        )
            .into_response()
    }
}

impl From<SubmitError> for AppError {
    fn from(err: SubmitError) -> Self {
        AppError::Submit(err)
    }
}
