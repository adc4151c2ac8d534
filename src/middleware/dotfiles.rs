use axum::extract::Request;
use axum::http::StatusCode;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

/// Middleware that answers 404 for any path with a segment starting with a
/// dot, so `.env` and similar files under the static root are never served.
pub async fn hide_dotfiles(req: Request, next: Next) -> Response {
    if has_dot_segment(req.uri().path()) {
        return StatusCode::NOT_FOUND.into_response();
    }
    next.run(req).await
}

/// True if any segment starts with `.`, literally or percent-encoded.
pub fn has_dot_segment(path: &str) -> bool {
    path.split('/').any(|seg| {
        seg.starts_with('.')
            || seg
                .get(..3)
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case("%2e"))
    })
}
