use axum::http::HeaderMap;

use super::{SubmissionForm, Upload};

/// Form field that carries the optional upload.
pub const IMAGE_FIELD: &str = "image";

/// Parse multipart form data using multer.
pub async fn parse_multipart(
    headers: &HeaderMap,
    body: bytes::Bytes,
) -> Result<SubmissionForm, String> {
    let boundary = headers
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .and_then(|ct| multer::parse_boundary(ct).ok())
        .ok_or_else(|| "Missing multipart boundary".to_string())?;

    let stream = futures_util::stream::once(async { Ok::<_, std::io::Error>(body) });
    let mut multipart = multer::Multipart::new(stream, boundary);

    let mut form = SubmissionForm::default();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| format!("Multipart error: {e}"))?
    {
        let name = field.name().unwrap_or("").to_string();
        let file_name = field.file_name().map(|s| s.to_string());
        let is_file = file_name.is_some() || field.content_type().is_some();

        if !is_file {
            let value = field
                .text()
                .await
                .map_err(|e| format!("Field read error: {e}"))?;
            form.set_text(&name, value);
            continue;
        }

        if name != IMAGE_FIELD || form.image.is_some() {
            return Err(format!("Unexpected file field: {name}"));
        }

        let bytes = field
            .bytes()
            .await
            .map_err(|e| format!("Field read error: {e}"))?;

        // An empty file input still sends a part, with no name and no bytes.
        if bytes.is_empty() && file_name.as_deref().unwrap_or("").is_empty() {
            continue;
        }

        form.image = Some(Upload {
            original_name: file_name.filter(|n| !n.is_empty()),
            bytes,
        });
    }

    Ok(form)
}

/// Parse an `application/x-www-form-urlencoded` body. Such posts never carry
/// an upload.
pub fn parse_form_urlencoded(body: &[u8]) -> Result<SubmissionForm, String> {
    std::str::from_utf8(body).map_err(|e| format!("Invalid UTF-8: {e}"))?;

    let mut form = SubmissionForm::default();
    for (k, v) in form_urlencoded::parse(body) {
        form.set_text(&k, v.into_owned());
    }
    Ok(form)
}
