use chrono::Utc;

use crate::error::SubmitError;
use crate::models::SubmissionRecord;
use crate::store::Store;

use super::{csv, filename, SubmissionForm};

#[derive(Debug, Clone)]
pub struct Accepted {
    /// Stored image name, empty when nothing was uploaded.
    pub image_file: String,
    pub row: SubmissionRecord,
}

/// Store the upload (if any), then append the record to the log. The row is
/// only written once the image is on disk; a failed append leaves the image
/// behind.
pub async fn run(store: &Store, form: SubmissionForm) -> Result<Accepted, SubmitError> {
    let image_file = match &form.image {
        Some(upload) => {
            let stored = filename::stored_name(
                upload.original_name.as_deref(),
                Utc::now().timestamp_millis(),
            );
            store
                .save_image(&stored, &upload.bytes)
                .await
                .map_err(SubmitError::SaveImage)?;
            tracing::debug!("Stored {} bytes as {stored}", upload.bytes.len());
            stored
        }
        None => String::new(),
    };

    let record = SubmissionRecord {
        name: form.name,
        description: form.description,
        image: image_file.clone(),
        url: form.url,
        latitude: form.latitude,
        longitude: form.longitude,
    };

    store
        .append_row(&csv::format_row(&record))
        .await
        .map_err(SubmitError::AppendRow)?;

    Ok(Accepted {
        image_file,
        row: record,
    })
}
