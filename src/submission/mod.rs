pub mod csv;
pub mod filename;
pub mod parser;
pub mod pipeline;

/// An uploaded file as received, before it is given a stored name.
#[derive(Debug, Clone)]
pub struct Upload {
    pub original_name: Option<String>,
    pub bytes: bytes::Bytes,
}

/// Parsed request body. Missing text fields are empty strings.
#[derive(Debug, Clone, Default)]
pub struct SubmissionForm {
    pub name: String,
    pub description: String,
    pub url: String,
    pub latitude: String,
    pub longitude: String,
    pub image: Option<Upload>,
}

impl SubmissionForm {
    /// Assign a text field by its form name. Names that are not part of the
    /// record are ignored.
    pub fn set_text(&mut self, field: &str, value: String) {
        let slot = match field {
            "name" => &mut self.name,
            "description" => &mut self.description,
            "url" => &mut self.url,
            "latitude" => &mut self.latitude,
            "longitude" => &mut self.longitude,
            _ => {
                tracing::debug!("Ignoring form field: {field}");
                return;
            }
        };
        *slot = value;
    }
}
