use serde::Serialize;

/// One form submission as it is written to the CSV log. Absent values are
/// empty strings, never omitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SubmissionRecord {
    pub name: String,
    pub description: String,
    pub image: String,
    pub url: String,
    pub latitude: String,
    pub longitude: String,
}

impl SubmissionRecord {
    /// Values in column order.
    pub fn fields(&self) -> [&str; 6] {
        [
            self.name.as_str(),
            self.description.as_str(),
            self.image.as_str(),
            self.url.as_str(),
            self.latitude.as_str(),
            self.longitude.as_str(),
        ]
    }
}
