use crate::models::SubmissionRecord;

pub const HEADER: &str = "name,description,image,url,latitude,longitude\n";

/// Quote a field only when it contains a comma, a double quote or a newline.
pub fn escape(s: &str) -> String {
    if s.contains(',') || s.contains('"') || s.contains('\n') {
        format!("\"{}\"", s.replace('"', "\"\""))
    } else {
        s.to_string()
    }
}

/// Serialize a record as one newline-terminated CSV line.
pub fn format_row(record: &SubmissionRecord) -> String {
    let mut row = record
        .fields()
        .iter()
        .map(|v| escape(v))
        .collect::<Vec<_>>()
        .join(",");
    row.push('\n');
    row
}
