/// Base name used when the client sent no original file name.
pub const DEFAULT_BASE: &str = "upload";

/// Replace every character outside `[A-Za-z0-9_-]` with `_`.
pub fn sanitize_base(base: &str) -> String {
    base.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c
            } else {
                '_'
            }
        })
        .collect()
}

/// Split the last path component of `original` into base name and
/// extension. The extension keeps its leading dot and is returned verbatim;
/// a dot in first position does not start one, so `.env` has no extension.
pub fn split_extension(original: &str) -> (&str, &str) {
    let last = original
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original);

    match last.rfind('.') {
        Some(idx) if idx > 0 => last.split_at(idx),
        _ => (last, ""),
    }
}

/// Name under which an upload is stored: `<millis>_<sanitized base><ext>`.
pub fn stored_name(original: Option<&str>, millis: i64) -> String {
    let (base, ext) = match original.filter(|s| !s.is_empty()) {
        Some(name) => split_extension(name),
        None => (DEFAULT_BASE, ""),
    };
    let base = if base.is_empty() { DEFAULT_BASE } else { base };
    format!("{millis}_{}{ext}", sanitize_base(base))
}
