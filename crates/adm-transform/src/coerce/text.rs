//! Text coercion.

/// Keeps a present cell verbatim; absent and empty cells become `None`.
pub fn coerce_text(value: Option<&str>) -> Option<String> {
    match value {
        None | Some("") => None,
        Some(text) => Some(text.to_string()),
    }
}
