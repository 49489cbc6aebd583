use serde_json::Value;

/// Bounds `text` to at most `limit` characters, appending `...` when cut
///
/// # Arguments
///
/// * `text` - Text to bound
/// * `limit` - Maximum number of characters kept before the ellipsis
///
/// # Returns
///
/// The original text when short enough, otherwise its first `limit` characters followed by `...`
pub fn truncate_excerpt(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Best-effort extraction of a human-readable error from an upstream body
///
/// The body is decoded as JSON when possible and the first of `message`,
/// `error` (string or `{ "message": .. }`) and `detail` that holds a string is
/// returned. Anything else, including a body that is not JSON, yields the
/// trimmed raw text.
pub fn extract_error_text(raw_body: &str) -> String {
    let parsed: Option<Value> = serde_json::from_str(raw_body).ok();
    parsed
        .as_ref()
        .and_then(|v| {
            v.get("message")
                .and_then(Value::as_str)
                .or_else(|| v.get("error").and_then(Value::as_str))
                .or_else(|| v.pointer("/error/message").and_then(Value::as_str))
                .or_else(|| v.get("detail").and_then(Value::as_str))
        })
        .map(str::to_string)
        .unwrap_or_else(|| raw_body.trim().to_string())
}
