use crate::types::UpstreamErrorBody;

const MAX_ERROR_DETAIL_LENGTH: usize = 500;

fn truncate_error_detail(text: &str) -> String {
    if text.chars().count() <= MAX_ERROR_DETAIL_LENGTH {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(MAX_ERROR_DETAIL_LENGTH).collect();
    truncated.push('\u{2026}');
    truncated
}

/// Pulls a readable message out of an Apify error body, falling back when
/// the body is not JSON or carries nothing useful.
#[must_use]
pub fn parse_upstream_error_message(payload_text: &str, fallback: &str) -> String {
    let Ok(body) = serde_json::from_str::<UpstreamErrorBody>(payload_text) else {
        return fallback.to_string();
    };

    let from_error = body.error.and_then(|info| {
        let message = info.message.filter(|m| !m.trim().is_empty());
        let kind = info.kind.filter(|k| !k.trim().is_empty());
        match (kind, message) {
            (Some(kind), Some(message)) => Some(format!("{kind}: {message}")),
            (None, Some(message)) => Some(message),
            (Some(kind), None) => Some(kind),
            (None, None) => None,
        }
    });

    from_error
        .or_else(|| body.message.filter(|m| !m.trim().is_empty()))
        .map_or_else(|| fallback.to_string(), |detail| truncate_error_detail(&detail))
}
