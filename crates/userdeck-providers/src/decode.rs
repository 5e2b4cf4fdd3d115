use userdeck_types::{ApiResponse, UserRecord};

use crate::Result;

const PREVIEW_CHAR_LIMIT: usize = 160;

/// Decode a randomuser.me body into records, keeping response order.
pub(crate) fn decode_users(body: &[u8]) -> Result<Vec<UserRecord>> {
    let response: ApiResponse = serde_json::from_slice(body)?;
    Ok(response.results)
}

/// Whitespace-collapsed head of a body, for error messages
pub(crate) fn body_preview(body: &[u8]) -> String {
    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
