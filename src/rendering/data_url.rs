//! `data:` URL unwrapping for inputs pasted from browsers.

use std::borrow::Cow;

use base64::Engine;
use percent_encoding::percent_decode;

use crate::error::DecodeError;

/// Return the payload of a `data:` URL, or the input unchanged if it is not
/// one.
///
/// Both `;base64` payloads and percent-encoded payloads are accepted.
/// Whitespace inside base64 payloads is ignored.
pub fn unwrap_data_url(input: &[u8]) -> Result<Cow<'_, [u8]>, DecodeError> {
    let trimmed = input.trim_ascii();
    if trimmed.len() < 5 || !trimmed[..5].eq_ignore_ascii_case(b"data:") {
        return Ok(Cow::Borrowed(input));
    }

    let comma = trimmed
        .iter()
        .position(|&b| b == b',')
        .ok_or_else(|| DecodeError::DataUrl("missing ','".to_string()))?;
    let header = &trimmed[5..comma];
    let payload = &trimmed[comma + 1..];

    let is_base64 = header
        .split(|&b| b == b';')
        .any(|param| param.eq_ignore_ascii_case(b"base64"));

    let bytes = if is_base64 {
        let compact: Vec<u8> = payload
            .iter()
            .copied()
            .filter(|b| !b.is_ascii_whitespace())
            .collect();
        base64::engine::general_purpose::STANDARD
            .decode(compact)
            .map_err(|e| DecodeError::DataUrl(e.to_string()))?
    } else {
        percent_decode(payload).collect()
    };

    tracing::debug!(
        media_type = %String::from_utf8_lossy(header),
        bytes = bytes.len(),
        "Unwrapped data URL"
    );

    Ok(Cow::Owned(bytes))
}
