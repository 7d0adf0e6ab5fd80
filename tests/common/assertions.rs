//! Assertion helpers for tests.

use axum::http::StatusCode;
use emoji_palette::ColorName;
use pretty_assertions::assert_eq;

use super::app::TestResponse;

/// Assert response has expected status code
pub fn assert_status(response: &TestResponse, expected: StatusCode) {
    assert_eq!(
        response.status,
        expected,
        "Expected status {}, got {}. Body: {}",
        expected,
        response.status,
        response.text()
    );
}

/// Assert response is OK (200)
pub fn assert_ok(response: &TestResponse) {
    assert_status(response, StatusCode::OK);
}

/// Assert a JSON error body with the given status and message
pub fn assert_json_error(response: &TestResponse, expected: StatusCode, message: &str) {
    assert_status(response, expected);
    let json: serde_json::Value = response.json();
    assert_eq!(json["status"].as_u64(), Some(expected.as_u16() as u64));
    assert_eq!(json["error"].as_str(), Some(message));
}

/// Assert a plain-text glyph response and return its text
pub fn assert_glyph_text(response: &TestResponse) -> String {
    assert_ok(response);
    assert_eq!(response.content_type(), Some("text/plain; charset=utf-8"));
    response.text()
}

/// Split glyph text into rows of color names, asserting that every glyph is
/// from the palette and every row is newline-terminated
pub fn parse_glyph_rows(text: &str) -> Vec<Vec<ColorName>> {
    assert!(text.ends_with('\n'), "Glyph text must end with a newline");
    text.lines()
        .map(|line| {
            let mut rest = line;
            let mut row = Vec::new();
            while !rest.is_empty() {
                let name = ColorName::ALL
                    .into_iter()
                    .find(|n| rest.starts_with(n.glyph()))
                    .unwrap_or_else(|| panic!("Unexpected glyph text: {rest:?}"));
                rest = &rest[name.glyph().len()..];
                row.push(name);
            }
            row
        })
        .collect()
}

/// Assert glyph text has the given grid shape
pub fn assert_grid_shape(text: &str, width: usize, height: usize) {
    let rows = parse_glyph_rows(text);
    assert_eq!(rows.len(), height, "row count");
    for (i, row) in rows.iter().enumerate() {
        assert_eq!(row.len(), width, "glyph count in row {i}");
    }
}
