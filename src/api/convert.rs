use axum::{
    body::Bytes,
    extract::{
        rejection::{BytesRejection, QueryRejection},
        Query, State,
    },
    http::{header, StatusCode},
    response::{IntoResponse, Json, Response},
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;
use crate::services::{Conversion, ConvertService};

/// Response body format for /api/convert
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Glyph text, one row per line
    #[default]
    Text,
    /// [`ConvertResponse`] JSON
    Json,
}

/// Query parameters for the convert endpoint
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ConvertQuery {
    /// Response format: `text` (default) or `json`
    #[serde(default)]
    pub format: OutputFormat,
}

/// Cell count for one palette color
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct HistogramEntry {
    pub name: String,
    pub glyph: String,
    pub count: usize,
}

/// JSON result of a conversion
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ConvertResponse {
    /// Glyph grid width in cells
    pub width: u32,
    /// Glyph grid height in cells
    pub height: u32,
    /// Decoded image width in pixels
    pub source_width: u32,
    /// Decoded image height in pixels
    pub source_height: u32,
    /// Full glyph text, every row terminated by a newline
    pub text: String,
    /// Rows without terminators
    pub rows: Vec<String>,
    /// Cells per color, in palette order
    pub histogram: Vec<HistogramEntry>,
}

impl From<&Conversion> for ConvertResponse {
    fn from(conversion: &Conversion) -> Self {
        let grid = &conversion.grid;
        Self {
            width: conversion.target.width,
            height: conversion.target.height,
            source_width: conversion.source_width,
            source_height: conversion.source_height,
            text: grid.to_text(),
            rows: grid.row_strings(),
            histogram: grid
                .histogram()
                .into_iter()
                .map(|(name, count)| HistogramEntry {
                    name: name.as_str().to_string(),
                    glyph: name.glyph().to_string(),
                    count,
                })
                .collect(),
        }
    }
}

/// Convert an image to emoji art
///
/// The body is the raw image file (PNG, JPEG, GIF, BMP, WebP, SVG, ...) or a
/// `data:` URL. Images larger than 32 cells per side are downscaled with
/// nearest-neighbor sampling; transparent areas get a contrasting background.
#[utoipa::path(
    post,
    path = "/api/convert",
    request_body(content = Vec<u8>, description = "Image bytes or data URL", content_type = "application/octet-stream"),
    params(ConvertQuery),
    responses(
        (status = 200, description = "Glyph text (or JSON with format=json)", body = ConvertResponse),
        (status = 400, description = "Empty body or unknown format"),
        (status = 413, description = "Image too large"),
        (status = 422, description = "Could not read image"),
    ),
    tag = "Convert"
)]
pub async fn handle_convert(
    State(converter): State<Arc<ConvertService>>,
    query: Result<Query<ConvertQuery>, QueryRejection>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Response, ApiError> {
    let Query(query) = query.map_err(|e| {
        tracing::debug!(error = %e.body_text(), "Rejected convert query");
        ApiError::BadRequest("Unknown format, expected 'text' or 'json'".to_string())
    })?;
    let body = body.map_err(|e| {
        if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
            ApiError::PayloadTooLarge(format!(
                "Input too large (max {} bytes)",
                converter.max_upload_bytes()
            ))
        } else {
            ApiError::BadRequest(e.body_text())
        }
    })?;
    let size = body.len();
    let conversion = converter.convert_blocking_task(body.to_vec()).await?;

    tracing::info!(
        bytes = size,
        width = conversion.target.width,
        height = conversion.target.height,
        format = ?query.format,
        "Converted upload"
    );

    let response = match query.format {
        OutputFormat::Text => (
            [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
            conversion.text(),
        )
            .into_response(),
        OutputFormat::Json => Json(ConvertResponse::from(&conversion)).into_response(),
    };

    Ok(response)
}
