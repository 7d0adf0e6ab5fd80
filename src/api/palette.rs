use axum::{extract::Query, response::Json};
use emoji_palette::{classify, ColorName, Palette, Srgb};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::error::ApiError;

/// One palette color
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct PaletteColor {
    pub name: String,
    pub glyph: String,
    /// Reference value the classifier matches against
    pub rgb: [u8; 3],
}

/// List the palette
///
/// Returns the nine glyph colors in palette order.
#[utoipa::path(
    get,
    path = "/api/palette",
    responses(
        (status = 200, description = "Palette colors", body = [PaletteColor]),
    ),
    tag = "Palette"
)]
pub async fn handle_palette() -> Json<Vec<PaletteColor>> {
    let colors = Palette::standard()
        .entries()
        .iter()
        .map(|entry| PaletteColor {
            name: entry.name.as_str().to_string(),
            glyph: entry.name.glyph().to_string(),
            rgb: entry.reference.to_bytes(),
        })
        .collect();
    Json(colors)
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ClassifyQuery {
    /// Hex color: `#RRGGBB`, `RRGGBB`, `#RGB` or `RGB`
    pub color: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ClassifyResponse {
    /// Normalized input color, `#rrggbb`
    pub color: String,
    pub name: String,
    pub glyph: String,
}

impl ClassifyResponse {
    pub fn new(color: Srgb, name: ColorName) -> Self {
        Self {
            color: color.to_string(),
            name: name.as_str().to_string(),
            glyph: name.glyph().to_string(),
        }
    }
}

/// Classify a single color
#[utoipa::path(
    get,
    path = "/api/classify",
    params(ClassifyQuery),
    responses(
        (status = 200, description = "Palette color for the input", body = ClassifyResponse),
        (status = 400, description = "Missing or invalid color"),
    ),
    tag = "Palette"
)]
pub async fn handle_classify(
    Query(query): Query<ClassifyQuery>,
) -> Result<Json<ClassifyResponse>, ApiError> {
    let raw = query
        .color
        .ok_or_else(|| ApiError::BadRequest("Missing color parameter".to_string()))?;
    let color: Srgb = raw
        .parse()
        .map_err(|e| ApiError::BadRequest(format!("Invalid color '{raw}': {e}")))?;

    let name = classify(color.r, color.g, color.b);
    tracing::debug!(%color, %name, "Classified color");

    Ok(Json(ClassifyResponse::new(color, name)))
}
