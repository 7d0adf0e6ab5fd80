use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Message shown to users for any input that cannot be turned into pixels.
pub const UNREADABLE_IMAGE: &str = "Could not read image";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Payload too large: {0}")]
    PayloadTooLarge(String),

    #[error("Conversion error: {0}")]
    Convert(#[from] ConvertError),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Failures turning input bytes into an RGBA grid.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("Empty input")]
    Empty,

    #[error("Invalid data URL: {0}")]
    DataUrl(String),

    #[error("Raster decode error: {0}")]
    Raster(#[from] image::ImageError),

    #[error("SVG parse error: {0}")]
    Svg(String),

    #[error("Invalid dimensions: {width}x{height}")]
    InvalidDimensions { width: u32, height: u32 },

    #[error("Failed to allocate pixmap")]
    PixmapAllocation,
}

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("Input too large: {size} bytes (max {max})")]
    TooLarge { size: usize, max: usize },

    #[error("Render error: {0}")]
    Render(#[from] emoji_palette::RenderError),

    #[error("Conversion task failed: {0}")]
    Task(String),
}

impl ConvertError {
    /// Whether the input itself is at fault (as opposed to the server).
    pub fn is_unreadable_image(&self) -> bool {
        matches!(
            self,
            ConvertError::Decode(e) if !matches!(e, DecodeError::Empty)
        ) || matches!(self, ConvertError::Render(_))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ApiError::PayloadTooLarge(msg) => (StatusCode::PAYLOAD_TOO_LARGE, msg.clone()),
            ApiError::Convert(ConvertError::Decode(DecodeError::Empty)) => {
                (StatusCode::BAD_REQUEST, "Request body is empty".to_string())
            }
            ApiError::Convert(e @ ConvertError::TooLarge { .. }) => {
                (StatusCode::PAYLOAD_TOO_LARGE, e.to_string())
            }
            ApiError::Convert(e) if e.is_unreadable_image() => {
                tracing::warn!(error = %e, "Rejected unreadable image");
                (
                    StatusCode::UNPROCESSABLE_ENTITY,
                    UNREADABLE_IMAGE.to_string(),
                )
            }
            ApiError::Convert(e) => {
                tracing::error!(error = %e, "Conversion failed");
                (StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
            }
            ApiError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()),
        };

        let body = Json(json!({
            "status": status.as_u16(),
            "error": message,
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_bad_request() {
        let error = ApiError::BadRequest("Invalid color".to_string());
        assert_eq!(error.to_string(), "Bad request: Invalid color");
    }

    #[test]
    fn test_api_error_internal() {
        let error = ApiError::Internal("worker pool gone".to_string());
        assert_eq!(error.to_string(), "Internal error: worker pool gone");
    }

    #[test]
    fn test_decode_error_invalid_dimensions() {
        let error = DecodeError::InvalidDimensions {
            width: 0,
            height: 12,
        };
        assert_eq!(error.to_string(), "Invalid dimensions: 0x12");
    }

    #[test]
    fn test_decode_error_svg() {
        let error = DecodeError::Svg("unexpected end of stream".to_string());
        assert_eq!(error.to_string(), "SVG parse error: unexpected end of stream");
    }

    #[test]
    fn test_convert_error_too_large() {
        let error = ConvertError::TooLarge {
            size: 2048,
            max: 1024,
        };
        assert_eq!(error.to_string(), "Input too large: 2048 bytes (max 1024)");
    }

    #[test]
    fn test_convert_error_from_decode_error() {
        let error: ConvertError = DecodeError::PixmapAllocation.into();
        match error {
            ConvertError::Decode(DecodeError::PixmapAllocation) => {}
            _ => panic!("Expected Decode variant"),
        }
    }

    #[test]
    fn test_unreadable_image_classification() {
        assert!(ConvertError::Decode(DecodeError::Svg("x".into())).is_unreadable_image());
        assert!(ConvertError::Render(emoji_palette::RenderError::InvalidDimensions {
            width: 0,
            height: 0
        })
        .is_unreadable_image());
        assert!(!ConvertError::Decode(DecodeError::Empty).is_unreadable_image());
        assert!(!ConvertError::TooLarge { size: 2, max: 1 }.is_unreadable_image());
        assert!(!ConvertError::Task("cancelled".into()).is_unreadable_image());
    }

    #[test]
    fn test_api_error_into_response_status_codes() {
        use axum::response::IntoResponse;

        // BadRequest -> BAD_REQUEST
        let response = ApiError::BadRequest("nope".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // Empty body -> BAD_REQUEST
        let response = ApiError::from(ConvertError::Decode(DecodeError::Empty)).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        // Unreadable input -> UNPROCESSABLE_ENTITY
        let response =
            ApiError::from(ConvertError::Decode(DecodeError::Svg("bad".into()))).into_response();
        assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

        // Oversized -> PAYLOAD_TOO_LARGE
        let response =
            ApiError::from(ConvertError::TooLarge { size: 10, max: 5 }).into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

        // Transport body limit -> PAYLOAD_TOO_LARGE
        let response = ApiError::PayloadTooLarge("too big".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

        // Task failure -> INTERNAL_SERVER_ERROR
        let response = ApiError::from(ConvertError::Task("panicked".into())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        // Internal -> INTERNAL_SERVER_ERROR
        let response = ApiError::Internal("error".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
