use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use mosaic_core::{MosaicError, RasterError};
use serde_json::json;
use thiserror::Error;

use crate::models::WireError;
use crate::services::PipelineError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Session not found")]
    SessionNotFound,

    #[error("Invalid input: {0}")]
    Invalid(#[from] MosaicError),

    #[error("Invalid mosaic: {0}")]
    Wire(#[from] WireError),

    #[error("Mosaic generation failed: {0}")]
    Pipeline(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<PipelineError> for ApiError {
    fn from(e: PipelineError) -> Self {
        match e {
            PipelineError::Invalid(err) => ApiError::Invalid(err),
            PipelineError::Wire(err) => ApiError::Wire(err),
            other => ApiError::Pipeline(other.to_string()),
        }
    }
}

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("Image data is empty")]
    EmptyImageData,

    #[error("Invalid base64: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("PNG decode error: {0}")]
    PngDecode(String),

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Invalid raster: {0}")]
    Raster(#[from] RasterError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::SessionNotFound => StatusCode::NOT_FOUND,
            ApiError::Invalid(_) => StatusCode::BAD_REQUEST,
            ApiError::Wire(_) => StatusCode::BAD_REQUEST,
            ApiError::Pipeline(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = if matches!(self, ApiError::Pipeline(_)) {
            json!({
                "status": status.as_u16(),
                "state": "failed",
                "error": self.to_string(),
            })
        } else {
            json!({
                "status": status.as_u16(),
                "error": self.to_string(),
            })
        };

        (status, Json(body)).into_response()
    }
}
