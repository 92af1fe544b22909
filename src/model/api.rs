use serde::{Deserialize, Serialize};

/// Success envelope wrapping every endpoint payload.
///
/// Mirrors the error envelope so clients can branch on `success` alone:
/// `{ "success": true, "data": ..., "error": null }`.
#[derive(Serialize, Deserialize)]
pub struct DataDto<T> {
    pub success: bool,
    pub data: T,
    pub error: Option<String>,
}

impl<T> DataDto<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
            error: None,
        }
    }
}

/// Error envelope carrying one of the documented error codes:
/// `{ "success": false, "data": null, "error": "CODE" }`.
#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub success: bool,
    pub data: Option<serde_json::Value>,
    pub error: String,
}

impl ErrorDto {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: error.into(),
        }
    }
}
