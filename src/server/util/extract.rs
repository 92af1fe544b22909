use axum::{extract::rejection::JsonRejection, Json};

use crate::server::error::{validation::ValidationError, AppError};

/// Unwraps a deferred JSON body extraction.
///
/// Handlers take their body as `Result<Json<T>, JsonRejection>` so that the
/// authentication guard runs before the payload is inspected; this keeps the
/// documented error priority (UNAUTHORIZED before INVALID_REQUEST). Any
/// deserialization failure maps to the INVALID_REQUEST code.
///
/// # Arguments
/// - `body` - The deferred extraction result from the handler signature
///
/// # Returns
/// - `Ok(T)` - Successfully deserialized payload
/// - `Err(AppError)` - Payload was missing or malformed
pub fn require_json<T>(body: Result<Json<T>, JsonRejection>) -> Result<T, AppError> {
    match body {
        Ok(Json(value)) => Ok(value),
        Err(rejection) => {
            tracing::debug!("Rejected request payload: {}", rejection);
            Err(ValidationError::MalformedPayload.into())
        }
    }
}
