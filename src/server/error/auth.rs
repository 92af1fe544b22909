use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No authenticated user id is present in the session.
    ///
    /// The caller either never logged in or their session expired. Results in
    /// a 401 Unauthorized response.
    #[error("No authenticated user in session")]
    NotInSession,

    /// The session references a user id that no longer exists.
    ///
    /// Happens when an account is removed while one of its sessions is still
    /// live. Results in a 401 Unauthorized response.
    #[error("Session user {0} no longer exists")]
    UnknownUser(String),

    /// The authenticated user's role does not grant the required permission.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {user_id} denied: {reason}")]
    AccessDenied {
        /// Id of the user that was denied.
        user_id: String,
        /// Which permission or resource access was refused.
        reason: String,
    },

    /// Login failed because the email is unknown or the password is wrong.
    ///
    /// The two cases are deliberately indistinguishable to the caller.
    /// Results in a 401 Unauthorized response.
    #[error("Invalid email or password")]
    InvalidCredentials,

    /// Signup attempted with an email that already has an account.
    ///
    /// Results in a 400 Bad Request response.
    #[error("An account with this email already exists")]
    EmailAlreadyExists,
}

/// Converts authentication errors into HTTP responses.
///
/// Maps authentication errors to the documented error codes:
/// - `NotInSession` / `UnknownUser` → 401 with `UNAUTHORIZED`
/// - `AccessDenied` → 403 with `FORBIDDEN`
/// - `InvalidCredentials` → 401 with `INVALID_CREDENTIALS`
/// - `EmailAlreadyExists` → 400 with `EMAIL_ALREADY_EXISTS`
///
/// Denied access is logged at debug level for diagnostics while the response
/// body carries only the code.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::NotInSession | Self::UnknownUser(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("UNAUTHORIZED")),
            )
                .into_response(),
            Self::AccessDenied { user_id, reason } => {
                tracing::debug!("Access denied for user {}: {}", user_id, reason);
                (StatusCode::FORBIDDEN, Json(ErrorDto::new("FORBIDDEN"))).into_response()
            }
            Self::InvalidCredentials => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto::new("INVALID_CREDENTIALS")),
            )
                .into_response(),
            Self::EmailAlreadyExists => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::new("EMAIL_ALREADY_EXISTS")),
            )
                .into_response(),
        }
    }
}
