use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Review gate errors.
#[derive(Error, Debug)]
pub enum ReviewError {
    /// A review already exists for this booking. Results in 400 Bad Request.
    #[error("Booking {0} has already been reviewed")]
    AlreadyReviewed(String),

    /// The booking is cancelled or its stay has not completed yet.
    /// Results in 400 Bad Request.
    #[error("Booking {0} is not eligible for review")]
    NotEligible(String),
}

/// Converts review errors into HTTP responses with the documented codes.
impl IntoResponse for ReviewError {
    fn into_response(self) -> Response {
        match self {
            Self::AlreadyReviewed(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::new("ALREADY_REVIEWED")),
            )
                .into_response(),
            Self::NotEligible(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::new("BOOKING_NOT_ELIGIBLE")),
            )
                .into_response(),
        }
    }
}
