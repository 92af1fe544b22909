use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Booking lifecycle errors.
#[derive(Error, Debug)]
pub enum BookingError {
    /// Referenced booking does not exist. Results in 404 Not Found.
    #[error("Booking {0} not found")]
    NotFound(String),

    /// The requested date range overlaps a confirmed booking on the room.
    /// Results in 400 Bad Request.
    #[error("Room is not available for the requested dates")]
    RoomNotAvailable,

    /// The booking has already been cancelled. Results in 400 Bad Request.
    #[error("Booking {0} is already cancelled")]
    AlreadyCancelled(String),

    /// Fewer than 24 hours remain before check-in. Results in 400 Bad Request.
    #[error("Cancellation deadline has passed")]
    DeadlinePassed,
}

/// Converts booking errors into HTTP responses with the documented codes.
impl IntoResponse for BookingError {
    fn into_response(self) -> Response {
        match self {
            Self::NotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto::new("BOOKING_NOT_FOUND")),
            )
                .into_response(),
            Self::RoomNotAvailable => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::new("ROOM_NOT_AVAILABLE")),
            )
                .into_response(),
            Self::AlreadyCancelled(_) => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::new("ALREADY_CANCELLED")),
            )
                .into_response(),
            Self::DeadlinePassed => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::new("CANCELLATION_DEADLINE_PASSED")),
            )
                .into_response(),
        }
    }
}
