use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Request validation failures.
///
/// All variants result in 400 Bad Request; the response code distinguishes
/// generic payload problems (`INVALID_REQUEST`) from the two date/capacity
/// rules that have their own documented codes.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// Request body could not be deserialized into the expected shape.
    #[error("Request payload failed validation")]
    MalformedPayload,

    /// Check-out date is not strictly after the check-in date.
    #[error("Check-out date must be after check-in date")]
    InvalidDateOrder,

    /// Guest count below one.
    #[error("Guest count must be at least one")]
    InvalidGuestCount,

    /// Status filter value is not a known booking status.
    #[error("Unknown booking status filter '{0}'")]
    InvalidStatusFilter(String),

    /// Review rating outside the allowed 1..=5 range.
    #[error("Rating {0} is outside the allowed range 1-5")]
    InvalidRating(i32),

    /// Check-in or check-out date before the current date.
    #[error("Booking dates must not be in the past")]
    DatesInPast,

    /// Guest count exceeds the room's maximum occupancy.
    #[error("Party of {guests} exceeds room capacity of {capacity}")]
    CapacityExceeded {
        /// Requested guest count.
        guests: i32,
        /// Maximum occupancy of the room.
        capacity: i32,
    },
}

/// Converts validation errors into 400 responses with the documented codes:
/// `INVALID_DATES` for past dates, `INVALID_CAPACITY` for occupancy
/// violations, and `INVALID_REQUEST` for everything else.
impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let code = match self {
            Self::DatesInPast => "INVALID_DATES",
            Self::CapacityExceeded { .. } => "INVALID_CAPACITY",
            Self::MalformedPayload
            | Self::InvalidDateOrder
            | Self::InvalidGuestCount
            | Self::InvalidStatusFilter(_)
            | Self::InvalidRating(_) => "INVALID_REQUEST",
        };

        (StatusCode::BAD_REQUEST, Json(ErrorDto::new(code))).into_response()
    }
}
