use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Hotel and room catalog errors.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Referenced hotel does not exist. Results in 404 Not Found.
    #[error("Hotel {0} not found")]
    HotelNotFound(String),

    /// Referenced room does not exist. Results in 404 Not Found.
    #[error("Room {0} not found")]
    RoomNotFound(String),

    /// A room with this number already exists within the hotel.
    /// Results in 400 Bad Request.
    #[error("Room {room_number} already exists in hotel {hotel_id}")]
    RoomAlreadyExists {
        /// Hotel the duplicate was attempted in.
        hotel_id: String,
        /// The conflicting room number.
        room_number: String,
    },
}

/// Converts catalog errors into HTTP responses with the documented codes.
impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        match self {
            Self::HotelNotFound(_) => (
                StatusCode::NOT_FOUND,
                Json(ErrorDto::new("HOTEL_NOT_FOUND")),
            )
                .into_response(),
            Self::RoomNotFound(_) => {
                (StatusCode::NOT_FOUND, Json(ErrorDto::new("ROOM_NOT_FOUND"))).into_response()
            }
            Self::RoomAlreadyExists { .. } => (
                StatusCode::BAD_REQUEST,
                Json(ErrorDto::new("ROOM_ALREADY_EXISTS")),
            )
                .into_response(),
        }
    }
}
