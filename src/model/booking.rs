use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Request body for POST /api/bookings.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingDto {
    pub room_id: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub guests: i32,
}

/// Query parameters for GET /api/bookings.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingListQuery {
    pub status: Option<String>,
}

/// Booking record returned by POST /api/bookings.
///
/// The cancellation timestamp is internal and never part of this shape.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub id: String,
    pub room_id: String,
    pub hotel_id: String,
    pub user_id: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub guests: i32,
    pub total_price: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Entry in the caller's booking list, enriched with hotel and room context.
///
/// Omits the owning user id (implied by the session) and the cancellation
/// timestamp.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingListItemDto {
    pub id: String,
    pub room_id: String,
    pub hotel_id: String,
    pub check_in_date: NaiveDate,
    pub check_out_date: NaiveDate,
    pub guests: i32,
    pub total_price: f64,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub hotel_name: String,
    pub room_number: String,
    pub room_type: String,
}

/// Response body for PUT /api/bookings/{bookingId}/cancel.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelledBookingDto {
    pub id: String,
    pub status: String,
    pub cancelled_at: Option<DateTime<Utc>>,
}
