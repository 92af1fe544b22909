//! Domain models for the booking ledger.
//!
//! A booking occupies its date range exclusively on its room while confirmed.
//! Status moves one way (confirmed → cancelled) and cancellation is terminal.

use chrono::{DateTime, NaiveDate, Utc};

/// Lifecycle state of a booking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BookingStatus {
    /// Active booking holding its date range on the room.
    Confirmed,
    /// Terminally cancelled; the date range is released.
    Cancelled,
}

impl BookingStatus {
    /// Returns the status's stored string form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Confirmed => "confirmed",
            Self::Cancelled => "cancelled",
        }
    }

    /// Parses a stored or user-supplied status value.
    ///
    /// # Returns
    /// - `Some(BookingStatus)` - Recognized status value
    /// - `None` - Unknown status value
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "confirmed" => Some(Self::Confirmed),
            "cancelled" => Some(Self::Cancelled),
            _ => None,
        }
    }
}

/// Booking of a room by a user over a half-open date range
/// `[check_in_date, check_out_date)`.
#[derive(Debug, Clone, PartialEq)]
pub struct Booking {
    /// Unique identifier for the booking.
    pub id: String,
    /// Id of the booked room; fixed at creation.
    pub room_id: String,
    /// Id of the room's hotel; fixed at creation.
    pub hotel_id: String,
    /// Id of the owning user; fixed at creation.
    pub user_id: String,
    /// First night of the stay.
    pub check_in_date: NaiveDate,
    /// Day of departure; not a night of the stay.
    pub check_out_date: NaiveDate,
    /// Number of guests.
    pub guests: i32,
    /// Derived price: nights × nightly rate at creation time.
    pub total_price: f64,
    /// Current lifecycle state.
    pub status: BookingStatus,
    /// Timestamp when the booking was created.
    pub created_at: DateTime<Utc>,
    /// Timestamp of cancellation, set exactly once.
    pub cancelled_at: Option<DateTime<Utc>>,
}

impl Booking {
    /// Converts an entity model to a booking domain model at the repository boundary.
    ///
    /// The stored status string is written exclusively through
    /// `BookingStatus::as_str`, so an unrecognized value falls back to
    /// confirmed (the conservative reading for availability checks).
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Booking` - The converted booking domain model
    pub fn from_entity(entity: entity::booking::Model) -> Self {
        Self {
            id: entity.id,
            room_id: entity.room_id,
            hotel_id: entity.hotel_id,
            user_id: entity.user_id,
            check_in_date: entity.check_in_date,
            check_out_date: entity.check_out_date,
            guests: entity.guests,
            total_price: entity.total_price,
            status: BookingStatus::parse(&entity.status).unwrap_or(BookingStatus::Confirmed),
            created_at: entity.created_at,
            cancelled_at: entity.cancelled_at,
        }
    }
}

/// Parameters for inserting a new confirmed booking.
///
/// The price is computed by the service before insertion so the stored value
/// reflects the room's rate at booking time.
#[derive(Debug, Clone)]
pub struct CreateBookingParams {
    /// Id of the room being booked.
    pub room_id: String,
    /// Id of the room's hotel.
    pub hotel_id: String,
    /// Id of the booking user.
    pub user_id: String,
    /// First night of the stay.
    pub check_in_date: NaiveDate,
    /// Day of departure.
    pub check_out_date: NaiveDate,
    /// Number of guests.
    pub guests: i32,
    /// Derived total price.
    pub total_price: f64,
}

/// Parameters accepted by the createBooking operation before validation.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    /// Id of the room being booked.
    pub room_id: String,
    /// Requested first night.
    pub check_in_date: NaiveDate,
    /// Requested day of departure.
    pub check_out_date: NaiveDate,
    /// Number of guests.
    pub guests: i32,
}

/// A booking joined with the hotel and room context shown in listings.
#[derive(Debug, Clone)]
pub struct BookingWithContext {
    /// The booking itself.
    pub booking: Booking,
    /// Name of the hotel the booked room belongs to.
    pub hotel_name: String,
    /// Number of the booked room.
    pub room_number: String,
    /// Type of the booked room.
    pub room_type: String,
}
