//! Booking ledger rules: validation order, price derivation, availability,
//! and cancellation policy.
//!
//! Validation follows a fixed priority so callers always see the same error
//! for the same defect: date ordering and guest count first, then room
//! existence, capacity, past dates, and finally availability.

use chrono::{NaiveTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{booking::BookingRepository, hotel::HotelRepository, room::RoomRepository},
    error::{
        auth::AuthError, booking::BookingError, catalog::CatalogError,
        validation::ValidationError, AppError,
    },
    model::booking::{
        Booking, BookingRequest, BookingStatus, BookingWithContext, CreateBookingParams,
    },
};

/// Minimum number of whole hours that must remain before check-in for a
/// cancellation to be accepted.
const CANCELLATION_DEADLINE_HOURS: i64 = 24;

pub struct BookingService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a confirmed booking for the given user.
    ///
    /// The total price is `nights × price_per_night` with nights taken as the
    /// calendar-day difference between the dates. Availability is decided
    /// against every non-cancelled booking on the room inside one
    /// transaction.
    ///
    /// # Arguments
    /// - `user_id` - Booking user (already authenticated as a customer)
    /// - `request` - Requested room, dates, and guest count
    ///
    /// # Returns
    /// - `Ok(Booking)` - The persisted booking
    /// - `Err(AppError)` - Validation failure, missing room, capacity or date
    ///   violation, unavailable range, or database error
    pub async fn create(
        &self,
        user_id: &str,
        request: BookingRequest,
    ) -> Result<Booking, AppError> {
        let room_repo = RoomRepository::new(self.db);
        let booking_repo = BookingRepository::new(self.db);

        if request.check_out_date <= request.check_in_date {
            return Err(ValidationError::InvalidDateOrder.into());
        }
        if request.guests < 1 {
            return Err(ValidationError::InvalidGuestCount.into());
        }

        let Some(room) = room_repo.find_by_id(&request.room_id).await? else {
            return Err(CatalogError::RoomNotFound(request.room_id).into());
        };

        if request.guests > room.max_occupancy {
            return Err(ValidationError::CapacityExceeded {
                guests: request.guests,
                capacity: room.max_occupancy,
            }
            .into());
        }

        let today = Utc::now().date_naive();
        if request.check_in_date < today || request.check_out_date < today {
            return Err(ValidationError::DatesInPast.into());
        }

        let nights = (request.check_out_date - request.check_in_date).num_days();
        let total_price = nights as f64 * room.price_per_night;

        let created = booking_repo
            .create_if_available(CreateBookingParams {
                room_id: room.id,
                hotel_id: room.hotel_id,
                user_id: user_id.to_string(),
                check_in_date: request.check_in_date,
                check_out_date: request.check_out_date,
                guests: request.guests,
                total_price,
            })
            .await?;

        created.ok_or_else(|| BookingError::RoomNotAvailable.into())
    }

    /// Lists the caller's bookings with hotel and room context.
    ///
    /// Each entry is enriched with the hotel name and the room number/type
    /// via read-only joins; other users' bookings are never included.
    ///
    /// # Arguments
    /// - `user_id` - Owning user
    /// - `status` - Optional status filter
    ///
    /// # Returns
    /// - `Ok(Vec<BookingWithContext>)` - The user's bookings (empty if none)
    /// - `Err(AppError)` - Database error
    pub async fn list(
        &self,
        user_id: &str,
        status: Option<BookingStatus>,
    ) -> Result<Vec<BookingWithContext>, AppError> {
        let booking_repo = BookingRepository::new(self.db);
        let hotel_repo = HotelRepository::new(self.db);
        let room_repo = RoomRepository::new(self.db);

        let bookings = booking_repo.get_by_user(user_id, status).await?;

        let mut entries = Vec::new();

        for booking in bookings {
            // Foreign keys guarantee the context rows exist; a miss here is
            // corrupt data, not a caller mistake.
            let hotel = hotel_repo.find_by_id(&booking.hotel_id).await?.ok_or_else(|| {
                AppError::InternalError(format!("Booking {} references missing hotel", booking.id))
            })?;
            let room = room_repo.find_by_id(&booking.room_id).await?.ok_or_else(|| {
                AppError::InternalError(format!("Booking {} references missing room", booking.id))
            })?;

            entries.push(BookingWithContext {
                booking,
                hotel_name: hotel.name,
                room_number: room.room_number,
                room_type: room.room_type,
            });
        }

        Ok(entries)
    }

    /// Cancels a booking owned by the caller.
    ///
    /// A booking can be cancelled exactly once, only by its owner, and only
    /// while at least 24 hours remain before check-in (check-in taken at
    /// midnight UTC, remaining time rounded up to whole hours). Cancellation
    /// frees the date range for subsequent bookings on the room.
    ///
    /// # Arguments
    /// - `user_id` - Caller's user id
    /// - `booking_id` - Booking to cancel
    ///
    /// # Returns
    /// - `Ok(Booking)` - The cancelled booking with its cancellation timestamp
    /// - `Err(AppError)` - Unknown booking, foreign booking, double cancel,
    ///   missed deadline, or database error
    pub async fn cancel(&self, user_id: &str, booking_id: &str) -> Result<Booking, AppError> {
        let booking_repo = BookingRepository::new(self.db);

        let Some(booking) = booking_repo.find_by_id(booking_id).await? else {
            return Err(BookingError::NotFound(booking_id.to_string()).into());
        };

        if booking.user_id != user_id {
            return Err(AuthError::AccessDenied {
                user_id: user_id.to_string(),
                reason: format!("booking {} belongs to another user", booking.id),
            }
            .into());
        }

        if booking.cancelled_at.is_some() {
            return Err(BookingError::AlreadyCancelled(booking.id).into());
        }

        let now = Utc::now();
        let check_in = booking.check_in_date.and_time(NaiveTime::MIN).and_utc();
        let hours_until_check_in = (check_in - now).num_seconds().div_ceil(3600);

        if hours_until_check_in < CANCELLATION_DEADLINE_HOURS {
            return Err(BookingError::DeadlinePassed.into());
        }

        let cancelled = booking_repo.cancel(&booking.id, now).await?;

        Ok(cancelled)
    }
}
