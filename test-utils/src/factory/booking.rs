//! Booking factory for creating test booking entities.
//!
//! Bookings are inserted directly at the entity level, bypassing the service
//! layer's validation. This lets tests construct historical state (past stays,
//! cancelled bookings) that the public API would reject.

use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test bookings with customizable fields.
///
/// Defaults produce a confirmed three-night booking one week in the future,
/// priced from the room's nightly rate.
pub struct BookingFactory<'a> {
    db: &'a DatabaseConnection,
    room_id: String,
    hotel_id: String,
    user_id: String,
    check_in_date: NaiveDate,
    check_out_date: NaiveDate,
    guests: i32,
    total_price: f64,
    status: String,
    cancelled_at: Option<chrono::DateTime<Utc>>,
}

impl<'a> BookingFactory<'a> {
    /// Creates a new BookingFactory with default values.
    ///
    /// Defaults:
    /// - check_in_date: seven days from today
    /// - check_out_date: ten days from today
    /// - guests: `2`
    /// - total_price: three nights at the room's nightly rate
    /// - status: `"confirmed"` with no cancellation timestamp
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `room` - Room being booked (provides room, hotel, and price context)
    /// - `user` - User the booking belongs to
    pub fn new(
        db: &'a DatabaseConnection,
        room: &entity::room::Model,
        user: &entity::user::Model,
    ) -> Self {
        let today = Utc::now().date_naive();
        Self {
            db,
            room_id: room.id.clone(),
            hotel_id: room.hotel_id.clone(),
            user_id: user.id.clone(),
            check_in_date: today + Duration::days(7),
            check_out_date: today + Duration::days(10),
            guests: 2,
            total_price: 3.0 * room.price_per_night,
            status: "confirmed".to_string(),
            cancelled_at: None,
        }
    }

    /// Sets the check-in and check-out dates.
    pub fn dates(mut self, check_in_date: NaiveDate, check_out_date: NaiveDate) -> Self {
        self.check_in_date = check_in_date;
        self.check_out_date = check_out_date;
        self
    }

    /// Sets the guest count.
    pub fn guests(mut self, guests: i32) -> Self {
        self.guests = guests;
        self
    }

    /// Sets the total price.
    pub fn total_price(mut self, total_price: f64) -> Self {
        self.total_price = total_price;
        self
    }

    /// Marks the booking as cancelled with a cancellation timestamp of now.
    pub fn cancelled(mut self) -> Self {
        self.status = "cancelled".to_string();
        self.cancelled_at = Some(Utc::now());
        self
    }

    /// Builds and inserts the booking entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::booking::Model)` - Created booking entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::booking::Model, DbErr> {
        entity::booking::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            room_id: ActiveValue::Set(self.room_id),
            hotel_id: ActiveValue::Set(self.hotel_id),
            user_id: ActiveValue::Set(self.user_id),
            check_in_date: ActiveValue::Set(self.check_in_date),
            check_out_date: ActiveValue::Set(self.check_out_date),
            guests: ActiveValue::Set(self.guests),
            total_price: ActiveValue::Set(self.total_price),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
            cancelled_at: ActiveValue::Set(self.cancelled_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a confirmed booking with default values.
///
/// Shorthand for `BookingFactory::new(db, room, user).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `room` - Room being booked
/// - `user` - User the booking belongs to
///
/// # Returns
/// - `Ok(entity::booking::Model)` - Created booking entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_booking(
    db: &DatabaseConnection,
    room: &entity::room::Model,
    user: &entity::user::Model,
) -> Result<entity::booking::Model, DbErr> {
    BookingFactory::new(db, room, user).build().await
}

/// Creates a completed booking whose stay already ended.
///
/// The booking checked in five days ago and checked out two days ago, making
/// it eligible for review.
///
/// # Arguments
/// - `db` - Database connection
/// - `room` - Room that was booked
/// - `user` - User the booking belongs to
///
/// # Returns
/// - `Ok(entity::booking::Model)` - Created booking entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_completed_booking(
    db: &DatabaseConnection,
    room: &entity::room::Model,
    user: &entity::user::Model,
) -> Result<entity::booking::Model, DbErr> {
    let today = Utc::now().date_naive();
    BookingFactory::new(db, room, user)
        .dates(today - Duration::days(5), today - Duration::days(2))
        .build()
        .await
}
