//! Booking data repository for database operations.
//!
//! The central invariant here is date-range exclusivity: for a given room, no
//! two confirmed bookings may overlap under half-open semantics
//! (`existing.check_in < new.check_out AND existing.check_out > new.check_in`).
//! The check-then-insert sequence runs inside a single transaction so two
//! racing requests cannot both observe a free range.

use chrono::{DateTime, NaiveDate, Utc};
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, PaginatorTrait, QueryFilter, TransactionTrait,
};
use uuid::Uuid;

use crate::server::model::booking::{Booking, BookingStatus, CreateBookingParams};

/// Repository providing database operations for the booking ledger.
pub struct BookingRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> BookingRepository<'a> {
    /// Creates a new BookingRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `BookingRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a confirmed booking if its date range is free on the room.
    ///
    /// Counts every non-cancelled booking overlapping the requested range and
    /// inserts only when that count is zero. Count and insert share one
    /// transaction, so the loser of a concurrent race re-observes the
    /// winner's row and backs off.
    ///
    /// # Arguments
    /// - `params` - Booking fields with the price already computed
    ///
    /// # Returns
    /// - `Ok(Some(Booking))` - Range was free, booking created
    /// - `Ok(None)` - Range overlaps an existing confirmed booking
    /// - `Err(DbErr)` - Database error during the transaction
    pub async fn create_if_available(
        &self,
        params: CreateBookingParams,
    ) -> Result<Option<Booking>, DbErr> {
        let txn = self.db.begin().await?;

        let overlapping = count_overlapping(
            &txn,
            &params.room_id,
            params.check_in_date,
            params.check_out_date,
        )
        .await?;

        if overlapping > 0 {
            txn.rollback().await?;
            return Ok(None);
        }

        let entity = entity::booking::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            room_id: ActiveValue::Set(params.room_id),
            hotel_id: ActiveValue::Set(params.hotel_id),
            user_id: ActiveValue::Set(params.user_id),
            check_in_date: ActiveValue::Set(params.check_in_date),
            check_out_date: ActiveValue::Set(params.check_out_date),
            guests: ActiveValue::Set(params.guests),
            total_price: ActiveValue::Set(params.total_price),
            status: ActiveValue::Set(BookingStatus::Confirmed.as_str().to_string()),
            created_at: ActiveValue::Set(Utc::now()),
            cancelled_at: ActiveValue::Set(None),
        }
        .insert(&txn)
        .await?;

        txn.commit().await?;

        Ok(Some(Booking::from_entity(entity)))
    }

    /// Finds a booking by id.
    ///
    /// # Arguments
    /// - `id` - Booking id
    ///
    /// # Returns
    /// - `Ok(Some(Booking))` - Booking found
    /// - `Ok(None)` - No booking with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Booking>, DbErr> {
        let entity = entity::prelude::Booking::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Booking::from_entity))
    }

    /// Gets all bookings owned by a user, optionally narrowed to one status.
    ///
    /// No ordering is applied; the listing contract only guarantees "all and
    /// only the caller's bookings".
    ///
    /// # Arguments
    /// - `user_id` - Owning user id
    /// - `status` - Optional status filter
    ///
    /// # Returns
    /// - `Ok(Vec<Booking>)` - The user's bookings (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_user(
        &self,
        user_id: &str,
        status: Option<BookingStatus>,
    ) -> Result<Vec<Booking>, DbErr> {
        let mut query = entity::prelude::Booking::find()
            .filter(entity::booking::Column::UserId.eq(user_id));

        if let Some(status) = status {
            query = query.filter(entity::booking::Column::Status.eq(status.as_str()));
        }

        let entities = query.all(self.db).await?;

        Ok(entities.into_iter().map(Booking::from_entity).collect())
    }

    /// Cancels a booking, stamping the cancellation time.
    ///
    /// Sets status to cancelled and records `cancelled_at`. The caller is
    /// responsible for the ownership, double-cancel, and deadline checks.
    ///
    /// # Arguments
    /// - `id` - Booking id
    /// - `cancelled_at` - Timestamp to record for the cancellation
    ///
    /// # Returns
    /// - `Ok(Booking)` - The updated booking
    /// - `Err(DbErr)` - Booking missing or database error during update
    pub async fn cancel(&self, id: &str, cancelled_at: DateTime<Utc>) -> Result<Booking, DbErr> {
        let entity = entity::prelude::Booking::find_by_id(id)
            .one(self.db)
            .await?
            .ok_or(DbErr::RecordNotFound(format!("Booking {} not found", id)))?;

        let mut active_model: entity::booking::ActiveModel = entity.into();
        active_model.status = ActiveValue::Set(BookingStatus::Cancelled.as_str().to_string());
        active_model.cancelled_at = ActiveValue::Set(Some(cancelled_at));

        let updated = active_model.update(self.db).await?;

        Ok(Booking::from_entity(updated))
    }
}

/// Counts non-cancelled bookings on a room overlapping a half-open date range.
///
/// A shared boundary date (one booking's check-out equal to another's
/// check-in) does not count as an overlap. Counting all rows, rather than
/// fetching the first match, keeps the exclusivity check correct no matter
/// how many cancelled or historical bookings share the range.
///
/// # Arguments
/// - `conn` - Connection or transaction to run the count on
/// - `room_id` - Room whose ledger is inspected
/// - `check_in_date` - Start of the candidate range (inclusive)
/// - `check_out_date` - End of the candidate range (exclusive)
///
/// # Returns
/// - `Ok(u64)` - Number of conflicting confirmed bookings
/// - `Err(DbErr)` - Database error during the count
async fn count_overlapping<C: ConnectionTrait>(
    conn: &C,
    room_id: &str,
    check_in_date: NaiveDate,
    check_out_date: NaiveDate,
) -> Result<u64, DbErr> {
    entity::prelude::Booking::find()
        .filter(entity::booking::Column::RoomId.eq(room_id))
        .filter(entity::booking::Column::Status.ne(BookingStatus::Cancelled.as_str()))
        .filter(entity::booking::Column::CheckInDate.lt(check_out_date))
        .filter(entity::booking::Column::CheckOutDate.gt(check_in_date))
        .count(conn)
        .await
}
