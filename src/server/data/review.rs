//! Review data repository for database operations.
//!
//! Review creation and the hotel's rating aggregate move together: a reader
//! must never observe a persisted review whose contribution is missing from
//! the hotel's running mean, nor the reverse. Both writes share one
//! transaction, and the mean is recomputed inside the UPDATE statement itself
//! so concurrent reviews of the same hotel cannot lose each other's updates.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, TransactionTrait,
};
use uuid::Uuid;

use crate::server::model::review::{CreateReviewParams, Review};

/// Repository providing database operations for reviews and the hotel rating
/// aggregate they feed.
pub struct ReviewRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewRepository<'a> {
    /// Creates a new ReviewRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `ReviewRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Finds the review of a booking, if one exists.
    ///
    /// # Arguments
    /// - `booking_id` - Booking to look up
    ///
    /// # Returns
    /// - `Ok(Some(Review))` - The booking has been reviewed
    /// - `Ok(None)` - No review yet
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_booking_id(&self, booking_id: &str) -> Result<Option<Review>, DbErr> {
        let entity = entity::prelude::Review::find()
            .filter(entity::review::Column::BookingId.eq(booking_id))
            .one(self.db)
            .await?;

        Ok(entity.map(Review::from_entity))
    }

    /// Inserts a review and folds its rating into the hotel aggregate.
    ///
    /// Runs as one transaction. The aggregate update is expressed in SQL
    /// against the current row:
    /// `rating = (rating * total_reviews + new) / (total_reviews + 1)` and
    /// `total_reviews = total_reviews + 1`, both evaluated over the
    /// pre-update values of the same UPDATE statement.
    ///
    /// # Arguments
    /// - `params` - Review fields; the rating must already be validated
    ///
    /// # Returns
    /// - `Ok(Review)` - The saved review
    /// - `Err(DbErr)` - Database error; neither write is applied
    pub async fn create_and_rate(&self, params: CreateReviewParams) -> Result<Review, DbErr> {
        let txn = self.db.begin().await?;

        let entity = entity::review::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            booking_id: ActiveValue::Set(params.booking_id),
            hotel_id: ActiveValue::Set(params.hotel_id.clone()),
            user_id: ActiveValue::Set(params.user_id),
            rating: ActiveValue::Set(params.rating),
            comment: ActiveValue::Set(params.comment),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(&txn)
        .await?;

        entity::prelude::Hotel::update_many()
            .col_expr(
                entity::hotel::Column::Rating,
                Expr::col(entity::hotel::Column::Rating)
                    .mul(Expr::col(entity::hotel::Column::TotalReviews))
                    .add(params.rating as f64)
                    .div(Expr::col(entity::hotel::Column::TotalReviews).add(1)),
            )
            .col_expr(
                entity::hotel::Column::TotalReviews,
                Expr::col(entity::hotel::Column::TotalReviews).add(1),
            )
            .filter(entity::hotel::Column::Id.eq(&params.hotel_id))
            .exec(&txn)
            .await?;

        txn.commit().await?;

        Ok(Review::from_entity(entity))
    }
}
