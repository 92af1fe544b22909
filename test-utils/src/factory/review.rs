//! Review factory for creating test review entities.

use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test reviews with customizable fields.
///
/// Reviews always reference an existing booking; hotel and user references
/// are taken from the booking.
pub struct ReviewFactory<'a> {
    db: &'a DatabaseConnection,
    booking_id: String,
    hotel_id: String,
    user_id: String,
    rating: i32,
    comment: Option<String>,
}

impl<'a> ReviewFactory<'a> {
    /// Creates a new ReviewFactory with default values.
    ///
    /// Defaults:
    /// - rating: `4`
    /// - comment: `None`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `booking` - Booking being reviewed
    pub fn new(db: &'a DatabaseConnection, booking: &entity::booking::Model) -> Self {
        Self {
            db,
            booking_id: booking.id.clone(),
            hotel_id: booking.hotel_id.clone(),
            user_id: booking.user_id.clone(),
            rating: 4,
            comment: None,
        }
    }

    /// Sets the rating.
    pub fn rating(mut self, rating: i32) -> Self {
        self.rating = rating;
        self
    }

    /// Sets the comment.
    pub fn comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }

    /// Builds and inserts the review entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::review::Model)` - Created review entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::review::Model, DbErr> {
        entity::review::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            booking_id: ActiveValue::Set(self.booking_id),
            hotel_id: ActiveValue::Set(self.hotel_id),
            user_id: ActiveValue::Set(self.user_id),
            rating: ActiveValue::Set(self.rating),
            comment: ActiveValue::Set(self.comment),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a review with default values for the given booking.
///
/// Shorthand for `ReviewFactory::new(db, booking).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `booking` - Booking being reviewed
///
/// # Returns
/// - `Ok(entity::review::Model)` - Created review entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_review(
    db: &DatabaseConnection,
    booking: &entity::booking::Model,
) -> Result<entity::review::Model, DbErr> {
    ReviewFactory::new(db, booking).build().await
}
