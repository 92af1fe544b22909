//! Domain models for the review gate.

use chrono::{DateTime, Utc};

/// Review of a completed stay. Each booking carries at most one review, and
/// each review contributes exactly once to its hotel's running rating.
#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    /// Unique identifier for the review.
    pub id: String,
    /// Id of the reviewed booking.
    pub booking_id: String,
    /// Id of the hotel receiving the rating contribution.
    pub hotel_id: String,
    /// Id of the reviewing user.
    pub user_id: String,
    /// Rating in 1..=5.
    pub rating: i32,
    /// Optional free-text comment.
    pub comment: Option<String>,
    /// Timestamp when the review was created.
    pub created_at: DateTime<Utc>,
}

impl Review {
    /// Converts an entity model to a review domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Review` - The converted review domain model
    pub fn from_entity(entity: entity::review::Model) -> Self {
        Self {
            id: entity.id,
            booking_id: entity.booking_id,
            hotel_id: entity.hotel_id,
            user_id: entity.user_id,
            rating: entity.rating,
            comment: entity.comment,
            created_at: entity.created_at,
        }
    }
}

/// Parameters accepted by the submitReview operation before validation.
#[derive(Debug, Clone)]
pub struct ReviewRequest {
    /// Booking being reviewed.
    pub booking_id: String,
    /// Rating in 1..=5.
    pub rating: i32,
    /// Optional free-text comment.
    pub comment: Option<String>,
}

/// Parameters for inserting a new review along with its rating contribution.
#[derive(Debug, Clone)]
pub struct CreateReviewParams {
    /// Id of the reviewed booking.
    pub booking_id: String,
    /// Id of the hotel receiving the rating contribution.
    pub hotel_id: String,
    /// Id of the reviewing user.
    pub user_id: String,
    /// Rating in 1..=5.
    pub rating: i32,
    /// Optional free-text comment.
    pub comment: Option<String>,
}
