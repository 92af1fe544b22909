//! Review gate: eligibility rules and the rating aggregate handoff.
//!
//! A booking can be reviewed once it belongs to the caller, has not been
//! cancelled, and its check-out date has passed. At most one review per
//! booking ever exists.

use chrono::{NaiveTime, Utc};
use sea_orm::DatabaseConnection;

use crate::server::{
    data::{booking::BookingRepository, review::ReviewRepository},
    error::{
        auth::AuthError, booking::BookingError, review::ReviewError,
        validation::ValidationError, AppError,
    },
    model::{
        booking::BookingStatus,
        review::{CreateReviewParams, Review, ReviewRequest},
    },
};

pub struct ReviewService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ReviewService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Submits a review for a completed stay.
    ///
    /// On success the review and the hotel's rating aggregate are persisted
    /// together; the repository runs both writes in one transaction.
    ///
    /// # Arguments
    /// - `user_id` - Caller's user id (already authenticated as a customer)
    /// - `request` - Booking reference, rating, and optional comment
    ///
    /// # Returns
    /// - `Ok(Review)` - The saved review
    /// - `Err(AppError)` - Invalid rating, unknown booking, foreign booking,
    ///   duplicate review, ineligible booking, or database error
    pub async fn submit(&self, user_id: &str, request: ReviewRequest) -> Result<Review, AppError> {
        let booking_repo = BookingRepository::new(self.db);
        let review_repo = ReviewRepository::new(self.db);

        if !(1..=5).contains(&request.rating) {
            return Err(ValidationError::InvalidRating(request.rating).into());
        }

        let Some(booking) = booking_repo.find_by_id(&request.booking_id).await? else {
            return Err(BookingError::NotFound(request.booking_id).into());
        };

        if booking.user_id != user_id {
            return Err(AuthError::AccessDenied {
                user_id: user_id.to_string(),
                reason: format!("booking {} belongs to another user", booking.id),
            }
            .into());
        }

        if review_repo.find_by_booking_id(&booking.id).await?.is_some() {
            return Err(ReviewError::AlreadyReviewed(booking.id).into());
        }

        let check_out = booking.check_out_date.and_time(NaiveTime::MIN).and_utc();
        if booking.status == BookingStatus::Cancelled || Utc::now() < check_out {
            return Err(ReviewError::NotEligible(booking.id).into());
        }

        let review = review_repo
            .create_and_rate(CreateReviewParams {
                booking_id: booking.id,
                hotel_id: booking.hotel_id,
                user_id: user_id.to_string(),
                rating: request.rating,
                comment: request.comment,
            })
            .await?;

        Ok(review)
    }
}
