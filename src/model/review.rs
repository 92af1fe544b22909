use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request body for POST /api/reviews.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReviewDto {
    pub booking_id: String,
    pub rating: i32,
    pub comment: Option<String>,
}

/// Saved review returned by POST /api/reviews.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReviewDto {
    pub id: String,
    pub booking_id: String,
    pub hotel_id: String,
    pub user_id: String,
    pub rating: i32,
    pub comment: Option<String>,
    pub created_at: DateTime<Utc>,
}
