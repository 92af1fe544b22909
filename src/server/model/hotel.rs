//! Domain models for hotel catalog operations.

use chrono::{DateTime, Utc};

/// Hotel with its running review aggregate.
///
/// The rating is a running mean over all submitted review ratings, updated
/// incrementally by the review repository and never recomputed from scratch.
#[derive(Debug, Clone, PartialEq)]
pub struct Hotel {
    /// Unique identifier for the hotel.
    pub id: String,
    /// Id of the owning user.
    pub owner_id: String,
    /// Hotel name.
    pub name: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// City the hotel is located in.
    pub city: String,
    /// Country the hotel is located in.
    pub country: String,
    /// Amenity labels; empty when none were provided.
    pub amenities: Vec<String>,
    /// Running mean of review ratings.
    pub rating: f64,
    /// Number of reviews contributing to the rating.
    pub total_reviews: i32,
    /// Timestamp when the hotel was created.
    pub created_at: DateTime<Utc>,
}

impl Hotel {
    /// Converts an entity model to a hotel domain model at the repository boundary.
    ///
    /// Amenities are stored as a JSON string array; a missing or malformed
    /// value converts to an empty list.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Hotel` - The converted hotel domain model
    pub fn from_entity(entity: entity::hotel::Model) -> Self {
        let amenities = entity
            .amenities
            .and_then(|value| serde_json::from_value(value).ok())
            .unwrap_or_default();

        Self {
            id: entity.id,
            owner_id: entity.owner_id,
            name: entity.name,
            description: entity.description,
            city: entity.city,
            country: entity.country,
            amenities,
            rating: entity.rating,
            total_reviews: entity.total_reviews,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for creating a new hotel.
#[derive(Debug, Clone)]
pub struct CreateHotelParams {
    /// Id of the owning user.
    pub owner_id: String,
    /// Hotel name.
    pub name: String,
    /// Optional free-text description.
    pub description: Option<String>,
    /// City the hotel is located in.
    pub city: String,
    /// Country the hotel is located in.
    pub country: String,
    /// Amenity labels.
    pub amenities: Vec<String>,
}

/// Filters for the hotel search operation. All fields are optional and
/// combine conjunctively.
#[derive(Debug, Clone, Default)]
pub struct SearchHotelsParams {
    /// Case-insensitive substring match on the city name.
    pub city: Option<String>,
    /// Case-insensitive substring match on the country name.
    pub country: Option<String>,
    /// Lower bound on nightly room price.
    pub min_price: Option<f64>,
    /// Upper bound on nightly room price.
    pub max_price: Option<f64>,
    /// Lower bound on the hotel's aggregate rating.
    pub min_rating: Option<f64>,
}

/// Search result entry: a hotel plus the cheapest nightly price among its
/// rooms matching the price window of the query.
#[derive(Debug, Clone)]
pub struct HotelSummary {
    /// The matching hotel.
    pub hotel: Hotel,
    /// Minimum nightly price over the rooms that matched the price filter.
    pub min_price_per_night: f64,
}
