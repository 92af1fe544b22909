//! Domain models for room catalog operations.

use chrono::{DateTime, Utc};

/// Room within a hotel. Immutable after creation.
#[derive(Debug, Clone, PartialEq)]
pub struct Room {
    /// Unique identifier for the room.
    pub id: String,
    /// Id of the hotel the room belongs to.
    pub hotel_id: String,
    /// Room number, unique within the hotel.
    pub room_number: String,
    /// Room type label (e.g. "double", "suite").
    pub room_type: String,
    /// Nightly price.
    pub price_per_night: f64,
    /// Maximum number of guests the room accommodates.
    pub max_occupancy: i32,
    /// Timestamp when the room was created.
    pub created_at: DateTime<Utc>,
}

impl Room {
    /// Converts an entity model to a room domain model at the repository boundary.
    ///
    /// # Arguments
    /// - `entity` - The entity model from the database
    ///
    /// # Returns
    /// - `Room` - The converted room domain model
    pub fn from_entity(entity: entity::room::Model) -> Self {
        Self {
            id: entity.id,
            hotel_id: entity.hotel_id,
            room_number: entity.room_number,
            room_type: entity.room_type,
            price_per_night: entity.price_per_night,
            max_occupancy: entity.max_occupancy,
            created_at: entity.created_at,
        }
    }
}

/// Parameters for creating a new room.
#[derive(Debug, Clone)]
pub struct CreateRoomParams {
    /// Id of the hotel the room belongs to.
    pub hotel_id: String,
    /// Room number, unique within the hotel.
    pub room_number: String,
    /// Room type label.
    pub room_type: String,
    /// Nightly price.
    pub price_per_night: f64,
    /// Maximum number of guests the room accommodates.
    pub max_occupancy: i32,
}
