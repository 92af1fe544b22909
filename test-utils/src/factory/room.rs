//! Room factory for creating test room entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test rooms with customizable fields.
///
/// Rooms always require an existing hotel. Defaults produce a two-person
/// double room priced at 100.0 per night.
pub struct RoomFactory<'a> {
    db: &'a DatabaseConnection,
    hotel_id: String,
    room_number: String,
    room_type: String,
    price_per_night: f64,
    max_occupancy: i32,
}

impl<'a> RoomFactory<'a> {
    /// Creates a new RoomFactory with default values.
    ///
    /// Defaults:
    /// - room_number: auto-incremented number as string
    /// - room_type: `"double"`
    /// - price_per_night: `100.0`
    /// - max_occupancy: `2`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `hotel_id` - ID of the hotel the room belongs to
    pub fn new(db: &'a DatabaseConnection, hotel_id: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            hotel_id: hotel_id.into(),
            room_number: id.to_string(),
            room_type: "double".to_string(),
            price_per_night: 100.0,
            max_occupancy: 2,
        }
    }

    /// Sets the room number.
    pub fn room_number(mut self, room_number: impl Into<String>) -> Self {
        self.room_number = room_number.into();
        self
    }

    /// Sets the room type.
    pub fn room_type(mut self, room_type: impl Into<String>) -> Self {
        self.room_type = room_type.into();
        self
    }

    /// Sets the nightly price.
    pub fn price_per_night(mut self, price_per_night: f64) -> Self {
        self.price_per_night = price_per_night;
        self
    }

    /// Sets the maximum occupancy.
    pub fn max_occupancy(mut self, max_occupancy: i32) -> Self {
        self.max_occupancy = max_occupancy;
        self
    }

    /// Builds and inserts the room entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::room::Model)` - Created room entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::room::Model, DbErr> {
        entity::room::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            hotel_id: ActiveValue::Set(self.hotel_id),
            room_number: ActiveValue::Set(self.room_number),
            room_type: ActiveValue::Set(self.room_type),
            price_per_night: ActiveValue::Set(self.price_per_night),
            max_occupancy: ActiveValue::Set(self.max_occupancy),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a room with default values in the given hotel.
///
/// Shorthand for `RoomFactory::new(db, hotel_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `hotel_id` - ID of the hotel the room belongs to
///
/// # Returns
/// - `Ok(entity::room::Model)` - Created room entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_room(
    db: &DatabaseConnection,
    hotel_id: impl Into<String>,
) -> Result<entity::room::Model, DbErr> {
    RoomFactory::new(db, hotel_id).build().await
}
