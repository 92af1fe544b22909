//! Room data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};
use uuid::Uuid;

use crate::server::model::room::{CreateRoomParams, Room};

/// Repository providing database operations for rooms.
pub struct RoomRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> RoomRepository<'a> {
    /// Creates a new RoomRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `RoomRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new room.
    ///
    /// Duplicate room numbers within a hotel are additionally rejected by the
    /// unique index on (hotel_id, room_number).
    ///
    /// # Arguments
    /// - `params` - Room fields
    ///
    /// # Returns
    /// - `Ok(Room)` - The created room
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateRoomParams) -> Result<Room, DbErr> {
        let entity = entity::room::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            hotel_id: ActiveValue::Set(params.hotel_id),
            room_number: ActiveValue::Set(params.room_number),
            room_type: ActiveValue::Set(params.room_type),
            price_per_night: ActiveValue::Set(params.price_per_night),
            max_occupancy: ActiveValue::Set(params.max_occupancy),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Room::from_entity(entity))
    }

    /// Finds a room by id.
    ///
    /// # Arguments
    /// - `id` - Room id
    ///
    /// # Returns
    /// - `Ok(Some(Room))` - Room found
    /// - `Ok(None)` - No room with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Room>, DbErr> {
        let entity = entity::prelude::Room::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Room::from_entity))
    }

    /// Finds a room by number within a hotel.
    ///
    /// Used by room creation to detect duplicate numbers before inserting.
    ///
    /// # Arguments
    /// - `hotel_id` - Hotel to search within
    /// - `room_number` - Room number to look up
    ///
    /// # Returns
    /// - `Ok(Some(Room))` - Room with that number exists in the hotel
    /// - `Ok(None)` - Number is free
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_number(
        &self,
        hotel_id: &str,
        room_number: &str,
    ) -> Result<Option<Room>, DbErr> {
        let entity = entity::prelude::Room::find()
            .filter(entity::room::Column::HotelId.eq(hotel_id))
            .filter(entity::room::Column::RoomNumber.eq(room_number))
            .one(self.db)
            .await?;

        Ok(entity.map(Room::from_entity))
    }

    /// Gets all rooms of a hotel.
    ///
    /// # Arguments
    /// - `hotel_id` - Hotel to list rooms for
    ///
    /// # Returns
    /// - `Ok(Vec<Room>)` - All rooms of the hotel (empty if none)
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_hotel_id(&self, hotel_id: &str) -> Result<Vec<Room>, DbErr> {
        let entities = entity::prelude::Room::find()
            .filter(entity::room::Column::HotelId.eq(hotel_id))
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Room::from_entity).collect())
    }
}
