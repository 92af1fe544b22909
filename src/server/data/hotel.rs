//! Hotel data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter,
};
use uuid::Uuid;

use crate::server::model::hotel::{CreateHotelParams, Hotel, SearchHotelsParams};

/// Repository providing database operations for the hotel catalog.
pub struct HotelRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HotelRepository<'a> {
    /// Creates a new HotelRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `HotelRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new hotel with an empty review aggregate.
    ///
    /// # Arguments
    /// - `params` - Hotel fields; amenities are stored as a JSON string array
    ///
    /// # Returns
    /// - `Ok(Hotel)` - The created hotel
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, params: CreateHotelParams) -> Result<Hotel, DbErr> {
        let amenities = if params.amenities.is_empty() {
            None
        } else {
            Some(serde_json::json!(params.amenities))
        };

        let entity = entity::hotel::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            owner_id: ActiveValue::Set(params.owner_id),
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            city: ActiveValue::Set(params.city),
            country: ActiveValue::Set(params.country),
            amenities: ActiveValue::Set(amenities),
            rating: ActiveValue::Set(0.0),
            total_reviews: ActiveValue::Set(0),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await?;

        Ok(Hotel::from_entity(entity))
    }

    /// Finds a hotel by id.
    ///
    /// # Arguments
    /// - `id` - Hotel id
    ///
    /// # Returns
    /// - `Ok(Some(Hotel))` - Hotel found
    /// - `Ok(None)` - No hotel with that id
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Hotel>, DbErr> {
        let entity = entity::prelude::Hotel::find_by_id(id).one(self.db).await?;

        Ok(entity.map(Hotel::from_entity))
    }

    /// Searches hotels by location and rating filters.
    ///
    /// City and country are matched as case-insensitive substrings; the
    /// rating filter is a lower bound on the aggregate. Price filtering
    /// happens in the service layer against each hotel's rooms.
    ///
    /// # Arguments
    /// - `params` - Search filters; absent fields do not constrain the query
    ///
    /// # Returns
    /// - `Ok(Vec<Hotel>)` - Hotels matching the location/rating filters
    /// - `Err(DbErr)` - Database error during query
    pub async fn search(&self, params: &SearchHotelsParams) -> Result<Vec<Hotel>, DbErr> {
        let mut query = entity::prelude::Hotel::find();

        if let Some(city) = &params.city {
            query = query.filter(entity::hotel::Column::City.contains(city));
        }
        if let Some(country) = &params.country {
            query = query.filter(entity::hotel::Column::Country.contains(country));
        }
        if let Some(min_rating) = params.min_rating {
            query = query.filter(entity::hotel::Column::Rating.gte(min_rating));
        }

        let entities = query.all(self.db).await?;

        Ok(entities.into_iter().map(Hotel::from_entity).collect())
    }
}
