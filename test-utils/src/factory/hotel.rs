//! Hotel factory for creating test hotel entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test hotels with customizable fields.
///
/// Provides a builder pattern for creating hotel entities with default values
/// that can be overridden as needed for specific test scenarios. Hotels always
/// require an existing owner user.
pub struct HotelFactory<'a> {
    db: &'a DatabaseConnection,
    owner_id: String,
    name: String,
    description: Option<String>,
    city: String,
    country: String,
    amenities: Vec<String>,
    rating: f64,
    total_reviews: i32,
}

impl<'a> HotelFactory<'a> {
    /// Creates a new HotelFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Hotel {id}"` where id is auto-incremented
    /// - description: `None`
    /// - city: `"City {id}"`
    /// - country: `"Country {id}"`
    /// - amenities: empty
    /// - rating: `0.0` with zero reviews
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `owner_id` - ID of the owning user
    pub fn new(db: &'a DatabaseConnection, owner_id: impl Into<String>) -> Self {
        let id = next_id();
        Self {
            db,
            owner_id: owner_id.into(),
            name: format!("Hotel {}", id),
            description: None,
            city: format!("City {}", id),
            country: format!("Country {}", id),
            amenities: Vec::new(),
            rating: 0.0,
            total_reviews: 0,
        }
    }

    /// Sets the hotel name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the hotel description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the city the hotel is located in.
    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    /// Sets the country the hotel is located in.
    pub fn country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Sets the amenities list.
    pub fn amenities(mut self, amenities: Vec<String>) -> Self {
        self.amenities = amenities;
        self
    }

    /// Sets the aggregate rating and review count.
    pub fn rating(mut self, rating: f64, total_reviews: i32) -> Self {
        self.rating = rating;
        self.total_reviews = total_reviews;
        self
    }

    /// Builds and inserts the hotel entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::hotel::Model)` - Created hotel entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::hotel::Model, DbErr> {
        let amenities = if self.amenities.is_empty() {
            None
        } else {
            Some(serde_json::json!(self.amenities))
        };

        entity::hotel::ActiveModel {
            id: ActiveValue::Set(Uuid::new_v4().to_string()),
            owner_id: ActiveValue::Set(self.owner_id),
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            city: ActiveValue::Set(self.city),
            country: ActiveValue::Set(self.country),
            amenities: ActiveValue::Set(amenities),
            rating: ActiveValue::Set(self.rating),
            total_reviews: ActiveValue::Set(self.total_reviews),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a hotel with default values for the given owner.
///
/// Shorthand for `HotelFactory::new(db, owner_id).build().await`.
///
/// # Arguments
/// - `db` - Database connection
/// - `owner_id` - ID of the owning user
///
/// # Returns
/// - `Ok(entity::hotel::Model)` - Created hotel entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_hotel(
    db: &DatabaseConnection,
    owner_id: impl Into<String>,
) -> Result<entity::hotel::Model, DbErr> {
    HotelFactory::new(db, owner_id).build().await
}
