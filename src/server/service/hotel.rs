//! Catalog orchestration: hotel and room creation, search, and details.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{hotel::HotelRepository, room::RoomRepository},
    error::{catalog::CatalogError, validation::ValidationError, AppError},
    model::{
        hotel::{CreateHotelParams, Hotel, HotelSummary, SearchHotelsParams},
        room::{CreateRoomParams, Room},
    },
};

pub struct HotelService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> HotelService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a new hotel for the given owner.
    ///
    /// # Arguments
    /// - `params` - Hotel fields including the owning user id
    ///
    /// # Returns
    /// - `Ok(Hotel)` - The created hotel
    /// - `Err(AppError)` - Database error
    pub async fn create_hotel(&self, params: CreateHotelParams) -> Result<Hotel, AppError> {
        let repo = HotelRepository::new(self.db);

        let hotel = repo.create(params).await?;

        Ok(hotel)
    }

    /// Creates a new room in a hotel.
    ///
    /// The hotel must exist and the room number must be free within it.
    /// Occupancy below one is rejected up front; rooms are immutable after
    /// creation, so a zero-capacity room could never be booked.
    ///
    /// # Arguments
    /// - `params` - Room fields including the hotel id
    ///
    /// # Returns
    /// - `Ok(Room)` - The created room
    /// - `Err(AppError)` - Missing hotel, duplicate number, or database error
    pub async fn create_room(&self, params: CreateRoomParams) -> Result<Room, AppError> {
        let hotel_repo = HotelRepository::new(self.db);
        let room_repo = RoomRepository::new(self.db);

        if params.max_occupancy < 1 {
            return Err(ValidationError::MalformedPayload.into());
        }

        if hotel_repo.find_by_id(&params.hotel_id).await?.is_none() {
            return Err(CatalogError::HotelNotFound(params.hotel_id).into());
        }

        if room_repo
            .find_by_number(&params.hotel_id, &params.room_number)
            .await?
            .is_some()
        {
            return Err(CatalogError::RoomAlreadyExists {
                hotel_id: params.hotel_id,
                room_number: params.room_number,
            }
            .into());
        }

        let room = room_repo.create(params).await?;

        Ok(room)
    }

    /// Searches hotels and computes each match's cheapest nightly price.
    ///
    /// Location and rating filters run in the repository; the price window is
    /// applied here against each hotel's rooms. A hotel with no room inside
    /// the window is excluded, and `min_price_per_night` is taken over the
    /// rooms that matched.
    ///
    /// # Arguments
    /// - `params` - Search filters
    ///
    /// # Returns
    /// - `Ok(Vec<HotelSummary>)` - Matching hotels with their minimum price
    /// - `Err(AppError)` - Database error
    pub async fn search(&self, params: SearchHotelsParams) -> Result<Vec<HotelSummary>, AppError> {
        let hotel_repo = HotelRepository::new(self.db);
        let room_repo = RoomRepository::new(self.db);

        let hotels = hotel_repo.search(&params).await?;

        let mut summaries = Vec::new();

        for hotel in hotels {
            let rooms = room_repo.get_by_hotel_id(&hotel.id).await?;

            let min_price = rooms
                .iter()
                .map(|room| room.price_per_night)
                .filter(|price| params.min_price.is_none_or(|min| *price >= min))
                .filter(|price| params.max_price.is_none_or(|max| *price <= max))
                .fold(None::<f64>, |acc, price| {
                    Some(acc.map_or(price, |current| current.min(price)))
                });

            if let Some(min_price_per_night) = min_price {
                summaries.push(HotelSummary {
                    hotel,
                    min_price_per_night,
                });
            }
        }

        Ok(summaries)
    }

    /// Gets a hotel together with all of its rooms.
    ///
    /// # Arguments
    /// - `hotel_id` - Hotel to fetch
    ///
    /// # Returns
    /// - `Ok((Hotel, Vec<Room>))` - The hotel and its rooms
    /// - `Err(AppError)` - Missing hotel or database error
    pub async fn get_details(&self, hotel_id: &str) -> Result<(Hotel, Vec<Room>), AppError> {
        let hotel_repo = HotelRepository::new(self.db);
        let room_repo = RoomRepository::new(self.db);

        let Some(hotel) = hotel_repo.find_by_id(hotel_id).await? else {
            return Err(CatalogError::HotelNotFound(hotel_id.to_string()).into());
        };

        let rooms = room_repo.get_by_hotel_id(&hotel.id).await?;

        Ok((hotel, rooms))
    }
}
