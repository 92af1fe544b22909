use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Request body for POST /api/hotels.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateHotelDto {
    pub name: String,
    pub description: Option<String>,
    pub city: String,
    pub country: String,
    pub amenities: Option<Vec<String>>,
}

/// Request body for POST /api/hotels/{hotelId}/rooms.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoomDto {
    pub room_number: String,
    pub room_type: String,
    pub price_per_night: f64,
    pub max_occupancy: i32,
}

/// Query parameters for GET /api/hotels.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelListQuery {
    pub city: Option<String>,
    pub country: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub min_rating: Option<f64>,
}

/// Full hotel record returned by POST /api/hotels.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelDto {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub description: Option<String>,
    pub city: String,
    pub country: String,
    pub amenities: Vec<String>,
    pub rating: f64,
    pub total_reviews: i32,
    pub created_at: DateTime<Utc>,
}

/// Full room record returned by POST /api/hotels/{hotelId}/rooms.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomDto {
    pub id: String,
    pub hotel_id: String,
    pub room_number: String,
    pub room_type: String,
    pub price_per_night: f64,
    pub max_occupancy: i32,
    pub created_at: DateTime<Utc>,
}

/// Search result entry for GET /api/hotels.
///
/// `min_price_per_night` is the cheapest room among those matching the price
/// window of the query.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelListItemDto {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
    pub city: String,
    pub country: String,
    pub amenities: Vec<String>,
    pub rating: f64,
    pub total_reviews: i32,
    pub min_price_per_night: f64,
}

/// Hotel detail payload for GET /api/hotels/{hotelId}, rooms included.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HotelDetailsDto {
    pub id: String,
    pub owner_id: String,
    pub name: String,
    pub description: Option<String>,
    pub city: String,
    pub country: String,
    pub amenities: Vec<String>,
    pub rating: f64,
    pub total_reviews: i32,
    pub rooms: Vec<RoomSummaryDto>,
}

/// Room shape embedded in hotel details.
#[derive(Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoomSummaryDto {
    pub id: String,
    pub room_number: String,
    pub room_type: String,
    pub price_per_night: f64,
    pub max_occupancy: i32,
}
