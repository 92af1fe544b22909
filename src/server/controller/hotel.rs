use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::DataDto,
        hotel::{
            CreateHotelDto, CreateRoomDto, HotelDetailsDto, HotelDto, HotelListItemDto,
            HotelListQuery, RoomDto, RoomSummaryDto,
        },
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::{
            hotel::{CreateHotelParams, SearchHotelsParams},
            room::CreateRoomParams,
        },
        service::hotel::HotelService,
        state::AppState,
        util::extract::require_json,
    },
};

/// POST /api/hotels
/// Create a hotel owned by the calling owner account.
pub async fn create_hotel(
    State(state): State<AppState>,
    session: Session,
    body: Result<Json<CreateHotelDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let owner = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageCatalog])
        .await?;

    let dto = require_json(body)?;

    let hotel_service = HotelService::new(&state.db);
    let hotel = hotel_service
        .create_hotel(CreateHotelParams {
            owner_id: owner.id,
            name: dto.name,
            description: dto.description,
            city: dto.city,
            country: dto.country,
            amenities: dto.amenities.unwrap_or_default(),
        })
        .await?;

    let response = HotelDto {
        id: hotel.id,
        owner_id: hotel.owner_id,
        name: hotel.name,
        description: hotel.description,
        city: hotel.city,
        country: hotel.country,
        amenities: hotel.amenities,
        rating: hotel.rating,
        total_reviews: hotel.total_reviews,
        created_at: hotel.created_at,
    };

    Ok((StatusCode::CREATED, Json(DataDto::new(response))))
}

/// POST /api/hotels/{hotel_id}/rooms
/// Add a room to a hotel.
pub async fn create_room(
    State(state): State<AppState>,
    session: Session,
    Path(hotel_id): Path<String>,
    body: Result<Json<CreateRoomDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _owner = AuthGuard::new(&state.db, &session)
        .require(&[Permission::ManageCatalog])
        .await?;

    let dto = require_json(body)?;

    let hotel_service = HotelService::new(&state.db);
    let room = hotel_service
        .create_room(CreateRoomParams {
            hotel_id,
            room_number: dto.room_number,
            room_type: dto.room_type,
            price_per_night: dto.price_per_night,
            max_occupancy: dto.max_occupancy,
        })
        .await?;

    let response = RoomDto {
        id: room.id,
        hotel_id: room.hotel_id,
        room_number: room.room_number,
        room_type: room.room_type,
        price_per_night: room.price_per_night,
        max_occupancy: room.max_occupancy,
        created_at: room.created_at,
    };

    Ok((StatusCode::CREATED, Json(DataDto::new(response))))
}

/// GET /api/hotels
/// Search hotels by city, country, price window, and minimum rating.
pub async fn get_hotels(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<HotelListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let hotel_service = HotelService::new(&state.db);
    let summaries = hotel_service
        .search(SearchHotelsParams {
            city: query.city,
            country: query.country,
            min_price: query.min_price,
            max_price: query.max_price,
            min_rating: query.min_rating,
        })
        .await?;

    let response: Vec<HotelListItemDto> = summaries
        .into_iter()
        .map(|summary| HotelListItemDto {
            id: summary.hotel.id,
            name: summary.hotel.name,
            description: summary.hotel.description,
            city: summary.hotel.city,
            country: summary.hotel.country,
            amenities: summary.hotel.amenities,
            rating: summary.hotel.rating,
            total_reviews: summary.hotel.total_reviews,
            min_price_per_night: summary.min_price_per_night,
        })
        .collect();

    Ok((StatusCode::OK, Json(DataDto::new(response))))
}

/// GET /api/hotels/{hotel_id}
/// Get one hotel with its rooms.
pub async fn get_hotel_by_id(
    State(state): State<AppState>,
    session: Session,
    Path(hotel_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let _user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let hotel_service = HotelService::new(&state.db);
    let (hotel, rooms) = hotel_service.get_details(&hotel_id).await?;

    let response = HotelDetailsDto {
        id: hotel.id,
        owner_id: hotel.owner_id,
        name: hotel.name,
        description: hotel.description,
        city: hotel.city,
        country: hotel.country,
        amenities: hotel.amenities,
        rating: hotel.rating,
        total_reviews: hotel.total_reviews,
        rooms: rooms
            .into_iter()
            .map(|room| RoomSummaryDto {
                id: room.id,
                room_number: room.room_number,
                room_type: room.room_type,
                price_per_night: room.price_per_night,
                max_occupancy: room.max_occupancy,
            })
            .collect(),
    };

    Ok((StatusCode::OK, Json(DataDto::new(response))))
}
