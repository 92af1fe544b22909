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
        booking::{
            BookingDto, BookingListItemDto, BookingListQuery, CancelledBookingDto,
            CreateBookingDto,
        },
    },
    server::{
        error::{validation::ValidationError, AppError},
        middleware::auth::{AuthGuard, Permission},
        model::booking::{BookingRequest, BookingStatus},
        service::booking::BookingService,
        state::AppState,
        util::extract::require_json,
    },
};

/// POST /api/bookings
/// Book a room for the calling customer.
pub async fn create_booking(
    State(state): State<AppState>,
    session: Session,
    body: Result<Json<CreateBookingDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::PlaceBookings])
        .await?;

    let dto = require_json(body)?;

    let booking_service = BookingService::new(&state.db);
    let booking = booking_service
        .create(
            &user.id,
            BookingRequest {
                room_id: dto.room_id,
                check_in_date: dto.check_in_date,
                check_out_date: dto.check_out_date,
                guests: dto.guests,
            },
        )
        .await?;

    let response = BookingDto {
        id: booking.id,
        room_id: booking.room_id,
        hotel_id: booking.hotel_id,
        user_id: booking.user_id,
        check_in_date: booking.check_in_date,
        check_out_date: booking.check_out_date,
        guests: booking.guests,
        total_price: booking.total_price,
        status: booking.status.as_str().to_string(),
        created_at: booking.created_at,
    };

    Ok((StatusCode::CREATED, Json(DataDto::new(response))))
}

/// GET /api/bookings
/// List the calling customer's bookings, optionally filtered by status.
pub async fn get_bookings(
    State(state): State<AppState>,
    session: Session,
    Query(query): Query<BookingListQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::PlaceBookings])
        .await?;

    let status = match query.status {
        Some(value) => Some(
            BookingStatus::parse(&value).ok_or(ValidationError::InvalidStatusFilter(value))?,
        ),
        None => None,
    };

    let booking_service = BookingService::new(&state.db);
    let entries = booking_service.list(&user.id, status).await?;

    let response: Vec<BookingListItemDto> = entries
        .into_iter()
        .map(|entry| BookingListItemDto {
            id: entry.booking.id,
            room_id: entry.booking.room_id,
            hotel_id: entry.booking.hotel_id,
            check_in_date: entry.booking.check_in_date,
            check_out_date: entry.booking.check_out_date,
            guests: entry.booking.guests,
            total_price: entry.booking.total_price,
            status: entry.booking.status.as_str().to_string(),
            created_at: entry.booking.created_at,
            hotel_name: entry.hotel_name,
            room_number: entry.room_number,
            room_type: entry.room_type,
        })
        .collect();

    Ok((StatusCode::OK, Json(DataDto::new(response))))
}

/// PUT /api/bookings/{booking_id}/cancel
/// Cancel one of the calling customer's bookings.
pub async fn cancel_booking(
    State(state): State<AppState>,
    session: Session,
    Path(booking_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::PlaceBookings])
        .await?;

    let booking_service = BookingService::new(&state.db);
    let booking = booking_service.cancel(&user.id, &booking_id).await?;

    let response = CancelledBookingDto {
        id: booking.id,
        status: booking.status.as_str().to_string(),
        cancelled_at: booking.cancelled_at,
    };

    Ok((StatusCode::OK, Json(DataDto::new(response))))
}
