use axum::{
    routing::{get, post, put},
    Router,
};
use tower_http::cors::CorsLayer;

use crate::server::{
    controller::{
        auth::{get_user, login, logout, signup},
        booking::{cancel_booking, create_booking, get_bookings},
        hotel::{create_hotel, create_room, get_hotel_by_id, get_hotels},
        review::submit_review,
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/signup", post(signup))
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", get(logout))
        .route("/api/auth/user", get(get_user))
        .route("/api/hotels", post(create_hotel).get(get_hotels))
        .route("/api/hotels/{hotel_id}", get(get_hotel_by_id))
        .route("/api/hotels/{hotel_id}/rooms", post(create_room))
        .route("/api/bookings", post(create_booking).get(get_bookings))
        .route("/api/bookings/{booking_id}/cancel", put(cancel_booking))
        .route("/api/reviews", post(submit_review))
        .layer(CorsLayer::permissive())
}
