use crate::server::{
    error::{
        auth::AuthError, booking::BookingError, review::ReviewError,
        validation::ValidationError, AppError,
    },
    model::review::ReviewRequest,
    service::review::ReviewService,
};
use chrono::{Duration, Utc};
use sea_orm::EntityTrait;
use test_utils::{builder::TestBuilder, factory};
