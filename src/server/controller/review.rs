use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::DataDto,
        review::{CreateReviewDto, ReviewDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::review::ReviewRequest,
        service::review::ReviewService,
        state::AppState,
        util::extract::require_json,
    },
};

/// POST /api/reviews
/// Review a completed stay; folds the rating into the hotel's aggregate.
pub async fn submit_review(
    State(state): State<AppState>,
    session: Session,
    body: Result<Json<CreateReviewDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session)
        .require(&[Permission::PlaceBookings])
        .await?;

    let dto = require_json(body)?;

    let review_service = ReviewService::new(&state.db);
    let review = review_service
        .submit(
            &user.id,
            ReviewRequest {
                booking_id: dto.booking_id,
                rating: dto.rating,
                comment: dto.comment,
            },
        )
        .await?;

    let response = ReviewDto {
        id: review.id,
        booking_id: review.booking_id,
        hotel_id: review.hotel_id,
        user_id: review.user_id,
        rating: review.rating,
        comment: review.comment,
        created_at: review.created_at,
    };

    Ok((StatusCode::CREATED, Json(DataDto::new(response))))
}
