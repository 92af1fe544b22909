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
        user::{LoginDto, LoginResponseDto, SignupDto, UserDto, UserSummaryDto},
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, session::AuthSession},
        model::user::{SignupParams, User},
        service::auth::AuthService,
        state::AppState,
        util::extract::require_json,
    },
};

/// POST /api/auth/signup
/// Create a new account; no authentication required.
pub async fn signup(
    State(state): State<AppState>,
    body: Result<Json<SignupDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let dto = require_json(body)?;

    let auth_service = AuthService::new(&state.db);
    let user = auth_service
        .signup(SignupParams {
            name: dto.name,
            email: dto.email,
            password: dto.password,
            role: dto.role,
            phone: dto.phone,
        })
        .await?;

    Ok((StatusCode::CREATED, Json(DataDto::new(to_user_dto(user)))))
}

/// POST /api/auth/login
/// Verify credentials and bind the session cookie to the account.
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    body: Result<Json<LoginDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let dto = require_json(body)?;

    let auth_service = AuthService::new(&state.db);
    let user = auth_service.login(&dto.email, &dto.password).await?;

    AuthSession::new(&session).set_user_id(&user.id).await?;

    let response = LoginResponseDto {
        user: UserSummaryDto {
            id: user.id,
            name: user.name,
            email: user.email,
            role: user.role.as_str().to_string(),
        },
    };

    Ok((StatusCode::OK, Json(DataDto::new(response))))
}

/// GET /api/auth/logout
/// Clear the caller's session.
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok((StatusCode::OK, Json(DataDto::new(()))))
}

/// GET /api/auth/user
/// Return the currently authenticated account.
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &session).require(&[]).await?;

    Ok((StatusCode::OK, Json(DataDto::new(to_user_dto(user)))))
}

fn to_user_dto(user: User) -> UserDto {
    UserDto {
        id: user.id,
        name: user.name,
        email: user.email,
        role: user.role.as_str().to_string(),
        phone: user.phone,
    }
}
