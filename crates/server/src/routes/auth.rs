use crate::{
    auth::CurrentUser,
    dtos::{
        auth::{ChangePasswordRequest, LoginRequest, LoginResponse},
        user::UserResponse,
    },
    error::{AppError, AppResult},
    state::AppState,
};
use axum::{Json, extract::State, http::StatusCode};
use database::services::user::UserService;
use log::info;

/// Exchanges username and password for a bearer token
#[utoipa::path(
    post,
    path = "/login",
    request_body = LoginRequest,
    responses(
        (status = 200, description = "Logged in", body = LoginResponse),
        (status = 401, description = "Wrong username or password")
    ),
    tag = "Authentication"
)]
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let user = UserService::authenticate(&state.db, &req.username, &req.password)
        .await?
        .ok_or(AppError::InvalidCredentials)?;

    let token = state
        .tokens
        .issue(user.id, &user.username, user.role)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    info!("User {} ({}) logged in", user.username, user.role);

    Ok(Json(LoginResponse {
        token,
        token_type: "Bearer".to_owned(),
        expires_in: state.tokens.ttl().num_seconds(),
        user: user.into(),
    }))
}

/// Ends the session. Tokens are stateless, so the client discards its copy.
#[utoipa::path(
    post,
    path = "/logout",
    responses(
        (status = 204, description = "Logged out"),
        (status = 401, description = "Unauthorized - missing or invalid token")
    ),
    security(("jwt" = [])),
    tag = "Authentication"
)]
pub async fn logout(user: CurrentUser) -> StatusCode {
    info!("User {} logged out", user.username);
    StatusCode::NO_CONTENT
}

/// The account behind the token
#[utoipa::path(
    get,
    path = "/me",
    responses(
        (status = 200, description = "Current user", body = UserResponse),
        (status = 401, description = "Unauthorized - missing or invalid token")
    ),
    security(("jwt" = [])),
    tag = "Authentication"
)]
pub async fn me(user: CurrentUser) -> Json<UserResponse> {
    Json(UserResponse {
        id: user.id,
        username: user.username,
        full_name: user.full_name,
        role: user.role,
    })
}

/// Changes the caller's own password
#[utoipa::path(
    post,
    path = "/me/password",
    request_body = ChangePasswordRequest,
    responses(
        (status = 204, description = "Password changed"),
        (status = 400, description = "Current password wrong or new password empty"),
        (status = 401, description = "Unauthorized - missing or invalid token")
    ),
    security(("jwt" = [])),
    tag = "Authentication"
)]
pub async fn change_password(
    State(state): State<AppState>,
    user: CurrentUser,
    Json(req): Json<ChangePasswordRequest>,
) -> AppResult<StatusCode> {
    UserService::change_password(&state.db, user.id, &req.current_password, &req.new_password)
        .await?;
    Ok(StatusCode::NO_CONTENT)
}
