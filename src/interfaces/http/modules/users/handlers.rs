//! User CRUD API handlers
//!
//! Pure translation layer: HTTP in, service call, HTTP out.
//! All business rules live in `UserService`.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::Json;

use super::dto::{UserDto, UserPayload};
use crate::application::UserService;
use crate::infrastructure::database::repositories::SeaOrmUserRepository;
use crate::interfaces::http::common::{ApiError, ErrorBody, ValidatedJson};

/// User handler state — concrete over `SeaOrmUserRepository` for Axum
/// compatibility.
#[derive(Clone)]
pub struct UserHandlerState {
    pub user_service: Arc<UserService<SeaOrmUserRepository>>,
}

#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "All registered users", body = [UserDto])
    )
)]
pub async fn list_users(
    State(state): State<UserHandlerState>,
) -> Result<Json<Vec<UserDto>>, ApiError> {
    let users = state.user_service.find_all().await?;
    Ok(Json(users.into_iter().map(UserDto::from).collect()))
}

#[utoipa::path(
    get,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "User details", body = UserDto),
        (status = 404, description = "User not found", body = ErrorBody)
    )
)]
pub async fn get_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<i64>,
) -> Result<Json<UserDto>, ApiError> {
    let user = state.user_service.find_by_id(id).await?;
    Ok(Json(UserDto::from(user)))
}

#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    request_body = UserPayload,
    responses(
        (status = 201, description = "User created, Location header points at it", body = UserDto),
        (status = 422, description = "Account or card number already in use", body = ErrorBody)
    )
)]
pub async fn create_user(
    State(state): State<UserHandlerState>,
    ValidatedJson(payload): ValidatedJson<UserPayload>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<UserDto>), ApiError> {
    let user = state.user_service.create(payload.into()).await?;
    let location = format!("/users/{}", user.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(UserDto::from(user)),
    ))
}

#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = i64, Path, description = "User ID")),
    request_body = UserPayload,
    responses(
        (status = 200, description = "User updated", body = UserDto),
        (status = 404, description = "User not found", body = ErrorBody),
        (status = 422, description = "Account or card number already in use", body = ErrorBody)
    )
)]
pub async fn update_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<i64>,
    ValidatedJson(payload): ValidatedJson<UserPayload>,
) -> Result<Json<UserDto>, ApiError> {
    let user = state.user_service.update(id, payload.into()).await?;
    Ok(Json(UserDto::from(user)))
}

#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found", body = ErrorBody)
    )
)]
pub async fn delete_user(
    State(state): State<UserHandlerState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    state.user_service.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
