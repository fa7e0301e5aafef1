use crate::{
    api::{AppState, models::*},
    core::{
        errors::UserCrudError,
        models::user::{User, UserDraft},
    },
};
use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::get,
};

// Define API routes
pub fn api_routes(service: AppState) -> Router {
    Router::new()
        .route("/users", get(get_all_users).post(create_user))
        .route(
            "/users/{user_id}",
            get(get_user_by_id).put(update_user).delete(delete_user),
        )
        .with_state(service)
}

#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All users", body = [User]),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn get_all_users(State(service): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    let users = service.get_all_users().await?;
    Ok(Json(users))
}

#[utoipa::path(
    get,
    path = "/api/users/{user_id}",
    params(
        ("user_id" = i64, Path, description = "ID of the user to retrieve")
    ),
    responses(
        (status = 200, description = "User retrieved successfully", body = User),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn get_user_by_id(
    State(service): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<Json<User>, ApiError> {
    let user = service
        .get_user_by_id(user_id)
        .await?
        .ok_or(UserCrudError::UserNotFound(user_id))?;
    Ok(Json(user))
}

#[utoipa::path(
    post,
    path = "/api/users",
    request_body = UserDraft,
    responses(
        (status = 201, description = "User created successfully", body = User),
        (status = 400, description = "Invalid fields or email already exists", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn create_user(
    State(service): State<AppState>,
    ApiJson(draft): ApiJson<UserDraft>,
) -> Result<(StatusCode, Json<User>), ApiError> {
    let user = service.create_user(draft).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

#[utoipa::path(
    put,
    path = "/api/users/{user_id}",
    params(
        ("user_id" = i64, Path, description = "ID of the user to update")
    ),
    request_body = UserDraft,
    responses(
        (status = 200, description = "User updated successfully", body = User),
        (status = 400, description = "Invalid fields or email already exists", body = ErrorResponse),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn update_user(
    State(service): State<AppState>,
    Path(user_id): Path<i64>,
    ApiJson(draft): ApiJson<UserDraft>,
) -> Result<Json<User>, ApiError> {
    let user = service.update_user(user_id, draft).await?;
    Ok(Json(user))
}

#[utoipa::path(
    delete,
    path = "/api/users/{user_id}",
    params(
        ("user_id" = i64, Path, description = "ID of the user to delete")
    ),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    )
)]
pub(crate) async fn delete_user(
    State(service): State<AppState>,
    Path(user_id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    service.delete_user(user_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
