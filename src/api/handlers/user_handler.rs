//! User handlers mounted under `/api/users`.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::ToSchema;
use validator::Validate;

use crate::api::extractors::{PathParam, ValidatedJson};
use crate::api::AppState;
use crate::domain::User;
use crate::errors::{AppError, AppResult, OptionExt};
use crate::types::MessageResponse;

/// Create/replace request body. Any `id` in the body is ignored.
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserRequest {
    #[validate(length(min = 1, message = "First name is required"))]
    #[schema(example = "John")]
    pub first_name: String,
    #[validate(length(min = 1, message = "Last name is required"))]
    #[schema(example = "Doe")]
    pub last_name: String,
    #[validate(length(min = 1, message = "Email is required"))]
    #[schema(example = "john.doe@example.com")]
    pub email: String,
}

impl UserRequest {
    fn into_user(self) -> User {
        User::new(self.first_name, self.last_name, self.email)
    }
}

/// Create user routes
pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users).post(create_user))
        .route("/sample-users", post(create_sample_users))
        .route("/display", get(display_users))
        .route("/display-one-by-one", get(display_users_one_by_one))
        .route("/:id", get(get_user).put(update_user).delete(delete_user))
}

/// List all users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "Users",
    responses(
        (status = 200, description = "Every stored user", body = Vec<User>)
    )
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    Ok(Json(state.user_service.find_all().await?))
}

/// Get user by ID
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User found", body = User),
        (status = 404, description = "User not found")
    )
)]
pub async fn get_user(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> AppResult<Json<User>> {
    let user = state.user_service.find_by_id(id).await?.ok_or_not_found()?;
    Ok(Json(user))
}

/// Create a user
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "Users",
    request_body = UserRequest,
    responses(
        (status = 200, description = "User created", body = User),
        (status = 400, description = "Email already exists or invalid body")
    )
)]
pub async fn create_user(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<UserRequest>,
) -> AppResult<Json<User>> {
    let user = state.user_service.register_user(payload.into_user()).await?;
    Ok(Json(user))
}

/// Replace every field of an existing user
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UserRequest,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 400, description = "Invalid body for an existing user"),
        (status = 404, description = "User not found")
    )
)]
pub async fn update_user(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
    payload: Result<ValidatedJson<UserRequest>, AppError>,
) -> AppResult<Json<User>> {
    // An unknown id is reported before a bad body
    state.user_service.find_by_id(id).await?.ok_or_not_found()?;
    let ValidatedJson(payload) = payload?;

    let user = state
        .user_service
        .save(payload.into_user().with_id(id))
        .await?;
    Ok(Json(user))
}

/// Delete a user
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "Users",
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deleted"),
        (status = 404, description = "User not found")
    )
)]
pub async fn delete_user(
    State(state): State<AppState>,
    PathParam(id): PathParam<i32>,
) -> AppResult<StatusCode> {
    state.user_service.find_by_id(id).await?.ok_or_not_found()?;
    state.user_service.delete_by_id(id).await?;
    Ok(StatusCode::OK)
}

/// Seed the sample users
#[utoipa::path(
    post,
    path = "/api/users/sample-users",
    tag = "Users",
    responses(
        (status = 200, description = "Missing sample users inserted", body = MessageResponse)
    )
)]
pub async fn create_sample_users(
    State(state): State<AppState>,
) -> AppResult<Json<MessageResponse>> {
    state.user_service.create_sample_users().await?;
    Ok(Json(MessageResponse::new("Sample users created successfully")))
}

/// List all users, fetched in bulk
#[utoipa::path(
    get,
    path = "/api/users/display",
    tag = "Users",
    responses(
        (status = 200, description = "Every stored user", body = Vec<User>)
    )
)]
pub async fn display_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    Ok(Json(state.user_service.list_all().await?))
}

/// List all users, walked one at a time
#[utoipa::path(
    get,
    path = "/api/users/display-one-by-one",
    tag = "Users",
    responses(
        (status = 200, description = "Every stored user", body = Vec<User>)
    )
)]
pub async fn display_users_one_by_one(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<User>>> {
    Ok(Json(state.user_service.list_one_by_one().await?))
}
