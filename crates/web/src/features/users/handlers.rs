use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::common::ErrorResponse,
    dto::user::{CreateUserRequest, UserResponse},
};
use validator::Validate;

use crate::error::WebError;
use crate::features::upsert_status;

use super::services;

#[utoipa::path(
    get,
    path = "/users/",
    responses(
        (status = 200, description = "List all users", body = Vec<UserResponse>)
    ),
    tag = "users"
)]
pub async fn list_users(State(db): State<Database>) -> Result<Response, WebError> {
    let users = services::list_users(db.pool()).await?;

    let response: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();

    Ok(Json(response).into_response())
}

#[utoipa::path(
    post,
    path = "/users/",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserResponse),
        (status = 200, description = "Same user already existed", body = UserResponse),
        (status = 400, description = "Validation error", body = ErrorResponse)
    ),
    tag = "users"
)]
pub async fn create_user(
    State(db): State<Database>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(req) = payload?;
    req.validate()?;

    let user = services::create_user(db.pool(), &req).await?;

    Ok((
        upsert_status(user.created),
        Json(UserResponse::from(user.value)),
    )
        .into_response())
}
