use axum::{
    Json,
    extract::{Query, State, rejection::{JsonRejection, QueryRejection}},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::common::ErrorResponse,
    dto::picnic::{CreatePicnicRequest, PicnicDetailResponse, PicnicListFilter, PicnicResponse},
    dto::registration::{RegisterToPicnicRequest, RegistrationFilter, RegistrationResponse},
};
use validator::Validate;

use crate::error::WebError;
use crate::features::upsert_status;

use super::services;

#[utoipa::path(
    get,
    path = "/picnics/",
    params(PicnicListFilter),
    responses(
        (status = 200, description = "Picnics with registered users", body = Vec<PicnicDetailResponse>),
        (status = 400, description = "Invalid query parameters")
    ),
    tag = "picnics"
)]
pub async fn list_picnics(
    State(db): State<Database>,
    query: Result<Query<PicnicListFilter>, QueryRejection>,
) -> Result<Response, WebError> {
    let Query(filter) = query?;
    let picnics = services::list_picnics(db.pool(), &filter).await?;

    Ok(Json(picnics).into_response())
}

#[utoipa::path(
    post,
    path = "/picnics/",
    request_body = CreatePicnicRequest,
    responses(
        (status = 201, description = "Picnic scheduled", body = PicnicResponse),
        (status = 200, description = "Picnic already scheduled for this city and time", body = PicnicResponse),
        (status = 400, description = "Unknown city or invalid payload", body = ErrorResponse)
    ),
    tag = "picnics"
)]
pub async fn create_picnic(
    State(db): State<Database>,
    payload: Result<Json<CreatePicnicRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(req) = payload?;
    req.validate()?;

    let picnic = services::create_picnic(db.pool(), &req).await?;

    Ok((upsert_status(picnic.created), Json(picnic.value)).into_response())
}

#[utoipa::path(
    get,
    path = "/picnics/register/",
    params(RegistrationFilter),
    responses(
        (status = 200, description = "Registrations", body = Vec<RegistrationResponse>)
    ),
    tag = "picnics"
)]
pub async fn list_registrations(
    State(db): State<Database>,
    query: Result<Query<RegistrationFilter>, QueryRejection>,
) -> Result<Response, WebError> {
    let Query(filter) = query?;
    let registrations = services::list_registrations(db.pool(), &filter).await?;

    Ok(Json(registrations).into_response())
}

#[utoipa::path(
    post,
    path = "/picnics/register/",
    request_body = RegisterToPicnicRequest,
    responses(
        (status = 201, description = "User registered to the picnic", body = RegistrationResponse),
        (status = 200, description = "User was already registered", body = RegistrationResponse),
        (status = 400, description = "Unknown user or picnic", body = ErrorResponse)
    ),
    tag = "picnics"
)]
pub async fn register_to_picnic(
    State(db): State<Database>,
    payload: Result<Json<RegisterToPicnicRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(req) = payload?;
    req.validate()?;

    let registration = services::register_to_picnic(db.pool(), &req).await?;

    Ok((
        upsert_status(registration.created),
        Json(registration.value),
    )
        .into_response())
}
