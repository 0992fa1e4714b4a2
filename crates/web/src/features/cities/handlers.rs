use axum::{
    Json,
    extract::{Query, State, rejection::{JsonRejection, QueryRejection}},
    response::{IntoResponse, Response},
};
use storage::{
    Database,
    dto::city::{CityFilter, CityResponse, CreateCityRequest},
    dto::common::ErrorResponse,
};
use validator::Validate;
use weather::WeatherClient;

use crate::error::WebError;
use crate::features::upsert_status;

use super::services;

#[utoipa::path(
    get,
    path = "/cities/",
    params(CityFilter),
    responses(
        (status = 200, description = "Cities with their current temperature", body = Vec<CityResponse>)
    ),
    tag = "cities"
)]
pub async fn list_cities(
    State(db): State<Database>,
    State(weather): State<WeatherClient>,
    query: Result<Query<CityFilter>, QueryRejection>,
) -> Result<Response, WebError> {
    let Query(filter) = query?;
    let cities = services::list_cities(db.pool(), &weather, &filter).await?;

    Ok(Json(cities).into_response())
}

#[utoipa::path(
    post,
    path = "/cities/",
    request_body = CreateCityRequest,
    responses(
        (status = 201, description = "City created", body = CityResponse),
        (status = 200, description = "City already existed", body = CityResponse),
        (status = 400, description = "Not an existing city or invalid name", body = ErrorResponse),
        (status = 502, description = "Weather service answered with an unexpected status", body = ErrorResponse),
        (status = 503, description = "Weather service unreachable", body = ErrorResponse)
    ),
    tag = "cities"
)]
pub async fn create_city(
    State(db): State<Database>,
    State(weather): State<WeatherClient>,
    payload: Result<Json<CreateCityRequest>, JsonRejection>,
) -> Result<Response, WebError> {
    let Json(req) = payload?;
    req.validate()?;

    let city = services::create_city(db.pool(), &weather, &req).await?;

    Ok((upsert_status(city.created), Json(city.value)).into_response())
}
