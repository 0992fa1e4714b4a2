use sqlx::PgPool;
use storage::{
    Upserted,
    dto::city::{CityFilter, CityResponse, CreateCityRequest},
    repository::city::CityRepository,
};
use weather::WeatherClient;

use crate::error::WebResult;

/// List cities, each with its live temperature
pub async fn list_cities(
    pool: &PgPool,
    weather: &WeatherClient,
    filter: &CityFilter,
) -> WebResult<Vec<CityResponse>> {
    let repo = CityRepository::new(pool);
    let cities = repo.list(filter).await?;

    let mut response = Vec::with_capacity(cities.len());
    for city in cities {
        let temperature = weather.current_temperature(&city.name).await;
        response.push(CityResponse::new(city, temperature));
    }

    Ok(response)
}

/// Create a city after the weather service confirmed it exists
pub async fn create_city(
    pool: &PgPool,
    weather: &WeatherClient,
    request: &CreateCityRequest,
) -> WebResult<Upserted<CityResponse>> {
    weather.check_existing(&request.name).await?;

    let repo = CityRepository::new(pool);
    let city = repo.get_or_create(&request.name).await?;

    let temperature = weather.current_temperature(&city.value.name).await;

    Ok(city.map(|c| CityResponse::new(c, temperature)))
}
