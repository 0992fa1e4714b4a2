use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use crate::models::City;

/// Request payload for creating a city
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCityRequest {
    #[validate(length(
        min = 1,
        max = 255,
        message = "City name must be between 1 and 255 characters"
    ))]
    pub name: String,
}

/// City with its current temperature in degrees Celsius.
///
/// `weather` is looked up live on every read and is `null` when the weather
/// service could not answer.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct CityResponse {
    pub id: i32,
    pub name: String,
    pub weather: Option<f64>,
}

impl CityResponse {
    pub fn new(city: City, weather: Option<f64>) -> Self {
        Self {
            id: city.id,
            name: city.name,
            weather,
        }
    }
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct CityFilter {
    /// Exact city name
    pub q: Option<String>,
}
