use serde::Deserialize;

/// The part of the current-weather payload we read.
///
/// Every field is optional so that a provider schema change shows up as a
/// missing temperature instead of a decode failure.
#[derive(Debug, Deserialize)]
pub struct CurrentWeather {
    pub main: Option<MainReadings>,
}

#[derive(Debug, Deserialize)]
pub struct MainReadings {
    pub temp: Option<f64>,
}

impl CurrentWeather {
    pub fn temperature(&self) -> Option<f64> {
        self.main.as_ref().and_then(|m| m.temp)
    }
}
