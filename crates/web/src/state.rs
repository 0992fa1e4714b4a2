use axum::extract::FromRef;
use storage::Database;
use weather::WeatherClient;

/// Shared application state; handlers extract the part they need.
#[derive(Debug, Clone)]
pub struct AppState {
    pub db: Database,
    pub weather: WeatherClient,
}

impl AppState {
    pub fn new(db: Database, weather: WeatherClient) -> Self {
        Self { db, weather }
    }
}

impl FromRef<AppState> for Database {
    fn from_ref(state: &AppState) -> Self {
        state.db.clone()
    }
}

impl FromRef<AppState> for WeatherClient {
    fn from_ref(state: &AppState) -> Self {
        state.weather.clone()
    }
}
