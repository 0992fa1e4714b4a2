use axum::{Router, routing::get};

use super::handlers::{create_city, list_cities};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/cities/", get(list_cities).post(create_city))
}
