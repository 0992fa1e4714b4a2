use axum::{Router, routing::get};

use super::handlers::{create_picnic, list_picnics, list_registrations, register_to_picnic};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/picnics/", get(list_picnics).post(create_picnic))
        .route(
            "/picnics/register/",
            get(list_registrations).post(register_to_picnic),
        )
}
