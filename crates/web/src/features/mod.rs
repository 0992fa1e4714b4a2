use axum::{Router, http::StatusCode};

use crate::state::AppState;

pub mod cities;
pub mod picnics;
pub mod users;

pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(cities::routes::routes())
        .merge(users::routes::routes())
        .merge(picnics::routes::routes())
}

/// 201 for a freshly inserted row, 200 when an identical one already existed.
pub(crate) fn upsert_status(created: bool) -> StatusCode {
    if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    }
}
