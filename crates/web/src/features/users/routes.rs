use axum::{Router, routing::get};

use super::handlers::{create_user, list_users};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new().route("/users/", get(list_users).post(create_user))
}
