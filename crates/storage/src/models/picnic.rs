use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

/// A scheduled event tied to a city and a moment in time (UTC).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Picnic {
    pub id: i32,
    pub city_id: i32,
    pub time: NaiveDateTime,
}
