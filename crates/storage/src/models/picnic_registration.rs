use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct PicnicRegistration {
    pub id: i32,
    pub user_id: i32,
    pub picnic_id: i32,
}
