use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

use super::picnic::PicnicResponse;
use super::user::UserResponse;

/// Request payload for registering a user to a picnic
#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct RegisterToPicnicRequest {
    #[validate(range(min = 1, message = "user_id must be a positive id"))]
    pub user_id: i32,

    #[validate(range(min = 1, message = "picnic_id must be a positive id"))]
    pub picnic_id: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct RegistrationResponse {
    pub id: i32,
    pub user: UserResponse,
    pub picnic: PicnicResponse,
}

#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct RegistrationFilter {
    pub user_id: Option<i32>,
    pub picnic_id: Option<i32>,
}
