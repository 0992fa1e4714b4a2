use utoipa::OpenApi;

use crate::features;

#[derive(OpenApi)]
#[openapi(
    paths(
        features::cities::handlers::list_cities,
        features::cities::handlers::create_city,
        features::users::handlers::list_users,
        features::users::handlers::create_user,
        features::picnics::handlers::list_picnics,
        features::picnics::handlers::create_picnic,
        features::picnics::handlers::list_registrations,
        features::picnics::handlers::register_to_picnic,
    ),
    components(
        schemas(
            storage::dto::city::CreateCityRequest,
            storage::dto::city::CityResponse,
            storage::dto::user::CreateUserRequest,
            storage::dto::user::UserResponse,
            storage::dto::picnic::CreatePicnicRequest,
            storage::dto::picnic::PicnicResponse,
            storage::dto::picnic::PicnicDetailResponse,
            storage::dto::registration::RegisterToPicnicRequest,
            storage::dto::registration::RegistrationResponse,
            storage::dto::common::ErrorResponse,
        )
    ),
    tags(
        (name = "cities", description = "Cities with live weather"),
        (name = "users", description = "Picnic attendees"),
        (name = "picnics", description = "Picnics and registrations"),
    )
)]
pub struct ApiDoc;
