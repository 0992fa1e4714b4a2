use chrono::Utc;
use sqlx::PgPool;
use storage::{
    Upserted,
    dto::picnic::{CreatePicnicRequest, PicnicDetailResponse, PicnicListFilter, PicnicResponse},
    dto::registration::{RegisterToPicnicRequest, RegistrationFilter, RegistrationResponse},
    error::Result,
    repository::{picnic::PicnicRepository, registration::RegistrationRepository},
};

/// List picnics with their attendees; `past = false` hides picnics before now (UTC)
pub async fn list_picnics(
    pool: &PgPool,
    filter: &PicnicListFilter,
) -> Result<Vec<PicnicDetailResponse>> {
    let repo = PicnicRepository::new(pool);
    repo.list_detailed(filter, Utc::now().naive_utc()).await
}

/// Schedule a picnic in an existing city
pub async fn create_picnic(
    pool: &PgPool,
    request: &CreatePicnicRequest,
) -> Result<Upserted<PicnicResponse>> {
    let repo = PicnicRepository::new(pool);
    repo.get_or_create(request).await
}

pub async fn list_registrations(
    pool: &PgPool,
    filter: &RegistrationFilter,
) -> Result<Vec<RegistrationResponse>> {
    let repo = RegistrationRepository::new(pool);
    repo.list(filter).await
}

/// Register an existing user to an existing picnic
pub async fn register_to_picnic(
    pool: &PgPool,
    request: &RegisterToPicnicRequest,
) -> Result<Upserted<RegistrationResponse>> {
    let repo = RegistrationRepository::new(pool);
    let registration = repo.get_or_create(request).await?;

    if registration.created {
        tracing::info!(
            user_id = request.user_id,
            picnic_id = request.picnic_id,
            "New picnic registration"
        );
    }

    Ok(registration)
}
