use sqlx::PgPool;
use storage::{
    Upserted, dto::user::CreateUserRequest, error::Result, models::User,
    repository::user::UserRepository,
};

/// List all users
pub async fn list_users(pool: &PgPool) -> Result<Vec<User>> {
    let repo = UserRepository::new(pool);
    repo.list().await
}

/// Register a user, or return the identical one registered before
pub async fn create_user(pool: &PgPool, request: &CreateUserRequest) -> Result<Upserted<User>> {
    let repo = UserRepository::new(pool);
    repo.get_or_create(request).await
}
