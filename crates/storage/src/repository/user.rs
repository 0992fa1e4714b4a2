use sqlx::{PgConnection, PgPool};

use crate::dto::user::CreateUserRequest;
use crate::error::{Result, StorageError};
use crate::models::User;
use crate::repository::Upserted;

pub struct UserRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> UserRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List all users
    pub async fn list(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>(
            "SELECT id, name, surname, age FROM users ORDER BY id",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(users)
    }

    /// Return the user matching (name, surname, age), inserting it first when absent
    pub async fn get_or_create(&self, req: &CreateUserRequest) -> Result<Upserted<User>> {
        let mut tx = self.pool.begin().await?;

        if let Some(user) = select_by_identity(&mut tx, req).await? {
            tx.commit().await?;
            return Ok(Upserted::existing(user));
        }

        let inserted = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (name, surname, age)
            VALUES ($1, $2, $3)
            ON CONFLICT (name, surname, age) DO NOTHING
            RETURNING id, name, surname, age
            "#,
        )
        .bind(&req.name)
        .bind(&req.surname)
        .bind(req.age)
        .fetch_optional(&mut *tx)
        .await?;

        let upserted = match inserted {
            Some(user) => Upserted::inserted(user),
            None => Upserted::existing(
                select_by_identity(&mut tx, req)
                    .await?
                    .ok_or(StorageError::NotFound)?,
            ),
        };

        tx.commit().await?;

        Ok(upserted)
    }
}

async fn select_by_identity(conn: &mut PgConnection, req: &CreateUserRequest) -> Result<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, name, surname, age
        FROM users
        WHERE name = $1 AND surname = $2 AND age = $3
        "#,
    )
    .bind(&req.name)
    .bind(&req.surname)
    .bind(req.age)
    .fetch_optional(conn)
    .await?;

    Ok(user)
}
