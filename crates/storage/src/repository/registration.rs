use chrono::NaiveDateTime;
use sqlx::{FromRow, PgConnection, PgPool, QueryBuilder};

use crate::dto::picnic::PicnicResponse;
use crate::dto::registration::{RegisterToPicnicRequest, RegistrationFilter, RegistrationResponse};
use crate::dto::user::UserResponse;
use crate::error::{Result, StorageError};
use crate::models::PicnicRegistration;
use crate::repository::Upserted;

const SELECT_REGISTRATION: &str = r#"
    SELECT pr.id,
           u.id AS user_id, u.name AS user_name, u.surname AS user_surname, u.age AS user_age,
           p.id AS picnic_id, c.name AS picnic_city, p.time AS picnic_time
    FROM picnic_registrations pr
    INNER JOIN users u ON u.id = pr.user_id
    INNER JOIN picnics p ON p.id = pr.picnic_id
    INNER JOIN cities c ON c.id = p.city_id
"#;

#[derive(FromRow)]
struct RegistrationRow {
    id: i32,
    user_id: i32,
    user_name: String,
    user_surname: String,
    user_age: i32,
    picnic_id: i32,
    picnic_city: String,
    picnic_time: NaiveDateTime,
}

impl From<RegistrationRow> for RegistrationResponse {
    fn from(row: RegistrationRow) -> Self {
        Self {
            id: row.id,
            user: UserResponse {
                id: row.user_id,
                name: row.user_name,
                surname: row.user_surname,
                age: row.user_age,
            },
            picnic: PicnicResponse {
                id: row.picnic_id,
                city: row.picnic_city,
                time: row.picnic_time,
            },
        }
    }
}

/// Repository for the user-to-picnic attendance records
pub struct RegistrationRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> RegistrationRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    pub async fn list(&self, filter: &RegistrationFilter) -> Result<Vec<RegistrationResponse>> {
        let mut query = QueryBuilder::new(SELECT_REGISTRATION);
        query.push(" WHERE 1=1");

        if let Some(user_id) = filter.user_id {
            query.push(" AND pr.user_id = ");
            query.push_bind(user_id);
        }

        if let Some(picnic_id) = filter.picnic_id {
            query.push(" AND pr.picnic_id = ");
            query.push_bind(picnic_id);
        }

        query.push(" ORDER BY pr.id");

        let rows = query
            .build_query_as::<RegistrationRow>()
            .fetch_all(self.pool)
            .await?;

        Ok(rows.into_iter().map(RegistrationResponse::from).collect())
    }

    /// Register a user to a picnic. Registering twice returns the first registration.
    ///
    /// Fails with `InvalidReference` when either the user or the picnic is missing.
    pub async fn get_or_create(
        &self,
        req: &RegisterToPicnicRequest,
    ) -> Result<Upserted<RegistrationResponse>> {
        let mut tx = self.pool.begin().await?;

        if let Some(registration) = select_by_pair(&mut tx, req.user_id, req.picnic_id).await? {
            tx.commit().await?;
            return Ok(Upserted::existing(registration));
        }

        let (user_exists, picnic_exists): (bool, bool) = sqlx::query_as(
            r#"
            SELECT EXISTS(SELECT 1 FROM users WHERE id = $1),
                   EXISTS(SELECT 1 FROM picnics WHERE id = $2)
            "#,
        )
        .bind(req.user_id)
        .bind(req.picnic_id)
        .fetch_one(&mut *tx)
        .await?;

        if !user_exists {
            return Err(StorageError::InvalidReference(format!(
                "User with id {} does not exist",
                req.user_id
            )));
        }

        if !picnic_exists {
            return Err(StorageError::InvalidReference(format!(
                "Picnic with id {} does not exist",
                req.picnic_id
            )));
        }

        let inserted: Option<PicnicRegistration> = sqlx::query_as(
            r#"
            INSERT INTO picnic_registrations (user_id, picnic_id)
            VALUES ($1, $2)
            ON CONFLICT (user_id, picnic_id) DO NOTHING
            RETURNING id, user_id, picnic_id
            "#,
        )
        .bind(req.user_id)
        .bind(req.picnic_id)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| {
            StorageError::from(e).on_constraint("Registration references a missing user or picnic")
        })?;

        let registration = select_by_pair(&mut tx, req.user_id, req.picnic_id)
            .await?
            .ok_or(StorageError::NotFound)?;

        tx.commit().await?;

        let upserted = match inserted {
            Some(row) => {
                tracing::debug!(
                    registration_id = row.id,
                    user_id = row.user_id,
                    picnic_id = row.picnic_id,
                    "User registered to picnic"
                );
                Upserted::inserted(registration)
            }
            None => Upserted::existing(registration),
        };

        Ok(upserted)
    }
}

async fn select_by_pair(
    conn: &mut PgConnection,
    user_id: i32,
    picnic_id: i32,
) -> Result<Option<RegistrationResponse>> {
    let mut query = QueryBuilder::new(SELECT_REGISTRATION);
    query.push(" WHERE pr.user_id = ");
    query.push_bind(user_id);
    query.push(" AND pr.picnic_id = ");
    query.push_bind(picnic_id);

    let row = query
        .build_query_as::<RegistrationRow>()
        .fetch_optional(conn)
        .await?;

    Ok(row.map(RegistrationResponse::from))
}
