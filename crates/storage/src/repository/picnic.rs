use std::collections::HashMap;

use chrono::NaiveDateTime;
use sqlx::{FromRow, PgConnection, PgPool, Postgres, QueryBuilder};

use crate::dto::picnic::{
    CreatePicnicRequest, PicnicDetailResponse, PicnicListFilter, PicnicResponse,
};
use crate::dto::user::UserResponse;
use crate::error::{Result, StorageError};
use crate::models::Picnic;
use crate::repository::Upserted;

#[derive(FromRow)]
struct PicnicRow {
    id: i32,
    city: String,
    time: NaiveDateTime,
}

impl From<PicnicRow> for PicnicResponse {
    fn from(row: PicnicRow) -> Self {
        Self {
            id: row.id,
            city: row.city,
            time: row.time,
        }
    }
}

#[derive(FromRow)]
struct AttendeeRow {
    picnic_id: i32,
    id: i32,
    name: String,
    surname: String,
    age: i32,
}

/// Repository for Picnic database operations
pub struct PicnicRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> PicnicRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List picnics with their attendees.
    ///
    /// `now` is the reference point for `past = false`: picnics strictly before
    /// it are left out.
    pub async fn list_detailed(
        &self,
        filter: &PicnicListFilter,
        now: NaiveDateTime,
    ) -> Result<Vec<PicnicDetailResponse>> {
        let picnics = list_query(filter, now)
            .build_query_as::<PicnicRow>()
            .fetch_all(self.pool)
            .await?;

        if picnics.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i32> = picnics.iter().map(|p| p.id).collect();

        let attendees = sqlx::query_as::<_, AttendeeRow>(
            r#"
            SELECT pr.picnic_id, u.id, u.name, u.surname, u.age
            FROM picnic_registrations pr
            INNER JOIN users u ON u.id = pr.user_id
            WHERE pr.picnic_id = ANY($1)
            ORDER BY pr.id
            "#,
        )
        .bind(&ids)
        .fetch_all(self.pool)
        .await?;

        let mut users_by_picnic: HashMap<i32, Vec<UserResponse>> = HashMap::new();
        for row in attendees {
            users_by_picnic
                .entry(row.picnic_id)
                .or_default()
                .push(UserResponse {
                    id: row.id,
                    name: row.name,
                    surname: row.surname,
                    age: row.age,
                });
        }

        Ok(picnics
            .into_iter()
            .map(|p| PicnicDetailResponse {
                users: users_by_picnic.remove(&p.id).unwrap_or_default(),
                id: p.id,
                city: p.city,
                time: p.time,
            })
            .collect())
    }

    /// Return the picnic for (city, time), scheduling it first when absent.
    ///
    /// Fails with `InvalidReference` when the city does not exist.
    pub async fn get_or_create(&self, req: &CreatePicnicRequest) -> Result<Upserted<PicnicResponse>> {
        let mut tx = self.pool.begin().await?;

        if let Some(picnic) = select_by_key(&mut tx, req).await? {
            tx.commit().await?;
            return Ok(Upserted::existing(picnic));
        }

        let city_exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM cities WHERE id = $1)")
                .bind(req.city_id)
                .fetch_one(&mut *tx)
                .await?;

        if !city_exists {
            return Err(StorageError::InvalidReference(format!(
                "City with id {} does not exist",
                req.city_id
            )));
        }

        let inserted: Option<Picnic> = sqlx::query_as(
            r#"
            INSERT INTO picnics (city_id, time)
            VALUES ($1, $2)
            ON CONFLICT (city_id, time) DO NOTHING
            RETURNING id, city_id, time
            "#,
        )
        .bind(req.city_id)
        .bind(req.time)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|e| StorageError::from(e).on_constraint("Picnic references a missing city"))?;

        let upserted = match inserted {
            Some(picnic) => Upserted::inserted(
                select_by_id(&mut tx, picnic.id)
                    .await?
                    .ok_or(StorageError::NotFound)?,
            ),
            None => Upserted::existing(
                select_by_key(&mut tx, req)
                    .await?
                    .ok_or(StorageError::NotFound)?,
            ),
        };

        tx.commit().await?;

        if upserted.created {
            tracing::debug!(picnic_id = upserted.value.id, city_id = req.city_id, "Picnic created");
        }

        Ok(upserted)
    }
}

fn list_query(filter: &PicnicListFilter, now: NaiveDateTime) -> QueryBuilder<'static, Postgres> {
    let mut query = QueryBuilder::new(
        r#"
        SELECT p.id, c.name AS city, p.time
        FROM picnics p
        INNER JOIN cities c ON c.id = p.city_id
        WHERE 1=1
        "#,
    );

    if let Some(datetime) = filter.datetime {
        query.push(" AND p.time = ");
        query.push_bind(datetime);
    }

    if !filter.past {
        query.push(" AND p.time >= ");
        query.push_bind(now);
    }

    query.push(" ORDER BY p.time, p.id");

    query
}

async fn select_by_id(conn: &mut PgConnection, id: i32) -> Result<Option<PicnicResponse>> {
    let row = sqlx::query_as::<_, PicnicRow>(
        r#"
        SELECT p.id, c.name AS city, p.time
        FROM picnics p
        INNER JOIN cities c ON c.id = p.city_id
        WHERE p.id = $1
        "#,
    )
    .bind(id)
    .fetch_optional(conn)
    .await?;

    Ok(row.map(PicnicResponse::from))
}

async fn select_by_key(
    conn: &mut PgConnection,
    req: &CreatePicnicRequest,
) -> Result<Option<PicnicResponse>> {
    let row = sqlx::query_as::<_, PicnicRow>(
        r#"
        SELECT p.id, c.name AS city, p.time
        FROM picnics p
        INNER JOIN cities c ON c.id = p.city_id
        WHERE p.city_id = $1 AND p.time = $2
        "#,
    )
    .bind(req.city_id)
    .bind(req.time)
    .fetch_optional(conn)
    .await?;

    Ok(row.map(PicnicResponse::from))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 7, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_list_query_without_filters() {
        let query = list_query(&PicnicListFilter::default(), noon());
        let sql = query.sql();
        assert!(!sql.contains("p.time ="));
        assert!(!sql.contains("p.time >="));
        assert!(sql.trim_end().ends_with("ORDER BY p.time, p.id"));
    }

    #[test]
    fn test_list_query_excludes_past_picnics() {
        let filter = PicnicListFilter {
            datetime: None,
            past: false,
        };
        let query = list_query(&filter, noon());
        assert!(query.sql().contains("AND p.time >= $1"));
    }

    #[test]
    fn test_list_query_combines_filters() {
        let filter = PicnicListFilter {
            datetime: Some(noon()),
            past: false,
        };
        let query = list_query(&filter, noon());
        let sql = query.sql();
        assert!(sql.contains("AND p.time = $1"));
        assert!(sql.contains("AND p.time >= $2"));
    }
}
