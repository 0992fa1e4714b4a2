use sqlx::{PgConnection, PgPool, QueryBuilder};

use crate::dto::city::CityFilter;
use crate::error::{Result, StorageError};
use crate::models::City;
use crate::repository::Upserted;

/// Repository for City database operations
pub struct CityRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CityRepository<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List cities, optionally narrowed to an exact name
    pub async fn list(&self, filter: &CityFilter) -> Result<Vec<City>> {
        let mut query = QueryBuilder::new("SELECT id, name FROM cities WHERE 1=1");

        if let Some(ref name) = filter.q {
            query.push(" AND name = ");
            query.push_bind(name);
        }

        query.push(" ORDER BY id");

        let cities = query.build_query_as::<City>().fetch_all(self.pool).await?;

        Ok(cities)
    }

    /// Return the city called `name`, inserting it first when it does not exist yet
    pub async fn get_or_create(&self, name: &str) -> Result<Upserted<City>> {
        let mut tx = self.pool.begin().await?;

        if let Some(city) = select_by_name(&mut tx, name).await? {
            tx.commit().await?;
            return Ok(Upserted::existing(city));
        }

        let inserted = sqlx::query_as::<_, City>(
            r#"
            INSERT INTO cities (name)
            VALUES ($1)
            ON CONFLICT (name) DO NOTHING
            RETURNING id, name
            "#,
        )
        .bind(name)
        .fetch_optional(&mut *tx)
        .await?;

        // A concurrent request may have won the insert; its row is visible now.
        let upserted = match inserted {
            Some(city) => Upserted::inserted(city),
            None => Upserted::existing(
                select_by_name(&mut tx, name)
                    .await?
                    .ok_or(StorageError::NotFound)?,
            ),
        };

        tx.commit().await?;

        if upserted.created {
            tracing::debug!(city_id = upserted.value.id, name, "City created");
        }

        Ok(upserted)
    }
}

async fn select_by_name(conn: &mut PgConnection, name: &str) -> Result<Option<City>> {
    let city = sqlx::query_as::<_, City>("SELECT id, name FROM cities WHERE name = $1")
        .bind(name)
        .fetch_optional(conn)
        .await?;

    Ok(city)
}
