//! Filiaal persistence operations on the `filialen` table.

use async_trait::async_trait;
use filialen_core::{Filiaal, FiliaalData, FiliaalId};
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::repository::{FiliaalRepository, RepositoryError};

/// [`FiliaalRepository`] backed by a PostgreSQL pool.
#[derive(Debug, Clone)]
pub struct PgFiliaalRepository {
    pool: PgPool,
}

impl PgFiliaalRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl FiliaalRepository for PgFiliaalRepository {
    async fn find_by_id(&self, id: FiliaalId) -> Result<Option<Filiaal>, RepositoryError> {
        let row = sqlx::query_as::<_, FiliaalRow>(
            "SELECT id, naam, gemeente, omzet FROM filialen WHERE id = $1",
        )
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(FiliaalRow::into_filiaal))
    }

    async fn find_all(&self) -> Result<Vec<Filiaal>, RepositoryError> {
        let rows = sqlx::query_as::<_, FiliaalRow>(
            "SELECT id, naam, gemeente, omzet FROM filialen ORDER BY id",
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(FiliaalRow::into_filiaal).collect())
    }

    async fn create(&self, data: FiliaalData) -> Result<Filiaal, RepositoryError> {
        let row = sqlx::query_as::<_, FiliaalRow>(
            "INSERT INTO filialen (naam, gemeente, omzet) VALUES ($1, $2, $3) \
             RETURNING id, naam, gemeente, omzet",
        )
        .bind(data.naam())
        .bind(data.gemeente())
        .bind(data.omzet())
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_filiaal())
    }

    async fn update(&self, filiaal: &Filiaal) -> Result<bool, RepositoryError> {
        let result = sqlx::query(
            "UPDATE filialen SET naam = $1, gemeente = $2, omzet = $3 WHERE id = $4",
        )
        .bind(filiaal.naam())
        .bind(filiaal.gemeente())
        .bind(filiaal.omzet())
        .bind(filiaal.id().get())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: FiliaalId) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM filialen WHERE id = $1")
            .bind(id.get())
            .execute(&self.pool)
            .await?;
        Ok(())
    }

    async fn health_check(&self) -> Result<(), RepositoryError> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}

/// Internal row type for SQLx mapping.
#[derive(sqlx::FromRow)]
struct FiliaalRow {
    id: i64,
    naam: String,
    gemeente: String,
    omzet: Decimal,
}

impl FiliaalRow {
    fn into_filiaal(self) -> Filiaal {
        Filiaal::from_parts(FiliaalId::new(self.id), self.naam, self.gemeente, self.omzet)
    }
}
