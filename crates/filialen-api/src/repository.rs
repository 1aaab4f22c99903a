//! # Filiaal Repository
//!
//! The data-access seam between the service and storage. [`FiliaalRepository`]
//! is implemented by [`crate::db::filialen::PgFiliaalRepository`] for
//! PostgreSQL and by [`InMemoryFiliaalRepository`] for development runs
//! without `DATABASE_URL` and for tests.

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use filialen_core::{Filiaal, FiliaalData, FiliaalId};
use parking_lot::RwLock;
use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

/// Failure inside a repository implementation.
#[derive(Error, Debug)]
pub enum RepositoryError {
    /// The database rejected or failed a query.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// A value does not fit the column it is stored in.
    #[error("value out of range for column {column}")]
    OutOfRange { column: &'static str },
}

/// Basic create/read/update/delete over stored branch offices.
#[async_trait]
pub trait FiliaalRepository: Send + Sync {
    /// Fetch one record. Absence is `Ok(None)`, not an error.
    async fn find_by_id(&self, id: FiliaalId) -> Result<Option<Filiaal>, RepositoryError>;

    /// Fetch every record, ordered by id.
    async fn find_all(&self) -> Result<Vec<Filiaal>, RepositoryError>;

    /// Insert a record and return it with its newly assigned id.
    async fn create(&self, data: FiliaalData) -> Result<Filiaal, RepositoryError>;

    /// Overwrite every field of the record with the same id.
    ///
    /// Returns `false` when no record had that id; nothing is inserted.
    async fn update(&self, filiaal: &Filiaal) -> Result<bool, RepositoryError>;

    /// Remove the record if present. Removing an absent id is not an error.
    async fn delete(&self, id: FiliaalId) -> Result<(), RepositoryError>;

    /// Check that the backing store is reachable.
    async fn health_check(&self) -> Result<(), RepositoryError> {
        Ok(())
    }
}

// -- In-memory implementation -------------------------------------------------

/// Maximum characters of `naam` and `gemeente` (`VARCHAR(50)`).
const TEXT_COLUMN_LENGTH: usize = 50;
/// Fractional digits kept for `omzet` (`NUMERIC(10,2)`).
const OMZET_SCALE: u32 = 2;
/// Integer digits allowed for `omzet` (`NUMERIC(10,2)`).
const OMZET_INTEGER_DIGITS: u32 = 8;

/// Apply the `filialen` table's column rules the way PostgreSQL does:
/// text is length-checked, `omzet` is rounded half away from zero to two
/// decimals and must then fit eight integer digits.
fn to_row(
    id: FiliaalId,
    naam: &str,
    gemeente: &str,
    omzet: Decimal,
) -> Result<Filiaal, RepositoryError> {
    for (column, value) in [("naam", naam), ("gemeente", gemeente)] {
        if value.chars().count() > TEXT_COLUMN_LENGTH {
            return Err(RepositoryError::OutOfRange { column });
        }
    }

    let mut omzet =
        omzet.round_dp_with_strategy(OMZET_SCALE, RoundingStrategy::MidpointAwayFromZero);
    if omzet.abs() >= Decimal::from(10_i64.pow(OMZET_INTEGER_DIGITS)) {
        return Err(RepositoryError::OutOfRange { column: "omzet" });
    }
    omzet.rescale(OMZET_SCALE);

    Ok(Filiaal::from_parts(
        id,
        naam.to_string(),
        gemeente.to_string(),
        omzet,
    ))
}

#[derive(Debug)]
struct Table {
    rows: BTreeMap<FiliaalId, Filiaal>,
    next_id: i64,
}

/// Thread-safe, cloneable in-memory table of branch offices.
///
/// Ids are assigned from a counter starting at 1 and are never reused,
/// mirroring an auto-increment column. Stored values follow the same column
/// rules as the `filialen` table. The lock is `parking_lot`, never held
/// across an `.await`.
#[derive(Debug, Clone)]
pub struct InMemoryFiliaalRepository {
    table: Arc<RwLock<Table>>,
}

impl InMemoryFiliaalRepository {
    /// Create an empty table.
    pub fn new() -> Self {
        Self {
            table: Arc::new(RwLock::new(Table {
                rows: BTreeMap::new(),
                next_id: 1,
            })),
        }
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.table.read().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryFiliaalRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FiliaalRepository for InMemoryFiliaalRepository {
    async fn find_by_id(&self, id: FiliaalId) -> Result<Option<Filiaal>, RepositoryError> {
        Ok(self.table.read().rows.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Filiaal>, RepositoryError> {
        Ok(self.table.read().rows.values().cloned().collect())
    }

    async fn create(&self, data: FiliaalData) -> Result<Filiaal, RepositoryError> {
        let mut table = self.table.write();
        let id = FiliaalId::new(table.next_id);
        let filiaal = to_row(id, data.naam(), data.gemeente(), data.omzet())?;
        table.next_id += 1;
        table.rows.insert(id, filiaal.clone());
        Ok(filiaal)
    }

    async fn update(&self, filiaal: &Filiaal) -> Result<bool, RepositoryError> {
        let mut table = self.table.write();
        match table.rows.get_mut(&filiaal.id()) {
            Some(row) => {
                *row = to_row(
                    filiaal.id(),
                    filiaal.naam(),
                    filiaal.gemeente(),
                    filiaal.omzet(),
                )?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete(&self, id: FiliaalId) -> Result<(), RepositoryError> {
        self.table.write().rows.remove(&id);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn data(naam: &str) -> FiliaalData {
        FiliaalData::new(
            Some(naam.to_string()),
            Some("Brussel".to_string()),
            Some(Decimal::new(1000, 0)),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn create_assigns_increasing_ids() {
        let repo = InMemoryFiliaalRepository::new();
        let a = repo.create(data("a")).await.unwrap();
        let b = repo.create(data("b")).await.unwrap();
        assert_eq!(a.id(), FiliaalId::new(1));
        assert_eq!(b.id(), FiliaalId::new(2));
        assert_eq!(repo.len(), 2);
    }

    #[tokio::test]
    async fn ids_are_not_reused_after_delete() {
        let repo = InMemoryFiliaalRepository::new();
        let a = repo.create(data("a")).await.unwrap();
        repo.delete(a.id()).await.unwrap();
        let b = repo.create(data("b")).await.unwrap();
        assert_ne!(a.id(), b.id());
    }

    #[tokio::test]
    async fn find_by_id_round_trips_and_misses() {
        let repo = InMemoryFiliaalRepository::new();
        let a = repo.create(data("a")).await.unwrap();
        assert_eq!(repo.find_by_id(a.id()).await.unwrap(), Some(a));
        assert_eq!(repo.find_by_id(FiliaalId::new(-1)).await.unwrap(), None);
    }

    #[tokio::test]
    async fn find_all_is_ordered_by_id() {
        let repo = InMemoryFiliaalRepository::new();
        for naam in ["c", "a", "b"] {
            repo.create(data(naam)).await.unwrap();
        }
        let ids: Vec<i64> = repo
            .find_all()
            .await
            .unwrap()
            .iter()
            .map(|f| f.id().get())
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn update_replaces_existing_record() {
        let repo = InMemoryFiliaalRepository::new();
        let a = repo.create(data("a")).await.unwrap();
        let replacement = data("z").with_id(a.id());
        assert!(repo.update(&replacement).await.unwrap());
        assert_eq!(repo.find_by_id(a.id()).await.unwrap(), Some(replacement));
    }

    #[tokio::test]
    async fn update_of_absent_id_inserts_nothing() {
        let repo = InMemoryFiliaalRepository::new();
        let ghost = data("ghost").with_id(FiliaalId::new(99));
        assert!(!repo.update(&ghost).await.unwrap());
        assert!(repo.is_empty());
    }

    fn with_omzet(omzet: &str) -> FiliaalData {
        FiliaalData::new(
            Some("Andros".to_string()),
            Some("Brussel".to_string()),
            Some(Decimal::from_str(omzet).unwrap()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn create_rounds_omzet_to_two_decimals() {
        let repo = InMemoryFiliaalRepository::new();
        for (input, stored) in [
            ("2500.555", "2500.56"),
            ("2500.554", "2500.55"),
            ("2500.5", "2500.50"),
            ("7", "7.00"),
        ] {
            let created = repo.create(with_omzet(input)).await.unwrap();
            assert_eq!(created.omzet().to_string(), stored, "input {input}");
            let found = repo.find_by_id(created.id()).await.unwrap().unwrap();
            assert_eq!(found.omzet().to_string(), stored);
        }
    }

    #[tokio::test]
    async fn create_rejects_omzet_beyond_ten_digits() {
        let repo = InMemoryFiliaalRepository::new();
        for input in ["100000000", "99999999.995", "1234567890123456789"] {
            let err = repo.create(with_omzet(input)).await.unwrap_err();
            assert!(
                matches!(err, RepositoryError::OutOfRange { column: "omzet" }),
                "input {input}: {err}"
            );
        }
        assert!(repo.is_empty());
        let largest = repo.create(with_omzet("99999999.994")).await.unwrap();
        assert_eq!(largest.omzet().to_string(), "99999999.99");
        assert_eq!(largest.id(), FiliaalId::new(1));
    }

    #[tokio::test]
    async fn create_rejects_text_longer_than_column() {
        let repo = InMemoryFiliaalRepository::new();
        let long = FiliaalData::new(
            Some("x".repeat(51)),
            Some("Brussel".to_string()),
            Some(Decimal::ONE),
        )
        .unwrap();
        let err = repo.create(long).await.unwrap_err();
        assert!(matches!(err, RepositoryError::OutOfRange { column: "naam" }));
        let fits = FiliaalData::new(
            Some("é".repeat(50)),
            Some("Brussel".to_string()),
            Some(Decimal::ONE),
        )
        .unwrap();
        repo.create(fits).await.unwrap();
    }

    #[tokio::test]
    async fn update_applies_column_rules() {
        let repo = InMemoryFiliaalRepository::new();
        let a = repo.create(data("a")).await.unwrap();

        assert!(repo
            .update(&with_omzet("0.005").with_id(a.id()))
            .await
            .unwrap());
        let found = repo.find_by_id(a.id()).await.unwrap().unwrap();
        assert_eq!(found.omzet().to_string(), "0.01");

        let err = repo
            .update(&with_omzet("1234567890123456789").with_id(a.id()))
            .await
            .unwrap_err();
        assert!(matches!(err, RepositoryError::OutOfRange { column: "omzet" }));
        let unchanged = repo.find_by_id(a.id()).await.unwrap().unwrap();
        assert_eq!(unchanged.omzet().to_string(), "0.01");
    }

    #[tokio::test]
    async fn delete_of_absent_id_succeeds() {
        let repo = InMemoryFiliaalRepository::new();
        repo.delete(FiliaalId::new(12345)).await.unwrap();
        assert!(repo.is_empty());
    }

    #[tokio::test]
    async fn clones_share_the_same_table() {
        let repo = InMemoryFiliaalRepository::new();
        let clone = repo.clone();
        clone.create(data("a")).await.unwrap();
        assert_eq!(repo.len(), 1);
    }
}
