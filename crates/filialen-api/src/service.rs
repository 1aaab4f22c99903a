//! # Filiaal Service
//!
//! Thin business layer between the HTTP handlers and the repository. It adds
//! no rules of its own: reads return optional values, deletes are
//! unconditional, and records pass through unchanged.

use std::sync::Arc;

use filialen_core::{Filiaal, FiliaalData, FiliaalId};

use crate::repository::{FiliaalRepository, RepositoryError};

/// Cloneable handle over a shared repository.
#[derive(Clone)]
pub struct FiliaalService {
    repository: Arc<dyn FiliaalRepository>,
}

impl FiliaalService {
    pub fn new(repository: Arc<dyn FiliaalRepository>) -> Self {
        Self { repository }
    }

    pub async fn find_by_id(&self, id: FiliaalId) -> Result<Option<Filiaal>, RepositoryError> {
        let found = self.repository.find_by_id(id).await?;
        tracing::debug!(filiaal_id = %id, found = found.is_some(), "looked up filiaal");
        Ok(found)
    }

    pub async fn find_all(&self) -> Result<Vec<Filiaal>, RepositoryError> {
        self.repository.find_all().await
    }

    /// Persist a new branch and return it with its assigned id.
    pub async fn create(&self, data: FiliaalData) -> Result<Filiaal, RepositoryError> {
        let filiaal = self.repository.create(data).await?;
        tracing::info!(filiaal_id = %filiaal.id(), "filiaal created");
        Ok(filiaal)
    }

    /// Replace the stored record carrying `filiaal.id()`.
    ///
    /// An id with no stored record is left absent; the call still succeeds.
    pub async fn update(&self, filiaal: &Filiaal) -> Result<(), RepositoryError> {
        let replaced = self.repository.update(filiaal).await?;
        if replaced {
            tracing::info!(filiaal_id = %filiaal.id(), "filiaal updated");
        } else {
            tracing::debug!(filiaal_id = %filiaal.id(), "update matched no filiaal");
        }
        Ok(())
    }

    pub async fn delete(&self, id: FiliaalId) -> Result<(), RepositoryError> {
        self.repository.delete(id).await?;
        tracing::info!(filiaal_id = %id, "filiaal deleted");
        Ok(())
    }

    /// Check the backing store for the readiness endpoint.
    pub async fn health_check(&self) -> Result<(), RepositoryError> {
        self.repository.health_check().await
    }
}
