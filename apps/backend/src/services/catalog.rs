//! Catalog domain service.

use std::sync::Arc;

use crate::domain::catalog::{record_at, TechnologyRecord};
use crate::errors::domain::DomainError;
use crate::repos::catalog::CatalogSource;

/// Read-only accessor over the technology catalog.
#[derive(Clone)]
pub struct CatalogService {
    source: Arc<dyn CatalogSource>,
}

impl CatalogService {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self { source }
    }

    /// Total number of records.
    pub async fn count(&self) -> Result<usize, DomainError> {
        Ok(self.source.load().await?.len())
    }

    /// Image reference of the record at `index`.
    ///
    /// # Returns
    /// * `Err(DomainError::NotFound)` - when `index` is outside `[0, count)`
    pub async fn image_at(&self, index: i64) -> Result<String, DomainError> {
        Ok(self.record_at(index).await?.image_ref)
    }

    /// True name of the record at `index`. Never exposed through the reveal
    /// endpoint, only used to judge guesses.
    pub async fn name_at(&self, index: i64) -> Result<String, DomainError> {
        Ok(self.record_at(index).await?.name)
    }

    /// Whole record at `index`, from a single catalog read.
    pub async fn record_at(&self, index: i64) -> Result<TechnologyRecord, DomainError> {
        let records = self.source.load().await?;
        record_at(&records, index).cloned()
    }
}
