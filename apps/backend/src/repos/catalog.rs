//! Catalog repository contract.

use async_trait::async_trait;

use crate::domain::catalog::TechnologyRecord;
use crate::errors::domain::DomainError;

/// Read access to the ordered technology catalog.
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// Load every record, in game order.
    async fn load(&self) -> Result<Vec<TechnologyRecord>, DomainError>;
}
