//! Stores whose every call fails the way an unreadable or unwritable file does.

use async_trait::async_trait;
use techguess::domain::{LedgerDocument, TechnologyRecord};
use techguess::errors::domain::{DomainError, InfraErrorKind};
use techguess::repos::catalog::CatalogSource;
use techguess::repos::scores::LedgerStore;

pub struct UnreadableCatalog;

#[async_trait]
impl CatalogSource for UnreadableCatalog {
    async fn load(&self) -> Result<Vec<TechnologyRecord>, DomainError> {
        Err(DomainError::infra(
            InfraErrorKind::StorageRead,
            "Error reading the file",
        ))
    }
}

pub struct UnreadableLedger;

#[async_trait]
impl LedgerStore for UnreadableLedger {
    async fn read_all(&self) -> Result<LedgerDocument, DomainError> {
        Err(DomainError::infra(
            InfraErrorKind::StorageRead,
            "Error reading the file",
        ))
    }

    async fn write_all(&self, _doc: &LedgerDocument) -> Result<(), DomainError> {
        Err(DomainError::infra(
            InfraErrorKind::StorageWrite,
            "Error writing the file",
        ))
    }
}

/// Readable but refuses writes.
pub struct ReadOnlyLedger {
    pub doc: LedgerDocument,
}

#[async_trait]
impl LedgerStore for ReadOnlyLedger {
    async fn read_all(&self) -> Result<LedgerDocument, DomainError> {
        Ok(self.doc.clone())
    }

    async fn write_all(&self, _doc: &LedgerDocument) -> Result<(), DomainError> {
        Err(DomainError::infra(
            InfraErrorKind::StorageWrite,
            "Error writing the file",
        ))
    }
}
