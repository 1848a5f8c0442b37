//! Score ledger backed by a single JSON document on disk.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tracing::info;

use crate::adapters::json_file::{read_document, write_document};
use crate::domain::ledger::LedgerDocument;
use crate::errors::domain::{DomainError, InfraErrorKind};
use crate::repos::scores::LedgerStore;

#[derive(Debug, Clone)]
pub struct JsonFileLedger {
    path: PathBuf,
}

impl JsonFileLedger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Create an empty `{ "scores": [] }` document when the file is absent.
    /// An existing file is left untouched.
    pub async fn bootstrap(&self) -> Result<(), DomainError> {
        let exists = tokio::fs::try_exists(&self.path).await.map_err(|e| {
            DomainError::infra(
                InfraErrorKind::StorageRead,
                format!("Cannot stat {}: {e}", self.path.display()),
            )
        })?;
        if !exists {
            info!(path = %self.path.display(), "creating empty score ledger");
            write_document(&self.path, &LedgerDocument::default()).await?;
        }
        Ok(())
    }
}

#[async_trait]
impl LedgerStore for JsonFileLedger {
    async fn read_all(&self) -> Result<LedgerDocument, DomainError> {
        read_document(&self.path).await
    }

    async fn write_all(&self, doc: &LedgerDocument) -> Result<(), DomainError> {
        write_document(&self.path, doc).await
    }
}
