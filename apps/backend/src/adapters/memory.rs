//! In-memory stores for tests and demos.

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::catalog::TechnologyRecord;
use crate::domain::ledger::LedgerDocument;
use crate::errors::domain::DomainError;
use crate::repos::catalog::CatalogSource;
use crate::repos::scores::LedgerStore;

#[derive(Debug, Clone, Default)]
pub struct InMemoryCatalog {
    records: Vec<TechnologyRecord>,
}

impl InMemoryCatalog {
    pub fn new(records: Vec<TechnologyRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl CatalogSource for InMemoryCatalog {
    async fn load(&self) -> Result<Vec<TechnologyRecord>, DomainError> {
        Ok(self.records.clone())
    }
}

/// Ledger held in a mutex. Reads hand out a copy, so callers keep the same
/// read/modify/write shape as with the file store.
#[derive(Debug, Default)]
pub struct InMemoryLedger {
    doc: Mutex<LedgerDocument>,
}

impl InMemoryLedger {
    pub fn new(doc: LedgerDocument) -> Self {
        Self {
            doc: Mutex::new(doc),
        }
    }

    pub fn snapshot(&self) -> LedgerDocument {
        self.doc.lock().clone()
    }
}

#[async_trait]
impl LedgerStore for InMemoryLedger {
    async fn read_all(&self) -> Result<LedgerDocument, DomainError> {
        Ok(self.doc.lock().clone())
    }

    async fn write_all(&self, doc: &LedgerDocument) -> Result<(), DomainError> {
        *self.doc.lock() = doc.clone();
        Ok(())
    }
}
