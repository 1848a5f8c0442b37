//! Score ledger repository contract.

use async_trait::async_trait;

use crate::domain::ledger::LedgerDocument;
use crate::errors::domain::DomainError;

/// Read-all / write-all access to the score ledger document.
///
/// There is no locking between a `read_all` and the following `write_all`;
/// two writers interleaving on the same document lose one update.
#[async_trait]
pub trait LedgerStore: Send + Sync {
    async fn read_all(&self) -> Result<LedgerDocument, DomainError>;

    async fn write_all(&self, doc: &LedgerDocument) -> Result<(), DomainError>;
}
