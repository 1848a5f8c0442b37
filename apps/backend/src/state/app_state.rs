use std::sync::Arc;

use crate::adapters::memory::{InMemoryCatalog, InMemoryLedger};
use crate::domain::catalog::TechnologyRecord;
use crate::domain::ledger::LedgerDocument;
use crate::repos::catalog::CatalogSource;
use crate::repos::scores::LedgerStore;
use crate::services::{CatalogService, GuessService, ScoreLedger};

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Technology catalog source
    pub catalog: Arc<dyn CatalogSource>,
    /// Score ledger storage
    pub ledger: Arc<dyn LedgerStore>,
}

impl AppState {
    pub fn new(catalog: Arc<dyn CatalogSource>, ledger: Arc<dyn LedgerStore>) -> Self {
        Self { catalog, ledger }
    }

    /// State over in-memory stores seeded with `records` and `doc`.
    pub fn in_memory(records: Vec<TechnologyRecord>, doc: LedgerDocument) -> Self {
        Self::new(
            Arc::new(InMemoryCatalog::new(records)),
            Arc::new(InMemoryLedger::new(doc)),
        )
    }

    pub fn catalog_service(&self) -> CatalogService {
        CatalogService::new(self.catalog.clone())
    }

    pub fn score_ledger(&self) -> ScoreLedger {
        ScoreLedger::new(self.ledger.clone())
    }

    pub fn guess_service(&self) -> GuessService {
        GuessService::new(self.catalog_service(), self.score_ledger())
    }
}
