use std::sync::Arc;

use tracing::info;

use crate::adapters::{InMemoryCatalog, InMemoryLedger, JsonFileCatalog, JsonFileLedger};
use crate::config::data::DataPaths;
use crate::error::AppError;
use crate::repos::catalog::CatalogSource;
use crate::repos::scores::LedgerStore;
use crate::state::app_state::AppState;

/// Builder for creating AppState instances (used in both tests and main)
#[derive(Default)]
pub struct StateBuilder {
    data_paths: Option<DataPaths>,
    catalog: Option<Arc<dyn CatalogSource>>,
    ledger: Option<Arc<dyn LedgerStore>>,
}

impl StateBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back both stores with the JSON files at `paths`. Stores injected with
    /// [`with_catalog`](Self::with_catalog) or [`with_ledger`](Self::with_ledger)
    /// take precedence.
    pub fn with_data(mut self, paths: DataPaths) -> Self {
        self.data_paths = Some(paths);
        self
    }

    pub fn with_catalog(mut self, catalog: Arc<dyn CatalogSource>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    pub fn with_ledger(mut self, ledger: Arc<dyn LedgerStore>) -> Self {
        self.ledger = Some(ledger);
        self
    }

    /// Without data paths or injected stores the state runs on an empty
    /// in-memory catalog and ledger.
    pub async fn build(self) -> Result<AppState, AppError> {
        let (file_catalog, file_ledger) = match self.data_paths {
            Some(paths) => {
                let ledger = JsonFileLedger::new(&paths.scores);
                ledger.bootstrap().await?;
                info!(
                    catalog = %paths.catalog.display(),
                    scores = %paths.scores.display(),
                    "using file-backed data"
                );
                (
                    Some(Arc::new(JsonFileCatalog::new(&paths.catalog)) as Arc<dyn CatalogSource>),
                    Some(Arc::new(ledger) as Arc<dyn LedgerStore>),
                )
            }
            None => (None, None),
        };

        let catalog = self
            .catalog
            .or(file_catalog)
            .unwrap_or_else(|| Arc::new(InMemoryCatalog::default()) as Arc<dyn CatalogSource>);
        let ledger = self
            .ledger
            .or(file_ledger)
            .unwrap_or_else(|| Arc::new(InMemoryLedger::default()) as Arc<dyn LedgerStore>);

        Ok(AppState::new(catalog, ledger))
    }
}

pub fn build_state() -> StateBuilder {
    StateBuilder::new()
}
