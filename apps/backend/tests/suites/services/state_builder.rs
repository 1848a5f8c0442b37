use std::sync::Arc;

use serde_json::json;
use techguess::adapters::{InMemoryCatalog, InMemoryLedger};
use techguess::config::DataPaths;
use techguess::infra::state::build_state;
use techguess::repos::catalog::CatalogSource;
use techguess::repos::scores::LedgerStore;
use techguess_test_support::TempDataDir;

use crate::support::fixtures::{go_catalog, sample_catalog_json};

#[tokio::test]
async fn default_state_is_empty_and_in_memory() {
    let state = build_state().build().await.unwrap();

    assert_eq!(state.catalog_service().count().await.unwrap(), 0);
    assert!(state.score_ledger().get("").await.unwrap().is_fallback());
}

#[tokio::test]
async fn file_paths_back_the_state() {
    let data = TempDataDir::seeded(&sample_catalog_json(), &json!({ "scores": [] }));

    let state = build_state()
        .with_data(DataPaths::in_dir(data.path()))
        .build()
        .await
        .unwrap();

    assert_eq!(state.catalog_service().count().await.unwrap(), 3);
}

#[tokio::test]
async fn injected_catalog_wins_over_files() {
    let data = TempDataDir::seeded(&sample_catalog_json(), &json!({ "scores": [] }));
    let ledger = Arc::new(InMemoryLedger::default());

    let state = build_state()
        .with_data(DataPaths::in_dir(data.path()))
        .with_catalog(Arc::new(InMemoryCatalog::new(go_catalog())) as Arc<dyn CatalogSource>)
        .with_ledger(ledger.clone() as Arc<dyn LedgerStore>)
        .build()
        .await
        .unwrap();

    assert_eq!(state.catalog_service().count().await.unwrap(), 1);
    state.guess_service().submit(0, "go", "Alice").await.unwrap();
    assert_eq!(ledger.snapshot().scores.len(), 1);
    assert_eq!(data.read_scores(), json!({ "scores": [] }));
}
