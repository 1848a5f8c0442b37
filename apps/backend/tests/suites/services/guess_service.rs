use std::sync::Arc;

use techguess::adapters::InMemoryCatalog;
use techguess::domain::LedgerDocument;
use techguess::repos::catalog::CatalogSource;
use techguess::repos::scores::LedgerStore;
use techguess::services::{CatalogService, GuessService, ScoreLedger};

use crate::support::failing_store::ReadOnlyLedger;
use crate::support::fixtures::{entry, go_catalog, memory_state, sample_catalog};

#[tokio::test]
async fn alice_guessing_go_scores_five() {
    let (state, ledger) = memory_state(go_catalog(), vec![]);

    let outcome = state.guess_service().submit(0, "go", "Alice").await.unwrap();

    assert!(outcome.is_correct);
    assert_eq!(outcome.technology_name, "Go");
    assert_eq!(outcome.delta, 5);
    assert_eq!(ledger.snapshot().scores, vec![entry("Alice", 5)]);
}

#[tokio::test]
async fn names_with_spaces_never_match() {
    let (state, ledger) = memory_state(
        vec![crate::support::fixtures::record(
            "Visual Studio Code",
            "vscode.png",
            3,
        )],
        vec![],
    );

    let outcome = state
        .guess_service()
        .submit(0, "Visual Studio Code", "Alice")
        .await
        .unwrap();

    assert!(!outcome.is_correct);
    assert_eq!(ledger.snapshot().scores, vec![entry("Alice", 0)]);
}

#[tokio::test]
async fn players_accumulate_independently() {
    let (state, ledger) = memory_state(sample_catalog(), vec![]);
    let guesses = state.guess_service();

    guesses.submit(0, "Go", "Alice").await.unwrap();
    guesses.submit(0, "Java", "Bob").await.unwrap();
    guesses.submit(2, "rust", "Alice").await.unwrap();
    guesses.submit(1, "html 5", "Bob").await.unwrap();

    assert_eq!(
        ledger.snapshot().scores,
        vec![entry("Alice", 13), entry("Bob", 2)]
    );
}

#[tokio::test]
async fn catalog_accessors_agree_on_bounds() {
    let (state, _) = memory_state(sample_catalog(), vec![]);
    let catalog = state.catalog_service();

    assert_eq!(catalog.count().await.unwrap(), 3);
    assert_eq!(catalog.image_at(1).await.unwrap(), "html5.png");
    assert_eq!(catalog.name_at(1).await.unwrap(), "HTML5");
    assert!(catalog.image_at(3).await.unwrap_err().is_not_found());
    assert!(catalog.name_at(3).await.unwrap_err().is_not_found());
    assert!(catalog.name_at(-1).await.unwrap_err().is_not_found());
}

#[tokio::test]
async fn write_failure_surfaces_after_judging() {
    let catalog = CatalogService::new(
        Arc::new(InMemoryCatalog::new(go_catalog())) as Arc<dyn CatalogSource>,
    );
    let ledger = ScoreLedger::new(Arc::new(ReadOnlyLedger {
        doc: LedgerDocument::default(),
    }) as Arc<dyn LedgerStore>);

    let err = GuessService::new(catalog, ledger)
        .submit(0, "go", "Alice")
        .await
        .unwrap_err();

    assert!(!err.is_not_found());
    assert!(err.to_string().contains("Error writing the file"));
}
