use std::sync::Arc;

use serde_json::json;
use techguess::adapters::JsonFileLedger;
use techguess::domain::ScoresView;
use techguess::repos::scores::LedgerStore;
use techguess::services::ScoreLedger;
use techguess_test_support::TempDataDir;

use crate::support::fixtures::entry;

async fn file_ledger(data: &TempDataDir) -> ScoreLedger {
    let store = JsonFileLedger::new(data.scores_path());
    store.bootstrap().await.unwrap();
    ScoreLedger::new(Arc::new(store) as Arc<dyn LedgerStore>)
}

#[tokio::test]
async fn zero_delta_creates_entry_on_disk() {
    let data = TempDataDir::new();
    let ledger = file_ledger(&data).await;

    let saved = ledger.record_outcome("Alice", 0).await.unwrap();

    assert_eq!(saved, entry("Alice", 0));
    assert_eq!(
        data.read_scores(),
        json!({ "scores": [{ "playerName": "Alice", "value": 0 }] })
    );
}

#[tokio::test]
async fn existing_entry_gains_delta() {
    let data = TempDataDir::new();
    data.write_scores(&json!({ "scores": [
        { "playerName": "Bob", "value": 1 },
        { "playerName": "Alice", "value": 3 }
    ] }));
    let ledger = file_ledger(&data).await;

    let saved = ledger.record_outcome("Alice", 4).await.unwrap();

    assert_eq!(saved, entry("Alice", 7));
    assert_eq!(
        data.read_scores(),
        json!({ "scores": [
            { "playerName": "Bob", "value": 1 },
            { "playerName": "Alice", "value": 7 }
        ] })
    );
}

#[tokio::test]
async fn lookups_fall_back_to_whole_ledger() {
    let data = TempDataDir::new();
    data.write_scores(&json!({ "scores": [{ "playerName": "Bob", "value": 1 }] }));
    let ledger = file_ledger(&data).await;

    let found = ledger.get("Bob").await.unwrap();
    assert_eq!(found, ScoresView::Player(vec![entry("Bob", 1)]));

    for name in ["", "Nobody"] {
        let view = ledger.get(name).await.unwrap();
        assert!(view.is_fallback(), "{name:?} should fall back");
        assert_eq!(view.display_value(), Some(1));
    }
}

#[tokio::test]
async fn bootstrap_keeps_existing_scores() {
    let data = TempDataDir::new();
    data.write_scores(&json!({ "scores": [{ "playerName": "Bob", "value": 9 }] }));

    let store = JsonFileLedger::new(data.scores_path());
    store.bootstrap().await.unwrap();

    assert_eq!(
        data.read_scores(),
        json!({ "scores": [{ "playerName": "Bob", "value": 9 }] })
    );
}
