use actix_web::test;
use serde_json::json;

use crate::common::read_json;
use crate::support::create_test_app;
use crate::support::fixtures::{entry, memory_state};

fn ledger() -> Vec<techguess::domain::ScoreEntry> {
    vec![entry("Alice", 5), entry("Bob", 2)]
}

#[actix_web::test]
async fn known_player_gets_bare_array() -> Result<(), Box<dyn std::error::Error>> {
    let (state, _) = memory_state(vec![], ledger());
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get().uri("/api/scores/Bob").to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    assert_eq!(
        read_json(resp).await,
        json!([{ "playerName": "Bob", "value": 2 }])
    );
    Ok(())
}

#[actix_web::test]
async fn unknown_player_gets_whole_ledger() -> Result<(), Box<dyn std::error::Error>> {
    let (state, _) = memory_state(vec![], ledger());
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get().uri("/api/scores/Zed").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(
        read_json(resp).await,
        json!({ "scores": [
            { "playerName": "Alice", "value": 5 },
            { "playerName": "Bob", "value": 2 }
        ] })
    );
    Ok(())
}

#[actix_web::test]
async fn empty_name_gets_whole_ledger() -> Result<(), Box<dyn std::error::Error>> {
    let (state, _) = memory_state(vec![], ledger());
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get().uri("/api/scores/").to_request();
    let resp = test::call_service(&app, req).await;

    let body = read_json(resp).await;
    assert_eq!(body["scores"].as_array().map(Vec::len), Some(2));
    Ok(())
}

#[actix_web::test]
async fn percent_encoded_names_are_decoded() -> Result<(), Box<dyn std::error::Error>> {
    let (state, _) = memory_state(vec![], vec![entry("Ann Lee", 4)]);
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get().uri("/api/scores/Ann%20Lee").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(
        read_json(resp).await,
        json!([{ "playerName": "Ann Lee", "value": 4 }])
    );
    Ok(())
}
