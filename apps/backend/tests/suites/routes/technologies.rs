use actix_web::test;
use serde_json::json;

use crate::common::{assert_problem_details_structure, read_json};
use crate::support::create_test_app;
use crate::support::fixtures::{go_catalog, memory_state, sample_catalog};

#[actix_web::test]
async fn count_is_a_bare_integer() -> Result<(), Box<dyn std::error::Error>> {
    let (state, _) = memory_state(sample_catalog(), vec![]);
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get().uri("/api/technologies").to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    assert_eq!(read_json(resp).await, json!(3));
    Ok(())
}

#[actix_web::test]
async fn empty_catalog_counts_zero() -> Result<(), Box<dyn std::error::Error>> {
    let (state, _) = memory_state(vec![], vec![]);
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get().uri("/api/technologies").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(read_json(resp).await, json!(0));
    Ok(())
}

#[actix_web::test]
async fn image_lookup_returns_only_the_image() -> Result<(), Box<dyn std::error::Error>> {
    let (state, _) = memory_state(sample_catalog(), vec![]);
    let app = create_test_app(state).with_prod_routes().build().await?;

    for _ in 0..2 {
        let req = test::TestRequest::get().uri("/api/technology/2").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
        assert_eq!(read_json(resp).await, json!({ "image": "rust.png" }));
    }
    Ok(())
}

#[actix_web::test]
async fn index_past_the_end_is_404() -> Result<(), Box<dyn std::error::Error>> {
    let (state, _) = memory_state(go_catalog(), vec![]);
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get().uri("/api/technology/1").to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_structure(
        resp,
        404,
        "TECHNOLOGY_NOT_FOUND",
        "Technology not found at index 1",
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn negative_index_is_404() -> Result<(), Box<dyn std::error::Error>> {
    let (state, _) = memory_state(go_catalog(), vec![]);
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get().uri("/api/technology/-1").to_request();
    let resp = test::call_service(&app, req).await;

    assert_problem_details_structure(
        resp,
        404,
        "TECHNOLOGY_NOT_FOUND",
        "Technology not found at index -1",
    )
    .await;
    Ok(())
}

#[actix_web::test]
async fn non_integer_index_is_404() -> Result<(), Box<dyn std::error::Error>> {
    let (state, _) = memory_state(go_catalog(), vec![]);
    let app = create_test_app(state).with_prod_routes().build().await?;

    let req = test::TestRequest::get().uri("/api/technology/abc").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status().as_u16(), 404);
    let body = read_json(resp).await;
    assert_eq!(body["code"], "TECHNOLOGY_NOT_FOUND");
    Ok(())
}
