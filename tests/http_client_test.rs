mod support;

use axum::http::StatusCode;
use serde_json::json;
use supplier_scout::{HttpScoutClient, ScoutApiError, SupplierApi, SupplierRecord};

use crate::support::{acme_json, tracing_init, StubService};

#[tokio::test]
async fn test_search_posts_query_and_decodes_suppliers() {
    tracing_init();
    let stub = StubService::start().await;
    stub.respond_to_search(StatusCode::OK, json!([acme_json()]));

    let client = HttpScoutClient::new(stub.base_url.clone());
    let results = client
        .search("Find suppliers for industrial components")
        .await
        .unwrap();

    assert_eq!(
        stub.search_requests(),
        vec![json!({ "query": "Find suppliers for industrial components" })]
    );
    assert_eq!(
        results,
        vec![SupplierRecord::new(
            "Acme Co",
            "https://acme.example",
            0.92,
            "ISO 9001"
        )]
    );
}

#[tokio::test]
async fn test_search_non_list_body_is_serialization_error() {
    tracing_init();
    let stub = StubService::start().await;
    stub.respond_to_search(StatusCode::OK, json!({ "detail": "agent crashed" }));

    let client = HttpScoutClient::new(stub.base_url.clone());
    let err = client.search("bolts").await.unwrap_err();

    assert!(matches!(err, ScoutApiError::Serialization(_)), "{err:?}");
}

#[tokio::test]
async fn test_search_error_status() {
    tracing_init();
    let stub = StubService::start().await;
    stub.respond_to_search(StatusCode::INTERNAL_SERVER_ERROR, json!([]));

    let client = HttpScoutClient::new(stub.base_url.clone());
    let err = client.search("bolts").await.unwrap_err();

    assert!(matches!(err, ScoutApiError::Status(500)), "{err:?}");
}

#[tokio::test]
async fn test_save_sends_record_unchanged() {
    tracing_init();
    let stub = StubService::start().await;
    stub.respond_to_search(StatusCode::OK, json!([acme_json()]));

    let client = HttpScoutClient::new(stub.base_url.clone());
    let results = client.search("anything").await.unwrap();
    client.save(&results[0]).await.unwrap();

    // Field for field identical, with no id key at all
    assert_eq!(stub.save_requests(), vec![acme_json()]);
}

#[tokio::test]
async fn test_save_accepts_any_success_status() {
    tracing_init();
    let stub = StubService::start().await;
    stub.respond_to_save(StatusCode::CREATED);

    let client = HttpScoutClient::new(stub.base_url.clone());
    let record = SupplierRecord::new("Acme Co", "", 0.0, "");

    assert!(client.save(&record).await.is_ok());
}

#[tokio::test]
async fn test_save_rejected_status() {
    tracing_init();
    let stub = StubService::start().await;
    stub.respond_to_save(StatusCode::UNPROCESSABLE_ENTITY);

    let client = HttpScoutClient::new(stub.base_url.clone());
    let record = SupplierRecord::new("Acme Co", "", 0.0, "");
    let err = client.save(&record).await.unwrap_err();

    assert!(matches!(err, ScoutApiError::Status(422)), "{err:?}");
}

#[tokio::test]
async fn test_list_saved_returns_persisted_ids() {
    tracing_init();
    let stub = StubService::start().await;
    let client = HttpScoutClient::new(stub.base_url.clone());

    let first = SupplierRecord::new("Acme Co", "https://acme.example", 0.92, "ISO 9001");
    let second = SupplierRecord::new("Bolt Works", "", 0.4, "line one\nline two");
    client.save(&first).await.unwrap();
    client.save(&second).await.unwrap();

    let saved = client.list_saved().await.unwrap();
    assert_eq!(saved.len(), 2);
    assert_eq!(saved[0].id, Some(1));
    assert_eq!(saved[0].name, "Acme Co");
    assert_eq!(saved[1].id, Some(2));
    assert_eq!(saved[1].notes, "line one\nline two");
}

#[tokio::test]
async fn test_unreachable_service_is_request_error() {
    tracing_init();
    // Grab a free port, then close it again
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let client = HttpScoutClient::new(format!("http://{}", addr));
    let err = client.search("bolts").await.unwrap_err();

    assert!(matches!(err, ScoutApiError::Request(_)), "{err:?}");
}
