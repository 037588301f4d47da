//! Integration tests for the category menu: mount, fetch, apply, unmount.
//!
//! Each test runs its own wiremock server standing in for the shop backend.
//! The loader is driven the way the event loop drives it: `mount` spawns the
//! request, the test receives the `AppEvent` and hands it back to `apply`.

use pretty_assertions::assert_eq;
use shopnav::app::AppEvent;
use shopnav::catalog::{Category, CategoryClient, CATEGORY_ENDPOINT};
use shopnav::menu::{CategoryMenuLoader, LoadState};
use shopnav::util::validate_base_url;
use std::time::Duration;
use tokio::sync::mpsc;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(uri: &str) -> CategoryClient {
    let base = validate_base_url(uri).unwrap();
    CategoryClient::new(&base, Duration::from_secs(2)).unwrap()
}

async fn mock_categories(server: &MockServer, body: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/{}", CATEGORY_ENDPOINT)))
        .and(query_param("start", "0"))
        .and(query_param("count", "12"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(body.to_string(), "application/json"))
        .expect(1)
        .mount(server)
        .await;
}

/// Mounts a loader against `client` and applies the single resulting event.
async fn mount_and_settle(client: &CategoryClient) -> CategoryMenuLoader {
    let (tx, mut rx) = mpsc::channel::<AppEvent>(4);
    let mut loader = CategoryMenuLoader::new();
    assert!(loader.mount(client, &tx));

    let event = tokio::time::timeout(Duration::from_secs(5), rx.recv())
        .await
        .expect("category load should finish")
        .expect("channel open");
    let AppEvent::CategoriesLoaded { generation, result } = event;
    assert!(loader.apply(generation, result));
    loader
}

fn rendered(loader: &CategoryMenuLoader) -> Vec<(String, String)> {
    loader
        .entries()
        .map(|e| (e.label().to_string(), e.route().path()))
        .collect()
}

// ============================================================================
// Payload scenarios
// ============================================================================

#[tokio::test]
async fn test_two_categories_render_in_order() {
    let server = MockServer::start().await;
    mock_categories(
        &server,
        r#"{"categories":[{"id":1,"name":"Electronics"},{"id":2,"name":"Books"}],"responseMessage":"Category Fetched Successful","success":true}"#,
    )
    .await;

    let loader = mount_and_settle(&client_for(&server.uri())).await;

    assert_eq!(loader.state(), &LoadState::Loaded { count: 2 });
    assert_eq!(
        rendered(&loader),
        vec![
            (
                "Electronics".to_string(),
                "/product/category/1/Electronics".to_string()
            ),
            ("Books".to_string(), "/product/category/2/Books".to_string()),
        ]
    );
}

#[tokio::test]
async fn test_names_are_not_escaped_in_routes() {
    let server = MockServer::start().await;
    mock_categories(
        &server,
        r#"{"categories":[{"id":"7","name":"Home & Garden"}],"success":true}"#,
    )
    .await;

    let loader = mount_and_settle(&client_for(&server.uri())).await;
    assert_eq!(
        rendered(&loader),
        vec![(
            "Home & Garden".to_string(),
            "/product/category/7/Home & Garden".to_string()
        )]
    );
}

#[tokio::test]
async fn test_empty_list_renders_no_entries() {
    let server = MockServer::start().await;
    mock_categories(
        &server,
        r#"{"categories":[],"responseMessage":"No categories","success":true}"#,
    )
    .await;

    let loader = mount_and_settle(&client_for(&server.uri())).await;
    assert_eq!(loader.state(), &LoadState::Loaded { count: 0 });
    assert_eq!(loader.entries().len(), 0);
}

#[tokio::test]
async fn test_absent_categories_field_leaves_menu_empty() {
    let server = MockServer::start().await;
    mock_categories(
        &server,
        r#"{"responseMessage":"Failed to fetch","success":false}"#,
    )
    .await;

    let loader = mount_and_settle(&client_for(&server.uri())).await;
    assert!(loader.is_empty());
    assert!(matches!(loader.state(), LoadState::Failed { .. }));
}

#[tokio::test]
async fn test_null_categories_leaves_menu_empty() {
    let server = MockServer::start().await;
    mock_categories(&server, r#"{"categories":null,"success":true}"#).await;

    let loader = mount_and_settle(&client_for(&server.uri())).await;
    assert!(loader.is_empty());
    assert!(matches!(loader.state(), LoadState::Failed { .. }));
}

#[tokio::test]
async fn test_server_error_leaves_menu_empty() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/{}", CATEGORY_ENDPOINT)))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&server)
        .await;

    let loader = mount_and_settle(&client_for(&server.uri())).await;
    assert!(loader.is_empty());
    match loader.state() {
        LoadState::Failed { error } => assert!(error.contains("503")),
        other => panic!("Expected Failed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_unreachable_backend_leaves_menu_empty() {
    // Bind then drop to get a port nothing listens on
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let loader = mount_and_settle(&client_for(&format!("http://{}", addr))).await;
    assert!(loader.is_empty());
    assert!(matches!(loader.state(), LoadState::Failed { .. }));
}

// ============================================================================
// Lifecycle
// ============================================================================

#[tokio::test]
async fn test_second_mount_issues_no_request() {
    let server = MockServer::start().await;
    mock_categories(&server, r#"{"categories":[{"id":1,"name":"Toys"}]}"#).await;

    let client = client_for(&server.uri());
    let (tx, mut rx) = mpsc::channel::<AppEvent>(4);
    let mut loader = CategoryMenuLoader::new();

    assert!(loader.mount(&client, &tx));
    assert!(!loader.mount(&client, &tx));

    let AppEvent::CategoriesLoaded { generation, result } = rx.recv().await.unwrap();
    assert!(loader.apply(generation, result));

    // Settled loaders stay settled
    assert!(!loader.mount(&client, &tx));
    assert_eq!(loader.len(), 1);

    // `expect(1)` on the mock is verified when the server drops
}

#[tokio::test]
async fn test_unmount_before_response_discards_result() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(format!("/{}", CATEGORY_ENDPOINT)))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_raw(r#"{"categories":[{"id":1,"name":"Late"}]}"#, "application/json")
                .set_delay(Duration::from_millis(500)),
        )
        .mount(&server)
        .await;

    let client = client_for(&server.uri());
    let (tx, mut rx) = mpsc::channel::<AppEvent>(4);
    let mut loader = CategoryMenuLoader::new();
    assert!(loader.mount(&client, &tx));

    let LoadState::Loading { generation } = loader.state().clone() else {
        panic!("Expected Loading after mount, got {:?}", loader.state());
    };

    loader.unmount();
    assert!(!loader.is_mounted());

    // The aborted task never reports back
    let waited = tokio::time::timeout(Duration::from_secs(1), rx.recv()).await;
    assert!(waited.is_err());

    // Even if a result had slipped through, it would be ignored
    let applied = loader.apply(generation, Ok(vec![Category::new(1, "Late")]));
    assert!(!applied);
    assert!(loader.is_empty());
}
