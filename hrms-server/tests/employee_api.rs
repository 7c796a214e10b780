//! End-to-end tests of the HTTP API over in-process stores

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::{Method, Request, StatusCode, header};
use http_body_util::BodyExt;
use hrms_server::{AppState, EmployeeStore, MemoryEmployeeStore, RepoError, RepoResult, api};
use mongodb::bson::oid::ObjectId;
use serde_json::{Value, json};
use shared::models::{Employee, EmployeeInput};
use tower::ServiceExt;

fn app_with(store: impl EmployeeStore + 'static) -> Router {
    api::create_router(AppState::new(store))
}

async fn send_raw(
    app: &Router,
    method: Method,
    uri: &str,
    content_type: Option<&str>,
    body: impl Into<Body>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(ct) = content_type {
        builder = builder.header(header::CONTENT_TYPE, ct);
    }
    let request = builder.body(body.into()).unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    match body {
        Some(json) => {
            send_raw(app, method, uri, Some("application/json"), json.to_string()).await
        }
        None => send_raw(app, method, uri, None, Body::empty()).await,
    }
}

async fn create(app: &Router, name: &str, salary: f64, age: f64) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/employee",
        Some(json!({ "name": name, "salary": salary, "age": age })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

/// Counts every storage call made through it
#[derive(Clone, Default)]
struct CountingStore {
    inner: MemoryEmployeeStore,
    calls: Arc<AtomicUsize>,
}

impl CountingStore {
    fn hit(&self) {
        self.calls.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl EmployeeStore for CountingStore {
    async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        self.hit();
        self.inner.find_all().await
    }

    async fn find_by_id(&self, id: ObjectId) -> RepoResult<Option<Employee>> {
        self.hit();
        self.inner.find_by_id(id).await
    }

    async fn insert(&self, input: &EmployeeInput) -> RepoResult<ObjectId> {
        self.hit();
        self.inner.insert(input).await
    }

    async fn update(&self, id: ObjectId, input: &EmployeeInput) -> RepoResult<Option<Employee>> {
        self.hit();
        self.inner.update(id, input).await
    }

    async fn delete(&self, id: ObjectId) -> RepoResult<u64> {
        self.hit();
        self.inner.delete(id).await
    }

    async fn ping(&self) -> RepoResult<()> {
        self.hit();
        self.inner.ping().await
    }
}

/// Every call fails the way an unreachable cluster does
struct UnreachableStore;

fn unreachable() -> RepoError {
    RepoError::Database("Server selection timeout: No available servers".to_string())
}

#[async_trait]
impl EmployeeStore for UnreachableStore {
    async fn find_all(&self) -> RepoResult<Vec<Employee>> {
        Err(unreachable())
    }

    async fn find_by_id(&self, _id: ObjectId) -> RepoResult<Option<Employee>> {
        Err(unreachable())
    }

    async fn insert(&self, _input: &EmployeeInput) -> RepoResult<ObjectId> {
        Err(unreachable())
    }

    async fn update(&self, _id: ObjectId, _input: &EmployeeInput) -> RepoResult<Option<Employee>> {
        Err(unreachable())
    }

    async fn delete(&self, _id: ObjectId) -> RepoResult<u64> {
        Err(unreachable())
    }

    async fn ping(&self) -> RepoResult<()> {
        Err(unreachable())
    }
}

#[tokio::test]
async fn list_empty_collection_returns_empty_array() {
    let app = app_with(MemoryEmployeeStore::new());

    let (status, body) = send(&app, Method::GET, "/employee", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn create_returns_stored_record_with_assigned_id() {
    let app = app_with(MemoryEmployeeStore::new());

    let body = create(&app, "Alice", 50000.0, 30.0).await;
    let id = body["id"].as_str().unwrap();
    assert!(!id.is_empty());
    assert!(ObjectId::parse_str(id).is_ok());
    assert_eq!(body["name"], "Alice");
    assert_eq!(body["salary"], 50000.0);
    assert_eq!(body["age"], 30.0);

    let (status, list) = send(&app, Method::GET, "/employee", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, json!([body]));
}

#[tokio::test]
async fn create_ignores_client_supplied_id() {
    let app = app_with(MemoryEmployeeStore::new());
    let client_id = "65f1c0ffee0000000000abcd";

    let (status, body) = send(
        &app,
        Method::POST,
        "/employee",
        Some(json!({ "id": client_id, "name": "Mallory", "salary": 1, "age": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_ne!(body["id"], client_id);
    assert_eq!(body["name"], "Mallory");
}

#[tokio::test]
async fn create_with_unparseable_body_is_bad_request() {
    let store = MemoryEmployeeStore::new();
    let app = app_with(store.clone());

    let (status, body) = send_raw(
        &app,
        Method::POST,
        "/employee",
        Some("application/json"),
        "{\"name\": \"Alice\", ",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 6);
    assert!(!body["message"].as_str().unwrap().is_empty());

    let (status, _) = send_raw(
        &app,
        Method::POST,
        "/employee",
        Some("application/json"),
        r#"{"name": "Alice", "salary": "a lot"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = send_raw(
        &app,
        Method::POST,
        "/employee",
        None,
        r#"{"name": "Alice"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    assert!(store.is_empty().await);
}

#[tokio::test]
async fn update_unmatched_id_is_bad_request() {
    let app = app_with(MemoryEmployeeStore::new());
    create(&app, "Alice", 50000.0, 30.0).await;

    let missing = ObjectId::new().to_hex();
    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/employee/{missing}"),
        Some(json!({ "name": "Ghost", "salary": 0, "age": 0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 8002);
    assert_eq!(body["details"]["id"], missing.as_str());
}

#[tokio::test]
async fn update_overwrites_fields_under_same_id() {
    let app = app_with(MemoryEmployeeStore::new());
    let alice = create(&app, "Alice", 50000.0, 30.0).await;
    let bob = create(&app, "Bob", 42000.0, 45.0).await;
    let id = alice["id"].as_str().unwrap();

    let (status, body) = send(
        &app,
        Method::PUT,
        &format!("/employee/{id}"),
        Some(json!({ "name": "Alicia", "salary": 61000.5, "age": 31 })),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(
        body,
        json!({ "id": id, "name": "Alicia", "salary": 61000.5, "age": 31.0 })
    );

    let (_, list) = send(&app, Method::GET, "/employee", None).await;
    let list = list.as_array().unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0], body);
    assert_eq!(list[1], bob);
}

#[tokio::test]
async fn update_with_unparseable_body_is_bad_request() {
    let app = app_with(MemoryEmployeeStore::new());
    let alice = create(&app, "Alice", 50000.0, 30.0).await;
    let id = alice["id"].as_str().unwrap();

    let (status, _) = send_raw(
        &app,
        Method::PUT,
        &format!("/employee/{id}"),
        Some("application/json"),
        "not json",
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, list) = send(&app, Method::GET, "/employee", None).await;
    assert_eq!(list, json!([alice]));
}

#[tokio::test]
async fn delete_removes_record_and_second_delete_is_not_found() {
    let app = app_with(MemoryEmployeeStore::new());
    let alice = create(&app, "Alice", 50000.0, 30.0).await;
    let bob = create(&app, "Bob", 42000.0, 45.0).await;
    let uri = format!("/employee/{}", alice["id"].as_str().unwrap());

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!("Record Deleted"));

    let (_, list) = send(&app, Method::GET, "/employee", None).await;
    assert_eq!(list, json!([bob]));

    let (status, body) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 8001);
}

#[tokio::test]
async fn malformed_id_is_rejected_before_storage() {
    let store = CountingStore::default();
    let calls = store.calls.clone();
    let app = app_with(store);

    for bad in ["abc", "65f1c0ffee0000000000abcz", "123456789012345678901234567"] {
        let uri = format!("/employee/{bad}");

        let (status, body) = send(
            &app,
            Method::PUT,
            &uri,
            Some(json!({ "name": "X", "salary": 1, "age": 1 })),
        )
        .await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "PUT {uri}");
        assert_eq!(body["code"], 6);

        let (status, _) = send(&app, Method::DELETE, &uri, None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "DELETE {uri}");
    }

    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn storage_failures_surface_raw_error_text() {
    let app = app_with(UnreachableStore);

    let (status, body) = send(&app, Method::GET, "/employee", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], 9002);
    assert_eq!(
        body["message"],
        "Server selection timeout: No available servers"
    );

    let (status, _) = send(
        &app,
        Method::POST,
        "/employee",
        Some(json!({ "name": "Alice", "salary": 1, "age": 1 })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    let uri = format!("/employee/{}", ObjectId::new().to_hex());
    let (status, body) = send(
        &app,
        Method::PUT,
        &uri,
        Some(json!({ "name": "Alice", "salary": 2, "age": 2 })),
    )
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], 9002);

    let (status, _) = send(&app, Method::DELETE, &uri, None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
}

#[tokio::test]
async fn health_reports_store_reachability() {
    let app = app_with(MemoryEmployeeStore::new());
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["db"], true);

    let app = app_with(UnreachableStore);
    let (status, body) = send(&app, Method::GET, "/health", None).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["db"], false);
}

#[tokio::test]
async fn responses_carry_request_id() {
    let app = app_with(MemoryEmployeeStore::new());

    let request = Request::builder()
        .uri("/employee")
        .header("x-request-id", "req-123")
        .body(Body::empty())
        .unwrap();
    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.headers()["x-request-id"], "req-123");

    let request = Request::builder()
        .uri("/employee")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    let generated = response.headers()["x-request-id"].to_str().unwrap();
    assert!(uuid::Uuid::parse_str(generated).is_ok());
}
