//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;
use uuid::Uuid;

use arbor_api::state::AppState;
use arbor_core::config::AppConfig;

/// Serializes tests that share the test database.
///
/// Every test body takes this guard first; `TestApp::new` wipes the
/// folders table, so concurrent tests would clobber each other's rows.
pub async fn db_lock() -> tokio::sync::MutexGuard<'static, ()> {
    static LOCK: tokio::sync::Mutex<()> = tokio::sync::Mutex::const_new(());
    LOCK.lock().await
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db_pool: PgPool,
}

impl TestApp {
    /// Create a new test application over a clean database
    pub async fn new() -> Self {
        let config = AppConfig::from_file("tests/fixtures/test_config.toml")
            .expect("Failed to load test config");

        let db_pool = arbor_database::connection::DatabasePool::connect(&config.database)
            .await
            .expect("Failed to connect to test database")
            .into_pool();

        arbor_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        Self::clean_database(&db_pool).await;

        let state = AppState::new(config, db_pool.clone());
        let router = arbor_api::app::build_app(state);

        Self { router, db_pool }
    }

    /// Clean all test data from the database
    async fn clean_database(pool: &PgPool) {
        let _ = sqlx::query("DELETE FROM folders").execute(pool).await;
    }

    /// Make an HTTP request to the test app
    pub async fn request(&self, method: &str, path: &str, body: Option<Value>) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .body(Body::from(body_str))
            .expect("Failed to build request");

        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }

    /// Create a folder through the API and return its ID
    pub async fn create_folder(&self, name: &str, parent_id: Option<Uuid>) -> Uuid {
        let body = serde_json::json!({ "name": name, "parent_id": parent_id });
        let response = self.request("POST", "/api/folders", Some(body)).await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Folder create failed: {:?}",
            response.body
        );

        response.body["data"]["id"]
            .as_str()
            .expect("No folder id in create response")
            .parse()
            .expect("Invalid folder id")
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// IDs of the folders in `data`, in response order
    pub fn data_ids(&self) -> Vec<String> {
        self.body["data"]
            .as_array()
            .expect("data is not an array")
            .iter()
            .map(|f| f["id"].as_str().expect("folder without id").to_string())
            .collect()
    }
}
