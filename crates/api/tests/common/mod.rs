use std::path::Path;
use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::{Mutex, RwLock};
use tower::ServiceExt;

use trustseal_api::config::ServerConfig;
use trustseal_api::router::build_app_router;
use trustseal_api::state::AppState;
use trustseal_store::{DemoAuthProvider, JsonFileStore, SessionStore};

/// Build a test `ServerConfig` with safe defaults and the given data dir.
pub fn test_config(data_dir: &Path) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        data_dir: data_dir.to_path_buf(),
        rng_seed: Some(42),
        analysis_delay_ms: 0,
    }
}

/// Build the full application router backed by a store in `data_dir`.
///
/// This mirrors the router construction in `main.rs` so integration tests
/// exercise the same middleware stack (CORS, tracing, timeout) that
/// production uses. The RNG is seeded so runs are reproducible.
pub fn build_test_app(data_dir: &Path) -> Router {
    let config = test_config(data_dir);
    let store = Arc::new(JsonFileStore::new(&config.data_dir));
    let history = store.load_documents().unwrap_or_default();

    let state = AppState {
        config: Arc::new(config.clone()),
        store,
        auth: DemoAuthProvider,
        history: Arc::new(RwLock::new(history)),
        rng: Arc::new(Mutex::new(StdRng::seed_from_u64(config.rng_seed.unwrap()))),
    };

    build_app_router(state, &config)
}

/// Issue a GET request against the app.
pub async fn get(app: Router, uri: &str) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::GET)
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Issue a POST request with a JSON body against the app.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    app.oneshot(
        Request::builder()
            .method(Method::POST)
            .uri(uri)
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
    .unwrap()
}

/// Collect a response body into JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body into a string.
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

/// Log in as the demo admin so analysis endpoints have an owner.
pub async fn login_as_admin(app: &Router) {
    let response = post_json(
        app.clone(),
        "/api/v1/auth/login",
        serde_json::json!({ "email": "admin@trustseal.com", "password": "admin" }),
    )
    .await;
    assert!(
        response.status().is_success(),
        "admin login failed: {}",
        response.status()
    );
}
