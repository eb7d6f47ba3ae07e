use std::sync::Arc;

use rand::rngs::StdRng;
use rand::SeedableRng;
use tokio::sync::{Mutex, RwLock};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use trustseal_api::config::ServerConfig;
use trustseal_api::router::build_app_router;
use trustseal_api::state::AppState;
use trustseal_store::{DemoAuthProvider, JsonFileStore, SessionStore};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "trustseal_api=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env();

    let store = Arc::new(JsonFileStore::new(&config.data_dir));

    // Load-at-start: a corrupt or missing history slot starts us empty
    // rather than refusing to boot.
    let history = match store.load_documents() {
        Ok(documents) => {
            tracing::info!(count = documents.len(), "Document history loaded");
            documents
        }
        Err(e) => {
            tracing::warn!(error = %e, "Could not load document history; starting empty");
            Vec::new()
        }
    };

    let rng = match config.rng_seed {
        Some(seed) => {
            tracing::info!(seed, "Analysis RNG seeded from configuration");
            StdRng::seed_from_u64(seed)
        }
        None => StdRng::from_os_rng(),
    };

    let state = AppState {
        config: Arc::new(config.clone()),
        store,
        auth: DemoAuthProvider,
        history: Arc::new(RwLock::new(history)),
        rng: Arc::new(Mutex::new(rng)),
    };

    let app = build_app_router(state, &config);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("failed to bind server address");

    tracing::info!(%addr, "TrustSeal API listening");

    axum::serve(listener, app)
        .await
        .expect("server exited with an error");
}
