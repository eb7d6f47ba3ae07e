use std::sync::Arc;

use rand::rngs::StdRng;
use tokio::sync::{Mutex, RwLock};

use trustseal_core::document::Document;
use trustseal_store::{DemoAuthProvider, JsonFileStore};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// JSON-file session store (identity + document history slots).
    pub store: Arc<JsonFileStore>,
    /// Credential resolver.
    pub auth: DemoAuthProvider,
    /// In-memory document history, append-only. Loaded from the store at
    /// startup and saved back after each mutation.
    pub history: Arc<RwLock<Vec<Document>>>,
    /// The analysis RNG stream. Seeded from `RNG_SEED` when set, otherwise
    /// from OS entropy.
    pub rng: Arc<Mutex<StdRng>>,
}
