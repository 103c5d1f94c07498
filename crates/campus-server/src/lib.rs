//! HTTP server wiring for CampusSync.
//!
//! Mounts the JSON API from `campus-api` under `/api` and backs it with an
//! in-memory store.

use std::sync::Arc;

use axum::{Router, http::StatusCode, routing::get};
use campus_core::store::CampusStore;
use campus_store_memory::MemoryStore;
use serde::Deserialize;
use tokio::{sync::broadcast::error::RecvError, task::JoinHandle};
use tower_http::trace::TraceLayer;
use tracing::{debug, warn};

// ─── Configuration ───────────────────────────────────────────────────────────

fn default_host() -> String { "127.0.0.1".into() }

fn default_port() -> u16 { 8080 }

fn default_seed() -> bool { true }

/// Runtime server configuration, deserialised from `config.toml` and
/// `CAMPUS_*` environment variables.
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_host")]
  pub host:           String,
  #[serde(default = "default_port")]
  pub port:           u16,
  /// Start with the demo dataset. When off, the store starts empty.
  #[serde(default = "default_seed")]
  pub seed_demo_data: bool,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:           default_host(),
      port:           default_port(),
      seed_demo_data: default_seed(),
    }
  }
}

impl ServerConfig {
  pub fn address(&self) -> String { format!("{}:{}", self.host, self.port) }

  pub fn build_store(&self) -> MemoryStore {
    if self.seed_demo_data {
      MemoryStore::seeded()
    } else {
      MemoryStore::new(Vec::new())
    }
  }
}

// ─── Router ──────────────────────────────────────────────────────────────────

/// Build the top-level [`Router`]: `/health` plus the API under `/api`.
pub fn router<S>(store: Arc<S>) -> Router
where
  S: CampusStore + 'static,
{
  Router::new()
    .route("/health", get(|| async { StatusCode::OK }))
    .nest("/api", campus_api::api_router(store))
    .layer(TraceLayer::new_for_http())
}

// ─── Change log ──────────────────────────────────────────────────────────────

/// Log every store change until the store is dropped.
pub fn spawn_change_log<S>(store: &S) -> JoinHandle<()>
where
  S: CampusStore + ?Sized,
{
  let mut changes = store.subscribe();
  tokio::spawn(async move {
    loop {
      match changes.recv().await {
        Ok(change) => debug!(?change, "store changed"),
        Err(RecvError::Lagged(missed)) => {
          warn!(missed, "change log fell behind");
        }
        Err(RecvError::Closed) => break,
      }
    }
  })
}
