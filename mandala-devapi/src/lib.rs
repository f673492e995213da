//! Stand-in backend for the Buddhist Character App
//!
//! Implements the small REST surface the app's backend exposes under `/api`:
//!
//! - `GET  /api/`       -> `{"message": "Hello World"}`
//! - `POST /api/status` -> create a status check from `{"client_name": ...}`
//! - `GET  /api/status` -> every status check, oldest first
//!
//! CORS is wide open, as in the real deployment. Records live in memory and
//! can optionally be mirrored to a JSON file so they survive restarts.

use axum::{extract::State, http::StatusCode, routing::get, Json, Router};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower_http::cors::CorsLayer;

/// Error types for the stand-in backend
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// A persisted status check
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusCheck {
    pub id: String,
    pub client_name: String,
    pub timestamp: DateTime<Utc>,
}

/// Body of `POST /api/status`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCheckCreate {
    pub client_name: String,
}

#[derive(Debug, Serialize)]
struct Greeting {
    message: &'static str,
}

/// Shared state: the record list and where (if anywhere) it is mirrored.
#[derive(Clone, Default)]
pub struct ApiState {
    records: Arc<RwLock<Vec<StatusCheck>>>,
    data_file: Option<Arc<PathBuf>>,
}

impl ApiState {
    /// Records kept in memory only.
    pub fn in_memory() -> Self {
        Self::default()
    }

    /// Records loaded from and written back to `path`. A missing file starts
    /// empty.
    pub async fn with_file(path: PathBuf) -> Result<Self> {
        let records: Vec<StatusCheck> = match tokio::fs::read(&path).await {
            Ok(bytes) => serde_json::from_slice(&bytes)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Vec::new(),
            Err(e) => return Err(e.into()),
        };
        tracing::info!("Loaded {} status checks from {}", records.len(), path.display());
        Ok(Self {
            records: Arc::new(RwLock::new(records)),
            data_file: Some(Arc::new(path)),
        })
    }

    pub async fn records(&self) -> Vec<StatusCheck> {
        self.records.read().await.clone()
    }

    /// Append a record, mirroring to disk before returning.
    pub async fn insert(&self, client_name: String) -> Result<StatusCheck> {
        let check = StatusCheck {
            id: uuid::Uuid::new_v4().to_string(),
            client_name,
            timestamp: Utc::now(),
        };

        let mut records = self.records.write().await;
        records.push(check.clone());
        if let Some(path) = &self.data_file {
            if let Err(e) = save(path, &records).await {
                records.pop();
                return Err(e);
            }
        }
        Ok(check)
    }
}

async fn save(path: &Path, records: &[StatusCheck]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(path, serde_json::to_vec_pretty(records)?).await?;
    Ok(())
}

async fn root() -> Json<Greeting> {
    Json(Greeting {
        message: "Hello World",
    })
}

async fn create_status_check(
    State(state): State<ApiState>,
    Json(input): Json<StatusCheckCreate>,
) -> std::result::Result<Json<StatusCheck>, (StatusCode, String)> {
    match state.insert(input.client_name).await {
        Ok(check) => {
            tracing::debug!("Created status check {} for {}", check.id, check.client_name);
            Ok(Json(check))
        }
        Err(e) => {
            tracing::error!("Failed to store status check: {}", e);
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}

async fn get_status_checks(State(state): State<ApiState>) -> Json<Vec<StatusCheck>> {
    Json(state.records().await)
}

/// The API routes without any CORS handling
pub fn routes(state: ApiState) -> Router {
    Router::new()
        .route("/api", get(root))
        .route("/api/", get(root))
        .route("/api/status", get(get_status_checks).post(create_status_check))
        .with_state(state)
}

/// Build the API router
pub fn build_router(state: ApiState) -> Router {
    routes(state).layer(CorsLayer::permissive())
}

/// Serve the API on an already-bound listener
pub async fn serve(listener: TcpListener, state: ApiState) -> std::io::Result<()> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!("Stand-in backend listening on http://{}/api", addr);
    }
    axum::serve(listener, build_router(state)).await
}

/// Bind `addr` and serve the API
pub async fn start_server(addr: &str, state: ApiState) -> std::io::Result<()> {
    let listener = TcpListener::bind(addr).await?;
    serve(listener, state).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_insert_keeps_order() {
        let state = ApiState::in_memory();
        let a = state.insert("first".into()).await.unwrap();
        let b = state.insert("second".into()).await.unwrap();

        let records = state.records().await;
        assert_eq!(records, vec![a.clone(), b]);
        assert_eq!(a.id.len(), 36);
    }

    #[tokio::test]
    async fn test_file_backed_state_survives_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("data/status.json");

        let state = ApiState::with_file(path.clone()).await.unwrap();
        let created = state.insert("persisted".into()).await.unwrap();

        let reloaded = ApiState::with_file(path).await.unwrap();
        assert_eq!(reloaded.records().await, vec![created]);
    }

    #[tokio::test]
    async fn test_corrupt_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("status.json");
        std::fs::write(&path, "{not json").unwrap();

        assert!(matches!(ApiState::with_file(path).await, Err(Error::Json(_))));
    }
}
