use std::collections::HashMap;
use std::sync::Arc;

use bytes::Bytes;
use tokio::sync::RwLock;

use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::profiles::store::ProfileStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// AI summary client; `None` when the feature flag is off or no API key
    /// is configured. Handlers degrade gracefully without it.
    pub llm: Option<LlmClient>,
    /// Injected job-profile collaborator. Default: JSON-file-backed store.
    pub profiles: Arc<dyn ProfileStore>,
    pub uploads: UploadStore,
}

/// In-memory retention of uploaded resume bytes, keyed by filename, so the
/// view endpoint can serve them back. Nothing touches disk; contents are
/// gone on restart.
#[derive(Clone, Default)]
pub struct UploadStore {
    inner: Arc<RwLock<HashMap<String, Bytes>>>,
}

impl UploadStore {
    pub async fn retain(&self, filename: &str, bytes: Bytes) {
        self.inner.write().await.insert(filename.to_string(), bytes);
    }

    pub async fn get(&self, filename: &str) -> Option<Bytes> {
        self.inner.read().await.get(filename).cloned()
    }
}
