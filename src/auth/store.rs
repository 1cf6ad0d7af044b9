use chrono::{DateTime, Utc};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::debug;

#[derive(Debug, Default)]
struct StoreState {
    bearer: Option<String>,
    acquired_at: Option<DateTime<Utc>>,
}

/// Shared holder for the bearer token presented on GraphQL requests.
///
/// Starts empty; [`swap`](TokenStore::swap) installs a freshly granted
/// access token. Cloning shares the underlying state, so one
/// `authenticate()` call is visible to every request path holding a clone.
#[derive(Debug, Clone, Default)]
pub struct TokenStore {
    state: Arc<RwLock<StoreState>>,
}

impl TokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current bearer, if one has been acquired.
    pub async fn get(&self) -> Option<String> {
        self.state.read().await.bearer.clone()
    }

    /// Install a new bearer, recording when it was acquired.
    pub async fn swap(&self, bearer: String) {
        let mut state = self.state.write().await;
        state.bearer = Some(bearer);
        state.acquired_at = Some(Utc::now());
        debug!("bearer token installed");
    }

    /// Drop the stored bearer; subsequent requests go out unauthenticated.
    pub async fn clear(&self) {
        let mut state = self.state.write().await;
        state.bearer = None;
        state.acquired_at = None;
    }

    /// When the current bearer was acquired.
    pub async fn acquired_at(&self) -> Option<DateTime<Utc>> {
        self.state.read().await.acquired_at
    }
}
