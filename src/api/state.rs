use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::RatingStore;

/// Shared application state
///
/// Recommendation requests only take the read lock, so they run in parallel;
/// rating writes take the write lock and wait for in-flight reads to finish.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<RwLock<RatingStore>>,
    /// `top_n` used when a request does not specify one
    pub default_top_n: usize,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(RatingStore::new(), 5)
    }
}

impl AppState {
    /// Wraps a populated store for sharing across handlers
    pub fn new(store: RatingStore, default_top_n: usize) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
            default_top_n,
        }
    }
}
