use std::path::PathBuf;
use std::sync::Arc;

use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};

/// Shared application state available to all handlers via `State<AppState>`.
///
/// Holds only immutable data; every request opens its own store handle.
#[derive(Clone)]
pub struct AppState {
    /// Location of the SQLite store.
    pub db_path: Arc<PathBuf>,
    /// Effective configuration.
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            db_path: Arc::new(PathBuf::from(&config.database)),
            config: Arc::new(config),
        }
    }

    /// Run `f` against a fresh store handle on the blocking thread pool.
    pub async fn with_store<F, T>(&self, f: F) -> AppResult<T>
    where
        F: FnOnce(&mut DbPool) -> AppResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let path = Arc::clone(&self.db_path);
        tokio::task::spawn_blocking(move || {
            let mut pool = DbPool::new(path.as_path())?;
            f(&mut pool)
        })
        .await
        .map_err(|e| AppError::Other(format!("store task failed: {e}")))?
    }
}
