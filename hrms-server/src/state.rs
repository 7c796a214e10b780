//! Application state shared by all handlers

use std::sync::Arc;

use crate::config::{Config, StoreKind};
use crate::db::{EmployeeStore, MemoryEmployeeStore, MongoEmployeeStore};

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Shared application state
///
/// Built once at startup and cloned into every request by axum.
#[derive(Clone)]
pub struct AppState {
    /// Employee storage handle
    pub employees: Arc<dyn EmployeeStore>,
}

impl AppState {
    /// Wrap an already constructed store
    pub fn new(store: impl EmployeeStore + 'static) -> Self {
        Self {
            employees: Arc::new(store),
        }
    }

    /// Build the storage backend named in the configuration.
    ///
    /// For MongoDB this connects and pings; any failure aborts startup.
    pub async fn from_config(config: &Config) -> Result<Self, BoxError> {
        match config.store {
            StoreKind::Mongo => {
                let store = MongoEmployeeStore::connect(config).await?;
                Ok(Self::new(store))
            }
            StoreKind::Memory => {
                tracing::warn!("Using in-memory employee store; data is lost on exit");
                Ok(Self::new(MemoryEmployeeStore::new()))
            }
        }
    }
}
