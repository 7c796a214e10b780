//! Server configuration

use std::time::Duration;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Placeholder Atlas connection string; credentials must be substituted
/// (or `MONGODB_URI` set) before the server can connect.
pub const DEFAULT_MONGODB_URI: &str = "mongodb+srv://<Username>:<Password>@clustergo.vheaban.mongodb.net/?retryWrites=true&w=majority";
pub const DEFAULT_DATABASE_NAME: &str = "fiber-hrms";
pub const DEFAULT_COLLECTION_NAME: &str = "employees";

/// Which storage backend the server runs against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreKind {
    /// MongoDB via `MONGODB_URI`
    Mongo,
    /// In-process store, nothing persisted (local development)
    Memory,
}

impl std::str::FromStr for StoreKind {
    type Err = BoxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mongo" | "mongodb" => Ok(Self::Mongo),
            "memory" => Ok(Self::Memory),
            other => Err(format!("unknown STORE '{other}', expected 'mongo' or 'memory'").into()),
        }
    }
}

/// Server configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// MongoDB connection string
    pub mongodb_uri: String,
    /// Database holding the employee collection
    pub database_name: String,
    /// Employee collection name
    pub collection_name: String,
    /// HTTP listen port
    pub http_port: u16,
    /// Applied once at connection setup (connect + server selection)
    pub connect_timeout: Duration,
    /// Storage backend
    pub store: StoreKind,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            mongodb_uri: DEFAULT_MONGODB_URI.to_string(),
            database_name: DEFAULT_DATABASE_NAME.to_string(),
            collection_name: DEFAULT_COLLECTION_NAME.to_string(),
            http_port: 3000,
            connect_timeout: Duration::from_secs(10),
            store: StoreKind::Mongo,
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, BoxError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    ///
    /// Empty values count as unset; unparseable numbers fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BoxError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let store = match get("STORE") {
            Some(value) => value.parse()?,
            None => defaults.store,
        };

        Ok(Self {
            mongodb_uri: get("MONGODB_URI").unwrap_or(defaults.mongodb_uri),
            database_name: get("DATABASE_NAME").unwrap_or(defaults.database_name),
            collection_name: get("COLLECTION_NAME").unwrap_or(defaults.collection_name),
            http_port: get("HTTP_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.http_port),
            connect_timeout: get("CONNECT_TIMEOUT_SECS")
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.connect_timeout),
            store,
        })
    }
}
