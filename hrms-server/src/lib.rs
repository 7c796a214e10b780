//! hrms-server: employee records over HTTP, stored in MongoDB
//!
//! ```text
//! hrms-server/src/
//! ├── api/      # router, handlers, extractors, middleware
//! ├── db/       # EmployeeStore trait, MongoDB and in-memory stores
//! ├── config.rs # environment configuration
//! ├── logger.rs # tracing subscriber setup
//! └── state.rs  # AppState (storage handle)
//! ```

pub mod api;
pub mod config;
pub mod db;
pub mod logger;
pub mod state;

pub use config::{Config, StoreKind};
pub use db::{EmployeeStore, MemoryEmployeeStore, MongoEmployeeStore, RepoError, RepoResult};
pub use state::AppState;
