pub mod api;
pub mod config;
pub mod error;
pub mod loader;
pub mod models;
pub mod query;
pub mod reload;
pub mod store;

pub use api::{create_router, AppState};
pub use config::ServiceConfig;
pub use error::{PartdexError, Result};
pub use models::{FieldValue, Record};
pub use query::{list, ListPage, ListQuery};
pub use reload::Reloader;
pub use store::{Snapshot, Store};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
