//! HTTP API surface
//!
//! Transport-only layer: handlers read one snapshot per request and map
//! engine results onto the wire contract.

pub mod handlers;
pub mod router;
pub mod types;

pub use handlers::ApiError;
pub use router::{create_router, AppState};
