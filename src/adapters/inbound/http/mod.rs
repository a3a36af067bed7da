//! HTTP service exposing the path query
//!
//! ## Endpoints
//!
//! - `GET /all-paths?exposedOnly=true&sinkOnly=true&vulnerableOnly=true` - Filtered, annotated paths
//! - `GET /health` - Service health and version

pub mod middleware;
pub mod routes;
pub mod server;
pub mod state;

pub use routes::{create_router, ApiError, ErrorResponse, PathQueryParams};
pub use server::{build_app, serve, ServerSettings};
pub use state::{AppState, DEFAULT_QUERY_TIMEOUT};
