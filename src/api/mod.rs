//! Portfolio API Module
//! Serves the rendered page plus JSON views of the timelines

pub mod handlers;
pub mod middleware;
pub mod routes;
pub mod types;

pub use handlers::AppState;
pub use routes::create_router;
pub use types::*;
