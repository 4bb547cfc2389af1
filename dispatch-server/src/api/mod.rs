//! API route modules
//!
//! # Structure
//!
//! - [`health`] - health check
//! - [`orders`] - order queries, commands, and update long-polling
//! - [`extract`] - free-text order extraction

pub mod extract;
pub mod health;
pub mod orders;

use axum::Router;

use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::{AppResponse, AppResult};

/// Build the full application router
pub fn router() -> Router<ServerState> {
    Router::new()
        .merge(health::router())
        .merge(orders::router())
        .merge(extract::router())
}
