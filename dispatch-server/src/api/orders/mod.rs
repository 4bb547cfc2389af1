//! Order API Module
//!
//! Queries are plain reads; every mutation goes through the command endpoint
//! and the OrdersManager pipeline behind it.
//!
//! # Routes
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/orders | GET | List orders (filterable) |
//! | /api/orders/updates | GET | Long-poll for changes |
//! | /api/orders/commands | POST | Execute an order command |
//! | /api/orders/{id} | GET | Fetch one order |

mod handler;

use axum::{
    Router,
    routing::{get, post},
};

use crate::core::ServerState;

/// Order router
pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/orders", routes())
}

fn routes() -> Router<ServerState> {
    Router::new()
        .route("/", get(handler::list))
        .route("/updates", get(handler::updates))
        .route("/commands", post(handler::execute))
        .route("/{id}", get(handler::get_by_id))
}
