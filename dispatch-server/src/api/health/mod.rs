//! Health check route
//!
//! # Routes
//!
//! | Path | Method | Description | Auth |
//! |------|--------|-------------|------|
//! | /health | GET | Liveness and store summary | none |
//!
//! # Response example
//!
//! ```json
//! {
//!   "status": "healthy",
//!   "version": "0.1.0",
//!   "epoch": "0c6a...",
//!   "order_count": 42
//! }
//! ```

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};

/// Health router - public, no auth
pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

#[derive(Serialize)]
pub struct HealthResponse {
    /// Status (healthy | error)
    status: &'static str,
    /// Package version
    version: &'static str,
    /// Store epoch; changes when the database is recreated
    epoch: String,
    /// Number of orders currently in the store
    order_count: usize,
}

pub async fn health(State(state): State<ServerState>) -> AppResult<Json<HealthResponse>> {
    let order_count = state
        .orders
        .get_orders()
        .map_err(|e| AppError::Database(e.to_string()))?
        .len();

    Ok(Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        epoch: state.orders.epoch().to_string(),
        order_count,
    }))
}
