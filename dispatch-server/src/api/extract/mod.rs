//! Text extraction API
//!
//! # Routes
//!
//! | Path | Method | Description |
//! |------|--------|-------------|
//! | /api/extract | POST | Extract a draft prefill from free-form text |

mod handler;

use axum::{Router, routing::post};

use crate::core::ServerState;

/// Extraction router
pub fn router() -> Router<ServerState> {
    Router::new().route("/api/extract", post(handler::extract))
}
