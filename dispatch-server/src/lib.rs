//! Dispatch Server - order fulfillment workflow backend
//!
//! # Architecture
//!
//! This crate is the HTTP backend of a role-gated order fulfillment tracker:
//!
//! - **Order pipeline** (`orders`): command handling, event application,
//!   derived-status reduction, redb persistence
//! - **Permissions** (`auth`): role table gating every command
//! - **Extraction** (`services`): free-text order extraction collaborator
//! - **HTTP API** (`api`): queries, commands, long-poll updates
//!
//! # Module structure
//!
//! ```text
//! dispatch-server/src/
//! ├── core/          # config, state, server lifecycle
//! ├── auth/          # role permission table
//! ├── services/      # extraction collaborator client
//! ├── api/           # HTTP routes and handlers
//! ├── utils/         # errors, logging, time helpers
//! └── orders/        # command/event pipeline and storage
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod orders;
pub mod services;
pub mod utils;

// Re-export public types
pub use core::{Config, Server, ServerState};
pub use orders::{OrderStore, OrdersManager};
pub use services::ExtractionService;
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load .env and initialize logging from LOG_LEVEL / LOG_DIR
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenv::dotenv();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
    ____  _                  __       __
   / __ \(_)________  ____ _/ /______/ /_
  / / / / / ___/ __ \/ __ `/ __/ ___/ __ \
 / /_/ / (__  ) /_/ / /_/ / /_/ /__/ / / /
/_____/_/____/ .___/\__,_/\__/\___/_/ /_/
            /_/
    "#
    );
}
