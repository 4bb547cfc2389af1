//! Utility module - shared helpers and types
//!
//! # Contents
//!
//! - [`AppError`] - application error type with HTTP mapping
//! - [`AppResponse`] - unified API response envelope
//! - logger and time helpers

pub mod error;
pub mod logger;
pub mod result;
pub mod time;

pub use error::{AppError, AppResponse};
pub use result::AppResult;
