//! External service clients

pub mod extraction;

pub use extraction::{ExtractionError, ExtractionService};
