//! Common Models

pub mod profile;

pub use profile::{Profile, Role};
