//! Role-based authorization

pub mod permissions;

pub use permissions::{allowed_roles, is_allowed};
