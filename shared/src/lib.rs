//! Shared types for the dispatch workflow tracker
//!
//! Domain types used across crates: the order model, shipment model,
//! structured history, order commands/events, and actor profiles.

pub mod models;
pub mod order;

// Re-exports
pub use models::{Profile, Role};
pub use order::{
    CommandError, CommandErrorCode, CommandResponse, DeliveryShift, DeliveryType, EventPayload,
    HistoryEntry, Order, OrderCommand, OrderCommandPayload, OrderEvent, OrderItem, OrderStatus,
    Shipment, ShipmentStatus,
};
