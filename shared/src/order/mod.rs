//! Order Workflow Module
//!
//! Types for the order fulfillment workflow:
//! - Commands: requests from role actors to move an order forward
//! - Events: immutable facts recorded after command processing
//! - History: structured audit entries rendered to free text at the boundary
//! - Drafts: validated input payloads (order entry, shipment dispatch)

pub mod command;
pub mod draft;
pub mod event;
pub mod history;
pub mod types;

// Re-exports
pub use command::{
    CommandError, CommandErrorCode, CommandResponse, ItemAdjustment, OrderCommand,
    OrderCommandPayload, ShipmentStep,
};
pub use draft::{DraftPrefill, DriverInfo, ItemDraft, OrderDraft, ShipmentDraft};
pub use event::{EventPayload, OrderEvent};
pub use history::{ActionKind, HistoryEntry, ReviewStage};
pub use types::{
    DeliveryShift, DeliveryType, EmergencyReport, Order, OrderItem, OrderStatus, Shipment,
    ShipmentStatus,
};
