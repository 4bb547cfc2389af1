//! Order Workflow Module
//!
//! This module implements role-gated order fulfillment as a command pipeline:
//!
//! - **manager**: Core OrdersManager for command processing and event generation
//! - **actions**: One handler per command, validating role and state transitions
//! - **appliers**: One applier per event, mutating the order and its history
//! - **reducer**: Derived-status computation from shipment state
//! - **storage**: redb-based persistence for the order collection and counters
//!
//! # Architecture
//!
//! ```text
//! Command → OrdersManager → Action → Event → Applier
//!                 ↓                             ↓
//!             Broadcast                  Storage (redb)
//!                 ↓
//!          Long-poll waiters
//! ```
//!
//! # Data Flow
//!
//! 1. Client sends OrderCommand via HTTP API
//! 2. OrdersManager checks permissions and idempotency
//! 3. The matching action validates the transition and emits an OrderEvent
//! 4. The matching applier mutates the order and appends a history entry
//! 5. The updated collection is persisted to redb (transactional)
//! 6. The event is broadcast to long-poll subscribers
//! 7. CommandResponse is returned to the client

pub mod actions;
pub mod appliers;
pub mod manager;
pub mod reducer;
pub mod storage;
pub mod traits;

// Re-exports
pub use manager::{ManagerError, ManagerResult, OrdersManager};
pub use storage::{OrderStore, StorageError};

// Re-export shared types for convenience
pub use shared::order::{
    CommandError, CommandErrorCode, CommandResponse, EventPayload, Order, OrderCommand,
    OrderCommandPayload, OrderEvent, OrderStatus,
};
