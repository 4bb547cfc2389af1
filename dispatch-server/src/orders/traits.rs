//! Core traits for the command/event pipeline
//!
//! Commands are validated by `CommandHandler` implementations which emit
//! exactly one event; events are folded into order state by `EventApplier`
//! implementations. Handlers never mutate state, appliers never fail.

use enum_dispatch::enum_dispatch;
use shared::models::Role;
use shared::order::{CommandErrorCode, Order, OrderCommand, OrderEvent};
use thiserror::Error;

// enum_dispatch expands the EventAction impl at the trait definition site,
// so the enum and its variant types must be in scope here.
use crate::orders::appliers::*;

/// Errors raised while validating a command against current state
#[derive(Debug, Error)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    OrderNotFound(String),

    #[error("Shipment not found: {0}")]
    ShipmentNotFound(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Role {role} is not permitted to {action}")]
    NotPermitted { role: String, action: String },

    #[error("Invalid transition: {0}")]
    InvalidTransition(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl OrderError {
    /// Wire-level error code for the command response
    pub fn code(&self) -> CommandErrorCode {
        match self {
            OrderError::OrderNotFound(_) => CommandErrorCode::OrderNotFound,
            OrderError::ShipmentNotFound(_) => CommandErrorCode::ShipmentNotFound,
            OrderError::Validation(_) => CommandErrorCode::Validation,
            OrderError::NotPermitted { .. } => CommandErrorCode::NotPermitted,
            OrderError::InvalidTransition(_) => CommandErrorCode::InvalidTransition,
            OrderError::Internal(_) => CommandErrorCode::Internal,
        }
    }
}

/// Actor metadata extracted from the command envelope
#[derive(Debug, Clone)]
pub struct CommandMetadata {
    pub command_id: String,
    pub actor_role: Role,
    pub actor_name: String,
    pub actor_email: String,
    /// Client timestamp (audit only, server time is authoritative)
    pub timestamp: i64,
}

impl CommandMetadata {
    pub fn from_command(cmd: &OrderCommand) -> Self {
        Self {
            command_id: cmd.command_id.clone(),
            actor_role: cmd.actor.role,
            actor_name: cmd.actor.name.clone(),
            actor_email: cmd.actor.email.clone(),
            timestamp: cmd.timestamp,
        }
    }
}

/// Read-only view of the order collection handed to command handlers
pub struct CommandContext<'a> {
    orders: &'a [Order],
}

impl<'a> CommandContext<'a> {
    pub fn new(orders: &'a [Order]) -> Self {
        Self { orders }
    }

    pub fn find_order(&self, order_id: &str) -> Result<&'a Order, OrderError> {
        self.orders
            .iter()
            .find(|o| o.id == order_id)
            .ok_or_else(|| OrderError::OrderNotFound(order_id.to_string()))
    }
}

/// Command handler trait - validates a command and produces one event
pub trait CommandHandler {
    fn execute(
        &self,
        ctx: &CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<OrderEvent, OrderError>;
}

/// Event applier trait - pure fold of one event into order state
#[enum_dispatch]
pub trait EventApplier {
    fn apply(&self, order: &mut Order, event: &OrderEvent);
}
