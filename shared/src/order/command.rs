//! Order commands - requests from role actors to move an order forward

use super::draft::{DriverInfo, OrderDraft, ShipmentDraft};
use crate::models::Profile;
use serde::{Deserialize, Serialize};

/// Command envelope carrying the acting profile
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderCommand {
    /// Unique command ID (idempotency key)
    pub command_id: String,
    /// Acting profile (role + attribution), supplied by the login collaborator
    pub actor: Profile,
    /// Client timestamp (Unix millis) - for audit only, server time is
    /// authoritative
    pub timestamp: i64,
    pub payload: OrderCommandPayload,
}

impl OrderCommand {
    pub fn new(actor: Profile, payload: OrderCommandPayload) -> Self {
        Self {
            command_id: uuid::Uuid::new_v4().to_string(),
            actor,
            timestamp: chrono::Utc::now().timestamp_millis(),
            payload,
        }
    }
}

/// One line of a quantity adjustment. Carries the existing item id when the
/// line replaces an existing item so its original quantity can be preserved.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemAdjustment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub item_name: String,
    pub quantity: u32,
}

/// Driver trip step requested by [`OrderCommandPayload::AdvanceShipment`]
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipmentStep {
    PickedUp,
    Delivered,
}

/// Command payload variants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderCommandPayload {
    CreateOrder {
        draft: OrderDraft,
    },
    /// Sales re-submit (resets review) or assistant detail edit (keeps status)
    UpdateOrder {
        order_id: String,
        draft: OrderDraft,
    },
    AssistantReview {
        order_id: String,
        approve: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
    FinanceReview {
        order_id: String,
        approve: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
    MarkReady {
        order_id: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
    AdjustQuantities {
        order_id: String,
        items: Vec<ItemAdjustment>,
    },
    CreateShipment {
        order_id: String,
        draft: ShipmentDraft,
    },
    AdvanceShipment {
        order_id: String,
        shipment_id: String,
        step: ShipmentStep,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        photo: Option<String>,
    },
    ReassignDriver {
        order_id: String,
        shipment_id: String,
        driver: DriverInfo,
    },
    ReportEmergency {
        order_id: String,
        shipment_id: String,
        details: String,
    },
    ResolveEmergency {
        order_id: String,
        shipment_id: String,
    },
    AdminCancel {
        order_id: String,
        reason: String,
    },
    AdminTransfer {
        order_id: String,
        new_customer: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        new_location: Option<String>,
        reason: String,
    },
}

impl OrderCommandPayload {
    /// Short label for logs
    pub fn kind(&self) -> &'static str {
        match self {
            OrderCommandPayload::CreateOrder { .. } => "CREATE_ORDER",
            OrderCommandPayload::UpdateOrder { .. } => "UPDATE_ORDER",
            OrderCommandPayload::AssistantReview { .. } => "ASSISTANT_REVIEW",
            OrderCommandPayload::FinanceReview { .. } => "FINANCE_REVIEW",
            OrderCommandPayload::MarkReady { .. } => "MARK_READY",
            OrderCommandPayload::AdjustQuantities { .. } => "ADJUST_QUANTITIES",
            OrderCommandPayload::CreateShipment { .. } => "CREATE_SHIPMENT",
            OrderCommandPayload::AdvanceShipment { .. } => "ADVANCE_SHIPMENT",
            OrderCommandPayload::ReassignDriver { .. } => "REASSIGN_DRIVER",
            OrderCommandPayload::ReportEmergency { .. } => "REPORT_EMERGENCY",
            OrderCommandPayload::ResolveEmergency { .. } => "RESOLVE_EMERGENCY",
            OrderCommandPayload::AdminCancel { .. } => "ADMIN_CANCEL",
            OrderCommandPayload::AdminTransfer { .. } => "ADMIN_TRANSFER",
        }
    }
}

/// Machine-readable command failure codes
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommandErrorCode {
    OrderNotFound,
    ShipmentNotFound,
    NotPermitted,
    InvalidTransition,
    Validation,
    DuplicateCommand,
    Storage,
    Internal,
}

/// Command failure detail
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandError {
    pub code: CommandErrorCode,
    pub message: String,
}

/// Result of executing one command
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommandResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<CommandError>,
}

impl CommandResponse {
    pub fn ok(order_id: impl Into<String>) -> Self {
        Self {
            success: true,
            order_id: Some(order_id.into()),
            error: None,
        }
    }

    pub fn error(code: CommandErrorCode, message: impl Into<String>) -> Self {
        Self {
            success: false,
            order_id: None,
            error: Some(CommandError {
                code,
                message: message.into(),
            }),
        }
    }
}
