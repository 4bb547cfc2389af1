//! Structured history - append-only audit log
//!
//! Internally every entry carries a tagged [`ActionKind`] so tests and
//! consumers can match on structured fields; the legacy free-text messages
//! are produced only at the presentation boundary via `Display`.

use serde::{Deserialize, Serialize};

/// Which human review stage produced a decision
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReviewStage {
    Assistant,
    Finance,
}

/// Structured description of one action taken on an order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ActionKind {
    OrderCreated,
    OrderUpdated,
    /// Assistant-side detail edit that does not reset the workflow
    DetailsModified,
    Approved {
        stage: ReviewStage,
        #[serde(skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
    Rejected {
        stage: ReviewStage,
        #[serde(skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
    MarkedReady {
        #[serde(skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
    /// Outsourced orders skip driver dispatch; the message is fixed
    OutsourceDelivered,
    QuantitiesAdjusted,
    ShipmentDispatched {
        driver_name: String,
    },
    ShipmentPickedUp,
    ShipmentDelivered {
        #[serde(skip_serializing_if = "Option::is_none")]
        duration: Option<String>,
    },
    DriverReassigned {
        from_driver: String,
        to_driver: String,
    },
    EmergencyReported {
        details: String,
    },
    EmergencyResolved,
    AdminCanceled {
        reason: String,
    },
    AdminTransferred {
        customer_name: String,
        reason: String,
    },
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ActionKind::OrderCreated => write!(f, "Order Created"),
            ActionKind::OrderUpdated => write!(f, "Order Updated"),
            ActionKind::DetailsModified => write!(f, "Modified Details Snapshot"),
            ActionKind::Approved { stage, note } => match note {
                Some(n) if !n.trim().is_empty() => write!(f, "{}", n),
                _ => match stage {
                    ReviewStage::Assistant => write!(f, "Approved Quantities"),
                    ReviewStage::Finance => write!(f, "Order Approved"),
                },
            },
            ActionKind::Rejected { note, .. } => match note {
                Some(n) if !n.trim().is_empty() => write!(f, "Rejected: {}", n),
                _ => write!(f, "Rejected"),
            },
            ActionKind::MarkedReady { note } => match note {
                Some(n) if !n.trim().is_empty() => write!(f, "{}", n),
                _ => write!(f, "Packed"),
            },
            ActionKind::OutsourceDelivered => write!(f, "Marked Delivered (Outsource)"),
            ActionKind::QuantitiesAdjusted => {
                write!(f, "Adjusted Quantities only and added notes")
            }
            ActionKind::ShipmentDispatched { driver_name } => {
                write!(f, "Dispatched Shipment to {}", driver_name)
            }
            ActionKind::ShipmentPickedUp => write!(f, "Shipment Picked Up"),
            ActionKind::ShipmentDelivered { duration } => match duration {
                Some(d) => write!(f, "Shipment Delivered (Trip Duration: {})", d),
                None => write!(f, "Shipment Delivered"),
            },
            ActionKind::DriverReassigned {
                from_driver,
                to_driver,
            } => write!(
                f,
                "RE-ASSIGNED: Trip transferred from {} to {}",
                from_driver, to_driver
            ),
            ActionKind::EmergencyReported { details } => write!(
                f,
                "EMERGENCY/ACCIDENT: {}. Requesting Re-Assignment.",
                details
            ),
            ActionKind::EmergencyResolved => write!(f, "Emergency Resolved - Resuming Delivery"),
            ActionKind::AdminCanceled { reason } => write!(f, "EMERGENCY CANCEL: {}", reason),
            ActionKind::AdminTransferred {
                customer_name,
                reason,
            } => write!(
                f,
                "EMERGENCY TRANSFER to client {}: {}",
                customer_name, reason
            ),
        }
    }
}

/// One immutable audit record; never mutated or reordered once written
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HistoryEntry {
    /// Human-facing role label ("Sales Supervisor", "Truck Driver", ...)
    pub role: String,
    pub action: ActionKind,
    /// Unix millis
    pub timestamp: i64,
    /// Name of the acting user
    pub user: String,
}

impl HistoryEntry {
    /// Free-text rendering of the action (presentation boundary only)
    pub fn message(&self) -> String {
        self.action.to_string()
    }
}
