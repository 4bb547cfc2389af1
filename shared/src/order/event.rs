//! Order events - immutable facts recorded after command processing

use super::draft::{DriverInfo, OrderDraft};
use super::history::ReviewStage;
use super::types::{EmergencyReport, OrderItem, Shipment};
use crate::models::Role;
use serde::{Deserialize, Serialize};

/// Order event - produced by a command handler, applied by exactly one applier
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderEvent {
    /// Event unique ID
    pub event_id: String,
    /// Order this event belongs to
    pub order_id: String,
    /// Server timestamp (Unix millis) - authoritative for state evolution
    pub timestamp: i64,
    /// Acting role (snapshot for audit)
    pub actor_role: Role,
    /// Acting user name (snapshot for audit)
    pub actor_name: String,
    /// Command that triggered this event (for audit tracing)
    pub command_id: String,
    pub payload: EventPayload,
}

/// Event payload variants
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventPayload {
    OrderCreated {
        draft: OrderDraft,
        /// Server-generated serial number (always present)
        serial_number: String,
        /// Email of the creating sales actor (for the sales history filter)
        created_by: String,
    },
    OrderUpdated {
        draft: OrderDraft,
    },
    ReviewPassed {
        stage: ReviewStage,
        #[serde(skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
    ReviewRejected {
        stage: ReviewStage,
        #[serde(skip_serializing_if = "Option::is_none")]
        note: Option<String>,
    },
    MarkedReady {
        #[serde(skip_serializing_if = "Option::is_none")]
        note: Option<String>,
        /// Outsourced orders finalize directly to Completed
        outsource: bool,
    },
    QuantitiesAdjusted {
        /// Replacement item list, original_quantity already carried over
        items: Vec<OrderItem>,
    },
    ShipmentDispatched {
        shipment: Shipment,
    },
    ShipmentPickedUp {
        shipment_id: String,
        picked_up_at: i64,
    },
    ShipmentDelivered {
        shipment_id: String,
        delivered_at: i64,
        /// Human-readable trip duration ("2h 15m"), absent when pickup time
        /// was never recorded
        #[serde(skip_serializing_if = "Option::is_none")]
        duration: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        photo: Option<String>,
    },
    DriverReassigned {
        shipment_id: String,
        previous_driver: String,
        driver: DriverInfo,
    },
    EmergencyReported {
        shipment_id: String,
        report: EmergencyReport,
    },
    EmergencyResolved {
        shipment_id: String,
    },
    AdminCanceled {
        reason: String,
    },
    AdminTransferred {
        customer_name: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        area_location: Option<String>,
        reason: String,
    },
}

impl OrderEvent {
    pub fn new(
        order_id: String,
        actor_role: Role,
        actor_name: String,
        command_id: String,
        payload: EventPayload,
    ) -> Self {
        Self {
            event_id: uuid::Uuid::new_v4().to_string(),
            order_id,
            // Server timestamp is always set here - this is authoritative
            timestamp: chrono::Utc::now().timestamp_millis(),
            actor_role,
            actor_name,
            command_id,
            payload,
        }
    }
}
