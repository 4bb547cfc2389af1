//! Validated input payloads
//!
//! Drafts are the untrusted boundary: everything arriving from the UI or the
//! text-extraction collaborator goes through `validator` before any state
//! mutation is attempted.

use super::types::{DeliveryShift, DeliveryType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// New/updated order input from a sales actor
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderDraft {
    #[validate(length(min = 1, message = "customer name is required"))]
    pub customer_name: String,
    #[validate(length(min = 1, message = "area/location is required"))]
    pub area_location: String,
    /// Defaults to today when omitted
    pub order_date: Option<NaiveDate>,
    #[validate(required(message = "receiving date is required"))]
    pub receiving_date: Option<NaiveDate>,
    #[serde(default)]
    pub delivery_shift: DeliveryShift,
    #[serde(default)]
    pub delivery_type: DeliveryType,
    #[validate(length(min = 1, message = "order must contain at least one item"), nested)]
    pub items: Vec<ItemDraft>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_notes: Option<String>,
}

/// One item line of a draft
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ItemDraft {
    #[validate(length(min = 1, message = "item name must not be blank"))]
    pub item_name: String,
    #[validate(range(min = 1, message = "item quantity must be positive"))]
    pub quantity: u32,
}

/// Partial prefill returned by the text-extraction collaborator.
///
/// Never trusted: callers merge it into an [`OrderDraft`] which still goes
/// through normal validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DraftPrefill {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area_location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub receiving_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub delivery_shift: Option<DeliveryShift>,
    #[serde(default)]
    pub items: Vec<ItemDraft>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall_notes: Option<String>,
}

/// Shipment dispatch input from a driver supervisor
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ShipmentDraft {
    #[validate(length(min = 1, message = "driver name is required"))]
    pub driver_name: String,
    #[serde(default)]
    pub driver_phone: String,
    #[validate(length(min = 1, message = "car number is required"))]
    pub car_number: String,
    #[validate(length(min = 1, message = "warehouse location is required"))]
    pub warehouse_location: String,
    /// Planned departure ("HH:MM")
    #[serde(default)]
    pub dispatch_time: String,
    /// Items assigned to this trip; omitted means the order's full item list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[validate(nested)]
    pub items: Option<Vec<ItemDraft>>,
}

/// Replacement driver/vehicle details for a re-assignment
#[derive(Debug, Clone, Serialize, Deserialize, Validate, PartialEq, Eq)]
pub struct DriverInfo {
    #[validate(length(min = 1, message = "driver name is required"))]
    pub driver_name: String,
    #[serde(default)]
    pub driver_phone: String,
    #[serde(default)]
    pub car_number: String,
    #[serde(default)]
    pub dispatch_time: String,
}
