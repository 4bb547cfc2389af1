//! Order Model

use super::history::HistoryEntry;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Order status - the order's stage in the fulfillment workflow
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    #[default]
    PendingAssistant,
    PendingFinance,
    Approved,
    ReadyForDriver,
    PartiallyShipped,
    InTransit,
    Completed,
    Rejected,
    OnHold,
    Canceled,
}

impl OrderStatus {
    /// Terminal statuses are retained for history display only
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            OrderStatus::Completed | OrderStatus::Rejected | OrderStatus::Canceled
        )
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            OrderStatus::PendingAssistant => "Pending Assistant",
            OrderStatus::PendingFinance => "Pending Finance",
            OrderStatus::Approved => "Approved",
            OrderStatus::ReadyForDriver => "Ready for Driver",
            OrderStatus::PartiallyShipped => "Partially Shipped",
            OrderStatus::InTransit => "In Transit",
            OrderStatus::Completed => "Completed",
            OrderStatus::Rejected => "Rejected",
            OrderStatus::OnHold => "On Hold",
            OrderStatus::Canceled => "Canceled",
        };
        f.write_str(label)
    }
}

/// Shipment status - one driver trip's stage
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ShipmentStatus {
    #[default]
    Assigned,
    PickedUp,
    Delivered,
    Emergency,
}

/// Delivery type - who carries the order
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum DeliveryType {
    #[default]
    #[serde(rename = "Own Cars")]
    OwnCars,
    #[serde(rename = "Outsource")]
    Outsource,
}

/// Delivery shift requested by the customer
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DeliveryShift {
    #[default]
    FirstTrip,
    SecondTrip,
    Night,
}

/// Order line item
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderItem {
    pub id: String,
    pub item_name: String,
    pub quantity: u32,
    /// Quantity captured at creation (or first adjustment), preserved across
    /// downstream quantity edits for audit comparison
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_quantity: Option<u32>,
}

impl OrderItem {
    pub fn new(item_name: impl Into<String>, quantity: u32) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            item_name: item_name.into(),
            quantity,
            original_quantity: None,
        }
    }
}

/// Emergency report attached to an interrupted shipment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmergencyReport {
    pub details: String,
    pub timestamp: i64,
    pub reporter_role: String,
}

/// Shipment - a single driver trip carrying a subset of an order's items
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Shipment {
    pub id: String,
    pub driver_name: String,
    pub driver_phone: String,
    pub car_number: String,
    pub warehouse_location: String,
    /// Planned departure time ("HH:MM")
    pub dispatch_time: String,
    pub items: Vec<OrderItem>,
    pub status: ShipmentStatus,
    /// Unix millis, set when the driver confirms pickup
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actual_pickup_time: Option<i64>,
    /// Unix millis, set when the driver confirms delivery
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivered_at: Option<i64>,
    /// Proof-of-delivery photo (base64)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delivery_photo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emergency: Option<EmergencyReport>,
}

impl Shipment {
    pub fn new(
        driver_name: impl Into<String>,
        driver_phone: impl Into<String>,
        car_number: impl Into<String>,
        warehouse_location: impl Into<String>,
        dispatch_time: impl Into<String>,
        items: Vec<OrderItem>,
    ) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            driver_name: driver_name.into(),
            driver_phone: driver_phone.into(),
            car_number: car_number.into(),
            warehouse_location: warehouse_location.into(),
            dispatch_time: dispatch_time.into(),
            items,
            status: ShipmentStatus::Assigned,
            actual_pickup_time: None,
            delivered_at: None,
            delivery_photo: None,
            emergency: None,
        }
    }

    /// Raw quantity carried by this trip (sum of item quantities, not
    /// distinct item count)
    pub fn quantity(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

/// Order - a customer purchase request tracked through approval and fulfillment
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Order {
    pub id: String,
    /// Unique human-facing serial ("SO-000123")
    pub serial_number: String,
    pub customer_name: String,
    pub area_location: String,
    pub order_date: NaiveDate,
    pub receiving_date: NaiveDate,
    pub delivery_shift: DeliveryShift,
    pub delivery_type: DeliveryType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warehouse_note: Option<String>,
    /// Email of the sales actor who created the order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator_name: Option<String>,
    pub items: Vec<OrderItem>,
    #[serde(default)]
    pub shipments: Vec<Shipment>,
    pub status: OrderStatus,
    #[serde(default)]
    pub history: Vec<HistoryEntry>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_emergency_note: Option<String>,
    #[serde(default)]
    pub admin_emergency_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_emergency_timestamp: Option<i64>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Order {
    /// Create an empty order shell; the OrderCreated applier populates it
    pub fn new(id: String) -> Self {
        let now = chrono::Utc::now().timestamp_millis();
        Self {
            id,
            serial_number: String::new(),
            customer_name: String::new(),
            area_location: String::new(),
            order_date: chrono::Utc::now().date_naive(),
            receiving_date: chrono::Utc::now().date_naive(),
            delivery_shift: DeliveryShift::default(),
            delivery_type: DeliveryType::default(),
            overall_notes: None,
            warehouse_note: None,
            created_by: None,
            creator_name: None,
            items: Vec::new(),
            shipments: Vec::new(),
            status: OrderStatus::PendingAssistant,
            history: Vec::new(),
            admin_emergency_note: None,
            admin_emergency_active: false,
            admin_emergency_timestamp: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Total ordered quantity (raw integer sum over the item list)
    pub fn ordered_quantity(&self) -> u32 {
        self.items.iter().map(|i| i.quantity).sum()
    }

    pub fn shipment(&self, shipment_id: &str) -> Option<&Shipment> {
        self.shipments.iter().find(|s| s.id == shipment_id)
    }

    pub fn shipment_mut(&mut self, shipment_id: &str) -> Option<&mut Shipment> {
        self.shipments.iter_mut().find(|s| s.id == shipment_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delivery_type_serde_labels() {
        let own = serde_json::to_string(&DeliveryType::OwnCars).unwrap();
        assert_eq!(own, "\"Own Cars\"");
        let back: DeliveryType = serde_json::from_str("\"Outsource\"").unwrap();
        assert_eq!(back, DeliveryType::Outsource);
    }

    #[test]
    fn test_status_display_labels() {
        assert_eq!(OrderStatus::PendingAssistant.to_string(), "Pending Assistant");
        assert_eq!(OrderStatus::ReadyForDriver.to_string(), "Ready for Driver");
        assert_eq!(OrderStatus::OnHold.to_string(), "On Hold");
    }

    #[test]
    fn test_terminal_statuses() {
        assert!(OrderStatus::Completed.is_terminal());
        assert!(OrderStatus::Rejected.is_terminal());
        assert!(OrderStatus::Canceled.is_terminal());
        assert!(!OrderStatus::InTransit.is_terminal());
        assert!(!OrderStatus::OnHold.is_terminal());
    }

    #[test]
    fn test_quantities_sum_raw_integers() {
        let mut order = Order::new("order-1".to_string());
        order.items = vec![OrderItem::new("Rice", 6), OrderItem::new("Flour", 4)];
        assert_eq!(order.ordered_quantity(), 10);
    }
}
