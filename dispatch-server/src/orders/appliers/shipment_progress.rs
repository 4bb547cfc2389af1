//! Shipment progress appliers - pickup and delivery confirmations

use super::push_history;
use crate::orders::reducer;
use crate::orders::traits::EventApplier;
use shared::order::{ActionKind, Order, OrderEvent, ShipmentStatus};

/// Apply ShipmentPickedUp
pub struct ShipmentPickedUpApplier {
    pub shipment_id: String,
    pub picked_up_at: i64,
}

impl EventApplier for ShipmentPickedUpApplier {
    fn apply(&self, order: &mut Order, event: &OrderEvent) {
        let Some(shipment) = order.shipment_mut(&self.shipment_id) else {
            return;
        };
        shipment.status = ShipmentStatus::PickedUp;
        shipment.actual_pickup_time = Some(self.picked_up_at);
        reducer::refresh_status(order);
        push_history(order, event, ActionKind::ShipmentPickedUp);
    }
}

/// Apply ShipmentDelivered
pub struct ShipmentDeliveredApplier {
    pub shipment_id: String,
    pub delivered_at: i64,
    pub duration: Option<String>,
    pub photo: Option<String>,
}

impl EventApplier for ShipmentDeliveredApplier {
    fn apply(&self, order: &mut Order, event: &OrderEvent) {
        let Some(shipment) = order.shipment_mut(&self.shipment_id) else {
            return;
        };
        shipment.status = ShipmentStatus::Delivered;
        shipment.delivered_at = Some(self.delivered_at);
        shipment.delivery_photo = self.photo.clone();
        reducer::refresh_status(order);
        push_history(
            order,
            event,
            ActionKind::ShipmentDelivered {
                duration: self.duration.clone(),
            },
        );
    }
}
