//! DriverReassigned applier
//!
//! Replaces the trip's driver and vehicle, clears any active emergency, and
//! restarts the trip from Assigned.

use super::push_history;
use crate::orders::reducer;
use crate::orders::traits::EventApplier;
use shared::order::{ActionKind, DriverInfo, Order, OrderEvent, ShipmentStatus};

/// Apply DriverReassigned
pub struct DriverReassignedApplier {
    pub shipment_id: String,
    pub previous_driver: String,
    pub driver: DriverInfo,
}

impl EventApplier for DriverReassignedApplier {
    fn apply(&self, order: &mut Order, event: &OrderEvent) {
        let Some(shipment) = order.shipment_mut(&self.shipment_id) else {
            return;
        };
        shipment.driver_name = self.driver.driver_name.clone();
        shipment.driver_phone = self.driver.driver_phone.clone();
        shipment.car_number = self.driver.car_number.clone();
        shipment.dispatch_time = self.driver.dispatch_time.clone();
        shipment.status = ShipmentStatus::Assigned;
        shipment.actual_pickup_time = None;
        shipment.emergency = None;
        reducer::refresh_status(order);
        push_history(
            order,
            event,
            ActionKind::DriverReassigned {
                from_driver: self.previous_driver.clone(),
                to_driver: self.driver.driver_name.clone(),
            },
        );
    }
}
