//! Emergency appliers - suspend and resume a trip

use super::push_history;
use crate::orders::reducer;
use crate::orders::traits::EventApplier;
use shared::order::{ActionKind, EmergencyReport, Order, OrderEvent, ShipmentStatus};

/// Apply EmergencyReported
pub struct EmergencyReportedApplier {
    pub shipment_id: String,
    pub report: EmergencyReport,
}

impl EventApplier for EmergencyReportedApplier {
    fn apply(&self, order: &mut Order, event: &OrderEvent) {
        let Some(shipment) = order.shipment_mut(&self.shipment_id) else {
            return;
        };
        shipment.status = ShipmentStatus::Emergency;
        shipment.emergency = Some(self.report.clone());
        reducer::refresh_status(order);
        push_history(
            order,
            event,
            ActionKind::EmergencyReported {
                details: self.report.details.clone(),
            },
        );
    }
}

/// Apply EmergencyResolved
///
/// The same driver continues the trip, so the shipment resumes from
/// PickedUp - the goods never left the truck.
pub struct EmergencyResolvedApplier {
    pub shipment_id: String,
}

impl EventApplier for EmergencyResolvedApplier {
    fn apply(&self, order: &mut Order, event: &OrderEvent) {
        let Some(shipment) = order.shipment_mut(&self.shipment_id) else {
            return;
        };
        shipment.status = ShipmentStatus::PickedUp;
        shipment.emergency = None;
        reducer::refresh_status(order);
        push_history(order, event, ActionKind::EmergencyResolved);
    }
}
