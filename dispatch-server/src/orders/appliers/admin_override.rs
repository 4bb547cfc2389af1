//! Admin override appliers - emergency cancel and transfer

use super::push_history;
use crate::orders::traits::EventApplier;
use shared::order::{ActionKind, Order, OrderEvent, OrderStatus};

/// Apply AdminCanceled
pub struct AdminCanceledApplier {
    pub reason: String,
}

impl EventApplier for AdminCanceledApplier {
    fn apply(&self, order: &mut Order, event: &OrderEvent) {
        order.status = OrderStatus::Canceled;
        order.admin_emergency_note = Some(self.reason.clone());
        order.admin_emergency_active = true;
        order.admin_emergency_timestamp = Some(event.timestamp);
        push_history(
            order,
            event,
            ActionKind::AdminCanceled {
                reason: self.reason.clone(),
            },
        );
    }
}

/// Apply AdminTransferred
///
/// The goods physically go to the new customer, so the order closes as
/// Completed under the replacement customer details.
pub struct AdminTransferredApplier {
    pub customer_name: String,
    pub area_location: Option<String>,
    pub reason: String,
}

impl EventApplier for AdminTransferredApplier {
    fn apply(&self, order: &mut Order, event: &OrderEvent) {
        order.customer_name = self.customer_name.clone();
        if let Some(location) = &self.area_location {
            order.area_location = location.clone();
        }
        order.status = OrderStatus::Completed;
        order.admin_emergency_note = Some(self.reason.clone());
        order.admin_emergency_active = true;
        order.admin_emergency_timestamp = Some(event.timestamp);
        push_history(
            order,
            event,
            ActionKind::AdminTransferred {
                customer_name: self.customer_name.clone(),
                reason: self.reason.clone(),
            },
        );
    }
}
