//! MarkedReady applier
//!
//! Packed orders become ready for driver dispatch; outsourced orders have
//! no driver leg and finalize to Completed in the same step.

use super::push_history;
use crate::orders::traits::EventApplier;
use shared::order::{ActionKind, Order, OrderEvent, OrderStatus};

/// Apply MarkedReady
pub struct MarkedReadyApplier {
    pub note: Option<String>,
    pub outsource: bool,
}

impl EventApplier for MarkedReadyApplier {
    fn apply(&self, order: &mut Order, event: &OrderEvent) {
        order.warehouse_note = self.note.clone();
        let action = if self.outsource {
            order.status = OrderStatus::Completed;
            ActionKind::OutsourceDelivered
        } else {
            order.status = OrderStatus::ReadyForDriver;
            ActionKind::MarkedReady {
                note: self.note.clone(),
            }
        };
        push_history(order, event, action);
    }
}
