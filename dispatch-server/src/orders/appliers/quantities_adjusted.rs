//! QuantitiesAdjusted applier - replaces the item list in place

use super::push_history;
use crate::orders::traits::EventApplier;
use shared::order::{ActionKind, Order, OrderEvent, OrderItem};

/// Apply QuantitiesAdjusted
pub struct QuantitiesAdjustedApplier {
    /// Replacement item list; original quantities were carried over by the
    /// command handler
    pub items: Vec<OrderItem>,
}

impl EventApplier for QuantitiesAdjustedApplier {
    fn apply(&self, order: &mut Order, event: &OrderEvent) {
        order.items = self.items.clone();
        push_history(order, event, ActionKind::QuantitiesAdjusted);
    }
}
