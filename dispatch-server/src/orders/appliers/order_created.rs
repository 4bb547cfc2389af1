//! OrderCreated applier - populates the empty order shell from the draft

use super::push_history;
use crate::orders::traits::EventApplier;
use shared::order::{ActionKind, Order, OrderDraft, OrderEvent, OrderItem, OrderStatus};

/// Apply OrderCreated
pub struct OrderCreatedApplier {
    pub draft: OrderDraft,
    pub serial_number: String,
    pub created_by: String,
}

impl EventApplier for OrderCreatedApplier {
    fn apply(&self, order: &mut Order, event: &OrderEvent) {
        let event_date = chrono::DateTime::from_timestamp_millis(event.timestamp)
            .map(|d| d.date_naive())
            .unwrap_or_else(|| chrono::Utc::now().date_naive());

        order.serial_number = self.serial_number.clone();
        order.customer_name = self.draft.customer_name.clone();
        order.area_location = self.draft.area_location.clone();
        order.order_date = self.draft.order_date.unwrap_or(event_date);
        order.receiving_date = self.draft.receiving_date.unwrap_or(event_date);
        order.delivery_shift = self.draft.delivery_shift;
        order.delivery_type = self.draft.delivery_type;
        order.overall_notes = self.draft.overall_notes.clone();
        order.created_by = Some(self.created_by.clone());
        order.creator_name = Some(event.actor_name.clone());
        order.items = self
            .draft
            .items
            .iter()
            .map(|d| {
                let mut item = OrderItem::new(d.item_name.clone(), d.quantity);
                item.original_quantity = Some(d.quantity);
                item
            })
            .collect();
        order.status = OrderStatus::PendingAssistant;
        order.created_at = event.timestamp;

        push_history(order, event, ActionKind::OrderCreated);
    }
}
