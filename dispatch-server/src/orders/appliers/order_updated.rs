//! OrderUpdated applier
//!
//! A sales edit resets the order to the start of the review pipeline; an
//! assistant-side edit during review only refreshes the details snapshot
//! and keeps the current status.

use super::push_history;
use crate::orders::reducer;
use crate::orders::traits::EventApplier;
use shared::models::Role;
use shared::order::{ActionKind, Order, OrderDraft, OrderEvent, OrderItem, OrderStatus};

/// Apply OrderUpdated
pub struct OrderUpdatedApplier {
    pub draft: OrderDraft,
}

impl EventApplier for OrderUpdatedApplier {
    fn apply(&self, order: &mut Order, event: &OrderEvent) {
        let mut items: Vec<OrderItem> = self
            .draft
            .items
            .iter()
            .map(|d| OrderItem::new(d.item_name.clone(), d.quantity))
            .collect();
        reducer::carry_original_quantities(&order.items, &mut items);

        order.customer_name = self.draft.customer_name.clone();
        order.area_location = self.draft.area_location.clone();
        if let Some(date) = self.draft.order_date {
            order.order_date = date;
        }
        if let Some(date) = self.draft.receiving_date {
            order.receiving_date = date;
        }
        order.delivery_shift = self.draft.delivery_shift;
        order.delivery_type = self.draft.delivery_type;
        order.overall_notes = self.draft.overall_notes.clone();
        order.items = items;

        let action = if event.actor_role == Role::Sales {
            order.status = OrderStatus::PendingAssistant;
            ActionKind::OrderUpdated
        } else {
            ActionKind::DetailsModified
        };
        push_history(order, event, action);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::actions::test_support::order_in;
    use crate::orders::appliers::test_support::event_from;
    use shared::order::{DeliveryShift, DeliveryType, EventPayload, ItemDraft};

    fn draft() -> OrderDraft {
        OrderDraft {
            customer_name: "Giza Wholesale".to_string(),
            area_location: "Giza".to_string(),
            order_date: None,
            receiving_date: Some(chrono::Utc::now().date_naive()),
            delivery_shift: DeliveryShift::SecondTrip,
            delivery_type: DeliveryType::OwnCars,
            items: vec![ItemDraft {
                item_name: "Flour 50kg".to_string(),
                quantity: 4,
            }],
            overall_notes: None,
        }
    }

    #[test]
    fn test_sales_update_resets_review_pipeline() {
        let mut order = order_in(OrderStatus::Rejected);
        let draft = draft();
        let event = event_from(
            Role::Sales,
            EventPayload::OrderUpdated {
                draft: draft.clone(),
            },
        );

        OrderUpdatedApplier { draft }.apply(&mut order, &event);

        assert_eq!(order.status, OrderStatus::PendingAssistant);
        assert_eq!(order.customer_name, "Giza Wholesale");
        assert_eq!(order.history.last().map(|h| &h.action), Some(&ActionKind::OrderUpdated));
    }

    #[test]
    fn test_assistant_edit_keeps_status() {
        let mut order = order_in(OrderStatus::PendingAssistant);
        let draft = draft();
        let event = event_from(
            Role::Assistant,
            EventPayload::OrderUpdated {
                draft: draft.clone(),
            },
        );

        OrderUpdatedApplier { draft }.apply(&mut order, &event);

        assert_eq!(order.status, OrderStatus::PendingAssistant);
        assert_eq!(
            order.history.last().map(|h| &h.action),
            Some(&ActionKind::DetailsModified)
        );
    }

    #[test]
    fn test_replacement_items_get_original_quantity() {
        let mut order = order_in(OrderStatus::PendingAssistant);
        let draft = draft();
        let event = event_from(
            Role::Sales,
            EventPayload::OrderUpdated {
                draft: draft.clone(),
            },
        );

        OrderUpdatedApplier { draft }.apply(&mut order, &event);

        // New line, so its own quantity becomes the original
        assert_eq!(order.items[0].original_quantity, Some(4));
    }
}
