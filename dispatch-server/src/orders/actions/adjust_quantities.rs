//! AdjustQuantities command handler
//!
//! Replaces the item list while preserving each line's original quantity
//! for audit comparison.

use crate::orders::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use shared::order::{EventPayload, ItemAdjustment, OrderEvent, OrderItem};

/// AdjustQuantities action
#[derive(Debug, Clone)]
pub struct AdjustQuantitiesAction {
    pub order_id: String,
    pub items: Vec<ItemAdjustment>,
}

impl CommandHandler for AdjustQuantitiesAction {
    fn execute(
        &self,
        ctx: &CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<OrderEvent, OrderError> {
        let order = ctx.find_order(&self.order_id)?;
        if order.status.is_terminal() {
            return Err(OrderError::InvalidTransition(format!(
                "Cannot adjust quantities of order in {} status",
                order.status
            )));
        }
        if self.items.is_empty() {
            return Err(OrderError::Validation(
                "Adjustment must contain at least one item".to_string(),
            ));
        }

        let mut items = Vec::with_capacity(self.items.len());
        for adj in &self.items {
            if adj.item_name.trim().is_empty() {
                return Err(OrderError::Validation(
                    "Item name must not be blank".to_string(),
                ));
            }
            if adj.quantity == 0 {
                return Err(OrderError::Validation(format!(
                    "Item quantity must be positive: {}",
                    adj.item_name
                )));
            }

            let previous = adj
                .id
                .as_ref()
                .and_then(|id| order.items.iter().find(|p| &p.id == id));
            items.push(OrderItem {
                id: adj
                    .id
                    .clone()
                    .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
                item_name: adj.item_name.clone(),
                quantity: adj.quantity,
                original_quantity: Some(
                    previous
                        .map(|p| p.original_quantity.unwrap_or(p.quantity))
                        .unwrap_or(adj.quantity),
                ),
            });
        }

        Ok(OrderEvent::new(
            self.order_id.clone(),
            metadata.actor_role,
            metadata.actor_name.clone(),
            metadata.command_id.clone(),
            EventPayload::QuantitiesAdjusted { items },
        ))
    }
}
