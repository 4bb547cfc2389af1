//! UpdateOrder command handler
//!
//! Full detail edit. A sales re-submit resets the review pipeline - this is
//! the recovery path for rejected orders - while an assistant edit keeps the
//! current status; that split happens in the applier based on the acting
//! role.

use crate::orders::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use shared::order::{EventPayload, OrderDraft, OrderEvent, OrderStatus};
use validator::Validate;

/// UpdateOrder action
#[derive(Debug, Clone)]
pub struct UpdateOrderAction {
    pub order_id: String,
    pub draft: OrderDraft,
}

impl CommandHandler for UpdateOrderAction {
    fn execute(
        &self,
        ctx: &CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<OrderEvent, OrderError> {
        let order = ctx.find_order(&self.order_id)?;
        // Rejected is editable: re-submitting is how a rejected order
        // re-enters the review pipeline.
        if matches!(order.status, OrderStatus::Completed | OrderStatus::Canceled) {
            return Err(OrderError::InvalidTransition(format!(
                "Cannot edit order in {} status",
                order.status
            )));
        }

        self.draft
            .validate()
            .map_err(|e| OrderError::Validation(e.to_string()))?;

        Ok(OrderEvent::new(
            self.order_id.clone(),
            metadata.actor_role,
            metadata.actor_name.clone(),
            metadata.command_id.clone(),
            EventPayload::OrderUpdated {
                draft: self.draft.clone(),
            },
        ))
    }
}
