//! MarkReady command handler
//!
//! Warehouse packs an approved order. Outsourced orders have no driver leg,
//! so the same command finalizes them directly - the applier handles that
//! split via the `outsource` flag.

use crate::orders::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use shared::order::{DeliveryType, EventPayload, OrderEvent, OrderStatus};

/// MarkReady action
#[derive(Debug, Clone)]
pub struct MarkReadyAction {
    pub order_id: String,
    pub note: Option<String>,
}

impl CommandHandler for MarkReadyAction {
    fn execute(
        &self,
        ctx: &CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<OrderEvent, OrderError> {
        let order = ctx.find_order(&self.order_id)?;
        if order.status != OrderStatus::Approved {
            return Err(OrderError::InvalidTransition(format!(
                "Only approved orders can be packed, order is {}",
                order.status
            )));
        }

        Ok(OrderEvent::new(
            self.order_id.clone(),
            metadata.actor_role,
            metadata.actor_name.clone(),
            metadata.command_id.clone(),
            EventPayload::MarkedReady {
                note: self.note.clone(),
                outsource: order.delivery_type == DeliveryType::Outsource,
            },
        ))
    }
}
