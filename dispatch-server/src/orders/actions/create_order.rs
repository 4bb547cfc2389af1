//! CreateOrder command handler
//!
//! Validates a sales draft and emits the creation event. The order id and
//! serial number are pre-allocated by the manager so the event is complete.

use crate::orders::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use shared::order::{EventPayload, OrderDraft, OrderEvent};
use validator::Validate;

/// CreateOrder action
#[derive(Debug, Clone)]
pub struct CreateOrderAction {
    pub order_id: String,
    pub serial_number: String,
    pub draft: OrderDraft,
}

impl CommandHandler for CreateOrderAction {
    fn execute(
        &self,
        _ctx: &CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<OrderEvent, OrderError> {
        self.draft
            .validate()
            .map_err(|e| OrderError::Validation(e.to_string()))?;

        Ok(OrderEvent::new(
            self.order_id.clone(),
            metadata.actor_role,
            metadata.actor_name.clone(),
            metadata.command_id.clone(),
            EventPayload::OrderCreated {
                draft: self.draft.clone(),
                serial_number: self.serial_number.clone(),
                created_by: metadata.actor_email.clone(),
            },
        ))
    }
}
