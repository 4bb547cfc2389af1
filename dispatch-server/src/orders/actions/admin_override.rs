//! Admin override command handlers
//!
//! Escape hatches that bypass the normal state machine: an admin can cancel
//! an order or transfer the goods to a different customer and close the
//! order out. Any current status is a valid precondition - overrides exist
//! precisely for orders the ordinary pipeline can no longer move.

use crate::orders::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use shared::order::{EventPayload, OrderEvent};

/// AdminCancel action
#[derive(Debug, Clone)]
pub struct AdminCancelAction {
    pub order_id: String,
    pub reason: String,
}

impl CommandHandler for AdminCancelAction {
    fn execute(
        &self,
        ctx: &CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<OrderEvent, OrderError> {
        ctx.find_order(&self.order_id)?;
        if self.reason.trim().is_empty() {
            return Err(OrderError::Validation(
                "Cancel reason must not be blank".to_string(),
            ));
        }

        Ok(OrderEvent::new(
            self.order_id.clone(),
            metadata.actor_role,
            metadata.actor_name.clone(),
            metadata.command_id.clone(),
            EventPayload::AdminCanceled {
                reason: self.reason.trim().to_string(),
            },
        ))
    }
}

/// AdminTransfer action
#[derive(Debug, Clone)]
pub struct AdminTransferAction {
    pub order_id: String,
    pub new_customer: String,
    pub new_location: Option<String>,
    pub reason: String,
}

impl CommandHandler for AdminTransferAction {
    fn execute(
        &self,
        ctx: &CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<OrderEvent, OrderError> {
        ctx.find_order(&self.order_id)?;
        if self.new_customer.trim().is_empty() {
            return Err(OrderError::Validation(
                "Transfer target customer must not be blank".to_string(),
            ));
        }
        if self.reason.trim().is_empty() {
            return Err(OrderError::Validation(
                "Transfer reason must not be blank".to_string(),
            ));
        }

        Ok(OrderEvent::new(
            self.order_id.clone(),
            metadata.actor_role,
            metadata.actor_name.clone(),
            metadata.command_id.clone(),
            EventPayload::AdminTransferred {
                customer_name: self.new_customer.trim().to_string(),
                area_location: self.new_location.clone(),
                reason: self.reason.trim().to_string(),
            },
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::actions::test_support::{metadata_for, order_in};
    use shared::models::Role;
    use shared::order::OrderStatus;

    #[test]
    fn test_cancel_in_flight_order() {
        let orders = vec![order_in(OrderStatus::InTransit)];
        let ctx = CommandContext::new(&orders);
        let action = AdminCancelAction {
            order_id: "order-1".to_string(),
            reason: "Customer bankruptcy".to_string(),
        };

        let event = action.execute(&ctx, &metadata_for(Role::Admin)).unwrap();
        assert!(matches!(
            event.payload,
            EventPayload::AdminCanceled { .. }
        ));
    }

    #[test]
    fn test_cancel_accepts_any_status() {
        for status in [OrderStatus::Completed, OrderStatus::Canceled] {
            let orders = vec![order_in(status)];
            let ctx = CommandContext::new(&orders);
            let action = AdminCancelAction {
                order_id: "order-1".to_string(),
                reason: "Audit finding".to_string(),
            };

            let event = action.execute(&ctx, &metadata_for(Role::Admin)).unwrap();
            assert!(matches!(event.payload, EventPayload::AdminCanceled { .. }));
        }
    }

    #[test]
    fn test_cancel_requires_reason() {
        let orders = vec![order_in(OrderStatus::Approved)];
        let ctx = CommandContext::new(&orders);
        let action = AdminCancelAction {
            order_id: "order-1".to_string(),
            reason: " ".to_string(),
        };

        let result = action.execute(&ctx, &metadata_for(Role::Admin));
        assert!(matches!(result, Err(OrderError::Validation(_))));
    }

    #[test]
    fn test_transfer_carries_new_customer() {
        let orders = vec![order_in(OrderStatus::OnHold)];
        let ctx = CommandContext::new(&orders);
        let action = AdminTransferAction {
            order_id: "order-1".to_string(),
            new_customer: "Giza Wholesale".to_string(),
            new_location: Some("Giza".to_string()),
            reason: "Original customer refused delivery".to_string(),
        };

        let event = action.execute(&ctx, &metadata_for(Role::Admin)).unwrap();
        match event.payload {
            EventPayload::AdminTransferred {
                customer_name,
                area_location,
                ..
            } => {
                assert_eq!(customer_name, "Giza Wholesale");
                assert_eq!(area_location.as_deref(), Some("Giza"));
            }
            other => panic!("Expected AdminTransferred, got {:?}", other),
        }
    }

    #[test]
    fn test_transfer_of_completed_order_allowed() {
        let orders = vec![order_in(OrderStatus::Completed)];
        let ctx = CommandContext::new(&orders);
        let action = AdminTransferAction {
            order_id: "order-1".to_string(),
            new_customer: "Giza Wholesale".to_string(),
            new_location: None,
            reason: "Goods rerouted after closeout".to_string(),
        };

        let event = action.execute(&ctx, &metadata_for(Role::Admin)).unwrap();
        assert!(matches!(event.payload, EventPayload::AdminTransferred { .. }));
    }
}
