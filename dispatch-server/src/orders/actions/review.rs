//! Review stage command handlers
//!
//! The assistant reviews new orders, finance reviews assistant-approved
//! orders. Approvals move the order one stage forward, rejections are
//! terminal.

use crate::orders::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use shared::order::{EventPayload, Order, OrderEvent, OrderStatus, ReviewStage};

fn require_status(order: &Order, expected: OrderStatus) -> Result<(), OrderError> {
    if order.status != expected {
        return Err(OrderError::InvalidTransition(format!(
            "Review expects order in {} status, found {}",
            expected, order.status
        )));
    }
    Ok(())
}

fn review_event(
    order_id: &str,
    stage: ReviewStage,
    approve: bool,
    note: &Option<String>,
    metadata: &CommandMetadata,
) -> OrderEvent {
    let payload = if approve {
        EventPayload::ReviewPassed {
            stage,
            note: note.clone(),
        }
    } else {
        EventPayload::ReviewRejected {
            stage,
            note: note.clone(),
        }
    };
    OrderEvent::new(
        order_id.to_string(),
        metadata.actor_role,
        metadata.actor_name.clone(),
        metadata.command_id.clone(),
        payload,
    )
}

/// AssistantReview action - quantity check on freshly created orders
#[derive(Debug, Clone)]
pub struct AssistantReviewAction {
    pub order_id: String,
    pub approve: bool,
    pub note: Option<String>,
}

impl CommandHandler for AssistantReviewAction {
    fn execute(
        &self,
        ctx: &CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<OrderEvent, OrderError> {
        let order = ctx.find_order(&self.order_id)?;
        require_status(order, OrderStatus::PendingAssistant)?;
        Ok(review_event(
            &self.order_id,
            ReviewStage::Assistant,
            self.approve,
            &self.note,
            metadata,
        ))
    }
}

/// FinanceReview action - payment check after assistant approval
#[derive(Debug, Clone)]
pub struct FinanceReviewAction {
    pub order_id: String,
    pub approve: bool,
    pub note: Option<String>,
}

impl CommandHandler for FinanceReviewAction {
    fn execute(
        &self,
        ctx: &CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<OrderEvent, OrderError> {
        let order = ctx.find_order(&self.order_id)?;
        require_status(order, OrderStatus::PendingFinance)?;
        Ok(review_event(
            &self.order_id,
            ReviewStage::Finance,
            self.approve,
            &self.note,
            metadata,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::actions::test_support::{metadata_for, order_in};
    use shared::models::Role;

    #[test]
    fn test_assistant_approve_emits_passed_event() {
        let orders = vec![order_in(OrderStatus::PendingAssistant)];
        let ctx = CommandContext::new(&orders);
        let action = AssistantReviewAction {
            order_id: "order-1".to_string(),
            approve: true,
            note: None,
        };

        let event = action.execute(&ctx, &metadata_for(Role::Assistant)).unwrap();
        assert!(matches!(
            event.payload,
            EventPayload::ReviewPassed {
                stage: ReviewStage::Assistant,
                ..
            }
        ));
    }

    #[test]
    fn test_assistant_reject_emits_rejected_event() {
        let orders = vec![order_in(OrderStatus::PendingAssistant)];
        let ctx = CommandContext::new(&orders);
        let action = AssistantReviewAction {
            order_id: "order-1".to_string(),
            approve: false,
            note: Some("quantities look wrong".to_string()),
        };

        let event = action.execute(&ctx, &metadata_for(Role::Assistant)).unwrap();
        match event.payload {
            EventPayload::ReviewRejected { stage, note } => {
                assert_eq!(stage, ReviewStage::Assistant);
                assert_eq!(note.as_deref(), Some("quantities look wrong"));
            }
            other => panic!("Expected ReviewRejected, got {:?}", other),
        }
    }

    #[test]
    fn test_assistant_review_wrong_stage_fails() {
        let orders = vec![order_in(OrderStatus::Approved)];
        let ctx = CommandContext::new(&orders);
        let action = AssistantReviewAction {
            order_id: "order-1".to_string(),
            approve: true,
            note: None,
        };

        let result = action.execute(&ctx, &metadata_for(Role::Assistant));
        assert!(matches!(result, Err(OrderError::InvalidTransition(_))));
    }

    #[test]
    fn test_finance_review_requires_pending_finance() {
        let orders = vec![order_in(OrderStatus::PendingAssistant)];
        let ctx = CommandContext::new(&orders);
        let action = FinanceReviewAction {
            order_id: "order-1".to_string(),
            approve: true,
            note: None,
        };

        let result = action.execute(&ctx, &metadata_for(Role::Finance));
        assert!(matches!(result, Err(OrderError::InvalidTransition(_))));
    }

    #[test]
    fn test_finance_approve_emits_passed_event() {
        let orders = vec![order_in(OrderStatus::PendingFinance)];
        let ctx = CommandContext::new(&orders);
        let action = FinanceReviewAction {
            order_id: "order-1".to_string(),
            approve: true,
            note: None,
        };

        let event = action.execute(&ctx, &metadata_for(Role::Finance)).unwrap();
        assert!(matches!(
            event.payload,
            EventPayload::ReviewPassed {
                stage: ReviewStage::Finance,
                ..
            }
        ));
    }
}
