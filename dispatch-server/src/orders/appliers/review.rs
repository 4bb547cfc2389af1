//! Review appliers - assistant and finance approval/rejection

use super::push_history;
use crate::orders::traits::EventApplier;
use shared::order::{ActionKind, Order, OrderEvent, OrderStatus, ReviewStage};

/// Apply ReviewPassed
pub struct ReviewPassedApplier {
    pub stage: ReviewStage,
    pub note: Option<String>,
}

impl EventApplier for ReviewPassedApplier {
    fn apply(&self, order: &mut Order, event: &OrderEvent) {
        order.status = match self.stage {
            ReviewStage::Assistant => OrderStatus::PendingFinance,
            ReviewStage::Finance => OrderStatus::Approved,
        };
        push_history(
            order,
            event,
            ActionKind::Approved {
                stage: self.stage,
                note: self.note.clone(),
            },
        );
    }
}

/// Apply ReviewRejected
pub struct ReviewRejectedApplier {
    pub stage: ReviewStage,
    pub note: Option<String>,
}

impl EventApplier for ReviewRejectedApplier {
    fn apply(&self, order: &mut Order, event: &OrderEvent) {
        order.status = OrderStatus::Rejected;
        push_history(
            order,
            event,
            ActionKind::Rejected {
                stage: self.stage,
                note: self.note.clone(),
            },
        );
    }
}
