//! Command action implementations
//!
//! Each action implements the `CommandHandler` trait and handles one
//! specific command type.

use crate::orders::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use shared::order::{OrderCommand, OrderCommandPayload, OrderEvent};

mod adjust_quantities;
mod admin_override;
mod advance_shipment;
mod create_order;
mod create_shipment;
mod emergency;
mod mark_ready;
mod reassign_driver;
mod review;
mod update_order;

pub use adjust_quantities::AdjustQuantitiesAction;
pub use admin_override::{AdminCancelAction, AdminTransferAction};
pub use advance_shipment::AdvanceShipmentAction;
pub use create_order::CreateOrderAction;
pub use create_shipment::CreateShipmentAction;
pub use emergency::{ReportEmergencyAction, ResolveEmergencyAction};
pub use mark_ready::MarkReadyAction;
pub use reassign_driver::ReassignDriverAction;
pub use review::{AssistantReviewAction, FinanceReviewAction};
pub use update_order::UpdateOrderAction;

/// CommandAction enum - dispatches to concrete action implementations
#[derive(Debug)]
pub enum CommandAction {
    CreateOrder(CreateOrderAction),
    UpdateOrder(UpdateOrderAction),
    AssistantReview(AssistantReviewAction),
    FinanceReview(FinanceReviewAction),
    MarkReady(MarkReadyAction),
    AdjustQuantities(AdjustQuantitiesAction),
    CreateShipment(CreateShipmentAction),
    AdvanceShipment(AdvanceShipmentAction),
    ReassignDriver(ReassignDriverAction),
    ReportEmergency(ReportEmergencyAction),
    ResolveEmergency(ResolveEmergencyAction),
    AdminCancel(AdminCancelAction),
    AdminTransfer(AdminTransferAction),
}

/// Manual implementation of CommandHandler for CommandAction
impl CommandHandler for CommandAction {
    fn execute(
        &self,
        ctx: &CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<OrderEvent, OrderError> {
        match self {
            CommandAction::CreateOrder(action) => action.execute(ctx, metadata),
            CommandAction::UpdateOrder(action) => action.execute(ctx, metadata),
            CommandAction::AssistantReview(action) => action.execute(ctx, metadata),
            CommandAction::FinanceReview(action) => action.execute(ctx, metadata),
            CommandAction::MarkReady(action) => action.execute(ctx, metadata),
            CommandAction::AdjustQuantities(action) => action.execute(ctx, metadata),
            CommandAction::CreateShipment(action) => action.execute(ctx, metadata),
            CommandAction::AdvanceShipment(action) => action.execute(ctx, metadata),
            CommandAction::ReassignDriver(action) => action.execute(ctx, metadata),
            CommandAction::ReportEmergency(action) => action.execute(ctx, metadata),
            CommandAction::ResolveEmergency(action) => action.execute(ctx, metadata),
            CommandAction::AdminCancel(action) => action.execute(ctx, metadata),
            CommandAction::AdminTransfer(action) => action.execute(ctx, metadata),
        }
    }
}

/// Convert OrderCommand to CommandAction
///
/// This is the ONLY place with a match on OrderCommandPayload.
/// CreateOrder is refused here: it needs a serial number that only
/// OrdersManager can allocate, so the manager builds that action itself.
impl TryFrom<&OrderCommand> for CommandAction {
    type Error = OrderError;

    fn try_from(cmd: &OrderCommand) -> Result<Self, Self::Error> {
        let action = match &cmd.payload {
            OrderCommandPayload::CreateOrder { .. } => {
                return Err(OrderError::Internal(
                    "CREATE_ORDER requires a serial number allocated by the order manager"
                        .to_string(),
                ));
            }
            OrderCommandPayload::UpdateOrder { order_id, draft } => {
                CommandAction::UpdateOrder(UpdateOrderAction {
                    order_id: order_id.clone(),
                    draft: draft.clone(),
                })
            }
            OrderCommandPayload::AssistantReview {
                order_id,
                approve,
                note,
            } => CommandAction::AssistantReview(AssistantReviewAction {
                order_id: order_id.clone(),
                approve: *approve,
                note: note.clone(),
            }),
            OrderCommandPayload::FinanceReview {
                order_id,
                approve,
                note,
            } => CommandAction::FinanceReview(FinanceReviewAction {
                order_id: order_id.clone(),
                approve: *approve,
                note: note.clone(),
            }),
            OrderCommandPayload::MarkReady { order_id, note } => {
                CommandAction::MarkReady(MarkReadyAction {
                    order_id: order_id.clone(),
                    note: note.clone(),
                })
            }
            OrderCommandPayload::AdjustQuantities { order_id, items } => {
                CommandAction::AdjustQuantities(AdjustQuantitiesAction {
                    order_id: order_id.clone(),
                    items: items.clone(),
                })
            }
            OrderCommandPayload::CreateShipment { order_id, draft } => {
                CommandAction::CreateShipment(CreateShipmentAction {
                    order_id: order_id.clone(),
                    draft: draft.clone(),
                })
            }
            OrderCommandPayload::AdvanceShipment {
                order_id,
                shipment_id,
                step,
                photo,
            } => CommandAction::AdvanceShipment(AdvanceShipmentAction {
                order_id: order_id.clone(),
                shipment_id: shipment_id.clone(),
                step: *step,
                photo: photo.clone(),
            }),
            OrderCommandPayload::ReassignDriver {
                order_id,
                shipment_id,
                driver,
            } => CommandAction::ReassignDriver(ReassignDriverAction {
                order_id: order_id.clone(),
                shipment_id: shipment_id.clone(),
                driver: driver.clone(),
            }),
            OrderCommandPayload::ReportEmergency {
                order_id,
                shipment_id,
                details,
            } => CommandAction::ReportEmergency(ReportEmergencyAction {
                order_id: order_id.clone(),
                shipment_id: shipment_id.clone(),
                details: details.clone(),
            }),
            OrderCommandPayload::ResolveEmergency {
                order_id,
                shipment_id,
            } => CommandAction::ResolveEmergency(ResolveEmergencyAction {
                order_id: order_id.clone(),
                shipment_id: shipment_id.clone(),
            }),
            OrderCommandPayload::AdminCancel { order_id, reason } => {
                CommandAction::AdminCancel(AdminCancelAction {
                    order_id: order_id.clone(),
                    reason: reason.clone(),
                })
            }
            OrderCommandPayload::AdminTransfer {
                order_id,
                new_customer,
                new_location,
                reason,
            } => CommandAction::AdminTransfer(AdminTransferAction {
                order_id: order_id.clone(),
                new_customer: new_customer.clone(),
                new_location: new_location.clone(),
                reason: reason.clone(),
            }),
        };
        Ok(action)
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use shared::models::Role;
    use shared::order::{Order, OrderItem, OrderStatus};

    pub fn metadata_for(role: Role) -> CommandMetadata {
        CommandMetadata {
            command_id: "cmd-1".to_string(),
            actor_role: role,
            actor_name: "Test User".to_string(),
            actor_email: "test@example.com".to_string(),
            timestamp: 1_700_000_000_000,
        }
    }

    pub fn order_in(status: OrderStatus) -> Order {
        let mut order = Order::new("order-1".to_string());
        order.serial_number = "SO-000001".to_string();
        order.customer_name = "Cairo Mart".to_string();
        order.area_location = "Nasr City".to_string();
        order.items = vec![OrderItem::new("Rice 25kg", 10)];
        order.status = status;
        order
    }
}
