//! Command permission table
//!
//! One strict table from command kind to the roles allowed to issue it.
//! There is no admin wildcard: admins hold exactly the two override
//! commands and nothing else, so a compromised admin account cannot walk
//! an order through the normal pipeline.

use shared::models::Role;
use shared::order::OrderCommandPayload;

/// Roles allowed to issue the given command
pub fn allowed_roles(payload: &OrderCommandPayload) -> &'static [Role] {
    match payload {
        OrderCommandPayload::CreateOrder { .. } => &[Role::Sales],
        OrderCommandPayload::UpdateOrder { .. } => &[Role::Sales, Role::Assistant],
        OrderCommandPayload::AssistantReview { .. } => &[Role::Assistant],
        OrderCommandPayload::FinanceReview { .. } => &[Role::Finance],
        OrderCommandPayload::MarkReady { .. } => &[Role::Warehouse],
        OrderCommandPayload::AdjustQuantities { .. } => {
            &[Role::Warehouse, Role::Finance, Role::DriverSupervisor]
        }
        OrderCommandPayload::CreateShipment { .. } => &[Role::DriverSupervisor],
        OrderCommandPayload::AdvanceShipment { .. } => &[Role::TruckDriver],
        OrderCommandPayload::ReassignDriver { .. } => &[Role::DriverSupervisor],
        OrderCommandPayload::ReportEmergency { .. } => &[Role::TruckDriver],
        OrderCommandPayload::ResolveEmergency { .. } => {
            &[Role::TruckDriver, Role::DriverSupervisor]
        }
        OrderCommandPayload::AdminCancel { .. } | OrderCommandPayload::AdminTransfer { .. } => {
            &[Role::Admin]
        }
    }
}

/// Whether the role may issue the command
pub fn is_allowed(role: Role, payload: &OrderCommandPayload) -> bool {
    allowed_roles(payload).contains(&role)
}
