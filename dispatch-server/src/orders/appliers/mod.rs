//! Event appliers
//!
//! Each applier implements [`EventApplier`] and folds exactly one event
//! variant into the order state. Appliers never validate - commands already
//! did - they only mutate and append the matching history entry.

use crate::orders::traits::EventApplier;
use enum_dispatch::enum_dispatch;
use shared::order::{ActionKind, EventPayload, HistoryEntry, Order, OrderEvent};

mod admin_override;
mod driver_reassigned;
mod emergency;
mod marked_ready;
mod order_created;
mod order_updated;
mod quantities_adjusted;
mod review;
mod shipment_dispatched;
mod shipment_progress;

pub use admin_override::{AdminCanceledApplier, AdminTransferredApplier};
pub use driver_reassigned::DriverReassignedApplier;
pub use emergency::{EmergencyReportedApplier, EmergencyResolvedApplier};
pub use marked_ready::MarkedReadyApplier;
pub use order_created::OrderCreatedApplier;
pub use order_updated::OrderUpdatedApplier;
pub use quantities_adjusted::QuantitiesAdjustedApplier;
pub use review::{ReviewPassedApplier, ReviewRejectedApplier};
pub use shipment_dispatched::ShipmentDispatchedApplier;
pub use shipment_progress::{ShipmentDeliveredApplier, ShipmentPickedUpApplier};

/// EventAction enum - dispatches to concrete applier implementations
#[enum_dispatch(EventApplier)]
pub enum EventAction {
    OrderCreated(OrderCreatedApplier),
    OrderUpdated(OrderUpdatedApplier),
    ReviewPassed(ReviewPassedApplier),
    ReviewRejected(ReviewRejectedApplier),
    MarkedReady(MarkedReadyApplier),
    QuantitiesAdjusted(QuantitiesAdjustedApplier),
    ShipmentDispatched(ShipmentDispatchedApplier),
    ShipmentPickedUp(ShipmentPickedUpApplier),
    ShipmentDelivered(ShipmentDeliveredApplier),
    DriverReassigned(DriverReassignedApplier),
    EmergencyReported(EmergencyReportedApplier),
    EmergencyResolved(EmergencyResolvedApplier),
    AdminCanceled(AdminCanceledApplier),
    AdminTransferred(AdminTransferredApplier),
}

/// Convert OrderEvent to EventAction
///
/// This is the ONLY place with a match on EventPayload.
impl From<&OrderEvent> for EventAction {
    fn from(event: &OrderEvent) -> Self {
        match &event.payload {
            EventPayload::OrderCreated {
                draft,
                serial_number,
                created_by,
            } => EventAction::OrderCreated(OrderCreatedApplier {
                draft: draft.clone(),
                serial_number: serial_number.clone(),
                created_by: created_by.clone(),
            }),
            EventPayload::OrderUpdated { draft } => {
                EventAction::OrderUpdated(OrderUpdatedApplier {
                    draft: draft.clone(),
                })
            }
            EventPayload::ReviewPassed { stage, note } => {
                EventAction::ReviewPassed(ReviewPassedApplier {
                    stage: *stage,
                    note: note.clone(),
                })
            }
            EventPayload::ReviewRejected { stage, note } => {
                EventAction::ReviewRejected(ReviewRejectedApplier {
                    stage: *stage,
                    note: note.clone(),
                })
            }
            EventPayload::MarkedReady { note, outsource } => {
                EventAction::MarkedReady(MarkedReadyApplier {
                    note: note.clone(),
                    outsource: *outsource,
                })
            }
            EventPayload::QuantitiesAdjusted { items } => {
                EventAction::QuantitiesAdjusted(QuantitiesAdjustedApplier {
                    items: items.clone(),
                })
            }
            EventPayload::ShipmentDispatched { shipment } => {
                EventAction::ShipmentDispatched(ShipmentDispatchedApplier {
                    shipment: shipment.clone(),
                })
            }
            EventPayload::ShipmentPickedUp {
                shipment_id,
                picked_up_at,
            } => EventAction::ShipmentPickedUp(ShipmentPickedUpApplier {
                shipment_id: shipment_id.clone(),
                picked_up_at: *picked_up_at,
            }),
            EventPayload::ShipmentDelivered {
                shipment_id,
                delivered_at,
                duration,
                photo,
            } => EventAction::ShipmentDelivered(ShipmentDeliveredApplier {
                shipment_id: shipment_id.clone(),
                delivered_at: *delivered_at,
                duration: duration.clone(),
                photo: photo.clone(),
            }),
            EventPayload::DriverReassigned {
                shipment_id,
                previous_driver,
                driver,
            } => EventAction::DriverReassigned(DriverReassignedApplier {
                shipment_id: shipment_id.clone(),
                previous_driver: previous_driver.clone(),
                driver: driver.clone(),
            }),
            EventPayload::EmergencyReported {
                shipment_id,
                report,
            } => EventAction::EmergencyReported(EmergencyReportedApplier {
                shipment_id: shipment_id.clone(),
                report: report.clone(),
            }),
            EventPayload::EmergencyResolved { shipment_id } => {
                EventAction::EmergencyResolved(EmergencyResolvedApplier {
                    shipment_id: shipment_id.clone(),
                })
            }
            EventPayload::AdminCanceled { reason } => {
                EventAction::AdminCanceled(AdminCanceledApplier {
                    reason: reason.clone(),
                })
            }
            EventPayload::AdminTransferred {
                customer_name,
                area_location,
                reason,
            } => EventAction::AdminTransferred(AdminTransferredApplier {
                customer_name: customer_name.clone(),
                area_location: area_location.clone(),
                reason: reason.clone(),
            }),
        }
    }
}

/// Append the audit entry for an applied event and bump `updated_at`.
///
/// Role and user are snapshots from the event, so history stays correct
/// even if the actor later changes role.
pub(crate) fn push_history(order: &mut Order, event: &OrderEvent, action: ActionKind) {
    order.history.push(HistoryEntry {
        role: event.actor_role.display_name().to_string(),
        action,
        timestamp: event.timestamp,
        user: event.actor_name.clone(),
    });
    order.updated_at = event.timestamp;
}
