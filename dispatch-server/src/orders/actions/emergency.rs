//! Emergency command handlers
//!
//! A driver reports an accident or breakdown against their trip, which
//! suspends the shipment and puts the order on hold. The emergency is
//! cleared either by resolving it (same driver continues) or by
//! re-assigning the trip to another driver.

use crate::orders::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use shared::order::{EmergencyReport, EventPayload, OrderEvent, ShipmentStatus};

/// ReportEmergency action
#[derive(Debug, Clone)]
pub struct ReportEmergencyAction {
    pub order_id: String,
    pub shipment_id: String,
    pub details: String,
}

impl CommandHandler for ReportEmergencyAction {
    fn execute(
        &self,
        ctx: &CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<OrderEvent, OrderError> {
        let order = ctx.find_order(&self.order_id)?;
        if order.status.is_terminal() {
            return Err(OrderError::InvalidTransition(format!(
                "Order is {}, emergencies can no longer be reported",
                order.status
            )));
        }
        let shipment = order
            .shipment(&self.shipment_id)
            .ok_or_else(|| OrderError::ShipmentNotFound(self.shipment_id.clone()))?;
        match shipment.status {
            ShipmentStatus::Delivered => {
                return Err(OrderError::InvalidTransition(
                    "Delivered shipment cannot report an emergency".to_string(),
                ));
            }
            ShipmentStatus::Emergency => {
                return Err(OrderError::InvalidTransition(
                    "Shipment already has an active emergency".to_string(),
                ));
            }
            ShipmentStatus::Assigned | ShipmentStatus::PickedUp => {}
        }

        let details = self.details.trim();
        if details.is_empty() {
            return Err(OrderError::Validation(
                "Emergency details must not be blank".to_string(),
            ));
        }

        Ok(OrderEvent::new(
            self.order_id.clone(),
            metadata.actor_role,
            metadata.actor_name.clone(),
            metadata.command_id.clone(),
            EventPayload::EmergencyReported {
                shipment_id: self.shipment_id.clone(),
                report: EmergencyReport {
                    details: details.to_string(),
                    timestamp: chrono::Utc::now().timestamp_millis(),
                    reporter_role: metadata.actor_role.display_name().to_string(),
                },
            },
        ))
    }
}

/// ResolveEmergency action
#[derive(Debug, Clone)]
pub struct ResolveEmergencyAction {
    pub order_id: String,
    pub shipment_id: String,
}

impl CommandHandler for ResolveEmergencyAction {
    fn execute(
        &self,
        ctx: &CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<OrderEvent, OrderError> {
        let order = ctx.find_order(&self.order_id)?;
        let shipment = order
            .shipment(&self.shipment_id)
            .ok_or_else(|| OrderError::ShipmentNotFound(self.shipment_id.clone()))?;
        if shipment.status != ShipmentStatus::Emergency {
            return Err(OrderError::InvalidTransition(
                "Shipment has no active emergency to resolve".to_string(),
            ));
        }

        Ok(OrderEvent::new(
            self.order_id.clone(),
            metadata.actor_role,
            metadata.actor_name.clone(),
            metadata.command_id.clone(),
            EventPayload::EmergencyResolved {
                shipment_id: self.shipment_id.clone(),
            },
        ))
    }
}
