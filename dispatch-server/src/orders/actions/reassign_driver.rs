//! ReassignDriver command handler
//!
//! Hands a trip to a replacement driver. Typically used to recover an
//! emergency shipment, but any undelivered trip can be transferred.

use crate::orders::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use shared::order::{DriverInfo, EventPayload, OrderEvent, ShipmentStatus};
use validator::Validate;

/// ReassignDriver action
#[derive(Debug, Clone)]
pub struct ReassignDriverAction {
    pub order_id: String,
    pub shipment_id: String,
    pub driver: DriverInfo,
}

impl CommandHandler for ReassignDriverAction {
    fn execute(
        &self,
        ctx: &CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<OrderEvent, OrderError> {
        let order = ctx.find_order(&self.order_id)?;
        if order.status.is_terminal() {
            return Err(OrderError::InvalidTransition(format!(
                "Order is {}, trips can no longer be re-assigned",
                order.status
            )));
        }
        let shipment = order
            .shipment(&self.shipment_id)
            .ok_or_else(|| OrderError::ShipmentNotFound(self.shipment_id.clone()))?;
        if shipment.status == ShipmentStatus::Delivered {
            return Err(OrderError::InvalidTransition(
                "Delivered shipment cannot be re-assigned".to_string(),
            ));
        }

        self.driver
            .validate()
            .map_err(|e| OrderError::Validation(e.to_string()))?;

        Ok(OrderEvent::new(
            self.order_id.clone(),
            metadata.actor_role,
            metadata.actor_name.clone(),
            metadata.command_id.clone(),
            EventPayload::DriverReassigned {
                shipment_id: self.shipment_id.clone(),
                previous_driver: shipment.driver_name.clone(),
                driver: self.driver.clone(),
            },
        ))
    }
}
