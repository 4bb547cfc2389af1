//! CreateShipment command handler
//!
//! Driver supervisor dispatches a trip carrying the whole order or a subset
//! of its items. Dispatch is only possible once the warehouse has packed
//! the order, or while earlier trips cover only part of the quantity.

use crate::orders::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use shared::order::{EventPayload, OrderEvent, OrderItem, OrderStatus, Shipment, ShipmentDraft};
use validator::Validate;

/// CreateShipment action
#[derive(Debug, Clone)]
pub struct CreateShipmentAction {
    pub order_id: String,
    pub draft: ShipmentDraft,
}

impl CommandHandler for CreateShipmentAction {
    fn execute(
        &self,
        ctx: &CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<OrderEvent, OrderError> {
        let order = ctx.find_order(&self.order_id)?;
        if !matches!(
            order.status,
            OrderStatus::ReadyForDriver | OrderStatus::PartiallyShipped
        ) {
            return Err(OrderError::InvalidTransition(format!(
                "Cannot dispatch a shipment for order in {} status",
                order.status
            )));
        }

        self.draft
            .validate()
            .map_err(|e| OrderError::Validation(e.to_string()))?;

        // Omitted item list means the trip carries the full order
        let items: Vec<OrderItem> = match &self.draft.items {
            Some(list) if !list.is_empty() => list
                .iter()
                .map(|d| OrderItem::new(d.item_name.clone(), d.quantity))
                .collect(),
            _ => order.items.clone(),
        };

        let shipment = Shipment::new(
            self.draft.driver_name.clone(),
            self.draft.driver_phone.clone(),
            self.draft.car_number.clone(),
            self.draft.warehouse_location.clone(),
            self.draft.dispatch_time.clone(),
            items,
        );

        Ok(OrderEvent::new(
            self.order_id.clone(),
            metadata.actor_role,
            metadata.actor_name.clone(),
            metadata.command_id.clone(),
            EventPayload::ShipmentDispatched { shipment },
        ))
    }
}
