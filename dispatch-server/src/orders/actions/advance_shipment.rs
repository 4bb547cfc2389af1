//! AdvanceShipment command handler
//!
//! Driver trip steps: Assigned -> PickedUp -> Delivered. A shipment in
//! emergency is suspended until resolved or re-assigned, and a delivered
//! shipment is final - the second Delivered for the same trip is rejected.

use crate::orders::reducer;
use crate::orders::traits::{CommandContext, CommandHandler, CommandMetadata, OrderError};
use shared::order::{EventPayload, OrderEvent, ShipmentStatus, ShipmentStep};

/// AdvanceShipment action
#[derive(Debug, Clone)]
pub struct AdvanceShipmentAction {
    pub order_id: String,
    pub shipment_id: String,
    pub step: ShipmentStep,
    pub photo: Option<String>,
}

impl CommandHandler for AdvanceShipmentAction {
    fn execute(
        &self,
        ctx: &CommandContext<'_>,
        metadata: &CommandMetadata,
    ) -> Result<OrderEvent, OrderError> {
        let order = ctx.find_order(&self.order_id)?;
        if order.status.is_terminal() {
            return Err(OrderError::InvalidTransition(format!(
                "Order is {}, shipments can no longer advance",
                order.status
            )));
        }
        let shipment = order
            .shipment(&self.shipment_id)
            .ok_or_else(|| OrderError::ShipmentNotFound(self.shipment_id.clone()))?;

        let now = chrono::Utc::now().timestamp_millis();
        let payload = match self.step {
            ShipmentStep::PickedUp => match shipment.status {
                ShipmentStatus::Assigned => EventPayload::ShipmentPickedUp {
                    shipment_id: self.shipment_id.clone(),
                    picked_up_at: now,
                },
                ShipmentStatus::Emergency => {
                    return Err(OrderError::InvalidTransition(
                        "Shipment is suspended by an active emergency".to_string(),
                    ));
                }
                ShipmentStatus::PickedUp => {
                    return Err(OrderError::InvalidTransition(
                        "Shipment was already picked up".to_string(),
                    ));
                }
                ShipmentStatus::Delivered => {
                    return Err(OrderError::InvalidTransition(
                        "Shipment was already delivered".to_string(),
                    ));
                }
            },
            ShipmentStep::Delivered => match shipment.status {
                ShipmentStatus::PickedUp => EventPayload::ShipmentDelivered {
                    shipment_id: self.shipment_id.clone(),
                    delivered_at: now,
                    duration: shipment
                        .actual_pickup_time
                        .map(|picked| reducer::format_duration(picked, now)),
                    photo: self.photo.clone(),
                },
                ShipmentStatus::Assigned => {
                    return Err(OrderError::InvalidTransition(
                        "Shipment must be picked up before delivery".to_string(),
                    ));
                }
                ShipmentStatus::Emergency => {
                    return Err(OrderError::InvalidTransition(
                        "Shipment is suspended by an active emergency".to_string(),
                    ));
                }
                ShipmentStatus::Delivered => {
                    return Err(OrderError::InvalidTransition(
                        "Shipment was already delivered".to_string(),
                    ));
                }
            },
        };

        Ok(OrderEvent::new(
            self.order_id.clone(),
            metadata.actor_role,
            metadata.actor_name.clone(),
            metadata.command_id.clone(),
            payload,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::actions::test_support::{metadata_for, order_in};
    use shared::models::Role;
    use shared::order::{Order, OrderItem, OrderStatus, Shipment};

    fn order_with_shipment(status: ShipmentStatus) -> (Order, String) {
        let mut order = order_in(OrderStatus::InTransit);
        let mut shipment = Shipment::new(
            "Ahmed",
            "0100",
            "CAR-1",
            "Dock A",
            "08:00",
            vec![OrderItem::new("Rice 25kg", 10)],
        );
        shipment.status = status;
        if status != ShipmentStatus::Assigned {
            shipment.actual_pickup_time = Some(1_700_000_000_000);
        }
        let id = shipment.id.clone();
        order.shipments.push(shipment);
        (order, id)
    }

    fn action(shipment_id: &str, step: ShipmentStep) -> AdvanceShipmentAction {
        AdvanceShipmentAction {
            order_id: "order-1".to_string(),
            shipment_id: shipment_id.to_string(),
            step,
            photo: None,
        }
    }

    #[test]
    fn test_pickup_from_assigned() {
        let (order, id) = order_with_shipment(ShipmentStatus::Assigned);
        let orders = vec![order];
        let ctx = CommandContext::new(&orders);

        let event = action(&id, ShipmentStep::PickedUp)
            .execute(&ctx, &metadata_for(Role::TruckDriver))
            .unwrap();
        assert!(matches!(
            event.payload,
            EventPayload::ShipmentPickedUp { .. }
        ));
    }

    #[test]
    fn test_delivery_from_picked_up_carries_duration() {
        let (order, id) = order_with_shipment(ShipmentStatus::PickedUp);
        let orders = vec![order];
        let ctx = CommandContext::new(&orders);

        let event = action(&id, ShipmentStep::Delivered)
            .execute(&ctx, &metadata_for(Role::TruckDriver))
            .unwrap();
        match event.payload {
            EventPayload::ShipmentDelivered { duration, .. } => {
                assert!(duration.is_some());
            }
            other => panic!("Expected ShipmentDelivered, got {:?}", other),
        }
    }

    #[test]
    fn test_delivery_before_pickup_fails() {
        let (order, id) = order_with_shipment(ShipmentStatus::Assigned);
        let orders = vec![order];
        let ctx = CommandContext::new(&orders);

        let result = action(&id, ShipmentStep::Delivered)
            .execute(&ctx, &metadata_for(Role::TruckDriver));
        assert!(matches!(result, Err(OrderError::InvalidTransition(_))));
    }

    #[test]
    fn test_second_delivery_is_rejected() {
        let (order, id) = order_with_shipment(ShipmentStatus::Delivered);
        let orders = vec![order];
        let ctx = CommandContext::new(&orders);

        let result = action(&id, ShipmentStep::Delivered)
            .execute(&ctx, &metadata_for(Role::TruckDriver));
        assert!(matches!(result, Err(OrderError::InvalidTransition(_))));
    }

    #[test]
    fn test_emergency_shipment_is_suspended() {
        let (order, id) = order_with_shipment(ShipmentStatus::Emergency);
        let orders = vec![order];
        let ctx = CommandContext::new(&orders);

        for step in [ShipmentStep::PickedUp, ShipmentStep::Delivered] {
            let result = action(&id, step).execute(&ctx, &metadata_for(Role::TruckDriver));
            assert!(matches!(result, Err(OrderError::InvalidTransition(_))));
        }
    }

    #[test]
    fn test_unknown_shipment_fails() {
        let (order, _) = order_with_shipment(ShipmentStatus::Assigned);
        let orders = vec![order];
        let ctx = CommandContext::new(&orders);

        let result = action("missing", ShipmentStep::PickedUp)
            .execute(&ctx, &metadata_for(Role::TruckDriver));
        assert!(matches!(result, Err(OrderError::ShipmentNotFound(_))));
    }
}
