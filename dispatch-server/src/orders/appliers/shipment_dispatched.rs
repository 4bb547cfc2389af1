//! ShipmentDispatched applier - attaches a new trip and re-derives status

use super::push_history;
use crate::orders::reducer;
use crate::orders::traits::EventApplier;
use shared::order::{ActionKind, Order, OrderEvent, Shipment};

/// Apply ShipmentDispatched
pub struct ShipmentDispatchedApplier {
    pub shipment: Shipment,
}

impl EventApplier for ShipmentDispatchedApplier {
    fn apply(&self, order: &mut Order, event: &OrderEvent) {
        order.shipments.push(self.shipment.clone());
        reducer::refresh_status(order);
        push_history(
            order,
            event,
            ActionKind::ShipmentDispatched {
                driver_name: self.shipment.driver_name.clone(),
            },
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orders::actions::test_support::order_in;
    use crate::orders::appliers::test_support::event_from;
    use shared::models::Role;
    use shared::order::{EventPayload, OrderItem, OrderStatus};

    fn shipment(qty: u32) -> Shipment {
        Shipment::new(
            "Ahmed",
            "0100",
            "CAR-1",
            "Dock A",
            "08:00",
            vec![OrderItem::new("Rice 25kg", qty)],
        )
    }

    #[test]
    fn test_full_dispatch_moves_to_in_transit() {
        let mut order = order_in(OrderStatus::ReadyForDriver);
        let shipment = shipment(10);
        let event = event_from(
            Role::DriverSupervisor,
            EventPayload::ShipmentDispatched {
                shipment: shipment.clone(),
            },
        );

        ShipmentDispatchedApplier { shipment }.apply(&mut order, &event);

        assert_eq!(order.status, OrderStatus::InTransit);
        assert_eq!(order.shipments.len(), 1);
        assert_eq!(
            order.history.last().map(|h| h.message()).as_deref(),
            Some("Dispatched Shipment to Ahmed")
        );
    }

    #[test]
    fn test_partial_dispatch_moves_to_partially_shipped() {
        let mut order = order_in(OrderStatus::ReadyForDriver);
        let shipment = shipment(6);
        let event = event_from(
            Role::DriverSupervisor,
            EventPayload::ShipmentDispatched {
                shipment: shipment.clone(),
            },
        );

        ShipmentDispatchedApplier { shipment }.apply(&mut order, &event);

        assert_eq!(order.status, OrderStatus::PartiallyShipped);
    }
}
