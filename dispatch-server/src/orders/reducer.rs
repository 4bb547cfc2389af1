//! Shipment-derived order status and shared order math
//!
//! Every shipment mutation funnels through [`refresh_status`] so that the
//! status an order shows is always recomputed from the shipments it actually
//! has, never hand-set by individual appliers.

use shared::order::{Order, OrderItem, OrderStatus, ShipmentStatus};

/// Sum of quantities across shipments, excluding shipments currently in
/// emergency (their load is considered not on the road).
pub fn shipped_quantity(order: &Order) -> u32 {
    order
        .shipments
        .iter()
        .filter(|s| s.status != ShipmentStatus::Emergency)
        .map(|s| s.quantity())
        .sum()
}

/// True when at least one shipment has an unresolved emergency
pub fn has_active_emergency(order: &Order) -> bool {
    order
        .shipments
        .iter()
        .any(|s| s.status == ShipmentStatus::Emergency)
}

/// True when the order has shipments and every one of them is delivered
pub fn all_delivered(order: &Order) -> bool {
    !order.shipments.is_empty()
        && order
            .shipments
            .iter()
            .all(|s| s.status == ShipmentStatus::Delivered)
}

/// Derive the order status from its shipments.
///
/// Returns `None` when the order has no shipments yet - pre-dispatch
/// statuses (review pipeline, ready, terminal) are owned by the appliers,
/// not by this derivation.
///
/// Precedence: an active emergency always yields `OnHold`; completion
/// requires every shipment delivered AND full quantity coverage, so an
/// order can never complete with zero shipments or a short total.
pub fn derive_shipment_status(order: &Order) -> Option<OrderStatus> {
    if order.shipments.is_empty() {
        return None;
    }
    if has_active_emergency(order) {
        return Some(OrderStatus::OnHold);
    }

    let ordered = order.ordered_quantity();
    let shipped = shipped_quantity(order);

    if all_delivered(order) && shipped >= ordered {
        return Some(OrderStatus::Completed);
    }
    if shipped >= ordered {
        Some(OrderStatus::InTransit)
    } else {
        Some(OrderStatus::PartiallyShipped)
    }
}

/// Recompute and store the shipment-derived status.
///
/// Terminal orders are left untouched - an admin cancel must not be
/// resurrected by a late shipment event.
pub fn refresh_status(order: &mut Order) {
    if order.status.is_terminal() {
        return;
    }
    if let Some(status) = derive_shipment_status(order) {
        order.status = status;
    }
}

/// Human-readable trip duration between two Unix-millis timestamps.
///
/// Non-positive spans render as "0m"; spans under an hour as "{m}m";
/// everything else as "{h}h {m}m".
pub fn format_duration(start_ms: i64, end_ms: i64) -> String {
    let diff = end_ms - start_ms;
    if diff <= 0 {
        return "0m".to_string();
    }
    let minutes = diff / 60_000;
    let hours = minutes / 60;
    let rem = minutes % 60;
    if hours > 0 {
        format!("{}h {}m", hours, rem)
    } else {
        format!("{}m", rem)
    }
}

/// Carry `original_quantity` forward onto a replacement item list.
///
/// A replacement line that matches a previous item (by id) inherits that
/// item's original quantity, stamping it from the previous current quantity
/// on first adjustment. Lines without a match keep their own quantity as
/// the original.
pub fn carry_original_quantities(previous: &[OrderItem], replacement: &mut [OrderItem]) {
    for item in replacement.iter_mut() {
        let prev = previous.iter().find(|p| p.id == item.id);
        item.original_quantity = match prev {
            Some(p) => Some(p.original_quantity.unwrap_or(p.quantity)),
            None => Some(item.quantity),
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::order::Shipment;

    fn order_with(total: u32) -> Order {
        let mut order = Order::new("order-1".to_string());
        order.items = vec![OrderItem::new("Rice 25kg".to_string(), total)];
        order.status = OrderStatus::ReadyForDriver;
        order
    }

    fn shipment(qty: u32, status: ShipmentStatus) -> Shipment {
        let mut s = Shipment::new(
            "Ahmed".to_string(),
            "0100".to_string(),
            "CAR-1".to_string(),
            "Dock A".to_string(),
            "08:00".to_string(),
            vec![OrderItem::new("Rice 25kg".to_string(), qty)],
        );
        s.status = status;
        s
    }

    #[test]
    fn test_no_shipments_leaves_status_alone() {
        let mut order = order_with(10);
        refresh_status(&mut order);
        assert_eq!(order.status, OrderStatus::ReadyForDriver);
    }

    #[test]
    fn test_partial_coverage_is_partially_shipped() {
        let mut order = order_with(10);
        order.shipments.push(shipment(6, ShipmentStatus::Assigned));
        refresh_status(&mut order);
        assert_eq!(order.status, OrderStatus::PartiallyShipped);
    }

    #[test]
    fn test_full_coverage_is_in_transit() {
        let mut order = order_with(10);
        order.shipments.push(shipment(6, ShipmentStatus::Assigned));
        order.shipments.push(shipment(4, ShipmentStatus::PickedUp));
        refresh_status(&mut order);
        assert_eq!(order.status, OrderStatus::InTransit);
    }

    #[test]
    fn test_emergency_takes_precedence() {
        let mut order = order_with(10);
        order.shipments.push(shipment(10, ShipmentStatus::Emergency));
        refresh_status(&mut order);
        assert_eq!(order.status, OrderStatus::OnHold);
    }

    #[test]
    fn test_emergency_excluded_from_shipped_total() {
        let mut order = order_with(10);
        order.shipments.push(shipment(6, ShipmentStatus::Emergency));
        order.shipments.push(shipment(4, ShipmentStatus::Assigned));
        assert_eq!(shipped_quantity(&order), 4);
    }

    #[test]
    fn test_all_delivered_with_full_coverage_completes() {
        let mut order = order_with(10);
        order.shipments.push(shipment(6, ShipmentStatus::Delivered));
        order.shipments.push(shipment(4, ShipmentStatus::Delivered));
        refresh_status(&mut order);
        assert_eq!(order.status, OrderStatus::Completed);
    }

    #[test]
    fn test_all_delivered_short_total_does_not_complete() {
        let mut order = order_with(10);
        order.shipments.push(shipment(6, ShipmentStatus::Delivered));
        refresh_status(&mut order);
        assert_eq!(order.status, OrderStatus::PartiallyShipped);
    }

    #[test]
    fn test_terminal_status_not_resurrected() {
        let mut order = order_with(10);
        order.status = OrderStatus::Canceled;
        order.shipments.push(shipment(10, ShipmentStatus::Assigned));
        refresh_status(&mut order);
        assert_eq!(order.status, OrderStatus::Canceled);
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(1_000, 500), "0m");
        assert_eq!(format_duration(0, 0), "0m");
        assert_eq!(format_duration(0, 5 * 60_000), "5m");
        assert_eq!(format_duration(0, 125 * 60_000), "2h 5m");
    }

    #[test]
    fn test_carry_original_quantities_stamps_on_first_adjustment() {
        let previous = vec![OrderItem::new("Rice 25kg".to_string(), 10)];
        let mut replacement = vec![OrderItem {
            id: previous[0].id.clone(),
            item_name: "Rice 25kg".to_string(),
            quantity: 8,
            original_quantity: None,
        }];
        carry_original_quantities(&previous, &mut replacement);
        assert_eq!(replacement[0].original_quantity, Some(10));
    }

    #[test]
    fn test_carry_original_quantities_preserves_existing_stamp() {
        let mut prev_item = OrderItem::new("Rice 25kg".to_string(), 8);
        prev_item.original_quantity = Some(10);
        let mut replacement = vec![OrderItem {
            id: prev_item.id.clone(),
            item_name: "Rice 25kg".to_string(),
            quantity: 6,
            original_quantity: None,
        }];
        carry_original_quantities(&[prev_item], &mut replacement);
        assert_eq!(replacement[0].original_quantity, Some(10));
    }

    #[test]
    fn test_new_item_uses_own_quantity_as_original() {
        let mut replacement = vec![OrderItem::new("Sugar 10kg".to_string(), 3)];
        carry_original_quantities(&[], &mut replacement);
        assert_eq!(replacement[0].original_quantity, Some(3));
    }
}
