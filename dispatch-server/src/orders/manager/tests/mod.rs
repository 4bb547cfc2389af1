use super::*;
use crate::orders::storage::OrderStore;
use shared::models::{Profile, Role};
use shared::order::{
    CommandErrorCode, DeliveryShift, DeliveryType, ItemDraft, OrderCommandPayload, OrderDraft,
    OrderStatus, ShipmentDraft, ShipmentStep,
};

fn create_test_manager() -> OrdersManager {
    let store = OrderStore::open_in_memory().unwrap();
    OrdersManager::with_store(store)
}

fn profile(role: Role) -> Profile {
    let (name, email) = match role {
        Role::Sales => ("Salma Fathy", "salma@example.com"),
        Role::Assistant => ("Nour Adel", "nour@example.com"),
        Role::Finance => ("Karim Mostafa", "karim@example.com"),
        Role::Warehouse => ("Tarek Hamed", "tarek@example.com"),
        Role::DriverSupervisor => ("Mona Samir", "mona@example.com"),
        Role::TruckDriver => ("Omar Sayed", "omar@example.com"),
        Role::Admin => ("Admin User", "admin@example.com"),
    };
    Profile {
        role,
        name: name.to_string(),
        email: email.to_string(),
    }
}

fn draft(quantity: u32) -> OrderDraft {
    OrderDraft {
        customer_name: "Cairo Mart".to_string(),
        area_location: "Nasr City".to_string(),
        order_date: None,
        receiving_date: Some(chrono::Utc::now().date_naive()),
        delivery_shift: DeliveryShift::FirstTrip,
        delivery_type: DeliveryType::OwnCars,
        items: vec![ItemDraft {
            item_name: "Rice 25kg".to_string(),
            quantity,
        }],
        overall_notes: None,
    }
}

fn command(role: Role, payload: OrderCommandPayload) -> OrderCommand {
    OrderCommand::new(profile(role), payload)
}

fn error_code(response: &CommandResponse) -> CommandErrorCode {
    response.error.as_ref().expect("expected an error").code
}

// ========================================================================
// Helpers: walk an order through the pipeline
// ========================================================================

fn create_order(manager: &OrdersManager, quantity: u32) -> String {
    let response = manager.execute_command(command(
        Role::Sales,
        OrderCommandPayload::CreateOrder {
            draft: draft(quantity),
        },
    ));
    assert!(response.success, "Failed to create order: {:?}", response.error);
    response.order_id.unwrap()
}

fn approve_chain(manager: &OrdersManager, order_id: &str) {
    let response = manager.execute_command(command(
        Role::Assistant,
        OrderCommandPayload::AssistantReview {
            order_id: order_id.to_string(),
            approve: true,
            note: None,
        },
    ));
    assert!(response.success, "Assistant review failed: {:?}", response.error);

    let response = manager.execute_command(command(
        Role::Finance,
        OrderCommandPayload::FinanceReview {
            order_id: order_id.to_string(),
            approve: true,
            note: None,
        },
    ));
    assert!(response.success, "Finance review failed: {:?}", response.error);
}

/// Create, approve, and pack an order so it is ready for driver dispatch
fn ready_order(manager: &OrdersManager, quantity: u32) -> String {
    let order_id = create_order(manager, quantity);
    approve_chain(manager, &order_id);
    let response = manager.execute_command(command(
        Role::Warehouse,
        OrderCommandPayload::MarkReady {
            order_id: order_id.clone(),
            note: None,
        },
    ));
    assert!(response.success, "MarkReady failed: {:?}", response.error);
    order_id
}

/// Dispatch a shipment carrying `quantity` units; returns the shipment id
fn dispatch(manager: &OrdersManager, order_id: &str, quantity: u32) -> String {
    let response = manager.execute_command(command(
        Role::DriverSupervisor,
        OrderCommandPayload::CreateShipment {
            order_id: order_id.to_string(),
            draft: ShipmentDraft {
                driver_name: "Omar Sayed".to_string(),
                driver_phone: "01001234567".to_string(),
                car_number: "CAR-7431".to_string(),
                warehouse_location: "Dock A".to_string(),
                dispatch_time: "08:30".to_string(),
                items: Some(vec![ItemDraft {
                    item_name: "Rice 25kg".to_string(),
                    quantity,
                }]),
            },
        },
    ));
    assert!(response.success, "Dispatch failed: {:?}", response.error);
    let order = manager.get_order(order_id).unwrap().unwrap();
    order.shipments.last().unwrap().id.clone()
}

fn advance(
    manager: &OrdersManager,
    order_id: &str,
    shipment_id: &str,
    step: ShipmentStep,
) -> CommandResponse {
    manager.execute_command(command(
        Role::TruckDriver,
        OrderCommandPayload::AdvanceShipment {
            order_id: order_id.to_string(),
            shipment_id: shipment_id.to_string(),
            step,
            photo: None,
        },
    ))
}

fn get_order(manager: &OrdersManager, order_id: &str) -> Order {
    manager.get_order(order_id).unwrap().unwrap()
}
