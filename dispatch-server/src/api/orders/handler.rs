//! Order API Handlers

use std::time::Duration;

use axum::{
    Json,
    extract::{Path, Query, State},
};
use serde::{Deserialize, Serialize};
use tokio::sync::broadcast::error::RecvError;

use crate::core::ServerState;
use crate::utils::{AppError, AppResult};
use shared::order::{CommandResponse, Order, OrderCommand, OrderStatus};

/// Upper bound on a single long-poll wait
const MAX_LONG_POLL_MS: u64 = 60_000;

/// Query params for listing orders
#[derive(Debug, Default, Deserialize)]
pub struct ListOrdersQuery {
    /// Exact status match
    pub status: Option<OrderStatus>,
    /// Substring match on customer name or serial number
    pub search: Option<String>,
    /// Earliest receiving date (YYYY-MM-DD, inclusive)
    pub date_from: Option<String>,
    /// Latest receiving date (YYYY-MM-DD, inclusive)
    pub date_to: Option<String>,
    /// Creator email match
    pub created_by: Option<String>,
}

/// List orders, newest first
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<ListOrdersQuery>,
) -> AppResult<Json<Vec<Order>>> {
    let mut orders = state.orders.get_orders()?;
    orders.retain(|order| matches_query(order, &query));
    Ok(Json(orders))
}

fn matches_query(order: &Order, query: &ListOrdersQuery) -> bool {
    if let Some(status) = query.status
        && order.status != status
    {
        return false;
    }
    if let Some(search) = &query.search {
        let needle = search.to_lowercase();
        let hit = order.customer_name.to_lowercase().contains(&needle)
            || order.serial_number.to_lowercase().contains(&needle);
        if !hit {
            return false;
        }
    }
    if let Some(from) = query.date_from.as_deref().and_then(crate::utils::time::parse_date)
        && order.receiving_date < from
    {
        return false;
    }
    if let Some(to) = query.date_to.as_deref().and_then(crate::utils::time::parse_date)
        && order.receiving_date > to
    {
        return false;
    }
    if let Some(creator) = &query.created_by
        && order.created_by.as_deref() != Some(creator.as_str())
    {
        return false;
    }
    true
}

/// Fetch one order by id
pub async fn get_by_id(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Order>> {
    let order = state
        .orders
        .get_order(&id)?
        .ok_or_else(|| AppError::NotFound(format!("Order {} not found", id)))?;
    Ok(Json(order))
}

/// Execute an order command
///
/// Always returns 200; success or failure is carried in the CommandResponse
/// so clients handle business rejections uniformly.
pub async fn execute(
    State(state): State<ServerState>,
    Json(cmd): Json<OrderCommand>,
) -> AppResult<Json<CommandResponse>> {
    // redb writes are blocking; keep them off the async workers
    let orders = state.orders.clone();
    let response = tokio::task::spawn_blocking(move || orders.execute_command(cmd))
        .await
        .map_err(|e| AppError::Internal(format!("Command task failed: {}", e)))?;
    Ok(Json(response))
}

/// Query params for the update long-poll
#[derive(Debug, Default, Deserialize)]
pub struct UpdatesQuery {
    /// How long to wait for a change before returning unchanged
    pub timeout_ms: Option<u64>,
}

#[derive(Debug, Serialize)]
pub struct UpdatesResponse {
    /// Whether any order changed while waiting
    pub changed: bool,
    /// Store epoch; clients resync fully when it differs from theirs
    pub epoch: String,
    pub orders: Vec<Order>,
}

/// Long-poll for order changes
///
/// Subscribes to the event broadcast and waits up to the requested timeout.
/// A lagged receiver still counts as changed: the caller gets the full
/// current collection either way.
pub async fn updates(
    State(state): State<ServerState>,
    Query(query): Query<UpdatesQuery>,
) -> AppResult<Json<UpdatesResponse>> {
    let wait = query
        .timeout_ms
        .unwrap_or(state.config.long_poll_timeout_ms)
        .min(MAX_LONG_POLL_MS);

    let mut rx = state.orders.subscribe();
    let changed = matches!(
        tokio::time::timeout(Duration::from_millis(wait), rx.recv()).await,
        Ok(Ok(_)) | Ok(Err(RecvError::Lagged(_)))
    );

    let orders = state.orders.get_orders()?;
    Ok(Json(UpdatesResponse {
        changed,
        epoch: state.orders.epoch().to_string(),
        orders,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::order::{DeliveryShift, DeliveryType};

    fn sample_order() -> Order {
        let mut order = Order::new("order-1".to_string());
        order.serial_number = "SO-000042".to_string();
        order.customer_name = "Cairo Mart".to_string();
        order.area_location = "Nasr City".to_string();
        order.order_date = chrono::NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
        order.receiving_date = chrono::NaiveDate::from_ymd_opt(2025, 3, 14).unwrap();
        order.delivery_shift = DeliveryShift::FirstTrip;
        order.delivery_type = DeliveryType::OwnCars;
        order.status = OrderStatus::PendingAssistant;
        order.created_by = Some("salma@example.com".to_string());
        order
    }

    #[test]
    fn test_empty_query_matches_everything() {
        assert!(matches_query(&sample_order(), &ListOrdersQuery::default()));
    }

    #[test]
    fn test_status_filter() {
        let query = ListOrdersQuery {
            status: Some(OrderStatus::Approved),
            ..Default::default()
        };
        assert!(!matches_query(&sample_order(), &query));
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let query = ListOrdersQuery {
            search: Some("cairo".to_string()),
            ..Default::default()
        };
        assert!(matches_query(&sample_order(), &query));

        let query = ListOrdersQuery {
            search: Some("so-000042".to_string()),
            ..Default::default()
        };
        assert!(matches_query(&sample_order(), &query));

        let query = ListOrdersQuery {
            search: Some("giza".to_string()),
            ..Default::default()
        };
        assert!(!matches_query(&sample_order(), &query));
    }

    #[test]
    fn test_date_range_filter() {
        let query = ListOrdersQuery {
            date_from: Some("2025-03-14".to_string()),
            date_to: Some("2025-03-14".to_string()),
            ..Default::default()
        };
        assert!(matches_query(&sample_order(), &query));

        let query = ListOrdersQuery {
            date_to: Some("2025-03-13".to_string()),
            ..Default::default()
        };
        assert!(!matches_query(&sample_order(), &query));
    }

    #[test]
    fn test_created_by_filter() {
        let query = ListOrdersQuery {
            created_by: Some("salma@example.com".to_string()),
            ..Default::default()
        };
        assert!(matches_query(&sample_order(), &query));

        let query = ListOrdersQuery {
            created_by: Some("nour@example.com".to_string()),
            ..Default::default()
        };
        assert!(!matches_query(&sample_order(), &query));
    }
}
