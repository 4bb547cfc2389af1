//! OrdersManager - command processing and event application
//!
//! # Command Flow
//!
//! ```text
//! execute_command(cmd)
//!     ├─ 1. Permission check (role vs command kind)
//!     ├─ 2. Idempotency check (command_id)
//!     ├─ 3. Begin write transaction
//!     ├─ 4. Load collection, build CommandContext
//!     ├─ 5. Convert command to action and execute -> one event
//!     ├─ 6. Apply event to the order via EventApplier
//!     ├─ 7. Persist collection, mark command processed
//!     ├─ 8. Commit transaction
//!     ├─ 9. Broadcast event
//!     └─ 10. Return response
//! ```
//!
//! Validation failures abort the transaction, so a rejected command leaves
//! no trace - not even a consumed serial number.

mod error;
pub use error::*;

use super::actions::{CommandAction, CreateOrderAction};
use super::appliers::EventAction;
use super::storage::{OrderStore, StorageError};
use super::traits::{CommandContext, CommandHandler, CommandMetadata, EventApplier, OrderError};
use crate::auth::permissions;
use shared::order::{CommandError, CommandResponse, Order, OrderCommand, OrderEvent};
use std::path::Path;
use tokio::sync::broadcast;

/// Event broadcast channel capacity
const EVENT_CHANNEL_CAPACITY: usize = 1024;

/// OrdersManager for command processing
///
/// The `epoch` field is a unique identifier generated on each startup.
/// Long-poll clients use it to detect server restarts and re-fetch.
pub struct OrdersManager {
    store: OrderStore,
    event_tx: broadcast::Sender<OrderEvent>,
    /// Server instance epoch - unique ID generated on startup
    epoch: String,
}

impl std::fmt::Debug for OrdersManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrdersManager")
            .field("store", &"<OrderStore>")
            .field("event_tx", &"<broadcast::Sender>")
            .field("epoch", &self.epoch)
            .finish()
    }
}

impl OrdersManager {
    /// Create a new OrdersManager with the given database path
    pub fn new(db_path: impl AsRef<Path>) -> ManagerResult<Self> {
        let store = OrderStore::open(db_path)?;
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        let epoch = uuid::Uuid::new_v4().to_string();
        tracing::info!(epoch = %epoch, "OrdersManager started with new epoch");
        Ok(Self {
            store,
            event_tx,
            epoch,
        })
    }

    /// Create an OrdersManager with existing storage (for testing)
    #[cfg(test)]
    pub fn with_store(store: OrderStore) -> Self {
        let (event_tx, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        Self {
            store,
            event_tx,
            epoch: uuid::Uuid::new_v4().to_string(),
        }
    }

    /// Get the server epoch (unique instance ID)
    pub fn epoch(&self) -> &str {
        &self.epoch
    }

    /// Subscribe to event broadcasts
    pub fn subscribe(&self) -> broadcast::Receiver<OrderEvent> {
        self.event_tx.subscribe()
    }

    /// Execute a command and return the response
    pub fn execute_command(&self, cmd: OrderCommand) -> CommandResponse {
        match self.process_command(&cmd) {
            Ok((response, event)) => {
                // Broadcast after successful commit
                if self.event_tx.send(event).is_err() {
                    tracing::debug!("Event broadcast skipped: no active receivers");
                }
                response
            }
            Err(err) => {
                let CommandError { code, message } = err.into();
                tracing::warn!(command_id = %cmd.command_id, code = ?code, %message, "Command rejected");
                CommandResponse::error(code, message)
            }
        }
    }

    /// Process a command and return the response with the generated event
    fn process_command(&self, cmd: &OrderCommand) -> ManagerResult<(CommandResponse, OrderEvent)> {
        tracing::debug!(command_id = %cmd.command_id, kind = cmd.payload.kind(), "Processing command");

        // 1. Permission check
        if !permissions::is_allowed(cmd.actor.role, &cmd.payload) {
            return Err(OrderError::NotPermitted {
                role: cmd.actor.role.display_name().to_string(),
                action: cmd.payload.kind().to_string(),
            }
            .into());
        }

        // 2. Idempotency check (before transaction)
        if self.store.is_command_processed(&cmd.command_id)? {
            return Err(ManagerError::Duplicate(cmd.command_id.clone()));
        }

        // 3. Begin write transaction
        let txn = self.store.begin_write()?;

        // Double-check idempotency within the transaction
        if self.store.is_command_processed_txn(&txn, &cmd.command_id)? {
            return Err(ManagerError::Duplicate(cmd.command_id.clone()));
        }

        // 4. Load the collection
        let mut orders = self.store.load_orders_txn(&txn)?;
        let metadata = CommandMetadata::from_command(cmd);

        // 5. Convert to action and execute.
        // CreateOrder allocates its serial number inside this transaction so
        // a failed command never burns one.
        let action: CommandAction = match &cmd.payload {
            shared::order::OrderCommandPayload::CreateOrder { draft } => {
                let serial = self.store.next_serial(&txn)?;
                CommandAction::CreateOrder(CreateOrderAction {
                    order_id: uuid::Uuid::new_v4().to_string(),
                    serial_number: format!("SO-{:06}", serial),
                    draft: draft.clone(),
                })
            }
            _ => cmd.try_into()?,
        };
        let event = {
            let ctx = CommandContext::new(&orders);
            action.execute(&ctx, &metadata)?
        };

        // 6. Apply the event. An unknown order id means a fresh creation;
        // new orders go to the front so listings stay newest-first.
        let applier = EventAction::from(&event);
        match orders.iter_mut().find(|o| o.id == event.order_id) {
            Some(order) => applier.apply(order, &event),
            None => {
                let mut order = Order::new(event.order_id.clone());
                applier.apply(&mut order, &event);
                orders.insert(0, order);
            }
        }

        // 7. Persist and mark processed
        self.store.store_orders(&txn, &orders)?;
        self.store.mark_command_processed(&txn, &cmd.command_id)?;

        // 8. Commit
        txn.commit().map_err(StorageError::from)?;

        tracing::info!(
            command_id = %cmd.command_id,
            order_id = %event.order_id,
            kind = cmd.payload.kind(),
            "Command processed"
        );
        Ok((CommandResponse::ok(event.order_id.clone()), event))
    }

    // ========== Public Query Methods ==========

    /// Get the full order collection (newest first)
    pub fn get_orders(&self) -> ManagerResult<Vec<Order>> {
        Ok(self.store.load_orders()?)
    }

    /// Get a single order by ID
    pub fn get_order(&self, order_id: &str) -> ManagerResult<Option<Order>> {
        Ok(self
            .store
            .load_orders()?
            .into_iter()
            .find(|o| o.id == order_id))
    }
}

#[cfg(test)]
mod tests;
