//! redb-based storage for the order collection
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `orders` | `"orders"` | `Vec<Order>` (JSON) | The whole order collection |
//! | `processed_commands` | `command_id` | `()` | Idempotency check |
//! | `counters` | `"serial_number"` | `u64` | Serial number counter |
//!
//! The collection is stored as one JSON blob under a single well-known key
//! and every command rewrites it inside one write transaction, so a
//! concurrent reader sees either the full previous state or the full next
//! state, never a partial update.

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition, WriteTransaction};
use shared::order::Order;
use std::path::Path;
use std::sync::Arc;
use thiserror::Error;

/// The order collection: key = "orders", value = JSON-serialized Vec<Order>
const ORDERS_TABLE: TableDefinition<&str, &[u8]> = TableDefinition::new("orders");

/// Processed commands: key = command_id, value = empty (idempotency)
const PROCESSED_COMMANDS_TABLE: TableDefinition<&str, ()> =
    TableDefinition::new("processed_commands");

/// Monotonic counters: key = counter name, value = u64
const COUNTERS_TABLE: TableDefinition<&str, u64> = TableDefinition::new("counters");

const ORDERS_KEY: &str = "orders";
const SERIAL_COUNTER_KEY: &str = "serial_number";

/// Storage errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] redb::DatabaseError),

    #[error("Transaction error: {0}")]
    Transaction(#[from] redb::TransactionError),

    #[error("Table error: {0}")]
    Table(#[from] redb::TableError),

    #[error("Storage error: {0}")]
    Storage(#[from] redb::StorageError),

    #[error("Commit error: {0}")]
    Commit(#[from] redb::CommitError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Order store backed by redb
///
/// redb commits with `Durability::Immediate`, so a committed collection
/// survives power loss and the file is always in a consistent state.
#[derive(Clone)]
pub struct OrderStore {
    db: Arc<Database>,
}

impl OrderStore {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Self::init_tables(&db)?;
        Ok(Self { db: Arc::new(db) })
    }

    /// Open an in-memory database (for testing)
    #[cfg(test)]
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init_tables(&db)?;
        Ok(Self { db: Arc::new(db) })
    }

    fn init_tables(db: &Database) -> StorageResult<()> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(ORDERS_TABLE)?;
            let _ = write_txn.open_table(PROCESSED_COMMANDS_TABLE)?;
            let mut counters = write_txn.open_table(COUNTERS_TABLE)?;
            if counters.get(SERIAL_COUNTER_KEY)?.is_none() {
                counters.insert(SERIAL_COUNTER_KEY, 0u64)?;
            }
        }
        write_txn.commit()?;
        Ok(())
    }

    /// Begin a write transaction
    pub fn begin_write(&self) -> StorageResult<WriteTransaction> {
        Ok(self.db.begin_write()?)
    }

    // ========== Order Collection ==========

    /// Load the full collection (read-only snapshot)
    pub fn load_orders(&self) -> StorageResult<Vec<Order>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(ORDERS_TABLE)?;
        match table.get(ORDERS_KEY)? {
            Some(value) => Ok(serde_json::from_slice(value.value())?),
            None => Ok(Vec::new()),
        }
    }

    /// Load the collection within a write transaction
    pub fn load_orders_txn(&self, txn: &WriteTransaction) -> StorageResult<Vec<Order>> {
        let table = txn.open_table(ORDERS_TABLE)?;
        match table.get(ORDERS_KEY)? {
            Some(value) => Ok(serde_json::from_slice(value.value())?),
            None => Ok(Vec::new()),
        }
    }

    /// Replace the collection within a write transaction
    pub fn store_orders(&self, txn: &WriteTransaction, orders: &[Order]) -> StorageResult<()> {
        let mut table = txn.open_table(ORDERS_TABLE)?;
        let value = serde_json::to_vec(orders)?;
        table.insert(ORDERS_KEY, value.as_slice())?;
        Ok(())
    }

    // ========== Command Idempotency ==========

    /// Check if a command has been processed
    pub fn is_command_processed(&self, command_id: &str) -> StorageResult<bool> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(PROCESSED_COMMANDS_TABLE)?;
        Ok(table.get(command_id)?.is_some())
    }

    /// Check if a command has been processed (within transaction)
    pub fn is_command_processed_txn(
        &self,
        txn: &WriteTransaction,
        command_id: &str,
    ) -> StorageResult<bool> {
        let table = txn.open_table(PROCESSED_COMMANDS_TABLE)?;
        Ok(table.get(command_id)?.is_some())
    }

    /// Mark a command as processed
    pub fn mark_command_processed(
        &self,
        txn: &WriteTransaction,
        command_id: &str,
    ) -> StorageResult<()> {
        let mut table = txn.open_table(PROCESSED_COMMANDS_TABLE)?;
        table.insert(command_id, ())?;
        Ok(())
    }

    // ========== Serial Counter ==========

    /// Increment and return the serial counter (within transaction).
    ///
    /// The increment commits together with the order that consumes it, so a
    /// failed command never burns a serial number.
    pub fn next_serial(&self, txn: &WriteTransaction) -> StorageResult<u64> {
        let mut table = txn.open_table(COUNTERS_TABLE)?;
        let current = table
            .get(SERIAL_COUNTER_KEY)?
            .map(|g| g.value())
            .unwrap_or(0);
        let next = current + 1;
        table.insert(SERIAL_COUNTER_KEY, next)?;
        Ok(next)
    }

    /// Current serial counter value (read-only)
    pub fn current_serial(&self) -> StorageResult<u64> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(COUNTERS_TABLE)?;
        Ok(table
            .get(SERIAL_COUNTER_KEY)?
            .map(|g| g.value())
            .unwrap_or(0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::order::OrderItem;

    fn test_order(id: &str) -> Order {
        let mut order = Order::new(id.to_string());
        order.customer_name = "Cairo Mart".to_string();
        order.items = vec![OrderItem::new("Rice 25kg", 5)];
        order
    }

    #[test]
    fn test_empty_store_loads_empty_collection() {
        let store = OrderStore::open_in_memory().unwrap();
        assert!(store.load_orders().unwrap().is_empty());
    }

    #[test]
    fn test_collection_round_trip() {
        let store = OrderStore::open_in_memory().unwrap();
        let orders = vec![test_order("order-1"), test_order("order-2")];

        let txn = store.begin_write().unwrap();
        store.store_orders(&txn, &orders).unwrap();
        txn.commit().unwrap();

        let loaded = store.load_orders().unwrap();
        assert_eq!(loaded, orders);
    }

    #[test]
    fn test_uncommitted_write_is_invisible() {
        let store = OrderStore::open_in_memory().unwrap();
        let orders = vec![test_order("order-1")];

        let txn = store.begin_write().unwrap();
        store.store_orders(&txn, &orders).unwrap();
        drop(txn); // abort

        assert!(store.load_orders().unwrap().is_empty());
    }

    #[test]
    fn test_command_idempotency() {
        let store = OrderStore::open_in_memory().unwrap();
        let command_id = "cmd-123";

        assert!(!store.is_command_processed(command_id).unwrap());

        let txn = store.begin_write().unwrap();
        store.mark_command_processed(&txn, command_id).unwrap();
        txn.commit().unwrap();

        assert!(store.is_command_processed(command_id).unwrap());
    }

    #[test]
    fn test_serial_counter_increments() {
        let store = OrderStore::open_in_memory().unwrap();
        assert_eq!(store.current_serial().unwrap(), 0);

        let txn = store.begin_write().unwrap();
        assert_eq!(store.next_serial(&txn).unwrap(), 1);
        txn.commit().unwrap();

        let txn = store.begin_write().unwrap();
        assert_eq!(store.next_serial(&txn).unwrap(), 2);
        txn.commit().unwrap();

        assert_eq!(store.current_serial().unwrap(), 2);
    }

    #[test]
    fn test_aborted_serial_is_not_burned() {
        let store = OrderStore::open_in_memory().unwrap();

        let txn = store.begin_write().unwrap();
        assert_eq!(store.next_serial(&txn).unwrap(), 1);
        drop(txn); // abort

        assert_eq!(store.current_serial().unwrap(), 0);
    }

    #[test]
    fn test_collection_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("orders.redb");

        {
            let store = OrderStore::open(&path).unwrap();
            let txn = store.begin_write().unwrap();
            store.store_orders(&txn, &[test_order("order-1")]).unwrap();
            store.next_serial(&txn).unwrap();
            txn.commit().unwrap();
        }

        let store = OrderStore::open(&path).unwrap();
        let loaded = store.load_orders().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "order-1");
        assert_eq!(store.current_serial().unwrap(), 1);
    }
}
