use std::sync::Arc;

use crate::core::Config;
use crate::orders::OrdersManager;
use crate::services::ExtractionService;

/// Server state - shared handles for every HTTP handler
///
/// ServerState is cloned into each request; all members are cheap to clone.
///
/// # Components
///
/// | Field | Type | Description |
/// |-------|------|-------------|
/// | config | Config | Configuration (immutable) |
/// | orders | Arc<OrdersManager> | Order pipeline and storage |
/// | extraction | ExtractionService | Text-extraction collaborator client |
#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Order pipeline (commands, queries, update broadcast)
    pub orders: Arc<OrdersManager>,
    /// Text-extraction collaborator client
    pub extraction: ExtractionService,
}

impl ServerState {
    /// Initialize the server state
    ///
    /// Ensures the working directory exists and opens the order database
    /// at `work_dir/orders.redb`.
    pub fn initialize(config: &Config) -> anyhow::Result<Self> {
        std::fs::create_dir_all(&config.work_dir)?;

        let orders = Arc::new(OrdersManager::new(config.db_path())?);
        let extraction = ExtractionService::new(config);

        Ok(Self {
            config: config.clone(),
            orders,
            extraction,
        })
    }
}
