//! Actor profile
//!
//! Identity is established by an external login collaborator; the core only
//! ever reads `role` and `name`/`email` for authorization checks and history
//! attribution.

use serde::{Deserialize, Serialize};

/// Workflow role
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Sales,
    Assistant,
    Finance,
    Warehouse,
    DriverSupervisor,
    TruckDriver,
    Admin,
}

impl Role {
    /// Human-facing role label recorded in history entries
    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Sales => "Sales Supervisor",
            Role::Assistant => "Sales Assistant",
            Role::Finance => "Finance",
            Role::Warehouse => "Warehouse",
            Role::DriverSupervisor => "Driver Supervisor",
            Role::TruckDriver => "Truck Driver",
            Role::Admin => "System Admin",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Role-tagged actor profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub role: Role,
    pub name: String,
    pub email: String,
}
