//! Server Registry Module
//!
//! Lets signed-in users register the machines they manage, list them and
//! query one by address. The registry is shared by all users; each entry
//! records who added it.
//!
//! # Endpoints
//!
//! - **`add_server`** - POST /api/v1/servers
//! - **`list_servers`** - GET /api/v1/servers
//! - **`server_status`** - GET /api/v1/servers/{ip}
//!
//! Every endpoint requires a bearer token.

use std::net::IpAddr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Request and response types
pub mod types;

/// HTTP handlers
pub mod handlers;

pub use handlers::{add_server, list_servers, server_status};
pub use types::{AddServerRequest, ServerStatus};

/// A registered server
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Server {
    pub name: String,
    pub ip: IpAddr,
    /// User who registered the server
    pub added_by: Uuid,
    pub added_at: DateTime<Utc>,
}

impl Server {
    pub fn new(name: String, ip: IpAddr, added_by: Uuid) -> Self {
        Self {
            name,
            ip,
            added_by,
            added_at: Utc::now(),
        }
    }
}
