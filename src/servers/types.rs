/**
 * Server Registry Types
 *
 * Request validation for registering a server and the status document
 * returned for a single server.
 */

use std::net::IpAddr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::servers::Server;

/// Status reported for every registered server
pub const REGISTERED: &str = "registered";

/// Add-server request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct AddServerRequest {
    /// Display name
    #[serde(default)]
    pub name: String,
    /// IPv4 or IPv6 address
    #[serde(default)]
    pub ip: String,
}

impl AddServerRequest {
    /// Check required fields and parse the address
    pub fn validate(&self) -> Result<IpAddr, ApiError> {
        if self.name.is_empty() || self.ip.is_empty() {
            return Err(ApiError::MissingFields("Server name and IP are required"));
        }
        self.ip
            .parse()
            .map_err(|_| ApiError::InvalidField("IP must be a valid IPv4 or IPv6 address"))
    }
}

/// Status of one registered server
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ServerStatus {
    pub ip: IpAddr,
    pub name: String,
    pub status: String,
    pub added_at: DateTime<Utc>,
}

impl From<&Server> for ServerStatus {
    fn from(server: &Server) -> Self {
        Self {
            ip: server.ip,
            name: server.name.clone(),
            status: REGISTERED.to_string(),
            added_at: server.added_at,
        }
    }
}
