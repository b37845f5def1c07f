/**
 * User Model
 *
 * The user record held by the credential store. Records are created once on
 * registration and never updated.
 */

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Minimum password length, counted in characters
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// A registered user
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Unique user ID, generated at creation
    pub id: Uuid,
    /// Display name
    pub name: String,
    /// Email address (unique, case-sensitive)
    pub email: String,
    /// Bcrypt digest of the password
    #[serde(skip_serializing)]
    pub password_hash: String,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Build a new user record with a fresh random identifier
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }
}
