//! Authentication test helpers
//!
//! Utilities for creating test users directly in a store and for building
//! tokens and headers.

use uuid::Uuid;
use wallet_auth::auth::{PasswordHasher, TokenIssuer, User};
use wallet_auth::store::{InMemoryUserStore, UserStore};

use super::app::{TEST_BCRYPT_COST, TEST_ISSUER, TEST_SECRET};

/// Test user credentials
pub struct TestUser {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Create a test user in the store, bypassing the HTTP layer
pub async fn create_test_user(
    store: &InMemoryUserStore,
    name: &str,
    email: &str,
    password: &str,
) -> TestUser {
    let hash = PasswordHasher::new(TEST_BCRYPT_COST)
        .hash(password)
        .await
        .expect("Failed to hash test password");
    let user = User::new(name.to_string(), email.to_string(), hash);
    let id = user.id;
    store.insert(user).await.expect("Failed to insert test user");

    TestUser {
        id,
        name: name.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    }
}

/// A unique email for tests that only need "some" user
pub fn unique_email() -> String {
    format!("test_{}@example.com", Uuid::new_v4())
}

/// Issuer sharing the test app's key, as a downstream service would hold
pub fn downstream_issuer() -> TokenIssuer {
    TokenIssuer::new(TEST_SECRET.as_bytes(), TEST_ISSUER)
}

/// Create authorization header value
pub fn auth_header(token: &str) -> String {
    format!("Bearer {}", token)
}
