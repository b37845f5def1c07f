//! Test application fixture
//!
//! Every test builds its own `TestApp`, so tests never share a store and can
//! run in parallel.

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;
use wallet_auth::auth::{PasswordHasher, TokenIssuer};
use wallet_auth::routes::create_router;
use wallet_auth::store::{InMemoryServerStore, InMemoryUserStore, UserStore};
use wallet_auth::AppState;

/// Signing key used by every test app
pub const TEST_SECRET: &str = "test_secret_key_that_is_long_enough_for_hs256";

/// Issuer name used by every test app
pub const TEST_ISSUER: &str = "wallet-app";

/// Lowest bcrypt cost, to keep tests fast
pub const TEST_BCRYPT_COST: u32 = 4;

/// A response with its body decoded
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub content_type: Option<String>,
    pub allow: Option<String>,
    pub text: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.text)
            .unwrap_or_else(|e| panic!("Response is not JSON ({}): {}", e, self.text))
    }
}

/// Router plus direct access to its stores
pub struct TestApp {
    pub router: Router,
    pub store: Arc<InMemoryUserStore>,
    pub servers: Arc<InMemoryServerStore>,
    pub tokens: TokenIssuer,
}

impl TestApp {
    pub fn new() -> Self {
        Self::with_bcrypt_cost(TEST_BCRYPT_COST)
    }

    /// App hashing at a realistic cost, for timing-sensitive tests
    pub fn with_bcrypt_cost(cost: u32) -> Self {
        let store = Arc::new(InMemoryUserStore::new());
        Self::build(store.clone(), store, cost)
    }

    /// App whose handlers use `users`; `self.store` is then left unused
    pub fn with_user_store(users: Arc<dyn UserStore>) -> Self {
        Self::build(users, Arc::new(InMemoryUserStore::new()), TEST_BCRYPT_COST)
    }

    fn build(users: Arc<dyn UserStore>, store: Arc<InMemoryUserStore>, cost: u32) -> Self {
        let servers = Arc::new(InMemoryServerStore::new());
        let tokens = TokenIssuer::new(TEST_SECRET.as_bytes(), TEST_ISSUER);
        let state = AppState::new(users, PasswordHasher::new(cost), tokens.clone())
            .with_servers(servers.clone());

        Self {
            router: create_router(state),
            store,
            servers,
            tokens,
        }
    }

    /// Send a request with an optional raw body
    pub async fn send(
        &self,
        method: Method,
        uri: &str,
        body: Option<&str>,
        headers: &[(&str, &str)],
    ) -> TestResponse {
        let mut builder = Request::builder().method(method).uri(uri);
        if body.is_some() {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
        }
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        let request = builder
            .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
            .unwrap();

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let (content_type, allow) = {
            let header_text = |name: header::HeaderName| {
                response
                    .headers()
                    .get(name)
                    .and_then(|v| v.to_str().ok())
                    .map(str::to_string)
            };
            (header_text(header::CONTENT_TYPE), header_text(header::ALLOW))
        };
        let bytes = response.into_body().collect().await.unwrap().to_bytes();

        TestResponse {
            status,
            content_type,
            allow,
            text: String::from_utf8(bytes.to_vec()).unwrap(),
        }
    }

    pub async fn post_json(&self, uri: &str, body: &Value) -> TestResponse {
        self.send(Method::POST, uri, Some(&body.to_string()), &[]).await
    }

    pub async fn register(&self, name: &str, email: &str, password: &str) -> TestResponse {
        self.post_json(
            "/api/v1/auth/register",
            &serde_json::json!({ "name": name, "email": email, "password": password }),
        )
        .await
    }

    pub async fn login(&self, email: &str, password: &str) -> TestResponse {
        self.post_json(
            "/api/v1/auth/login",
            &serde_json::json!({ "email": email, "password": password }),
        )
        .await
    }

    pub async fn me(&self, token: &str) -> TestResponse {
        self.send_authorized(Method::GET, "/api/v1/auth/me", None, token)
            .await
    }

    /// Send a request carrying `token` as a bearer credential
    pub async fn send_authorized(
        &self,
        method: Method,
        uri: &str,
        body: Option<&str>,
        token: &str,
    ) -> TestResponse {
        let authorization = format!("Bearer {}", token);
        self.send(method, uri, body, &[("authorization", authorization.as_str())])
            .await
    }

    /// Register and log in a fresh user, returning its token
    pub async fn signed_in_token(&self) -> String {
        let email = super::unique_email();
        let registered = self.register("Operator", &email, "password123").await;
        assert_eq!(registered.status, StatusCode::CREATED, "{}", registered.text);
        let logged_in = self.login(&email, "password123").await;
        assert_eq!(logged_in.status, StatusCode::OK, "{}", logged_in.text);
        logged_in.json()["token"]
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| panic!("Login response has no token: {}", logged_in.text))
    }

    pub async fn add_server(&self, token: &str, name: &str, ip: &str) -> TestResponse {
        let body = serde_json::json!({ "name": name, "ip": ip }).to_string();
        self.send_authorized(Method::POST, "/api/v1/servers", Some(&body), token)
            .await
    }
}
