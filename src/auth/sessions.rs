/**
 * Session Tokens
 *
 * Issues and verifies HS256 JWTs asserting a user's identity. The signing key
 * and issuer name are fixed when the issuer is built at startup.
 *
 * # Claims
 *
 * ```json
 * { "userId": "...", "email": "...", "iat": 1700000000, "exp": 1700086400, "iss": "wallet-app" }
 * ```
 *
 * Tokens expire 24 hours after issuance. Verification uses no leeway, so a
 * token is rejected the second it expires.
 */

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{
    decode, encode, errors::ErrorKind, Algorithm, DecodingKey, EncodingKey, Header, Validation,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

/// Lifetime of an issued token
pub const TOKEN_TTL_HOURS: i64 = 24;

/// JWT claims
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID
    #[serde(rename = "userId")]
    pub user_id: String,
    /// Email
    pub email: String,
    /// Issued at (Unix timestamp)
    #[serde(rename = "iat")]
    pub issued_at: i64,
    /// Expiration time (Unix timestamp)
    #[serde(rename = "exp")]
    pub expires_at: i64,
    /// Issuer name
    #[serde(rename = "iss")]
    pub issuer: String,
}

impl Claims {
    /// Parse the user ID claim
    pub fn user_uuid(&self) -> Result<Uuid, TokenError> {
        Uuid::parse_str(&self.user_id).map_err(|_| TokenError::InvalidSubject)
    }
}

/// Token errors
#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token has expired")]
    Expired,

    #[error("invalid token: {0}")]
    Invalid(#[source] jsonwebtoken::errors::Error),

    #[error("token user ID is not a valid UUID")]
    InvalidSubject,

    #[error("failed to sign token: {0}")]
    Signing(#[source] jsonwebtoken::errors::Error),
}

/// Issues and verifies session tokens
#[derive(Clone)]
pub struct TokenIssuer {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    issuer: String,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("issuer", &self.issuer)
            .finish_non_exhaustive()
    }
}

impl TokenIssuer {
    /// Create an issuer signing with `secret`
    pub fn new(secret: &[u8], issuer: impl Into<String>) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret),
            decoding_key: DecodingKey::from_secret(secret),
            issuer: issuer.into(),
        }
    }

    pub fn issuer(&self) -> &str {
        &self.issuer
    }

    /// Create a token for a user, issued now
    pub fn issue(&self, user_id: Uuid, email: &str) -> Result<String, TokenError> {
        self.issue_at(user_id, email, Utc::now())
    }

    /// Create a token for a user with an explicit issuance time
    pub fn issue_at(
        &self,
        user_id: Uuid,
        email: &str,
        issued_at: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let expires_at = issued_at + Duration::hours(TOKEN_TTL_HOURS);
        let claims = Claims {
            user_id: user_id.to_string(),
            email: email.to_string(),
            issued_at: issued_at.timestamp(),
            expires_at: expires_at.timestamp(),
            issuer: self.issuer.clone(),
        };

        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(TokenError::Signing)
    }

    /// Verify a token's signature, issuer and expiry and return its claims
    pub fn verify(&self, token: &str) -> Result<Claims, TokenError> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation.set_issuer(&[self.issuer.as_str()]);
        validation.set_required_spec_claims(&["exp", "iss"]);

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => TokenError::Expired,
                _ => TokenError::Invalid(e),
            })
    }
}
