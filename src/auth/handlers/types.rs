/**
 * Authentication Handler Types
 *
 * Request and response bodies for the register, login and current-user
 * handlers, together with the input validation rules for each request.
 */

use serde::{Deserialize, Serialize};

use crate::auth::users::{User, MIN_PASSWORD_LENGTH};
use crate::error::ApiError;

/// Registration request
///
/// Absent fields deserialize as empty strings so they are reported as
/// missing rather than as a malformed body.
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct RegisterRequest {
    /// Display name
    #[serde(default)]
    pub name: String,
    /// Email address
    #[serde(default)]
    pub email: String,
    /// Plaintext password (hashed before storage)
    #[serde(default)]
    pub password: String,
}

impl RegisterRequest {
    /// Check required fields, then password length
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.name.is_empty() || self.email.is_empty() || self.password.is_empty() {
            return Err(ApiError::MissingFields(
                "Name, email, and password are required",
            ));
        }
        if self.password.chars().count() < MIN_PASSWORD_LENGTH {
            return Err(ApiError::WeakPassword);
        }
        Ok(())
    }
}

/// Login request
#[derive(Deserialize, Serialize, Debug, Default)]
pub struct LoginRequest {
    /// Email address
    #[serde(default)]
    pub email: String,
    /// Plaintext password
    #[serde(default)]
    pub password: String,
}

impl LoginRequest {
    pub fn validate(&self) -> Result<(), ApiError> {
        if self.email.is_empty() || self.password.is_empty() {
            return Err(ApiError::MissingFields("Email and password are required"));
        }
        Ok(())
    }
}

/// Public user fields
///
/// Returned by registration and embedded in the login response. Never
/// carries the password hash.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user_id: String,
    pub email: String,
    pub name: String,
}

impl From<&User> for UserResponse {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id.to_string(),
            email: user.email.clone(),
            name: user.name.clone(),
        }
    }
}

/// Login response
#[derive(Serialize, Deserialize, Debug)]
pub struct LoginResponse {
    /// Signed session token (24-hour expiration)
    pub token: String,
    pub user: UserResponse,
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn register(name: &str, email: &str, password: &str) -> RegisterRequest {
        RegisterRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: password.to_string(),
        }
    }

    #[test]
    fn test_valid_registration() {
        assert!(register("Ann", "ann@x.com", "longpassword").validate().is_ok());
    }

    #[test]
    fn test_missing_fields() {
        for request in [
            register("", "ann@x.com", "longpassword"),
            register("Ann", "", "longpassword"),
            register("Ann", "ann@x.com", ""),
        ] {
            assert!(matches!(request.validate(), Err(ApiError::MissingFields(_))));
        }
    }

    #[test]
    fn test_password_length_counts_characters() {
        // Eight characters, sixteen bytes
        assert!(register("Ann", "ann@x.com", "ääääääää").validate().is_ok());
        assert!(matches!(
            register("Ann", "ann@x.com", "1234567").validate(),
            Err(ApiError::WeakPassword)
        ));
    }

    #[test]
    fn test_absent_fields_deserialize_as_empty() {
        let request: RegisterRequest =
            serde_json::from_str(r#"{"name":"Ann","password":"longpassword"}"#).unwrap();
        assert_eq!(request.email, "");
        assert!(matches!(request.validate(), Err(ApiError::MissingFields(_))));
    }

    #[test]
    fn test_login_missing_fields() {
        let request = LoginRequest {
            email: "test@example.com".to_string(),
            password: String::new(),
        };
        assert!(matches!(request.validate(), Err(ApiError::MissingFields(_))));
    }

    #[test]
    fn test_user_response_field_names() {
        let user = User::new("Ann".into(), "ann@x.com".into(), "hash".into());
        let json = serde_json::to_value(UserResponse::from(&user)).unwrap();

        assert_eq!(json["userId"], user.id.to_string());
        assert_eq!(json["email"], "ann@x.com");
        assert_eq!(json["name"], "Ann");
        assert_eq!(json.as_object().unwrap().len(), 3);
    }

    proptest! {
        #[test]
        fn short_passwords_are_always_rejected(
            name in "[a-zA-Z ]{1,20}",
            email in "[a-z]{1,10}@[a-z]{1,10}\\.com",
            password in "\\PC{1,7}",
        ) {
            let result = register(&name, &email, &password).validate();
            prop_assert!(matches!(result, Err(ApiError::WeakPassword)));
        }

        #[test]
        fn long_enough_passwords_are_accepted(
            name in "[a-zA-Z ]{1,20}",
            email in "[a-z]{1,10}@[a-z]{1,10}\\.com",
            password in "\\PC{8,64}",
        ) {
            prop_assert!(register(&name, &email, &password).validate().is_ok());
        }
    }
}
