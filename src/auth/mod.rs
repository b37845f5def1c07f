//! Authentication Module
//!
//! User registration, login and session tokens.
//!
//! # Architecture
//!
//! - **`users`** - User record
//! - **`password`** - Bcrypt hashing and verification
//! - **`sessions`** - JWT issuing and verification
//! - **`handlers`** - HTTP handlers for the authentication endpoints
//!
//! # Authentication Flow
//!
//! 1. **Register**: name, email and password → user stored → public fields returned
//! 2. **Login**: email and password → credentials verified → token returned
//! 3. **Me**: bearer token → token verified → public fields returned
//!
//! # Security
//!
//! - Passwords are hashed with bcrypt before storage
//! - Tokens are HS256 JWTs signed with a key from configuration
//! - Tokens expire after 24 hours
//! - Invalid credentials return 401 without saying which part was wrong

/// User record
pub mod users;

/// Password hashing
pub mod password;

/// JWT token generation and validation
pub mod sessions;

/// HTTP handlers for authentication endpoints
pub mod handlers;

pub use handlers::{get_me, login, register};
pub use handlers::{LoginRequest, LoginResponse, RegisterRequest, UserResponse};
pub use password::PasswordHasher;
pub use sessions::{Claims, TokenIssuer};
pub use users::User;
