//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during authentication operations.
///
/// All failures are recoverable and leave both the identity directory and
/// the session state exactly as they were.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(#[from] hearthwood_core::EmailError),

    /// Invalid credentials (wrong password or no such user).
    #[error("invalid credentials")]
    InvalidCredentials,

    /// An identity with this email is already registered.
    #[error("an account with this email already exists")]
    DuplicateEmail,

    /// Password too weak or invalid.
    #[error("password validation failed: {0}")]
    WeakPassword(String),

    /// Password hashing error.
    #[error("password hashing error")]
    PasswordHash,
}
