//! User domain types.
//!
//! [`User`] is the UI-facing identity view: it never carries the password or
//! its hash. The full directory record (including the argon2 hash) is private
//! to the auth service.

use chrono::{DateTime, Utc};
use secrecy::SecretString;

use hearthwood_core::{Email, UserId};

/// A registered shopper (domain type).
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID, minted at registration.
    pub id: UserId,
    /// Display name.
    pub name: String,
    /// Email address (normalized to lowercase).
    pub email: Email,
    /// Optional phone number.
    pub phone: Option<String>,
    /// Optional postal address.
    pub address: Option<String>,
    /// When the user registered.
    pub created_at: DateTime<Utc>,
}

/// Input for registering a new user.
///
/// The password travels as a [`SecretString`] and is hashed before storage;
/// it is never held in plaintext past registration.
#[derive(Debug, Clone)]
pub struct RegisterData {
    /// Display name.
    pub name: String,
    /// Email address, validated and normalized by the auth service.
    pub email: String,
    /// Plaintext password, consumed by the hasher.
    pub password: SecretString,
    /// Optional phone number.
    pub phone: Option<String>,
}
