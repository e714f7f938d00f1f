//! Authentication session store.
//!
//! A state machine with two states: `Anonymous` (initial) and
//! `Authenticated(user)`. The identity directory maps normalized emails to
//! full identity records; registration is the only way into it for the
//! lifetime of the process, and nothing is persisted.
//!
//! Passwords are hashed with Argon2id and a fresh salt at registration and
//! verified against the hash at login. The UI-facing [`User`] view never
//! carries the password or its hash.

mod error;

pub use error::AuthError;

use std::collections::HashMap;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use chrono::Utc;
use secrecy::ExposeSecret;

use hearthwood_core::{Email, UserId};

use crate::models::{RegisterData, User};

/// Minimum password length.
const MIN_PASSWORD_LENGTH: usize = 8;

/// A directory entry: the identity plus its password hash.
///
/// Private to the auth store; the hash never crosses the module boundary.
#[derive(Debug, Clone)]
struct IdentityRecord {
    user: User,
    password_hash: String,
}

/// The session's authentication state.
#[derive(Debug, Default)]
enum SessionState {
    #[default]
    Anonymous,
    Authenticated(User),
}

/// Authentication session store.
///
/// Handles registration, login, and logout for one shopper session. Created
/// empty at session start; explicitly owned and injected, never global.
#[derive(Debug, Default)]
pub struct AuthStore {
    directory: HashMap<Email, IdentityRecord>,
    session: SessionState,
}

impl AuthStore {
    /// Create a store with an empty identity directory, in the `Anonymous`
    /// state.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new identity and sign it in.
    ///
    /// The email is validated and normalized to lowercase before the
    /// directory is consulted, so registration and login agree on case.
    /// On success the session transitions to `Authenticated` and the
    /// password-free [`User`] view is returned.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidEmail` if the email format is invalid.
    /// Returns `AuthError::WeakPassword` if the password doesn't meet requirements.
    /// Returns `AuthError::DuplicateEmail` if the email is already registered;
    /// the existing record and the session state are left untouched.
    pub fn register(&mut self, data: RegisterData) -> Result<User, AuthError> {
        let email = Email::parse(&data.email)?;

        validate_password(data.password.expose_secret())?;

        if self.directory.contains_key(&email) {
            return Err(AuthError::DuplicateEmail);
        }

        let password_hash = hash_password(data.password.expose_secret())?;

        let user = User {
            id: UserId::generate(),
            name: data.name,
            email: email.clone(),
            phone: data.phone,
            address: None,
            created_at: Utc::now(),
        };

        self.directory.insert(
            email,
            IdentityRecord {
                user: user.clone(),
                password_hash,
            },
        );
        self.session = SessionState::Authenticated(user.clone());

        tracing::debug!(user = %user.id, "Registered new identity");
        Ok(user)
    }

    /// Sign in with email and password.
    ///
    /// # Errors
    ///
    /// Returns `AuthError::InvalidCredentials` if no identity matches the
    /// email or the password does not verify. The session state is unchanged
    /// on failure.
    pub fn login(&mut self, email: &str, password: &str) -> Result<User, AuthError> {
        let email = Email::parse(email).map_err(|_| AuthError::InvalidCredentials)?;

        let record = self
            .directory
            .get(&email)
            .ok_or(AuthError::InvalidCredentials)?;

        verify_password(password, &record.password_hash)?;

        let user = record.user.clone();
        self.session = SessionState::Authenticated(user.clone());

        tracing::debug!(user = %user.id, "Login");
        Ok(user)
    }

    /// Sign out unconditionally.
    ///
    /// Only the authentication state changes - cart and wishlist are
    /// separate containers and outlive the identity.
    pub fn logout(&mut self) {
        self.session = SessionState::Anonymous;
        tracing::debug!("Logout");
    }

    /// The currently signed-in user, if any.
    #[must_use]
    pub fn current_user(&self) -> Option<&User> {
        match &self.session {
            SessionState::Anonymous => None,
            SessionState::Authenticated(user) => Some(user),
        }
    }

    /// Whether the session is in the `Authenticated` state.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        matches!(self.session, SessionState::Authenticated(_))
    }

    /// Number of identities in the directory.
    #[must_use]
    pub fn directory_len(&self) -> usize {
        self.directory.len()
    }
}

/// Validate password meets requirements.
fn validate_password(password: &str) -> Result<(), AuthError> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "password must be at least {MIN_PASSWORD_LENGTH} characters"
        )));
    }

    Ok(())
}

/// Hash a password using Argon2id with a fresh salt.
fn hash_password(password: &str) -> Result<String, AuthError> {
    let salt = SaltString::generate(&mut OsRng);
    let argon2 = Argon2::default();

    argon2
        .hash_password(password.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|_| AuthError::PasswordHash)
}

/// Verify a password against a stored Argon2 hash.
fn verify_password(password: &str, hash: &str) -> Result<(), AuthError> {
    let parsed = PasswordHash::new(hash).map_err(|_| AuthError::PasswordHash)?;

    Argon2::default()
        .verify_password(password.as_bytes(), &parsed)
        .map_err(|_| AuthError::InvalidCredentials)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn register_data(email: &str) -> RegisterData {
        RegisterData {
            name: "Test Shopper".to_owned(),
            email: email.to_owned(),
            password: "correct horse battery".into(),
            phone: None,
        }
    }

    #[test]
    fn test_register_signs_in() {
        let mut auth = AuthStore::new();
        assert!(!auth.is_authenticated());

        let user = auth.register(register_data("shopper@example.com")).unwrap();
        assert!(auth.is_authenticated());
        assert_eq!(auth.current_user().unwrap().id, user.id);
        assert_eq!(auth.directory_len(), 1);
    }

    #[test]
    fn test_duplicate_email_rejected_state_unchanged() {
        let mut auth = AuthStore::new();
        let first = auth.register(register_data("shopper@example.com")).unwrap();
        auth.logout();

        let result = auth.register(RegisterData {
            name: "Impostor".to_owned(),
            ..register_data("shopper@example.com")
        });
        assert!(matches!(result, Err(AuthError::DuplicateEmail)));

        // directory record and session state untouched
        assert_eq!(auth.directory_len(), 1);
        assert!(!auth.is_authenticated());
        let again = auth.login("shopper@example.com", "correct horse battery").unwrap();
        assert_eq!(again.id, first.id);
        assert_eq!(again.name, "Test Shopper");
    }

    #[test]
    fn test_duplicate_email_case_insensitive() {
        let mut auth = AuthStore::new();
        auth.register(register_data("shopper@example.com")).unwrap();

        let result = auth.register(register_data("Shopper@EXAMPLE.com"));
        assert!(matches!(result, Err(AuthError::DuplicateEmail)));
    }

    #[test]
    fn test_login_roundtrip() {
        let mut auth = AuthStore::new();
        auth.register(register_data("shopper@example.com")).unwrap();
        auth.logout();
        assert!(!auth.is_authenticated());

        let user = auth.login("shopper@example.com", "correct horse battery").unwrap();
        assert!(auth.is_authenticated());
        assert_eq!(user.email.as_str(), "shopper@example.com");
    }

    #[test]
    fn test_login_normalizes_email_case() {
        let mut auth = AuthStore::new();
        auth.register(register_data("shopper@example.com")).unwrap();
        auth.logout();

        assert!(auth.login("SHOPPER@example.COM", "correct horse battery").is_ok());
    }

    #[test]
    fn test_login_wrong_password() {
        let mut auth = AuthStore::new();
        auth.register(register_data("shopper@example.com")).unwrap();
        auth.logout();

        let result = auth.login("shopper@example.com", "wrong password!");
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn test_login_unknown_email() {
        let mut auth = AuthStore::new();
        let result = auth.login("nobody@example.com", "whatever password");
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[test]
    fn test_login_malformed_email_is_invalid_credentials() {
        let mut auth = AuthStore::new();
        let result = auth.login("not-an-email", "whatever password");
        assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    }

    #[test]
    fn test_weak_password_rejected() {
        let mut auth = AuthStore::new();
        let result = auth.register(RegisterData {
            password: "short".into(),
            ..register_data("shopper@example.com")
        });
        assert!(matches!(result, Err(AuthError::WeakPassword(_))));
        assert_eq!(auth.directory_len(), 0);
        assert!(!auth.is_authenticated());
    }

    #[test]
    fn test_password_stored_as_argon2_hash() {
        let mut auth = AuthStore::new();
        auth.register(register_data("shopper@example.com")).unwrap();

        let record = auth
            .directory
            .get(&Email::parse("shopper@example.com").unwrap())
            .unwrap();
        assert!(record.password_hash.starts_with("$argon2"));
        assert_ne!(record.password_hash, "correct horse battery");
    }

    #[test]
    fn test_logout_unconditional() {
        let mut auth = AuthStore::new();
        auth.logout(); // anonymous already, still fine
        assert!(!auth.is_authenticated());
    }
}
