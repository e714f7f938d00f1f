//! Session services.

pub mod auth;
