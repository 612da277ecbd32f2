//! Error types
//!
//! Domain-specific error types for each module of the server.

use std::io;
use thiserror::Error;

/// Authentication and account input errors
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Invalid username: {0}")]
    InvalidUsername(String),
    #[error("Invalid email: {0}")]
    InvalidEmail(String),
    #[error("Malformed input: {0}")]
    MalformedInput(String),
    #[error("Invalid credentials")]
    InvalidCredentials,
    #[error("User not logged in")]
    NotLoggedIn,
    #[error("Password hashing failed: {0}")]
    Hashing(String),
}

impl From<argon2::password_hash::Error> for AuthError {
    fn from(error: argon2::password_hash::Error) -> Self {
        AuthError::Hashing(error.to_string())
    }
}

/// User store errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Username or email already exists: {username} / {email}")]
    AlreadyExists { username: String, email: String },
    #[error("User not found: {0}")]
    UserNotFound(String),
}

/// General server error that encompasses all error types
#[derive(Debug, Error)]
pub enum ServerError {
    #[error("Authentication error: {0}")]
    Auth(#[from] AuthError),
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}
