//! Module `commands`
//!
//! Data structures for parsed commands and the results of executing them.

use std::fmt;

/// A command parsed from one client line.
#[derive(Debug, PartialEq)]
pub enum Command {
    Signup(SignupRequest),
    Login(LoginRequest),
    Whoami,
    Logout,
    Help,
    Quit,
    /// Unknown verb or a known verb missing required arguments
    Unknown(String),
}

/// Arguments of `SIGNUP <username> <email> [password] [confirmation]`
#[derive(PartialEq)]
pub struct SignupRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub confirmation: String,
}

/// Arguments of `LOGIN <username-or-email> [password]`
#[derive(PartialEq)]
pub struct LoginRequest {
    pub identity: String,
    pub password: String,
}

// Passwords stay out of `{:?}` so commands can be logged as-is.
impl fmt::Debug for SignupRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupRequest")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("confirmation", &"<redacted>")
            .finish()
    }
}

impl fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("identity", &self.identity)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Represents the outcome status of executing a command.
#[derive(Debug, PartialEq)]
pub enum CommandStatus {
    Success,
    Failure(String),
    CloseConnection,
}

/// Struct encapsulating the full result of a command execution.
#[derive(Debug)]
pub struct CommandResult {
    pub status: CommandStatus,
    pub message: Option<String>,
}

impl CommandResult {
    pub fn success(message: String) -> Self {
        Self {
            status: CommandStatus::Success,
            message: Some(message),
        }
    }

    pub fn failure(reason: impl Into<String>, message: String) -> Self {
        Self {
            status: CommandStatus::Failure(reason.into()),
            message: Some(message),
        }
    }

    pub fn close(message: String) -> Self {
        Self {
            status: CommandStatus::CloseConnection,
            message: Some(message),
        }
    }
}
