//! signup-gate
//!
//! Account signup, login, and logout over a line-oriented TCP protocol.
//! Every signup passes through the password/confirmation validator in [`signup`].

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod middleware;
pub mod protocol;
pub mod server;
pub mod signup;

pub use config::ServerConfig;
pub use server::Server;
pub use signup::{SignupIssue, ValidationResult, validate_and_notify, validate_signup};
