//! Line protocol implementation
//!
//! Handles command parsing, dispatch, and reply formatting.

pub mod commands;
pub mod handlers;
pub mod parser;
pub mod responses;

pub use commands::{Command, CommandResult, CommandStatus, LoginRequest, SignupRequest};
pub use handlers::handle_command;
pub use parser::parse_command;
