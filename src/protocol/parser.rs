//! Command parsing
//!
//! Turns a raw client line into a [`Command`].

use crate::protocol::commands::{Command, LoginRequest, SignupRequest};

/// Parses a raw command line received from a client.
///
/// The verb is case-insensitive. Missing password tokens are read as empty strings.
/// Missing identifying arguments, or more arguments than the verb takes, make the
/// command `Unknown`.
pub fn parse_command(raw: &str) -> Command {
    let mut parts = raw.split_whitespace();
    let cmd = parts.next().unwrap_or("").to_ascii_uppercase();
    let args: Vec<&str> = parts.collect();
    let arg = |i: usize| args.get(i).map(|s| s.to_string()).unwrap_or_default();

    match (cmd.as_str(), args.len()) {
        ("SIGNUP" | "REGISTER", 2..=4) => Command::Signup(SignupRequest {
            username: arg(0),
            email: arg(1),
            password: arg(2),
            confirmation: arg(3),
        }),
        ("LOGIN", 1..=2) => Command::Login(LoginRequest {
            identity: arg(0),
            password: arg(1),
        }),
        ("WHOAMI" | "DASHBOARD", 0) => Command::Whoami,
        ("LOGOUT", 0) => Command::Logout,
        ("HELP", 0) => Command::Help,
        ("QUIT" | "Q", 0) => Command::Quit,
        _ => Command::Unknown(cmd.clone()),
    }
}
