//! Logging middleware
//!
//! Provides request logging functionality. Commands are logged through their
//! `Debug` form, which never includes passwords.

use log::{debug, info};
use std::net::SocketAddr;

use crate::protocol::{Command, CommandResult};

/// Log a client connection
pub fn log_connection(client_addr: &SocketAddr, live_clients: usize, logged_in: usize) {
    info!(
        "Client connected: {} ({} live, {} logged in)",
        client_addr, live_clients, logged_in
    );
}

/// Log a client command
pub fn log_command(client_addr: &SocketAddr, command: &Command) {
    info!("Client {} executed: {:?}", client_addr, command);
}

/// Log the reply sent for a command
pub fn log_reply(client_addr: &SocketAddr, result: &CommandResult) {
    if let Some(msg) = &result.message {
        debug!("Reply to {}: {}", client_addr, msg.trim_end());
    }
}
