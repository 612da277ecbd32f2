//! Error handling
//!
//! Defines error types and their mapping onto protocol reply codes.

pub mod handlers;
pub mod types;

pub use types::*;
