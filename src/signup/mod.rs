//! Signup validation
//!
//! Checks a password against its confirmation before an account is created.

pub mod results;
pub mod validator;

pub use results::{SignupIssue, ValidationResult};
pub use validator::{MIN_PASSWORD_LENGTH, Notifier, validate_and_notify, validate_signup};
