//! Error handlers
//!
//! Converts errors into protocol replies.

use crate::error::types::{AuthError, ServerError, StoreError};
use crate::protocol::responses;
use log::error;

/// Log a server error
pub fn handle_error(err: &ServerError) {
    error!("Server error: {}", err);
}

/// Convert error to reply code
pub fn error_to_reply_code(err: &ServerError) -> u16 {
    match err {
        ServerError::Auth(AuthError::Hashing(_)) => responses::INTERNAL_ERROR,
        ServerError::Auth(AuthError::InvalidUsername(_))
        | ServerError::Auth(AuthError::InvalidEmail(_))
        | ServerError::Auth(AuthError::MalformedInput(_)) => responses::SYNTAX_ERROR,
        ServerError::Auth(_) => responses::NOT_LOGGED_IN,
        ServerError::Store(StoreError::AlreadyExists { .. }) => responses::CONFLICT,
        ServerError::Store(StoreError::UserNotFound(_)) => responses::NOT_LOGGED_IN,
        ServerError::Io(_) | ServerError::Task(_) => responses::INTERNAL_ERROR,
    }
}

/// User-facing text for an error. Credential failures never say which part was wrong.
pub fn error_to_reply_text(err: &ServerError) -> String {
    match err {
        ServerError::Auth(AuthError::InvalidCredentials)
        | ServerError::Store(StoreError::UserNotFound(_)) => "Invalid credentials.".into(),
        ServerError::Auth(AuthError::NotLoggedIn) => "Please log in first.".into(),
        ServerError::Store(StoreError::AlreadyExists { .. }) => {
            "Username or email already exists.".into()
        }
        ServerError::Auth(AuthError::InvalidUsername(_)) => {
            "Username may only contain letters, digits, '_', '-' or '.' and must not start with a digit.".into()
        }
        ServerError::Auth(AuthError::InvalidEmail(_)) => "Please enter a valid email address.".into(),
        ServerError::Auth(AuthError::MalformedInput(msg)) => msg.clone(),
        _ => "Internal server error.".into(),
    }
}

/// Full reply line for an error
pub fn error_to_reply(err: &ServerError) -> String {
    responses::format_response(error_to_reply_code(err), &error_to_reply_text(err))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_reply() {
        let err = ServerError::from(StoreError::AlreadyExists {
            username: "alice".into(),
            email: "alice@example.com".into(),
        });
        assert_eq!(error_to_reply(&err), "409 Username or email already exists.\r\n");
    }

    #[test]
    fn test_unknown_user_looks_like_bad_password() {
        let missing = ServerError::from(StoreError::UserNotFound("ghost".into()));
        let wrong = ServerError::from(AuthError::InvalidCredentials);
        assert_eq!(error_to_reply(&missing), error_to_reply(&wrong));
        assert_eq!(error_to_reply(&wrong), "530 Invalid credentials.\r\n");
    }

    #[test]
    fn test_hashing_failure_is_internal() {
        let err = ServerError::from(AuthError::Hashing("boom".into()));
        assert_eq!(error_to_reply_code(&err), 550);
        assert_eq!(error_to_reply_text(&err), "Internal server error.");
    }
}
