//! Account input validator
//!
//! Sanity checks for usernames and emails supplied on SIGNUP and LOGIN.

use crate::config::StartupConfig;
use crate::error::AuthError;

/// Performs basic input sanitation to check for malicious or malformed values.
pub fn is_valid_input(input: &str, max_length: usize) -> bool {
    !input.trim().is_empty() && input.len() <= max_length && !input.contains(['\r', '\n', '\0'])
}

/// Validates the format of a new username and returns it trimmed.
pub fn validate_username(username: &str, config: &StartupConfig) -> Result<String, AuthError> {
    let username = username.trim();

    if !is_valid_input(username, config.max_username_length) {
        return Err(AuthError::MalformedInput("Invalid username format.".into()));
    }

    if username.starts_with(|c: char| c.is_ascii_digit())
        || !username
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
    {
        return Err(AuthError::InvalidUsername(username.to_string()));
    }

    Ok(username.to_string())
}

/// Trims and lower-cases an email address.
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Validates an email address and returns its normalized form.
pub fn validate_email(email: &str, config: &StartupConfig) -> Result<String, AuthError> {
    let email = normalize_email(email);

    if !is_valid_input(&email, config.max_email_length) {
        return Err(AuthError::MalformedInput("Invalid email format.".into()));
    }

    let valid = match email.split_once('@') {
        Some((local, domain)) => {
            !local.is_empty()
                && !domain.contains('@')
                && domain.contains('.')
                && !domain.starts_with('.')
                && !domain.ends_with('.')
        }
        None => false,
    };

    if valid {
        Ok(email)
    } else {
        Err(AuthError::InvalidEmail(email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ServerConfig;

    fn startup() -> StartupConfig {
        ServerConfig::default().startup
    }

    #[test]
    fn test_valid_usernames() {
        for name in ["alice", "bob_smith", "c.d-e", "Zed9"] {
            assert_eq!(validate_username(name, &startup()).unwrap(), name);
        }
    }

    #[test]
    fn test_invalid_usernames() {
        assert!(matches!(
            validate_username("9lives", &startup()),
            Err(AuthError::InvalidUsername(_))
        ));
        assert!(matches!(
            validate_username("a@b", &startup()),
            Err(AuthError::InvalidUsername(_))
        ));
        assert!(matches!(
            validate_username("   ", &startup()),
            Err(AuthError::MalformedInput(_))
        ));
        let long = "a".repeat(33);
        assert!(matches!(
            validate_username(&long, &startup()),
            Err(AuthError::MalformedInput(_))
        ));
    }

    #[test]
    fn test_email_is_normalized() {
        assert_eq!(
            validate_email("  Alice@Example.COM ", &startup()).unwrap(),
            "alice@example.com"
        );
    }

    #[test]
    fn test_invalid_emails() {
        for email in ["alice", "@example.com", "alice@example", "a@b@c.com", "a@.com", "a@com."] {
            assert!(validate_email(email, &startup()).is_err(), "{email} accepted");
        }
    }

    #[test]
    fn test_input_rejects_control_characters() {
        assert!(!is_valid_input("abc\0", 10));
        assert!(!is_valid_input("abc\r\n", 10));
        assert!(is_valid_input("abc", 10));
    }
}
