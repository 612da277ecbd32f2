//! Reply handling
//!
//! Defines reply codes and formatting.

/// Reply codes
pub const OK: u16 = 200;
pub const CREATED: u16 = 201;
pub const READY: u16 = 220;
pub const GOODBYE: u16 = 221;
pub const LOGIN_SUCCESS: u16 = 230;
pub const LOGGED_OUT: u16 = 231;
pub const VALIDATION_FAILED: u16 = 400;
pub const CONFLICT: u16 = 409;
pub const SERVICE_UNAVAILABLE: u16 = 421;
pub const SYNTAX_ERROR: u16 = 500;
pub const NOT_LOGGED_IN: u16 = 530;
pub const INTERNAL_ERROR: u16 = 550;

/// Format a reply line
pub fn format_response(code: u16, message: &str) -> String {
    format!("{} {}\r\n", code, message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_response() {
        assert_eq!(
            format_response(CONFLICT, "Username or email already exists."),
            "409 Username or email already exists.\r\n"
        );
        assert_eq!(format_response(GOODBYE, "Goodbye"), "221 Goodbye\r\n");
    }
}
