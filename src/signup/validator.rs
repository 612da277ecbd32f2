//! Signup validator
//!
//! Compares a password with its confirmation and enforces the minimum length.
//! Mismatch is checked first; a mismatched pair never reaches the length check.

use super::results::{SignupIssue, ValidationResult};

/// Minimum password length, counted in UTF-16 code units.
pub const MIN_PASSWORD_LENGTH: usize = 6;

/// Surface that presents a failure reason to the user.
///
/// Called synchronously, at most once per validation, and only on failure.
pub trait Notifier {
    fn alert(&mut self, message: &str);
}

impl<F: FnMut(&str)> Notifier for F {
    fn alert(&mut self, message: &str) {
        self(message)
    }
}

/// Decides whether a signup submission may proceed.
pub fn validate_signup(password: &str, confirmation: &str) -> ValidationResult {
    if password != confirmation {
        return ValidationResult::fail(SignupIssue::Mismatch);
    }

    if password.encode_utf16().count() < MIN_PASSWORD_LENGTH {
        return ValidationResult::fail(SignupIssue::TooShort);
    }

    ValidationResult::pass()
}

/// Validates the pair and alerts `notifier` with the reason when it fails.
///
/// Returns `true` when the submission may proceed.
pub fn validate_and_notify<N: Notifier + ?Sized>(
    password: &str,
    confirmation: &str,
    notifier: &mut N,
) -> bool {
    let result = validate_signup(password, confirmation);
    if let Some(reason) = result.reason() {
        notifier.alert(reason);
    }
    result.passed
}

#[cfg(test)]
mod tests {
    use super::*;

    const MISMATCH: &str = "Passwords don't match.";
    const TOO_SHORT: &str = "Password should be at least 6 characters.";

    #[test]
    fn test_mismatch_regardless_of_length() {
        for (a, b) in [
            ("abcdef", "abcdeg"),
            ("longenoughpassword", "longenoughpasswor"),
            ("x", ""),
            ("", "y"),
        ] {
            let result = validate_signup(a, b);
            assert!(!result.passed);
            assert_eq!(result.issue, Some(SignupIssue::Mismatch));
            assert_eq!(result.reason(), Some(MISMATCH));
        }
    }

    #[test]
    fn test_mismatch_wins_over_short() {
        let result = validate_signup("abc", "xyz");
        assert_eq!(result.reason(), Some(MISMATCH));
    }

    #[test]
    fn test_length_boundary() {
        assert_eq!(validate_signup("abcdef", "abcdef"), ValidationResult::pass());

        let result = validate_signup("abcde", "abcde");
        assert!(!result.passed);
        assert_eq!(result.reason(), Some(TOO_SHORT));
    }

    #[test]
    fn test_empty_pair_is_too_short() {
        let result = validate_signup("", "");
        assert_eq!(result.issue, Some(SignupIssue::TooShort));
    }

    #[test]
    fn test_long_equal_pairs_pass() {
        for pw in ["123456", "correct horse battery staple", "p@ssw0rd!!"] {
            assert!(validate_signup(pw, pw).passed);
        }
    }

    #[test]
    fn test_length_counts_utf16_units_not_bytes() {
        // 5 units, 10 bytes
        assert_eq!(
            validate_signup("ééééé", "ééééé").issue,
            Some(SignupIssue::TooShort)
        );
        assert!(validate_signup("éééééé", "éééééé").passed);
    }

    #[test]
    fn test_astral_characters_count_as_two_units() {
        // 3 characters, 6 UTF-16 units
        assert_eq!(validate_signup("😀😀😀", "😀😀😀"), ValidationResult::pass());
        assert_eq!(
            validate_signup("😀😀", "😀😀").issue,
            Some(SignupIssue::TooShort)
        );
    }

    #[test]
    fn test_notifier_called_once_on_failure() {
        let mut alerts = Vec::new();
        let mut notifier = |msg: &str| alerts.push(msg.to_string());

        assert!(!validate_and_notify("abc", "xyz", &mut notifier));
        assert!(!validate_and_notify("abc", "abc", &mut notifier));
        assert_eq!(alerts, vec![MISMATCH.to_string(), TOO_SHORT.to_string()]);
    }

    #[test]
    fn test_notifier_silent_on_success() {
        let mut count = 0;
        let mut notifier = |_: &str| count += 1;

        assert!(validate_and_notify("abcdef", "abcdef", &mut notifier));
        assert_eq!(count, 0);
    }
}
