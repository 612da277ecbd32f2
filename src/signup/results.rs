//! Signup validation result types
//!
//! Defines the outcome of a single validation call and its failure kinds.

use std::fmt;

/// Reason a signup submission is blocked.
///
/// Both kinds are fixed by the user correcting their input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupIssue {
    /// Password and confirmation are not identical.
    Mismatch,
    /// Password is shorter than [`MIN_PASSWORD_LENGTH`](super::MIN_PASSWORD_LENGTH) UTF-16 code units.
    TooShort,
}

impl SignupIssue {
    /// User-facing text for this failure.
    pub fn message(&self) -> &'static str {
        match self {
            SignupIssue::Mismatch => "Passwords don't match.",
            SignupIssue::TooShort => "Password should be at least 6 characters.",
        }
    }
}

impl fmt::Display for SignupIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Result of validating a password/confirmation pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub passed: bool,
    pub issue: Option<SignupIssue>,
}

impl ValidationResult {
    pub fn pass() -> Self {
        Self {
            passed: true,
            issue: None,
        }
    }

    pub fn fail(issue: SignupIssue) -> Self {
        Self {
            passed: false,
            issue: Some(issue),
        }
    }

    /// Human-readable reason, present only on failure.
    pub fn reason(&self) -> Option<&'static str> {
        self.issue.map(|issue| issue.message())
    }
}
