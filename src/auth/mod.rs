//! Authentication system
//!
//! Account input validation, password hashing, and the user store.

pub mod credentials;
pub mod password;
pub mod validator;

pub use credentials::{User, UserStore};
pub use password::{hash_password, hash_password_blocking, verify_password, verify_password_blocking};
pub use validator::{is_valid_input, normalize_email, validate_email, validate_username};
