//! Password rule validation library
//!
//! Checks candidate passwords against a fixed, ordered set of rules
//! (non-empty, minimum length, digit, lower case, upper case, special
//! character, allowed characters only) and, for registration or reset
//! flows, cross-checks the password against the login and its confirmation.
//!
//! Validation stops at the first failing rule; the result carries exactly
//! one reason.
//!
//! # Features
//!
//! - `async` (default): Enables channel-based validation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `PWD_LOGIN_POLICY`: `case-sensitive` (default) or `case-insensitive`
//!   comparison of password and login, read by [`PasswordValidator::from_env`]
//!
//! # Example
//!
//! ```rust
//! use pwd_rules::{validate_password, validate_password_with_context, ValidationError};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Password1!".to_string().into());
//! let confirmation = SecretString::new("Password1!".to_string().into());
//!
//! assert_eq!(validate_password(Some(&password)), Ok(()));
//! assert_eq!(
//!     validate_password_with_context(Some(&password), Some(&confirmation), Some("UserLogin")),
//!     Ok(())
//! );
//!
//! let short = SecretString::new("short1!".to_string().into());
//! let err = validate_password(Some(&short)).unwrap_err();
//! assert_eq!(err, ValidationError::TooShort);
//! assert_eq!(err.to_string(), "length < 8");
//! ```

mod error;
mod policy;
mod validator;

pub mod rules;

// Public API
pub use error::ValidationError;
pub use policy::{LOGIN_POLICY_ENV, LoginPolicy, PolicyError};
pub use rules::{MIN_LENGTH, RULES, Rule, SPECIAL_CHARACTERS, requirements};
pub use validator::{
    PasswordValidator, ValidationResult, validate_password, validate_password_login,
    validate_password_with_context,
};

#[cfg(feature = "async")]
pub use validator::validate_password_tx;
