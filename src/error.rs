//! Validation outcomes.

use thiserror::Error;

/// Reason a password was rejected.
///
/// Every variant is an ordinary, expected outcome of validation. The
/// `Display` output is the user-facing reason string.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValidationError {
    #[error("password or confirmation must not be empty")]
    EmptyInput,
    #[error("length < 8")]
    TooShort,
    #[error("no digits")]
    MissingDigit,
    #[error("no lower case")]
    MissingLowercase,
    #[error("no upper case")]
    MissingUppercase,
    #[error("no special characters")]
    MissingSpecialChar,
    #[error("not allowed characters")]
    DisallowedCharacter,
    #[error("password must not be equal to login")]
    PasswordEqualsLogin,
    #[error("password mismatch")]
    PasswordMismatch,
}

impl ValidationError {
    /// Name of the rule or cross-check that produced this error.
    pub fn rule(&self) -> &'static str {
        match self {
            Self::EmptyInput => "non_empty",
            Self::TooShort => "length",
            Self::MissingDigit => "digit",
            Self::MissingLowercase => "lower_case",
            Self::MissingUppercase => "upper_case",
            Self::MissingSpecialChar => "special_chars",
            Self::DisallowedCharacter => "allowed_chars",
            Self::PasswordEqualsLogin => "login",
            Self::PasswordMismatch => "confirmation",
        }
    }
}
