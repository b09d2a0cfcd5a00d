//! Password validation rules
//!
//! Each rule checks a single property of the password. [`RULES`] holds them
//! in evaluation order: every rule after `non_empty` may assume a non-empty
//! input, so the table must be walked front to back, stopping at the first
//! failure.

mod charset;
mod length;
mod presence;
mod variety;

use crate::error::ValidationError;

pub use charset::{
    SPECIAL_CHARACTERS, has_special_char, is_allowed_char, is_special_char, only_allowed_chars,
};
pub use length::{MIN_LENGTH, meets_min_length};
pub use presence::is_non_empty;
pub use variety::{has_digit, has_lowercase, has_uppercase};

/// A single named check paired with the error it reports.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub name: &'static str,
    pub check: fn(&str) -> bool,
    pub error: ValidationError,
}

impl Rule {
    /// Runs the check against `input`.
    pub fn apply(&self, input: &str) -> Result<(), ValidationError> {
        if (self.check)(input) {
            Ok(())
        } else {
            Err(self.error)
        }
    }
}

/// The basic rule set, in evaluation order.
pub const RULES: [Rule; 7] = [
    Rule {
        name: "non_empty",
        check: is_non_empty,
        error: ValidationError::EmptyInput,
    },
    Rule {
        name: "length",
        check: meets_min_length,
        error: ValidationError::TooShort,
    },
    Rule {
        name: "digit",
        check: has_digit,
        error: ValidationError::MissingDigit,
    },
    Rule {
        name: "lower_case",
        check: has_lowercase,
        error: ValidationError::MissingLowercase,
    },
    Rule {
        name: "upper_case",
        check: has_uppercase,
        error: ValidationError::MissingUppercase,
    },
    Rule {
        name: "special_chars",
        check: has_special_char,
        error: ValidationError::MissingSpecialChar,
    },
    Rule {
        name: "allowed_chars",
        check: only_allowed_chars,
        error: ValidationError::DisallowedCharacter,
    },
];

/// Returns a description of the password requirements, for form hints.
pub const fn requirements() -> &'static str {
    "Password must:
 - Be at least 8 characters long
 - Contain at least one digit (0-9)
 - Contain at least one lowercase letter (a-z)
 - Contain at least one uppercase letter (A-Z)
 - Contain at least one special character (!\"#$%&'()*+,-./:;<=>?@[]^_{|}~)
 - Contain no other characters"
}
