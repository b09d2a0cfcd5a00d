//! Login comparison policy
//!
//! Decides how the password is compared against the login name.

use std::str::FromStr;
use thiserror::Error;

/// Environment variable overriding the default login policy.
pub const LOGIN_POLICY_ENV: &str = "PWD_LOGIN_POLICY";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Unknown login policy: {0:?} (expected \"case-sensitive\" or \"case-insensitive\")")]
    Unknown(String),
}

/// How a password is compared against the login.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoginPolicy {
    /// Reject only an exact match.
    #[default]
    CaseSensitive,
    /// Reject a match ignoring ASCII case.
    CaseInsensitive,
}

impl LoginPolicy {
    /// Returns `true` if `password` counts as equal to `login`.
    ///
    /// An absent login never matches.
    pub fn matches(&self, password: &str, login: Option<&str>) -> bool {
        let Some(login) = login else {
            return false;
        };
        match self {
            Self::CaseSensitive => password == login,
            Self::CaseInsensitive => password.eq_ignore_ascii_case(login),
        }
    }

    /// Reads the policy from `PWD_LOGIN_POLICY`.
    ///
    /// Priority:
    /// 1. Environment variable `PWD_LOGIN_POLICY`
    /// 2. [`LoginPolicy::CaseSensitive`]
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::Unknown`] if the variable holds an unrecognised value.
    pub fn from_env() -> Result<Self, PolicyError> {
        match std::env::var(LOGIN_POLICY_ENV) {
            Ok(value) => value.parse().inspect_err(|_e| {
                #[cfg(feature = "tracing")]
                tracing::warn!("Invalid {}: {}", LOGIN_POLICY_ENV, _e);
            }),
            Err(_) => Ok(Self::default()),
        }
    }
}

impl FromStr for LoginPolicy {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "case-sensitive" | "sensitive" => Ok(Self::CaseSensitive),
            "case-insensitive" | "insensitive" => Ok(Self::CaseInsensitive),
            _ => Err(PolicyError::Unknown(s.to_string())),
        }
    }
}
