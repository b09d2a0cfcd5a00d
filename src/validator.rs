//! Password validator - runs the rule chain and the login/confirmation cross-checks.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::error::ValidationError;
use crate::policy::{LoginPolicy, PolicyError};
use crate::rules::RULES;

/// Outcome of a validation: `Ok(())` or the first failure.
pub type ValidationResult = Result<(), ValidationError>;

/// Validates passwords against the fixed rule set.
///
/// Holds no mutable state; a single instance can be shared freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasswordValidator {
    login_policy: LoginPolicy,
}

impl PasswordValidator {
    pub fn new(login_policy: LoginPolicy) -> Self {
        Self { login_policy }
    }

    /// Builds a validator configured from the environment.
    ///
    /// See [`LoginPolicy::from_env`].
    pub fn from_env() -> Result<Self, PolicyError> {
        LoginPolicy::from_env().map(Self::new)
    }

    pub fn login_policy(&self) -> LoginPolicy {
        self.login_policy
    }

    /// Runs the basic rules in order and returns the first failure.
    ///
    /// An absent password is treated as empty.
    pub fn validate(&self, password: Option<&SecretString>) -> ValidationResult {
        let pwd = password.map(|p| p.expose_secret()).unwrap_or_default();

        for rule in &RULES {
            if let Err(error) = rule.apply(pwd) {
                #[cfg(feature = "tracing")]
                tracing::debug!("Password rejected by rule: {}", rule.name);
                return Err(error);
            }
        }
        Ok(())
    }

    /// Basic rules, then rejects a password equal to `login`.
    pub fn validate_with_login(
        &self,
        password: Option<&SecretString>,
        login: Option<&str>,
    ) -> ValidationResult {
        self.validate(password)?;

        // validate() rejects an absent password
        let pwd = password.map(|p| p.expose_secret()).unwrap_or_default();
        if self.login_policy.matches(pwd, login) {
            #[cfg(feature = "tracing")]
            tracing::debug!("Password rejected: equal to login");
            return Err(ValidationError::PasswordEqualsLogin);
        }
        Ok(())
    }

    /// Basic rules, the login check, then the confirmation check.
    ///
    /// Later steps only run once the earlier ones pass, so the login and
    /// confirmation are never inspected for a password that fails a basic rule.
    pub fn validate_with_context(
        &self,
        password: Option<&SecretString>,
        confirmation: Option<&SecretString>,
        login: Option<&str>,
    ) -> ValidationResult {
        self.validate_with_login(password, login)?;

        let pwd = password.map(|p| p.expose_secret());
        let confirm = confirmation.map(|c| c.expose_secret());
        if pwd != confirm {
            #[cfg(feature = "tracing")]
            tracing::debug!("Password rejected: confirmation mismatch");
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(())
    }
}

/// Validates a password against the basic rules.
///
/// # Returns
/// - `Err(reason)` for the first rule the password fails
/// - `Ok(())` if every rule passes
pub fn validate_password(password: Option<&SecretString>) -> ValidationResult {
    PasswordValidator::default().validate(password)
}

/// Validates a password and checks it differs from the login.
pub fn validate_password_login(
    password: Option<&SecretString>,
    login: Option<&str>,
) -> ValidationResult {
    PasswordValidator::default().validate_with_login(password, login)
}

/// Validates a password, checks it differs from the login and matches the confirmation.
///
/// Uses the case-sensitive login comparison.
pub fn validate_password_with_context(
    password: Option<&SecretString>,
    confirmation: Option<&SecretString>,
    login: Option<&str>,
) -> ValidationResult {
    PasswordValidator::default().validate_with_context(password, confirmation, login)
}

/// Async version that sends the validation result via channel.
///
/// Nothing is sent if `token` is already cancelled.
#[cfg(feature = "async")]
pub async fn validate_password_tx(
    validator: PasswordValidator,
    password: Option<&SecretString>,
    confirmation: Option<&SecretString>,
    login: Option<&str>,
    token: CancellationToken,
    tx: mpsc::Sender<ValidationResult>,
) {
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::info!("validation cancelled before start");
        return;
    }

    #[cfg(feature = "tracing")]
    tracing::info!("validation is about to start...");

    let result = validator.validate_with_context(password, confirmation, login);

    if let Err(_e) = tx.send(result).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password validation result: {}", _e);
    }
}
