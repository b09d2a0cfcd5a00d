//! Presence rule - the password must not be empty.

/// Returns `true` if the password has at least one character.
///
/// An absent password is checked as the empty string.
pub fn is_non_empty(password: &str) -> bool {
    !password.is_empty()
}
