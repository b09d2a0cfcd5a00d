//! Length rule - checks password minimum length.

/// Minimum number of characters in a password.
pub const MIN_LENGTH: usize = 8;

/// Returns `true` if the password has at least [`MIN_LENGTH`] characters.
///
/// Counts Unicode scalar values, not bytes.
pub fn meets_min_length(password: &str) -> bool {
    password.chars().count() >= MIN_LENGTH
}
