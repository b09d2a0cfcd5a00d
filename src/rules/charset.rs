//! Character set rules - special characters and the allowed-character whitelist.

/// The special characters a password must draw from.
pub const SPECIAL_CHARACTERS: &str = "!\"#$%&'()*+,-./:;<=>?@[]^_{|}~";

pub fn is_special_char(c: char) -> bool {
    SPECIAL_CHARACTERS.contains(c)
}

/// ASCII letters, ASCII digits and [`SPECIAL_CHARACTERS`].
pub fn is_allowed_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || is_special_char(c)
}

/// Returns `true` if the password contains at least one special character.
pub fn has_special_char(password: &str) -> bool {
    password.chars().any(is_special_char)
}

/// Returns `true` if every character of the password is allowed.
///
/// Whitespace, control characters and anything outside ASCII are rejected.
pub fn only_allowed_chars(password: &str) -> bool {
    password.chars().all(is_allowed_char)
}
