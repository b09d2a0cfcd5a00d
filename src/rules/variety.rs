//! Character variety rules - checks for digits, lowercase and uppercase.
//!
//! Only ASCII characters count towards a class.

pub fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

pub fn has_lowercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_lowercase())
}

pub fn has_uppercase(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variety_missing_digit() {
        assert!(!has_digit("NoNumbers!"));
        assert!(has_digit("One1"));
    }

    #[test]
    fn test_variety_missing_lowercase() {
        assert!(!has_lowercase("UPPERCASE123!"));
        assert!(has_lowercase("UPPERCASe"));
    }

    #[test]
    fn test_variety_missing_uppercase() {
        assert!(!has_uppercase("alllowercase1!"));
        assert!(has_uppercase("Lowercase"));
    }

    #[test]
    fn test_variety_ignores_non_ascii() {
        assert!(!has_digit("٣")); // Arabic-Indic three
        assert!(!has_lowercase("ßé"));
        assert!(!has_uppercase("ÉÀ"));
    }
}
