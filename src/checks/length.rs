//! Length check - tests password minimum length.

use secrecy::{ExposeSecret, SecretString};

const MIN_LENGTH: usize = 8;

/// Returns `true` if the password has at least 8 characters.
///
/// Counts characters rather than bytes so multi-byte input is not
/// over-counted. There is no upper length bound.
pub fn length_check(password: &SecretString) -> bool {
    password.expose_secret().chars().count() >= MIN_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_check_too_short() {
        let pwd = SecretString::new("Short1!".to_string().into());
        assert!(!length_check(&pwd));
    }

    #[test]
    fn test_length_check_exactly_minimum() {
        let pwd = SecretString::new("12345678".to_string().into());
        assert!(length_check(&pwd));
    }

    #[test]
    fn test_length_check_empty() {
        let pwd = SecretString::new("".to_string().into());
        assert!(!length_check(&pwd));
    }

    #[test]
    fn test_length_check_long() {
        let pwd = SecretString::new("LongEnough123!".to_string().into());
        assert!(length_check(&pwd));
    }
}
