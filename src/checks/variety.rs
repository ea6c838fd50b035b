//! Character variety checks - uppercase, lowercase and digit presence.

use secrecy::{ExposeSecret, SecretString};

/// Returns `true` if the password contains at least one `A`-`Z`.
pub fn uppercase_check(password: &SecretString) -> bool {
    password
        .expose_secret()
        .chars()
        .any(|c| c.is_ascii_uppercase())
}

/// Returns `true` if the password contains at least one `a`-`z`.
pub fn lowercase_check(password: &SecretString) -> bool {
    password
        .expose_secret()
        .chars()
        .any(|c| c.is_ascii_lowercase())
}

/// Returns `true` if the password contains at least one digit `0`-`9`.
pub fn digit_check(password: &SecretString) -> bool {
    password
        .expose_secret()
        .chars()
        .any(|c| c.is_ascii_digit())
}
