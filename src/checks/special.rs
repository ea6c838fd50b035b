//! Special character check - tests for punctuation from the fixed set.

use secrecy::{ExposeSecret, SecretString};

/// The fixed set of accepted special characters. Punctuation outside this
/// set (for example space) does not count.
pub const SPECIAL_CHARS: &str = r#"`!@#$%^&*()_+-=[]{};':"\|,.<>/?~"#;

/// Returns `true` if the password contains at least one character from
/// [`SPECIAL_CHARS`].
pub fn special_check(password: &SecretString) -> bool {
    password
        .expose_secret()
        .chars()
        .any(|c| SPECIAL_CHARS.contains(c))
}
