//! Password analyzer - derives the property record from a password.

use secrecy::SecretString;

use crate::checks::{digit_check, length_check, lowercase_check, special_check, uppercase_check};
use crate::properties::PasswordProperties;

/// Runs every requirement check against the password and collects the
/// results.
///
/// All five checks run unconditionally, even when an earlier one already
/// fails; the message selection layer needs the full record to pick the
/// highest-priority defect.
pub fn password_properties(password: &SecretString) -> PasswordProperties {
    let props = PasswordProperties {
        length_correct: length_check(password),
        upper_correct: uppercase_check(password),
        lower_correct: lowercase_check(password),
        special_correct: special_check(password),
        number_correct: digit_check(password),
    };

    #[cfg(feature = "tracing")]
    tracing::debug!(
        length = props.length_correct,
        upper = props.upper_correct,
        lower = props.lower_correct,
        special = props.special_correct,
        number = props.number_correct,
        "password analyzed"
    );

    props
}

#[cfg(test)]
mod tests {
    use super::*;

    fn analyze(pwd: &str) -> PasswordProperties {
        password_properties(&SecretString::new(pwd.to_string().into()))
    }

    #[test]
    fn test_all_requirements_satisfied() {
        assert_eq!(
            analyze("Aa1!aaaa"),
            PasswordProperties {
                length_correct: true,
                upper_correct: true,
                lower_correct: true,
                special_correct: true,
                number_correct: true,
            }
        );
    }

    #[test]
    fn test_empty_password_fails_everything() {
        assert_eq!(
            analyze(""),
            PasswordProperties {
                length_correct: false,
                upper_correct: false,
                lower_correct: false,
                special_correct: false,
                number_correct: false,
            }
        );
    }

    #[test]
    fn test_short_lowercase_only() {
        let props = analyze("aaaaaaa");
        assert!(!props.length_correct);
        assert!(!props.upper_correct);
        assert!(props.lower_correct);
        assert!(!props.special_correct);
        assert!(!props.number_correct);
    }

    #[test]
    fn test_no_recognized_class_only_length_may_pass() {
        // Eight spaces: outside every character class, long enough.
        let props = analyze("        ");
        assert!(props.length_correct);
        assert!(!props.upper_correct);
        assert!(!props.lower_correct);
        assert!(!props.special_correct);
        assert!(!props.number_correct);
    }

    #[test]
    fn test_digit_content_only_moves_number_flag() {
        let without = analyze("Abcdefg!");
        let with = analyze("Abcdefg1");

        assert!(!without.number_correct);
        assert!(with.number_correct);
        assert_eq!(without.length_correct, with.length_correct);
        assert_eq!(without.upper_correct, with.upper_correct);
        assert_eq!(without.lower_correct, with.lower_correct);
    }
}
