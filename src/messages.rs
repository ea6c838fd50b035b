//! Message selection - maps validation outcomes to user-facing strings.

use thiserror::Error;

use crate::properties::PasswordProperties;

/// Message shown when the email address fails validation.
pub const EMAIL_ERROR_MESSAGE: &str = "Please enter valid email address";

/// A password requirement failure, named by the rule it breaks.
///
/// The `Display` text is part of the public contract: UI callers render
/// it verbatim, so the wording must stay stable.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PasswordDefect {
    #[error("Password should contain 8 or more characters")]
    TooShort,
    #[error("Password should contain a minimum of 1 uppercase and lowercase letter")]
    MissingLetterCase,
    #[error("Password should contain a minimum of 1 digit of numeric value")]
    MissingDigit,
    #[error("Password should contain a minimum of 1 special character")]
    MissingSpecial,
}

/// Picks the highest-priority failing requirement, or `None` when the
/// password satisfies all of them.
///
/// Only one defect is ever reported at a time, in fixed precedence:
/// length, then letter case, then digit, then special character. Both
/// case requirements share a single defect.
pub fn primary_defect(props: PasswordProperties) -> Option<PasswordDefect> {
    if !props.length_correct {
        return Some(PasswordDefect::TooShort);
    }
    if !props.upper_correct || !props.lower_correct {
        return Some(PasswordDefect::MissingLetterCase);
    }
    if !props.number_correct {
        return Some(PasswordDefect::MissingDigit);
    }
    if !props.special_correct {
        return Some(PasswordDefect::MissingSpecial);
    }
    None
}

/// Returns the display string for the email verdict, empty when valid.
pub fn email_error_message(email_valid: bool) -> String {
    if email_valid {
        String::new()
    } else {
        EMAIL_ERROR_MESSAGE.to_string()
    }
}

/// Returns the display string for the highest-priority password defect,
/// empty when the password satisfies every requirement.
pub fn password_error_message(props: PasswordProperties) -> String {
    primary_defect(props)
        .map(|defect| defect.to_string())
        .unwrap_or_default()
}
