//! Form gate - runs both validators and pairs verdicts with messages.

use secrecy::SecretString;

use crate::analyzer::password_properties;
use crate::email::is_valid_email;
use crate::messages::{email_error_message, password_error_message};
use crate::policy::is_valid_password;

/// Verdict and display message for a single form field.
/// The message is empty when the field is valid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldOutcome {
    pub valid: bool,
    pub message: String,
}

/// Outcome of validating a full login submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginValidation {
    pub email: FieldOutcome,
    pub password: FieldOutcome,
}

impl LoginValidation {
    /// `true` only when both fields passed; the caller proceeds with
    /// submission on `true` and renders the field messages otherwise.
    pub fn is_valid(&self) -> bool {
        self.email.valid && self.password.valid
    }
}

/// Validates an email/password pair the way a login form does on submit.
///
/// Both fields are always evaluated, so the caller can show the email
/// and password errors at the same time.
pub fn validate_login(email: &str, password: &SecretString) -> LoginValidation {
    let email_valid = is_valid_email(email);
    let props = password_properties(password);
    let password_valid = is_valid_password(props);

    #[cfg(feature = "tracing")]
    tracing::debug!(email_valid, password_valid, "login submission validated");

    LoginValidation {
        email: FieldOutcome {
            valid: email_valid,
            message: email_error_message(email_valid),
        },
        password: FieldOutcome {
            valid: password_valid,
            message: password_error_message(props),
        },
    }
}
