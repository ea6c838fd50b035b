//! Login form field validation
//!
//! This library validates the two fields of a login form: it checks an
//! email address for syntactic validity and a password against a
//! composite strength policy, producing fixed human-readable error
//! messages for the UI to render. Everything is a pure function over the
//! submitted strings; invalid input is an ordinary return value, never an
//! error.
//!
//! # Features
//!
//! - `tracing`: Enables logging via tracing crate
//!
//! # Example
//!
//! ```rust
//! use login_validation::{password_properties, is_valid_password, password_error_message};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("Aa1!aaaa".to_string().into());
//!
//! let props = password_properties(&password);
//! assert!(is_valid_password(props));
//! assert_eq!(password_error_message(props), "");
//! ```

// Internal modules
mod analyzer;
mod checks;
mod email;
mod form;
mod messages;
mod policy;
mod properties;

// Public API
pub use analyzer::password_properties;
pub use checks::SPECIAL_CHARS;
pub use email::is_valid_email;
pub use form::{validate_login, FieldOutcome, LoginValidation};
pub use messages::{
    email_error_message, password_error_message, primary_defect, PasswordDefect,
    EMAIL_ERROR_MESSAGE,
};
pub use policy::is_valid_password;
pub use properties::PasswordProperties;
