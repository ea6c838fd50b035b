//! Email validator - syntactic address checking.

use email_address::{EmailAddress, Options};

/// Returns `true` if the string is a syntactically valid email address.
///
/// Purely syntactic: `local@domain` with at least one dot-separated label
/// in the domain. Rejects a missing or repeated `@`, an empty local or
/// domain part, consecutive dots, and leading or trailing dots in the
/// local part. No network or DNS lookup is performed, and malformed input
/// of any kind yields `false` rather than an error.
pub fn is_valid_email(email: &str) -> bool {
    EmailAddress::parse_with_options(email, Options::default().with_required_tld()).is_ok()
}
