//! Password policy - reduces the property record to a single verdict.

use crate::properties::PasswordProperties;

/// A password is valid only when all five requirements hold at once.
/// There is no partial-credit scoring.
pub fn is_valid_password(props: PasswordProperties) -> bool {
    props.length_correct
        && props.lower_correct
        && props.upper_correct
        && props.special_correct
        && props.number_correct
}
