//! Password requirement checks
//!
//! Each check tests a single character-class requirement against the whole
//! password and answers independently of the others.

mod length;
mod special;
mod variety;

pub use length::length_check;
pub use special::{special_check, SPECIAL_CHARS};
pub use variety::{digit_check, lowercase_check, uppercase_check};
