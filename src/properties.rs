//! Password property record produced by the analyzer.

/// The five independent requirements a password is checked against.
///
/// Each flag depends only on its own character-class test over the full
/// password; none of them looks at the others. A fresh value is derived
/// on every evaluation and nothing is cached between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordProperties {
    /// Password has 8 or more characters.
    pub length_correct: bool,
    /// Password contains at least one `A`-`Z`.
    pub upper_correct: bool,
    /// Password contains at least one `a`-`z`.
    pub lower_correct: bool,
    /// Password contains at least one character from the special set.
    pub special_correct: bool,
    /// Password contains at least one digit `0`-`9`.
    pub number_correct: bool,
}
