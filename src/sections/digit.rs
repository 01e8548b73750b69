//! Digit section - requires at least one ASCII digit.

use super::Rule;

pub const DIGIT_RULE: Rule = Rule {
    name: "digit",
    check: has_digit,
    message: "Include at least one number.",
};

/// Checks for at least one `[0-9]` character.
///
/// # Returns
/// - `true` if an ASCII digit is present
/// - `false` otherwise, including for non-ASCII digits
fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}
