//! Special character section - requires one character from a fixed set.

use super::Rule;

const SPECIAL_CHARS: &str = "!@#$%^&*(),.?>";

pub const SPECIAL_RULE: Rule = Rule {
    name: "special",
    check: has_special,
    message: "Use at least one special character (!@#$%^&*(),.?>).",
};

/// Checks for at least one character from `!@#$%^&*(),.?>`.
///
/// # Returns
/// - `true` if a listed character is present
/// - `false` otherwise
fn has_special(password: &str) -> bool {
    password.chars().any(|c| SPECIAL_CHARS.contains(c))
}
