//! Case section - requires both an uppercase and a lowercase ASCII letter.

use super::Rule;

pub const CASE_RULE: Rule = Rule {
    name: "case",
    check: has_mixed_case,
    message: "Include both uppercase and lowercase letters.",
};

/// Checks for at least one `[A-Z]` and one `[a-z]` character.
///
/// # Returns
/// - `true` if both cases are present
/// - `false` if either is missing, or only non-ASCII letters are used
fn has_mixed_case(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_lowercase())
}
