//! Length section - checks password minimum length.

use super::Rule;

const MIN_LENGTH: usize = 8;

pub const LENGTH_RULE: Rule = Rule {
    name: "length",
    check: has_min_length,
    message: "Password must be at least 8 characters long.",
};

/// Checks if the password meets the minimum length.
///
/// Counts characters, not bytes. Whitespace is counted as given.
///
/// # Returns
/// - `true` if the password has at least 8 characters
/// - `false` if it is too short
fn has_min_length(password: &str) -> bool {
    password.chars().count() >= MIN_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_section_too_short() {
        assert_eq!(
            LENGTH_RULE.evaluate("Short1!"),
            Some("Password must be at least 8 characters long.")
        );
    }

    #[test]
    fn test_length_section_exactly_minimum() {
        assert_eq!(LENGTH_RULE.evaluate("12345678"), None);
    }

    #[test]
    fn test_length_section_valid() {
        assert_eq!(LENGTH_RULE.evaluate("LongEnough123!"), None);
    }

    #[test]
    fn test_length_section_counts_chars_not_bytes() {
        // 4 chars, 8 bytes
        assert!(!has_min_length("ééèè"));
        assert!(has_min_length("éééééééé"));
    }

    #[test]
    fn test_length_section_keeps_whitespace() {
        assert!(has_min_length("   a    "));
    }
}
