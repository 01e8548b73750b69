//! Password evaluation sections
//!
//! Each section is one rule: a predicate over the raw password and the
//! message to show when it fails.

mod case;
mod digit;
mod length;
mod special;

pub use case::CASE_RULE;
pub use digit::DIGIT_RULE;
pub use length::LENGTH_RULE;
pub use special::SPECIAL_RULE;

/// A fixed pass/fail check contributing at most one point to the score.
///
/// Rules are built inside the crate only; renderers read [`RULES`] to list
/// the requirements up front.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    pub(crate) name: &'static str,
    pub(crate) check: fn(&str) -> bool,
    pub(crate) message: &'static str,
}

impl Rule {
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Message reported when the rule fails.
    pub fn message(&self) -> &'static str {
        self.message
    }

    pub fn passes(&self, password: &str) -> bool {
        (self.check)(password)
    }

    /// Returns `None` if the rule passes, or its failure message.
    pub fn evaluate(&self, password: &str) -> Option<&'static str> {
        if self.passes(password) {
            None
        } else {
            Some(self.message)
        }
    }
}

/// All rules, in the order they are checked and reported.
pub const RULES: [Rule; 4] = [LENGTH_RULE, CASE_RULE, DIGIT_RULE, SPECIAL_RULE];
