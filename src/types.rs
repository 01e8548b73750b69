//! Result value objects returned by the scorer.

use std::fmt;

/// Number of rules a password satisfied, `0..=4`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PasswordScore(u8);

impl PasswordScore {
    /// Highest reachable score: every rule passed.
    pub const MAX: u8 = 4;

    /// Creates a score, clamping anything above [`PasswordScore::MAX`].
    pub fn new(value: u8) -> Self {
        Self(value.min(Self::MAX))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for PasswordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

/// Strength bucket derived from a [`PasswordScore`].
///
/// Scores 0, 1 and 2 all collapse into `Weak`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub enum PasswordStrength {
    Weak,
    Medium,
    Strong,
}

impl PasswordStrength {
    pub fn from_score(score: PasswordScore) -> Self {
        match score.value() {
            4 => PasswordStrength::Strong,
            3 => PasswordStrength::Medium,
            _ => PasswordStrength::Weak,
        }
    }

    /// Fill percentage for a proportional strength indicator.
    pub fn display_weight(&self) -> u8 {
        match self {
            PasswordStrength::Strong => 100,
            PasswordStrength::Medium => 75,
            PasswordStrength::Weak => 40,
        }
    }

    /// Headline shown next to the indicator.
    pub fn verdict(&self) -> &'static str {
        match self {
            PasswordStrength::Strong => "Your password is Strong. Well done!",
            PasswordStrength::Medium => "Your password is Medium. Almost strong!",
            PasswordStrength::Weak => "Your password is Weak. Improve it for better security.",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Medium => "Medium",
            PasswordStrength::Strong => "Strong",
        };
        f.write_str(label)
    }
}

/// Outcome of a single evaluation.
///
/// Built fresh on every call and never mutated afterwards; `strength` is
/// always the bucket of `score`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScoreResult {
    score: PasswordScore,
    strength: PasswordStrength,
    suggestions: Vec<String>,
}

impl ScoreResult {
    pub(crate) fn new(score: PasswordScore, suggestions: Vec<String>) -> Self {
        Self {
            score,
            strength: PasswordStrength::from_score(score),
            suggestions,
        }
    }

    pub fn score(&self) -> PasswordScore {
        self.score
    }

    pub fn strength(&self) -> PasswordStrength {
        self.strength
    }

    /// Failure messages of the rules that did not pass, in rule order.
    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub fn is_strong(&self) -> bool {
        self.strength == PasswordStrength::Strong
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_clamps_to_max() {
        assert_eq!(PasswordScore::new(9).value(), PasswordScore::MAX);
        assert_eq!(PasswordScore::new(2).value(), 2);
    }

    #[test]
    fn test_score_display() {
        assert_eq!(PasswordScore::new(3).to_string(), "3/4");
    }

    #[test]
    fn test_strength_buckets() {
        let expected = [
            (0, PasswordStrength::Weak),
            (1, PasswordStrength::Weak),
            (2, PasswordStrength::Weak),
            (3, PasswordStrength::Medium),
            (4, PasswordStrength::Strong),
        ];
        for (value, strength) in expected {
            assert_eq!(
                PasswordStrength::from_score(PasswordScore::new(value)),
                strength,
                "score {}",
                value
            );
        }
    }

    #[test]
    fn test_weak_weight_is_flat() {
        let zero = PasswordStrength::from_score(PasswordScore::new(0));
        let two = PasswordStrength::from_score(PasswordScore::new(2));
        assert_eq!(zero.display_weight(), 40);
        assert_eq!(two.display_weight(), 40);
    }

    #[test]
    fn test_display_weights() {
        assert_eq!(PasswordStrength::Medium.display_weight(), 75);
        assert_eq!(PasswordStrength::Strong.display_weight(), 100);
    }

    #[test]
    fn test_strength_display_and_verdict() {
        assert_eq!(PasswordStrength::Medium.to_string(), "Medium");
        assert!(PasswordStrength::Strong.verdict().contains("Strong"));
        assert!(PasswordStrength::Weak.verdict().contains("Weak"));
    }

    #[test]
    fn test_result_derives_strength() {
        let result = ScoreResult::new(PasswordScore::new(3), vec!["x".to_string()]);
        assert_eq!(result.strength(), PasswordStrength::Medium);
        assert!(!result.is_strong());
        assert_eq!(result.suggestions(), ["x".to_string()]);
    }

    #[test]
    fn test_result_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ScoreResult>();
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_result_serializes() {
        let result = ScoreResult::new(PasswordScore::new(4), Vec::new());
        let json = serde_json::to_value(&result).expect("Failed to serialize");
        assert_eq!(json["score"], 4);
        assert_eq!(json["strength"], "Strong");
        assert!(json["suggestions"].as_array().unwrap().is_empty());
    }
}
