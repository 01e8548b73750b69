//! Password strength evaluator - main evaluation logic.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::RULES;
use crate::types::{PasswordScore, ScoreResult};

/// Scores a password against every rule.
///
/// Total for any input, including the empty string: each rule runs, every
/// pass adds one point and every failure adds its message to the
/// suggestions in rule order. The password is never logged or retained.
pub fn evaluate(password: &str) -> ScoreResult {
    let mut suggestions = Vec::new();

    for rule in &RULES {
        let failure = rule.evaluate(password);

        #[cfg(feature = "tracing")]
        tracing::debug!(rule = rule.name, passed = failure.is_none(), "rule checked");

        if let Some(message) = failure {
            suggestions.push(message.to_string());
        }
    }

    // Every rule either scores or suggests
    let score = PasswordScore::new((RULES.len() - suggestions.len()) as u8);
    let result = ScoreResult::new(score, suggestions);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        score = result.score().value(),
        strength = %result.strength(),
        "password evaluated"
    );

    result
}

/// Evaluates a secret password.
///
/// # Arguments
/// * `password` - The password to evaluate
///
/// # Returns
/// A `ScoreResult` with score, strength and suggestions.
pub fn evaluate_password_strength(password: &SecretString) -> ScoreResult {
    evaluate(password.expose_secret())
}

/// Async version that sends the evaluation result via channel.
///
/// Cancelling `token` marks this check as superseded: the result is
/// dropped instead of sent.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<ScoreResult>,
) {
    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("evaluation cancelled before start");
        return;
    }

    let evaluation = evaluate_password_strength(password);

    tokio::select! {
        biased;
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("evaluation superseded, result dropped");
        }
        sent = tx.send(evaluation) => {
            if let Err(_e) = sent {
                #[cfg(feature = "tracing")]
                tracing::error!("Failed to send password evaluation result: {}", _e);
            }
        }
    }
}
