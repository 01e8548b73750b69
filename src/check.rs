//! User-triggered checks.
//!
//! An interactive surface calls [`check_password`] when the user asks for a
//! verdict. An empty field is answered with a prompt instead of a score.

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::evaluator::evaluate_password_strength;
use crate::types::ScoreResult;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CheckError {
    #[error("Please enter a password to check.")]
    EmptyInput,
}

/// Runs a check for the current field contents.
///
/// # Errors
///
/// Returns [`CheckError::EmptyInput`] if nothing was entered; the scorer
/// is not invoked in that case.
pub fn check_password(password: &SecretString) -> Result<ScoreResult, CheckError> {
    if password.expose_secret().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::info!("Check requested without a password");
        return Err(CheckError::EmptyInput);
    }
    Ok(evaluate_password_strength(password))
}
