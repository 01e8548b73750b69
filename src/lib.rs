//! Rule-based password strength verdicts
//!
//! This library scores a password against four fixed composition rules
//! and returns a strength verdict together with improvement suggestions.
//!
//! # Features
//!
//! - `async` (default): Enables channel-based evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate (the password is never logged)
//! - `serde`: Implements `Serialize` for the result types
//!
//! # Example
//!
//! ```rust
//! use pwd_verdict::{check_password, evaluate, PasswordStrength};
//! use secrecy::SecretString;
//!
//! let evaluation = evaluate("Abcdefg1");
//! assert_eq!(evaluation.strength(), PasswordStrength::Medium);
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let evaluation = check_password(&password).expect("Password was entered");
//!
//! println!("Score: {}", evaluation.score());
//! println!("{} ({}%)", evaluation.strength().verdict(), evaluation.strength().display_weight());
//! for suggestion in evaluation.suggestions() {
//!     println!("- {}", suggestion);
//! }
//! ```

// Internal modules
mod check;
mod evaluator;
mod sections;
mod types;

// Public API
pub use check::{CheckError, check_password};
pub use evaluator::{evaluate, evaluate_password_strength};
pub use sections::{RULES, Rule};
pub use types::{PasswordScore, PasswordStrength, ScoreResult};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_strength_tx;
