//! Password policy evaluation.
//!
//! The policy requires a length within [`MIN_LENGTH`, `MAX_LENGTH`], one
//! character from each of four classes (uppercase, lowercase, digit,
//! symbol), and rejects well-known keyboard sequences and runs of repeated
//! characters.

use thiserror::Error;

/// Minimum accepted password length, in characters.
pub const MIN_LENGTH: usize = 8;

/// Maximum accepted password length, in characters.
pub const MAX_LENGTH: usize = 128;

/// Keyboard and counting sequences rejected anywhere in the password,
/// case-insensitively.
const SEQUENTIAL_RUNS: [&str; 5] = ["123", "abc", "qwe", "asd", "zxc"];

/// Characters counted as symbols for the character-class requirement.
const SYMBOLS: &str = r#"!@#$%^&*()_+-=[]{};':"\|,.<>/?"#;

/// A policy rule broken by a candidate password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PolicyViolation {
    #[error("password must have at least {min} characters", min = MIN_LENGTH)]
    TooShort,
    #[error("password must have at most {max} characters", max = MAX_LENGTH)]
    TooLong,
    #[error("password must contain an uppercase letter")]
    MissingUppercase,
    #[error("password must contain a lowercase letter")]
    MissingLowercase,
    #[error("password must contain a digit")]
    MissingDigit,
    #[error("password must contain a symbol")]
    MissingSymbol,
    #[error("password must not contain a common sequential run")]
    SequentialRun,
    #[error("password must not repeat a character three or more times in a row")]
    RepeatedRun,
}

/// Evaluate a password against the policy, returning every rule it breaks.
pub fn violations(password: &str) -> Vec<PolicyViolation> {
    let mut found = Vec::new();
    let length = password.chars().count();

    if length < MIN_LENGTH {
        found.push(PolicyViolation::TooShort);
    }
    if length > MAX_LENGTH {
        found.push(PolicyViolation::TooLong);
    }
    if !password.chars().any(|c| c.is_ascii_uppercase()) {
        found.push(PolicyViolation::MissingUppercase);
    }
    if !password.chars().any(|c| c.is_ascii_lowercase()) {
        found.push(PolicyViolation::MissingLowercase);
    }
    if !password.chars().any(|c| c.is_ascii_digit()) {
        found.push(PolicyViolation::MissingDigit);
    }
    if !password.chars().any(|c| SYMBOLS.contains(c)) {
        found.push(PolicyViolation::MissingSymbol);
    }
    if has_sequential_run(password) {
        found.push(PolicyViolation::SequentialRun);
    }
    if has_repeated_run(password) {
        found.push(PolicyViolation::RepeatedRun);
    }

    found
}

/// True when the policy accepts the password.
pub fn validate(password: &str) -> bool {
    violations(password).is_empty()
}

fn has_sequential_run(password: &str) -> bool {
    let lowered = password.to_lowercase();
    SEQUENTIAL_RUNS.iter().any(|run| lowered.contains(run))
}

fn has_repeated_run(password: &str) -> bool {
    let chars: Vec<char> = password.chars().collect();
    chars.windows(3).any(|w| w[0] == w[1] && w[1] == w[2])
}
