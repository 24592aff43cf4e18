use thiserror::Error;

/// Error returned by the masking operations when the cleaned input does not
/// carry the exact digit count of the document type.
///
/// Validation never raises this: wrong length, repeated-digit sequences and
/// bad check digits are all reported as a `false` return from `validate`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{document} must have exactly {expected} digits, got {found}")]
pub struct FormatError {
    /// Document kind the input was checked against ("CPF" or "CNPJ").
    pub document: &'static str,
    /// Digit count the document type requires.
    pub expected: usize,
    /// Digit count found after stripping formatting characters.
    pub found: usize,
}
