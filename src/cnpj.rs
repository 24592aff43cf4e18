//! CNPJ (Cadastro Nacional da Pessoa Jurídica) validation, masking and
//! generation.
//!
//! A CNPJ is a 14-digit company taxpayer number: 8 base digits, a 4-digit
//! branch ordinal, and two check digits derived from weighted sums modulo 11.

use rand::Rng;

use crate::FormatError;

/// Digit count of a canonical CNPJ.
pub const CNPJ_LEN: usize = 14;

/// Weights for the first check digit, applied to the first 12 digits.
const FIRST_DIGIT_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Weights for the second check digit, applied to the first 13 digits.
const SECOND_DIGIT_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Display shape of a masked CNPJ; `#` marks a digit slot.
const MASK_TEMPLATE: &str = "##.###.###/####-##";

/// Validate a CNPJ, accepting masked, unmasked or otherwise punctuated input.
///
/// Strips everything that is not an ASCII digit, requires exactly 14 digits,
/// rejects sequences of a single repeated digit, and verifies both check
/// digits against positions 12 and 13.
pub fn validate(input: &str) -> bool {
    let digits = digits_of(input);
    if digits.len() != CNPJ_LEN {
        return false;
    }
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    digits[12] == check_digit(&digits[..12], &FIRST_DIGIT_WEIGHTS)
        && digits[13] == check_digit(&digits[..13], &SECOND_DIGIT_WEIGHTS)
}

/// Format a CNPJ for display as `NN.NNN.NNN/NNNN-NN`.
///
/// Accepts any punctuation in the input; fails if the stripped input does
/// not have exactly 14 digits.
pub fn mask(input: &str) -> Result<String, FormatError> {
    let digits = unmask(input);
    if digits.len() != CNPJ_LEN {
        return Err(FormatError {
            document: "CNPJ",
            expected: CNPJ_LEN,
            found: digits.len(),
        });
    }

    Ok(format!(
        "{}.{}.{}/{}-{}",
        &digits[..2],
        &digits[2..5],
        &digits[5..8],
        &digits[8..12],
        &digits[12..]
    ))
}

/// Strip every non-digit character. Performs no length validation.
pub fn unmask(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Generate a random, checksum-valid CNPJ in canonical (unmasked) form.
pub fn generate() -> String {
    generate_with(&mut rand::thread_rng())
}

/// Generate with a caller-supplied random source.
///
/// Twelve uniform base digits plus the two check digits they imply. A
/// seeded source gives deterministic output for tests.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut digits: Vec<u8> = (0..12).map(|_| rng.gen_range(0..=9)).collect();
    digits.push(check_digit(&digits, &FIRST_DIGIT_WEIGHTS));
    let second = check_digit(&digits, &SECOND_DIGIT_WEIGHTS);
    digits.push(second);

    digits.iter().map(|&d| char::from(b'0' + d)).collect()
}

/// Check whether the input is shaped like a CNPJ: fully masked
/// (`NN.NNN.NNN/NNNN-NN`), fully unmasked (14 digits), or any left-to-right
/// prefix of the masked shape.
///
/// Prefix acceptance supports incremental validation of an input field
/// being typed. Check digits are not inspected.
pub fn is_valid_format(input: &str) -> bool {
    is_unmasked(input) || is_mask_prefix(input)
}

fn is_unmasked(input: &str) -> bool {
    input.len() == CNPJ_LEN && input.bytes().all(|b| b.is_ascii_digit())
}

fn is_mask_prefix(input: &str) -> bool {
    input.len() <= MASK_TEMPLATE.len()
        && input
            .bytes()
            .zip(MASK_TEMPLATE.bytes())
            .all(|(c, slot)| match slot {
                b'#' => c.is_ascii_digit(),
                sep => c == sep,
            })
}

fn digits_of(input: &str) -> Vec<u8> {
    input
        .chars()
        .filter_map(|c| c.to_digit(10))
        .map(|d| d as u8)
        .collect()
}

/// Weighted sum modulo 11 with the floor rule: a remainder below 2 maps to
/// digit 0, anything else to `11 - remainder`.
fn check_digit(digits: &[u8], weights: &[u32]) -> u8 {
    let sum: u32 = digits
        .iter()
        .zip(weights)
        .map(|(&d, &w)| u32::from(d) * w)
        .sum();

    match sum % 11 {
        r if r < 2 => 0,
        r => (11 - r) as u8,
    }
}
