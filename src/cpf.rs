//! CPF (Cadastro de Pessoas Físicas) validation, masking and generation.
//!
//! A CPF is an 11-digit individual taxpayer number whose last two digits
//! are check digits derived from a weighted sum modulo 11.

use rand::Rng;

use crate::FormatError;

/// Digit count of a canonical CPF.
pub const CPF_LEN: usize = 11;

/// Weight of the leftmost digit when computing the first check digit;
/// position `i` is weighted `10 - i` over the first 9 digits.
const FIRST_DIGIT_WEIGHT: u32 = 10;

/// Weight of the leftmost digit when computing the second check digit;
/// position `i` is weighted `11 - i` over the first 10 digits.
const SECOND_DIGIT_WEIGHT: u32 = 11;

/// Display shape of a masked CPF; `#` marks a digit slot.
const MASK_TEMPLATE: &str = "###.###.###-##";

/// Validate a CPF, accepting masked, unmasked or otherwise punctuated input.
///
/// Strips everything that is not an ASCII digit, requires exactly 11 digits,
/// rejects sequences of a single repeated digit ("000.000.000-00" and
/// friends carry consistent check digits but are never issued), and verifies
/// both check digits against positions 9 and 10.
pub fn validate(input: &str) -> bool {
    let digits = digits_of(input);
    if digits.len() != CPF_LEN {
        return false;
    }
    if digits.iter().all(|&d| d == digits[0]) {
        return false;
    }

    digits[9] == check_digit(&digits[..9], FIRST_DIGIT_WEIGHT)
        && digits[10] == check_digit(&digits[..10], SECOND_DIGIT_WEIGHT)
}

/// Format a CPF for display as `NNN.NNN.NNN-NN`.
///
/// Accepts any punctuation in the input; fails if the stripped input does
/// not have exactly 11 digits.
pub fn mask(input: &str) -> Result<String, FormatError> {
    let digits = unmask(input);
    if digits.len() != CPF_LEN {
        return Err(FormatError {
            document: "CPF",
            expected: CPF_LEN,
            found: digits.len(),
        });
    }

    Ok(format!(
        "{}.{}.{}-{}",
        &digits[..3],
        &digits[3..6],
        &digits[6..9],
        &digits[9..]
    ))
}

/// Strip every non-digit character. Performs no length validation.
pub fn unmask(input: &str) -> String {
    input.chars().filter(char::is_ascii_digit).collect()
}

/// Generate a random, checksum-valid CPF in canonical (unmasked) form.
pub fn generate() -> String {
    generate_with(&mut rand::thread_rng())
}

/// Generate with a caller-supplied random source.
///
/// Nine uniform base digits plus the two check digits they imply. A seeded
/// source gives deterministic output for tests.
pub fn generate_with<R: Rng + ?Sized>(rng: &mut R) -> String {
    let mut digits: Vec<u8> = (0..9).map(|_| rng.gen_range(0..=9)).collect();
    digits.push(check_digit(&digits, FIRST_DIGIT_WEIGHT));
    let second = check_digit(&digits, SECOND_DIGIT_WEIGHT);
    digits.push(second);

    digits.iter().map(|&d| char::from(b'0' + d)).collect()
}

/// Check whether the input is shaped like a CPF: fully masked
/// (`NNN.NNN.NNN-NN`), fully unmasked (11 digits), or any left-to-right
/// prefix of the masked shape.
///
/// Prefix acceptance supports incremental validation of an input field
/// being typed: "123.456" is a valid partial, "abc" is not. Check digits
/// are not inspected.
pub fn is_valid_format(input: &str) -> bool {
    is_unmasked(input) || is_mask_prefix(input)
}

fn is_unmasked(input: &str) -> bool {
    input.len() == CPF_LEN && input.bytes().all(|b| b.is_ascii_digit())
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
/// digit 0, anything else to `11 - remainder`. Position `i` is weighted
/// `start_weight - i`.
fn check_digit(digits: &[u8], start_weight: u32) -> u8 {
    let sum: u32 = digits
        .iter()
        .enumerate()
        .map(|(i, &d)| u32::from(d) * (start_weight - i as u32))
        .sum();

    match sum % 11 {
        r if r < 2 => 0,
        r => (11 - r) as u8,
    }
}
