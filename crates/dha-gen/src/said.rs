//! South African identity number codec.
//!
//! Layout is `YYMMDD SSSS C A Z`: birth date, four-digit sequence,
//! citizenship digit (always `0` here), age/race indicator (0-8), and a
//! Luhn check digit over the preceding twelve digits.

use chrono::{Datelike, NaiveDate};
use rand::Rng;

/// Total length of an encoded identifier.
pub const ID_LENGTH: usize = 13;

const CITIZEN_DIGIT: u32 = 0;

/// Encode a full identifier from its parts.
///
/// `sequence` is taken modulo 10 000 and `age_indicator` modulo 9, so any
/// input maps onto the valid digit ranges. Pure given its inputs: the same
/// arguments always produce the same identifier.
pub fn encode(birth_date: NaiveDate, sequence: u16, age_indicator: u8) -> String {
    let payload = format!(
        "{}{:04}{}{}",
        birth_prefix(birth_date),
        u32::from(sequence) % 10_000,
        CITIZEN_DIGIT,
        age_indicator % 9,
    );
    let check = luhn_digit(payload.as_bytes());
    format!("{payload}{check}")
}

/// Encode an identifier with a freshly drawn sequence and age indicator.
pub fn draw<R: Rng>(rng: &mut R, birth_date: NaiveDate) -> String {
    let sequence = rng.random_range(0..=9999);
    let age_indicator = rng.random_range(0..=8);
    encode(birth_date, sequence, age_indicator)
}

/// The `YYMMDD` digits encoding a birth date.
pub fn birth_prefix(birth_date: NaiveDate) -> String {
    format!(
        "{:02}{:02}{:02}",
        birth_date.year().rem_euclid(100),
        birth_date.month(),
        birth_date.day()
    )
}

/// Check digit for a 12-digit payload, or `None` when the payload is not
/// exactly twelve ASCII digits.
pub fn check_digit(payload: &str) -> Option<u32> {
    if payload.len() != ID_LENGTH - 1 || !payload.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    Some(luhn_digit(payload.as_bytes()))
}

/// True when `id` is thirteen ASCII digits whose final digit matches the
/// Luhn check over the first twelve.
pub fn is_valid(id: &str) -> bool {
    if id.len() != ID_LENGTH || !id.bytes().all(|byte| byte.is_ascii_digit()) {
        return false;
    }
    let expected = luhn_digit(&id.as_bytes()[..ID_LENGTH - 1]);
    id.as_bytes()[ID_LENGTH - 1] - b'0' == expected as u8
}

/// Luhn check digit: from the rightmost payload digit stepping left by two,
/// double the digit and subtract 9 when the result exceeds 9, then take
/// `(10 - sum mod 10) mod 10`. Digits-only input is the caller's contract.
fn luhn_digit(payload: &[u8]) -> u32 {
    let sum: u32 = payload
        .iter()
        .rev()
        .enumerate()
        .map(|(offset, byte)| {
            let mut digit = u32::from(byte - b'0');
            if offset % 2 == 0 {
                digit *= 2;
                if digit > 9 {
                    digit -= 9;
                }
            }
            digit
        })
        .sum();
    (10 - sum % 10) % 10
}
