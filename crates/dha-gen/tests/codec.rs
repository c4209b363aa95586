//! Property tests for the identity-number codec.

use chrono::NaiveDate;
use proptest::prelude::*;

use dha_gen::said;

proptest! {
    #[test]
    fn check_digit_round_trips(
        year in 1900i32..=2099,
        month in 1u32..=12,
        day in 1u32..=28,
        sequence in 0u16..=9999,
        age in 0u8..=8,
    ) {
        let birth = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        let id = said::encode(birth, sequence, age);
        prop_assert_eq!(id.len(), said::ID_LENGTH);
        prop_assert!(said::is_valid(&id));
        prop_assert!(id.starts_with(&said::birth_prefix(birth)));
        let recomputed = said::check_digit(&id[..12]).expect("12-digit payload");
        let last = u32::from(id.as_bytes()[12] - b'0');
        prop_assert_eq!(recomputed, last);
    }

    #[test]
    fn distinct_sequences_yield_distinct_identifiers(
        sequence_a in 0u16..=9999,
        sequence_b in 0u16..=9999,
        age in 0u8..=8,
    ) {
        prop_assume!(sequence_a != sequence_b);
        let birth = NaiveDate::from_ymd_opt(1975, 4, 12).unwrap();
        prop_assert_ne!(
            said::encode(birth, sequence_a, age),
            said::encode(birth, sequence_b, age)
        );
    }

    #[test]
    fn corrupting_any_payload_digit_breaks_validation(
        sequence in 0u16..=9999,
        position in 0usize..12,
        bump in 1u8..=9,
    ) {
        let birth = NaiveDate::from_ymd_opt(1990, 7, 21).unwrap();
        let id = said::encode(birth, sequence, 3);
        let mut bytes = id.into_bytes();
        bytes[position] = b'0' + (bytes[position] - b'0' + bump) % 10;
        let corrupted = String::from_utf8(bytes).unwrap();
        // A single-digit change is always caught by the Luhn check.
        prop_assert!(!said::is_valid(&corrupted));
    }
}
