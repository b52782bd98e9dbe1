//! Estimated-damage amount parsing
//!
//! FNOL forms write amounts in every shape: `$18,000`, `18000 USD`,
//! `N/A`. Parsing keeps the ASCII digits and reads them as a whole number.
//!
//! # Known quirk
//!
//! Decimal points are stripped along with every other non-digit, so
//! `$1,234.56` parses as `123456` and `$24,500.00` as `2450000`. Intake has
//! always routed on this reading; changing it would move claims between
//! queues and needs a deliberate decision.

/// Parses an amount by discarding every non-digit character
///
/// Returns `None` when no digit is present, or when the digits exceed
/// `u64::MAX` (such an amount is never below any routing threshold).
pub fn parse_amount(raw: &str) -> Option<u64> {
    let digits: String = raw.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return None;
    }
    digits.parse().ok()
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn formatted_amount_parses_back(amount in 0u64..1_000_000_000u64) {
            let with_separators = format!("${}", group_thousands(amount));
            prop_assert_eq!(parse_amount(&with_separators), Some(amount));
        }

        #[test]
        fn text_without_digits_never_parses(raw in "[^0-9]*") {
            prop_assert_eq!(parse_amount(&raw), None);
        }

        #[test]
        fn parsing_never_panics(raw in ".*") {
            let _ = parse_amount(&raw);
        }
    }

    fn group_thousands(amount: u64) -> String {
        let digits = amount.to_string();
        let mut out = String::new();
        for (i, c) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(c);
        }
        out
    }
}
