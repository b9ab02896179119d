//! Banking and payment value generators.

use super::{digits, pick, upper_letters};
use crate::SynthValue;
use rand::rngs::StdRng;
use rand::Rng;

const CURRENCY_CODES: &[&str] = &[
    "USD", "EUR", "GBP", "JPY", "CHF", "CAD", "AUD", "BRL", "INR", "MXN", "PLN", "KRW",
];

/// Compute the Luhn check digit for a string of digits.
pub(crate) fn luhn_check_digit(number: &str) -> char {
    let mut sum = 0u32;
    // Double every second digit from the right (the check digit slot
    // itself is excluded, so start doubling at the rightmost position).
    for (i, c) in number.chars().rev().enumerate() {
        let mut d = c.to_digit(10).unwrap_or(0);
        if i % 2 == 0 {
            d *= 2;
            if d > 9 {
                d -= 9;
            }
        }
        sum += d;
    }
    char::from(b'0' + ((10 - (sum % 10) as u8) % 10))
}

/// Basic bank account number (BBAN-style), 10-12 digits.
pub fn bank_account(rng: &mut StdRng) -> SynthValue {
    let len = rng.gen_range(10..=12);
    SynthValue::Text(digits(rng, len))
}

/// Nine-digit ABA routing transit number.
pub fn routing_number(rng: &mut StdRng) -> SynthValue {
    SynthValue::Text(digits(rng, 9))
}

/// IBAN-shaped value: country code, two check digits, bank code, account digits.
pub fn iban(rng: &mut StdRng) -> SynthValue {
    SynthValue::Text(format!(
        "{}{}{}{}",
        pick(rng, &["GB", "DE", "FR", "NL", "ES"]),
        digits(rng, 2),
        upper_letters(rng, 4),
        digits(rng, 14),
    ))
}

/// Sixteen-digit card number with a valid Luhn check digit.
pub fn credit_card_number(rng: &mut StdRng) -> SynthValue {
    let body = digits(rng, 15);
    let check = luhn_check_digit(&body);
    SynthValue::Text(format!("{body}{check}"))
}

/// Card expiry in `MM/YY` form, one to five years out.
pub fn card_expiry(rng: &mut StdRng) -> SynthValue {
    let month = rng.gen_range(1..=12u32);
    let year = rng.gen_range(26..=31u32);
    SynthValue::Text(format!("{month:02}/{year:02}"))
}

/// SWIFT/BIC code: bank, country, and location parts.
pub fn swift_code(rng: &mut StdRng) -> SynthValue {
    SynthValue::Text(format!(
        "{}{}{}",
        upper_letters(rng, 4),
        pick(rng, &["US", "DE", "GB", "FR", "JP"]),
        upper_letters(rng, 2),
    ))
}

pub fn currency_code(rng: &mut StdRng) -> SynthValue {
    SynthValue::Text(pick(rng, CURRENCY_CODES).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    fn luhn_valid(number: &str) -> bool {
        let (body, check) = number.split_at(number.len() - 1);
        luhn_check_digit(body) == check.chars().next().unwrap()
    }

    #[test]
    fn test_credit_card_passes_luhn() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            if let SynthValue::Text(card) = credit_card_number(&mut rng) {
                assert_eq!(card.len(), 16);
                assert!(luhn_valid(&card), "Luhn check failed for {card}");
            } else {
                panic!("Expected Text value");
            }
        }
    }

    #[test]
    fn test_luhn_known_value() {
        // 7992739871 has check digit 3
        assert_eq!(luhn_check_digit("7992739871"), '3');
    }

    #[test]
    fn test_card_expiry_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        if let SynthValue::Text(exp) = card_expiry(&mut rng) {
            assert_eq!(exp.len(), 5);
            assert_eq!(&exp[2..3], "/");
        } else {
            panic!("Expected Text value");
        }
    }

    #[test]
    fn test_iban_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        if let SynthValue::Text(iban) = iban(&mut rng) {
            assert_eq!(iban.len(), 22);
            assert!(iban[..2].chars().all(|c| c.is_ascii_uppercase()));
        } else {
            panic!("Expected Text value");
        }
    }
}
