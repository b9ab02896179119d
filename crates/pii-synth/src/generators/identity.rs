//! Identification-document value generators, with per-locale variants.

use super::{digits, upper_letters};
use crate::SynthValue;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

/// US social security number, `AAA-GG-SSSS`.
pub fn ssn(rng: &mut StdRng) -> SynthValue {
    SynthValue::Text(format!(
        "{}-{}-{}",
        digits(rng, 3),
        digits(rng, 2),
        digits(rng, 4)
    ))
}

/// Nine-digit US passport number.
pub fn passport(rng: &mut StdRng) -> SynthValue {
    SynthValue::Text(digits(rng, 9))
}

/// German passport number: 27 characters and digits, excluding the
/// letters a, e, i, o, u, b, s, q, d.
pub fn passport_de(rng: &mut StdRng) -> SynthValue {
    const ALLOWED: &[u8] = b"CFGHJKLMNPRTVWXYZ0123456789";
    let number: String = (0..27)
        .map(|_| char::from(*ALLOWED.choose(rng).unwrap_or(&b'0')))
        .collect();
    SynthValue::Text(number)
}

/// US driver license: one letter followed by seven digits.
pub fn drivers_license(rng: &mut StdRng) -> SynthValue {
    SynthValue::Text(format!("{}{}", upper_letters(rng, 1), digits(rng, 7)))
}

/// German driver license: four digits followed by seven alphanumerics.
pub fn drivers_license_de(rng: &mut StdRng) -> SynthValue {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    let tail: String = (0..7)
        .map(|_| char::from(*CHARSET.choose(rng).unwrap_or(&b'0')))
        .collect();
    SynthValue::Text(format!("{}{}", digits(rng, 4), tail))
}

/// Vehicle plate, `ABC-1234`.
pub fn license_plate(rng: &mut StdRng) -> SynthValue {
    let prefix = upper_letters(rng, 3);
    let len = rng.gen_range(3..5);
    SynthValue::Text(format!("{}-{}", prefix, digits(rng, len)))
}
