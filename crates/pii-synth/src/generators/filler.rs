//! Non-PII filler value generators: opaque strings, numbers, tokens.
//!
//! These back the non-PII half of the registry and the fallback value
//! assigned to fields that match no provider at all.

use super::{alphanumeric, pick};
use crate::SynthValue;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;
use uuid::Uuid;

const WORDS: &[&str] = &[
    "alpha", "solid", "brisk", "mellow", "copper", "granite", "velvet", "drift", "ember", "hollow",
    "latch", "marble", "nimble", "onyx", "pluck", "quartz", "ripple", "saddle", "thistle", "umber",
];

const COLORS: &[&str] = &[
    "red", "orange", "yellow", "green", "teal", "blue", "indigo", "violet", "maroon", "olive",
    "navy", "coral",
];

/// Free-form string: a few words mixed with alphanumeric chunks.
pub fn string(rng: &mut StdRng) -> SynthValue {
    let word_count = rng.gen_range(1..4);
    let mut parts: Vec<String> = WORDS
        .choose_multiple(rng, word_count)
        .map(|w| w.to_string())
        .collect();
    if rng.gen_bool(0.5) {
        let len = rng.gen_range(2..8);
        parts.push(alphanumeric(rng, len));
    }
    parts.shuffle(rng);
    SynthValue::Text(parts.join(" "))
}

pub fn boolean(rng: &mut StdRng) -> SynthValue {
    SynthValue::Bool(rng.gen_bool(0.5))
}

pub fn color(rng: &mut StdRng) -> SynthValue {
    SynthValue::Text(pick(rng, COLORS).to_string())
}

pub fn random_number(rng: &mut StdRng) -> SynthValue {
    SynthValue::Int(rng.gen_range(0..1_000_000))
}

/// Forty-character hex digest, SHA1-shaped.
pub fn hex_token(rng: &mut StdRng) -> SynthValue {
    const HEX: &[u8] = b"0123456789abcdef";
    let token: String = (0..40)
        .map(|_| char::from(HEX[rng.gen_range(0..HEX.len())]))
        .collect();
    SynthValue::Text(token)
}

/// Random alphanumeric identifier, 10-20 characters.
pub fn alphanumeric_id(rng: &mut StdRng) -> SynthValue {
    let len = rng.gen_range(10..=20);
    SynthValue::Text(alphanumeric(rng, len))
}

/// UUID v4 built from RNG bytes so it stays seed-deterministic.
pub fn uuid_v4(rng: &mut StdRng) -> SynthValue {
    let mut bytes = [0u8; 16];
    rng.fill(&mut bytes);
    bytes[6] = (bytes[6] & 0x0f) | 0x40; // Version 4
    bytes[8] = (bytes[8] & 0x3f) | 0x80; // Variant RFC 4122
    SynthValue::Text(Uuid::from_bytes(bytes).to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_string_is_alnum_and_spaces() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            if let SynthValue::Text(s) = string(&mut rng) {
                assert!(!s.is_empty());
                assert!(s.chars().all(|c| c.is_ascii_alphanumeric() || c == ' '));
            } else {
                panic!("Expected Text value");
            }
        }
    }

    #[test]
    fn test_hex_token_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        if let SynthValue::Text(t) = hex_token(&mut rng) {
            assert_eq!(t.len(), 40);
            assert!(t.chars().all(|c| c.is_ascii_hexdigit()));
        } else {
            panic!("Expected Text value");
        }
    }

    #[test]
    fn test_alphanumeric_id_is_alnum() {
        let mut rng = StdRng::seed_from_u64(42);
        if let SynthValue::Text(s) = alphanumeric_id(&mut rng) {
            assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
            assert!(s.len() >= 10 && s.len() <= 20);
        } else {
            panic!("Expected Text value");
        }
    }

    #[test]
    fn test_uuid_v4_deterministic() {
        let mut rng1 = StdRng::seed_from_u64(42);
        let mut rng2 = StdRng::seed_from_u64(42);
        assert_eq!(uuid_v4(&mut rng1), uuid_v4(&mut rng2));
        if let SynthValue::Text(u) = uuid_v4(&mut rng1) {
            assert_eq!(u.len(), 36);
            assert_eq!(&u[14..15], "4");
        }
    }
}
