//! Contact-information value generators.

use super::{digits, person, pick};
use crate::SynthValue;
use rand::rngs::StdRng;
use rand::Rng;

const EMAIL_DOMAINS: &[&str] = &[
    "example.com",
    "example.org",
    "mail.test",
    "inbox.test",
    "post.example",
];

/// Email address derived from the person name pools.
pub fn email(rng: &mut StdRng) -> SynthValue {
    let first = pick(rng, person::FIRST_NAMES).to_lowercase();
    let last = pick(rng, person::LAST_NAMES)
        .to_lowercase()
        .replace('\'', "");
    SynthValue::Text(format!(
        "{}.{}{}@{}",
        first,
        last,
        rng.gen_range(1..100),
        pick(rng, EMAIL_DOMAINS)
    ))
}

/// US-formatted phone number, `(AAA) BBB-CCCC`.
pub fn phone_number(rng: &mut StdRng) -> SynthValue {
    SynthValue::Text(format!(
        "({}) {}-{}",
        digits(rng, 3),
        digits(rng, 3),
        digits(rng, 4)
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_email_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            if let SynthValue::Text(addr) = email(&mut rng) {
                assert_eq!(addr.matches('@').count(), 1);
                assert!(addr.contains('.'));
                assert!(!addr.contains(' '));
                assert_eq!(addr, addr.to_lowercase());
            } else {
                panic!("Expected Text value");
            }
        }
    }

    #[test]
    fn test_phone_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        if let SynthValue::Text(phone) = phone_number(&mut rng) {
            assert_eq!(phone.len(), 14);
            assert!(phone.starts_with('('));
        } else {
            panic!("Expected Text value");
        }
    }
}
