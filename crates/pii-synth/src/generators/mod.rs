//! Individual value generators, grouped by semantic domain.
//!
//! Every public function in these modules has the [`Synthesizer`]
//! signature `fn(&mut StdRng) -> SynthValue` so it can be stored in a
//! provider registry as a plain function pointer.
//!
//! [`Synthesizer`]: crate::Synthesizer

pub mod contact;
pub mod filler;
pub mod financial;
pub mod identity;
pub mod internet;
pub mod location;
pub mod person;
pub mod temporal;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::Rng;

/// Pick one entry from a static pool.
pub(crate) fn pick(rng: &mut StdRng, pool: &[&'static str]) -> &'static str {
    pool.choose(rng).copied().unwrap_or("")
}

/// Generate exactly `n` random digits, no leading zero.
pub(crate) fn digits(rng: &mut StdRng, n: usize) -> String {
    let mut out = String::with_capacity(n);
    for i in 0..n {
        let low = if i == 0 { 1 } else { 0 };
        out.push(char::from(b'0' + rng.gen_range(low..10u8)));
    }
    out
}

/// Generate `n` random uppercase ASCII letters.
pub(crate) fn upper_letters(rng: &mut StdRng, n: usize) -> String {
    (0..n)
        .map(|_| char::from(b'A' + rng.gen_range(0..26u8)))
        .collect()
}

/// Generate `n` random alphanumeric characters (mixed case).
pub(crate) fn alphanumeric(rng: &mut StdRng, n: usize) -> String {
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    (0..n)
        .map(|_| char::from(CHARSET[rng.gen_range(0..CHARSET.len())]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_digits_no_leading_zero() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..50 {
            let d = digits(&mut rng, 6);
            assert_eq!(d.len(), 6);
            assert!(!d.starts_with('0'));
            assert!(d.chars().all(|c| c.is_ascii_digit()));
        }
    }

    #[test]
    fn test_alphanumeric_charset() {
        let mut rng = StdRng::seed_from_u64(42);
        let s = alphanumeric(&mut rng, 32);
        assert_eq!(s.len(), 32);
        assert!(s.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
