//! Internet and device identifier generators.

use super::{digits, financial, pick};
use crate::SynthValue;
use rand::rngs::StdRng;
use rand::Rng;

const DOMAIN_STEMS: &[&str] = &[
    "lakeshore", "quartz", "meridian", "bluefin", "orchard", "cobalt", "harbor", "cascade",
    "redwood", "junction",
];

const TLDS: &[&str] = &["com", "org", "net", "io", "dev"];

const URL_PATHS: &[&str] = &["", "/index", "/about", "/api/v1", "/docs", "/login"];

pub fn domain_name(rng: &mut StdRng) -> SynthValue {
    SynthValue::Text(format!("{}.{}", pick(rng, DOMAIN_STEMS), pick(rng, TLDS)))
}

pub fn url(rng: &mut StdRng) -> SynthValue {
    SynthValue::Text(format!(
        "https://{}.{}{}",
        pick(rng, DOMAIN_STEMS),
        pick(rng, TLDS),
        pick(rng, URL_PATHS)
    ))
}

pub fn ipv4(rng: &mut StdRng) -> SynthValue {
    SynthValue::Text(format!(
        "{}.{}.{}.{}",
        rng.gen_range(1..255u16),
        rng.gen_range(0..256u16),
        rng.gen_range(0..256u16),
        rng.gen_range(1..255u16)
    ))
}

pub fn ipv6(rng: &mut StdRng) -> SynthValue {
    let groups: Vec<String> = (0..8).map(|_| format!("{:x}", rng.gen::<u16>())).collect();
    SynthValue::Text(groups.join(":"))
}

/// Either an IPv4 or IPv6 address, 50/50.
pub fn ip_address(rng: &mut StdRng) -> SynthValue {
    if rng.gen_bool(0.5) {
        ipv4(rng)
    } else {
        ipv6(rng)
    }
}

pub fn mac_address(rng: &mut StdRng) -> SynthValue {
    let octets: Vec<String> = (0..6).map(|_| format!("{:02x}", rng.gen::<u8>())).collect();
    SynthValue::Text(octets.join(":"))
}

/// Fifteen-digit IMEI with a valid Luhn check digit.
pub fn imei(rng: &mut StdRng) -> SynthValue {
    let body = digits(rng, 14);
    let check = financial::luhn_check_digit(&body);
    SynthValue::Text(format!("{body}{check}"))
}

pub fn password(rng: &mut StdRng) -> SynthValue {
    const CHARSET: &[u8] =
        b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789!#$%&*+-_";
    let len = rng.gen_range(10..=16);
    let pw: String = (0..len)
        .map(|_| char::from(CHARSET[rng.gen_range(0..CHARSET.len())]))
        .collect();
    SynthValue::Text(pw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;

    #[test]
    fn test_ipv4_octets() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            if let SynthValue::Text(ip) = ipv4(&mut rng) {
                let octets: Vec<&str> = ip.split('.').collect();
                assert_eq!(octets.len(), 4);
                for o in octets {
                    assert!(o.parse::<u16>().unwrap() < 256);
                }
            } else {
                panic!("Expected Text value");
            }
        }
    }

    #[test]
    fn test_mac_shape() {
        let mut rng = StdRng::seed_from_u64(42);
        if let SynthValue::Text(mac) = mac_address(&mut rng) {
            assert_eq!(mac.split(':').count(), 6);
            assert_eq!(mac.len(), 17);
        } else {
            panic!("Expected Text value");
        }
    }

    #[test]
    fn test_imei_length() {
        let mut rng = StdRng::seed_from_u64(42);
        if let SynthValue::Text(imei) = imei(&mut rng) {
            assert_eq!(imei.len(), 15);
            assert!(imei.chars().all(|c| c.is_ascii_digit()));
        } else {
            panic!("Expected Text value");
        }
    }

    #[test]
    fn test_password_length_bounds() {
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            if let SynthValue::Text(pw) = password(&mut rng) {
                assert!(pw.len() >= 10 && pw.len() <= 16);
            } else {
                panic!("Expected Text value");
            }
        }
    }
}
