//! Postal address, geographic, and air-travel value generators.

use super::{digits, pick, upper_letters};
use crate::SynthValue;
use rand::rngs::StdRng;
use rand::Rng;

pub(crate) const COUNTRIES: &[&str] = &[
    "United States",
    "Germany",
    "France",
    "Japan",
    "Brazil",
    "Canada",
    "Australia",
    "India",
    "Mexico",
    "Spain",
    "Italy",
    "Netherlands",
    "South Korea",
    "Kenya",
    "Poland",
];

const COUNTRY_CODES: &[&str] = &[
    "US", "DE", "FR", "JP", "BR", "CA", "AU", "IN", "MX", "ES", "IT", "NL", "KR", "KE", "PL",
];

const STATES: &[&str] = &[
    "California",
    "Texas",
    "New York",
    "Florida",
    "Washington",
    "Ohio",
    "Colorado",
    "Georgia",
    "Oregon",
    "Michigan",
    "Arizona",
    "Virginia",
];

const CITIES: &[&str] = &[
    "Springfield",
    "Riverton",
    "Fairview",
    "Kingsport",
    "Lakeside",
    "Granville",
    "Milton",
    "Ashford",
    "Brookfield",
    "Dayton",
    "Salem",
    "Clayton",
];

const STREET_NAMES: &[&str] = &[
    "Oak Street",
    "Maple Avenue",
    "Cedar Lane",
    "Elm Drive",
    "Pine Road",
    "Birch Boulevard",
    "Walnut Way",
    "Chestnut Court",
    "Willow Terrace",
    "Juniper Alley",
];

const AIRPORT_NAMES: &[&str] = &[
    "Hartsfield-Jackson Atlanta International Airport",
    "Los Angeles International Airport",
    "O'Hare International Airport",
    "Dallas/Fort Worth International Airport",
    "Denver International Airport",
    "Frankfurt Airport",
    "Haneda Airport",
    "Schiphol Airport",
];

pub fn street_name(rng: &mut StdRng) -> SynthValue {
    SynthValue::Text(pick(rng, STREET_NAMES).to_string())
}

pub fn building_number(rng: &mut StdRng) -> SynthValue {
    let len = rng.gen_range(1..5);
    SynthValue::Text(digits(rng, len))
}

pub fn street_address(rng: &mut StdRng) -> SynthValue {
    let len = rng.gen_range(1..5);
    SynthValue::Text(format!("{} {}", digits(rng, len), pick(rng, STREET_NAMES)))
}

/// Full postal address: street, city, state and zip on one line.
pub fn full_address(rng: &mut StdRng) -> SynthValue {
    let len = rng.gen_range(1..5);
    SynthValue::Text(format!(
        "{} {}, {}, {} {}",
        digits(rng, len),
        pick(rng, STREET_NAMES),
        pick(rng, CITIES),
        pick(rng, STATES),
        digits(rng, 5),
    ))
}

pub fn city(rng: &mut StdRng) -> SynthValue {
    SynthValue::Text(pick(rng, CITIES).to_string())
}

pub fn state(rng: &mut StdRng) -> SynthValue {
    SynthValue::Text(pick(rng, STATES).to_string())
}

pub fn country(rng: &mut StdRng) -> SynthValue {
    SynthValue::Text(pick(rng, COUNTRIES).to_string())
}

pub fn country_code(rng: &mut StdRng) -> SynthValue {
    SynthValue::Text(pick(rng, COUNTRY_CODES).to_string())
}

pub fn postcode(rng: &mut StdRng) -> SynthValue {
    SynthValue::Text(digits(rng, 5))
}

pub fn latitude(rng: &mut StdRng) -> SynthValue {
    SynthValue::Decimal(format!("{:.6}", rng.gen_range(-90.0..=90.0)))
}

pub fn longitude(rng: &mut StdRng) -> SynthValue {
    SynthValue::Decimal(format!("{:.6}", rng.gen_range(-180.0..=180.0)))
}

/// Latitude/longitude pair rendered as a single decimal coordinate string.
pub fn coordinate(rng: &mut StdRng) -> SynthValue {
    SynthValue::Text(format!(
        "{:.6}, {:.6}",
        rng.gen_range(-90.0..=90.0),
        rng.gen_range(-180.0..=180.0)
    ))
}

pub fn airport_name(rng: &mut StdRng) -> SynthValue {
    SynthValue::Text(pick(rng, AIRPORT_NAMES).to_string())
}

/// Three-letter IATA-style airport code.
pub fn airport_code(rng: &mut StdRng) -> SynthValue {
    SynthValue::Text(upper_letters(rng, 3))
}
