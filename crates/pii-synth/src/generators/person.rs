//! Person and organization name generators.

use super::{location, pick};
use crate::SynthValue;
use rand::rngs::StdRng;
use rand::Rng;

pub(crate) const FIRST_NAMES: &[&str] = &[
    "James", "Mary", "Robert", "Patricia", "John", "Jennifer", "Michael", "Linda", "David",
    "Elizabeth", "William", "Barbara", "Richard", "Susan", "Joseph", "Jessica", "Thomas", "Sarah",
    "Carlos", "Karen", "Daniel", "Nancy", "Wei", "Priya", "Omar", "Fatima", "Yuki", "Aisha",
];

pub(crate) const LAST_NAMES: &[&str] = &[
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Wilson", "Anderson", "Thomas", "Taylor", "Moore", "Lee",
    "Nguyen", "Kim", "Patel", "Murphy", "O'Brien", "Schneider",
];

const COMPANY_STEMS: &[&str] = &[
    "Acme", "Globex", "Initech", "Vandelay", "Umbra", "Northwind", "Contoso", "Stark", "Wayne",
    "Hooli", "Cyberdyne", "Lumen", "Apex", "Vertex", "Quantum", "Pioneer",
];

const COMPANY_SUFFIXES: &[&str] = &[
    "Inc", "LLC", "Group", "Holdings", "Labs", "Industries", "Partners", "Corp", "Ltd",
];

const JOBS: &[&str] = &[
    "Software Engineer",
    "Nurse",
    "Accountant",
    "Teacher",
    "Electrician",
    "Data Analyst",
    "Pharmacist",
    "Architect",
    "Chef",
    "Paralegal",
    "Surveyor",
    "Librarian",
    "Machinist",
    "Physiotherapist",
];

pub fn first_name(rng: &mut StdRng) -> SynthValue {
    SynthValue::Text(pick(rng, FIRST_NAMES).to_string())
}

pub fn last_name(rng: &mut StdRng) -> SynthValue {
    SynthValue::Text(pick(rng, LAST_NAMES).to_string())
}

pub fn full_name(rng: &mut StdRng) -> SynthValue {
    SynthValue::Text(format!(
        "{} {}",
        pick(rng, FIRST_NAMES),
        pick(rng, LAST_NAMES)
    ))
}

pub fn company(rng: &mut StdRng) -> SynthValue {
    SynthValue::Text(format!(
        "{} {}",
        pick(rng, COMPANY_STEMS),
        pick(rng, COMPANY_SUFFIXES)
    ))
}

/// Nationality, drawn from the same country pool as location values.
pub fn nationality(rng: &mut StdRng) -> SynthValue {
    SynthValue::Text(pick(rng, location::COUNTRIES).to_string())
}

pub fn job(rng: &mut StdRng) -> SynthValue {
    SynthValue::Text(pick(rng, JOBS).to_string())
}

pub fn gender(rng: &mut StdRng) -> SynthValue {
    let pool = ["Male", "Female", "Nonbinary", "Other"];
    SynthValue::Text(pool[rng.gen_range(0..pool.len())].to_string())
}

/// German-locale gender values.
pub fn gender_de(rng: &mut StdRng) -> SynthValue {
    let pool = ["Männlich", "Weiblich", "Sonstige"];
    SynthValue::Text(pool[rng.gen_range(0..pool.len())].to_string())
}
