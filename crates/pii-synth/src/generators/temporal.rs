//! Date and time value generators.

use super::pick;
use crate::SynthValue;
use chrono::{DateTime, Duration, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::Rng;

const DAYS_OF_WEEK: &[&str] = &[
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

// Anchor for random date arithmetic. Keeps generated dates inside a
// plausible 1970..2030 window.
fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(1970, 1, 1).unwrap_or_default()
}

pub fn day_of_week(rng: &mut StdRng) -> SynthValue {
    SynthValue::Text(pick(rng, DAYS_OF_WEEK).to_string())
}

/// Calendar date between 1970 and 2030, `YYYY-MM-DD`.
pub fn date(rng: &mut StdRng) -> SynthValue {
    let day = epoch() + Duration::days(rng.gen_range(0..22_000));
    SynthValue::Text(day.format("%Y-%m-%d").to_string())
}

/// Date of birth for someone aged roughly 18 to 90.
pub fn date_of_birth(rng: &mut StdRng) -> SynthValue {
    let age_days = rng.gen_range(18 * 365..90 * 365);
    let day = Utc::now().date_naive() - Duration::days(age_days);
    SynthValue::Text(day.format("%Y-%m-%d").to_string())
}

pub fn year(rng: &mut StdRng) -> SynthValue {
    SynthValue::Int(rng.gen_range(1940..=2010))
}

/// Month number as a zero-padded string, `01`..`12`.
pub fn month(rng: &mut StdRng) -> SynthValue {
    SynthValue::Text(format!("{:02}", rng.gen_range(1..=12)))
}

/// ISO-8601 timestamp between 2000-01-01 and roughly 2030.
pub fn datetime_iso(rng: &mut StdRng) -> SynthValue {
    let base = 946_684_800i64; // 2000-01-01T00:00:00Z
    let ts = base + rng.gen_range(0..946_080_000i64);
    let dt = DateTime::from_timestamp(ts, 0).unwrap_or_else(Utc::now);
    SynthValue::Text(dt.to_rfc3339())
}
