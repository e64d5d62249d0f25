//! Calendar value generators.
//!
//! `date`, `datetime` and `time` fields share one primitive: a uniform
//! second in [`MIN_TIMESTAMP`, `MAX_TIMESTAMP`], projected to the shape of
//! the field type.

use chrono::{DateTime, NaiveDateTime};
use mess_core::GeneratedValue;
use rand::Rng;

/// 1970-01-01 00:00:00 UTC.
pub const MIN_TIMESTAMP: i64 = 0;

/// 2037-12-31 23:59:59 UTC.
pub const MAX_TIMESTAMP: i64 = 2_145_916_799;

/// Generate a random timestamp within the supported range.
pub fn generate_timestamp<R: Rng>(rng: &mut R) -> NaiveDateTime {
    let secs = rng.gen_range(MIN_TIMESTAMP..=MAX_TIMESTAMP);
    DateTime::from_timestamp(secs, 0)
        .map(|dt| dt.naive_utc())
        .unwrap_or_default()
}

/// Projection applied to a generated timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Temporal {
    Date,
    Time,
    DateTime,
}

/// Generate a date, time or date-time value.
pub fn generate_temporal<R: Rng>(rng: &mut R, temporal: Temporal) -> GeneratedValue {
    let timestamp = generate_timestamp(rng);

    match temporal {
        Temporal::Date => GeneratedValue::Date(timestamp.date()),
        Temporal::Time => GeneratedValue::Time(timestamp.time()),
        Temporal::DateTime => GeneratedValue::DateTime(timestamp),
    }
}
