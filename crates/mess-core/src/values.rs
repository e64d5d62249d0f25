//! Generated value representation.
//!
//! A [`GeneratedValue`] carries no type metadata beyond its own shape;
//! callers interpret it against the [`FieldDefinition`](crate::FieldDefinition)
//! it was generated from.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use num_bigint::BigInt;
use serde_json::json;

/// Format used when rendering dates.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Format used when rendering times.
pub const TIME_FORMAT: &str = "%H:%M:%S";
/// Format used when rendering date-times.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A single generated field value.
#[derive(Debug, Clone, PartialEq)]
pub enum GeneratedValue {
    /// Null value
    Null,

    /// Arbitrary-precision integer
    Int(BigInt),

    /// Fixed-precision decimal stored as a string
    Decimal {
        /// String representation with exactly `scale` fractional digits
        value: String,
        /// Total number of digits
        precision: u32,
        /// Number of digits after decimal point
        scale: u32,
    },

    /// Text value
    Text(String),

    /// Calendar date
    Date(NaiveDate),

    /// Time of day
    Time(NaiveTime),

    /// Date and time without timezone
    DateTime(NaiveDateTime),

    /// Structured document
    Json(serde_json::Value),

    /// Subset of a set field's options
    Set(Vec<String>),
}

impl GeneratedValue {
    /// Create a new decimal value.
    pub fn decimal(value: impl Into<String>, precision: u32, scale: u32) -> Self {
        Self::Decimal {
            value: value.into(),
            precision,
            scale,
        }
    }

    /// Check if this value is null.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Try to get this value as an integer.
    pub fn as_int(&self) -> Option<&BigInt> {
        match self {
            Self::Int(i) => Some(i),
            _ => None,
        }
    }

    /// Try to get this value as a string reference.
    ///
    /// Decimals are returned in their string form.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            Self::Decimal { value, .. } => Some(value),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<&NaiveDate> {
        match self {
            Self::Date(d) => Some(d),
            _ => None,
        }
    }

    pub fn as_time(&self) -> Option<&NaiveTime> {
        match self {
            Self::Time(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_datetime(&self) -> Option<&NaiveDateTime> {
        match self {
            Self::DateTime(dt) => Some(dt),
            _ => None,
        }
    }

    /// Try to get this value as a JSON document.
    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(v) => Some(v),
            _ => None,
        }
    }

    /// Try to get this value as a set.
    pub fn as_set(&self) -> Option<&[String]> {
        match self {
            Self::Set(items) => Some(items),
            _ => None,
        }
    }

    /// Render this value as JSON.
    ///
    /// Integers outside `i64` and decimals become strings so no digit is lost.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Self::Null => serde_json::Value::Null,
            Self::Int(i) => match i64::try_from(i) {
                Ok(small) => json!(small),
                Err(_) => json!(i.to_string()),
            },
            Self::Decimal { value, .. } => json!(value),
            Self::Text(s) => json!(s),
            Self::Date(d) => json!(d.format(DATE_FORMAT).to_string()),
            Self::Time(t) => json!(t.format(TIME_FORMAT).to_string()),
            Self::DateTime(dt) => json!(dt.format(DATETIME_FORMAT).to_string()),
            Self::Json(v) => v.clone(),
            Self::Set(items) => json!(items),
        }
    }
}

impl From<BigInt> for GeneratedValue {
    fn from(value: BigInt) -> Self {
        Self::Int(value)
    }
}
