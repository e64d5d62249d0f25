//! Field definitions for the mess schema.
//!
//! A field is described twice:
//!
//! - [`RawField`] mirrors the on-disk format, where every per-type
//!   configuration object may be present regardless of the active `type`.
//! - [`FieldDefinition`] is the validated form: a [`FieldKind`] tagged union
//!   carrying exactly one payload for its type tag.
//!
//! # Format
//!
//! ```yaml
//! nullable_rate: 10
//! type: string
//! string:
//!   type: ascii
//!   ascii:
//!     min_length: 4
//!     max_length: 16
//! ```
//!
//! Integer bounds accept either a number or a decimal string, so ranges
//! beyond 64 bits can be written as `min: "-170141183460469231731687303715884105729"`.

use num_bigint::BigInt;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Default `num` for `json` fields that carry no configuration.
pub const DEFAULT_JSON_NUM: usize = 3;

/// Largest `float` precision, the widest SQL `DECIMAL`.
pub const MAX_PRECISION: u32 = 65;

/// Largest `string.ascii.max_length`.
pub const MAX_ASCII_LENGTH: usize = 65_535;

/// Largest `num` for `word`, `sentence` and `paragraph` strings.
pub const MAX_TEXT_COUNT: usize = 1_000;

/// Largest `json.num`.
pub const MAX_JSON_KEYS: usize = 1_000;

// ============================================================================
// Error Types
// ============================================================================

/// Error type for a single field definition.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FieldError {
    /// Type tag outside the supported taxonomy
    #[error("unsupported field type {0:?}")]
    UnsupportedType(String),

    /// String sub-shape outside ascii/word/sentence/paragraph
    #[error("unsupported string type {0:?}")]
    UnsupportedStringType(String),

    /// Null probability outside [0, 100]
    #[error("nullable rate {0} is not within [0, 100]")]
    NullableRateOutOfRange(i64),

    /// Configuration object required by the active type is absent
    #[error("missing {0:?} configuration")]
    MissingConfig(&'static str),

    /// Integer range with min greater than max
    #[error("int range min {min} is greater than max {max}")]
    InvalidIntRange { min: BigInt, max: BigInt },

    /// Decimal shape that cannot hold any digit
    #[error("float precision {precision} cannot hold scale {scale}")]
    InvalidPrecision { precision: u32, scale: u32 },

    /// ASCII length range with min greater than max
    #[error("ascii min_length {min} is greater than max_length {max}")]
    InvalidLengthRange { min: usize, max: usize },

    /// Enumeration without any option to choose from
    #[error("{0} options should not be empty")]
    EmptyOptions(FieldType),

    /// Size parameter above its supported maximum
    #[error("{setting} {value} exceeds the maximum of {limit}")]
    LimitExceeded {
        setting: &'static str,
        value: usize,
        limit: usize,
    },
}

// ============================================================================
// Type Tags
// ============================================================================

/// Type tag of a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    Int,
    Float,
    String,
    Json,
    Date,
    DateTime,
    Time,
    Enum,
    Set,
}

impl FieldType {
    /// All supported type tags.
    pub const ALL: [FieldType; 9] = [
        Self::Int,
        Self::Float,
        Self::String,
        Self::Json,
        Self::Date,
        Self::DateTime,
        Self::Time,
        Self::Enum,
        Self::Set,
    ];

    /// The tag as written in schema files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Float => "float",
            Self::String => "string",
            Self::Json => "json",
            Self::Date => "date",
            Self::DateTime => "datetime",
            Self::Time => "time",
            Self::Enum => "enum",
            Self::Set => "set",
        }
    }

    /// Check if this tag produces a calendar value.
    pub fn is_temporal(&self) -> bool {
        matches!(self, Self::Date | Self::DateTime | Self::Time)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldType {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| FieldError::UnsupportedType(s.to_string()))
    }
}

/// Sub-shape tag of a `string` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StringType {
    Ascii,
    Word,
    Sentence,
    Paragraph,
}

impl StringType {
    /// The tag as written in schema files.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ascii => "ascii",
            Self::Word => "word",
            Self::Sentence => "sentence",
            Self::Paragraph => "paragraph",
        }
    }
}

impl fmt::Display for StringType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for StringType {
    type Err = FieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ascii" => Ok(Self::Ascii),
            "word" => Ok(Self::Word),
            "sentence" => Ok(Self::Sentence),
            "paragraph" => Ok(Self::Paragraph),
            _ => Err(FieldError::UnsupportedStringType(s.to_string())),
        }
    }
}

// ============================================================================
// Raw Types (On-Disk Format)
// ============================================================================

/// Arbitrary-precision integer as written in a schema file.
///
/// Deserializes from any integer that fits 128 bits or from a decimal
/// string of unbounded magnitude. Serializes as a number when it fits
/// `i64`, otherwise as a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BigIntLiteral(pub BigInt);

impl From<BigInt> for BigIntLiteral {
    fn from(value: BigInt) -> Self {
        Self(value)
    }
}

impl From<i64> for BigIntLiteral {
    fn from(value: i64) -> Self {
        Self(BigInt::from(value))
    }
}

impl Serialize for BigIntLiteral {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match i64::try_from(&self.0) {
            Ok(v) => serializer.serialize_i64(v),
            Err(_) => serializer.serialize_str(&self.0.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for BigIntLiteral {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        use serde::de::{Error, Visitor};

        struct BigIntVisitor;

        impl Visitor<'_> for BigIntVisitor {
            type Value = BigIntLiteral;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("an integer or a decimal integer string")
            }

            fn visit_i64<E: Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(BigIntLiteral(BigInt::from(v)))
            }

            fn visit_u64<E: Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(BigIntLiteral(BigInt::from(v)))
            }

            fn visit_i128<E: Error>(self, v: i128) -> Result<Self::Value, E> {
                Ok(BigIntLiteral(BigInt::from(v)))
            }

            fn visit_u128<E: Error>(self, v: u128) -> Result<Self::Value, E> {
                Ok(BigIntLiteral(BigInt::from(v)))
            }

            // Integers beyond 64 bits arrive here from JSON and have already lost digits
            fn visit_f64<E: Error>(self, v: f64) -> Result<Self::Value, E> {
                Err(E::custom(format!(
                    "expected an integer, found {v}; write integers beyond 64 bits as strings"
                )))
            }

            fn visit_str<E: Error>(self, v: &str) -> Result<Self::Value, E> {
                BigInt::from_str(v.trim())
                    .map(BigIntLiteral)
                    .map_err(|e| E::custom(format!("invalid integer {v:?}: {e}")))
            }
        }

        deserializer.deserialize_any(BigIntVisitor)
    }
}

/// `int` configuration object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawIntConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<BigIntLiteral>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<BigIntLiteral>,
}

/// `float` configuration object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawFloatConfig {
    #[serde(default)]
    pub precision: u32,
    #[serde(default)]
    pub scale: u32,
}

/// `string.ascii` configuration object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawAsciiConfig {
    #[serde(default)]
    pub min_length: usize,
    #[serde(default)]
    pub max_length: usize,
}

/// Configuration object carrying a single count (`word`, `sentence`, `paragraph`, `json`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawCountConfig {
    #[serde(default)]
    pub num: usize,
}

/// `string` configuration object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawStringConfig {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub string_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ascii: Option<RawAsciiConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub word: Option<RawCountConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sentence: Option<RawCountConfig>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub paragraph: Option<RawCountConfig>,
}

/// `enum` / `set` configuration object.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawOptionsConfig {
    #[serde(default)]
    pub options: Vec<String>,
}

/// Field as written in a schema file.
///
/// `date`, `time` and `datetime` objects carry nothing and are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawField {
    /// Probability, in percent, that a generated value is null
    #[serde(default)]
    pub nullable_rate: i64,

    /// Type tag
    #[serde(rename = "type")]
    pub field_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub int: Option<RawIntConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub float: Option<RawFloatConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub string: Option<RawStringConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub json: Option<RawCountConfig>,

    #[serde(rename = "enum", default, skip_serializing_if = "Option::is_none")]
    pub enumeration: Option<RawOptionsConfig>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub set: Option<RawOptionsConfig>,
}

// ============================================================================
// Validated Types
// ============================================================================

/// Probability, in percent, that a generated value is null.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NullableRate(u8);

impl NullableRate {
    /// Never null.
    pub const NEVER: Self = Self(0);
    /// Always null.
    pub const ALWAYS: Self = Self(100);

    /// Create a rate, returning `None` above 100.
    pub fn new(percent: u8) -> Option<Self> {
        (percent <= 100).then_some(Self(percent))
    }

    /// The rate in percent, within [0, 100].
    pub fn percent(self) -> u8 {
        self.0
    }
}

impl TryFrom<i64> for NullableRate {
    type Error = FieldError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        u8::try_from(value)
            .ok()
            .and_then(Self::new)
            .ok_or(FieldError::NullableRateOutOfRange(value))
    }
}

/// Inclusive integer range with arbitrary-precision bounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IntRange {
    pub min: BigInt,
    pub max: BigInt,
}

impl IntRange {
    pub fn new(min: impl Into<BigInt>, max: impl Into<BigInt>) -> Self {
        Self {
            min: min.into(),
            max: max.into(),
        }
    }
}

/// Fixed-precision decimal shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecimalShape {
    /// Total significant digits
    pub precision: u32,
    /// Digits after the decimal point
    pub scale: u32,
}

/// Size parameter for generated JSON documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonShape {
    pub num: usize,
}

impl Default for JsonShape {
    fn default() -> Self {
        Self {
            num: DEFAULT_JSON_NUM,
        }
    }
}

/// Shape of a generated string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StringShape {
    /// Printable ASCII with length in [min_length, max_length]
    Ascii { min_length: usize, max_length: usize },
    /// `num` words
    Word { num: usize },
    /// `num` sentences
    Sentence { num: usize },
    /// `num` paragraphs
    Paragraph { num: usize },
}

impl StringShape {
    pub fn string_type(&self) -> StringType {
        match self {
            Self::Ascii { .. } => StringType::Ascii,
            Self::Word { .. } => StringType::Word,
            Self::Sentence { .. } => StringType::Sentence,
            Self::Paragraph { .. } => StringType::Paragraph,
        }
    }
}

/// Type of a field together with the configuration its tag needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Int(IntRange),
    Float(DecimalShape),
    String(StringShape),
    Json(JsonShape),
    Date,
    DateTime,
    Time,
    /// Exactly one option per value
    Enum(Vec<String>),
    /// A subset of the options per value, original order kept
    Set(Vec<String>),
}

impl FieldKind {
    /// The type tag of this kind.
    pub fn field_type(&self) -> FieldType {
        match self {
            Self::Int(_) => FieldType::Int,
            Self::Float(_) => FieldType::Float,
            Self::String(_) => FieldType::String,
            Self::Json(_) => FieldType::Json,
            Self::Date => FieldType::Date,
            Self::DateTime => FieldType::DateTime,
            Self::Time => FieldType::Time,
            Self::Enum(_) => FieldType::Enum,
            Self::Set(_) => FieldType::Set,
        }
    }

    /// Check the invariants a generator relies on.
    ///
    /// Size parameters are capped so that generating a value always
    /// terminates with bounded memory.
    pub fn validate(&self) -> Result<(), FieldError> {
        match self {
            Self::Int(range) if range.min > range.max => Err(FieldError::InvalidIntRange {
                min: range.min.clone(),
                max: range.max.clone(),
            }),
            Self::Float(shape) if shape.precision == 0 || shape.scale > shape.precision => {
                Err(FieldError::InvalidPrecision {
                    precision: shape.precision,
                    scale: shape.scale,
                })
            }
            Self::Float(shape) => check_limit(
                "float.precision",
                shape.precision as usize,
                MAX_PRECISION as usize,
            ),
            Self::String(StringShape::Ascii {
                min_length,
                max_length,
            }) if min_length > max_length => Err(FieldError::InvalidLengthRange {
                min: *min_length,
                max: *max_length,
            }),
            Self::String(shape) => {
                let (setting, value, limit) = match shape {
                    StringShape::Ascii { max_length, .. } => {
                        ("string.ascii.max_length", *max_length, MAX_ASCII_LENGTH)
                    }
                    StringShape::Word { num } => ("string.word.num", *num, MAX_TEXT_COUNT),
                    StringShape::Sentence { num } => {
                        ("string.sentence.num", *num, MAX_TEXT_COUNT)
                    }
                    StringShape::Paragraph { num } => {
                        ("string.paragraph.num", *num, MAX_TEXT_COUNT)
                    }
                };
                check_limit(setting, value, limit)
            }
            Self::Json(shape) => check_limit("json.num", shape.num, MAX_JSON_KEYS),
            Self::Enum(options) if options.is_empty() => {
                Err(FieldError::EmptyOptions(FieldType::Enum))
            }
            _ => Ok(()),
        }
    }
}

fn check_limit(setting: &'static str, value: usize, limit: usize) -> Result<(), FieldError> {
    if value > limit {
        return Err(FieldError::LimitExceeded {
            setting,
            value,
            limit,
        });
    }
    Ok(())
}

/// Validated definition of one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    pub nullable_rate: NullableRate,
    pub kind: FieldKind,
}

impl FieldDefinition {
    /// Create a field that is never null.
    pub fn new(kind: FieldKind) -> Self {
        Self {
            nullable_rate: NullableRate::NEVER,
            kind,
        }
    }

    /// Create a field that is null with the given rate.
    pub fn nullable(kind: FieldKind, nullable_rate: NullableRate) -> Self {
        Self {
            nullable_rate,
            kind,
        }
    }

    pub fn field_type(&self) -> FieldType {
        self.kind.field_type()
    }
}

impl TryFrom<&RawField> for FieldDefinition {
    type Error = FieldError;

    fn try_from(raw: &RawField) -> Result<Self, Self::Error> {
        let field_type: FieldType = raw.field_type.parse()?;
        let nullable_rate = NullableRate::try_from(raw.nullable_rate)?;

        let kind = match field_type {
            FieldType::Int => {
                let config = raw.int.as_ref().ok_or(FieldError::MissingConfig("int"))?;
                let min = config
                    .min
                    .as_ref()
                    .ok_or(FieldError::MissingConfig("int.min"))?;
                let max = config
                    .max
                    .as_ref()
                    .ok_or(FieldError::MissingConfig("int.max"))?;
                FieldKind::Int(IntRange::new(min.0.clone(), max.0.clone()))
            }
            FieldType::Float => {
                let config = raw
                    .float
                    .as_ref()
                    .ok_or(FieldError::MissingConfig("float"))?;
                FieldKind::Float(DecimalShape {
                    precision: config.precision,
                    scale: config.scale,
                })
            }
            FieldType::String => {
                let config = raw
                    .string
                    .as_ref()
                    .ok_or(FieldError::MissingConfig("string"))?;
                FieldKind::String(string_shape(config)?)
            }
            FieldType::Json => FieldKind::Json(
                raw.json
                    .as_ref()
                    .map(|c| JsonShape { num: c.num })
                    .unwrap_or_default(),
            ),
            FieldType::Date => FieldKind::Date,
            FieldType::DateTime => FieldKind::DateTime,
            FieldType::Time => FieldKind::Time,
            FieldType::Enum => FieldKind::Enum(
                raw.enumeration
                    .as_ref()
                    .ok_or(FieldError::MissingConfig("enum"))?
                    .options
                    .clone(),
            ),
            FieldType::Set => FieldKind::Set(
                raw.set
                    .as_ref()
                    .ok_or(FieldError::MissingConfig("set"))?
                    .options
                    .clone(),
            ),
        };

        kind.validate()?;

        Ok(Self {
            nullable_rate,
            kind,
        })
    }
}

fn string_shape(config: &RawStringConfig) -> Result<StringShape, FieldError> {
    let string_type: StringType = config
        .string_type
        .as_deref()
        .ok_or(FieldError::MissingConfig("string.type"))?
        .parse()?;

    let count = |config: &Option<RawCountConfig>, key: &'static str| {
        config
            .as_ref()
            .map(|c| c.num)
            .ok_or(FieldError::MissingConfig(key))
    };

    match string_type {
        StringType::Ascii => {
            let ascii = config
                .ascii
                .as_ref()
                .ok_or(FieldError::MissingConfig("string.ascii"))?;
            Ok(StringShape::Ascii {
                min_length: ascii.min_length,
                max_length: ascii.max_length,
            })
        }
        StringType::Word => Ok(StringShape::Word {
            num: count(&config.word, "string.word")?,
        }),
        StringType::Sentence => Ok(StringShape::Sentence {
            num: count(&config.sentence, "string.sentence")?,
        }),
        StringType::Paragraph => Ok(StringShape::Paragraph {
            num: count(&config.paragraph, "string.paragraph")?,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: &str) -> Result<FieldDefinition, FieldError> {
        let raw: RawField = serde_json::from_str(json).unwrap();
        FieldDefinition::try_from(&raw)
    }

    #[test]
    fn test_field_type_tags() {
        for ty in FieldType::ALL {
            assert_eq!(ty.as_str().parse::<FieldType>().unwrap(), ty);
        }
        assert_eq!(
            "bool".parse::<FieldType>(),
            Err(FieldError::UnsupportedType("bool".to_string()))
        );
        assert!(FieldType::Time.is_temporal());
        assert!(!FieldType::Json.is_temporal());
    }

    #[test]
    fn test_parse_int_field() {
        let field = parse(r#"{"type": "int", "nullable_rate": 5, "int": {"min": -5, "max": 5}}"#)
            .unwrap();
        assert_eq!(field.nullable_rate.percent(), 5);
        assert_eq!(field.kind, FieldKind::Int(IntRange::new(-5, 5)));
    }

    #[test]
    fn test_parse_big_int_bounds_from_strings() {
        let field = parse(
            r#"{"type": "int", "int": {"min": "-100000000000000000000000000000", "max": "100000000000000000000000000000"}}"#,
        )
        .unwrap();
        let FieldKind::Int(range) = field.kind else {
            panic!("Expected Int kind");
        };
        assert_eq!(range.min.to_string(), "-100000000000000000000000000000");
        assert_eq!(range.max.to_string(), "100000000000000000000000000000");
    }

    #[test]
    fn test_big_int_rejects_lossy_float() {
        let result: Result<RawField, _> = serde_json::from_str(
            r#"{"type": "int", "int": {"min": 0, "max": 100000000000000000000000}}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_big_int_literal_serializes_compactly() {
        let small = BigIntLiteral::from(42);
        assert_eq!(serde_json::to_string(&small).unwrap(), "42");

        let big = BigIntLiteral(BigInt::from(i64::MAX) * 10);
        assert_eq!(
            serde_json::to_string(&big).unwrap(),
            "\"92233720368547758070\""
        );
    }

    #[test]
    fn test_parse_string_shapes() {
        let field = parse(
            r#"{"type": "string", "string": {"type": "ascii", "ascii": {"min_length": 2, "max_length": 8}, "word": {"num": 9}}}"#,
        )
        .unwrap();
        assert_eq!(
            field.kind,
            FieldKind::String(StringShape::Ascii {
                min_length: 2,
                max_length: 8
            })
        );

        let field =
            parse(r#"{"type": "string", "string": {"type": "paragraph", "paragraph": {"num": 3}}}"#)
                .unwrap();
        assert_eq!(field.kind, FieldKind::String(StringShape::Paragraph { num: 3 }));
    }

    #[test]
    fn test_unsupported_string_type() {
        let result = parse(r#"{"type": "string", "string": {"type": "emoji"}}"#);
        assert_eq!(
            result,
            Err(FieldError::UnsupportedStringType("emoji".to_string()))
        );
    }

    #[test]
    fn test_missing_config() {
        assert_eq!(
            parse(r#"{"type": "int"}"#),
            Err(FieldError::MissingConfig("int"))
        );
        assert_eq!(
            parse(r#"{"type": "int", "int": {"min": 1}}"#),
            Err(FieldError::MissingConfig("int.max"))
        );
        assert_eq!(
            parse(r#"{"type": "string", "string": {"type": "word"}}"#),
            Err(FieldError::MissingConfig("string.word"))
        );
    }

    #[test]
    fn test_temporal_fields_need_no_config() {
        assert_eq!(parse(r#"{"type": "date"}"#).unwrap().kind, FieldKind::Date);
        assert_eq!(
            parse(r#"{"type": "datetime", "datetime": {}}"#).unwrap().kind,
            FieldKind::DateTime
        );
        assert_eq!(parse(r#"{"type": "time"}"#).unwrap().kind, FieldKind::Time);
    }

    #[test]
    fn test_json_defaults_num() {
        assert_eq!(
            parse(r#"{"type": "json"}"#).unwrap().kind,
            FieldKind::Json(JsonShape {
                num: DEFAULT_JSON_NUM
            })
        );
        assert_eq!(
            parse(r#"{"type": "json", "json": {"num": 7}}"#).unwrap().kind,
            FieldKind::Json(JsonShape { num: 7 })
        );
    }

    #[test]
    fn test_invalid_ranges() {
        assert!(matches!(
            parse(r#"{"type": "int", "int": {"min": 5, "max": -5}}"#),
            Err(FieldError::InvalidIntRange { .. })
        ));
        assert_eq!(
            parse(r#"{"type": "float", "float": {"precision": 2, "scale": 3}}"#),
            Err(FieldError::InvalidPrecision {
                precision: 2,
                scale: 3
            })
        );
        assert_eq!(
            parse(r#"{"type": "string", "string": {"type": "ascii", "ascii": {"min_length": 9, "max_length": 1}}}"#),
            Err(FieldError::InvalidLengthRange { min: 9, max: 1 })
        );
    }

    #[test]
    fn test_size_limits() {
        assert!(parse(r#"{"type": "float", "float": {"precision": 65, "scale": 2}}"#).is_ok());
        assert_eq!(
            parse(r#"{"type": "float", "float": {"precision": 300000000, "scale": 2}}"#),
            Err(FieldError::LimitExceeded {
                setting: "float.precision",
                value: 300_000_000,
                limit: MAX_PRECISION as usize
            })
        );

        assert!(parse(
            r#"{"type": "string", "string": {"type": "ascii", "ascii": {"min_length": 0, "max_length": 65535}}}"#
        )
        .is_ok());
        assert_eq!(
            parse(r#"{"type": "string", "string": {"type": "ascii", "ascii": {"min_length": 18446744073709551614, "max_length": 18446744073709551615}}}"#),
            Err(FieldError::LimitExceeded {
                setting: "string.ascii.max_length",
                value: usize::MAX,
                limit: MAX_ASCII_LENGTH
            })
        );

        for shape in ["word", "sentence", "paragraph"] {
            let ok = format!(r#"{{"type": "string", "string": {{"type": "{shape}", "{shape}": {{"num": 1000}}}}}}"#);
            assert!(parse(&ok).is_ok(), "{shape} at the limit");

            let over = ok.replace("1000", "1001");
            assert!(
                matches!(
                    parse(&over),
                    Err(FieldError::LimitExceeded { value: 1001, limit: MAX_TEXT_COUNT, .. })
                ),
                "{shape} above the limit"
            );
        }

        assert!(parse(r#"{"type": "json", "json": {"num": 1000}}"#).is_ok());
        assert_eq!(
            parse(r#"{"type": "json", "json": {"num": 1001}}"#),
            Err(FieldError::LimitExceeded {
                setting: "json.num",
                value: 1001,
                limit: MAX_JSON_KEYS
            })
        );
    }

    #[test]
    fn test_nullable_rate_bounds() {
        assert_eq!(
            parse(r#"{"type": "date", "nullable_rate": 101}"#),
            Err(FieldError::NullableRateOutOfRange(101))
        );
        assert_eq!(
            parse(r#"{"type": "date", "nullable_rate": -1}"#),
            Err(FieldError::NullableRateOutOfRange(-1))
        );
        assert_eq!(NullableRate::new(100), Some(NullableRate::ALWAYS));
        assert_eq!(NullableRate::new(101), None);
    }

    #[test]
    fn test_enum_and_set_options() {
        assert_eq!(
            parse(r#"{"type": "enum", "enum": {"options": []}}"#),
            Err(FieldError::EmptyOptions(FieldType::Enum))
        );
        // An empty set only ever yields the empty subset
        assert_eq!(
            parse(r#"{"type": "set", "set": {"options": []}}"#).unwrap().kind,
            FieldKind::Set(vec![])
        );
    }

    #[test]
    fn test_ignores_payloads_of_other_types() {
        let field = parse(
            r#"{"type": "enum", "int": {"min": 9, "max": 0}, "float": {"precision": 0}, "enum": {"options": ["a"]}}"#,
        )
        .unwrap();
        assert_eq!(field.kind, FieldKind::Enum(vec!["a".to_string()]));
    }
}
