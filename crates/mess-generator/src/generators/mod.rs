//! Individual value generators for the different field kinds.
//!
//! This module provides the dispatch from a field definition to the
//! primitive that produces its value.

pub mod choice;
pub mod json;
pub mod nullable;
pub mod numeric;
pub mod text;
pub mod timestamp;

use crate::generator::GenerateError;
use mess_core::{FieldDefinition, FieldKind, GeneratedValue, RawField, StringShape};
use rand::Rng;
use timestamp::Temporal;

/// Trait for generating values.
pub trait ValueGenerator {
    /// Generate a value using the given RNG.
    fn generate<R: Rng>(&self, rng: &mut R) -> Result<GeneratedValue, GenerateError>;
}

impl ValueGenerator for FieldDefinition {
    fn generate<R: Rng>(&self, rng: &mut R) -> Result<GeneratedValue, GenerateError> {
        if nullable::is_null(rng, self.nullable_rate) {
            return Ok(GeneratedValue::Null);
        }

        self.kind.generate(rng)
    }
}

impl ValueGenerator for FieldKind {
    fn generate<R: Rng>(&self, rng: &mut R) -> Result<GeneratedValue, GenerateError> {
        self.validate()?;

        let value = match self {
            FieldKind::Int(range) => numeric::generate_int_range(rng, range),

            FieldKind::Float(shape) => numeric::generate_decimal(rng, shape),

            FieldKind::Date => timestamp::generate_temporal(rng, Temporal::Date),
            FieldKind::Time => timestamp::generate_temporal(rng, Temporal::Time),
            FieldKind::DateTime => timestamp::generate_temporal(rng, Temporal::DateTime),

            FieldKind::Json(shape) => GeneratedValue::Json(json::generate_json(rng, shape.num)),

            FieldKind::Enum(options) => choice::generate_enum(rng, options)?,

            FieldKind::Set(options) => choice::generate_set(rng, options),

            FieldKind::String(shape) => GeneratedValue::Text(match shape {
                StringShape::Ascii {
                    min_length,
                    max_length,
                } => text::generate_ascii(rng, *min_length, *max_length),
                StringShape::Word { num } => text::generate_words(rng, *num),
                StringShape::Sentence { num } => text::generate_sentences(rng, *num),
                StringShape::Paragraph { num } => text::generate_paragraphs(rng, *num),
            }),
        };

        Ok(value)
    }
}

/// Generate a value for a validated field definition.
pub fn generate_field<R: Rng>(
    field: &FieldDefinition,
    rng: &mut R,
) -> Result<GeneratedValue, GenerateError> {
    field.generate(rng)
}

/// Generate a value for a field that has not been through schema validation.
///
/// An unknown type tag yields [`GenerateError::UnsupportedType`].
pub fn generate_raw<R: Rng>(field: &RawField, rng: &mut R) -> Result<GeneratedValue, GenerateError> {
    let definition = FieldDefinition::try_from(field)?;
    generate_field(&definition, rng)
}
