//! Seeded field generator and generation errors.

use crate::generators::generate_field;
use mess_core::{FieldDefinition, FieldError, FieldType, GeneratedValue, Schema};
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Error type for generator operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerateError {
    /// Type tag outside the supported taxonomy
    #[error("invalid field type: {0}")]
    UnsupportedType(String),

    /// Enumeration without any option to choose from
    #[error("{0} options should not be empty")]
    EmptyOptions(FieldType),

    /// Configuration the generator cannot honor
    #[error("invalid field shape: {0}")]
    InvalidShape(#[source] FieldError),

    /// Field not found in schema
    #[error("Field not found: {0}")]
    UnknownField(String),
}

impl From<FieldError> for GenerateError {
    fn from(err: FieldError) -> Self {
        match err {
            FieldError::UnsupportedType(tag) => Self::UnsupportedType(tag),
            FieldError::EmptyOptions(field_type) => Self::EmptyOptions(field_type),
            other => Self::InvalidShape(other),
        }
    }
}

/// Field generator owning an independent random stream.
///
/// The same seed yields the same sequence of values for the same calls.
pub struct FieldGenerator {
    rng: StdRng,
}

impl FieldGenerator {
    /// Create a new generator with the given seed.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Create a generator seeded from OS entropy.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Create the generator for one of several concurrent workers.
    ///
    /// Streams for different workers are independent; the same
    /// `(seed, worker)` pair always yields the same stream.
    pub fn for_worker(seed: u64, worker: u64) -> Self {
        Self::new(seed.wrapping_add(worker.wrapping_mul(0x9E3779B97F4A7C15)))
    }

    /// Generate one value for the field.
    pub fn generate(&mut self, field: &FieldDefinition) -> Result<GeneratedValue, GenerateError> {
        generate_field(field, &mut self.rng)
    }

    /// Generate one value for the schema field called `name`.
    pub fn generate_by_name(
        &mut self,
        schema: &Schema,
        name: &str,
    ) -> Result<GeneratedValue, GenerateError> {
        let field = schema
            .field(name)
            .ok_or_else(|| GenerateError::UnknownField(name.to_string()))?;
        tracing::trace!(table = schema.table(), field = name, "Generating value");
        self.generate(field)
    }
}
