//! Row sampling over a validated schema.
//!
//! A row is the schema's fields in key order, each generated independently.

use mess_core::{GeneratedValue, Schema};
use mess_generator::{FieldGenerator, GenerateError};
use std::io::Write;

/// One generated row.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// Position of this row in the sampling run
    pub index: u64,
    /// Field values in key order
    pub values: Vec<(String, GeneratedValue)>,
}

impl Row {
    /// Get a field value by name.
    pub fn get(&self, name: &str) -> Option<&GeneratedValue> {
        self.values
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Render the row as a JSON object.
    pub fn to_json(&self) -> serde_json::Value {
        let object = self
            .values
            .iter()
            .map(|(name, value)| (name.clone(), value.to_json()))
            .collect();
        serde_json::Value::Object(object)
    }

    /// Render the row as a single JSON line (without trailing newline).
    pub fn to_jsonl(&self) -> String {
        self.to_json().to_string()
    }
}

/// Generates rows for one schema from a seeded random stream.
pub struct RowSampler<'a> {
    schema: &'a Schema,
    generator: FieldGenerator,
    index: u64,
}

impl<'a> RowSampler<'a> {
    /// Create a sampler with the given seed.
    pub fn new(schema: &'a Schema, seed: u64) -> Self {
        tracing::debug!(table = schema.table(), seed, "Creating row sampler");
        Self {
            schema,
            generator: FieldGenerator::new(seed),
            index: 0,
        }
    }

    /// Get the current row index.
    pub fn current_index(&self) -> u64 {
        self.index
    }

    /// Generate the next row.
    pub fn next_row(&mut self) -> Result<Row, GenerateError> {
        let schema = self.schema;
        let values = schema
            .iter_fields()
            .map(|(name, field)| {
                self.generator
                    .generate(field)
                    .map(|value| (name.to_string(), value))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let row = Row {
            index: self.index,
            values,
        };
        self.index += 1;
        Ok(row)
    }

    /// Generate `count` rows lazily.
    pub fn rows(&mut self, count: u64) -> RowIterator<'_, 'a> {
        RowIterator {
            sampler: self,
            remaining: count,
        }
    }

    /// Write `count` rows as JSON lines, returning the number written.
    ///
    /// Stops at the first generation error.
    pub fn write_jsonl<W: Write>(&mut self, writer: &mut W, count: u64) -> anyhow::Result<u64> {
        let mut written = 0;
        for row in self.rows(count) {
            writeln!(writer, "{}", row?.to_jsonl())?;
            written += 1;
        }
        writer.flush()?;
        Ok(written)
    }
}

/// Iterator that lazily generates rows.
pub struct RowIterator<'s, 'a> {
    sampler: &'s mut RowSampler<'a>,
    remaining: u64,
}

impl Iterator for RowIterator<'_, '_> {
    type Item = Result<Row, GenerateError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        self.remaining -= 1;
        Some(self.sampler.next_row())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.remaining as usize;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for RowIterator<'_, '_> {}
