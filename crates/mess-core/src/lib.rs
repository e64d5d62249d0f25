//! Core types for the mess test data generator.
//!
//! This crate provides the foundational types shared by the generator and
//! the command-line tool:
//!
//! - [`FieldDefinition`] - One column's type, bounds and null probability
//! - [`Schema`] - Validated, canonicalized table schema loaded from JSON or YAML
//! - [`KeyIndex`] - Sorted field names and primary-key membership
//! - [`GeneratedValue`] - A single generated field value
//!
//! # Architecture
//!
//! ```text
//! mess-core (this crate)
//!    │
//!    ├─── mess-generator  (dispatches FieldDefinition -> GeneratedValue)
//!    │
//!    └─── mess            (CLI, row sampler, JSONL output)
//! ```
//!
//! # Example
//!
//! ```rust
//! use mess_core::Schema;
//!
//! let schema = Schema::from_json(r#"{
//!     "table": "users",
//!     "primary_keys": ["id"],
//!     "fields": {
//!         "id": {"type": "int", "int": {"min": 1, "max": 100}},
//!         "name": {"type": "string", "string": {"type": "word", "word": {"num": 2}}}
//!     }
//! }"#).unwrap();
//!
//! assert_eq!(schema.keys(), ["id", "name"]);
//! assert!(schema.is_primary_key("id"));
//! ```

pub mod field;
pub mod schema;
pub mod values;

// Re-exports for convenience
pub use field::{
    DecimalShape, FieldDefinition, FieldError, FieldKind, FieldType, IntRange, JsonShape,
    NullableRate, RawField, StringShape, StringType,
};
pub use schema::{ErrorKind, KeyIndex, RawSchema, Schema, SchemaError};
pub use values::GeneratedValue;
