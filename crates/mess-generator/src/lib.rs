//! Field value generator for mess.
//!
//! This crate turns one [`FieldDefinition`](mess_core::FieldDefinition) into
//! one [`GeneratedValue`](mess_core::GeneratedValue). Each call first applies
//! the nullability gate, then dispatches on the field kind to a bounded
//! random primitive.
//!
//! # Architecture
//!
//! ```text
//! FieldDefinition
//!        │
//!        ▼
//! ┌──────────────────┐
//! │  nullable gate   │── null ──▶ GeneratedValue::Null
//! └────────┬─────────┘
//!          │
//!          ▼
//! ┌──────────────────┐
//! │  kind dispatch   │  int / float / string / json / date / time / enum / set
//! └────────┬─────────┘
//!          │
//!          ▼
//!    GeneratedValue
//! ```
//!
//! # Example
//!
//! ```rust
//! use mess_core::{FieldDefinition, FieldKind, IntRange};
//! use mess_generator::FieldGenerator;
//!
//! let field = FieldDefinition::new(FieldKind::Int(IntRange::new(-5, 5)));
//! let mut generator = FieldGenerator::new(42);
//! let value = generator.generate(&field).unwrap();
//! assert!(value.as_int().is_some());
//! ```
//!
//! # Concurrency
//!
//! Generation only reads the schema. Give every worker its own RNG
//! (e.g. [`FieldGenerator::for_worker`]) and share the schema by reference.

pub mod generator;
pub mod generators;

// Re-exports for convenience
pub use generator::{FieldGenerator, GenerateError};
pub use generators::{generate_field, generate_raw, ValueGenerator};
