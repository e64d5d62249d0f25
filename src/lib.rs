//! mess - synthetic table rows from a declarative schema.
//!
//! The schema model lives in [`mess_core`] and value generation in
//! [`mess_generator`]; this crate composes them into whole rows and
//! provides the command-line front end.

pub mod args;
pub mod commands;
pub mod sample;

pub use args::{CheckArgs, SampleArgs};
pub use sample::{Row, RowIterator, RowSampler};
