//! Command handlers.

use crate::args::{CheckArgs, SampleArgs};
use crate::sample::RowSampler;
use anyhow::Context;
use mess_core::Schema;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Default buffer size for JSONL writing.
pub const DEFAULT_BUFFER_SIZE: usize = 8192;

fn load_schema(path: &Path) -> anyhow::Result<Schema> {
    Schema::from_file(path).with_context(|| format!("Failed to load schema: {}", path.display()))
}

/// Run the check command, describing the validated schema on `out`.
pub fn run_check<W: Write>(args: &CheckArgs, out: &mut W) -> anyhow::Result<()> {
    let schema = load_schema(&args.schema)?;

    writeln!(out, "table: {}", schema.table())?;
    writeln!(out, "fields:")?;
    for (name, field) in schema.iter_fields() {
        let marker = if schema.is_primary_key(name) {
            " [primary key]"
        } else {
            ""
        };
        writeln!(
            out,
            "  {name} ({}, nullable {}%){marker}",
            field.field_type(),
            field.nullable_rate.percent()
        )?;
    }

    if !schema.unique_keys().is_empty() {
        writeln!(out, "unique keys:")?;
        for group in schema.unique_keys() {
            writeln!(out, "  ({})", group.join(", "))?;
        }
    }

    tracing::info!(
        "Schema '{}' is valid ({} fields)",
        schema.table(),
        schema.keys().len()
    );
    Ok(())
}

/// Run the sample command, returning the number of rows written.
pub fn run_sample(args: &SampleArgs) -> anyhow::Result<u64> {
    let schema = load_schema(&args.schema)?;
    let mut sampler = RowSampler::new(&schema, args.seed);

    tracing::info!(
        "Generating {} rows for table '{}' (seed {})",
        args.count,
        schema.table(),
        args.seed
    );

    let written = match &args.output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {}", path.display()))?;
            let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, file);
            sampler.write_jsonl(&mut writer, args.count)?
        }
        None => {
            let stdout = std::io::stdout();
            let mut writer = BufWriter::with_capacity(DEFAULT_BUFFER_SIZE, stdout.lock());
            sampler.write_jsonl(&mut writer, args.count)?
        }
    };

    tracing::info!("Wrote {written} rows");
    Ok(written)
}
