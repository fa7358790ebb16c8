use std::io;
use tracing::{debug, info, info_span};

use crate::config::GeneratorConfig;
use crate::error::GenError;
use crate::format::{format_output, render};
use crate::mapping::{MappingStats, build_mapping, split_entries};

/// The formatted table produced by one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// Output lines without terminators, braces included.
    pub lines: Vec<String>,
    pub stats: MappingStats,
}

impl Generated {
    /// The exact bytes written to the output file.
    pub fn rendered(&self) -> String {
        render(&self.lines)
    }
}

/// Result of comparing an existing output file with a fresh generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckOutcome {
    UpToDate,
    Stale,
    Missing,
}

/// Read the input and format the table without writing anything.
pub fn prepare(config: &GeneratorConfig) -> Result<Generated, GenError> {
    let _span = info_span!("prepare", input = %config.input.display()).entered();
    let source =
        std::fs::read_to_string(&config.input).map_err(|err| GenError::read(&config.input, err))?;
    debug!(
        bytes = source.len(),
        prefix = %config.prefix,
        "read enumerator list"
    );

    let mapping = build_mapping(split_entries(&source), &config.prefix);
    let stats = mapping.stats();
    debug!(
        entries = stats.entries,
        discarded = stats.discarded,
        overwritten = stats.overwritten,
        "built display name mapping"
    );

    let lines = format_output(&mapping)?;
    Ok(Generated { lines, stats })
}

/// Generate the table and write it to the configured output path.
pub fn generate(config: &GeneratorConfig) -> Result<Generated, GenError> {
    let _span = info_span!("generate", output = %config.output.display()).entered();
    let generated = prepare(config)?;
    std::fs::write(&config.output, generated.rendered())
        .map_err(|err| GenError::write(&config.output, err))?;
    info!(
        output = %config.output.display(),
        entries = generated.stats.entries,
        "wrote lookup table"
    );
    Ok(generated)
}

/// Check whether the output file already holds what `generate` would write.
pub fn check(config: &GeneratorConfig) -> Result<CheckOutcome, GenError> {
    let _span = info_span!("check", output = %config.output.display()).entered();
    let generated = prepare(config)?;
    let existing = match std::fs::read_to_string(&config.output) {
        Ok(existing) => existing,
        Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(CheckOutcome::Missing),
        Err(err) => return Err(GenError::read(&config.output, err)),
    };

    let outcome = if existing == generated.rendered() {
        CheckOutcome::UpToDate
    } else {
        CheckOutcome::Stale
    };
    debug!(output = %config.output.display(), ?outcome, "checked lookup table");
    Ok(outcome)
}
