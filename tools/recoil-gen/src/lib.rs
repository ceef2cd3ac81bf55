//! Recoil table compiler
//!
//! Turns the recoil patterns recorded in the web editor (`client/specs.json`)
//! into `recoil.inc`, the table of static arrays the Arduino mouse firmware
//! compiles in.
//!
//! The pipeline is load → validate → pad → render → emit. Rendering lives in
//! [`generators::c`] and is pure; [`generate`] does the console echo and the
//! file write.

pub mod error;
pub mod generators;
pub mod model;
pub mod output;
pub mod padding;

pub use error::{RecoilError, Result};
pub use model::{Magazine, RecoilProfile, RecoilTable};

use std::io::Write;
use std::path::Path;

/// Where the editor exports recoil patterns, relative to `processing/`
pub const DEFAULT_INPUT_PATH: &str = "../client/specs.json";

/// Header included by the mouse firmware, relative to `processing/`
pub const DEFAULT_OUTPUT_PATH: &str = "../arduino_mouse/src/recoil.inc";

/// Rendered output of one compiler run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// `"<count> recoils, max length <n>"`
    pub summary: String,
    /// Full header text
    pub header: String,
}

/// Render a table without touching the filesystem
pub fn compile(table: &RecoilTable) -> Result<Generated> {
    Ok(Generated {
        summary: generators::c::summary_line(table),
        header: generators::c::generate_header(table)?,
    })
}

/// Compile `input` into `output`, echoing the summary and header to `console`
pub fn generate(input: &Path, output: &Path, console: &mut impl Write) -> Result<Generated> {
    tracing::info!("Reading recoil specs from {}", input.display());
    let table = RecoilTable::load(input)?;
    let generated = compile(&table)?;

    writeln!(console, "{}", generated.summary).map_err(RecoilError::Console)?;
    writeln!(console, "{}", generated.header).map_err(RecoilError::Console)?;

    output::write_atomic(output, &generated.header)?;
    tracing::info!("Generated header: {}", output.display());

    Ok(generated)
}

/// Check that `output` matches what `input` would generate
///
/// A missing `output` counts as out of sync.
pub fn check(input: &Path, output: &Path) -> Result<bool> {
    let table = RecoilTable::load(input)?;
    let fresh = compile(&table)?;

    let in_sync = match std::fs::read_to_string(output) {
        Ok(existing) => existing == fresh.header,
        Err(e) => {
            tracing::debug!("Could not read {}: {}", output.display(), e);
            false
        }
    };

    if in_sync {
        tracing::info!("✓ Header in sync: {}", output.display());
    } else {
        tracing::warn!("✗ Header out of sync: {}", output.display());
    }

    Ok(in_sync)
}
