// SPDX-License-Identifier: PMPL-1.0-or-later

//! Country table to source map entries.
//!
//! Reads the two leading columns of the world table (display name, country
//! code) and emits one map-assignment line per row, ready for inclusion in
//! the application's country lookup:
//!
//! ```text
//! map["FR"] = _("France");
//! ```
//!
//! The code column is an identifier and gets upper-cased; the name column
//! is a human-readable label wrapped in a translation-marker call. Both are
//! embedded verbatim, and rows come out in table order. A row that is
//! missing either column aborts the run.

mod csv;

use anyhow::{bail, Context, Result};
use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;

/// Default table name, resolved against the working directory.
pub const WORLD_TABLE: &str = "world.csv";

/// Configuration for a conversion run
pub struct ConvertConfig {
    /// Table to read (usually [`WORLD_TABLE`])
    pub input: PathBuf,
    /// Destination file; stdout when `None`
    pub output: Option<PathBuf>,
}

/// Renders one map entry from a (name, code) pair.
pub fn render_entry(name: &str, code: &str) -> String {
    format!("map[\"{}\"] = _(\"{}\");", code.to_uppercase(), name)
}

/// Streams rows from `reader`, writing one rendered line per row.
///
/// Returns the number of entries written. A row with fewer than two fields
/// (a blank line counts) aborts the run; everything rendered before it is
/// flushed to `writer` before the error is returned.
pub fn convert(reader: impl BufRead, writer: &mut impl Write) -> Result<usize> {
    let mut emitted = 0;

    for (idx, line) in reader.lines().enumerate() {
        let line = line.with_context(|| format!("reading row {}", idx + 1))?;

        let fields = csv::split_row(&line);
        if fields.len() < 2 {
            writer.flush()?;
            bail!("row {} has fewer than 2 fields", idx + 1);
        }

        writeln!(writer, "{}", render_entry(&fields[0], &fields[1]))?;
        emitted += 1;
    }

    writer.flush()?;
    Ok(emitted)
}

/// Runs a conversion per `config`.
pub fn run(config: &ConvertConfig) -> Result<usize> {
    let file = File::open(&config.input)
        .with_context(|| format!("opening {}", config.input.display()))?;
    let reader = BufReader::new(file);

    match &config.output {
        Some(path) => {
            let mut out = File::create(path)
                .with_context(|| format!("creating {}", path.display()))?;
            convert(reader, &mut out)
        }
        None => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            convert(reader, &mut out)
        }
    }
}
