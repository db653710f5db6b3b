//! Tangle command implementation.

use std::fs::File;
use std::io::{self, BufReader};
use std::path::PathBuf;

use crate::config::Config;
use crate::errors::Result;
use crate::interface::Tangler;

/// Options for the tangle command.
#[derive(Debug, Clone, Default)]
pub struct TangleOptions {
    /// The document to tangle.
    pub document: PathBuf,
    /// Dry run - show what would be done without doing it.
    pub dry_run: bool,
}

/// Executes the tangle command.
pub fn tangle(config: Config, options: TangleOptions) -> Result<()> {
    let tangler = Tangler::new(config)?;

    if options.dry_run {
        let output = tangler.plan(&options.document)?;
        let input = BufReader::new(File::open(&options.document)?);
        let stats = tangler.tangle_stream(input, io::sink())?;
        println!(
            "Would write {} lines from {} blocks to {} (sha256 {})",
            stats.lines_written,
            stats.blocks(),
            output.display(),
            stats.short_digest()
        );
        return Ok(());
    }

    tangler.tangle(&options.document)?;
    Ok(())
}
