//! The tangle operation.

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::errors::{Result, TangleError};
use crate::io::ContentHasher;
use crate::model::{derive_output_path, is_same_path, TangleReport, TangleStats};
use crate::readers::{FenceMarker, RawLines, WriteState};

/// Extracts fenced code from documents.
#[derive(Debug, Clone, Default)]
pub struct Tangler {
    config: Config,
    fence: FenceMarker,
}

impl Tangler {
    /// Creates a tangler from a validated configuration.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let fence = FenceMarker::new(&config.fence)?;
        Ok(Self { config, fence })
    }

    /// Returns the configuration in use.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Returns the path `document` tangles to.
    pub fn output_path(&self, document: &Path) -> PathBuf {
        derive_output_path(
            document,
            &self.config.document_extension,
            &self.config.source_extension,
        )
    }

    /// Derives the output path for `document`, applying the same-path policy.
    pub fn plan(&self, document: &Path) -> Result<PathBuf> {
        let output = self.output_path(document);
        if is_same_path(document, &output) && !self.config.same_path.allows_overwrite() {
            return Err(TangleError::SamePath { path: output });
        }
        Ok(output)
    }

    /// Tangles `document` into its derived output path.
    ///
    /// The output is truncated and rewritten on every call. Errors opening or
    /// reading the document, or creating or writing the output, are returned
    /// as-is; a failure mid-write can leave a partial output file behind.
    pub fn tangle(&self, document: &Path) -> Result<TangleReport> {
        let output = self.plan(document)?;

        let stats = if is_same_path(document, &output) {
            tracing::warn!(
                "{} does not end in .{}; it will be replaced by its own code",
                document.display(),
                self.config.document_extension
            );
            // Truncating first would leave nothing to read.
            let content = fs::read(document)?;
            let mut writer = BufWriter::new(File::create(&output)?);
            let stats = self.tangle_stream(content.as_slice(), &mut writer)?;
            writer.flush()?;
            stats
        } else {
            // The output is truncated even if the document turns out to be unreadable.
            let mut writer = BufWriter::new(File::create(&output)?);
            let input = BufReader::new(File::open(document)?);
            let stats = self.tangle_stream(input, &mut writer)?;
            writer.flush()?;
            stats
        };

        let report = TangleReport {
            document: document.to_path_buf(),
            output,
            stats,
        };
        if report.stats.is_unterminated() {
            tracing::debug!("{} ends inside a code block", document.display());
        }
        tracing::info!("Tangled {}", report);
        Ok(report)
    }

    /// Runs the fence state machine from `reader` into `writer`.
    ///
    /// Fence lines toggle the state and are never copied. Other lines are
    /// copied byte for byte while inside a block.
    pub fn tangle_stream<R, W>(&self, reader: R, mut writer: W) -> Result<TangleStats>
    where
        R: BufRead,
        W: Write,
    {
        let mut state = WriteState::Outside;
        let mut hasher = ContentHasher::new();
        let mut lines = RawLines::new(reader);
        let mut lines_written = 0;
        let mut fences = 0;

        while let Some(line) = lines.next() {
            let line = line?;
            if self.fence.is_marker(&line) {
                state = state.toggle();
                fences += 1;
                tracing::debug!("line {}: fence, now {:?}", lines.line_number(), state);
            } else if state.is_writing() {
                writer.write_all(&line)?;
                hasher.update(&line);
                lines_written += 1;
            }
        }

        Ok(TangleStats {
            lines_read: lines.line_number(),
            lines_written,
            fences,
            final_state: state,
            hexdigest: hasher.hexdigest(),
        })
    }

    /// Tangles an in-memory document.
    pub fn tangle_str(&self, input: &str) -> Result<String> {
        let mut out = Vec::new();
        self.tangle_stream(input.as_bytes(), &mut out)?;
        Ok(String::from_utf8(out)?)
    }
}

/// Tangles `document` with the default configuration.
pub fn tangle(document: &Path) -> Result<TangleReport> {
    Tangler::default().tangle(document)
}
