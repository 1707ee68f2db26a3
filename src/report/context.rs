//! Per-invocation generation context

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::cli::Output;

/// Everything one report generation run needs, bundled once.
///
/// Built fresh per invocation and owned by the pipeline for the duration
/// of a single `generate` call. Construction does no I/O: the source
/// directory is assumed to have passed [`super::locator::validate`]
/// already, and creating the destination tree is the dispatcher's job,
/// so a context can be built and inspected in tests without side effects.
pub struct GenerationContext<'a> {
    locale: String,
    sink: Box<dyn Write + 'a>,
    source_directory: PathBuf,
    destination_directory: PathBuf,
    output: &'a Output,
    source_formats: Vec<String>,
}

impl<'a> GenerationContext<'a> {
    pub fn new(
        locale: impl Into<String>,
        sink: Box<dyn Write + 'a>,
        source_directory: impl Into<PathBuf>,
        destination_directory: impl Into<PathBuf>,
        output: &'a Output,
        source_formats: Vec<String>,
    ) -> Self {
        Self {
            locale: locale.into(),
            sink,
            source_directory: source_directory.into(),
            destination_directory: destination_directory.into(),
            output,
            source_formats,
        }
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// Write sink for inline site content, supplied by the embedding
    /// surface. The external-report pipeline carries it without writing
    /// to it.
    pub fn sink(&mut self) -> &mut dyn Write {
        &mut *self.sink
    }

    pub fn source_directory(&self) -> &Path {
        &self.source_directory
    }

    pub fn destination_directory(&self) -> &Path {
        &self.destination_directory
    }

    pub fn output(&self) -> &Output {
        self.output
    }

    /// Accepted source format names, in caller priority order
    pub fn source_formats(&self) -> &[String] {
        &self.source_formats
    }
}
