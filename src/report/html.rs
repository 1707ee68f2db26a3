//! HTML source format
//!
//! The analysis run already rendered the HTML report; the tree is the
//! end artifact. Packaging it is a byte-for-byte recursive copy into
//! the destination directory.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::context::GenerationContext;
use super::error::ReportError;
use super::strategy::ReportFormatStrategy;

/// Entry point file that marks HTML data as present
const ENTRY_POINT: &str = "index.html";

/// Trees larger than this get a progress bar while copying
const PROGRESS_THRESHOLD: usize = 16;

pub struct HtmlReportStrategy;

impl ReportFormatStrategy for HtmlReportStrategy {
    fn name(&self) -> &'static str {
        "HTML"
    }

    fn data_present(&self, source: &Path) -> bool {
        source.join(ENTRY_POINT).is_file()
    }

    fn execute(&self, context: &mut GenerationContext<'_>) -> Result<(), ReportError> {
        let source = context.source_directory().to_path_buf();
        let destination = context.destination_directory().to_path_buf();

        let entries = collect_relative_entries(&source)?;
        let file_count = entries.iter().filter(|e| !e.is_dir).count();

        let bar = if !context.output().is_quiet() && file_count > PROGRESS_THRESHOLD {
            Some(
                context
                    .output()
                    .progress_bar(file_count as u64, "copying report files"),
            )
        } else {
            None
        };

        fs::create_dir_all(&destination).map_err(|cause| ReportError::CopyFailed {
            path: destination.clone(),
            cause,
        })?;

        for entry in &entries {
            let target = destination.join(&entry.relative);
            if entry.is_dir {
                fs::create_dir_all(&target).map_err(|cause| ReportError::CopyFailed {
                    path: target.clone(),
                    cause,
                })?;
                continue;
            }

            let origin = source.join(&entry.relative);
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent).map_err(|cause| ReportError::CopyFailed {
                    path: parent.to_path_buf(),
                    cause,
                })?;
            }
            // Colliding files at the destination are overwritten, last
            // write wins
            fs::copy(&origin, &target).map_err(|cause| ReportError::CopyFailed {
                path: origin.clone(),
                cause,
            })?;
            tracing::trace!("copied {}", target.display());
            if let Some(bar) = &bar {
                bar.inc(1);
            }
        }

        if let Some(bar) = bar {
            bar.finish_and_clear();
        }
        context
            .output()
            .verbose(&format!("copied {} report files", file_count));
        Ok(())
    }
}

struct RelativeEntry {
    relative: PathBuf,
    is_dir: bool,
}

/// Walk the source tree and return every entry below the root, as paths
/// relative to it. Directories are included so empty ones survive the
/// copy.
fn collect_relative_entries(source: &Path) -> Result<Vec<RelativeEntry>, ReportError> {
    let mut entries = Vec::new();
    for entry in WalkDir::new(source).min_depth(1) {
        let entry = entry.map_err(|err| ReportError::CopyFailed {
            path: err
                .path()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| source.to_path_buf()),
            cause: err.into(),
        })?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .expect("walkdir yields paths under its root")
            .to_path_buf();
        entries.push(RelativeEntry {
            relative,
            is_dir: entry.file_type().is_dir(),
        });
    }
    Ok(entries)
}
