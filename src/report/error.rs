//! Typed errors for the report pipeline
//!
//! Every variant is fatal to the current invocation: failures are either
//! misconfiguration or environment faults, so nothing here is retried.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("could not find results directory [{}]", .0.display())]
    MissingDirectory(PathBuf),

    #[error("results directory [{}] is not readable", .0.display())]
    UnreadableDirectory(PathBuf),

    #[error("results directory [{}] is actually a file, it must be a directory", .0.display())]
    NotADirectory(PathBuf),

    #[error("no accepted source format has data present, tried [{}]", .0.join(", "))]
    NoSupportedFormat(Vec<String>),

    #[error("failed to copy report data at [{}]", .path.display())]
    CopyFailed {
        path: PathBuf,
        #[source]
        cause: std::io::Error,
    },

    #[error("unknown character encoding [{0}]")]
    UnknownEncoding(String),
}
