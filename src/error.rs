use std::io;
use std::path::PathBuf;

/// Run-level failures. Anything that goes wrong with a single shortcut is
/// recorded in its report row instead.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("scan root does not exist: {0}")]
    RootNotFound(PathBuf),

    #[error("scan root is not a directory: {0}")]
    RootNotDirectory(PathBuf),

    #[error("cannot create report file {path}: {source}")]
    CreateReport {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed while walking {root}: {source}")]
    Walk {
        root: PathBuf,
        #[source]
        source: walkdir::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
